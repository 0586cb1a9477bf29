//! Algorithm engines.
//!
//! One routine per discipline. Each engine drives a private
//! [`RunContext`]: it reads the process table and writes only the context's
//! timeline and finish times. Engines are deterministic and never look at
//! the wall clock.
//!
//! # Shared conventions
//!
//! - The clock starts at 0 and only moves forward.
//! - Nothing is executed at or beyond the horizon.
//! - Ties go to the lowest process index.
//!
//! # References
//!
//! - Stallings (2018), "Operating Systems: Internals and Design Principles", Ch. 9
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5

pub mod aging;
pub mod fcfs;
pub mod feedback;
pub mod hrrn;
pub mod round_robin;
pub mod shortest;

use std::num::NonZeroU32;

use tracing::debug;

use crate::dispatching::RunContext;
use crate::error::ConfigurationError;
use crate::models::{Algorithm, ProcessTable, Timeline};

/// Raw output of one engine run.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineOutcome {
    /// Execution grid for this run.
    pub timeline: Timeline,
    /// Finish time per process; `None` if the horizon cut it off.
    pub finish_times: Vec<Option<u32>>,
}

/// Runs `algorithm` over `table` for `horizon` ticks on a fresh context.
///
/// # Errors
/// [`ConfigurationError::MissingQuantum`] / [`ConfigurationError::ZeroQuantum`]
/// for RR or Aging without a usable quantum.
pub fn simulate(
    table: &ProcessTable,
    algorithm: &Algorithm,
    horizon: u32,
) -> Result<EngineOutcome, ConfigurationError> {
    let mut ctx = RunContext::new(table, horizon);

    match algorithm {
        Algorithm::Fcfs => fcfs::run(&mut ctx),
        Algorithm::RoundRobin { .. } => round_robin::run(&mut ctx, required_quantum(algorithm)?),
        Algorithm::Spn => shortest::run_spn(&mut ctx),
        Algorithm::Srt => shortest::run_srt(&mut ctx),
        Algorithm::Hrrn => hrrn::run(&mut ctx),
        Algorithm::FeedbackOne => feedback::run_unit(&mut ctx),
        Algorithm::FeedbackDoubling => feedback::run_doubling(&mut ctx),
        Algorithm::Aging { .. } => aging::run(&mut ctx, required_quantum(algorithm)?),
    }

    debug!(
        algorithm = %algorithm,
        description = algorithm.description(),
        ended_at = ctx.clock(),
        all_finished = ctx.all_finished(),
        "engine finished"
    );

    let (timeline, finish_times) = ctx.into_parts();
    Ok(EngineOutcome {
        timeline,
        finish_times,
    })
}

fn required_quantum(algorithm: &Algorithm) -> Result<NonZeroU32, ConfigurationError> {
    algorithm
        .validate()?
        .ok_or(ConfigurationError::MissingQuantum {
            algorithm: algorithm.name(),
        })
}
