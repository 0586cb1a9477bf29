//! Run context and candidate selection rules.
//!
//! Every engine owns a [`RunContext`]; the non-FIFO engines pick the next
//! process with a [`SelectionRule`] through [`select`].
//!
//! # Usage
//!
//! ```
//! use u_cpusim::dispatching::{rules, select, RunContext};
//! use u_cpusim::models::{Process, ProcessTable};
//!
//! let table = ProcessTable::from_processes(vec![
//!     Process::new("A", 0, 5),
//!     Process::new("B", 0, 2),
//! ]).unwrap();
//! let ctx = RunContext::new(&table, 10);
//! assert_eq!(select(&rules::LeastRemaining, &ctx), Some(1));
//! ```

mod context;
pub mod rules;

pub use context::RunContext;
pub(crate) use context::ArrivalCursor;

use std::fmt::Debug;

/// Picks among ready processes.
///
/// # Tie Convention
/// `prefers` must return `true` only on a **strict** improvement, so that
/// equal candidates leave the lower-index incumbent in place.
pub trait SelectionRule: Debug {
    /// Rule name.
    fn name(&self) -> &'static str;

    /// Whether `candidate` strictly beats `incumbent` at the current instant.
    fn prefers(&self, candidate: usize, incumbent: usize, ctx: &RunContext<'_>) -> bool;
}

/// Scans ready processes in index order and returns the best one.
///
/// `None` means nothing is ready at the current instant.
pub fn select<R: SelectionRule + ?Sized>(rule: &R, ctx: &RunContext<'_>) -> Option<usize> {
    let mut best: Option<usize> = None;
    for index in 0..ctx.process_count() {
        if !ctx.is_ready(index) {
            continue;
        }
        best = match best {
            Some(incumbent) if !rule.prefers(index, incumbent, ctx) => Some(incumbent),
            _ => Some(index),
        };
    }
    best
}
