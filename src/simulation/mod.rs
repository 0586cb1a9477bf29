//! Run orchestration and completion statistics.
//!
//! `Simulator` sequences algorithm runs over one process table and hands
//! each engine's finish times to the statistics reducer.
//!
//! # Statistics
//!
//! Per process: finish time, turnaround, normalized turnaround. Per run:
//! means over finished processes, makespan and processor utilization.

mod orchestrator;
mod stats;

pub use orchestrator::{RunResult, SimulationRequest, Simulator};
pub use stats::{reduce, ProcessResult, RunSummary};
