//! Completion statistics.
//!
//! Derives per-process turnaround figures from finish times and summarizes
//! a run.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Turnaround | finish - arrival |
//! | Normalized turnaround | turnaround / service |
//! | Makespan | Latest finish time |
//! | Utilization | Busy instants / horizon |
//!
//! A process without a finish time has no turnaround either: both derived
//! values stay `None` and the process is left out of the means.

use serde::{Deserialize, Serialize};

use crate::models::{ProcessTable, Timeline};

/// Statistics for one process in one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessResult {
    /// Process name.
    pub name: String,
    /// Arrival instant.
    pub arrival: u32,
    /// Service time.
    pub service: u32,
    /// Instant the last unit of service completed.
    pub finish_time: Option<u32>,
    /// `finish_time - arrival`.
    pub turnaround_time: Option<u32>,
    /// `turnaround_time / service`.
    pub normalized_turnaround: Option<f64>,
}

impl ProcessResult {
    /// Whether the process finished within the horizon.
    pub fn is_finished(&self) -> bool {
        self.finish_time.is_some()
    }
}

/// Builds per-process results from finish times.
///
/// `finish_times` is indexed like `table`. Pure: no side effects.
pub fn reduce(table: &ProcessTable, finish_times: &[Option<u32>]) -> Vec<ProcessResult> {
    table
        .iter()
        .zip(finish_times)
        .map(|(process, &finish_time)| {
            let turnaround_time = finish_time.map(|f| f.saturating_sub(process.arrival));
            let normalized_turnaround =
                turnaround_time.map(|t| f64::from(t) / f64::from(process.service));
            ProcessResult {
                name: process.name.clone(),
                arrival: process.arrival,
                service: process.service,
                finish_time,
                turnaround_time,
                normalized_turnaround,
            }
        })
        .collect()
}

/// Run-level indicators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Number of processes that finished.
    pub finished_count: usize,
    /// Names of processes the horizon cut off.
    pub unfinished: Vec<String>,
    /// Mean turnaround over finished processes.
    pub mean_turnaround: Option<f64>,
    /// Mean normalized turnaround over finished processes.
    pub mean_normalized_turnaround: Option<f64>,
    /// Latest finish time.
    pub makespan: Option<u32>,
    /// Instants during which the processor was busy.
    pub busy_time: usize,
    /// `busy_time / horizon` (0.0 for an empty horizon).
    pub utilization: f64,
}

impl RunSummary {
    /// Computes the summary of a run.
    pub fn calculate(results: &[ProcessResult], timeline: &Timeline) -> Self {
        let mut finished_count = 0usize;
        let mut total_turnaround = 0.0;
        let mut total_normalized = 0.0;
        let mut makespan: Option<u32> = None;
        let mut unfinished = Vec::new();

        for result in results {
            match (result.finish_time, result.turnaround_time, result.normalized_turnaround) {
                (Some(finish), Some(turnaround), Some(normalized)) => {
                    finished_count += 1;
                    total_turnaround += f64::from(turnaround);
                    total_normalized += normalized;
                    makespan = Some(makespan.map_or(finish, |m| m.max(finish)));
                }
                _ => unfinished.push(result.name.clone()),
            }
        }

        let mean = |total: f64| {
            if finished_count == 0 {
                None
            } else {
                Some(total / finished_count as f64)
            }
        };

        let busy_time = timeline.busy_time();
        let utilization = if timeline.horizon() == 0 {
            0.0
        } else {
            busy_time as f64 / timeline.horizon() as f64
        };

        Self {
            finished_count,
            unfinished,
            mean_turnaround: mean(total_turnaround),
            mean_normalized_turnaround: mean(total_normalized),
            makespan,
            busy_time,
            utilization,
        }
    }

    /// Whether every process finished.
    pub fn all_finished(&self) -> bool {
        self.unfinished.is_empty()
    }
}
