//! Run orchestration.
//!
//! # Algorithm
//!
//! 1. Validate every requested algorithm; any problem aborts the whole batch.
//! 2. For each algorithm, in order, run its engine on a fresh context.
//! 3. Reduce finish times into per-process results and a run summary.
//!
//! Runs share nothing but the read-only process table, so they may also be
//! executed on scoped threads (one timeline per thread).

use std::thread;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::stats::{reduce, ProcessResult, RunSummary};
use crate::engines;
use crate::error::ConfigurationError;
use crate::models::{Algorithm, ProcessTable, Timeline};
use crate::validation;

/// Input container for a simulation batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Processes to simulate.
    pub processes: ProcessTable,
    /// Algorithms to run, in order.
    pub algorithms: Vec<Algorithm>,
    /// Number of ticks simulated per algorithm.
    pub horizon: u32,
}

impl SimulationRequest {
    /// Creates a request with no algorithms.
    pub fn new(processes: ProcessTable, horizon: u32) -> Self {
        Self {
            processes,
            algorithms: Vec::new(),
            horizon,
        }
    }

    /// Appends an algorithm.
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithms.push(algorithm);
        self
    }

    /// Appends several algorithms.
    pub fn with_algorithms(mut self, algorithms: impl IntoIterator<Item = Algorithm>) -> Self {
        self.algorithms.extend(algorithms);
        self
    }
}

/// Output of one algorithm run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunResult {
    /// Algorithm that produced this run.
    pub algorithm: Algorithm,
    /// Ticks simulated.
    pub horizon: u32,
    /// Execution grid.
    pub timeline: Timeline,
    /// Per-process statistics, in process table order.
    pub processes: Vec<ProcessResult>,
    /// Run-level indicators.
    pub summary: RunSummary,
}

impl RunResult {
    /// Result for the process named `name`.
    pub fn process(&self, name: &str) -> Option<&ProcessResult> {
        self.processes.iter().find(|p| p.name == name)
    }

    /// Finish time per process (`None` = unfinished).
    pub fn finish_times(&self) -> Vec<Option<u32>> {
        self.processes.iter().map(|p| p.finish_time).collect()
    }
}

/// Runs batches of algorithm specs over a process table.
///
/// # Example
///
/// ```
/// use u_cpusim::models::{Algorithm, Process, ProcessTable};
/// use u_cpusim::simulation::{SimulationRequest, Simulator};
///
/// let table = ProcessTable::from_processes(vec![
///     Process::new("P1", 0, 5),
///     Process::new("P2", 1, 3),
/// ]).unwrap();
/// let request = SimulationRequest::new(table, 10)
///     .with_algorithm(Algorithm::Fcfs)
///     .with_algorithm(Algorithm::round_robin(2));
///
/// let results = Simulator::new().run(&request).unwrap();
/// assert_eq!(results.len(), 2);
/// assert_eq!(results[0].process("P2").unwrap().finish_time, Some(8));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    parallel: bool,
}

impl Simulator {
    /// Creates a sequential simulator.
    pub fn new() -> Self {
        Self { parallel: false }
    }

    /// Runs each algorithm on its own scoped thread when `parallel` is set.
    ///
    /// Results are still returned in request order.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Runs every algorithm in `request`.
    ///
    /// # Errors
    /// Returns the first [`ConfigurationError`] found in the algorithm specs;
    /// no algorithm is run in that case.
    pub fn run(&self, request: &SimulationRequest) -> Result<Vec<RunResult>, ConfigurationError> {
        validation::validate_algorithms(&request.algorithms)?;

        info!(
            processes = request.processes.len(),
            algorithms = request.algorithms.len(),
            horizon = request.horizon,
            parallel = self.parallel,
            "starting simulation batch"
        );

        let results = if self.parallel {
            Self::run_parallel(request)?
        } else {
            request
                .algorithms
                .iter()
                .map(|algorithm| Self::run_one(&request.processes, algorithm, request.horizon))
                .collect::<Result<Vec<_>, _>>()?
        };

        info!(runs = results.len(), "simulation batch complete");
        Ok(results)
    }

    /// Runs a single algorithm on a fresh timeline.
    pub fn run_one(
        table: &ProcessTable,
        algorithm: &Algorithm,
        horizon: u32,
    ) -> Result<RunResult, ConfigurationError> {
        let outcome = engines::simulate(table, algorithm, horizon)?;
        let processes = reduce(table, &outcome.finish_times);
        let summary = RunSummary::calculate(&processes, &outcome.timeline);

        for name in &summary.unfinished {
            warn!(algorithm = %algorithm, process = %name, horizon, "process unfinished at horizon");
        }
        debug!(
            algorithm = %algorithm,
            finished = summary.finished_count,
            makespan = ?summary.makespan,
            utilization = summary.utilization,
            "run complete"
        );

        Ok(RunResult {
            algorithm: *algorithm,
            horizon,
            timeline: outcome.timeline,
            processes,
            summary,
        })
    }

    fn run_parallel(request: &SimulationRequest) -> Result<Vec<RunResult>, ConfigurationError> {
        thread::scope(|scope| {
            let handles: Vec<_> = request
                .algorithms
                .iter()
                .map(|algorithm| {
                    scope.spawn(move || {
                        Self::run_one(&request.processes, algorithm, request.horizon)
                    })
                })
                .collect();

            handles
                .into_iter()
                .map(|handle| {
                    handle
                        .join()
                        .unwrap_or_else(|payload| std::panic::resume_unwind(payload))
                })
                .collect()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Process, Slot};
    use crate::workload::{generate, WorkloadConfig};
    use pretty_assertions::assert_eq;

    fn table(processes: Vec<Process>) -> ProcessTable {
        ProcessTable::from_processes(processes).unwrap()
    }

    fn textbook() -> ProcessTable {
        table(vec![
            Process::new("A", 0, 3),
            Process::new("B", 2, 6),
            Process::new("C", 4, 4),
            Process::new("D", 6, 5),
            Process::new("E", 8, 2),
        ])
    }

    #[test]
    fn test_fcfs_statistics() {
        let request = SimulationRequest::new(
            table(vec![Process::new("P1", 0, 5), Process::new("P2", 1, 3)]),
            10,
        )
        .with_algorithm(Algorithm::Fcfs);

        let results = Simulator::new().run(&request).unwrap();
        let run = &results[0];
        assert_eq!(run.finish_times(), vec![Some(5), Some(8)]);
        assert_eq!(run.process("P1").unwrap().turnaround_time, Some(5));
        assert_eq!(run.process("P2").unwrap().turnaround_time, Some(7));
        assert!(run.summary.all_finished());
    }

    #[test]
    fn test_results_follow_request_order() {
        let request = SimulationRequest::new(textbook(), 20).with_algorithms([
            Algorithm::Hrrn,
            Algorithm::Fcfs,
            Algorithm::round_robin(4),
        ]);
        let results = Simulator::new().run(&request).unwrap();
        let order: Vec<Algorithm> = results.iter().map(|r| r.algorithm).collect();
        assert_eq!(
            order,
            vec![Algorithm::Hrrn, Algorithm::Fcfs, Algorithm::round_robin(4)]
        );
    }

    #[test]
    fn test_config_error_returns_no_results() {
        let request = SimulationRequest::new(textbook(), 20).with_algorithms([
            Algorithm::Fcfs,
            Algorithm::Aging { quantum: None },
        ]);
        let err = Simulator::new().run(&request).unwrap_err();
        assert_eq!(err, ConfigurationError::MissingQuantum { algorithm: "Aging" });
    }

    #[test]
    fn test_runs_do_not_share_timeline() {
        // SRT then FCFS: FCFS must not see SRT marks
        let request = SimulationRequest::new(
            table(vec![Process::new("P1", 0, 6), Process::new("P2", 1, 2)]),
            10,
        )
        .with_algorithms([Algorithm::Srt, Algorithm::Fcfs]);
        let results = Simulator::new().run(&request).unwrap();

        let fcfs = &results[1].timeline;
        assert_eq!(fcfs.running_count(0), 6);
        assert_eq!(fcfs.running_count(1), 2);
        assert_eq!(fcfs.get(1, 1), Some(Slot::Idle));
    }

    #[test]
    fn test_unfinished_process_is_explicit() {
        let request = SimulationRequest::new(
            table(vec![Process::new("A", 0, 4), Process::new("B", 0, 4)]),
            6,
        )
        .with_algorithm(Algorithm::Fcfs);
        let run = &Simulator::new().run(&request).unwrap()[0];

        let b = run.process("B").unwrap();
        assert!(!b.is_finished());
        assert_eq!(b.turnaround_time, None);
        assert_eq!(b.normalized_turnaround, None);
        assert_eq!(run.timeline.running_count(1), 2);
        assert_eq!(run.summary.unfinished, vec!["B"]);
    }

    #[test]
    fn test_rerun_is_identical() {
        let request = SimulationRequest::new(textbook(), 20).with_algorithms(Algorithm::all(2));
        let simulator = Simulator::new();
        let first = simulator.run(&request).unwrap();
        let second = simulator.run(&request).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let request = SimulationRequest::new(textbook(), 25).with_algorithms(Algorithm::all(3));
        let sequential = Simulator::new().run(&request).unwrap();
        let parallel = Simulator::new().with_parallel(true).run(&request).unwrap();
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_work_conservation_on_random_workloads() {
        let config = WorkloadConfig::new(6)
            .with_max_arrival(12)
            .with_service_range(1, 7);

        for seed in 0..20 {
            let processes = generate(&config, seed).unwrap();
            let horizon = 80;
            let request =
                SimulationRequest::new(processes.clone(), horizon).with_algorithms(Algorithm::all(3));

            for run in Simulator::new().run(&request).unwrap() {
                for (index, result) in run.processes.iter().enumerate() {
                    let marks = run.timeline.running_count(index);
                    let process = &processes[index];

                    // 12 + 6 * 7 < 80: everything finishes
                    let finish = result.finish_time.unwrap();
                    assert_eq!(marks, process.service as usize, "{} seed {seed}", run.algorithm);
                    assert_eq!(result.turnaround_time, Some(finish - process.arrival));
                    let expected = f64::from(finish - process.arrival) / f64::from(process.service);
                    assert!((result.normalized_turnaround.unwrap() - expected).abs() < 1e-10);

                    // no work before arrival
                    for t in 0..process.arrival as usize {
                        assert!(!run.timeline.is_running(t, index));
                    }
                }
            }
        }
    }

    #[test]
    fn test_short_horizon_never_overruns_service() {
        let config = WorkloadConfig::new(5).with_service_range(2, 6);
        for seed in 0..10 {
            let processes = generate(&config, seed).unwrap();
            let request = SimulationRequest::new(processes.clone(), 7).with_algorithms(Algorithm::all(2));
            for run in Simulator::new().run(&request).unwrap() {
                for (index, result) in run.processes.iter().enumerate() {
                    let marks = run.timeline.running_count(index);
                    assert!(marks <= processes[index].service as usize);
                    assert_eq!(result.is_finished(), marks == processes[index].service as usize);
                }
            }
        }
    }

    #[test]
    fn test_request_roundtrip_json() {
        let request = SimulationRequest::new(textbook(), 20).with_algorithm(Algorithm::aging(1));
        let json = serde_json::to_string(&request).unwrap();
        let back: SimulationRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(back.processes, request.processes);
        assert_eq!(back.algorithms, request.algorithms);
        assert_eq!(back.horizon, 20);
    }
}
