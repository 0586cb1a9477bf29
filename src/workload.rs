//! Random workload generation.
//!
//! Produces seeded process tables for experiments and property tests.
//! Arrivals are sorted, so input order matches arrival order the way a
//! hand-written workload usually does.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::ConfigurationError;
use crate::models::{Process, ProcessTable};

/// Parameters for [`generate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkloadConfig {
    /// Number of processes.
    pub process_count: usize,
    /// Latest possible arrival (inclusive).
    pub max_arrival: u32,
    /// Shortest possible service time (inclusive, > 0).
    pub min_service: u32,
    /// Longest possible service time (inclusive).
    pub max_service: u32,
}

impl WorkloadConfig {
    /// `process_count` processes, all arriving at 0, service in `1..=10`.
    pub fn new(process_count: usize) -> Self {
        Self {
            process_count,
            max_arrival: 0,
            min_service: 1,
            max_service: 10,
        }
    }

    /// Sets the latest arrival.
    pub fn with_max_arrival(mut self, max_arrival: u32) -> Self {
        self.max_arrival = max_arrival;
        self
    }

    /// Sets the inclusive service time range.
    pub fn with_service_range(mut self, min_service: u32, max_service: u32) -> Self {
        self.min_service = min_service;
        self.max_service = max_service;
        self
    }

    fn validate(&self) -> Result<(), ConfigurationError> {
        if self.min_service == 0 {
            return Err(ConfigurationError::InvalidWorkload {
                reason: "minimum service time must be positive".into(),
            });
        }
        if self.min_service > self.max_service {
            return Err(ConfigurationError::InvalidWorkload {
                reason: format!(
                    "service range {}..={} is empty",
                    self.min_service, self.max_service
                ),
            });
        }
        Ok(())
    }
}

/// Generates processes `P1..Pn`; the same seed always yields the same table.
pub fn generate(config: &WorkloadConfig, seed: u64) -> Result<ProcessTable, ConfigurationError> {
    config.validate()?;
    let mut rng = StdRng::seed_from_u64(seed);

    let mut arrivals: Vec<u32> = (0..config.process_count)
        .map(|_| rng.random_range(0..=config.max_arrival))
        .collect();
    arrivals.sort_unstable();

    let processes = arrivals
        .into_iter()
        .enumerate()
        .map(|(i, arrival)| {
            let service = rng.random_range(config.min_service..=config.max_service);
            Process::new(format!("P{}", i + 1), arrival, service)
        })
        .collect();

    ProcessTable::from_processes(processes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_respects_ranges() {
        let config = WorkloadConfig::new(50)
            .with_max_arrival(20)
            .with_service_range(3, 5);
        let table = generate(&config, 7).unwrap();

        assert_eq!(table.len(), 50);
        assert_eq!(table.index_of("P1"), Some(0));
        let mut last_arrival = 0;
        for p in &table {
            assert!(p.arrival <= 20);
            assert!(p.arrival >= last_arrival);
            assert!((3..=5).contains(&p.service));
            last_arrival = p.arrival;
        }
    }

    #[test]
    fn test_generate_is_deterministic() {
        let config = WorkloadConfig::new(10).with_max_arrival(5);
        assert_eq!(generate(&config, 42).unwrap(), generate(&config, 42).unwrap());
    }

    #[test]
    fn test_invalid_ranges() {
        let zero = WorkloadConfig::new(3).with_service_range(0, 4);
        assert!(matches!(
            generate(&zero, 1),
            Err(ConfigurationError::InvalidWorkload { .. })
        ));

        let empty = WorkloadConfig::new(3).with_service_range(5, 4);
        assert!(generate(&empty, 1).is_err());
    }
}
