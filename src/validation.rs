//! Input validation for simulation requests.
//!
//! Checks structural integrity of the process list and algorithm
//! specifications before anything is simulated. Detects:
//! - Declared/supplied process count mismatches
//! - Non-positive service times
//! - Duplicate process names
//! - Missing or zero quanta for RR and Aging
//!
//! [`ProcessTable::new`](crate::models::ProcessTable::new) and
//! [`Simulator::run`](crate::simulation::Simulator::run) stop at the first
//! problem; [`validate_input`] reports all of them.

use std::collections::HashSet;

use crate::error::ConfigurationError;
use crate::models::{Algorithm, Process};

/// Validation result carrying every detected problem.
pub type ValidationResult = Result<(), Vec<ConfigurationError>>;

/// Validates raw simulator input.
///
/// Checks:
/// 1. `declared` equals the number of process records
/// 2. Every service time is positive
/// 3. Process names are unique
/// 4. RR and Aging specs carry a positive quantum
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(
    declared: usize,
    processes: &[Process],
    algorithms: &[Algorithm],
) -> ValidationResult {
    let mut errors = process_errors(declared, processes);
    errors.extend(algorithm_errors(algorithms));

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates algorithm specs, stopping at the first problem.
pub fn validate_algorithms(algorithms: &[Algorithm]) -> Result<(), ConfigurationError> {
    match algorithm_errors(algorithms).into_iter().next() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

pub(crate) fn process_errors(declared: usize, processes: &[Process]) -> Vec<ConfigurationError> {
    let mut errors = Vec::new();

    if declared != processes.len() {
        errors.push(ConfigurationError::ProcessCountMismatch {
            declared,
            supplied: processes.len(),
        });
    }

    let mut names = HashSet::new();
    for process in processes {
        if process.service == 0 {
            errors.push(ConfigurationError::NonPositiveService {
                name: process.name.clone(),
            });
        }
        if !names.insert(process.name.as_str()) {
            errors.push(ConfigurationError::DuplicateProcessName {
                name: process.name.clone(),
            });
        }
    }

    errors
}

pub(crate) fn algorithm_errors(algorithms: &[Algorithm]) -> Vec<ConfigurationError> {
    algorithms
        .iter()
        .filter_map(|algorithm| algorithm.validate().err())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_processes() -> Vec<Process> {
        vec![
            Process::new("A", 0, 3),
            Process::new("B", 2, 6),
            Process::new("C", 4, 4),
        ]
    }

    #[test]
    fn test_valid_input() {
        let processes = sample_processes();
        assert!(validate_input(3, &processes, &Algorithm::all(2)).is_ok());
    }

    #[test]
    fn test_count_mismatch() {
        let errors = validate_input(5, &sample_processes(), &[]).unwrap_err();
        assert_eq!(
            errors,
            vec![ConfigurationError::ProcessCountMismatch {
                declared: 5,
                supplied: 3
            }]
        );
    }

    #[test]
    fn test_zero_service() {
        let processes = vec![Process::new("A", 0, 0)];
        let errors = validate_input(1, &processes, &[]).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, ConfigurationError::NonPositiveService { .. })));
    }

    #[test]
    fn test_duplicate_name() {
        let processes = vec![Process::new("A", 0, 1), Process::new("A", 2, 1)];
        let errors = validate_input(2, &processes, &[]).unwrap_err();
        assert_eq!(
            errors,
            vec![ConfigurationError::DuplicateProcessName { name: "A".into() }]
        );
    }

    #[test]
    fn test_quantum_checks() {
        let algorithms = [
            Algorithm::Fcfs,
            Algorithm::RoundRobin { quantum: None },
            Algorithm::aging(0),
        ];
        assert_eq!(
            validate_algorithms(&algorithms),
            Err(ConfigurationError::MissingQuantum { algorithm: "RR" })
        );

        let errors = validate_input(3, &sample_processes(), &algorithms).unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_multiple_errors() {
        let processes = vec![Process::new("A", 0, 0), Process::new("A", 1, 0)];
        let errors =
            validate_input(3, &processes, &[Algorithm::Aging { quantum: None }]).unwrap_err();
        // mismatch + 2 zero services + duplicate + missing quantum
        assert_eq!(errors.len(), 5);
    }
}
