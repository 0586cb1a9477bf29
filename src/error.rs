//! Configuration errors.
//!
//! Every error here is detected before the first engine runs. A simulation
//! either returns results for every requested algorithm or none at all.
//!
//! A process the horizon cuts off is *not* an error: it surfaces as a
//! `None` finish time in [`ProcessResult`](crate::simulation::ProcessResult).

use thiserror::Error;

/// Malformed or inconsistent simulator input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// The declared process count does not match the records supplied.
    #[error("declared {declared} processes but {supplied} were supplied")]
    ProcessCountMismatch {
        /// Count announced by the caller.
        declared: usize,
        /// Number of process records actually given.
        supplied: usize,
    },

    /// A process has a service time of zero.
    #[error("process '{name}' has non-positive service time")]
    NonPositiveService {
        /// Offending process.
        name: String,
    },

    /// Two processes share a name, so name lookup would be ambiguous.
    #[error("duplicate process name '{name}'")]
    DuplicateProcessName {
        /// The repeated name.
        name: String,
    },

    /// A quantum-driven algorithm was requested without a quantum.
    #[error("algorithm {algorithm} requires a quantum")]
    MissingQuantum {
        /// Label of the algorithm (e.g. `"RR"`).
        algorithm: &'static str,
    },

    /// A quantum-driven algorithm was given a quantum of zero.
    #[error("algorithm {algorithm} requires a positive quantum")]
    ZeroQuantum {
        /// Label of the algorithm.
        algorithm: &'static str,
    },

    /// Random workload parameters describe an empty or invalid range.
    #[error("invalid workload: {reason}")]
    InvalidWorkload {
        /// What is wrong with the configuration.
        reason: String,
    },
}
