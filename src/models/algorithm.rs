//! Algorithm specification.
//!
//! A closed set of the eight simulated disciplines. Quantum-driven variants
//! carry their quantum; everything else carries nothing.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU32;

use crate::error::ConfigurationError;

/// A scheduling discipline to simulate.
///
/// # Example
/// ```
/// use u_cpusim::models::Algorithm;
///
/// let rr = Algorithm::round_robin(4);
/// assert_eq!(rr.to_string(), "RR-4");
/// assert!(rr.validate().is_ok());
/// assert!(Algorithm::RoundRobin { quantum: None }.validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Algorithm {
    /// First-Come-First-Served.
    Fcfs,
    /// Round-Robin with a fixed quantum.
    RoundRobin {
        /// Time slice; required.
        quantum: Option<u32>,
    },
    /// Shortest-Process-Next (non-preemptive).
    Spn,
    /// Shortest-Remaining-Time (preemptive every tick).
    Srt,
    /// Highest-Response-Ratio-Next (non-preemptive).
    Hrrn,
    /// Feedback queue, quantum 1.
    FeedbackOne,
    /// Feedback queue with 32 levels and quantum `2^level`.
    FeedbackDoubling,
    /// Aging priority with a fixed quantum.
    Aging {
        /// Time slice; required.
        quantum: Option<u32>,
    },
}

impl Algorithm {
    /// Round-Robin with the given quantum.
    pub fn round_robin(quantum: u32) -> Self {
        Self::RoundRobin {
            quantum: Some(quantum),
        }
    }

    /// Aging with the given quantum.
    pub fn aging(quantum: u32) -> Self {
        Self::Aging {
            quantum: Some(quantum),
        }
    }

    /// All eight disciplines, quantum-driven ones with `quantum`.
    pub fn all(quantum: u32) -> [Self; 8] {
        [
            Self::Fcfs,
            Self::round_robin(quantum),
            Self::Spn,
            Self::Srt,
            Self::Hrrn,
            Self::FeedbackOne,
            Self::FeedbackDoubling,
            Self::aging(quantum),
        ]
    }

    /// Short label without quantum (e.g. `"RR"`, `"FB-2i"`).
    pub fn name(&self) -> &'static str {
        match self {
            Self::Fcfs => "FCFS",
            Self::RoundRobin { .. } => "RR",
            Self::Spn => "SPN",
            Self::Srt => "SRT",
            Self::Hrrn => "HRRN",
            Self::FeedbackOne => "FB-1",
            Self::FeedbackDoubling => "FB-2i",
            Self::Aging { .. } => "Aging",
        }
    }

    /// Long name.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Fcfs => "First Come First Served",
            Self::RoundRobin { .. } => "Round Robin",
            Self::Spn => "Shortest Process Next",
            Self::Srt => "Shortest Remaining Time",
            Self::Hrrn => "Highest Response Ratio Next",
            Self::FeedbackOne => "Feedback, q=1",
            Self::FeedbackDoubling => "Feedback, q=2^i",
            Self::Aging { .. } => "Aging",
        }
    }

    /// Whether the discipline can take the processor away mid-burst.
    pub fn is_preemptive(&self) -> bool {
        !matches!(self, Self::Fcfs | Self::Spn | Self::Hrrn)
    }

    /// Whether the discipline needs an explicit quantum.
    pub fn requires_quantum(&self) -> bool {
        matches!(self, Self::RoundRobin { .. } | Self::Aging { .. })
    }

    /// Raw quantum as given, if the variant carries one.
    pub fn quantum(&self) -> Option<u32> {
        match self {
            Self::RoundRobin { quantum } | Self::Aging { quantum } => *quantum,
            _ => None,
        }
    }

    /// Checks the quantum of quantum-driven variants.
    ///
    /// Returns the validated quantum for RR/Aging and `None` otherwise.
    pub fn validate(&self) -> Result<Option<NonZeroU32>, ConfigurationError> {
        if !self.requires_quantum() {
            return Ok(None);
        }
        let raw = self.quantum().ok_or(ConfigurationError::MissingQuantum {
            algorithm: self.name(),
        })?;
        NonZeroU32::new(raw)
            .map(Some)
            .ok_or(ConfigurationError::ZeroQuantum {
                algorithm: self.name(),
            })
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.quantum() {
            Some(q) => write!(f, "{}-{}", self.name(), q),
            None => f.write_str(self.name()),
        }
    }
}
