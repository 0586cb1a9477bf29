//! Process and process table models.
//!
//! A process is a single CPU burst: it becomes ready at `arrival` and needs
//! `service` time units of processor time. The table keeps input order, which
//! is the tie-break order for every engine.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::ConfigurationError;
use crate::validation;

/// A process to be simulated.
///
/// # Time Representation
/// All times are integer ticks relative to the simulation epoch (t=0).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique process name.
    pub name: String,
    /// Instant the process becomes ready.
    pub arrival: u32,
    /// Total processor time the process needs.
    pub service: u32,
}

impl Process {
    /// Creates a new process.
    pub fn new(name: impl Into<String>, arrival: u32, service: u32) -> Self {
        Self {
            name: name.into(),
            arrival,
            service,
        }
    }
}

/// Immutable, validated list of processes.
///
/// Indices are stable and follow input order. Deserialization runs the same
/// checks as [`ProcessTable::from_processes`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Process>", into = "Vec<Process>")]
pub struct ProcessTable {
    processes: Vec<Process>,
    index_by_name: HashMap<String, usize>,
}

impl ProcessTable {
    /// Builds a table, checking that `declared` matches the records supplied.
    ///
    /// # Errors
    /// - [`ConfigurationError::ProcessCountMismatch`] on a count mismatch
    /// - [`ConfigurationError::NonPositiveService`] if any service is zero
    /// - [`ConfigurationError::DuplicateProcessName`] if a name repeats
    pub fn new(declared: usize, processes: Vec<Process>) -> Result<Self, ConfigurationError> {
        if let Some(err) = validation::process_errors(declared, &processes).into_iter().next() {
            return Err(err);
        }

        let index_by_name = processes
            .iter()
            .enumerate()
            .map(|(index, process)| (process.name.clone(), index))
            .collect();

        Ok(Self {
            processes,
            index_by_name,
        })
    }

    /// Builds a table whose declared count is the number of records.
    pub fn from_processes(processes: Vec<Process>) -> Result<Self, ConfigurationError> {
        Self::new(processes.len(), processes)
    }

    /// Number of processes.
    pub fn len(&self) -> usize {
        self.processes.len()
    }

    /// Whether the table has no processes.
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    /// Process at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Process> {
        self.processes.get(index)
    }

    /// Index of the process named `name`.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.index_by_name.get(name).copied()
    }

    /// Processes in input order.
    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    /// Iterates processes in input order.
    pub fn iter(&self) -> std::slice::Iter<'_, Process> {
        self.processes.iter()
    }

    /// Sum of all service times.
    pub fn total_service(&self) -> u64 {
        self.processes.iter().map(|p| u64::from(p.service)).sum()
    }

    /// Indices ordered by arrival; equal arrivals keep input order.
    pub fn arrival_order(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.processes.len()).collect();
        order.sort_by_key(|&i| self.processes[i].arrival);
        order
    }
}

impl std::ops::Index<usize> for ProcessTable {
    type Output = Process;

    fn index(&self, index: usize) -> &Self::Output {
        &self.processes[index]
    }
}

impl TryFrom<Vec<Process>> for ProcessTable {
    type Error = ConfigurationError;

    fn try_from(processes: Vec<Process>) -> Result<Self, Self::Error> {
        Self::from_processes(processes)
    }
}

impl From<ProcessTable> for Vec<Process> {
    fn from(table: ProcessTable) -> Self {
        table.processes
    }
}

impl<'a> IntoIterator for &'a ProcessTable {
    type Item = &'a Process;
    type IntoIter = std::slice::Iter<'a, Process>;

    fn into_iter(self) -> Self::IntoIter {
        self.processes.iter()
    }
}
