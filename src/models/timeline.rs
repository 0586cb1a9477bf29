//! Execution timeline.
//!
//! A `horizon × process_count` grid recording which process held the
//! processor at each instant. Engines only ever mark slots as running;
//! everything else stays idle.

use serde::{Deserialize, Serialize};

/// State of one process at one instant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Slot {
    /// Not holding the processor.
    #[default]
    Idle,
    /// Holding the processor.
    Running,
}

/// Per-instant execution grid, indexed `[time][process]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    horizon: usize,
    process_count: usize,
    slots: Vec<Slot>,
}

impl Timeline {
    /// Creates an all-idle grid.
    pub fn new(horizon: usize, process_count: usize) -> Self {
        Self {
            horizon,
            process_count,
            slots: vec![Slot::Idle; horizon * process_count],
        }
    }

    /// Number of instants covered.
    pub fn horizon(&self) -> usize {
        self.horizon
    }

    /// Number of process columns.
    pub fn process_count(&self) -> usize {
        self.process_count
    }

    /// Slot at `(time, process)`; `None` when out of range.
    pub fn get(&self, time: usize, process: usize) -> Option<Slot> {
        if time < self.horizon && process < self.process_count {
            self.slots.get(time * self.process_count + process).copied()
        } else {
            None
        }
    }

    /// Marks `process` as running at `time`.
    ///
    /// Returns `false` (and records nothing) when the coordinates fall
    /// outside the grid.
    pub fn mark_running(&mut self, time: usize, process: usize) -> bool {
        if time >= self.horizon || process >= self.process_count {
            return false;
        }
        match self.slots.get_mut(time * self.process_count + process) {
            Some(slot) => {
                *slot = Slot::Running;
                true
            }
            None => false,
        }
    }

    /// Whether `process` runs at `time`.
    pub fn is_running(&self, time: usize, process: usize) -> bool {
        self.get(time, process) == Some(Slot::Running)
    }

    /// Resets every slot to idle.
    pub fn reset(&mut self) {
        self.slots.fill(Slot::Idle);
    }

    /// Slots for all processes at `time`.
    pub fn row(&self, time: usize) -> Option<&[Slot]> {
        if time < self.horizon {
            let start = time * self.process_count;
            self.slots.get(start..start + self.process_count)
        } else {
            None
        }
    }

    /// Process running at `time`, if any.
    pub fn running_at(&self, time: usize) -> Option<usize> {
        self.row(time)?.iter().position(|&s| s == Slot::Running)
    }

    /// Number of instants `process` was running.
    pub fn running_count(&self, process: usize) -> usize {
        (0..self.horizon)
            .filter(|&t| self.is_running(t, process))
            .count()
    }

    /// Number of instants in which any process was running.
    pub fn busy_time(&self) -> usize {
        (0..self.horizon)
            .filter(|&t| self.running_at(t).is_some())
            .count()
    }

    /// Running process per instant (`None` = processor idle).
    pub fn trace(&self) -> Vec<Option<usize>> {
        (0..self.horizon).map(|t| self.running_at(t)).collect()
    }
}
