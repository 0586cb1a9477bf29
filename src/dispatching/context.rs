//! Per-run simulation state.

use crate::models::{ProcessTable, Timeline};

/// Runtime state owned by a single algorithm run.
///
/// Holds the virtual clock, remaining work and finish time per process, and
/// the run's private [`Timeline`]. The clock only moves forward and never
/// passes the horizon; work that would land at or beyond the horizon is not
/// executed.
#[derive(Debug, Clone)]
pub struct RunContext<'a> {
    table: &'a ProcessTable,
    horizon: u32,
    clock: u32,
    remaining: Vec<u32>,
    finish_times: Vec<Option<u32>>,
    finished: usize,
    timeline: Timeline,
}

impl<'a> RunContext<'a> {
    /// Creates a context at t=0 with a fresh, all-idle timeline.
    pub fn new(table: &'a ProcessTable, horizon: u32) -> Self {
        Self {
            table,
            horizon,
            clock: 0,
            remaining: table.iter().map(|p| p.service).collect(),
            finish_times: vec![None; table.len()],
            finished: 0,
            timeline: Timeline::new(horizon as usize, table.len()),
        }
    }

    /// The process table being simulated.
    pub fn table(&self) -> &'a ProcessTable {
        self.table
    }

    /// Number of processes.
    pub fn process_count(&self) -> usize {
        self.table.len()
    }

    /// Current instant.
    pub fn clock(&self) -> u32 {
        self.clock
    }

    /// Simulation horizon.
    pub fn horizon(&self) -> u32 {
        self.horizon
    }

    /// Service time still owed to `index`.
    pub fn remaining(&self, index: usize) -> u32 {
        self.remaining[index]
    }

    /// Finish time of `index`, if it has finished.
    pub fn finish_time(&self, index: usize) -> Option<u32> {
        self.finish_times[index]
    }

    /// Whether `index` has received all of its service.
    pub fn is_finished(&self, index: usize) -> bool {
        self.remaining[index] == 0
    }

    /// Whether `index` has arrived by the current instant.
    pub fn has_arrived(&self, index: usize) -> bool {
        self.table[index].arrival <= self.clock
    }

    /// Arrived and not yet finished.
    pub fn is_ready(&self, index: usize) -> bool {
        self.has_arrived(index) && !self.is_finished(index)
    }

    /// Time since `index` arrived (zero before arrival).
    pub fn waiting_time(&self, index: usize) -> u32 {
        self.clock.saturating_sub(self.table[index].arrival)
    }

    /// Whether every process has finished.
    pub fn all_finished(&self) -> bool {
        self.finished == self.table.len()
    }

    /// Whether the run is over: all finished or horizon reached.
    pub fn is_done(&self) -> bool {
        self.all_finished() || self.clock >= self.horizon
    }

    /// Lets one instant pass with the processor idle.
    pub(crate) fn idle(&mut self) {
        if self.clock < self.horizon {
            self.clock += 1;
        }
    }

    /// Moves the clock forward to `time`, capped at the horizon.
    pub(crate) fn advance_to(&mut self, time: u32) {
        self.clock = self.clock.max(time.min(self.horizon));
    }

    /// Runs `index` for up to `units` instants starting at the clock.
    ///
    /// Stops early when the process finishes or the horizon is reached.
    /// Returns the number of instants actually executed.
    pub(crate) fn run(&mut self, index: usize, units: u32) -> u32 {
        let mut executed = 0;
        while executed < units && self.remaining[index] > 0 && self.clock < self.horizon {
            self.timeline.mark_running(self.clock as usize, index);
            self.clock += 1;
            self.remaining[index] -= 1;
            executed += 1;
        }
        if executed > 0 && self.remaining[index] == 0 {
            self.finish_times[index] = Some(self.clock);
            self.finished += 1;
        }
        executed
    }

    /// Consumes the context, yielding the timeline and finish times.
    pub fn into_parts(self) -> (Timeline, Vec<Option<u32>>) {
        (self.timeline, self.finish_times)
    }
}

/// Admits processes into ready queues in (arrival, index) order.
#[derive(Debug, Clone)]
pub(crate) struct ArrivalCursor {
    order: Vec<usize>,
    next: usize,
}

impl ArrivalCursor {
    pub(crate) fn new(table: &ProcessTable) -> Self {
        Self {
            order: table.arrival_order(),
            next: 0,
        }
    }

    /// Hands every not-yet-admitted process with `arrival <= clock` to `admit`.
    pub(crate) fn admit(&mut self, ctx: &RunContext<'_>, mut admit: impl FnMut(usize)) {
        while let Some(&index) = self.order.get(self.next) {
            if !ctx.has_arrived(index) {
                break;
            }
            admit(index);
            self.next += 1;
        }
    }
}
