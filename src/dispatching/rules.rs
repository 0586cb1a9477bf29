//! Built-in selection rules.
//!
//! # Rules
//!
//! - **`LeastRemaining`**: SPN / SRT
//! - **`HighestResponseRatio`**: HRRN
//! - **`HighestPriority`**: Aging
//!
//! Every rule answers "does the candidate strictly beat the incumbent?".
//! Equal candidates never displace the incumbent, so the lowest index wins.

use super::{RunContext, SelectionRule};

/// Least remaining service time.
///
/// Used once per dispatch by SPN (run to completion) and once per tick by
/// SRT (preemptive).
#[derive(Debug, Clone, Copy)]
pub struct LeastRemaining;

impl SelectionRule for LeastRemaining {
    fn name(&self) -> &'static str {
        "least-remaining"
    }

    fn prefers(&self, candidate: usize, incumbent: usize, ctx: &RunContext<'_>) -> bool {
        ctx.remaining(candidate) < ctx.remaining(incumbent)
    }
}

/// Highest response ratio `(waiting + remaining) / remaining`.
///
/// Ratios are compared exactly by cross-multiplication:
/// `(w_c + r_c) * r_i > (w_i + r_i) * r_c`.
#[derive(Debug, Clone, Copy)]
pub struct HighestResponseRatio;

impl HighestResponseRatio {
    fn terms(index: usize, ctx: &RunContext<'_>) -> (u64, u64) {
        let remaining = u64::from(ctx.remaining(index));
        (u64::from(ctx.waiting_time(index)) + remaining, remaining)
    }
}

impl SelectionRule for HighestResponseRatio {
    fn name(&self) -> &'static str {
        "highest-response-ratio"
    }

    fn prefers(&self, candidate: usize, incumbent: usize, ctx: &RunContext<'_>) -> bool {
        let (num_c, den_c) = Self::terms(candidate, ctx);
        let (num_i, den_i) = Self::terms(incumbent, ctx);
        num_c * den_i > num_i * den_c
    }
}

/// Highest aging priority.
///
/// Priorities are owned by the aging engine and lent to the rule for a
/// single selection.
#[derive(Debug, Clone, Copy)]
pub struct HighestPriority<'p> {
    priorities: &'p [u32],
}

impl<'p> HighestPriority<'p> {
    /// Wraps the current priority vector (indexed like the process table).
    pub fn new(priorities: &'p [u32]) -> Self {
        Self { priorities }
    }
}

impl SelectionRule for HighestPriority<'_> {
    fn name(&self) -> &'static str {
        "highest-priority"
    }

    fn prefers(&self, candidate: usize, incumbent: usize, _ctx: &RunContext<'_>) -> bool {
        self.priorities[candidate] > self.priorities[incumbent]
    }
}
