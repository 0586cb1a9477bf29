//! Shortest-Process-Next and Shortest-Remaining-Time.
//!
//! Both pick the ready process with the least remaining service. SPN keeps
//! the processor until the burst completes; SRT re-evaluates every tick, so
//! a strictly shorter arrival takes over immediately.

use tracing::trace;

use crate::dispatching::{rules::LeastRemaining, select, RunContext, SelectionRule};

/// Shortest-Process-Next (non-preemptive).
pub fn run_spn(ctx: &mut RunContext<'_>) {
    while !ctx.is_done() {
        match select(&LeastRemaining, ctx) {
            Some(index) => {
                let start = ctx.clock();
                let executed = ctx.run(index, ctx.remaining(index));
                trace!(
                    rule = LeastRemaining.name(),
                    process = index,
                    start,
                    executed,
                    "spn dispatch"
                );
            }
            None => ctx.idle(),
        }
    }
}

/// Shortest-Remaining-Time (preemptive every tick).
pub fn run_srt(ctx: &mut RunContext<'_>) {
    let mut current: Option<usize> = None;
    while !ctx.is_done() {
        let selected = select(&LeastRemaining, ctx);
        if selected != current {
            trace!(
                rule = LeastRemaining.name(),
                at = ctx.clock(),
                from = ?current,
                to = ?selected,
                "srt switch"
            );
            current = selected;
        }
        match selected {
            Some(index) => {
                ctx.run(index, 1);
            }
            None => ctx.idle(),
        }
    }
}
