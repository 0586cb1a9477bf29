//! Aging.
//!
//! Every process starts at priority 0. For each tick a process has arrived,
//! is unfinished and is not the one running, its priority grows by one. The
//! highest-priority ready process is dispatched for `min(quantum, remaining)`
//! ticks and its own priority drops back to 0 at dispatch, so it has to age
//! again before it can win the processor back.

use std::num::NonZeroU32;

use tracing::trace;

use crate::dispatching::{rules::HighestPriority, select, RunContext, SelectionRule};

/// Runs the aging discipline with the given quantum.
pub fn run(ctx: &mut RunContext<'_>, quantum: NonZeroU32) {
    let mut priority = vec![0u32; ctx.process_count()];

    while !ctx.is_done() {
        let rule = HighestPriority::new(&priority);
        let Some(index) = select(&rule, ctx) else {
            ctx.idle();
            continue;
        };
        trace!(
            rule = rule.name(),
            process = index,
            start = ctx.clock(),
            priority = priority[index],
            "aging dispatch"
        );
        priority[index] = 0;

        let slice = quantum.get().min(ctx.remaining(index));
        for _ in 0..slice {
            let tick = ctx.clock();
            if ctx.run(index, 1) == 0 {
                break;
            }
            age_waiting(ctx, &mut priority, index, tick);
        }
    }
}

/// Raises the priority of every process that waited during `tick`.
fn age_waiting(ctx: &RunContext<'_>, priority: &mut [u32], running: usize, tick: u32) {
    for (other, process) in ctx.table().iter().enumerate() {
        if other != running && process.arrival <= tick && !ctx.is_finished(other) {
            priority[other] = priority[other].saturating_add(1);
        }
    }
}
