//! Round-Robin.

use std::collections::VecDeque;
use std::num::NonZeroU32;

use tracing::trace;

use crate::dispatching::{ArrivalCursor, RunContext};

/// Serves a FIFO ready queue for `min(quantum, remaining)` per dispatch.
///
/// Arrivals up to the current instant are admitted before every dispatch.
/// A preempted process goes back to the tail first, so anything arriving
/// during or exactly at the end of its slice queues behind it.
pub fn run(ctx: &mut RunContext<'_>, quantum: NonZeroU32) {
    let mut arrivals = ArrivalCursor::new(ctx.table());
    let mut ready: VecDeque<usize> = VecDeque::new();

    while !ctx.is_done() {
        arrivals.admit(ctx, |arrived| ready.push_back(arrived));

        let Some(index) = ready.pop_front() else {
            ctx.idle();
            continue;
        };

        let start = ctx.clock();
        let slice = quantum.get().min(ctx.remaining(index));
        let executed = ctx.run(index, slice);
        trace!(process = index, start, executed, queued = ready.len(), "rr dispatch");

        if !ctx.is_finished(index) {
            ready.push_back(index);
        }
    }
}
