//! First-Come-First-Served.

use tracing::trace;

use crate::dispatching::RunContext;

/// Runs every process to completion in index order.
///
/// Input is expected sorted by arrival; the clock only waits for a process
/// that has not arrived yet, it never reorders the table. The processor
/// idles until that arrival.
pub fn run(ctx: &mut RunContext<'_>) {
    for index in 0..ctx.process_count() {
        if ctx.is_done() {
            break;
        }
        ctx.advance_to(ctx.table()[index].arrival);
        let start = ctx.clock();
        let executed = ctx.run(index, ctx.remaining(index));
        trace!(process = index, start, executed, "fcfs dispatch");
    }
}
