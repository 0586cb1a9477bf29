//! Highest-Response-Ratio-Next.

use tracing::trace;

use crate::dispatching::{rules::HighestResponseRatio, select, RunContext, SelectionRule};

/// Dispatches the ready process with the highest
/// `(waiting + remaining) / remaining` and runs it to completion.
pub fn run(ctx: &mut RunContext<'_>) {
    while !ctx.is_done() {
        let Some(index) = select(&HighestResponseRatio, ctx) else {
            ctx.idle();
            continue;
        };
        let start = ctx.clock();
        let waited = ctx.waiting_time(index);
        let executed = ctx.run(index, ctx.remaining(index));
        trace!(
            rule = HighestResponseRatio.name(),
            process = index,
            start,
            waited,
            executed,
            "hrrn dispatch"
        );
    }
}
