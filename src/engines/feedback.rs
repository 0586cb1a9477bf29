//! Feedback queues.
//!
//! # Variants
//!
//! - **FB-1**: a single FIFO level served one tick at a time; every
//!   unfinished process goes back to the tail after each tick.
//! - **FB-2i**: [`LEVELS`] FIFO levels. Arrivals enter level 0 and the
//!   lowest non-empty level is always served. A served process that is
//!   still unfinished drops one level (staying at the last level once it
//!   gets there). The slice is a single rolling quantum: it starts at 1 and
//!   after each dispatch becomes `2^(i+1)`, where `i` is the level just
//!   served. A fresh arrival served right after a level-0 dispatch
//!   therefore gets 2 ticks.

use std::collections::VecDeque;
use std::num::NonZeroU32;

use tracing::trace;

use crate::dispatching::{ArrivalCursor, RunContext};

use super::round_robin;

/// Number of priority levels used by FB-2i.
pub const LEVELS: usize = 32;

/// FB-1.
pub fn run_unit(ctx: &mut RunContext<'_>) {
    round_robin::run(ctx, NonZeroU32::MIN);
}

/// FB-2i.
pub fn run_doubling(ctx: &mut RunContext<'_>) {
    let mut arrivals = ArrivalCursor::new(ctx.table());
    let mut levels: [VecDeque<usize>; LEVELS] = std::array::from_fn(|_| VecDeque::new());
    let mut quantum = 1u32;

    while !ctx.is_done() {
        arrivals.admit(ctx, |arrived| levels[0].push_back(arrived));

        let next = levels
            .iter_mut()
            .enumerate()
            .find_map(|(level, queue)| queue.pop_front().map(|index| (level, index)));
        let Some((level, index)) = next else {
            ctx.idle();
            continue;
        };

        let start = ctx.clock();
        let executed = ctx.run(index, quantum.min(ctx.remaining(index)));
        trace!(process = index, level, quantum, start, executed, "fb-2i dispatch");

        if !ctx.is_finished(index) {
            levels[(level + 1).min(LEVELS - 1)].push_back(index);
        }
        quantum = next_quantum(level);
    }
}

/// Slice for the dispatch after one served from `level`: `2^(level+1)`.
///
/// Saturates at `u32::MAX` for the last level.
pub fn next_quantum(level: usize) -> u32 {
    u32::try_from(level + 1)
        .ok()
        .and_then(|shift| 1u32.checked_shl(shift))
        .unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Process, ProcessTable};
    use pretty_assertions::assert_eq;

    fn simulate(
        engine: fn(&mut RunContext<'_>),
        processes: Vec<Process>,
        horizon: u32,
    ) -> (Vec<Option<usize>>, Vec<Option<u32>>) {
        let table = ProcessTable::from_processes(processes).unwrap();
        let mut ctx = RunContext::new(&table, horizon);
        engine(&mut ctx);
        let (timeline, finish) = ctx.into_parts();
        (timeline.trace(), finish)
    }

    #[test]
    fn test_next_quantum() {
        assert_eq!(next_quantum(0), 2);
        assert_eq!(next_quantum(2), 8);
        assert_eq!(next_quantum(30), 1 << 31);
        assert_eq!(next_quantum(31), u32::MAX);
    }

    #[test]
    fn test_fb1_requeues_before_admitting() {
        // B arrives at 1, right as A is put back in the queue
        let (trace, finish) = simulate(
            run_unit,
            vec![Process::new("A", 0, 3), Process::new("B", 1, 2)],
            6,
        );
        assert_eq!(
            trace,
            vec![Some(0), Some(0), Some(1), Some(0), Some(1), None]
        );
        assert_eq!(finish, vec![Some(4), Some(5)]);
    }

    #[test]
    fn test_fb2i_arrival_inherits_rolling_quantum() {
        let (trace, finish) = simulate(
            run_doubling,
            vec![Process::new("A", 0, 5), Process::new("B", 1, 2)],
            8,
        );
        // A@L0 for 1, B@L0 for 2 (quantum set by the L0 dispatch),
        // A@L1 for 2, A@L2 for the last 2
        assert_eq!(
            trace,
            vec![
                Some(0),
                Some(1),
                Some(1),
                Some(0),
                Some(0),
                Some(0),
                Some(0),
                None
            ]
        );
        assert_eq!(finish, vec![Some(7), Some(3)]);
    }

    #[test]
    fn test_fb2i_new_arrival_served_before_lower_levels() {
        // C lands at level 0 and is served before A's level-2 slice
        let (trace, finish) = simulate(
            run_doubling,
            vec![Process::new("A", 0, 8), Process::new("C", 3, 1)],
            10,
        );
        // A: t0 (L0), t1-2 (L1), then C at t3, then A at L2 for 2 and L3
        assert_eq!(trace[3], Some(1));
        assert_eq!(finish, vec![Some(9), Some(4)]);
    }

    #[test]
    fn test_fb2i_lone_process_still_drops() {
        let (trace, finish) = simulate(run_doubling, vec![Process::new("A", 0, 4)], 6);
        assert_eq!(&trace[..4], &[Some(0); 4]);
        assert_eq!(finish, vec![Some(4)]);
    }
}
