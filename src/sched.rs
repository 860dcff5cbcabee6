use std::cmp::Ordering;
use std::collections::BinaryHeap;

use serde::{Deserialize, Serialize};

use crate::coords::BlockPos;

/// Deferred work the engine runs on later ticks instead of blocking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskKind {
    /// Examine the axis neighbors of a just-removed block for decay.
    DecaySweep { pos: BlockPos },
    /// Re-validate and decay a single scheduled leaf.
    LeafDecay { pos: BlockPos },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledTask {
    pub tick: u64,
    /// Tiebreak within a tick: tasks scheduled first run first.
    pub seq: u64,
    pub kind: TaskKind,
}

// BinaryHeap is a max-heap; reverse the key so the earliest (tick, seq)
// surfaces first.
impl PartialOrd for ScheduledTask {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ScheduledTask {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .tick
            .cmp(&self.tick)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Priority queue of deferred tasks ordered by `(tick, seq)`.
#[derive(Debug, Clone, Default)]
pub struct TaskQueue {
    heap: BinaryHeap<ScheduledTask>,
    next_seq: u64,
}

impl TaskQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, tick: u64, kind: TaskKind) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(ScheduledTask { tick, seq, kind });
    }

    /// Pops the next task due at or before `now`, in (tick, seq) order.
    pub fn pop_due(&mut self, now: u64) -> Option<TaskKind> {
        if self.heap.peek().is_some_and(|t| t.tick <= now) {
            self.heap.pop().map(|t| t.kind)
        } else {
            None
        }
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
