use serde::{Deserialize, Serialize};

use crate::coords::BlockPos;

/// A sequence of positions kept in non-increasing weight order, where the
/// weight is the squared distance from the scan seed. Insertion walks the
/// vector and places a new entry before the first strictly lighter one, so
/// of two equal-weight entries the first inserted is yielded first.
///
/// O(n) insertion is fine here: a queue never outgrows one connected
/// structure, and structures are small.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistanceQueue {
    entries: Vec<(BlockPos, u64)>,
}

impl DistanceQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, pos: BlockPos, weight: u64) {
        let at = self
            .entries
            .iter()
            .position(|&(_, w)| w < weight)
            .unwrap_or(self.entries.len());
        self.entries.insert(at, (pos, weight));
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True when 0 or 1 entries remain. The felling protocol uses this to
    /// leave the final block of a structure to the normal break path.
    pub fn has_at_most_one(&self) -> bool {
        self.entries.len() <= 1
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Removes and returns the heaviest remaining entry. Calling this on
    /// an empty queue is a caller bug; every call site checks first.
    pub fn poll_furthest(&mut self) -> BlockPos {
        debug_assert!(!self.entries.is_empty(), "poll_furthest on empty queue");
        self.entries.remove(0).0
    }
}
