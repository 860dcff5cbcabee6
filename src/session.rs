use std::collections::HashMap;

use log::debug;

use crate::block::BlockKind;
use crate::coords::BlockPos;
use crate::queue::DistanceQueue;
use crate::scan::scan;
use crate::world::World;

/// Cache of in-progress felling sessions, keyed by the entry block the
/// player keeps hitting. A hit returns the queue left over from earlier
/// triggers; a miss runs the connectivity scan once.
///
/// Entries never expire on their own: the felling protocol evicts a key
/// once its queue is down to the last block or the session is abandoned,
/// so a structure regrown at the same coordinates starts fresh.
#[derive(Debug, Default)]
pub struct SessionTable {
    sessions: HashMap<BlockPos, DistanceQueue>,
}

impl SessionTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_create(
        &mut self,
        world: &World,
        entry: BlockPos,
        predicate: impl Fn(BlockKind) -> bool,
    ) -> &mut DistanceQueue {
        self.sessions.entry(entry).or_insert_with(|| {
            debug!("building felling session at {:?}", entry);
            scan(world, entry, predicate)
        })
    }

    pub fn contains(&self, entry: BlockPos) -> bool {
        self.sessions.contains_key(&entry)
    }

    pub fn evict(&mut self, entry: BlockPos) {
        if self.sessions.remove(&entry).is_some() {
            debug!("evicted felling session at {:?}", entry);
        }
    }
}
