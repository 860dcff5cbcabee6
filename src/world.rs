use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::block::{BlockKind, LeafProps};
use crate::coords::{BlockPos, Direction};
use crate::items::ItemKind;

/// Cosmetic feedback the engine asks the host to play. Recorded rather
/// than rendered; the host drains this list after each tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    DecaySound(BlockPos),
    DecayParticles(BlockPos, BlockKind),
}

/// Sparse in-memory voxel grid. Unset positions read as `Air`; chunks are
/// loaded unless explicitly marked otherwise, so tests only mention
/// loading when they exercise unload races.
#[derive(Debug, Clone, Default)]
pub struct World {
    blocks: HashMap<BlockPos, BlockKind>,
    leaf_props: HashMap<BlockPos, LeafProps>,
    unloaded_chunks: HashSet<(i32, i32)>,
    pub drops: Vec<(BlockPos, ItemKind)>,
    pub effects: Vec<Effect>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn block(&self, pos: BlockPos) -> BlockKind {
        self.blocks.get(&pos).copied().unwrap_or(BlockKind::Air)
    }

    pub fn set_block(&mut self, pos: BlockPos, kind: BlockKind) {
        if kind == BlockKind::Air {
            self.blocks.remove(&pos);
        } else {
            self.blocks.insert(pos, kind);
        }
        if !kind.is_leaves() {
            self.leaf_props.remove(&pos);
        }
    }

    pub fn set_leaf(&mut self, pos: BlockPos, kind: BlockKind, props: LeafProps) {
        debug_assert!(kind.is_leaves(), "set_leaf with non-leaf kind");
        self.blocks.insert(pos, kind);
        self.leaf_props.insert(pos, props);
    }

    pub fn leaf_props(&self, pos: BlockPos) -> Option<LeafProps> {
        self.leaf_props.get(&pos).copied()
    }

    pub fn relative(&self, pos: BlockPos, dir: Direction) -> BlockPos {
        pos.relative(dir)
    }

    pub fn is_loaded(&self, pos: BlockPos) -> bool {
        !self.unloaded_chunks.contains(&pos.chunk())
    }

    pub fn set_chunk_loaded(&mut self, chunk: (i32, i32), loaded: bool) {
        if loaded {
            self.unloaded_chunks.remove(&chunk);
        } else {
            self.unloaded_chunks.insert(chunk);
        }
    }

    pub fn spawn_drop(&mut self, pos: BlockPos, item: ItemKind) {
        self.drops.push((pos, item));
    }

    pub fn play_effect(&mut self, effect: Effect) {
        self.effects.push(effect);
    }

    /// Removes the block the way the host would on a non-felling break:
    /// the classification goes to air and any leaf state is dropped with it.
    pub fn break_block(&mut self, pos: BlockPos) {
        self.set_block(pos, BlockKind::Air);
    }
}
