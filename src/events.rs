use serde::{Deserialize, Serialize};

use crate::coords::BlockPos;
use crate::players::PlayerId;
use crate::world::World;

/// A block is about to break. Cancelling suppresses the destruction; the
/// engine both consumes these from the host and emits synthetic ones so
/// protection layers observe felled blocks like any other break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakEvent {
    pub pos: BlockPos,
    pub player: PlayerId,
    pub cancelled: bool,
}

impl BreakEvent {
    pub fn new(pos: BlockPos, player: PlayerId) -> Self {
        Self {
            pos,
            player,
            cancelled: false,
        }
    }

    pub fn cancel(&mut self) {
        self.cancelled = true;
    }
}

/// A leaf is about to decay. Cancellable for the same reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecayEvent {
    pub pos: BlockPos,
    pub cancelled: bool,
}

impl DecayEvent {
    pub fn new(pos: BlockPos) -> Self {
        Self {
            pos,
            cancelled: false,
        }
    }

    pub fn cancel(&mut self) {
        self.cancelled = true;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractAction {
    LeftClickAir,
    LeftClickBlock,
    RightClickAir,
    RightClickBlock,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Hand {
    Main,
    Off,
}

/// Observer seam for external listeners (protection plugins and the
/// like). Hooks see synthetic break and decay notifications before the
/// engine acts and may cancel them.
pub trait WorldHook {
    fn on_break(&mut self, _event: &mut BreakEvent, _world: &World) {}
    fn on_decay(&mut self, _event: &mut DecayEvent, _world: &World) {}
}
