use serde::{Deserialize, Serialize};

use crate::block::BlockKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ToolKind {
    WoodenAxe,
    StoneAxe,
    IronAxe,
    GoldenAxe,
    DiamondAxe,
    NetheriteAxe,
    WoodenHoe,
    StoneHoe,
    IronHoe,
    GoldenHoe,
    DiamondHoe,
    NetheriteHoe,
    Shears,
}

impl ToolKind {
    pub fn is_axe(self) -> bool {
        matches!(
            self,
            ToolKind::WoodenAxe
                | ToolKind::StoneAxe
                | ToolKind::IronAxe
                | ToolKind::GoldenAxe
                | ToolKind::DiamondAxe
                | ToolKind::NetheriteAxe
        )
    }

    pub fn is_hoe(self) -> bool {
        matches!(
            self,
            ToolKind::WoodenHoe
                | ToolKind::StoneHoe
                | ToolKind::IronHoe
                | ToolKind::GoldenHoe
                | ToolKind::DiamondHoe
                | ToolKind::NetheriteHoe
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemKind {
    Tool(ToolKind),
    Block(BlockKind),
}

/// A held or dropped item. `durability` is remaining uses and only
/// meaningful for tools; block items carry 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemStack {
    pub kind: ItemKind,
    pub durability: u32,
}

impl ItemStack {
    pub fn tool(kind: ToolKind, durability: u32) -> Self {
        Self {
            kind: ItemKind::Tool(kind),
            durability,
        }
    }

    pub fn block(kind: BlockKind) -> Self {
        Self {
            kind: ItemKind::Block(kind),
            durability: 0,
        }
    }

    pub fn tool_kind(&self) -> Option<ToolKind> {
        match self.kind {
            ItemKind::Tool(t) => Some(t),
            ItemKind::Block(_) => None,
        }
    }

    /// Spends one use of a tool. Returns true if the tool just broke and
    /// should be removed from the hand.
    pub fn reduce_durability(&mut self) -> bool {
        self.durability = self.durability.saturating_sub(1);
        self.durability == 0
    }
}
