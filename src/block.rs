use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockKind {
	Air,
	OakLog,
	BirchLog,
	SpruceLog,
	OakLeaves,
	BirchLeaves,
	SpruceLeaves,
	WartBlock,
	WarpedWartBlock,
	Dirt,
	Stone,
}

impl BlockKind {
	pub fn is_log(self) -> bool {
		matches!(self, BlockKind::OakLog | BlockKind::BirchLog | BlockKind::SpruceLog)
	}

	pub fn is_leaves(self) -> bool {
		matches!(
			self,
			BlockKind::OakLeaves | BlockKind::BirchLeaves | BlockKind::SpruceLeaves
		)
	}

	pub fn is_wart_block(self) -> bool {
		matches!(self, BlockKind::WartBlock | BlockKind::WarpedWartBlock)
	}
}

/// Per-leaf state the host grid tracks alongside the classification:
/// how far the leaf sits from the nearest trunk, and whether a player
/// placed it by hand (hand-placed leaves never decay).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LeafProps {
	pub distance: u8,
	pub persistent: bool,
}

impl LeafProps {
	pub fn new(distance: u8, persistent: bool) -> Self {
		Self { distance, persistent }
	}
}
