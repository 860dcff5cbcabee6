use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::block::BlockKind;
use crate::items::ToolKind;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ToolTableError {
    #[error("structure tags {0:?} and {1:?} both match {2:?}")]
    OverlappingTags(BlockTag, BlockTag, BlockKind),
}

/// Named group of structure classifications a felling pair applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockTag {
    Logs,
    WartBlocks,
    Leaves,
}

impl BlockTag {
    pub fn matches(self, kind: BlockKind) -> bool {
        match self {
            BlockTag::Logs => kind.is_log(),
            BlockTag::WartBlocks => kind.is_wart_block(),
            BlockTag::Leaves => kind.is_leaves(),
        }
    }
}

/// Named group of tools allowed to trigger felling on the paired tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToolTag {
    Axes,
    Hoes,
    Shears,
}

impl ToolTag {
    pub fn matches(self, tool: ToolKind) -> bool {
        match self {
            ToolTag::Axes => tool.is_axe(),
            ToolTag::Hoes => tool.is_hoe(),
            ToolTag::Shears => tool == ToolKind::Shears,
        }
    }
}

/// The static structure-to-tool association. First match wins on lookup,
/// and `validate` rejects configurations where that would matter.
#[derive(Debug, Clone)]
pub struct ToolTable {
    pairs: Vec<(BlockTag, ToolTag)>,
}

impl Default for ToolTable {
    fn default() -> Self {
        Self {
            pairs: vec![
                (BlockTag::Logs, ToolTag::Axes),
                (BlockTag::WartBlocks, ToolTag::Hoes),
                (BlockTag::Leaves, ToolTag::Shears),
            ],
        }
    }
}

impl ToolTable {
    pub fn new(pairs: Vec<(BlockTag, ToolTag)>) -> Result<Self, ToolTableError> {
        let table = Self { pairs };
        table.validate()?;
        Ok(table)
    }

    /// Checks that no block classification is claimed by two structure
    /// tags. Run once at startup; overlap is a configuration defect.
    pub fn validate(&self) -> Result<(), ToolTableError> {
        const ALL: [BlockKind; 11] = [
            BlockKind::Air,
            BlockKind::OakLog,
            BlockKind::BirchLog,
            BlockKind::SpruceLog,
            BlockKind::OakLeaves,
            BlockKind::BirchLeaves,
            BlockKind::SpruceLeaves,
            BlockKind::WartBlock,
            BlockKind::WarpedWartBlock,
            BlockKind::Dirt,
            BlockKind::Stone,
        ];
        for kind in ALL {
            let mut owner: Option<BlockTag> = None;
            for &(tag, _) in &self.pairs {
                if tag.matches(kind) {
                    if let Some(first) = owner {
                        return Err(ToolTableError::OverlappingTags(first, tag, kind));
                    }
                    owner = Some(tag);
                }
            }
        }
        Ok(())
    }

    /// The pair whose structure side matches the broken block, if any.
    pub fn pair_for_block(&self, kind: BlockKind) -> Option<(BlockTag, ToolTag)> {
        self.pairs.iter().copied().find(|(tag, _)| tag.matches(kind))
    }

    /// Whether the tool appears on the tool side of any pair. Used by the
    /// mode-toggle gesture, which works with any felling tool in hand.
    pub fn is_felling_tool(&self, tool: ToolKind) -> bool {
        self.pairs.iter().any(|&(_, tag)| tag.matches(tool))
    }
}
