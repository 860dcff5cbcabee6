use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::coords::BlockPos;
use crate::items::ItemStack;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u32);

/// The acting entity as the engine sees it: where drops land, what both
/// hands hold, and which permissions the host granted. Feedback messages
/// go into the mailbox for the host to deliver.
#[derive(Debug, Clone)]
pub struct Player {
    pub id: PlayerId,
    pub pos: BlockPos,
    pub main_hand: Option<ItemStack>,
    pub off_hand: Option<ItemStack>,
    pub permissions: HashSet<String>,
    pub messages: Vec<String>,
}

impl Player {
    pub fn new(id: PlayerId, pos: BlockPos) -> Self {
        Self {
            id,
            pos,
            main_hand: None,
            off_hand: None,
            permissions: HashSet::new(),
            messages: Vec::new(),
        }
    }

    pub fn has_permission(&self, permission: &str) -> bool {
        self.permissions.contains(permission)
    }

    pub fn grant(&mut self, permission: &str) {
        self.permissions.insert(permission.to_string());
    }

    pub fn send_message(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }
}
