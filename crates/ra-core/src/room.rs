use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::direction::Direction;
use crate::item::{Item, ItemKind};

/// Stable identifier for a room, assigned in generation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RoomId(pub usize);

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}", self.0)
    }
}

/// A place the player can stand in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Stable key of this room.
    pub id: RoomId,
    /// Short heading.
    pub title: String,
    /// Body text, lore sentence included.
    pub description: String,
    /// Where each exit leads.
    pub exits: BTreeMap<Direction, RoomId>,
    /// Items lying here, in placement order.
    pub items: Vec<Item>,
    /// Whether entry is barred.
    pub locked: bool,
    /// What bars entry. Kept after unlocking for narration.
    pub lock_name: Option<String>,
}

impl Room {
    /// Create an empty, unlocked room.
    pub fn new(id: RoomId, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            exits: BTreeMap::new(),
            items: Vec::new(),
            locked: false,
            lock_name: None,
        }
    }

    /// Bar entry to this room behind the named obstacle.
    pub fn lock(&mut self, lock_name: impl Into<String>) {
        self.locked = true;
        self.lock_name = Some(lock_name.into());
    }

    /// The obstacle name, but only while the room is still locked.
    pub fn obstacle(&self) -> Option<&str> {
        if self.locked {
            self.lock_name.as_deref()
        } else {
            None
        }
    }

    /// Destination of the exit in the given direction.
    pub fn exit(&self, direction: Direction) -> Option<RoomId> {
        self.exits.get(&direction).copied()
    }

    /// Exit names in alphabetical order.
    pub fn exit_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.exits.keys().map(Direction::name).collect();
        names.sort_unstable();
        names
    }

    /// Find an item lying here by name.
    pub fn find_item(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.matches(name))
    }

    /// Whether an item of the given kind lies here.
    pub fn has_item(&self, kind: ItemKind) -> bool {
        self.items.iter().any(|item| item.kind == kind)
    }

    /// Remove an item by name and hand over ownership.
    pub fn take_item(&mut self, name: &str) -> Option<Item> {
        let pos = self.items.iter().position(|item| item.matches(name))?;
        Some(self.items.remove(pos))
    }
}
