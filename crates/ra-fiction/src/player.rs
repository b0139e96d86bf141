//! Player state management.

use ra_core::{Item, ItemKind, RoomId};

/// The player's current state in the fiction session.
#[derive(Debug, Clone)]
pub struct PlayerState {
    /// Current room.
    pub location: RoomId,
    /// Items carried, in pickup order.
    pub inventory: Vec<Item>,
    /// Set once the lens has been held to the obstacle. Never cleared.
    pub used_lens: bool,
    /// Set when the goal's lock is cleared by the key or a beam.
    pub unlocked_goal: bool,
    /// The session is finished.
    pub game_over: bool,
}

impl PlayerState {
    /// Create a new player state at the given room.
    pub fn new(location: RoomId) -> Self {
        Self {
            location,
            inventory: Vec::new(),
            used_lens: false,
            unlocked_goal: false,
            game_over: false,
        }
    }

    /// Check if the player carries an item of the given kind.
    pub fn has_item(&self, kind: ItemKind) -> bool {
        self.inventory.iter().any(|item| item.kind == kind)
    }

    /// Find a carried item by name.
    pub fn find_item(&self, name: &str) -> Option<&Item> {
        self.inventory.iter().find(|item| item.matches(name))
    }

    /// Add an item to inventory.
    pub fn add_item(&mut self, item: Item) {
        self.inventory.push(item);
    }

    /// Names of carried items, in pickup order.
    pub fn item_names(&self) -> Vec<&str> {
        self.inventory.iter().map(|item| item.name.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_state_new() {
        let state = PlayerState::new(RoomId(0));

        assert_eq!(state.location, RoomId(0));
        assert!(state.inventory.is_empty());
        assert!(!state.used_lens);
        assert!(!state.unlocked_goal);
        assert!(!state.game_over);
    }

    #[test]
    fn inventory_management() {
        let mut state = PlayerState::new(RoomId(0));

        assert!(!state.has_item(ItemKind::RustyKey));
        state.add_item(Item::rusty_key());
        state.add_item(Item::coiled_rope());
        assert!(state.has_item(ItemKind::RustyKey));
        assert!(state.find_item("Rusty Key").is_some());
        assert!(state.find_item("prism lens").is_none());
        assert_eq!(state.item_names(), vec!["rusty key", "coiled rope"]);
    }
}
