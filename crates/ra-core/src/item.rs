use serde::{Deserialize, Serialize};

/// Identity of an item, used to decide what `use` does with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    /// Opens the goal's obstacle outright.
    RustyKey,
    /// Splits light into the beam riddle.
    PrismLens,
    /// Flavor only.
    CoiledRope,
    /// The fixed clue naming the obstacle.
    ScribbledNote,
}

/// A thing that lives in exactly one room or in the player's inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// What the item is.
    pub kind: ItemKind,
    /// Display name, also what the player types to refer to it.
    pub name: String,
    /// Text shown when the item is examined.
    pub description: String,
    /// Whether the item can be picked up.
    pub portable: bool,
    /// Name of the target this item is meant for, if any.
    pub usable_with: Option<String>,
}

impl Item {
    /// Create a portable item with no usage hint.
    pub fn new(kind: ItemKind, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            description: description.into(),
            portable: true,
            usable_with: None,
        }
    }

    /// Mark the item as fixed in place.
    pub fn fixed(mut self) -> Self {
        self.portable = false;
        self
    }

    /// Record what the item is meant to be used on.
    pub fn with_usable_with(mut self, target: impl Into<String>) -> Self {
        self.usable_with = Some(target.into());
        self
    }

    /// Case-insensitive exact name match.
    pub fn matches(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name.trim())
    }

    /// The key that opens any obstacle.
    pub fn rusty_key() -> Self {
        Self::new(
            ItemKind::RustyKey,
            "rusty key",
            "A heavy key with teeth like a skyline.",
        )
        .with_usable_with("lock")
    }

    /// The lens that turns the obstacle into a riddle.
    pub fn prism_lens() -> Self {
        Self::new(
            ItemKind::PrismLens,
            "prism lens",
            "A shard of crystal that splits light into choices.",
        )
        .with_usable_with("lock")
    }

    /// A rope. It never solves anything.
    pub fn coiled_rope() -> Self {
        Self::new(ItemKind::CoiledRope, "coiled rope", "Frayed but trustworthy.")
    }

    /// The immovable clue pointing at the given obstacle.
    pub fn scribbled_note(lock_name: &str) -> Self {
        Self::new(
            ItemKind::ScribbledNote,
            "scribbled note",
            format!(
                "'Seek the {lock_name}.' There's a sketch of a key shining through a prism.\n\
                 Below it: 'Three paths, one truth.'"
            ),
        )
        .fixed()
    }
}
