//! Content tables for world generation.
//!
//! Rooms are drawn from [`ROOM_ARCHETYPES`] without replacement, so the
//! catalog must hold at least as many entries as a world has rooms.

/// A room template: title and base description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Archetype {
    /// Room heading.
    pub title: &'static str,
    /// Base description, before lore is appended.
    pub description: &'static str,
}

impl Archetype {
    /// Create an archetype.
    pub const fn new(title: &'static str, description: &'static str) -> Self {
        Self { title, description }
    }
}

/// Candidate rooms (6 entries).
pub const ROOM_ARCHETYPES: &[Archetype] = &[
    Archetype::new(
        "Tumbledown Gate",
        "A leaning arch of stone guards the path. Moss carpets every crevice.",
    ),
    Archetype::new(
        "Whispering Pines",
        "Wind threads through tall trees, carrying secrets and the scent of resin.",
    ),
    Archetype::new(
        "Forgotten Courtyard",
        "Cracked tiles form a mosaic of constellations underfoot.",
    ),
    Archetype::new(
        "Glimmering Pool",
        "Water mirrors the sky. Coins wink from the depths.",
    ),
    Archetype::new(
        "Crumbling Library",
        "Shelves sag with worm-eaten books and ideas that never died.",
    ),
    Archetype::new(
        "Echoing Cavern",
        "Your words rebound, returning slightly changed\u{2014}like they learned something.",
    ),
];

/// Lore sentences, one appended to each room (with replacement).
pub const LORE_SNIPPETS: &[&str] = &[
    "They say the gate remembers every traveler who ever touched it.",
    "A blackbird watches you with a scholar's patience.",
    "An inscription: 'All maps are apologies for the land.'",
    "Footprints circle twice, then vanish\u{2014}a ritual of the cautious.",
    "You smell rain that hasn't fallen yet.",
];

/// Names of the obstacle barring the goal room.
pub const LOCK_NAMES: &[&str] = &["iron gate", "braided thorns", "shimmering seal"];
