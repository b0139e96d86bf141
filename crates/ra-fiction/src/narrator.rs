//! Narration text.
//!
//! The engine never prints. Each command yields a [`Narration`], an ordered
//! list of paragraphs the frontend lays out however it likes.

use std::fmt;

use ra_core::Room;

/// Paragraphs produced in response to one line of input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Narration {
    paragraphs: Vec<String>,
}

impl Narration {
    /// Create empty narration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a paragraph.
    pub fn say(&mut self, text: impl Into<String>) -> &mut Self {
        self.paragraphs.push(text.into());
        self
    }

    /// Append every paragraph of `other`.
    pub fn extend(&mut self, other: Narration) {
        self.paragraphs.extend(other.paragraphs);
    }

    /// The paragraphs in order.
    pub fn paragraphs(&self) -> &[String] {
        &self.paragraphs
    }

    /// Whether nothing was said.
    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }

    /// Whether any paragraph contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.paragraphs.iter().any(|p| p.contains(needle))
    }
}

impl From<&str> for Narration {
    fn from(text: &str) -> Self {
        Self {
            paragraphs: vec![text.to_string()],
        }
    }
}

impl From<String> for Narration {
    fn from(text: String) -> Self {
        Self {
            paragraphs: vec![text],
        }
    }
}

impl fmt::Display for Narration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.paragraphs.join("\n\n"))
    }
}

/// Greeting shown once at session start.
pub const WELCOME: &str = "Welcome to Reimagined Adventure! Type 'help' for commands.";

/// Command summary.
pub const HELP: &str = "Commands: go/move <dir>, look [thing], take <item>, use <item> [on <target>],\n\
                        inventory (i), help, quit. Directions: north, south, east, west.";

/// Said when the player quits.
pub const FAREWELL: &str = "You let the adventure continue without you\u{2014}for now.";

/// Said when input runs out or is interrupted.
pub const CLOSING: &str = "The story closes softly.";

/// Final line after any ending.
pub const THE_END: &str = "THE END";

/// Full description of a room: heading, body, items, exits, obstacle.
pub fn describe_room(room: &Room) -> Narration {
    let mut narration = Narration::new();

    let underline = "-".repeat(room.title.chars().count());
    narration.say(format!("{}\n{underline}\n{}", room.title, room.description));

    if !room.items.is_empty() {
        let names: Vec<_> = room.items.iter().map(|item| item.name.as_str()).collect();
        narration.say(format!("You notice: {}.", names.join(", ")));
    }

    let exits = room.exit_names();
    let exits = if exits.is_empty() {
        "nowhere".to_string()
    } else {
        exits.join(", ")
    };
    narration.say(format!("Exits: {exits}."));

    if let Some(obstacle) = room.obstacle() {
        narration.say(format!("An obstacle blocks progress here: {obstacle}."));
    }

    narration
}

/// Inventory listing.
pub fn describe_inventory(names: &[&str]) -> String {
    if names.is_empty() {
        "Your pockets are philosophically empty.".to_string()
    } else {
        format!("You carry: {}.", names.join(", "))
    }
}
