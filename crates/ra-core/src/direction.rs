use std::fmt;

use serde::{Deserialize, Serialize};

/// Direction of a room exit.
///
/// Variants are declared in alphabetical order of their names, so the derived
/// `Ord` sorts exits the way they are listed to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// East.
    East,
    /// North.
    North,
    /// South.
    South,
    /// West.
    West,
}

impl Direction {
    /// All directions, in display order.
    pub const ALL: [Direction; 4] = [Self::East, Self::North, Self::South, Self::West];

    /// Parse a direction from a string (case-insensitive, `n`/`s`/`e`/`w` allowed).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "n" | "north" => Some(Self::North),
            "s" | "south" => Some(Self::South),
            "e" | "east" => Some(Self::East),
            "w" | "west" => Some(Self::West),
            _ => None,
        }
    }

    /// Get the display name for this direction.
    pub fn name(&self) -> &'static str {
        match self {
            Self::North => "north",
            Self::South => "south",
            Self::East => "east",
            Self::West => "west",
        }
    }

    /// The direction leading back the way you came.
    pub fn opposite(&self) -> Self {
        match self {
            Self::North => Self::South,
            Self::South => Self::North,
            Self::East => Self::West,
            Self::West => Self::East,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_names_and_abbreviations() {
        assert_eq!(Direction::parse("north"), Some(Direction::North));
        assert_eq!(Direction::parse("N"), Some(Direction::North));
        assert_eq!(Direction::parse("West"), Some(Direction::West));
        assert_eq!(Direction::parse("e"), Some(Direction::East));
        assert_eq!(Direction::parse("up"), None);
        assert_eq!(Direction::parse(""), None);
    }

    #[test]
    fn opposites_pair_up() {
        for dir in Direction::ALL {
            assert_eq!(dir.opposite().opposite(), dir);
            assert_ne!(dir.opposite(), dir);
        }
        assert_eq!(Direction::East.opposite(), Direction::West);
        assert_eq!(Direction::North.opposite(), Direction::South);
    }

    #[test]
    fn ordering_is_alphabetical() {
        let mut names: Vec<_> = Direction::ALL.iter().map(|d| d.name()).collect();
        names.sort_unstable();
        let ordered: Vec<_> = Direction::ALL.iter().map(|d| d.name()).collect();
        assert_eq!(names, ordered);
    }
}
