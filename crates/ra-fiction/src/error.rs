//! Error types for the fiction engine.
//!
//! Apart from [`FictionError::World`], every variant is a soft failure: its
//! message is shown to the player and the session carries on unchanged.

use thiserror::Error;

/// Result type for fiction operations.
pub type FictionResult<T> = Result<T, FictionError>;

/// Errors that can occur during interactive fiction.
#[derive(Debug, Error)]
pub enum FictionError {
    /// `go` without a direction.
    #[error("Go where?")]
    MissingDirection,

    /// `take` without an item.
    #[error("Take what?")]
    MissingTakeTarget,

    /// `use` without an item.
    #[error("Use what?")]
    MissingUseTarget,

    /// No exit in that direction.
    #[error("You can't go that way.")]
    NoExit,

    /// The destination is the goal room and it is still locked.
    #[error("The {0} bars your path.")]
    Blocked(String),

    /// No such item in the current room.
    #[error("You don't see that here.")]
    NotHere,

    /// The item is fixed in place.
    #[error("It won't budge, but you can study it.")]
    CannotTake,

    /// Nothing by that name in the room or inventory.
    #[error("You find nothing special.")]
    NothingSpecial,

    /// Item not in inventory.
    #[error("You don't have that.")]
    NotCarried,

    /// Unrecognized verb.
    #[error("Your words scatter like leaves. Try a different phrasing.")]
    UnknownCommand(String),

    /// Input after the session has ended.
    #[error("The story has already ended.")]
    GameOver,

    /// The world itself is inconsistent.
    #[error("{0}")]
    World(#[from] ra_core::WorldError),
}

impl FictionError {
    /// Whether the error is a player mistake rather than a broken world.
    pub fn is_soft(&self) -> bool {
        !matches!(self, Self::World(_))
    }
}
