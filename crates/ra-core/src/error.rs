use crate::room::RoomId;

/// Alias for `Result<T, WorldError>`.
pub type WorldResult<T> = Result<T, WorldError>;

/// Errors that can occur when building or querying a world.
///
/// These indicate broken content or a programming mistake, never a player
/// error, and are fatal at startup.
#[derive(Debug, thiserror::Error)]
pub enum WorldError {
    /// The archetype catalog cannot supply enough distinct rooms.
    #[error("room catalog too small: {needed} rooms requested but only {available} archetypes available")]
    NotEnoughArchetypes {
        /// Number of rooms the generator was asked for.
        needed: usize,
        /// Number of archetypes in the catalog.
        available: usize,
    },

    /// The generator was configured to build no rooms at all.
    #[error("a world needs at least one room")]
    NoRooms,

    /// A content catalog the generator draws from is empty.
    #[error("{0} catalog is empty")]
    EmptyCatalog(&'static str),

    /// The requested room does not exist in the world.
    #[error("room not found: {0}")]
    RoomNotFound(RoomId),

    /// A generated world broke one of the world invariants.
    #[error("world invariant violated: {0}")]
    Invariant(String),
}
