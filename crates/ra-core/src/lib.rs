//! Core types for Reimagined Adventure: rooms, items, and the world model.
//!
//! This crate owns the plain data a session plays through and the procedural
//! generator that assembles it. It has no notion of a player; see
//! `ra-fiction` for game state and command handling.

/// Fixed content catalogs the generator draws from.
pub mod catalog;
/// Compass directions used for room exits.
pub mod direction;
/// Error types used throughout the crate.
pub mod error;
/// Seeded procedural world generation.
pub mod generator;
/// Items and their identities.
pub mod item;
/// Rooms, room identifiers, and exits.
pub mod room;
/// The world model that owns every room.
pub mod world;

/// Re-export direction type.
pub use direction::Direction;
/// Re-export error types.
pub use error::{WorldError, WorldResult};
/// Re-export generator entry points.
pub use generator::{GeneratorConfig, WorldGenerator, generate_world};
/// Re-export item types.
pub use item::{Item, ItemKind};
/// Re-export room types.
pub use room::{Room, RoomId};
/// Re-export world model type.
pub use world::World;
