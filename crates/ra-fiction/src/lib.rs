//! Interactive fiction engine for Reimagined Adventure.
//!
//! Turns lines of player input into changes to a generated world: walking
//! between rooms, picking things up, and working the lock on the goal room
//! with a key or a prism lens. Every response is returned as [`Narration`];
//! player mistakes come back as [`FictionError`] values whose message is the
//! text to show.

/// Error types for the fiction engine.
pub mod error;
/// Narration text and room rendering.
pub mod narrator;
/// Command parsing.
pub mod parser;
/// Player state management.
pub mod player;
/// Lock puzzle rules and endings.
pub mod puzzle;
/// Interactive fiction session management.
pub mod session;

pub use error::{FictionError, FictionResult};
pub use narrator::Narration;
pub use parser::{Command, parse_command};
pub use player::PlayerState;
pub use puzzle::{Beam, Ending};
pub use session::FictionSession;
