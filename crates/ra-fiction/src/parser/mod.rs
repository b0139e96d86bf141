//! Command parsing for player input.

mod command;

pub use command::{Command, parse_command};
