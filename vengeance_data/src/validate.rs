use std::collections::HashSet;

use thiserror::Error;

use crate::WorldDef;

/// Word players type to leave the game; no direction may use it.
pub const RESERVED_WORD: &str = "quit";

/// A problem with the structure or references of a world description.
///
/// The message names the offending field and entity and is meant to be shown to
/// the author of the world data as is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct GameFormatError {
    message: String,
}

impl GameFormatError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Check that every exit of a parsed world leads to a known room in a known direction.
///
/// Rooms are visited in declaration order and, within a room, exits in declaration
/// order; for each exit the target room is checked before the direction. Only
/// references are checked here: `world` is expected to have come from
/// [`parse_world`](crate::parse_world), which already enforces shape and uniqueness.
///
/// # Errors
/// Returns the first unknown room or direction found.
pub fn validate_world(world: &WorldDef) -> Result<(), GameFormatError> {
    let rooms: HashSet<&str> = world.rooms.iter().map(|room| room.name.as_str()).collect();
    let directions: HashSet<&str> = world.direction_tokens().collect();

    for room in &world.rooms {
        for exit in &room.exits {
            if !rooms.contains(exit.to.as_str()) {
                return Err(GameFormatError::new(format!(
                    "Unknown exit room \"{}\" from \"{}\"",
                    exit.to, room.name
                )));
            }
            if !directions.contains(exit.direction.as_str()) {
                return Err(GameFormatError::new(format!(
                    "Unknown exit direction \"{}\" from room \"{}\"",
                    exit.direction, room.name
                )));
            }
        }
    }
    Ok(())
}
