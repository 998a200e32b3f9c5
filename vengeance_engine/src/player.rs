//! Player module.
//!
//! The player character only tracks where it is standing; nothing about it outlives a session.

use crate::LocationId;

/// The character the player moves around the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerCharacter {
    current_location: LocationId,
}

impl PlayerCharacter {
    pub fn new(start: LocationId) -> Self {
        Self {
            current_location: start,
        }
    }

    pub fn current_location(&self) -> LocationId {
        self.current_location
    }

    pub fn move_to(&mut self, destination: LocationId) {
        self.current_location = destination;
    }
}
