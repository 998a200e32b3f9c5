//! Room definitions.
//!
//! Any place the player can stand is a [`Location`], whether it's a coffin or a cave.
//! Locations are owned by the [`World`](crate::World); exits refer to their target
//! and direction by handle.

use crate::DirectionId;

/// Handle to a [`Location`] in the world's location table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LocationId(pub(crate) usize);

impl LocationId {
    /// Position of the location in [`World::locations`](crate::World::locations).
    pub fn index(self) -> usize {
        self.0
    }
}

/// A one-directional passage out of a location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exit {
    pub direction: DirectionId,
    pub to: LocationId,
}

impl Exit {
    pub fn new(direction: DirectionId, to: LocationId) -> Self {
        Self { direction, to }
    }
}

/// Any visitable location in the game world.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    name: String,
    description: String,
    exits: Vec<Exit>,
}

impl Location {
    /// Create a location with an empty description.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_description(name, String::new())
    }

    pub fn with_description(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            exits: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Exits in the order they were wired.
    pub fn exits(&self) -> &[Exit] {
        &self.exits
    }

    /// First exit leading off in `direction`, if any.
    pub fn exit_toward(&self, direction: DirectionId) -> Option<&Exit> {
        self.exits.iter().find(|exit| exit.direction == direction)
    }

    pub(crate) fn push_exit(&mut self, exit: Exit) {
        self.exits.push(exit);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_description_is_empty() {
        let location = Location::new("arbitrary name");
        assert_eq!(location.name(), "arbitrary name");
        assert_eq!(location.description(), "");
    }

    #[test]
    fn exit_toward_finds_first_match() {
        let mut location = Location::with_description("Hub", "Paths everywhere");
        location.push_exit(Exit::new(DirectionId(0), LocationId(1)));
        location.push_exit(Exit::new(DirectionId(2), LocationId(2)));
        location.push_exit(Exit::new(DirectionId(0), LocationId(3)));

        assert_eq!(location.exit_toward(DirectionId(0)).map(|e| e.to), Some(LocationId(1)));
        assert_eq!(location.exit_toward(DirectionId(2)).map(|e| e.to), Some(LocationId(2)));
        assert!(location.exit_toward(DirectionId(5)).is_none());
    }
}
