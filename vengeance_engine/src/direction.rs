//! Directions players can travel in.
//!
//! Directions always come in pairs (`up` / `down`, `in` / `out`). The [`World`](crate::World)
//! owns every direction in a single table where the two halves of a pair sit in
//! adjacent slots, so a direction's opposite is just the neighbouring slot.

use std::fmt;

/// Handle to a [`Direction`] in the world's direction table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DirectionId(pub(crate) usize);

impl DirectionId {
    /// Position of the direction in [`World::directions`](crate::World::directions).
    pub fn index(self) -> usize {
        self.0
    }

    /// Handle of the other half of this direction's pair.
    pub fn opposite(self) -> DirectionId {
        DirectionId(self.0 ^ 1)
    }
}

impl fmt::Display for DirectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "direction#{}", self.0)
    }
}

/// A named way to move, e.g. "north".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Direction {
    name: String,
    opposite: DirectionId,
}

impl Direction {
    /// Create both halves of a pair whose first half will live at `first`.
    pub(crate) fn pair(name: &str, opposite: &str, first: DirectionId) -> (Direction, Direction) {
        debug_assert_eq!(first.0 % 2, 0, "direction pairs start on an even slot");
        (
            Direction {
                name: name.to_string(),
                opposite: first.opposite(),
            },
            Direction {
                name: opposite.to_string(),
                opposite: first,
            },
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn opposite(&self) -> DirectionId {
        self.opposite
    }
}
