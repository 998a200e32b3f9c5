use serde::Serialize;

/// A world description that has passed the structural checks in [`parse_world`](crate::parse_world).
///
/// Optional fields of the raw data have their defaults filled in, so serializing
/// a `WorldDef` yields the normalized form of the world file it came from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WorldDef {
    pub directions: Vec<DirectionDef>,
    pub rooms: Vec<RoomDef>,
}

impl WorldDef {
    /// Every direction token a room exit may use, names and opposites alike.
    pub fn direction_tokens(&self) -> impl Iterator<Item = &str> {
        self.directions
            .iter()
            .flat_map(|dir| [dir.name.as_str(), dir.opposite.as_str()])
    }

    /// Look up a room definition by name.
    pub fn room(&self, name: &str) -> Option<&RoomDef> {
        self.rooms.iter().find(|room| room.name == name)
    }
}

/// A pair of opposite directions, e.g. `up` / `down`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectionDef {
    pub name: String,
    pub opposite: String,
}

/// A room and the exits declared from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoomDef {
    pub name: String,
    pub description: String,
    pub exits: Vec<ExitDef>,
}

/// Exit metadata for room navigation.
///
/// `direction` may be either the name or the opposite of a declared direction pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExitDef {
    pub to: String,
    pub direction: String,
    pub one_way: bool,
}
