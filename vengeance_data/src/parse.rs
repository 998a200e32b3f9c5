//! Structural pass over raw world data.
//!
//! Converts an untyped `serde_json::Value` into a [`WorldDef`], checking the shape
//! and type of every field along with name uniqueness. References from exits to
//! rooms and directions are checked afterwards by [`validate_world`](crate::validate_world),
//! and only once this pass has succeeded for the whole world.

use std::collections::HashSet;

use serde_json::{Map, Value};

use crate::{DirectionDef, ExitDef, GameFormatError, RESERVED_WORD, RoomDef, WorldDef};

type Result<T> = std::result::Result<T, GameFormatError>;

/// Parse raw game data into a [`WorldDef`].
///
/// ```
/// use serde_json::json;
/// use vengeance_data::parse_world;
///
/// let def = parse_world(&json!({
///     "directions": [{"name": "up", "opposite": "down"}],
///     "rooms": [{"name": "Attic", "description": "Dusty"}],
/// }))
/// .unwrap();
/// assert!(def.rooms[0].exits.is_empty());
/// ```
///
/// # Errors
/// Returns the first structural problem found, checking directions before rooms
/// and all rooms before any of their exits.
pub fn parse_world(data: &Value) -> Result<WorldDef> {
    let Some(game_data) = data.as_object() else {
        return Err(GameFormatError::new("game_data must be a dictionary"));
    };

    let direction_data = game_data
        .get("directions")
        .ok_or_else(|| GameFormatError::new("Missing directions list"))?;
    let directions = parse_directions(direction_data)?;

    let room_data = game_data
        .get("rooms")
        .ok_or_else(|| GameFormatError::new("Missing rooms list"))?;
    let rooms = parse_rooms(room_data)?;

    Ok(WorldDef { directions, rooms })
}

/// Renders a value the way it appears in error messages: strings bare, anything else as JSON.
fn quoted(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn parse_directions(data: &Value) -> Result<Vec<DirectionDef>> {
    let list = data
        .as_array()
        .ok_or_else(|| GameFormatError::new("Directions must be a list"))?;

    // names and opposites share one namespace
    let mut seen = HashSet::new();
    let mut directions = Vec::with_capacity(list.len());
    for datum in list {
        let direction = direction_from_value(datum)?;
        check_direction_valid(&direction, &seen)?;
        check_reserved(&direction.name, "name")?;
        check_reserved(&direction.opposite, "opposite")?;

        seen.insert(direction.name.clone());
        seen.insert(direction.opposite.clone());
        directions.push(direction);
    }
    Ok(directions)
}

fn direction_from_value(datum: &Value) -> Result<DirectionDef> {
    let fields = datum
        .as_object()
        .ok_or_else(|| GameFormatError::new("Direction must be a dictionary"))?;

    let (name, opposite) = match (fields.get("name"), fields.get("opposite")) {
        (Some(name), Some(opposite)) => (name, opposite),
        (None, None) => return Err(GameFormatError::new("Missing name and opposite from direction")),
        (None, Some(opposite)) => {
            return Err(GameFormatError::new(format!(
                "Missing name from direction with opposite \"{}\"",
                quoted(opposite)
            )));
        },
        (Some(name), None) => {
            return Err(GameFormatError::new(format!(
                "Missing opposite from direction with name \"{}\"",
                quoted(name)
            )));
        },
    };

    let name = name
        .as_str()
        .ok_or_else(|| GameFormatError::new("Direction name must be a string"))?;
    let opposite = opposite
        .as_str()
        .ok_or_else(|| GameFormatError::new("Direction opposite must be a string"))?;
    if name.is_empty() {
        return Err(GameFormatError::new("Direction name cannot be empty"));
    }
    if opposite.is_empty() {
        return Err(GameFormatError::new("Direction opposite cannot be empty"));
    }

    Ok(DirectionDef {
        name: name.to_string(),
        opposite: opposite.to_string(),
    })
}

fn check_direction_valid(direction: &DirectionDef, seen: &HashSet<String>) -> Result<()> {
    if direction.name == direction.opposite {
        return Err(GameFormatError::new(format!(
            "Direction \"{}\" cannot be its own opposite",
            direction.name
        )));
    }
    if seen.contains(&direction.name) {
        return Err(GameFormatError::new(format!(
            "Redefinition of direction \"{}\"",
            direction.name
        )));
    }
    if seen.contains(&direction.opposite) {
        return Err(GameFormatError::new(format!(
            "Redefinition of direction \"{}\" as an opposite",
            direction.opposite
        )));
    }
    Ok(())
}

fn check_reserved(token: &str, key: &str) -> Result<()> {
    if token == RESERVED_WORD {
        return Err(GameFormatError::new(format!(
            "Direction {key} cannot use reserved word \"{RESERVED_WORD}\""
        )));
    }
    Ok(())
}

fn parse_rooms(data: &Value) -> Result<Vec<RoomDef>> {
    let list = data
        .as_array()
        .ok_or_else(|| GameFormatError::new("Rooms must be a list"))?;
    if list.is_empty() {
        return Err(GameFormatError::new("Rooms list must contain at least one room"));
    }

    // first every room, then every exit
    let mut names = HashSet::new();
    let mut rooms = Vec::with_capacity(list.len());
    let mut raw_exits = Vec::with_capacity(list.len());
    for datum in list {
        let (room, fields) = room_from_value(datum)?;
        if !names.insert(room.name.clone()) {
            return Err(GameFormatError::new(format!("Redefinition of room \"{}\"", room.name)));
        }
        raw_exits.push(fields.get("exits"));
        rooms.push(room);
    }

    for (room, exits) in rooms.iter_mut().zip(raw_exits) {
        if let Some(exits) = exits {
            room.exits = parse_exits(exits, &room.name)?;
        }
    }
    Ok(rooms)
}

fn room_from_value(datum: &Value) -> Result<(RoomDef, &Map<String, Value>)> {
    let fields = datum
        .as_object()
        .ok_or_else(|| GameFormatError::new("Room must be a dictionary"))?;

    let (name, description) = match (fields.get("name"), fields.get("description")) {
        (Some(name), Some(description)) => (name, description),
        (None, None) => return Err(GameFormatError::new("Missing name and description from room")),
        (None, Some(description)) => {
            return Err(GameFormatError::new(format!(
                "Missing name from room with description \"{}\"",
                quoted(description)
            )));
        },
        (Some(name), None) => {
            return Err(GameFormatError::new(format!(
                "Missing description from room with name \"{}\"",
                quoted(name)
            )));
        },
    };

    let name = name
        .as_str()
        .ok_or_else(|| GameFormatError::new("Room name must be a string"))?;
    let description = description
        .as_str()
        .ok_or_else(|| GameFormatError::new("Room description must be a string"))?;

    let room = RoomDef {
        name: name.to_string(),
        description: description.to_string(),
        exits: Vec::new(),
    };
    Ok((room, fields))
}

fn parse_exits(data: &Value, room_name: &str) -> Result<Vec<ExitDef>> {
    let list = data
        .as_array()
        .ok_or_else(|| GameFormatError::new(format!("Exits of room \"{room_name}\" must be a list")))?;
    list.iter().map(|datum| exit_from_value(datum, room_name)).collect()
}

fn exit_from_value(datum: &Value, room_name: &str) -> Result<ExitDef> {
    let fields = datum
        .as_object()
        .ok_or_else(|| GameFormatError::new(format!("Exit from room \"{room_name}\" must be a dictionary")))?;

    let (to, direction) = match (fields.get("to"), fields.get("direction")) {
        (Some(to), Some(direction)) => (to, direction),
        (None, None) => {
            return Err(GameFormatError::new(format!(
                "Missing to room and direction from exit from room \"{room_name}\""
            )));
        },
        (None, Some(direction)) => {
            return Err(GameFormatError::new(format!(
                "Missing to room from exit with direction \"{}\" from room \"{room_name}\"",
                quoted(direction)
            )));
        },
        (Some(to), None) => {
            return Err(GameFormatError::new(format!(
                "Missing direction from exit to room \"{}\" from room \"{room_name}\"",
                quoted(to)
            )));
        },
    };

    let to = to
        .as_str()
        .ok_or_else(|| GameFormatError::new("Exit to room must be a string"))?;
    let direction = direction
        .as_str()
        .ok_or_else(|| GameFormatError::new("Exit direction must be a string"))?;
    let one_way = match fields.get("one_way") {
        None => false,
        Some(flag) => flag
            .as_bool()
            .ok_or_else(|| GameFormatError::new("Exit one_way must be a boolean"))?,
    };

    Ok(ExitDef {
        to: to.to_string(),
        direction: direction.to_string(),
        one_way,
    })
}
