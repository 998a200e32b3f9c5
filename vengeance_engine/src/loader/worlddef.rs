//! WorldDef loader and conversion helpers.
//!
//! Reads raw world files and wires a checked `WorldDef` into the runtime graph.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, error, info};
use serde_json::Value;
use vengeance_data::{GameFormatError, WorldDef, validate_world};

use crate::{Location, LocationId, World};

/// Read a world file into an untyped value, choosing the format by extension.
///
/// `.toml` files are parsed as TOML; everything else is parsed as JSON.
///
/// # Errors
/// - if the file cannot be read or parsed
pub fn load_world_value(path: &Path) -> Result<Value> {
    let text = fs::read_to_string(path).with_context(|| format!("reading world data from '{}'", path.display()))?;
    let is_toml = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));
    if is_toml {
        toml::from_str(&text).with_context(|| format!("parsing world TOML from '{}'", path.display()))
    } else {
        serde_json::from_str(&text).with_context(|| format!("parsing world JSON from '{}'", path.display()))
    }
}

/// Convert a parsed `WorldDef` into a wired `World`.
///
/// Exit references are validated first, so the world is only built once every
/// exit is known to lead somewhere real.
///
/// # Errors
/// - `GameFormatError` for the first exit naming an unknown room or direction
pub fn build_world_from_def(def: &WorldDef) -> Result<World, GameFormatError> {
    validate_world(def)?;
    Ok(wire_world(def))
}

/// Wire the rooms and exits of a `WorldDef` that has already passed [`validate_world`].
pub(crate) fn wire_world(def: &WorldDef) -> World {
    let mut world = World::new();
    for dir in &def.directions {
        world.add_direction_pair(&dir.name, &dir.opposite);
    }
    for room in &def.rooms {
        world.add_location(Location::with_description(&room.name, &room.description));
    }
    debug!(
        "{} directions and {} locations registered",
        world.directions().len(),
        world.locations().len()
    );

    let mut wired = 0usize;
    for (index, room) in def.rooms.iter().enumerate() {
        // room names are unique, so declaration order is table order
        let from = LocationId(index);
        for exit in &room.exits {
            let (Some(to), Some(direction)) = (world.find_location(&exit.to), world.find_direction(&exit.direction))
            else {
                error!(
                    "skipping unvalidated exit {} from '{}' to '{}'",
                    exit.direction, room.name, exit.to
                );
                continue;
            };

            if exit.one_way {
                world.add_one_way_exit(from, direction, to);
            } else {
                world.add_exit(from, direction, to);
            }
            wired += 1;
        }
    }
    info!("{wired} exit declarations wired into {} locations", world.locations().len());
    world
}
