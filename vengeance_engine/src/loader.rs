//! Loader utilities for building a [`World`] from serialized data.
//!
//! World files are JSON or TOML documents with a `directions` list and a `rooms`
//! list. They are read into an untyped value first so that every missing or
//! mistyped field can be reported by name.

pub mod worlddef;

use std::path::Path;

use anyhow::{Context, Result};
use log::info;
use serde_json::Value;
use vengeance_data::{GameFormatError, WorldDef, parse_world, validate_world};

use crate::World;
use crate::loader::worlddef::{build_world_from_def, load_world_value, wire_world};

/// Build a validated world graph from raw game data.
///
/// All shape checks run over the whole of `data` before any exit is checked
/// against the declared rooms and directions, so the error returned is always
/// the first one in that order. No partial world is ever returned.
///
/// # Errors
/// - `GameFormatError` describing the first problem found
pub fn build_world(data: &Value) -> Result<World, GameFormatError> {
    let def = parse_world(data)?;
    build_world_from_def(&def)
}

/// Load and check a world file without building the graph.
///
/// # Errors
/// Errors bubble up from file IO, deserialization, or validation.
pub fn load_world_def(path: &Path) -> Result<WorldDef> {
    let data = load_world_value(path)?;
    let def = parse_world(&data).with_context(|| format!("while checking world data in '{}'", path.display()))?;
    validate_world(&def).with_context(|| format!("while checking world data in '{}'", path.display()))?;
    info!(
        "{} directions and {} rooms checked in '{}'",
        def.directions.len(),
        def.rooms.len(),
        path.display()
    );
    Ok(def)
}

/// Load a world file and build its graph.
///
/// # Errors
/// Errors bubble up from file IO, deserialization, or validation.
pub fn load_world(path: &Path) -> Result<World> {
    let def = load_world_def(path)?;
    let world = wire_world(&def);
    info!("{} locations added to world", world.locations().len());
    info!("{} directions added to world", world.directions().len());
    Ok(world)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use serde_json::json;
    use tempfile::NamedTempFile;

    use super::*;

    fn temp_world(suffix: &str, contents: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn build_world_from_value() {
        let world = build_world(&json!({
            "directions": [{"name": "up", "opposite": "down"}],
            "rooms": [
                {"name": "Top", "description": "High", "exits": [{"to": "Bottom", "direction": "down"}]},
                {"name": "Bottom", "description": "Low"},
            ],
        }))
        .unwrap();
        assert_eq!(world.locations().len(), 2);
        assert_eq!(world.directions().len(), 2);
    }

    #[test]
    fn loads_json_file() {
        let file = temp_world(
            ".json",
            r#"{"directions": [], "rooms": [{"name": "Only", "description": "Alone"}]}"#,
        );
        let world = load_world(file.path()).unwrap();
        assert_eq!(world.locations()[0].name(), "Only");
    }

    #[test]
    fn loads_toml_file() {
        let file = temp_world(
            ".toml",
            r#"
directions = [{ name = "in", opposite = "out" }]

[[rooms]]
name = "Porch"
description = "Creaky boards"
exits = [{ to = "Hall", direction = "in" }]

[[rooms]]
name = "Hall"
description = "Echoing"
"#,
        );
        let world = load_world(file.path()).unwrap();
        let hall = world.find_location("Hall").unwrap();
        assert_eq!(world.location(hall).unwrap().exits().len(), 1);
    }

    #[test]
    fn validation_error_survives_context() {
        let file = temp_world(".json", r#"{"rooms": []}"#);
        let err = load_world(file.path()).unwrap_err();
        let format_err = err.downcast_ref::<GameFormatError>().unwrap();
        assert_eq!(format_err.message(), "Missing directions list");
    }

    #[test]
    fn unreadable_file_is_an_error() {
        assert!(load_world(Path::new("/definitely/not/here.json")).is_err());
    }
}
