//! `repl::look` module

use crate::{Game, View, ViewItem};

use anyhow::Result;

/// Queue the name and description of the player's current location.
///
/// # Errors
/// - if the player's location is missing from the world
pub fn describe_current_location(game: &Game, view: &mut View) -> Result<()> {
    let here = game.current_location()?;
    view.push(ViewItem::RoomDescription {
        name: here.name().to_string(),
        description: here.description().to_string(),
    });
    Ok(())
}
