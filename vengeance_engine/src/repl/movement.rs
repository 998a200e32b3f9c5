//! `repl::movement` module
//!
//! Contains repl loop handlers for commands that change player location

use crate::{DirectionId, Game, View, ViewItem};

use anyhow::Result;
use log::info;

/// Move the player through the current location's exit in `direction`, then describe where they arrive.
///
/// # Errors
/// - if the player's current or destination location is missing from the world
pub fn move_to_handler(game: &mut Game, view: &mut View, direction: DirectionId) -> Result<()> {
    let (leaving, destination) = {
        let here = game.current_location()?;
        let Some(exit) = here.exit_toward(direction) else {
            view.push(ViewItem::Error(format!(
                "You can't go {} from here.",
                game.world().direction_name(direction)
            )));
            return Ok(());
        };
        (here.name().to_string(), exit.to)
    };

    game.character_mut().move_to(destination);
    let arrived = game.current_location()?;
    info!(
        "player moved {} from '{}' to '{}'",
        game.world().direction_name(direction),
        leaving,
        arrived.name()
    );
    view.push(ViewItem::RoomDescription {
        name: arrived.name().to_string(),
        description: arrived.description().to_string(),
    });
    Ok(())
}
