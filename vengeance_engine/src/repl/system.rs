//! `repl::system` module
//!
//! Contains repl loop handlers for commands that are for system utilities.

use crate::{PlayerCharacter, View, ViewItem, repl::ReplControl};

use log::info;

/// Quit the game.
pub fn quit_handler(character: &PlayerCharacter, view: &mut View) -> ReplControl {
    info!(
        "player quit at location #{}",
        character.current_location().index()
    );
    view.push(ViewItem::Farewell("Thanks for playing.".to_string()));
    ReplControl::Quit
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LocationId;

    #[test]
    fn quit_says_goodbye() {
        let mut view = View::new();
        let control = quit_handler(&PlayerCharacter::new(LocationId(0)), &mut view);
        assert_eq!(control, ReplControl::Quit);
        assert!(view.items()[0].is_farewell());
    }
}
