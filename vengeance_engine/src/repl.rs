//! REPL and command handling utilities.
//!
//! The game runs in a read-eval-print loop. This module and its submodules
//! implement the handlers that act on a [`Game`] once its input has been resolved.

pub mod input;
pub mod look;
pub mod movement;
pub mod system;

pub use input::{InputEvent, InputManager, LineSource};
pub use look::*;
pub use movement::*;
pub use system::*;

use crate::style::GameStyle;
use crate::{Game, View, ViewItem};

use anyhow::{Context, Result};
use log::info;
use vengeance_data::RESERVED_WORD;

/// Control flow signal used by handlers to exit the REPL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplControl {
    Continue,
    Quit,
}

/// Run the main read–eval–print loop on the terminal until the player quits.
///
/// # Errors
/// - Propagates failures from [`run_session`].
pub fn run_repl(game: &mut Game) -> Result<()> {
    let mut input = InputManager::new();
    let mut view = View::new();
    run_session(game, &mut input, &mut view)
}

/// Drive a game from any line source until it terminates.
///
/// The starting location is described first. End of input quits the game;
/// an interrupted line is dropped and the player is prompted again.
///
/// # Errors
/// - if reading input fails
/// - if the character's location cannot be found
pub fn run_session(game: &mut Game, input: &mut impl LineSource, view: &mut View) -> Result<()> {
    describe_current_location(game, view)?;
    view.flush();

    let mut turn = 0usize;
    while game.state().is_running() {
        turn += 1;
        info!("================> BEGIN TURN {turn} <================");

        input.set_completions(game.candidate_names());
        let prompt = "\n> ".prompt_style().to_string();
        let event = input.read_line(&prompt).context("while reading player input")?;

        let control = match event {
            InputEvent::Line(line) => game.process_input(&line, view)?,
            InputEvent::Eof => {
                info!("end of input reached, quitting");
                game.run_builtin(RESERVED_WORD, view).unwrap_or(ReplControl::Quit)
            },
            InputEvent::Interrupted => {
                view.push(ViewItem::EngineMessage("Command canceled.".to_string()));
                ReplControl::Continue
            },
        };
        view.flush();

        if let ReplControl::Quit = control {
            break;
        }
    }
    Ok(())
}
