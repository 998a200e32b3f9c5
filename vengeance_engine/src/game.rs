//! A running game session.
//!
//! [`Game`] ties the world graph to the player character and the registry of
//! built-in commands, and turns each line of input into at most one action.

use std::collections::BTreeMap;

use anyhow::{Result, anyhow};
use log::info;
use thiserror::Error;
use variantly::Variantly;
use vengeance_data::RESERVED_WORD;

use crate::command::{Command, Resolution, resolve_input};
use crate::repl::{ReplControl, move_to_handler, quit_handler};
use crate::{Location, PlayerCharacter, View, ViewItem, World};

/// Errors raised while setting up a game.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("a game needs at least one location")]
    NoLocations,
}

/// Whether the game is still accepting input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Variantly)]
pub enum GameState {
    #[default]
    Running,
    Terminated,
}

/// A game in progress.
#[derive(Debug)]
pub struct Game {
    world: World,
    character: PlayerCharacter,
    commands: BTreeMap<String, Command>,
    state: GameState,
}

impl Game {
    /// Start a game with the character standing in the first declared location.
    ///
    /// # Errors
    /// - `GameError::NoLocations` if the world is empty
    pub fn new(world: World) -> Result<Self, GameError> {
        let start = world.first_location().ok_or(GameError::NoLocations)?;
        let mut game = Self {
            world,
            character: PlayerCharacter::new(start),
            commands: BTreeMap::new(),
            state: GameState::Running,
        };
        game.register(Command::new(RESERVED_WORD, quit_handler));
        Ok(game)
    }

    fn register(&mut self, command: Command) {
        self.commands.insert(command.name().to_string(), command);
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn character(&self) -> &PlayerCharacter {
        &self.character
    }

    pub(crate) fn character_mut(&mut self) -> &mut PlayerCharacter {
        &mut self.character
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// Obtain a reference to the location the character occupies.
    /// # Errors
    /// - if the character's location is not part of this game's world
    pub fn current_location(&self) -> Result<&Location> {
        let id = self.character.current_location();
        self.world
            .location(id)
            .ok_or_else(|| anyhow!("character location #{} not found in world", id.index()))
    }

    pub fn find_location(&self, name: &str) -> Option<&Location> {
        self.world.find_location(name).and_then(|id| self.world.location(id))
    }

    pub fn commands(&self) -> impl Iterator<Item = &Command> {
        self.commands.values()
    }

    /// The built-in command `input` resolves to, if it resolves to one at all.
    pub fn find_command(&self, input: &str) -> Option<&Command> {
        match self.resolve(input) {
            Resolution::Command(name) => self.commands.get(&name),
            _ => None,
        }
    }

    /// Match `input` against the current location's exits and the built-in commands.
    pub fn resolve(&self, input: &str) -> Resolution {
        let exits: Vec<_> = self
            .current_location()
            .map(|here| {
                here.exits()
                    .iter()
                    .map(|exit| (exit.direction, self.world.direction_name(exit.direction)))
                    .collect()
            })
            .unwrap_or_default();
        resolve_input(input, exits, self.commands.keys().map(String::as_str))
    }

    /// Every name the player could type in full right now, sorted.
    pub fn candidate_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.commands().map(|command| command.name().to_string()).collect();
        if let Ok(here) = self.current_location() {
            names.extend(
                here.exits()
                    .iter()
                    .map(|exit| self.world.direction_name(exit.direction).to_string()),
            );
        }
        names.sort_unstable();
        names.dedup();
        names
    }

    /// Run the built-in command called `name` exactly, bypassing prefix matching.
    ///
    /// Returns `None` if there is no such command.
    pub fn run_builtin(&mut self, name: &str, view: &mut View) -> Option<ReplControl> {
        let control = self.commands.get(name)?.run(&self.character, view);
        if let ReplControl::Quit = control {
            self.state = GameState::Terminated;
        }
        Some(control)
    }

    /// Resolve one line of input and carry out the resulting action.
    ///
    /// Unknown and ambiguous input is reported to the view and leaves the game untouched.
    ///
    /// # Errors
    /// - if the character's location cannot be found while moving
    pub fn process_input(&mut self, input: &str, view: &mut View) -> Result<ReplControl> {
        if self.state.is_terminated() {
            return Ok(ReplControl::Quit);
        }

        match self.resolve(input) {
            Resolution::Empty => {},
            Resolution::Unknown => {
                info!("unrecognized input \"{}\"", input.trim());
                view.push(ViewItem::UnknownCommand(input.trim().to_string()));
            },
            Resolution::Ambiguous(matches) => {
                info!("ambiguous input \"{}\" matches {matches:?}", input.trim());
                view.push(ViewItem::AmbiguousCommand {
                    input: input.trim().to_string(),
                    matches,
                });
            },
            Resolution::Move(direction) => move_to_handler(self, view, direction)?,
            Resolution::Command(name) => {
                if let Some(control) = self.run_builtin(&name, view) {
                    return Ok(control);
                }
            },
        }
        Ok(ReplControl::Continue)
    }
}
