#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]

pub const VENGEANCE_VERSION: &str = env!("CARGO_PKG_VERSION");

// Core modules
pub mod command;
pub mod data_paths;
pub mod direction;
pub mod game;
pub mod loader;
pub mod player;
pub mod repl;
pub mod room;
pub mod style;
pub mod view;
pub mod world;

// Re-exports for convenience
pub use command::{Command, Resolution};
pub use direction::{Direction, DirectionId};
pub use game::{Game, GameError, GameState};
pub use loader::{build_world, load_world};
pub use player::PlayerCharacter;
pub use repl::{ReplControl, run_repl};
pub use room::{Exit, Location, LocationId};
pub use view::{View, ViewItem};
pub use world::World;
pub use vengeance_data::GameFormatError;
