#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! ** Vengeance **
//! Text adventure engine

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use vengeance_engine::data_paths::data_path;
use vengeance_engine::loader::load_world_def;
use vengeance_engine::style::GameStyle;
use vengeance_engine::{Game, load_world, run_repl};

#[derive(Parser)]
#[command(name = "vengeance", version, about = "Explore a world of rooms by typing directions.")]
struct Cli {
    /// World file to play (JSON, or TOML with a `.toml` extension).
    world: Option<PathBuf>,

    /// Check the world file and print it with defaults filled in, then exit.
    #[arg(long)]
    check: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let world_path = cli.world.unwrap_or_else(|| data_path("world.json"));

    if cli.check {
        let def = load_world_def(&world_path)?;
        println!("{}", serde_json::to_string_pretty(&def)?);
        return Ok(());
    }

    info!("Start: loading world from '{}'...", world_path.display());
    let world = load_world(&world_path).context("while loading world")?;
    let mut game = Game::new(world)?;
    info!("World loaded successfully.");

    // clear the screen
    print!("\x1B[2J\x1B[H");
    std::io::stdout().flush()?;
    info!("Starting the game!");

    println!("{:^60}\n", "VENGEANCE".title_style());
    run_repl(&mut game)
}
