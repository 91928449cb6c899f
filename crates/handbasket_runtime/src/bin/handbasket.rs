//! Handbasket CLI entry point.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use handbasket_foundation::Result;
use handbasket_runtime::{CliConfig, Game, LineEditor, ScriptedEditor, demo, logging};
use handbasket_world::DirectionRegistry;

fn main() -> ExitCode {
    let config = CliConfig::parse();

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &CliConfig) -> Result<()> {
    logging::init(&config.log_level)?;

    // Rooms resolve exits through the global registry, so install it first.
    DirectionRegistry::install(config.direction_registry()?)?;

    let world = demo::museum()?;
    let player = demo::adventurer();

    match &config.script {
        Some(path) => {
            let editor = ScriptedEditor::from_file(path)?;
            play(
                Game::with_editor(editor, io::stdout(), world, player),
                config,
            )
        }
        None => play(Game::new(world, player)?, config),
    }
}

fn play<E: LineEditor, W: Write>(game: Game<E, W>, config: &CliConfig) -> Result<()> {
    let mut game = game.with_prompt(config.prompt.clone());
    if !config.no_banner {
        game = game.with_banner();
    }
    game.run()
}
