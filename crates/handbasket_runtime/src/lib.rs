//! Game loop, line editing, and CLI for Handbasket.
//!
//! This crate provides:
//! - [`Game`] - The turn-by-turn game loop
//! - [`LineEditor`] - Input source abstraction, with [`RustylineEditor`] for
//!   the terminal and [`ScriptedEditor`] for canned commands
//! - [`CliConfig`] - Command-line arguments
//! - [`demo`] - The two-room museum world
//! - [`logging`] - Tracing subscriber setup

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod demo;
pub mod editor;
pub mod game;
pub mod logging;

pub use config::CliConfig;
pub use editor::{LineEditor, ReadResult, RustylineEditor, ScriptedEditor};
pub use game::{FAREWELL, Game, GameState, NO_EXIT};
