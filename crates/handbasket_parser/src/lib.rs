//! Command parser for Handbasket text adventures.
//!
//! Turns what the player typed into an [`Action`] the game loop can apply.
//!
//! # Architecture
//!
//! ```text
//! "Go North."
//!      │
//!      ▼
//! ┌─────────────────┐
//! │   TOKENIZER     │  → ["go", "north"]
//! └─────────────────┘
//!      │
//!      ▼
//! ┌─────────────────┐
//! │ CONTROL TABLE   │  quit / look / help / exits
//! └─────────────────┘
//!      │ no match
//!      ▼
//! ┌─────────────────┐
//! │ DIRECTIONS      │  → Move(north)
//! └─────────────────┘
//!      │ no match
//!      ▼
//! ┌─────────────────┐
//! │ VERB + NOUN     │  examine X / talk to X
//! └─────────────────┘
//!      │ no match
//!      ▼
//!  UnknownCommand("Go North.")
//! ```
//!
//! # Modules
//!
//! - [`tokenizer`] - Convert raw input to lowercase words
//! - [`command`] - The [`Action`] type and the control-command table
//! - [`parser`] - The [`CommandParser`] pipeline

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod command;
pub mod parser;
pub mod tokenizer;

pub use command::{Action, ControlCommand};
pub use parser::CommandParser;
