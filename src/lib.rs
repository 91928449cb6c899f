//! Handbasket - Minimal text-adventure engine
//!
//! This crate re-exports all layers of the Handbasket system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: handbasket_runtime    — Game loop, line editors, CLI, logging, demo world
//! Layer 2: handbasket_parser     — Tokenizer, control commands, command parser
//! Layer 1: handbasket_world      — Directions, items, rooms, player, world arena
//! Layer 0: handbasket_foundation — Core types (RoomId, Error)
//! ```

pub use handbasket_foundation as foundation;
pub use handbasket_parser as parser;
pub use handbasket_runtime as runtime;
pub use handbasket_world as world;
