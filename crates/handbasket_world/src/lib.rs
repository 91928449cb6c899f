//! Directions, rooms, items, and the player for Handbasket.
//!
//! This crate provides:
//! - [`Direction`] and [`DirectionRegistry`] - Canonical directions and their aliases
//! - [`Item`] - Named objects, optionally able to speak
//! - [`Room`] - Nodes of the world graph with exits, items, and a first-visit latch
//! - [`Player`] - Current location and the "moved since last render" flag
//! - [`World`] - The arena that owns every room

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod article;
pub mod direction;
pub mod item;
pub mod player;
pub mod room;
pub mod world;

pub use article::a_or_an;
pub use direction::{Direction, DirectionRegistry};
pub use item::Item;
pub use player::Player;
pub use room::Room;
pub use world::World;
