//! Core identifiers and error types for Handbasket.
//!
//! This crate provides:
//! - [`RoomId`] - Stable handles into the world's room arena
//! - [`Error`] - Error type shared by every layer, with an [`ErrorKind`] to match on

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod room_id;

pub use error::{Error, ErrorKind, Result};
pub use room_id::RoomId;
