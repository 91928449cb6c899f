//! Integration tests for the handbasket_world crate.
//!
//! Tests for the world model:
//! - Direction normalization
//! - Rooms, exits, and the first-visit latch
//! - Items and the speaking capability
//! - Player location tracking

mod direction_tests;
mod room_tests;
