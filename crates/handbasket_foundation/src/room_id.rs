//! Room identifiers.

use std::fmt;

use crate::error::{Error, Result};

/// Handle to a room owned by a world.
///
/// Rooms never own their neighbours. Exits store a `RoomId` instead, which
/// lets the room graph contain cycles and self-loops.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct RoomId {
    /// Index into the world's room storage.
    pub index: u32,
}

impl RoomId {
    /// Creates a room ID for the given arena index.
    #[must_use]
    pub const fn new(index: u32) -> Self {
        Self { index }
    }

    /// Returns the arena index as a `usize`.
    #[must_use]
    pub const fn as_usize(self) -> usize {
        self.index as usize
    }
}

impl TryFrom<usize> for RoomId {
    type Error = Error;

    fn try_from(index: usize) -> Result<Self> {
        u32::try_from(index)
            .map(Self::new)
            .map_err(|_| Error::internal(format!("room index {index} does not fit a RoomId")))
    }
}

impl fmt::Debug for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RoomId({})", self.index)
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Room({})", self.index)
    }
}
