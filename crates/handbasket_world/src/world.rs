//! The world: an arena of rooms.
//!
//! Rooms live here for the whole session and are addressed by [`RoomId`].
//! Exits point at ids rather than rooms, so any graph shape is allowed,
//! including cycles and rooms that lead back to themselves.

use handbasket_foundation::{Error, Result, RoomId};

use crate::direction::{Direction, DirectionRegistry};
use crate::room::Room;

/// Owner of every room in a session.
#[derive(Clone, Debug, Default)]
pub struct World {
    rooms: Vec<Room>,
}

impl World {
    /// Creates an empty world.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a room and returns its id.
    ///
    /// # Errors
    ///
    /// Returns `ErrorKind::Internal` if the next index does not fit a
    /// [`RoomId`].
    pub fn add_room(&mut self, room: Room) -> Result<RoomId> {
        let id = RoomId::try_from(self.rooms.len())?;
        tracing::debug!(%id, name = room.name(), "room added");
        self.rooms.push(room);
        Ok(id)
    }

    /// Returns the room with the given id.
    #[must_use]
    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(id.as_usize())
    }

    /// Returns the room with the given id, mutably.
    pub fn room_mut(&mut self, id: RoomId) -> Option<&mut Room> {
        self.rooms.get_mut(id.as_usize())
    }

    /// Returns the room with the given id.
    ///
    /// # Errors
    ///
    /// Returns `ErrorKind::RoomNotFound` if the id is not in this world.
    pub fn get(&self, id: RoomId) -> Result<&Room> {
        self.room(id).ok_or_else(|| Error::room_not_found(id))
    }

    /// Returns the room with the given id, mutably.
    ///
    /// # Errors
    ///
    /// Returns `ErrorKind::RoomNotFound` if the id is not in this world.
    pub fn get_mut(&mut self, id: RoomId) -> Result<&mut Room> {
        self.room_mut(id).ok_or_else(|| Error::room_not_found(id))
    }

    /// Returns the first room added, where players start by default.
    #[must_use]
    pub fn first_room(&self) -> Option<RoomId> {
        (!self.rooms.is_empty()).then(|| RoomId::new(0))
    }

    /// Finds a room by name, ignoring case.
    #[must_use]
    pub fn find_room(&self, name: &str) -> Option<RoomId> {
        self.rooms()
            .find(|(_, room)| room.name().eq_ignore_ascii_case(name))
            .map(|(id, _)| id)
    }

    /// Iterates over every room with its id.
    pub fn rooms(&self) -> impl Iterator<Item = (RoomId, &Room)> {
        self.rooms
            .iter()
            .enumerate()
            .filter_map(|(i, room)| u32::try_from(i).ok().map(|i| (RoomId::new(i), room)))
    }

    /// Returns the number of rooms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    /// Returns true if the world has no rooms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Wires a one-way exit from `from` to `to`.
    ///
    /// # Errors
    ///
    /// Returns `ErrorKind::RoomNotFound` if either room is missing, or
    /// `ErrorKind::InvalidDirection` if `direction` does not resolve.
    pub fn connect(&mut self, from: RoomId, direction: &str, to: RoomId) -> Result<Direction> {
        self.get(to)?;
        self.get_mut(from)?.add_exit(direction, to)
    }

    /// Wires an exit from `from` to `to` and the opposite exit back.
    ///
    /// # Errors
    ///
    /// Same as [`World::connect`]. Nothing is wired on error.
    pub fn connect_both(&mut self, from: RoomId, direction: &str, to: RoomId) -> Result<()> {
        let resolved = DirectionRegistry::global()
            .normalize(direction)
            .ok_or_else(|| Error::invalid_direction(direction))?;
        self.get(from)?;
        self.get(to)?;

        self.get_mut(from)?.set_exit(resolved, to);
        self.get_mut(to)?.set_exit(resolved.opposite(), from);
        Ok(())
    }
}
