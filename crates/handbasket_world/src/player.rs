//! The player.

use handbasket_foundation::RoomId;

/// The player character.
///
/// Gender, age, and hair colour are flavour; nothing reads them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    /// Player's gender.
    pub gender: String,
    /// Player's age in years.
    pub age: u32,
    /// Player's hair colour.
    pub hair_color: String,
    location: Option<RoomId>,
    moved: bool,
}

impl Player {
    /// Creates a player who is nowhere yet.
    ///
    /// The moved flag starts set so the first turn always renders.
    #[must_use]
    pub fn new(gender: impl Into<String>, age: u32, hair_color: impl Into<String>) -> Self {
        Self {
            gender: gender.into(),
            age,
            hair_color: hair_color.into(),
            location: None,
            moved: true,
        }
    }

    /// Places the player in a starting room.
    #[must_use]
    pub fn with_location(mut self, room: RoomId) -> Self {
        self.set_location(room);
        self
    }

    /// Returns the current room, if any.
    #[must_use]
    pub const fn location(&self) -> Option<RoomId> {
        self.location
    }

    /// Moves the player and marks the view as changed.
    ///
    /// Does not check that the room exists in any particular world.
    pub fn set_location(&mut self, room: RoomId) {
        self.location = Some(room);
        self.moved = true;
    }

    /// Returns whether the view changed since the last call, then clears the
    /// flag.
    pub fn has_moved(&mut self) -> bool {
        std::mem::replace(&mut self.moved, false)
    }

    /// Returns the moved flag without clearing it.
    #[must_use]
    pub const fn moved(&self) -> bool {
        self.moved
    }
}
