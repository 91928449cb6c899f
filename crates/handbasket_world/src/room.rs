//! Rooms: nodes of the world graph.

use handbasket_foundation::{Error, Result, RoomId};

use crate::direction::{Direction, DirectionRegistry};
use crate::item::Item;

/// Name given to rooms created without one.
pub const UNNAMED_ROOM: &str = "Where am I? ...and what am I doing in this handbasket?";

/// Header printed above a room's item list.
pub const ITEMS_HEADER: &str = "Items at this location:";

/// A location the player can stand in.
#[derive(Clone, Debug)]
pub struct Room {
    name: String,
    description: String,
    items: Vec<Item>,
    /// Exits in insertion order; at most one per direction.
    exits: Vec<(Direction, RoomId)>,
    /// Cleared by the first render and never set again.
    first_visit: bool,
}

impl Room {
    /// Creates a room. An empty name is replaced by [`UNNAMED_ROOM`].
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        let mut name = name.into();
        if name.trim().is_empty() {
            name = UNNAMED_ROOM.to_string();
        }
        Self {
            name,
            description: description.into(),
            items: Vec::new(),
            exits: Vec::new(),
            first_visit: true,
        }
    }

    /// Returns the room's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the narrative description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the items present, in the order they were added.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Returns true until the room has been fully described once.
    #[must_use]
    pub const fn is_first_visit(&self) -> bool {
        self.first_visit
    }

    /// Appends an item. Duplicates are kept.
    pub fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Finds an item by name, ignoring case.
    #[must_use]
    pub fn find_item(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.is_named(name))
    }

    /// Wires an exit, resolving `direction` through the process-wide
    /// registry. Re-adding a direction replaces its target.
    ///
    /// # Errors
    ///
    /// Returns `ErrorKind::InvalidDirection` if no alias matches.
    pub fn add_exit(&mut self, direction: &str, target: RoomId) -> Result<Direction> {
        let resolved = DirectionRegistry::global()
            .normalize(direction)
            .ok_or_else(|| Error::invalid_direction(direction))?;
        self.set_exit(resolved, target);
        Ok(resolved)
    }

    /// Wires an exit for an already-resolved direction.
    pub fn set_exit(&mut self, direction: Direction, target: RoomId) {
        tracing::debug!(room = %self.name, %direction, %target, "exit wired");
        match self.exits.iter_mut().find(|(d, _)| *d == direction) {
            Some(exit) => exit.1 = target,
            None => self.exits.push((direction, target)),
        }
    }

    /// Returns the wired directions, in the order they were first added.
    #[must_use]
    pub fn possible_exits(&self) -> Vec<Direction> {
        self.exits.iter().map(|(d, _)| *d).collect()
    }

    /// Returns the room an exit leads to, or `None` if `direction` is not a
    /// direction or not wired here.
    #[must_use]
    pub fn exit(&self, direction: &str) -> Option<RoomId> {
        DirectionRegistry::global()
            .normalize(direction)
            .and_then(|d| self.exit_to(d))
    }

    /// Returns the room the exit in `direction` leads to.
    #[must_use]
    pub fn exit_to(&self, direction: Direction) -> Option<RoomId> {
        self.exits
            .iter()
            .find(|(d, _)| *d == direction)
            .map(|(_, target)| *target)
    }

    /// Renders the room.
    ///
    /// The first call, and every verbose call, includes the narrative
    /// description. Rendering latches the room as described, so later
    /// non-verbose calls show only the name and items.
    pub fn describe(&mut self, verbose: bool) -> String {
        let items = self.list_items();
        let mut text = self.name.clone();

        if self.first_visit || verbose {
            self.first_visit = false;
            text.push_str("\n\n");
            text.push_str(&self.description);
            if !items.is_empty() {
                text.push_str("\n\n");
            }
        } else if !items.is_empty() {
            text.push('\n');
        }

        text.push_str(&items);
        text
    }

    /// Lists the items present, one per line under a header. Empty if there
    /// are none.
    #[must_use]
    pub fn list_items(&self) -> String {
        if self.items.is_empty() {
            return String::new();
        }

        let mut text = String::from(ITEMS_HEADER);
        for item in &self.items {
            text.push('\n');
            text.push_str(item.name());
        }
        text
    }

    /// Lists the wired exits.
    #[must_use]
    pub fn describe_exits(&self) -> String {
        if self.exits.is_empty() {
            return "There are no obvious exits.".to_string();
        }

        let names: Vec<_> = self.exits.iter().map(|(d, _)| d.name()).collect();
        format!("Exits: {}.", names.join(", "))
    }
}
