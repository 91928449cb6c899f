//! Items placed in rooms.
//!
//! An item is a name and a description. Giving it scripted lines adds the
//! "speaks" capability; a guard is just an item whose only line is "Stop".

use std::fmt;

use crate::article::a_or_an;

/// What a silent item says when addressed.
pub const SILENCE: &str = "...";

/// A named, described object.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Item {
    name: String,
    description: String,
    /// Scripted lines; empty for items that cannot speak.
    lines: Vec<String>,
}

impl Item {
    /// Creates an item with the generated "It's just a rock..." description.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let description = format!("It's just {}...", a_or_an(&name));
        Self {
            name,
            description,
            lines: Vec::new(),
        }
    }

    /// Creates an item with a custom description.
    #[must_use]
    pub fn with_description(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            lines: Vec::new(),
        }
    }

    /// Creates an item that speaks the given lines.
    #[must_use]
    pub fn speaking<I, S>(name: impl Into<String>, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(name).with_lines(lines)
    }

    /// Creates a guard, which tells the player to stop.
    #[must_use]
    pub fn guard(name: impl Into<String>) -> Self {
        Self::speaking(name, ["Stop"])
    }

    /// Replaces the scripted lines.
    #[must_use]
    pub fn with_lines<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lines = lines.into_iter().map(Into::into).collect();
        self
    }

    /// Returns the item's name, which is also its display form.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the item's description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the scripted lines.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Returns true if the item has anything to say.
    #[must_use]
    pub fn speaks(&self) -> bool {
        !self.lines.is_empty()
    }

    /// Returns what the item says when addressed.
    #[must_use]
    pub fn speak(&self) -> &str {
        self.lines.first().map_or(SILENCE, String::as_str)
    }

    /// Returns true if `name` refers to this item, ignoring case.
    #[must_use]
    pub fn is_named(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name.trim())
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
