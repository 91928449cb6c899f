//! Parsed actions and the control-command table.

use std::fmt;

use handbasket_world::Direction;

/// A command that does not move the player or name an item.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ControlCommand {
    /// End the game.
    Quit,
    /// Describe the current room in full.
    Look,
    /// List the words the parser understands.
    Help,
    /// List the exits of the current room.
    Exits,
}

impl ControlCommand {
    /// Every control word and the command it stands for, in help order.
    pub const TABLE: &'static [(&'static str, ControlCommand)] = &[
        ("quit", ControlCommand::Quit),
        ("q", ControlCommand::Quit),
        ("look", ControlCommand::Look),
        ("l", ControlCommand::Look),
        ("help", ControlCommand::Help),
        ("?", ControlCommand::Help),
        ("exits", ControlCommand::Exits),
    ];

    /// Looks up an exact, already-lowercased control word.
    #[must_use]
    pub fn lookup(word: &str) -> Option<Self> {
        Self::TABLE
            .iter()
            .find(|(w, _)| *w == word)
            .map(|(_, cmd)| *cmd)
    }
}

/// Verbs that take an item name.
pub const EXAMINE_VERBS: &[&str] = &["examine", "x"];

/// Verbs for addressing an item; an optional "to" may follow.
pub const TALK_VERBS: &[&str] = &["talk", "speak"];

/// Word that may precede a direction ("go north").
pub const GO_VERB: &str = "go";

/// What the player asked for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// End the game.
    Quit,
    /// Describe the current room in full.
    Look,
    /// List the words the parser understands.
    Help,
    /// List the exits of the current room.
    Exits,
    /// Walk through the exit in this direction.
    Move(Direction),
    /// Read an item's description.
    Examine(String),
    /// Hear what an item has to say.
    Talk(String),
}

impl From<ControlCommand> for Action {
    fn from(cmd: ControlCommand) -> Self {
        match cmd {
            ControlCommand::Quit => Action::Quit,
            ControlCommand::Look => Action::Look,
            ControlCommand::Help => Action::Help,
            ControlCommand::Exits => Action::Exits,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Quit => f.write_str("quit"),
            Action::Look => f.write_str("look"),
            Action::Help => f.write_str("help"),
            Action::Exits => f.write_str("exits"),
            Action::Move(direction) => write!(f, "go {direction}"),
            Action::Examine(noun) => write!(f, "examine {noun}"),
            Action::Talk(noun) => write!(f, "talk to {noun}"),
        }
    }
}
