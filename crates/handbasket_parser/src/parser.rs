//! Main parser pipeline.
//!
//! Resolution order: control words, then directions, then verb + noun
//! forms. Anything left over is an unknown command.

use handbasket_foundation::{Error, Result};
use handbasket_world::DirectionRegistry;

use crate::command::{Action, ControlCommand, EXAMINE_VERBS, GO_VERB, TALK_VERBS};
use crate::tokenizer::InputTokenizer;

/// Maps player input to actions.
#[derive(Clone, Copy, Debug)]
pub struct CommandParser<'r> {
    registry: &'r DirectionRegistry,
}

impl CommandParser<'static> {
    /// Creates a parser over the process-wide direction registry, the same
    /// one rooms resolve exits with.
    #[must_use]
    pub fn new() -> Self {
        Self::with_registry(DirectionRegistry::global())
    }
}

impl Default for CommandParser<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'r> CommandParser<'r> {
    /// Creates a parser over a specific direction registry.
    #[must_use]
    pub const fn with_registry(registry: &'r DirectionRegistry) -> Self {
        Self { registry }
    }

    /// Returns the direction registry in use.
    #[must_use]
    pub const fn registry(&self) -> &'r DirectionRegistry {
        self.registry
    }

    /// Parses player input into an action.
    ///
    /// # Errors
    ///
    /// Returns `ErrorKind::UnknownCommand` carrying the trimmed input when
    /// nothing matches, including when the input is blank.
    pub fn parse(&self, input: &str) -> Result<Action> {
        let words = InputTokenizer::tokenize(input);

        let action = self
            .resolve(&words)
            .ok_or_else(|| Error::unknown_command(input.trim()))?;

        tracing::debug!(input, %action, "command parsed");
        Ok(action)
    }

    fn resolve(&self, words: &[String]) -> Option<Action> {
        let (verb, rest) = words.split_first()?;
        let phrase = words.join(" ");

        // 1. Control words
        if let Some(cmd) = ControlCommand::lookup(&phrase) {
            return Some(cmd.into());
        }

        // 2. Directions, bare or after "go"
        if let Some(direction) = self.registry.normalize(&phrase) {
            return Some(Action::Move(direction));
        }
        if verb == GO_VERB {
            if let [direction] = rest {
                return self.registry.normalize(direction).map(Action::Move);
            }
        }

        // 3. Verb + noun
        if EXAMINE_VERBS.contains(&verb.as_str()) {
            return noun(rest).map(Action::Examine);
        }
        if TALK_VERBS.contains(&verb.as_str()) {
            let rest = match rest {
                [to, tail @ ..] if to == "to" => tail,
                _ => rest,
            };
            return noun(rest).map(Action::Talk);
        }

        None
    }

    /// Every word the parser recognizes: control words, verbs, and every
    /// direction alias, in that order.
    #[must_use]
    pub fn command_words(&self) -> Vec<String> {
        let mut words: Vec<String> = ControlCommand::TABLE
            .iter()
            .map(|(word, _)| (*word).to_string())
            .collect();
        words.push(GO_VERB.to_string());
        words.extend(
            EXAMINE_VERBS
                .iter()
                .chain(TALK_VERBS)
                .map(|word| (*word).to_string()),
        );
        words.extend(self.registry.all_aliases().map(String::from));
        words
    }

    /// Direction aliases that a control word wins over, so typing them never
    /// moves the player.
    #[must_use]
    pub fn shadowed_aliases(&self) -> Vec<&'r str> {
        self.registry
            .all_aliases()
            .filter(|alias| ControlCommand::lookup(alias).is_some())
            .collect()
    }
}

/// Joins the noun words, or `None` if there are none.
fn noun(words: &[String]) -> Option<String> {
    (!words.is_empty()).then(|| words.join(" "))
}
