//! Canonical directions and the alias registry.
//!
//! Every alias resolves to exactly one canonical [`Direction`], and every
//! canonical name is an alias of itself. The registry used by rooms is
//! process-wide: install an extended one with [`DirectionRegistry::install`]
//! before building the world, or let [`DirectionRegistry::global`] fall back
//! to the standard table.

use std::fmt;
use std::sync::OnceLock;

use handbasket_foundation::{Error, ErrorKind, Result};

/// A canonical move direction.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Direction {
    North,
    Northeast,
    Northwest,
    South,
    Southeast,
    Southwest,
    East,
    West,
    Up,
    Down,
    In,
    Out,
}

impl Direction {
    /// All directions, in the order the standard registry lists them.
    pub const ALL: [Direction; 12] = [
        Direction::North,
        Direction::Northeast,
        Direction::Northwest,
        Direction::South,
        Direction::Southeast,
        Direction::Southwest,
        Direction::East,
        Direction::West,
        Direction::Up,
        Direction::Down,
        Direction::In,
        Direction::Out,
    ];

    /// Returns the canonical name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::Northeast => "northeast",
            Direction::Northwest => "northwest",
            Direction::South => "south",
            Direction::Southeast => "southeast",
            Direction::Southwest => "southwest",
            Direction::East => "east",
            Direction::West => "west",
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::In => "in",
            Direction::Out => "out",
        }
    }

    /// Returns the direction leading back.
    #[must_use]
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::Northeast => Direction::Southwest,
            Direction::Northwest => Direction::Southeast,
            Direction::South => Direction::North,
            Direction::Southeast => Direction::Northwest,
            Direction::Southwest => Direction::Northeast,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::In => Direction::Out,
            Direction::Out => Direction::In,
        }
    }

    /// Short aliases from the standard table.
    const fn short_aliases(self) -> &'static [&'static str] {
        match self {
            Direction::North => &["n"],
            Direction::Northeast => &["ne"],
            Direction::Northwest => &["nw"],
            Direction::South => &["s"],
            Direction::Southeast => &["se"],
            Direction::Southwest => &["sw"],
            Direction::East => &["e"],
            Direction::West => &["w"],
            Direction::Up => &["u"],
            Direction::Down => &["d"],
            Direction::In | Direction::Out => &[],
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A canonical direction with the words that resolve to it.
#[derive(Clone, Debug)]
struct DirectionAliases {
    direction: Direction,
    /// Lowercase aliases; the canonical name is always first.
    aliases: Vec<String>,
}

static GLOBAL: OnceLock<DirectionRegistry> = OnceLock::new();

/// Punctuation the command tokenizer strips from the end of each word.
pub const TRAILING_PUNCTUATION: &[char] = &['.', ',', '!', '?', ';', ':'];

/// Lowercases `text` and collapses its whitespace to single spaces.
fn fold(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Whether tokenized input can ever spell `alias`: it must have a word, and
/// no word may lose trailing punctuation to the tokenizer.
fn is_typeable(alias: &str) -> bool {
    !alias.is_empty()
        && alias.split(' ').all(|word| {
            let stripped = word.trim_end_matches(TRAILING_PUNCTUATION);
            stripped.is_empty() || stripped == word
        })
}

/// Lookup table from typed words to canonical directions.
#[derive(Clone, Debug)]
pub struct DirectionRegistry {
    entries: Vec<DirectionAliases>,
}

impl DirectionRegistry {
    /// Creates the standard table: each canonical name plus its one- or
    /// two-letter abbreviation ("n", "ne", "u", ...). `in` and `out` have no
    /// abbreviation.
    #[must_use]
    pub fn standard() -> Self {
        let entries = Direction::ALL
            .iter()
            .map(|&direction| {
                let mut aliases = vec![direction.name().to_string()];
                aliases.extend(direction.short_aliases().iter().map(|s| (*s).to_string()));
                DirectionAliases { direction, aliases }
            })
            .collect();

        Self { entries }
    }

    /// Returns this registry with `alias` added for `direction`.
    ///
    /// Re-adding an alias the direction already has is a no-op.
    ///
    /// # Errors
    ///
    /// Same as [`DirectionRegistry::add_alias`].
    pub fn with_alias(mut self, direction: Direction, alias: &str) -> Result<Self> {
        self.add_alias(direction, alias)?;
        Ok(self)
    }

    /// Adds `alias` for `direction`. Case and runs of whitespace are folded
    /// the same way [`DirectionRegistry::normalize`] folds its input.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidDirection`] if the alias is blank or a word
    /// of it ends in [`TRAILING_PUNCTUATION`], since typed input could never
    /// match it. Returns [`ErrorKind::AliasConflict`] if the alias already
    /// resolves to a different direction.
    pub fn add_alias(&mut self, direction: Direction, alias: &str) -> Result<()> {
        let alias = fold(alias);
        if !is_typeable(&alias) {
            return Err(Error::invalid_direction(alias));
        }

        match self.normalize(&alias) {
            Some(existing) if existing == direction => return Ok(()),
            Some(existing) => return Err(Error::alias_conflict(alias, existing.name())),
            None => {}
        }

        if let Some(entry) = self.entries.iter_mut().find(|e| e.direction == direction) {
            tracing::debug!(%direction, %alias, "direction alias registered");
            entry.aliases.push(alias);
        }
        Ok(())
    }

    /// Resolves typed text to a canonical direction, ignoring case and
    /// surrounding or repeated whitespace.
    #[must_use]
    pub fn normalize(&self, text: &str) -> Option<Direction> {
        let word = fold(text);
        if word.is_empty() {
            return None;
        }
        self.entries
            .iter()
            .find(|entry| entry.aliases.iter().any(|alias| *alias == word))
            .map(|entry| entry.direction)
    }

    /// Returns the aliases of one direction, canonical name first.
    #[must_use]
    pub fn aliases(&self, direction: Direction) -> &[String] {
        self.entries
            .iter()
            .find(|e| e.direction == direction)
            .map(|e| e.aliases.as_slice())
            .unwrap_or_default()
    }

    /// Iterates over every alias of every direction, in table order.
    pub fn all_aliases(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .flat_map(|e| e.aliases.iter().map(String::as_str))
    }

    /// Installs the process-wide registry.
    ///
    /// Must run before anything reads [`DirectionRegistry::global`].
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::RegistryAlreadyInstalled`] if a registry was
    /// installed, or the standard one was already handed out.
    pub fn install(registry: DirectionRegistry) -> Result<()> {
        GLOBAL
            .set(registry)
            .map_err(|_| Error::new(ErrorKind::RegistryAlreadyInstalled))
    }

    /// Returns the process-wide registry.
    pub fn global() -> &'static DirectionRegistry {
        GLOBAL.get_or_init(Self::standard)
    }
}

impl Default for DirectionRegistry {
    fn default() -> Self {
        Self::standard()
    }
}
