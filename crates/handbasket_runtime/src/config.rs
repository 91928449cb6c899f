//! Command-line configuration.

use std::path::PathBuf;

use clap::Parser;
use handbasket_foundation::Result;
use handbasket_world::{Direction, DirectionRegistry};

use crate::game::DEFAULT_PROMPT;

/// CLI configuration parsed from arguments.
#[derive(Debug, Parser)]
#[command(name = "handbasket", version, about = "A tiny text adventure set in a museum")]
pub struct CliConfig {
    /// Read commands from FILE, one per line, instead of the terminal
    #[arg(short, long, value_name = "FILE")]
    pub script: Option<PathBuf>,

    /// Skip the welcome banner
    #[arg(long)]
    pub no_banner: bool,

    /// Input prompt
    #[arg(long, default_value = DEFAULT_PROMPT)]
    pub prompt: String,

    /// Log filter used when HANDBASKET_LOG is unset (e.g. "info", "handbasket_runtime=debug")
    #[arg(long, value_name = "FILTER", default_value = "warn")]
    pub log_level: String,

    /// Extra direction alias, e.g. `--alias inside=in` (repeatable)
    #[arg(long = "alias", value_name = "WORD=DIRECTION", value_parser = parse_alias)]
    pub aliases: Vec<(String, Direction)>,
}

impl CliConfig {
    /// Builds the direction registry: the standard table plus any `--alias`
    /// entries.
    ///
    /// # Errors
    ///
    /// Returns an error if an alias already names another direction.
    pub fn direction_registry(&self) -> Result<DirectionRegistry> {
        let mut registry = DirectionRegistry::standard();
        for (word, direction) in &self.aliases {
            registry.add_alias(*direction, word)?;
        }
        Ok(registry)
    }
}

/// Parses `WORD=DIRECTION`, where DIRECTION is any standard alias.
fn parse_alias(arg: &str) -> std::result::Result<(String, Direction), String> {
    let (word, target) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected WORD=DIRECTION, got {arg:?}"))?;

    let word = word.trim();
    if word.is_empty() {
        return Err("alias word is empty".to_string());
    }

    let direction = DirectionRegistry::standard()
        .normalize(target)
        .ok_or_else(|| format!("unknown direction: {target:?}"))?;

    Ok((word.to_string(), direction))
}
