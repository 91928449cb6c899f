//! The game loop.
//!
//! Each turn renders the current room if the player moved, reads one line,
//! parses it, and applies the resulting action. The loop runs until the
//! player quits or the input source runs dry.

use std::io::{self, Stdout, Write};

use handbasket_foundation::{Error, Result, RoomId};
use handbasket_parser::{Action, CommandParser};
use handbasket_world::{Direction, Player, World};

use crate::editor::{LineEditor, ReadResult, RustylineEditor};

/// Printed when the game ends, however it ends.
pub const FAREWELL: &str = "Goodbye!";

/// Printed when the player walks into a wall.
pub const NO_EXIT: &str = "You can't go that way.";

/// Default input prompt.
pub const DEFAULT_PROMPT: &str = "> ";

/// Whether the loop is still taking turns.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameState {
    /// Waiting for the next command.
    Running,
    /// Finished; no more input will be read.
    Terminated,
}

/// A game session: world, player, input, and output.
pub struct Game<E: LineEditor = RustylineEditor, W: Write = Stdout> {
    /// The line editor for input.
    editor: E,

    /// Where room descriptions and messages go.
    out: W,

    /// Every room in the session.
    world: World,

    /// The player.
    player: Player,

    /// Turns text into actions.
    parser: CommandParser<'static>,

    /// Running or terminated.
    state: GameState,

    /// Whether to show the welcome banner.
    show_banner: bool,

    /// Input prompt.
    prompt: String,
}

impl Game<RustylineEditor, Stdout> {
    /// Creates an interactive game on the terminal.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new(world: World, player: Player) -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor, io::stdout(), world, player))
    }
}

impl<E: LineEditor, W: Write> Game<E, W> {
    /// Creates a game with the given input source and output sink.
    pub fn with_editor(editor: E, out: W, world: World, player: Player) -> Self {
        Self {
            editor,
            out,
            world,
            player,
            parser: CommandParser::new(),
            state: GameState::Running,
            show_banner: false,
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }

    /// Shows the welcome banner before the first room.
    #[must_use]
    pub const fn with_banner(mut self) -> Self {
        self.show_banner = true;
        self
    }

    /// Sets the input prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Returns whether the game is still running.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the player.
    #[must_use]
    pub const fn player(&self) -> &Player {
        &self.player
    }

    /// Returns the world.
    #[must_use]
    pub const fn world(&self) -> &World {
        &self.world
    }

    /// Returns the output sink.
    #[must_use]
    pub const fn output(&self) -> &W {
        &self.out
    }

    /// Takes the game apart once it is over.
    pub fn into_parts(self) -> (World, Player, W) {
        (self.world, self.player, self.out)
    }

    /// Runs the loop until the game terminates.
    ///
    /// # Errors
    ///
    /// Returns an error if the world is empty, the player stands in a room
    /// the world does not contain, or reading input or writing output fails.
    /// Unknown commands and blocked exits are reported to the player and do
    /// not end the game.
    pub fn run(&mut self) -> Result<()> {
        if self.player.location().is_none() {
            let start = self
                .world
                .first_room()
                .ok_or_else(|| Error::internal("the world has no rooms to start in"))?;
            self.player.set_location(start);
        }

        if self.show_banner {
            self.print_banner()?;
        }

        self.editor.set_keywords(self.parser.command_words());
        for alias in self.parser.shadowed_aliases() {
            tracing::warn!(alias, "direction alias is shadowed by a command word");
        }
        tracing::info!(rooms = self.world.len(), "game started");

        while self.state == GameState::Running {
            self.turn()?;
        }

        self.out.flush()?;
        Ok(())
    }

    /// Executes one turn.
    fn turn(&mut self) -> Result<()> {
        let here = self.location()?;

        if self.player.has_moved() {
            let text = self.world.get_mut(here)?.describe(false);
            writeln!(self.out, "{text}")?;
        }
        self.out.flush()?;

        let line = match self.editor.read_line(&self.prompt)? {
            ReadResult::Line(line) => line,
            ReadResult::Interrupted | ReadResult::Eof => return self.terminate(),
        };

        let input = line.trim();
        if input.is_empty() {
            return Ok(());
        }

        if !self.editor.echoes_input() {
            writeln!(self.out, "{}{line}", self.prompt)?;
        }
        self.editor.add_history(input);

        match self.parser.parse(input) {
            Ok(action) => self.dispatch(here, action),
            Err(e) if e.is_recoverable() => {
                tracing::debug!(input, "unknown command");
                writeln!(self.out, "I don't understand '{input}'.")?;
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    /// Applies an action to the player and world.
    fn dispatch(&mut self, here: RoomId, action: Action) -> Result<()> {
        match action {
            Action::Quit => self.terminate(),
            Action::Look => {
                let text = self.world.get_mut(here)?.describe(true);
                writeln!(self.out, "{text}")?;
                Ok(())
            }
            Action::Help => {
                let words = self.parser.command_words().join(", ");
                writeln!(self.out, "You can type: {words}.")?;
                Ok(())
            }
            Action::Exits => {
                let text = self.world.get(here)?.describe_exits();
                writeln!(self.out, "{text}")?;
                Ok(())
            }
            Action::Move(direction) => self.go(here, direction),
            Action::Examine(name) => {
                let room = self.world.get(here)?;
                match room.find_item(&name) {
                    Some(item) => writeln!(self.out, "{}", item.description())?,
                    None => writeln!(self.out, "You don't see any {name} here.")?,
                }
                Ok(())
            }
            Action::Talk(name) => {
                let room = self.world.get(here)?;
                match room.find_item(&name) {
                    Some(item) => writeln!(self.out, "{item}: \"{}\"", item.speak())?,
                    None => writeln!(self.out, "You don't see any {name} here.")?,
                }
                Ok(())
            }
        }
    }

    /// Moves the player through an exit, if there is one.
    fn go(&mut self, here: RoomId, direction: Direction) -> Result<()> {
        let Some(next) = self.world.get(here)?.exit_to(direction) else {
            writeln!(self.out, "{NO_EXIT}")?;
            return Ok(());
        };

        // Exits wired straight on a room are not checked against the world.
        self.world.get(next)?;

        tracing::info!(from = %here, to = %next, %direction, "player moved");
        self.player.set_location(next);
        Ok(())
    }

    /// Prints the farewell and stops the loop.
    fn terminate(&mut self) -> Result<()> {
        writeln!(self.out, "{FAREWELL}")?;
        self.state = GameState::Terminated;
        tracing::info!("game over");
        Ok(())
    }

    /// Returns the player's room.
    fn location(&self) -> Result<RoomId> {
        self.player
            .location()
            .ok_or_else(|| Error::internal("the player is nowhere"))
    }

    /// Prints the welcome banner.
    fn print_banner(&mut self) -> Result<()> {
        writeln!(self.out, "Welcome to Handbasket v{}", env!("CARGO_PKG_VERSION"))?;
        writeln!(self.out, "Type 'help' for a list of commands, 'quit' to leave.\n")?;
        Ok(())
    }
}
