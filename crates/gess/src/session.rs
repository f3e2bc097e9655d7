//! Interactive play: line commands read from a terminal and run against a game.

use crate::config::RenderConfig;
use crate::render::BoardView;
use derive_more::{Display, Error};
use std::io::{BufRead, Write};
use std::str::FromStr;
use strictly_gess::{Color, GameState, GameStatus, MoveOutcome, Ring};
use strum::{EnumIter, EnumString, IntoEnumIterator};
use tracing::{debug, info, instrument};

/// Single-word commands understood by the play loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Keyword {
    /// Resign on behalf of the player to move.
    #[display("resign")]
    Resign,
    /// Print the board.
    #[display("board")]
    Board,
    /// List every ring on the board.
    #[display("rings")]
    Rings,
    /// Print whose turn it is, or who won.
    #[display("status")]
    Status,
    /// List the commands.
    #[display("help")]
    Help,
    /// Leave the play loop.
    #[display("quit")]
    Quit,
}

impl Keyword {
    fn summary(self) -> &'static str {
        match self {
            Keyword::Resign => "resign for the player to move",
            Keyword::Board => "print the board",
            Keyword::Rings => "list ring centers for both colors",
            Keyword::Status => "show whose turn it is or who won",
            Keyword::Help => "show this help",
            Keyword::Quit => "leave the game",
        }
    }
}

/// A parsed line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Move the footprint centered on `from` to `to`.
    Move {
        /// Source center, as typed.
        from: String,
        /// Destination center, as typed.
        to: String,
    },
    /// A single-word command.
    Keyword(Keyword),
}

/// Input line that is not a command.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum CommandError {
    /// Nothing but whitespace.
    #[display("Empty command")]
    Empty,
    /// Neither a keyword nor a pair of coordinates.
    #[display("Unknown command {:?} (type \"help\")", _0)]
    Unknown(#[error(not(source))] String),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let words: Vec<&str> = line.split_whitespace().collect();
        match words.as_slice() {
            [] => Err(CommandError::Empty),
            [word] => Keyword::from_str(word)
                .map(Command::Keyword)
                .map_err(|_| CommandError::Unknown(line.trim().to_string())),
            [from, to] => Ok(Command::Move {
                from: from.to_lowercase(),
                to: to.to_lowercase(),
            }),
            _ => Err(CommandError::Unknown(line.trim().to_string())),
        }
    }
}

/// Whether the play loop should keep reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next line.
    Continue,
    /// Stop reading.
    Quit,
}

/// A game being played from a line-oriented terminal.
#[derive(Debug, Clone)]
pub struct Session {
    game: GameState,
    render: RenderConfig,
}

impl Session {
    /// Starts a session on a new game.
    pub fn new(render: RenderConfig) -> Self {
        Self::with_game(GameState::new(), render)
    }

    /// Starts a session on an existing game.
    pub fn with_game(game: GameState, render: RenderConfig) -> Self {
        Self { game, render }
    }

    /// The game being played.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Runs one command, writing its response to `out`.
    #[instrument(skip(self, out))]
    pub fn execute(&mut self, command: &Command, out: &mut impl Write) -> std::io::Result<Flow> {
        match command {
            Command::Move { from, to } => match self.game.attempt_move(from, to) {
                Ok(outcome) => {
                    writeln!(out, "{}", describe(&outcome))?;
                    write!(out, "{}", BoardView::new(self.game.board(), &self.render))?;
                    if let GameStatus::Won(winner) = outcome.status {
                        writeln!(out, "{winner} wins by breaking the last ring")?;
                    }
                }
                Err(reason) => writeln!(out, "Rejected: {reason}")?,
            },
            Command::Keyword(Keyword::Resign) => {
                let resigning = self.game.to_move();
                if self.game.is_over() {
                    writeln!(out, "Game already over: {}", self.game.status())?;
                } else {
                    let status = self.game.resign(resigning);
                    writeln!(out, "{resigning} resigns. {status}")?;
                }
            }
            Command::Keyword(Keyword::Board) => {
                write!(out, "{}", BoardView::new(self.game.board(), &self.render))?;
            }
            Command::Keyword(Keyword::Rings) => {
                for color in Color::iter() {
                    writeln!(out, "{color}: {}", ring_list(&self.game.rings_of(color)))?;
                }
            }
            Command::Keyword(Keyword::Status) => writeln!(out, "{}", self.status_line())?,
            Command::Keyword(Keyword::Help) => {
                writeln!(out, "  <from> <to>  move a footprint, e.g. \"o6 o7\"")?;
                for keyword in Keyword::iter() {
                    writeln!(out, "  {:<12} {}", keyword, keyword.summary())?;
                }
            }
            Command::Keyword(Keyword::Quit) => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    /// Reads commands from `input` until `quit` or end of input.
    #[instrument(skip_all)]
    pub fn run(&mut self, input: impl BufRead, out: &mut impl Write) -> std::io::Result<()> {
        info!("Play loop started");
        write!(out, "{}", BoardView::new(self.game.board(), &self.render))?;
        writeln!(out, "{}", self.status_line())?;

        for line in input.lines() {
            let line = line?;
            let command = match line.parse::<Command>() {
                Ok(command) => command,
                Err(CommandError::Empty) => continue,
                Err(e) => {
                    debug!(error = %e, "Unparsed input");
                    writeln!(out, "{e}")?;
                    continue;
                }
            };
            if self.execute(&command, out)? == Flow::Quit {
                break;
            }
        }

        info!(status = %self.game.status(), "Play loop finished");
        Ok(())
    }

    fn status_line(&self) -> String {
        match self.game.status() {
            GameStatus::InProgress => format!("{} to move", self.game.to_move()),
            status => status.to_string(),
        }
    }
}

/// One-line summary of an accepted move.
pub fn describe(outcome: &MoveOutcome) -> String {
    let mut text = format!("{} played {}", outcome.mover, outcome.mv);
    if outcome.removed.total() > 0 {
        text.push_str(&format!(
            " (removed {} black, {} white)",
            outcome.removed.black, outcome.removed.white
        ));
    }
    text
}

fn ring_list(rings: &[Ring]) -> String {
    if rings.is_empty() {
        return "none".to_string();
    }
    rings
        .iter()
        .map(|ring| ring.center.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
