//! Scripted replays: a list of moves read from TOML and applied in order.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_gess::{GameState, MoveError, MoveOutcome};
use tracing::{debug, info, instrument, warn};

/// One move of a replay script, in `l3` notation.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ScriptedMove {
    /// Source footprint center.
    from: String,
    /// Destination footprint center.
    to: String,
}

impl ScriptedMove {
    /// Creates a scripted move.
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// A sequence of moves to replay from the starting position.
///
/// ```toml
/// [[moves]]
/// from = "o6"
/// to = "o7"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ReplayScript {
    /// Moves in the order they are played.
    #[serde(default)]
    moves: Vec<ScriptedMove>,
}

/// Result of one scripted move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplayStep {
    /// Position in the script, starting at 1.
    pub number: usize,
    /// The move as written in the script.
    pub scripted: ScriptedMove,
    /// What the engine made of it.
    pub result: Result<MoveOutcome, MoveError>,
}

/// Everything a replay produced.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct ReplayReport {
    /// Steps in the order they were attempted.
    steps: Vec<ReplayStep>,
    /// True when a rejection ended the replay before the script ran out.
    stopped_early: bool,
}

impl ReplayReport {
    /// Number of moves the engine accepted.
    pub fn accepted(&self) -> usize {
        self.steps.iter().filter(|step| step.result.is_ok()).count()
    }

    /// Number of moves the engine rejected.
    pub fn rejected(&self) -> usize {
        self.steps.len() - self.accepted()
    }
}

impl ReplayScript {
    /// Creates a script from a list of moves.
    pub fn new(moves: Vec<ScriptedMove>) -> Self {
        Self { moves }
    }

    /// Loads a script from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ScriptError> {
        debug!("Loading replay script");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ScriptError::new(format!("Failed to read script: {}", e)))?;

        let script = Self::from_toml(&content)?;
        info!(moves = script.moves.len(), "Script loaded");
        Ok(script)
    }

    /// Parses a script from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ScriptError> {
        toml::from_str(content).map_err(|e| ScriptError::new(format!("Failed to parse script: {}", e)))
    }

    /// Applies the script to `game`.
    ///
    /// Stops at the first rejected move unless `keep_going` is set, in which
    /// case rejected moves are recorded and skipped. Once the game is decided
    /// every remaining move is rejected with `GameAlreadyOver`.
    #[instrument(skip(self, game), fields(moves = self.moves.len()))]
    pub fn replay(&self, game: &mut GameState, keep_going: bool) -> ReplayReport {
        let mut steps = Vec::with_capacity(self.moves.len());
        let mut stopped_early = false;

        for (index, scripted) in self.moves.iter().enumerate() {
            let result = game.attempt_move(&scripted.from, &scripted.to);
            let rejected = result.is_err();
            if let Err(e) = &result {
                warn!(number = index + 1, error = %e, "Scripted move rejected");
            }
            steps.push(ReplayStep {
                number: index + 1,
                scripted: scripted.clone(),
                result,
            });

            if rejected && !keep_going {
                stopped_early = index + 1 < self.moves.len();
                break;
            }
        }

        let report = ReplayReport {
            steps,
            stopped_early,
        };
        info!(
            accepted = report.accepted(),
            rejected = report.rejected(),
            stopped_early,
            "Replay finished"
        );
        report
    }
}

/// Replay script error.
#[derive(Debug, Clone, Display, Error)]
#[display("Script error: {} at {}:{}", message, file, line)]
pub struct ScriptError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ScriptError {
    /// Creates a new script error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
