//! Game controller: the state of one Gess game and the moves that change it.

use super::action::{Move, MoveError, MoveOutcome};
use super::contracts::{Contract, MoveContract};
use super::rules::{apply_move, ring_count, rings_of, Ring};
use super::types::{Board, Color, GameStatus};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

/// Complete game state: board, player to move and status.
///
/// All mutation goes through `attempt_move`, `play` and `resign`. A rejected
/// move leaves every field untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    to_move: Color,
    status: GameStatus,
}

/// Starts a new game from the standard layout with Black to move.
pub fn new_game() -> GameState {
    GameState::new()
}

impl GameState {
    /// Creates a new game from the standard layout with Black to move.
    #[instrument]
    pub fn new() -> Self {
        Self::with_board(Board::starting(), Color::Black)
    }

    /// Creates an in-progress game from an arbitrary position.
    #[instrument(skip(board))]
    pub fn with_board(board: Board, to_move: Color) -> Self {
        Self {
            board,
            to_move,
            status: GameStatus::InProgress,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the color to move.
    pub fn to_move(&self) -> Color {
        self.to_move
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the winner, if the game is over.
    pub fn winner(&self) -> Option<Color> {
        self.status.winner()
    }

    /// True once the game has been decided.
    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// Rings currently held by `color`.
    pub fn rings_of(&self, color: Color) -> Vec<Ring> {
        rings_of(&self.board, color)
    }

    /// Plays a move given in `l3` notation for the player to move.
    ///
    /// # Errors
    ///
    /// Returns `MoveError::GameAlreadyOver` once the game is decided,
    /// `MoveError::InvalidCoordinate` for malformed text, or the first
    /// movement rule the move breaks. The state is unchanged on error.
    #[instrument(skip(self), fields(to_move = %self.to_move))]
    pub fn attempt_move(&mut self, from: &str, to: &str) -> Result<MoveOutcome, MoveError> {
        if self.is_over() {
            warn!("Move attempted after game end");
            return Err(MoveError::GameAlreadyOver);
        }
        let mv = Move::parse(from, to).inspect_err(|e| warn!(error = %e, "Unreadable move"))?;
        self.play(mv)
    }

    /// Plays a move for the player to move.
    ///
    /// After the footprint lands, rings are counted for both colors. If the
    /// opponent has none left the mover wins. The turn passes to the opponent
    /// in either case, so `to_move` reads the loser once the game is won.
    ///
    /// # Errors
    ///
    /// See `attempt_move`.
    #[instrument(skip(self), fields(mv = %mv, to_move = %self.to_move))]
    pub fn play(&mut self, mv: Move) -> Result<MoveOutcome, MoveError> {
        if let Err(reason) = MoveContract::pre(self, &mv) {
            warn!(%reason, "Move rejected");
            return Err(reason);
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        let mover = self.to_move;
        let removed = apply_move(&mut self.board, mv);

        let black_rings = ring_count(&self.board, Color::Black);
        let white_rings = ring_count(&self.board, Color::White);
        let opponent_rings = match mover.opponent() {
            Color::Black => black_rings,
            Color::White => white_rings,
        };
        if opponent_rings == 0 {
            self.status = GameStatus::Won(mover);
            info!(winner = %mover, "Last ring broken");
        }

        self.to_move = mover.opponent();

        #[cfg(debug_assertions)]
        if let Err(violations) = MoveContract::post(&before, self) {
            tracing::error!(?violations, "Move postcondition failed");
            debug_assert!(false, "Move postcondition failed: {violations:?}");
        }

        info!(
            black_removed = removed.black,
            white_removed = removed.white,
            black_rings,
            white_rings,
            status = %self.status,
            "Move applied"
        );

        Ok(MoveOutcome {
            mover,
            mv,
            removed,
            black_rings,
            white_rings,
            status: self.status,
        })
    }

    /// Resigns on behalf of `color`, handing the win to the opponent.
    ///
    /// Does nothing once the game is already decided; the returned status is
    /// the current one either way. The board and turn are not touched.
    #[instrument(skip(self))]
    pub fn resign(&mut self, color: Color) -> GameStatus {
        if self.is_over() {
            warn!(status = %self.status, "Resignation after game end ignored");
            return self.status;
        }
        self.status = GameStatus::Won(color.opponent());
        info!(winner = %color.opponent(), "Player resigned");
        self.status
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
