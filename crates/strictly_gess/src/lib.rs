//! Strictly Gess - type-safe rules engine for the game of Gess
//!
//! Gess is played on an 18x18 grid by Black and White. Instead of moving a
//! single stone, a player picks a 3x3 footprint of their own stones and slides
//! it across the board. Whatever the footprint lands on is overwritten, and
//! stones pushed past the edge are lost. A player loses when their last ring
//! (an empty cell fully surrounded by eight of their stones) is gone.
//!
//! # Architecture
//!
//! - **Types**: colors, cells, the 20x20 board with its border ring
//! - **Coordinate**: `l3`-style notation and its internal index form
//! - **Geometry**: footprint windows, direction and distance between centers
//! - **Contracts**: the ordered legality checks a move must pass
//! - **Rules**: move application (captures, border attrition), ring detection
//! - **Invariants**: properties every applied move must preserve
//! - **Game**: `GameState`, the single entry point for playing a game
//!
//! # Example
//!
//! ```
//! use strictly_gess::{Color, GameState, GameStatus};
//!
//! let mut game = GameState::new();
//! let outcome = game.attempt_move("o6", "o7").unwrap();
//! assert_eq!(outcome.mover, Color::Black);
//! assert_eq!(game.to_move(), Color::White);
//! assert_eq!(game.status(), GameStatus::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod coordinate;
mod game;
mod geometry;
pub mod invariants;
pub mod rules;
mod types;

pub use action::{Move, MoveError, MoveOutcome, StoneTally};
pub use contracts::{
    CentersOnBoard, Contract, EmptyCenterReach, FootprintOwned, LastRingPreserved, LeadingStone, LegalMove,
    MoveContract, NotNullMove, PathClear,
};
pub use coordinate::{Coordinate, ALPHABET, GRID_SIZE, PLAY_MAX, PLAY_MIN};
pub use game::{new_game, GameState};
pub use geometry::{direction, distance, footprint, neighbors, Direction, FOOTPRINT_OFFSETS};
pub use rules::{apply_move, ring_count, rings_of, Footprint, Ring};
pub use types::{Board, Cell, Color, GameStatus, STARTING_STONES};
