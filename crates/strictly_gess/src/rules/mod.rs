//! Game rules for Gess.
//!
//! This module contains pure functions over a `Board`: applying a legal
//! footprint move and finding rings. Legality itself lives in the contracts
//! module so that every check can be named and tested on its own.

pub mod capture;
pub mod ring;

pub use capture::{apply_move, Footprint};
pub use ring::{ring_count, rings_of, Ring};
