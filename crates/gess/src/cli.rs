//! Command-line interface for gess.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Gess - play and replay games of Gess in the terminal
#[derive(Parser, Debug)]
#[command(name = "gess")]
#[command(about = "Play Gess against yourself or replay a scripted game", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively, reading moves from stdin
    Play,

    /// Replay the moves of a TOML script
    Replay {
        /// Script with a [[moves]] table per move
        script: PathBuf,

        /// Skip rejected moves instead of stopping at the first one
        #[arg(long)]
        keep_going: bool,
    },

    /// Print the starting board
    Board,
}
