//! Gess - terminal driver
//!
//! Loads configuration, installs logging and dispatches to a subcommand.

#![warn(missing_docs)]

mod cli;

use anyhow::{Result, bail};
use clap::Parser;
use cli::{Cli, Command};
use gess::{BoardView, GessConfig, ReplayScript, Session, describe};
use std::path::Path;
use strictly_gess::GameState;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = GessConfig::load(cli.config.as_deref())?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Play => run_play(&config),
        Command::Replay { script, keep_going } => run_replay(&config, &script, keep_going),
        Command::Board => run_board(&config),
    }
}

/// Run the interactive play loop on stdin/stdout
#[instrument(skip_all)]
fn run_play(config: &GessConfig) -> Result<()> {
    info!("Starting interactive game");
    let mut session = Session::new(config.render().clone());
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    session.run(stdin.lock(), &mut stdout)?;
    Ok(())
}

/// Replay a scripted game and print every outcome
#[instrument(skip(config), fields(script = %script.display()))]
fn run_replay(config: &GessConfig, script: &Path, keep_going: bool) -> Result<()> {
    let replay = ReplayScript::from_file(script)?;
    let mut game = GameState::new();
    let report = replay.replay(&mut game, keep_going);

    for step in report.steps() {
        match &step.result {
            Ok(outcome) => println!("{:>3}. {}", step.number, describe(outcome)),
            Err(reason) => println!(
                "{:>3}. {} {} rejected: {}",
                step.number,
                step.scripted.from(),
                step.scripted.to(),
                reason
            ),
        }
    }
    print!("{}", BoardView::new(game.board(), config.render()));
    println!("{}", game.status());

    if !keep_going && report.rejected() > 0 {
        bail!(
            "Replay stopped at move {} of {}",
            report.steps().len(),
            replay.moves().len()
        );
    }
    Ok(())
}

/// Print the starting board
fn run_board(config: &GessConfig) -> Result<()> {
    let game = GameState::new();
    print!("{}", BoardView::new(game.board(), config.render()));
    Ok(())
}
