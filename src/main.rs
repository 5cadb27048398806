//! Noughts - terminal tic-tac-toe

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use noughts::engine::{Coord, TicTacToe};
use noughts::{Cli, Command, Settings, render, run_session};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = Settings::load_or_default(&cli.config)?.with_first_player(cli.first);
    init_tracing(settings.log_filter());

    match cli.command {
        Command::Play => run_play(&settings),
        Command::Replay { moves, json } => run_replay(&settings, &moves, json),
    }
}

/// Logs go to stderr so they never interleave with the board on stdout.
fn init_tracing(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Interactive session on stdin/stdout
#[instrument(skip_all)]
fn run_play(settings: &Settings) -> Result<()> {
    let mut engine = TicTacToe::with_config(settings.engine_config());
    info!(first_player = %engine.turn(), "Starting interactive game");

    let stdin = std::io::stdin();
    run_session(&mut engine, stdin.lock(), std::io::stdout())?;
    Ok(())
}

/// Applies `moves` and prints the final state
#[instrument(skip(settings))]
fn run_replay(settings: &Settings, moves: &[Coord], json: bool) -> Result<()> {
    let engine = TicTacToe::replay(settings.engine_config(), moves)
        .context("Replay stopped on an invalid move")?;

    if json {
        println!("{}", serde_json::to_string_pretty(engine.state())?);
    } else {
        println!("{}", render(engine.state()));
    }
    Ok(())
}
