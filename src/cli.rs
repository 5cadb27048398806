//! Command-line interface for noughts.

use crate::terminal::parse_coord;
use clap::{Parser, Subcommand};
use noughts_engine::{Coord, Player};
use std::path::PathBuf;

/// Noughts - tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Play tic-tac-toe against another person at the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML settings file
    #[arg(long, global = true, default_value = "noughts.toml")]
    pub config: PathBuf,

    /// Player who moves first (overrides the settings file)
    #[arg(long, global = true)]
    pub first: Option<Player>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively, reading moves from stdin
    Play,

    /// Apply a sequence of moves and print the resulting state
    Replay {
        /// Moves as `row,col`, zero-based
        #[arg(value_parser = parse_coord)]
        moves: Vec<Coord>,

        /// Print the state as JSON instead of a grid
        #[arg(long)]
        json: bool,
    },
}
