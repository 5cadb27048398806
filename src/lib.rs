//! Noughts - terminal front end for the noughts engine
//!
//! The engine crate owns every rule. This crate supplies what surrounds
//! it: command-line parsing, settings, and a text renderer that turns
//! typed coordinates into engine calls.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod settings;
mod terminal;

pub use cli::{Cli, Command};
pub use settings::{Settings, SettingsError};
pub use terminal::{
    parse_command, parse_coord, render, run_session, InputError, TerminalCommand,
};

pub use noughts_engine as engine;
