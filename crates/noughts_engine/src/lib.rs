//! Noughts engine - game state for N-in-a-row on a fixed square board
//!
//! The engine owns the board, alternates turns, and detects wins and
//! draws. It performs no I/O; a presentation layer drives it through
//! [`GameEngine::apply_move`] and [`GameEngine::reset`] and renders
//! [`GameEngine::state`].
//!
//! # Example
//!
//! ```
//! use noughts_engine::{GameResult, Player, TicTacToe};
//!
//! let mut game = TicTacToe::new();
//! for (row, col) in [(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)] {
//!     game.apply_move(row, col)?;
//! }
//! assert_eq!(game.result().winner(), Some(Player::X));
//! assert!(matches!(game.result(), GameResult::Win { .. }));
//! # Ok::<(), noughts_engine::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod contracts;
mod engine;
mod invariants;
mod outcome;
pub mod rules;
mod shared;
mod types;

pub use action::{Move, MoveError};
pub use board::Board;
pub use contracts::{CellIsEmpty, Contract, GameNotOver, InBounds, LegalMove, MoveContract};
pub use engine::{EngineConfig, GameEngine, GameState, TicTacToe};
pub use invariants::{
    AlternatingTurnInvariant, EngineInvariants, Invariant, InvariantSet, InvariantViolation,
    MonotonicBoardInvariant, ResultConsistentInvariant,
};
pub use outcome::GameResult;
pub use shared::SharedEngine;
pub use types::{Coord, Player, Square};

/// Alias for callers that speak in marks rather than players.
pub type Mark = Player;
