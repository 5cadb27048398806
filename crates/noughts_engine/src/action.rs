//! Moves and move errors.

use super::types::{Coord, Player};
use derive_new::new;
use serde::{Deserialize, Serialize};

/// A player placing their mark at a coordinate.
///
/// The engine records accepted moves for the current round so that
/// postconditions can replay them.
#[derive(new, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// Where the mark was placed.
    pub coord: Coord,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.coord)
    }
}

/// Reasons a move is rejected.
///
/// Every variant is recoverable: the engine state is untouched and the
/// caller may simply try another move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// Coordinate lies outside the board.
    #[display("Coordinate ({row}, {col}) is outside the {size}x{size} board")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Board side length.
        size: usize,
    },

    /// The targeted square already holds a mark.
    #[display("Square ({row}, {col}) is already occupied")]
    CellOccupied {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The game has already been won or drawn.
    #[display("Game is already over")]
    GameAlreadyOver,

    /// A postcondition failed after applying a move.
    #[display("Invariant violation: {_0}")]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}
