//! Game result as seen by callers.

use super::types::{Coord, Player};
use serde::{Deserialize, Serialize};

/// Result of evaluating a board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// No line complete and empty squares remain.
    InProgress,
    /// `mark` completed `line`, listed in scan order.
    Win {
        /// The winning player.
        mark: Player,
        /// Coordinates of the completed line.
        line: Vec<Coord>,
    },
    /// Board full with no completed line.
    Draw,
}

impl GameResult {
    /// Returns true once the game has reached a win or draw.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameResult::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameResult::Win { mark, .. } => Some(*mark),
            _ => None,
        }
    }

    /// Winning line, or an empty slice when nobody has won.
    pub fn line(&self) -> &[Coord] {
        match self {
            GameResult::Win { line, .. } => line,
            _ => &[],
        }
    }

    /// Returns true if `coord` is part of the winning line.
    pub fn contains(&self, coord: Coord) -> bool {
        self.line().contains(&coord)
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::InProgress => write!(f, "In progress"),
            GameResult::Win { mark, .. } => write!(f, "{} wins", mark),
            GameResult::Draw => write!(f, "Draw"),
        }
    }
}
