//! Game rules.
//!
//! Pure functions from a board to a result. The engine calls
//! [`evaluate`] after every accepted move and never caches its answer.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{check_winner, lines};

use super::{Board, GameResult};
use tracing::instrument;

/// Evaluates a board from scratch.
///
/// A completed line takes precedence over a full board.
#[instrument(skip(board))]
pub fn evaluate<const N: usize>(board: &Board<N>) -> GameResult {
    if let Some((mark, line)) = check_winner(board) {
        GameResult::Win { mark, line }
    } else if is_full(board) {
        GameResult::Draw
    } else {
        GameResult::InProgress
    }
}
