//! Draw detection.

use crate::Board;
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
///
/// A full board with no winner is a draw.
#[instrument(skip(board))]
pub fn is_full<const N: usize>(board: &Board<N>) -> bool {
    board.is_full()
}
