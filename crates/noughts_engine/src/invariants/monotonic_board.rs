//! Monotonic board invariant: squares never change once marked.

use super::Invariant;
use crate::{Board, GameEngine, Square};

/// Invariant: the board equals the replay of the move log.
///
/// Each logged move must land on a square that was still empty, so a
/// mark can never be overwritten.
pub struct MonotonicBoardInvariant;

impl<const N: usize> Invariant<GameEngine<N>> for MonotonicBoardInvariant {
    fn holds(game: &GameEngine<N>) -> bool {
        let mut reconstructed = Board::<N>::new();

        for mov in game.history() {
            if !reconstructed.is_empty(mov.coord) {
                return false;
            }
            reconstructed.set(mov.coord, Square::Occupied(mov.player));
        }

        reconstructed == *game.board()
    }

    fn description() -> &'static str {
        "Board squares are monotonic (never overwritten)"
    }
}
