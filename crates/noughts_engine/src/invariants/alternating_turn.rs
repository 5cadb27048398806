//! Alternating turn invariant.

use super::Invariant;
use crate::GameEngine;

/// Invariant: marks alternate, starting with the configured first player.
///
/// The next player to move is the one the log implies.
pub struct AlternatingTurnInvariant;

impl<const N: usize> Invariant<GameEngine<N>> for AlternatingTurnInvariant {
    fn holds(game: &GameEngine<N>) -> bool {
        let mut expected = game.config().first_player;

        for mov in game.history() {
            if mov.player != expected {
                return false;
            }
            expected = expected.opponent();
        }

        game.turn() == expected
    }

    fn description() -> &'static str {
        "Players alternate turns from the configured first player"
    }
}
