//! Result consistency invariant.

use super::Invariant;
use crate::{rules, Board, GameEngine, Square};

/// Invariant: the stored result is the evaluation of the current board,
/// and no logged move was played after the game had ended.
pub struct ResultConsistentInvariant;

impl<const N: usize> Invariant<GameEngine<N>> for ResultConsistentInvariant {
    fn holds(game: &GameEngine<N>) -> bool {
        if *game.result() != rules::evaluate(game.board()) {
            return false;
        }

        let mut replayed = Board::<N>::new();
        for mov in game.history() {
            if rules::evaluate(&replayed).is_terminal() {
                return false;
            }
            replayed.set(mov.coord, Square::Occupied(mov.player));
        }
        true
    }

    fn description() -> &'static str {
        "Result matches the board and no move follows a finished game"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Coord, GameResult, Move, Player, TicTacToe};

    #[test]
    fn test_finished_game_holds() {
        let mut game = TicTacToe::new();
        for (row, col) in [(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)] {
            game.apply_move(row, col).unwrap();
        }
        assert!(game.result().is_terminal());
        assert!(ResultConsistentInvariant::holds(&game));
    }

    #[test]
    fn test_stale_result_violates() {
        let mut game = TicTacToe::new();
        game.apply_move(0, 0).unwrap();
        game.state.result = GameResult::Draw;
        assert!(!ResultConsistentInvariant::holds(&game));
    }

    #[test]
    fn test_move_after_win_violates() {
        let mut game = TicTacToe::new();
        for (row, col) in [(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)] {
            game.apply_move(row, col).unwrap();
        }
        let extra = Coord::new(2, 0);
        game.history.push(Move::new(Player::O, extra));
        game.state.board.set(extra, Square::Occupied(Player::O));
        assert!(!ResultConsistentInvariant::holds(&game));
    }
}
