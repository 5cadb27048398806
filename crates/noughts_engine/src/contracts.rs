//! Contract-based validation for moves.
//!
//! Contracts pair preconditions, checked on every move, with
//! postconditions, checked in debug builds after the move lands.

use super::action::MoveError;
use super::engine::GameEngine;
use super::invariants::{EngineInvariants, InvariantSet};
use super::Coord;
use tracing::{instrument, warn};

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

/// Precondition: the coordinate lies on the board.
pub struct InBounds;

impl InBounds {
    /// Rejects coordinates with either index not below `N`.
    pub fn check<const N: usize>(coord: &Coord, _game: &GameEngine<N>) -> Result<(), MoveError> {
        if coord.in_bounds(N) {
            Ok(())
        } else {
            Err(MoveError::OutOfBounds {
                row: coord.row,
                col: coord.col,
                size: N,
            })
        }
    }
}

/// Precondition: the game has not been won or drawn.
pub struct GameNotOver;

impl GameNotOver {
    /// Rejects any move once the result is terminal.
    pub fn check<const N: usize>(_coord: &Coord, game: &GameEngine<N>) -> Result<(), MoveError> {
        if game.state().is_over() {
            Err(MoveError::GameAlreadyOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the target square is empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Rejects moves onto a marked square.
    pub fn check<const N: usize>(coord: &Coord, game: &GameEngine<N>) -> Result<(), MoveError> {
        if game.board().is_empty(*coord) {
            Ok(())
        } else {
            Err(MoveError::CellOccupied {
                row: coord.row,
                col: coord.col,
            })
        }
    }
}

/// Composite precondition, checked bounds first, then game state, then square.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(game))]
    pub fn check<const N: usize>(coord: &Coord, game: &GameEngine<N>) -> Result<(), MoveError> {
        InBounds::check(coord, game)?;
        GameNotOver::check(coord, game)?;
        CellIsEmpty::check(coord, game)?;
        Ok(())
    }
}

/// Contract for placing a mark.
///
/// Postconditions: exactly one move was recorded, and every engine
/// invariant still holds.
pub struct MoveContract;

impl<const N: usize> Contract<GameEngine<N>, Coord> for MoveContract {
    fn pre(game: &GameEngine<N>, coord: &Coord) -> Result<(), MoveError> {
        LegalMove::check(coord, game)
    }

    fn post(before: &GameEngine<N>, after: &GameEngine<N>) -> Result<(), MoveError> {
        if after.history().len() != before.history().len() + 1 {
            warn!(
                before = before.history().len(),
                after = after.history().len(),
                "Move count did not advance by one"
            );
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: exactly one move recorded".to_string(),
            ));
        }

        EngineInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Postcondition failed");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameResult, Player, Square, TicTacToe};

    #[test]
    fn test_precondition_empty_square() {
        let game = TicTacToe::new();
        assert!(MoveContract::pre(&game, &Coord::new(1, 1)).is_ok());
    }

    #[test]
    fn test_precondition_occupied_square() {
        let mut game = TicTacToe::new();
        game.apply_move(1, 1).unwrap();
        assert!(matches!(
            MoveContract::pre(&game, &Coord::new(1, 1)),
            Err(MoveError::CellOccupied { row: 1, col: 1 })
        ));
    }

    #[test]
    fn test_bounds_checked_before_game_over() {
        let mut game = TicTacToe::new();
        game.state.result = GameResult::Draw;
        assert!(matches!(
            MoveContract::pre(&game, &Coord::new(0, 9)),
            Err(MoveError::OutOfBounds { .. })
        ));
        assert_eq!(
            MoveContract::pre(&game, &Coord::new(0, 0)),
            Err(MoveError::GameAlreadyOver)
        );
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let game = TicTacToe::new();
        let mut after = game.clone();
        after.apply_move(0, 2).unwrap();
        assert!(MoveContract::post(&game, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let game = TicTacToe::new();
        let mut after = game.clone();
        after.apply_move(1, 1).unwrap();
        after.state.board.set(Coord::new(0, 0), Square::Occupied(Player::O));
        assert!(matches!(
            MoveContract::post(&game, &after),
            Err(MoveError::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_postcondition_detects_missing_move() {
        let game = TicTacToe::new();
        assert!(MoveContract::post(&game, &game.clone()).is_err());
    }
}
