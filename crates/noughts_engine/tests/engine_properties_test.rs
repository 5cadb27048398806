//! Property tests for the game engine.

use noughts_engine::{
    rules, Board, Coord, EngineConfig, GameEngine, GameResult, MoveError, Player, Square,
    TicTacToe,
};
use proptest::prelude::*;

fn any_player() -> impl Strategy<Value = Player> {
    prop_oneof![Just(Player::X), Just(Player::O)]
}

/// Arbitrary move attempts, including out-of-range ones.
fn any_moves() -> impl Strategy<Value = Vec<(usize, usize)>> {
    prop::collection::vec((0usize..4, 0usize..4), 0..20)
}

proptest! {
    #[test]
    fn rejected_moves_never_change_marks(first in any_player(), moves in any_moves()) {
        let mut game = TicTacToe::with_config(EngineConfig::new(first));
        for (row, col) in moves {
            let before = game.clone();
            match game.apply_move(row, col) {
                Ok(()) => {
                    for (coord, square) in before.board().iter() {
                        if square != Square::Empty {
                            prop_assert_eq!(game.board().get(coord), Some(square));
                        }
                    }
                }
                Err(_) => prop_assert_eq!(&game, &before),
            }
        }
    }

    #[test]
    fn marks_alternate_from_first_player(first in any_player(), moves in any_moves()) {
        let mut game = TicTacToe::with_config(EngineConfig::new(first));
        for (row, col) in moves {
            let _ = game.apply_move(row, col);
        }
        let mut expected = first;
        for mov in game.history() {
            prop_assert_eq!(mov.player, expected);
            expected = expected.opponent();
        }
        prop_assert_eq!(game.turn(), expected);
    }

    #[test]
    fn reset_matches_fresh_engine(first in any_player(), moves in any_moves()) {
        let config = EngineConfig::new(first);
        let mut game = TicTacToe::with_config(config);
        for (row, col) in moves {
            let _ = game.apply_move(row, col);
        }
        game.reset();
        prop_assert_eq!(&game, &TicTacToe::with_config(config));
        prop_assert_eq!(game.snapshot(), TicTacToe::with_config(config).snapshot());
    }

    #[test]
    fn result_is_evaluation_of_board(moves in any_moves()) {
        let mut game = TicTacToe::new();
        for (row, col) in moves {
            let _ = game.apply_move(row, col);
            prop_assert_eq!(game.result(), &rules::evaluate(game.board()));
        }
    }

    #[test]
    fn terminal_games_reject_every_move(moves in any_moves(), row in 0usize..3, col in 0usize..3) {
        let mut game = TicTacToe::new();
        for (r, c) in moves {
            let _ = game.apply_move(r, c);
        }
        if game.result().is_terminal() {
            prop_assert_eq!(game.apply_move(row, col), Err(MoveError::GameAlreadyOver));
        }
    }

    #[test]
    fn transposed_row_win_is_column_win(
        player in any_player(),
        row in 0usize..3,
        filler in prop::array::uniform3(prop::array::uniform3(any::<bool>())),
    ) {
        // Row `row` belongs to `player`; every other square is empty or the
        // opponent's, so no column can be uniformly `player`.
        let mut rows = filler.map(|cells| {
            cells.map(|taken| if taken { Square::Occupied(player.opponent()) } else { Square::Empty })
        });
        rows[row] = [Square::Occupied(player); 3];
        let board = Board::from_rows(rows);

        let GameResult::Win { mark, line } = rules::evaluate(&board) else {
            unreachable!("a full row always wins");
        };
        prop_assume!(mark == player);

        let expected: Vec<Coord> = line.iter().map(|c| c.transposed()).collect();
        prop_assert_eq!(
            rules::evaluate(&board.transposed()),
            GameResult::Win { mark, line: expected }
        );
    }

    #[test]
    fn larger_boards_detect_full_rows(player in any_player(), row in 0usize..5) {
        let mut game = GameEngine::<5>::with_config(EngineConfig::new(player));
        let other_row = (row + 1) % 5;
        for col in 0..5 {
            game.apply_move(row, col).unwrap();
            if col < 4 {
                game.apply_move(other_row, col).unwrap();
            }
        }
        prop_assert_eq!(game.result().winner(), Some(player));
        prop_assert_eq!(game.result().line().len(), 5);
    }
}
