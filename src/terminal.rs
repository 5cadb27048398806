//! Line-oriented terminal front end.
//!
//! Renders engine snapshots as text and turns typed lines into engine
//! calls. Holds no game logic of its own.

use noughts_engine::{Coord, GameEngine, GameResult, GameState};
use std::io::{self, BufRead, Write};
use tracing::{debug, instrument};

/// A command typed at the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalCommand {
    /// Place the current player's mark.
    Place(Coord),
    /// Start a new round.
    Reset,
    /// Show the command list.
    Help,
    /// Leave the session.
    Quit,
}

/// Input that could not be understood.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum InputError {
    /// Nothing was typed.
    #[display("Empty input")]
    Empty,
    /// A coordinate needs exactly a row and a column.
    #[display("Expected a row and a column, e.g. `1 2` or `1,2`")]
    WrongArity,
    /// An index was not a non-negative integer.
    #[display("Not a board index: {_0:?}")]
    BadIndex(String),
}

impl std::error::Error for InputError {}

const HELP: &str = "Commands: `<row> <col>` places a mark (0-based), `reset`, `help`, `quit`";

/// Parses `row col` or `row,col`.
pub fn parse_coord(input: &str) -> Result<Coord, InputError> {
    let parts: Vec<&str> = input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .collect();

    match parts.as_slice() {
        [] => Err(InputError::Empty),
        [row, col] => {
            let index = |s: &str| {
                s.parse::<usize>()
                    .map_err(|_| InputError::BadIndex(s.to_string()))
            };
            Ok(Coord::new(index(*row)?, index(*col)?))
        }
        _ => Err(InputError::WrongArity),
    }
}

/// Parses one line of input.
pub fn parse_command(line: &str) -> Result<TerminalCommand, InputError> {
    match line.trim().to_ascii_lowercase().as_str() {
        "reset" | "r" => Ok(TerminalCommand::Reset),
        "help" | "h" | "?" => Ok(TerminalCommand::Help),
        "quit" | "q" | "exit" => Ok(TerminalCommand::Quit),
        other => parse_coord(other).map(TerminalCommand::Place),
    }
}

/// Renders a snapshot: the grid, then a status line.
///
/// Winning squares are bracketed so they stand out.
pub fn render<const N: usize>(state: &GameState<N>) -> String {
    let result = state.result();
    let mut out = String::new();

    for (r, row) in state.board().rows().iter().enumerate() {
        let cells: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(c, square)| {
                if result.contains(Coord::new(r, c)) {
                    format!("[{}]", square.symbol())
                } else {
                    format!(" {} ", square.symbol())
                }
            })
            .collect();
        out.push_str(&cells.join("|"));
        out.push('\n');
    }

    match result {
        GameResult::InProgress => out.push_str(&format!("Next player: {}", state.turn())),
        GameResult::Win { mark, .. } => out.push_str(&format!("{} wins!", mark)),
        GameResult::Draw => out.push_str("Draw!"),
    }
    out
}

/// Drives `engine` from `input` until `quit` or end of input.
#[instrument(skip_all)]
pub fn run_session<const N: usize>(
    engine: &mut GameEngine<N>,
    input: impl BufRead,
    mut output: impl Write,
) -> io::Result<()> {
    writeln!(output, "{}", HELP)?;
    writeln!(output, "{}", render(engine.state()))?;

    for line in input.lines() {
        let line = line?;
        match parse_command(&line) {
            Ok(TerminalCommand::Place(coord)) => match engine.play(coord) {
                Ok(()) => writeln!(output, "{}", render(engine.state()))?,
                Err(e) => writeln!(output, "Invalid move: {}", e)?,
            },
            Ok(TerminalCommand::Reset) => {
                engine.reset();
                writeln!(output, "{}", render(engine.state()))?;
            }
            Ok(TerminalCommand::Help) => writeln!(output, "{}", HELP)?,
            Ok(TerminalCommand::Quit) => {
                debug!("Quit requested");
                break;
            }
            Err(InputError::Empty) => {}
            Err(e) => writeln!(output, "{}", e)?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_coord_forms() {
        assert_eq!(parse_coord("1 2"), Ok(Coord::new(1, 2)));
        assert_eq!(parse_coord("1,2"), Ok(Coord::new(1, 2)));
        assert_eq!(parse_coord(" 0 , 0 "), Ok(Coord::new(0, 0)));
    }

    #[test]
    fn test_parse_coord_rejects() {
        assert_eq!(parse_coord(""), Err(InputError::Empty));
        assert_eq!(parse_coord("1"), Err(InputError::WrongArity));
        assert_eq!(parse_coord("1 2 3"), Err(InputError::WrongArity));
        assert_eq!(parse_coord("-1 2"), Err(InputError::BadIndex("-1".to_string())));
    }

    #[test]
    fn test_parse_command_words() {
        assert_eq!(parse_command("RESET"), Ok(TerminalCommand::Reset));
        assert_eq!(parse_command("q"), Ok(TerminalCommand::Quit));
        assert_eq!(parse_command("2 1"), Ok(TerminalCommand::Place(Coord::new(2, 1))));
    }

    #[test]
    fn test_render_in_progress() {
        let mut engine = GameEngine::<3>::new();
        engine.apply_move(1, 1).unwrap();
        assert_eq!(
            render(engine.state()),
            " . | . | . \n . | X | . \n . | . | . \nNext player: O"
        );
    }

    #[test]
    fn test_render_highlights_win() {
        let mut engine = GameEngine::<3>::new();
        for (row, col) in [(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)] {
            engine.apply_move(row, col).unwrap();
        }
        let text = render(engine.state());
        assert!(text.starts_with("[X]|[X]|[X]\n"));
        assert!(text.ends_with("X wins!"));
    }
}
