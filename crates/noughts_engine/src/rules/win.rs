//! Win detection.

use crate::{Board, Coord, Player, Square};
use tracing::instrument;

/// Every candidate line of an `N`×`N` board, in scan order.
///
/// Rows top to bottom (each left to right), then columns left to right
/// (each top to bottom), then the main diagonal, then the anti-diagonal
/// read from the top row down. That is `2N + 2` lines.
pub fn lines<const N: usize>() -> impl Iterator<Item = Vec<Coord>> {
    let rows = (0..N).map(|r| (0..N).map(|c| Coord::new(r, c)).collect::<Vec<_>>());
    let cols = (0..N).map(|c| (0..N).map(|r| Coord::new(r, c)).collect::<Vec<_>>());
    let main = std::iter::once((0..N).map(|i| Coord::new(i, i)).collect::<Vec<_>>());
    let anti = std::iter::once((0..N).map(|i| Coord::new(i, N - 1 - i)).collect::<Vec<_>>());
    rows.chain(cols).chain(main).chain(anti)
}

/// Returns the first uniformly marked line in scan order.
///
/// Boards holding several complete lines only arise from positions built
/// by hand; the fixed order keeps the answer reproducible.
#[instrument(skip(board))]
pub fn check_winner<const N: usize>(board: &Board<N>) -> Option<(Player, Vec<Coord>)> {
    lines::<N>().find_map(|line| {
        let first = board.get(line[0])?.player()?;
        line.iter()
            .all(|coord| board.get(*coord) == Some(Square::Occupied(first)))
            .then_some((first, line))
    })
}
