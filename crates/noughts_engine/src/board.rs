//! Fixed-size square board.

use super::types::{Coord, Player, Square};
use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// An `N`×`N` board stored row-major.
///
/// The size is a compile-time constant. A zero-sized board is rejected
/// when it is constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board<const N: usize> {
    squares: [[Square; N]; N],
}

impl<const N: usize> Board<N> {
    /// Side length of the board.
    pub const SIZE: usize = N;

    /// Creates a new empty board.
    pub fn new() -> Self {
        const { assert!(N > 0, "board size must be positive") };
        Self {
            squares: [[Square::Empty; N]; N],
        }
    }

    /// Builds a board from explicit rows.
    ///
    /// Useful for evaluating positions that did not arise from play.
    pub fn from_rows(squares: [[Square; N]; N]) -> Self {
        const { assert!(N > 0, "board size must be positive") };
        Self { squares }
    }

    /// Gets the square at the given coordinate, or `None` if out of range.
    pub fn get(&self, coord: Coord) -> Option<Square> {
        self.squares
            .get(coord.row)
            .and_then(|row| row.get(coord.col))
            .copied()
    }

    /// Places a mark. Callers have already validated the coordinate.
    pub(crate) fn set(&mut self, coord: Coord, square: Square) {
        self.squares[coord.row][coord.col] = square;
    }

    /// Checks if a square is empty. Out-of-range coordinates are not empty.
    pub fn is_empty(&self, coord: Coord) -> bool {
        matches!(self.get(coord), Some(Square::Empty))
    }

    /// Checks if every square is occupied.
    pub fn is_full(&self) -> bool {
        self.squares.iter().flatten().all(|s| *s != Square::Empty)
    }

    /// Returns all rows as a read-only view.
    pub fn rows(&self) -> &[[Square; N]; N] {
        &self.squares
    }

    /// Iterates over every square with its coordinate, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Square)> + '_ {
        self.squares.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(move |(col, square)| (Coord::new(row, col), *square))
        })
    }

    /// Empty coordinates in row-major order.
    pub fn empty_squares(&self) -> Vec<Coord> {
        self.iter()
            .filter(|(_, square)| *square == Square::Empty)
            .map(|(coord, _)| coord)
            .collect()
    }

    /// Number of squares occupied by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.iter()
            .filter(|(_, square)| *square == Square::Occupied(player))
            .count()
    }

    /// Returns the board mirrored across its main diagonal.
    pub fn transposed(&self) -> Self {
        let mut out = Self::new();
        for (coord, square) in self.iter() {
            out.set(coord.transposed(), square);
        }
        out
    }

    /// Formats the board as rows of `X`, `O` and `.` separated by newlines.
    pub fn display(&self) -> String {
        self.squares
            .iter()
            .map(|row| row.iter().map(|s| s.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl<const N: usize> Default for Board<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> std::fmt::Display for Board<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display())
    }
}

// serde only implements arrays up to a fixed length, so the grid goes
// through nested sequences instead.
impl<const N: usize> Serialize for Board<N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.squares.iter().map(|row| row.as_slice()))
    }
}

impl<'de, const N: usize> Deserialize<'de> for Board<N> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rows: Vec<Vec<Square>> = Vec::deserialize(deserializer)?;
        if rows.len() != N {
            return Err(de::Error::invalid_length(rows.len(), &"N rows"));
        }
        let mut board = Self::new();
        for (r, row) in rows.into_iter().enumerate() {
            if row.len() != N {
                return Err(de::Error::invalid_length(row.len(), &"N columns"));
            }
            for (c, square) in row.into_iter().enumerate() {
                board.set(Coord::new(r, c), square);
            }
        }
        Ok(board)
    }
}
