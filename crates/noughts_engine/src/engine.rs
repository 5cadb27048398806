//! The game engine: owns the state and applies moves.

use super::action::{Move, MoveError};
use super::contracts::{Contract, MoveContract};
use super::rules;
use super::{Board, Coord, GameResult, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Engine construction options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Player who moves first in every round.
    #[serde(default)]
    pub first_player: Player,
}

impl EngineConfig {
    /// Configuration with the given opening player.
    pub fn new(first_player: Player) -> Self {
        Self { first_player }
    }
}

/// Snapshot of a game: board, next player, and result.
///
/// `result` always equals [`rules::evaluate`] of `board`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState<const N: usize> {
    pub(crate) board: Board<N>,
    pub(crate) turn: Player,
    pub(crate) result: GameResult,
}

impl<const N: usize> GameState<N> {
    fn initial(first_player: Player) -> Self {
        Self {
            board: Board::new(),
            turn: first_player,
            result: GameResult::InProgress,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board<N> {
        &self.board
    }

    /// Returns the player whose mark is placed next.
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Returns the current result.
    pub fn result(&self) -> &GameResult {
        &self.result
    }

    /// Returns true once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        self.result.is_terminal()
    }
}

/// Game engine for an `N`×`N` board.
///
/// All mutation goes through [`GameEngine::apply_move`] and
/// [`GameEngine::reset`]. Readers get `&GameState` or an owned copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine<const N: usize> {
    pub(crate) config: EngineConfig,
    pub(crate) state: GameState<N>,
    pub(crate) history: Vec<Move>,
}

/// The classic 3×3 game.
pub type TicTacToe = GameEngine<3>;

impl<const N: usize> GameEngine<N> {
    /// Creates an engine where X moves first.
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Creates an engine from a configuration.
    #[instrument]
    pub fn with_config(config: EngineConfig) -> Self {
        debug!(size = N, "Initializing engine");
        Self {
            config,
            state: GameState::initial(config.first_player),
            history: Vec::new(),
        }
    }

    /// Returns the configuration the engine was built with.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns a read-only view of the current state.
    pub fn state(&self) -> &GameState<N> {
        &self.state
    }

    /// Returns an owned copy of the current state.
    pub fn snapshot(&self) -> GameState<N> {
        self.state.clone()
    }

    /// Returns the board.
    pub fn board(&self) -> &Board<N> {
        &self.state.board
    }

    /// Returns the player to move.
    pub fn turn(&self) -> Player {
        self.state.turn
    }

    /// Returns the current result.
    pub fn result(&self) -> &GameResult {
        &self.state.result
    }

    /// Moves accepted since the last reset.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Empty squares in row-major order, or nothing once the game is over.
    pub fn available_moves(&self) -> Vec<Coord> {
        if self.state.is_over() {
            Vec::new()
        } else {
            self.state.board.empty_squares()
        }
    }

    /// Places the current player's mark at (`row`, `col`).
    ///
    /// # Errors
    ///
    /// - [`MoveError::OutOfBounds`] if either index is not below `N`
    /// - [`MoveError::GameAlreadyOver`] if the game is won or drawn
    /// - [`MoveError::CellOccupied`] if the square holds a mark
    ///
    /// A rejected move leaves the engine untouched.
    pub fn apply_move(&mut self, row: usize, col: usize) -> Result<(), MoveError> {
        self.play(Coord::new(row, col))
    }

    /// Same as [`GameEngine::apply_move`], taking a [`Coord`].
    #[instrument(skip(self), fields(player = %self.state.turn))]
    pub fn play(&mut self, coord: Coord) -> Result<(), MoveError> {
        if let Err(e) = MoveContract::pre(self, &coord) {
            warn!(error = %e, "Move rejected");
            return Err(e);
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        let player = self.state.turn;
        self.state.board.set(coord, Square::Occupied(player));
        self.history.push(Move::new(player, coord));
        self.state.turn = player.opponent();
        self.state.result = rules::evaluate(&self.state.board);
        debug!(%coord, result = %self.state.result, "Move applied");

        if self.state.is_over() {
            info!(result = %self.state.result, moves = self.history.len(), "Game over");
        }

        #[cfg(debug_assertions)]
        MoveContract::post(&before, self)?;

        Ok(())
    }

    /// Consuming form of [`GameEngine::apply_move`].
    ///
    /// Returns the engine alongside the outcome so callers can thread
    /// state through without holding a mutable borrow.
    pub fn with_move(mut self, row: usize, col: usize) -> (Self, Result<(), MoveError>) {
        let outcome = self.apply_move(row, col);
        (self, outcome)
    }

    /// Returns the engine to its freshly initialized state.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!(first_player = %self.config.first_player, "Resetting game");
        self.state = GameState::initial(self.config.first_player);
        self.history.clear();
    }

    /// Plays `moves` on a fresh engine, stopping at the first rejection.
    #[instrument(skip(moves), fields(count = moves.len()))]
    pub fn replay(config: EngineConfig, moves: &[Coord]) -> Result<Self, MoveError> {
        let mut engine = Self::with_config(config);
        for coord in moves {
            engine.play(*coord)?;
        }
        Ok(engine)
    }
}

impl<const N: usize> Default for GameEngine<N> {
    fn default() -> Self {
        Self::new()
    }
}
