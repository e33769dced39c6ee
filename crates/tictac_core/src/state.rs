//! Game state and the single operation that advances it.

use super::board::{Board, BoardError};
use super::invariants::{GameInvariants, InvariantSet};
use super::position::{Move, ParseMoveError};
use super::rules;
use super::types::{Outcome, Player};
use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Why a move was refused.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum InvalidMove {
    /// Input did not name a board location.
    #[display("{}", _0)]
    #[from]
    Unrecognized(ParseMoveError),
    /// Coordinates off the board.
    #[display("{} is off the board", _0)]
    OutOfBounds(#[error(not(source))] Move),
    /// Target cell already claimed.
    #[display("{} is already taken", _0)]
    Occupied(#[error(not(source))] Move),
}

/// Error that can occur when applying a move.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum MoveError {
    /// The move cannot be played; ask for another.
    #[display("Invalid move: {}", _0)]
    #[from]
    InvalidMove(InvalidMove),
    /// The game already has a terminal outcome.
    #[display("Game is already over")]
    GameOver,
}

impl From<ParseMoveError> for MoveError {
    fn from(err: ParseMoveError) -> Self {
        MoveError::InvalidMove(InvalidMove::Unrecognized(err))
    }
}

/// Complete game state.
///
/// `turn` is the number of the next move and always equals
/// `history.len() + 1`. Once `outcome` is terminal the state accepts no
/// further moves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    current_player: Player,
    turn: usize,
    history: Vec<Move>,
    outcome: Outcome,
}

impl GameState {
    /// Creates a new game: empty board, X to move, turn 1.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            turn: 1,
            history: Vec::new(),
            outcome: Outcome::InProgress,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move, or the last mover once the game is over.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the number of the next move (1-indexed).
    pub fn turn(&self) -> usize {
        self.turn
    }

    /// Returns the accepted moves in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the game outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Checks if the game has a terminal outcome.
    pub fn is_over(&self) -> bool {
        self.outcome.is_terminal()
    }

    /// Applies a move for the current player, returning the next state.
    ///
    /// The receiver is never modified, so a refused move leaves the game
    /// exactly as it was.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the outcome is already terminal.
    /// - [`MoveError::InvalidMove`] if the move is off the board or the cell
    ///   is taken.
    #[instrument(skip(self), fields(turn = self.turn, player = %self.current_player, mv = %mv))]
    pub fn apply_move(&self, mv: Move) -> Result<Self, MoveError> {
        if self.is_over() {
            warn!(outcome = ?self.outcome, "Move attempted after game end");
            return Err(MoveError::GameOver);
        }

        let mut next = self.clone();
        next.board
            .set(mv.row, mv.col, self.current_player.into())
            .map_err(|err| match err {
                BoardError::OutOfRange { .. } => InvalidMove::OutOfBounds(mv),
                BoardError::CellOccupied { .. } => InvalidMove::Occupied(mv),
            })?;
        next.history.push(mv);

        next.outcome = rules::evaluate(&next.board, self.current_player, self.turn);
        next.turn += 1;

        if next.is_over() {
            info!(outcome = ?next.outcome, "Game finished");
        } else {
            next.current_player = self.current_player.opponent();
            debug!(next_player = %next.current_player, "Move accepted");
        }

        debug_assert!(
            GameInvariants::check_all(&next).is_ok(),
            "Game invariants violated after {}",
            mv
        );

        Ok(next)
    }

    /// Unclaimed cells in row-major order.
    ///
    /// Recomputed from the board on every call.
    pub fn available_moves(&self) -> impl Iterator<Item = Move> + '_ {
        self.board.empty_cells()
    }

    /// Rebuilds a game by playing `moves` from a fresh start.
    ///
    /// # Errors
    ///
    /// Returns the first refusal encountered.
    #[instrument(skip(moves), fields(count = moves.len()))]
    pub fn replay(moves: &[Move]) -> Result<Self, MoveError> {
        moves
            .iter()
            .try_fold(Self::new(), |state, &mv| state.apply_move(mv))
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
