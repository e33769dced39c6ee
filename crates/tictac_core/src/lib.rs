//! Pure tic-tac-toe game logic.
//!
//! # Architecture
//!
//! - **Board**: fixed 3x3 grid of [`Cell`]s
//! - **Rules**: stateless win/draw evaluation ([`rules::evaluate`])
//! - **GameState**: board, player to move, turn counter, history, outcome
//! - **GameController**: turn loop over an [`InputSource`] and a [`Presenter`]
//!
//! # Example
//!
//! ```
//! use tictac_core::{GameState, Move, Outcome, Player};
//!
//! let moves: Vec<Move> = ["a1", "b1", "a2", "b2", "a3"]
//!     .iter()
//!     .map(|token| token.parse().unwrap())
//!     .collect();
//! let game = GameState::replay(&moves).unwrap();
//! assert_eq!(game.outcome(), Outcome::Win(Player::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod controller;
mod invariants;
mod position;
pub mod rules;
mod state;
mod types;

pub use board::{Board, BoardError};
pub use controller::{ControllerError, GameController, InputError, InputSource, Phase, Presenter};
pub use invariants::{
    AlternatingTurnInvariant, GameInvariants, HistoryConsistentInvariant, Invariant,
    InvariantSet, InvariantViolation, TurnCountInvariant,
};
pub use position::{Column, Move, ParseMoveError, Row, SIZE};
pub use state::{GameState, InvalidMove, MoveError};
pub use types::{Cell, Outcome, Player};
