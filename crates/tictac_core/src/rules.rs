//! Game rules for tic-tac-toe.
//!
//! Pure functions that judge a board after a move. Only the player who just
//! moved is ever tested: a move can complete a line for its own player and
//! nobody else.

use super::board::Board;
use super::types::{Cell, Outcome, Player};
use tracing::{instrument, trace};

/// Three `(row, col)` coordinates forming a winning line.
pub type Line = [(usize, usize); 3];

/// First turn on which a win is checked.
pub const FIRST_CHECKED_TURN: usize = 4;

/// Last turn of a game; a board is full once it has been played.
pub const FINAL_TURN: usize = 9;

/// Winning lines in scan order: rows, then columns, then diagonals.
pub const LINES: [Line; 8] = [
    // Rows
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // Columns
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // Diagonals
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// Returns the first line in scan order fully owned by `player`.
pub fn winning_line(board: &Board, player: Player) -> Option<&'static Line> {
    let mark = Cell::from(player);
    LINES.iter().find(|line| {
        line.iter()
            .all(|&(row, col)| board.get(row, col) == Ok(mark))
    })
}

/// Judges the board after `current` played the move numbered `turn`.
///
/// `turn` is the 1-indexed ordinal of the move just made. Before turn 4 the
/// board is not scanned at all. A board with no line for `current` is a draw
/// only on turn 9.
#[instrument(skip(board))]
pub fn evaluate(board: &Board, current: Player, turn: usize) -> Outcome {
    if turn < FIRST_CHECKED_TURN {
        return Outcome::InProgress;
    }

    if let Some(line) = winning_line(board, current) {
        trace!(?line, "Winning line found");
        return Outcome::Win(current);
    }

    if turn == FINAL_TURN {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
