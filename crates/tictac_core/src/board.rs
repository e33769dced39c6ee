//! The 3x3 grid of cells.

use super::position::{Move, SIZE};
use super::types::Cell;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Errors raised by direct board access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// Coordinate outside 0..=2.
    #[display("Coordinate ({}, {}) is off the board", row, col)]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
    /// Target cell already claimed.
    #[display("Cell ({}, {}) is already occupied", row, col)]
    CellOccupied {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Cells indexed `[row][col]`.
    cells: [[Cell; SIZE]; SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the cell at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        self.cells
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .ok_or(BoardError::OutOfRange { row, col })
    }

    /// Claims the cell at `(row, col)`.
    ///
    /// This is the authoritative occupancy check: a non-empty target is
    /// refused with [`BoardError::CellOccupied`].
    #[instrument(skip(self))]
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> Result<(), BoardError> {
        let slot = self
            .cells
            .get_mut(row)
            .and_then(|r| r.get_mut(col))
            .ok_or(BoardError::OutOfRange { row, col })?;
        if !slot.is_empty() {
            return Err(BoardError::CellOccupied { row, col });
        }
        *slot = cell;
        Ok(())
    }

    /// Checks if no cell is empty.
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|cell| !cell.is_empty())
    }

    /// Rows of the board, top to bottom.
    pub fn rows(&self) -> &[[Cell; SIZE]; SIZE] {
        &self.cells
    }

    /// Every coordinate with its cell, in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Move, Cell)> + '_ {
        Move::all().map(|mv| (mv, self.cells[mv.row][mv.col]))
    }

    /// Unclaimed coordinates in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Move> + '_ {
        self.cells()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(mv, _)| mv)
    }

    /// Number of claimed cells.
    pub fn occupied(&self) -> usize {
        self.cells.iter().flatten().filter(|cell| !cell.is_empty()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Player;

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new();
        assert!(!board.is_full());
        assert_eq!(board.empty_cells().count(), 9);
    }

    #[test]
    fn test_get_out_of_range() {
        let board = Board::new();
        assert_eq!(
            board.get(3, 0),
            Err(BoardError::OutOfRange { row: 3, col: 0 })
        );
        assert_eq!(
            board.get(0, 7),
            Err(BoardError::OutOfRange { row: 0, col: 7 })
        );
    }

    #[test]
    fn test_set_refuses_occupied_cell() {
        let mut board = Board::new();
        board.set(1, 1, Cell::X).unwrap();
        assert_eq!(
            board.set(1, 1, Cell::O),
            Err(BoardError::CellOccupied { row: 1, col: 1 })
        );
        assert_eq!(board.get(1, 1), Ok(Cell::X));
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for (i, mv) in Move::all().enumerate() {
            let player = if i % 2 == 0 { Player::X } else { Player::O };
            board.set(mv.row, mv.col, player.into()).unwrap();
        }
        assert!(board.is_full());
        assert_eq!(board.occupied(), 9);
        assert_eq!(board.empty_cells().next(), None);
    }

    #[test]
    fn test_empty_cells_are_row_major() {
        let mut board = Board::new();
        board.set(0, 1, Cell::O).unwrap();
        let open: Vec<Move> = board.empty_cells().take(3).collect();
        assert_eq!(open, [Move::new(0, 0), Move::new(0, 2), Move::new(1, 0)]);
    }
}
