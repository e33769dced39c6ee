//! Board coordinates and the `a1`..`c3` location tokens that name them.

use derive_new::new;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{EnumIter, EnumString, IntoEnumIterator};
use tracing::instrument;

/// Number of rows and columns on the board.
pub const SIZE: usize = 3;

/// Column letter of a location token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, EnumIter, strum::Display)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum Column {
    /// Leftmost column.
    A,
    /// Middle column.
    B,
    /// Rightmost column.
    C,
}

impl Column {
    /// Zero-based column index.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Column for a zero-based index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::iter().nth(index)
    }
}

/// Row digit of a location token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, EnumIter, strum::Display)]
pub enum Row {
    /// Top row.
    #[strum(serialize = "1")]
    One,
    /// Middle row.
    #[strum(serialize = "2")]
    Two,
    /// Bottom row.
    #[strum(serialize = "3")]
    Three,
}

impl Row {
    /// Zero-based row index.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Row for a zero-based index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::iter().nth(index)
    }
}

/// A request to claim the cell at `(row, col)`.
///
/// A move is only a coordinate pair; bounds and occupancy are checked when
/// it is applied to a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, new, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Move {
    /// Zero-based row.
    pub row: usize,
    /// Zero-based column.
    pub col: usize,
}

impl Move {
    /// Checks that both coordinates lie on the board.
    pub fn in_bounds(self) -> bool {
        self.row < SIZE && self.col < SIZE
    }

    /// Parses a location token such as `a1` or `C3`.
    ///
    /// The letter picks the column and the digit picks the row. Surrounding
    /// whitespace is ignored.
    #[instrument]
    pub fn from_token(token: &str) -> Result<Self, ParseMoveError> {
        let trimmed = token.trim();
        let mut chars = trimmed.chars();
        let column = chars
            .next()
            .and_then(|c| Column::from_str(c.encode_utf8(&mut [0; 4])).ok());
        let row = Row::from_str(chars.as_str()).ok();

        match (column, row) {
            (Some(column), Some(row)) => Ok(Self::new(row.index(), column.index())),
            _ => Err(ParseMoveError::new(trimmed)),
        }
    }

    /// Returns the location token for this move, if it is on the board.
    pub fn token(self) -> Option<String> {
        let column = Column::from_index(self.col)?;
        let row = Row::from_index(self.row)?;
        Some(format!("{}{}", column, row))
    }

    /// All nine board coordinates in row-major order.
    pub fn all() -> impl Iterator<Item = Move> {
        (0..SIZE).flat_map(|row| (0..SIZE).map(move |col| Move::new(row, col)))
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.token() {
            Some(token) => write!(f, "{}", token),
            None => write!(f, "({}, {})", self.row, self.col),
        }
    }
}

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s)
    }
}

impl From<Move> for String {
    fn from(mv: Move) -> Self {
        mv.to_string()
    }
}

impl TryFrom<String> for Move {
    type Error = ParseMoveError;

    fn try_from(token: String) -> Result<Self, Self::Error> {
        Self::from_token(&token)
    }
}

/// A token that does not name one of the nine board locations.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("{:?} is not a board location (expected a1..c3)", token)]
pub struct ParseMoveError {
    /// The rejected input, without surrounding whitespace.
    pub token: String,
}

impl ParseMoveError {
    /// Creates a parse error for the given token.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lowercase_token() {
        assert_eq!(Move::from_token("a1"), Ok(Move::new(0, 0)));
        assert_eq!(Move::from_token("b3"), Ok(Move::new(2, 1)));
    }

    #[test]
    fn test_parse_is_case_insensitive_and_trims() {
        assert_eq!(Move::from_token("C3"), Ok(Move::new(2, 2)));
        assert_eq!(Move::from_token("  c2\n"), Ok(Move::new(1, 2)));
    }

    #[test]
    fn test_parse_rejects_out_of_grid_tokens() {
        for token in ["z9", "a4", "d1", "a0", "", "a", "1a", "a11", "é1"] {
            assert!(Move::from_token(token).is_err(), "accepted {:?}", token);
        }
    }

    #[test]
    fn test_token_round_trip_covers_all_cells() {
        let tokens: Vec<String> = Move::all().filter_map(Move::token).collect();
        assert_eq!(
            tokens,
            ["a1", "b1", "c1", "a2", "b2", "c2", "a3", "b3", "c3"]
        );
        for token in tokens {
            assert_eq!(Move::from_token(&token).unwrap().to_string(), token);
        }
    }

    #[test]
    fn test_out_of_bounds_display() {
        let mv = Move::new(3, 0);
        assert!(!mv.in_bounds());
        assert_eq!(mv.token(), None);
        assert_eq!(mv.to_string(), "(3, 0)");
    }
}
