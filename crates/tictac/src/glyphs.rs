//! Cell glyphs used by the terminal presenter.

use derive_getters::Getters;
use derive_setters::Setters;
use tictac_core::Cell;

/// Text drawn for each cell state.
///
/// All glyphs should have the same width so the grid lines up; column
/// headers are centred to the widest glyph.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters)]
#[setters(prefix = "with_", into)]
pub struct Glyphs {
    /// Glyph for a cell claimed by X.
    x: String,
    /// Glyph for a cell claimed by O.
    o: String,
    /// Glyph for an unclaimed cell.
    empty: String,
}

impl Glyphs {
    /// Returns the glyph for a cell.
    pub fn glyph(&self, cell: Cell) -> &str {
        match cell {
            Cell::Empty => &self.empty,
            Cell::X => &self.x,
            Cell::O => &self.o,
        }
    }

    /// Width of the widest glyph, in characters.
    pub fn width(&self) -> usize {
        [&self.x, &self.o, &self.empty]
            .iter()
            .map(|g| g.chars().count())
            .max()
            .unwrap_or(0)
    }
}

impl Default for Glyphs {
    fn default() -> Self {
        Self {
            x: " X ".to_string(),
            o: " O ".to_string(),
            empty: "   ".to_string(),
        }
    }
}
