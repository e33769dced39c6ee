//! Plain-text presenter writing the board to a terminal.

use crate::Glyphs;
use std::io::{self, Write};
use strum::IntoEnumIterator;
use tictac_core::{Column, GameState, MoveError, Presenter};
use tracing::{instrument, warn};

/// Writes the board, the player to move and the final result as text.
///
/// ```text
/// Player: O
///    | a | b | c |
///    -------------
///  1 | X |   |   |
///    -------------
///  2 |   |   |   |
///    -------------
///  3 |   |   |   |
///    -------------
/// ```
#[derive(Debug)]
pub struct TerminalPresenter<W> {
    out: W,
    glyphs: Glyphs,
}

impl TerminalPresenter<io::Stdout> {
    /// Presenter writing to standard output.
    pub fn stdout(glyphs: Glyphs) -> Self {
        Self::new(io::stdout(), glyphs)
    }
}

impl<W: Write> TerminalPresenter<W> {
    /// Creates a presenter writing to `out`.
    pub fn new(out: W, glyphs: Glyphs) -> Self {
        Self { out, glyphs }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Formats the board for `state`.
    pub fn board_text(&self, state: &GameState) -> String {
        let width = self.glyphs.width();
        let rule = format!("   {}", "-".repeat((width + 1) * 3 + 1));

        let header: String = Column::iter()
            .map(|column| format!("{:^width$}|", column.to_string()))
            .collect();

        let mut lines = vec![
            format!("Player: {}", state.current_player()),
            format!("   |{}", header),
            rule.clone(),
        ];
        for (i, row) in state.board().rows().iter().enumerate() {
            let cells: String = row
                .iter()
                .map(|&cell| format!("{:^width$}|", self.glyphs.glyph(cell)))
                .collect();
            lines.push(format!(" {} |{}", i + 1, cells));
            lines.push(rule.clone());
        }
        lines.join("\n")
    }

    fn write_block(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{}", text)?;
        self.out.flush()
    }
}

impl<W: Write> Presenter for TerminalPresenter<W> {
    #[instrument(skip_all, fields(turn = state.turn()))]
    fn render(&mut self, state: &GameState) {
        let mut text = self.board_text(state);
        if state.is_over() {
            text.push_str(&format!("\n{}", state.outcome()));
        }
        if let Err(err) = self.write_block(&text) {
            warn!(%err, "Failed to render board");
        }
    }

    #[instrument(skip_all)]
    fn reject(&mut self, error: &MoveError) {
        let text = format!("{}. Please enter again", error);
        if let Err(err) = self.write_block(&text) {
            warn!(%err, "Failed to report rejected move");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictac_core::Move;

    fn render(state: &GameState) -> String {
        let mut presenter = TerminalPresenter::new(Vec::new(), Glyphs::default());
        presenter.render(state);
        String::from_utf8(presenter.into_inner()).unwrap()
    }

    #[test]
    fn test_render_marks_and_player() {
        let state = GameState::replay(&[Move::new(0, 0)]).unwrap();
        let text = render(&state);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Player: O");
        assert_eq!(lines[1], "   | a | b | c |");
        assert_eq!(lines[2], "   -------------");
        assert_eq!(lines[3], " 1 | X |   |   |");
        assert!(!text.contains("tie!"));
    }

    #[test]
    fn test_render_announces_winner() {
        let moves: Vec<Move> = ["a1", "b1", "a2", "b2", "a3"]
            .iter()
            .map(|t| t.parse().unwrap())
            .collect();
        let state = GameState::replay(&moves).unwrap();
        assert!(render(&state).ends_with("winner is X\n"));
    }

    #[test]
    fn test_custom_glyph_width() {
        let glyphs = Glyphs::default().with_x("X").with_o("O").with_empty(".");
        let presenter = TerminalPresenter::new(Vec::new(), glyphs);
        let text = presenter.board_text(&GameState::new());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1], "   |a|b|c|");
        assert_eq!(lines[2], "   -------");
        assert_eq!(lines[3], " 1 |.|.|.|");
    }
}
