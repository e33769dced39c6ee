//! Interactive two-player tic-tac-toe.
//!
//! Wires the [`tictac_core`] game controller to a line-based stdin
//! [`LineInput`] and a plain-text [`TerminalPresenter`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod glyphs;
mod input;
mod presenter;

pub use cli::Cli;
pub use glyphs::Glyphs;
pub use input::{LineInput, prompt};
pub use presenter::TerminalPresenter;
