//! Command-line interface for tictac.

use clap::Parser;

/// Two-player tic-tac-toe in the terminal.
///
/// Players take turns typing a location such as `a1` or `C3` (column
/// letter, then row digit) until someone completes a line or the board
/// fills up.
#[derive(Parser, Debug)]
#[command(name = "tictac")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {}
