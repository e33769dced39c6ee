//! tictac - two players, one terminal.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use tictac::{Cli, Glyphs, LineInput, TerminalPresenter};
use tictac_core::GameController;
use tracing::info;

fn main() -> Result<()> {
    let _cli = Cli::parse();
    initialize_tracing();

    let mut controller = GameController::new(
        LineInput::stdin(),
        TerminalPresenter::stdout(Glyphs::default()),
    );
    let outcome = controller.run()?;

    info!(%outcome, "Exiting");
    Ok(())
}

/// Logs go to stderr so they never interleave with the board.
fn initialize_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init();
}
