//! Turn loop between an input source, the game state and a presenter.

use super::position::Move;
use super::state::{GameState, MoveError};
use super::types::Outcome;
use derive_more::{Display, Error, From};
use tracing::{debug, error, info, instrument};

/// Failure to obtain a token from an [`InputSource`].
#[derive(Debug, Display, Error, From)]
pub enum InputError {
    /// The source has no more input.
    #[display("Input closed before the game finished")]
    Closed,
    /// Reading failed.
    #[display("Failed to read input: {}", _0)]
    #[from]
    Io(std::io::Error),
}

/// Supplies raw location tokens, blocking until one is available.
pub trait InputSource {
    /// Returns the next token typed by the player.
    ///
    /// `available` lists the open cells so the source can offer them.
    fn next_token(&mut self, available: &[Move]) -> Result<String, InputError>;
}

/// Renders game state for the players.
pub trait Presenter {
    /// Shows the current state.
    fn render(&mut self, state: &GameState);

    /// Tells the player why their move was refused.
    fn reject(&mut self, error: &MoveError);
}

/// Controller lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Phase {
    /// Waiting for the current player's move.
    #[display("awaiting move")]
    AwaitingMove,
    /// A terminal outcome was reached.
    #[display("game over")]
    GameOver,
}

/// Errors that end the turn loop.
#[derive(Debug, Display, Error, From)]
pub enum ControllerError {
    /// The input source failed.
    #[display("{}", _0)]
    #[from]
    Input(InputError),
    /// The controller tried to move in a finished game.
    #[display("Controller logic error: {}", _0)]
    Logic(MoveError),
}

/// Drives one game from the first move to a terminal outcome.
#[derive(Debug)]
pub struct GameController<I, P> {
    state: GameState,
    phase: Phase,
    input: I,
    presenter: P,
}

impl<I: InputSource, P: Presenter> GameController<I, P> {
    /// Creates a controller holding a fresh game.
    #[instrument(skip(input, presenter))]
    pub fn new(input: I, presenter: P) -> Self {
        Self {
            state: GameState::new(),
            phase: Phase::AwaitingMove,
            input,
            presenter,
        }
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the controller phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the presenter.
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Handles one token: a single transition of the state machine.
    ///
    /// Refused moves are reported to the presenter and leave the game
    /// untouched. Accepted moves are rendered; a terminal outcome moves the
    /// controller to [`Phase::GameOver`].
    ///
    /// # Errors
    ///
    /// [`ControllerError::Logic`] if called after the game ended.
    #[instrument(skip(self), fields(turn = self.state.turn()))]
    pub fn submit(&mut self, token: &str) -> Result<Phase, ControllerError> {
        if self.phase == Phase::GameOver {
            error!(token, outcome = ?self.state.outcome(), "Move submitted to a finished game");
            return Err(ControllerError::Logic(MoveError::GameOver));
        }

        let applied = Move::from_token(token)
            .map_err(MoveError::from)
            .and_then(|mv| self.state.apply_move(mv));

        match applied {
            Ok(next) => {
                self.state = next;
                self.presenter.render(&self.state);
                if self.state.is_over() {
                    info!(outcome = ?self.state.outcome(), "Game over");
                    self.phase = Phase::GameOver;
                }
            }
            Err(err @ MoveError::InvalidMove(_)) => {
                info!(%err, "Move refused");
                self.presenter.reject(&err);
            }
            Err(err @ MoveError::GameOver) => {
                error!(%err, phase = %self.phase, "Move submitted to a finished game");
                return Err(ControllerError::Logic(err));
            }
        }

        Ok(self.phase)
    }

    /// Runs the turn loop until the game ends and returns its outcome.
    ///
    /// # Errors
    ///
    /// Fails if the input source fails or closes before the game ends.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<Outcome, ControllerError> {
        info!("Starting game");
        self.presenter.render(&self.state);

        while self.phase == Phase::AwaitingMove {
            let available: Vec<Move> = self.state.available_moves().collect();
            debug!(player = %self.state.current_player(), open = available.len(), "Waiting for move");
            let token = self.input.next_token(&available)?;
            self.submit(&token)?;
        }

        Ok(self.state.outcome())
    }

    /// Consumes the controller, returning the final state and presenter.
    pub fn into_parts(self) -> (GameState, P) {
        (self.state, self.presenter)
    }
}
