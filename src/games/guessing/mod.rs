//! Number guessing: secret, guesses and the session loop.

mod guess;
mod secret;
mod session;

pub use guess::{Guess, GuessError, Hint};
pub use secret::{Secret, SecretError};
pub use session::{DEFAULT_ATTEMPTS, GameSession, Outcome};
