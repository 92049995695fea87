//! Guessinator library - a terminal number guessing game
//!
//! The game loop is decoupled from the process: a [`GameSession`] reads
//! guesses from any [`std::io::BufRead`] and writes prompts to any
//! [`std::io::Write`], so it can be driven by stdin/stdout or by
//! in-memory buffers.
//!
//! # Example
//!
//! ```
//! use guessinator::{GameSession, Secret};
//!
//! let secret = Secret::new(42).expect("in range");
//! let mut output = Vec::new();
//! let won = GameSession::new(secret, "50\n42\n".as_bytes(), &mut output).play();
//!
//! assert!(won);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod games;

// Crate-level exports - Game types (number guessing)
pub use games::guessing::{
    DEFAULT_ATTEMPTS, GameSession, Guess, GuessError, Hint, Outcome, Secret, SecretError,
};
