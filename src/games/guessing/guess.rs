//! Player guesses and the hints they earn.

use super::secret::Secret;
use derive_more::{Display, Error};
use std::cmp::Ordering;
use tracing::instrument;

/// A validated guess within the same range as [`Secret`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub struct Guess(u8);

impl Guess {
    /// Parses one line of player input.
    ///
    /// Surrounding whitespace is ignored. The text must be a decimal integer
    /// (an optional sign is accepted) between 1 and 100 inclusive.
    #[instrument]
    pub fn parse(input: &str) -> Result<Self, GuessError> {
        let trimmed = input.trim();
        let value: i64 = trimmed.parse().map_err(|_| GuessError::NotANumber {
            input: trimmed.to_string(),
        })?;

        if value < i64::from(Secret::MIN) || value > i64::from(Secret::MAX) {
            return Err(GuessError::OutOfRange { value });
        }

        Ok(Self(value as u8))
    }

    /// Returns the numeric value.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Compares this guess against the secret.
    ///
    /// Returns `None` on a match, otherwise the direction the player
    /// should move.
    pub fn hint_for(&self, secret: &Secret) -> Option<Hint> {
        match self.0.cmp(&secret.value()) {
            Ordering::Equal => None,
            Ordering::Less => Some(Hint::Higher),
            Ordering::Greater => Some(Hint::Lower),
        }
    }
}

/// Direction of the secret relative to a wrong guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Hint {
    /// The secret is above the guess.
    #[display("The mistery number is higher than your guess")]
    Higher,
    /// The secret is below the guess.
    #[display("The mistery number is lower than your guess")]
    Lower,
}

/// Reasons a line of input is not a usable guess.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum GuessError {
    /// The text is not an integer.
    #[display("{input:?} is not a number")]
    NotANumber {
        /// The trimmed input.
        input: String,
    },
    /// The integer is outside 1-100.
    #[display("{value} is outside the range {}-{}", Secret::MIN, Secret::MAX)]
    OutOfRange {
        /// The parsed value.
        value: i64,
    },
}
