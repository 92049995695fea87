//! The number the player is trying to find.

use derive_more::{Display, Error};
use rand::Rng;
use tracing::{debug, instrument};

/// Secret target number, always within [`Secret::MIN`]..=[`Secret::MAX`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub struct Secret(u8);

impl Secret {
    /// Smallest allowed secret.
    pub const MIN: u8 = 1;
    /// Largest allowed secret.
    pub const MAX: u8 = 100;

    /// Creates a secret, rejecting values outside the playable range.
    #[instrument]
    pub fn new(value: i64) -> Result<Self, SecretError> {
        if value < i64::from(Self::MIN) || value > i64::from(Self::MAX) {
            return Err(SecretError::OutOfRange { value });
        }
        Ok(Self(value as u8))
    }

    /// Draws a secret uniformly from the playable range.
    #[instrument(skip(rng))]
    pub fn random<G: Rng>(rng: &mut G) -> Self {
        Self(rng.gen_range(Self::MIN..=Self::MAX))
    }

    /// Picks the secret for a session.
    ///
    /// A positive `debug_guess` pins the secret to that value. Zero or a
    /// negative value means no override and a random secret is drawn.
    #[instrument(skip(rng))]
    pub fn choose<G: Rng>(debug_guess: i64, rng: &mut G) -> Result<Self, SecretError> {
        if debug_guess > 0 {
            debug!("Using debug override for secret");
            Self::new(debug_guess)
        } else {
            Ok(Self::random(rng))
        }
    }

    /// Returns the numeric value.
    pub fn value(&self) -> u8 {
        self.0
    }
}

/// Error building a [`Secret`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum SecretError {
    /// Value falls outside the playable range.
    #[display("secret {value} is outside the range {}-{}", Secret::MIN, Secret::MAX)]
    OutOfRange {
        /// The rejected value.
        value: i64,
    },
}
