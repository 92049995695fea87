//! Interactive guessing loop over an injected reader and writer.

use super::guess::Guess;
use super::secret::Secret;
use derive_getters::Getters;
use derive_new::new;
use std::fmt::Display;
use std::io::{self, BufRead, Write};
use tracing::{debug, info, instrument, warn};

/// Number of input lines a session processes before declaring a loss.
pub const DEFAULT_ATTEMPTS: usize = 3;

const PROMPT: &str = "Enter your guess (1-100): ";
const READ_ERROR: &str = "Error reading input. Please try again.";
const INVALID_INPUT: &str = "Invalid input. Please enter a number between 1 and 100.";
const WIN: &str = "You Won!";
const NO_MATCH: &str = "Sorry that did not match";

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The secret was found.
    Won {
        /// 1-based attempt slot of the winning guess.
        attempt: usize,
    },
    /// Every attempt was used up.
    Lost,
}

impl Outcome {
    /// Returns true if the player won.
    pub fn is_win(&self) -> bool {
        matches!(self, Outcome::Won { .. })
    }
}

/// One play-through of the guessing game.
///
/// Every processed input line uses up an attempt, including lines that
/// fail to read or parse. The final attempt gets no hint on a miss; the
/// loss message follows directly.
#[derive(Debug, Getters, new)]
pub struct GameSession<R, W> {
    /// Number the player must find.
    secret: Secret,
    /// Attempt budget.
    #[new(value = "DEFAULT_ATTEMPTS")]
    attempts: usize,
    #[getter(skip)]
    input: R,
    #[getter(skip)]
    output: W,
}

impl<R: BufRead, W: Write> GameSession<R, W> {
    /// Runs the session and reports whether the player won.
    pub fn play(&mut self) -> bool {
        self.play_outcome().is_win()
    }

    /// Runs the session to completion.
    ///
    /// Input and output failures never escape: read errors and bad input
    /// are reported to the player, write errors are logged.
    #[instrument(skip(self), fields(attempts = self.attempts))]
    pub fn play_outcome(&mut self) -> Outcome {
        for attempt in 1..=self.attempts {
            self.prompt();

            let line = match self.read_line() {
                Ok(line) => line,
                Err(e) => {
                    warn!(attempt, error = %e, "Failed to read guess");
                    self.say(READ_ERROR);
                    continue;
                }
            };

            let guess = match Guess::parse(&line) {
                Ok(guess) => guess,
                Err(e) => {
                    debug!(attempt, error = %e, "Rejected guess");
                    self.say(INVALID_INPUT);
                    continue;
                }
            };

            match guess.hint_for(&self.secret) {
                None => {
                    info!(attempt, "Secret found");
                    self.say(WIN);
                    return Outcome::Won { attempt };
                }
                Some(hint) if attempt < self.attempts => {
                    debug!(attempt, ?hint, "Wrong guess");
                    self.say(NO_MATCH);
                    self.say(hint);
                }
                Some(_) => debug!(attempt, "Last attempt missed"),
            }
        }

        info!("Attempts exhausted");
        let secret = self.secret;
        self.say(format_args!("Sorry you lose, the correct number is {secret}!"));
        Outcome::Lost
    }

    /// Reads one newline-terminated line.
    ///
    /// Hitting end of stream before a newline is a failure, even when some
    /// bytes were read. Invalid UTF-8 is decoded lossily and left for
    /// [`Guess::parse`] to reject.
    fn read_line(&mut self) -> io::Result<String> {
        let mut buf = Vec::new();
        self.input.read_until(b'\n', &mut buf)?;
        if buf.last() != Some(&b'\n') {
            return Err(io::ErrorKind::UnexpectedEof.into());
        }
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    fn prompt(&mut self) {
        let result = write!(self.output, "{PROMPT}").and_then(|()| self.output.flush());
        if let Err(e) = result {
            warn!(error = %e, "Failed to write prompt");
        }
    }

    fn say(&mut self, message: impl Display) {
        if let Err(e) = writeln!(self.output, "{message}") {
            warn!(error = %e, "Failed to write message");
        }
    }
}
