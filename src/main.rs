//! Guessinator - CLI entry point
//!
//! Picks a secret and plays one guessing session on stdin/stdout.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use guessinator::{GameSession, Secret, SecretError};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version are not failures
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            println!("{e}");
            std::process::exit(1);
        }
    };

    initialize_tracing()?;

    // Same reporting as a command-line failure: stdout, exit code 1
    let secret = match choose_secret(cli.debug_guess) {
        Ok(secret) => secret,
        Err(e) => {
            println!("{e}");
            std::process::exit(1);
        }
    };
    let won = run_session(secret);
    info!(won, "Session finished");

    Ok(())
}

/// Logs go to stderr so stdout carries only game text.
fn initialize_tracing() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
}

/// Chooses the secret, seeding the generator from the wall clock.
#[instrument]
fn choose_secret(debug_guess: i64) -> Result<Secret, SecretError> {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default();
    debug!(seed, "Seeding random number generator");

    let mut rng = StdRng::seed_from_u64(seed);
    Secret::choose(debug_guess, &mut rng)
}

/// Plays one session against the process's standard streams.
#[instrument(skip(secret))]
fn run_session(secret: Secret) -> bool {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    GameSession::new(secret, stdin.lock(), stdout.lock()).play()
}
