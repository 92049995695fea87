//! Command-line interface for guessinator.

use clap::Parser;

/// Guessinator - a number guessing game
#[derive(Parser, Debug)]
#[command(name = "guessinator")]
#[command(about = "A number guessing game", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Set the secret number for testing (1-100)
    #[arg(
        long,
        default_value_t = 0,
        allow_negative_numbers = true,
        value_parser = parse_debug_guess
    )]
    pub debug_guess: i64,
}

/// Accepts any integer that is not a positive value above 100.
///
/// Zero and negative values are kept and mean "no override".
fn parse_debug_guess(raw: &str) -> Result<i64, String> {
    let value: i64 = raw
        .parse()
        .map_err(|e| format!("`{raw}` is not an integer: {e}"))?;
    if value > 100 {
        return Err(format!("{value} is outside the range 1-100"));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flag_defaults_to_zero() {
        let cli = Cli::try_parse_from(["guessinator"]).unwrap();
        assert_eq!(cli.debug_guess, 0);
    }

    #[test]
    fn test_debug_guess_pins_value() {
        let cli = Cli::try_parse_from(["guessinator", "--debug-guess", "42"]).unwrap();
        assert_eq!(cli.debug_guess, 42);

        let cli = Cli::try_parse_from(["guessinator", "--debug-guess=100"]).unwrap();
        assert_eq!(cli.debug_guess, 100);
    }

    #[test]
    fn test_negative_debug_guess_is_accepted() {
        let cli = Cli::try_parse_from(["guessinator", "--debug-guess", "-3"]).unwrap();
        assert_eq!(cli.debug_guess, -3);
    }

    #[test]
    fn test_bad_debug_guess_is_rejected() {
        assert!(Cli::try_parse_from(["guessinator", "--debug-guess", "abc"]).is_err());
        assert!(Cli::try_parse_from(["guessinator", "--debug-guess", "101"]).is_err());
        assert!(Cli::try_parse_from(["guessinator", "--debug-guess"]).is_err());
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        assert!(Cli::try_parse_from(["guessinator", "--attempts", "5"]).is_err());
    }
}
