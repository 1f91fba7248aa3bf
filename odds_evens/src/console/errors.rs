//! Console error types for reading and validating player input.

use std::fmt;
use thiserror::Error;

use crate::game::entities::Balls;

/// What a rejected number should have been.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Expected {
    /// A ball count between 1 and the player's current stack.
    Balls { max: Balls },
    /// A parity guess, 0 for even and 1 for odd.
    Parity,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Balls { max } => write!(f, "> 0 and <= {max}"),
            Self::Parity => write!(f, "0 or 1"),
        }
    }
}

/// Recoverable input problems. The prompt loops print these and ask again.
#[derive(Debug, Error, Eq, PartialEq)]
pub enum InputError {
    /// The token isn't an integer at all
    #[error("{0} was not an Integer number. Try again.")]
    InvalidFormat(String),

    /// The token is an integer the prompt can't accept
    #[error("Number must be {expected}. Try again.")]
    OutOfRange { value: i64, expected: Expected },
}

/// Failures of the console itself. These end the game.
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("input ended before the game was over")]
    Exhausted,
}

/// Result type for console operations
pub type Result<T> = std::result::Result<T, ConsoleError>;
