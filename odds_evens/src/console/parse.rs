//! Parsing of single input tokens into game values.

use super::errors::{Expected, InputError};
use crate::game::entities::{Balls, Parity};

fn parse_integer(token: &str) -> Result<i64, InputError> {
    token
        .parse()
        .map_err(|_| InputError::InvalidFormat(token.to_string()))
}

/// Parses a ball count that must lie in `[1, max]`.
///
/// # Examples
///
/// ```
/// use odds_evens::console::{parse_balls, InputError};
///
/// assert_eq!(parse_balls("3", 10), Ok(3));
/// assert!(matches!(parse_balls("0", 10), Err(InputError::OutOfRange { .. })));
/// assert!(matches!(parse_balls("three", 10), Err(InputError::InvalidFormat(_))));
/// ```
pub fn parse_balls(token: &str, max: Balls) -> Result<Balls, InputError> {
    let value = parse_integer(token)?;
    if value < 1 || value > i64::from(max) {
        return Err(InputError::OutOfRange {
            value,
            expected: Expected::Balls { max },
        });
    }
    Ok(value as Balls)
}

/// Parses a parity guess: `0` is even, `1` is odd.
pub fn parse_parity(token: &str) -> Result<Parity, InputError> {
    match parse_integer(token)? {
        0 => Ok(Parity::Even),
        1 => Ok(Parity::Odd),
        value => Err(InputError::OutOfRange {
            value,
            expected: Expected::Parity,
        }),
    }
}
