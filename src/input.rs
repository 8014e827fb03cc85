// Console line input and numeric parsing for the demo.

use std::io::{self, Write};
use thiserror::Error;

/// Parse failures surfaced to the caller instead of being swallowed.
/// The caller decides what to do with the target field; the demo binary
/// reports the failure and leaves the field at its default.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("empty input where a number was expected")]
    Empty,
    #[error("not a number: '{0}'")]
    NotANumber(String),
}

/// Print a prompt, flush it, and read one line from stdin, trimmed.
/// Flushing matters: `print!` leaves partial lines in the buffer, and the
/// prompt must be visible before `read_line` blocks. EOF reads as an empty
/// line so the demo also completes when input is exhausted.
pub fn prompt(message: &str) -> io::Result<String> {
    print!("{}", message);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

/// Parse a year line into an `i32`. No range checking beyond what the type
/// itself imposes.
pub fn parse_year(input: &str) -> Result<i32, InputError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }
    trimmed
        .parse()
        .map_err(|_| InputError::NotANumber(trimmed.to_string()))
}

/// Parse a requested array length. Zero and negative requests are valid and
/// map to an empty allocation.
pub fn parse_array_len(input: &str) -> Result<usize, InputError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }
    let requested: i64 = trimmed
        .parse()
        .map_err(|_| InputError::NotANumber(trimmed.to_string()))?;
    Ok(requested.max(0) as usize)
}
