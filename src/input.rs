//! Parsing of typed player input.

use derive_more::{Display, Error};
use std::str::FromStr;

/// A line of input from a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Place the next piece at `(row, column)`.
    Place {
        /// Requested row.
        row: isize,
        /// Requested column.
        column: isize,
    },
    /// Discard the board and start over.
    NewGame,
    /// Print the accepted commands.
    Help,
    /// Leave the session.
    Quit,
}

/// Input that could not be understood.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Unrecognized input {input:?}: expected `row column`, `new`, `help` or `quit`")]
pub struct InputError {
    /// The offending text.
    pub input: String,
}

/// Parses `row column` or `row,column` into signed coordinates.
///
/// Coordinates are not range-checked here; the board rejects them.
pub fn parse_coordinates(s: &str) -> Option<(isize, isize)> {
    let mut parts = s
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty());
    let row = parts.next()?.parse().ok()?;
    let column = parts.next()?.parse().ok()?;
    parts.next().is_none().then_some((row, column))
}

impl FromStr for Input {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "new" | "n" => Ok(Input::NewGame),
            "help" | "h" | "?" => Ok(Input::Help),
            "quit" | "q" | "exit" => Ok(Input::Quit),
            _ => parse_coordinates(trimmed)
                .map(|(row, column)| Input::Place { row, column })
                .ok_or_else(|| InputError {
                    input: trimmed.to_string(),
                }),
        }
    }
}
