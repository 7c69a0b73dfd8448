//! Input line parsing
//!
//! One line of user input becomes one [`Command`]. Squares are accepted in
//! algebraic form (`e2`) or as zero-based `row,col` pairs (`6,4`), where row 0
//! is rank 8.

use std::str::FromStr;

use move_engine::Square;

use crate::core::error::{CoreError, CoreResult};
use crate::core::settings::{BoardTheme, PieceStyle};

/// A parsed input line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Click(Square),
    Theme(BoardTheme),
    Style(PieceStyle),
    New,
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  e2 | 6,4        click a square (algebraic or row,col with row 0 = rank 8)
  theme <name>    board theme: classic, blue, forest
  style <name>    piece style: standard, modern, minimalist
  new             start a new game
  help            show this message
  quit            leave";

/// Parse one input line
pub fn parse_command(line: &str) -> CoreResult<Command> {
    let line = line.trim();
    if line.contains(',') {
        return parse_square(line).map(Command::Click);
    }

    let mut words = line.split_whitespace();
    let head = words.next().unwrap_or_default().to_ascii_lowercase();
    let argument = words.next();

    if words.next().is_some() {
        return Err(unknown(line));
    }

    match (head.as_str(), argument) {
        ("theme", Some(name)) => Ok(Command::Theme(name.parse()?)),
        ("style", Some(name)) => Ok(Command::Style(name.parse()?)),
        ("new", None) => Ok(Command::New),
        ("help" | "?", None) => Ok(Command::Help),
        ("quit" | "exit" | "q", None) => Ok(Command::Quit),
        (_, None) if !head.is_empty() => parse_square(&head).map(Command::Click),
        _ => Err(unknown(line)),
    }
}

fn parse_square(input: &str) -> CoreResult<Square> {
    match input.split_once(',') {
        Some((row, col)) => {
            let row = u8::from_str(row.trim()).map_err(|_| unknown(input))?;
            let col = u8::from_str(col.trim()).map_err(|_| unknown(input))?;
            Ok(Square::try_new(row, col)?)
        }
        None if input.len() == 2 => Ok(Square::from_algebraic(input)?),
        None => Err(unknown(input)),
    }
}

fn unknown(input: &str) -> CoreError {
    CoreError::UnknownCommand {
        input: input.to_string(),
    }
}

impl FromStr for Command {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_command(s)
    }
}
