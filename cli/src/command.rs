use std::str::FromStr;

use sweepgrid_core::{Coord, Coord2};
use thiserror::Error;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Reveal(Coord2),
    Flag(Coord2),
    Help,
    Quit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty command")]
    Empty,
    #[error("unknown command '{0}', type 'h' for help")]
    Unknown(String),
    #[error("expected a row and a column, e.g. '3 4' or 'f 3 4'")]
    MissingCoords,
    #[error("'{0}' is not a valid row or column")]
    InvalidNumber(String),
}

impl FromStr for Command {
    type Err = ParseError;

    /// Accepts `ROW COL`, `r ROW COL`, `f ROW COL`, `h` and `q`.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut parts = line.split_whitespace();
        let head = parts.next().ok_or(ParseError::Empty)?;

        match head.to_ascii_lowercase().as_str() {
            "q" | "quit" | "exit" => Ok(Command::Quit),
            "h" | "help" | "?" => Ok(Command::Help),
            "f" | "flag" => parse_coords(parts.next(), parts.next()).map(Command::Flag),
            "r" | "reveal" => parse_coords(parts.next(), parts.next()).map(Command::Reveal),
            _ if head.starts_with(|c: char| c.is_ascii_digit()) => {
                parse_coords(Some(head), parts.next()).map(Command::Reveal)
            }
            _ => Err(ParseError::Unknown(head.to_owned())),
        }
    }
}

fn parse_coords(row: Option<&str>, col: Option<&str>) -> Result<Coord2, ParseError> {
    let (Some(row), Some(col)) = (row, col) else {
        return Err(ParseError::MissingCoords);
    };
    Ok((parse_axis(row)?, parse_axis(col)?))
}

fn parse_axis(text: &str) -> Result<Coord, ParseError> {
    text.parse()
        .map_err(|_| ParseError::InvalidNumber(text.to_owned()))
}

pub const HELP: &str = "\
Commands:
  ROW COL     reveal the cell (0-based, e.g. '3 4')
  f ROW COL   place or remove a flag
  h           show this help
  q           quit";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_coordinates_reveal() {
        assert_eq!("3 4".parse::<Command>(), Ok(Command::Reveal((3, 4))));
        assert_eq!("  r 0 12 ".parse::<Command>(), Ok(Command::Reveal((0, 12))));
    }

    #[test]
    fn flag_command_is_case_insensitive() {
        assert_eq!("F 1 2".parse::<Command>(), Ok(Command::Flag((1, 2))));
        assert_eq!("flag 1 2".parse::<Command>(), Ok(Command::Flag((1, 2))));
    }

    #[test]
    fn control_commands() {
        assert_eq!("q".parse::<Command>(), Ok(Command::Quit));
        assert_eq!("HELP".parse::<Command>(), Ok(Command::Help));
    }

    #[test]
    fn malformed_input() {
        assert_eq!("".parse::<Command>(), Err(ParseError::Empty));
        assert_eq!("f 3".parse::<Command>(), Err(ParseError::MissingCoords));
        assert_eq!("3".parse::<Command>(), Err(ParseError::MissingCoords));
        assert_eq!(
            "3 x".parse::<Command>(),
            Err(ParseError::InvalidNumber("x".into()))
        );
        assert_eq!(
            "1 300".parse::<Command>(),
            Err(ParseError::InvalidNumber("300".into()))
        );
        assert_eq!(
            "dig 1 1".parse::<Command>(),
            Err(ParseError::Unknown("dig".into()))
        );
    }
}
