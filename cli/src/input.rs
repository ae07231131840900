use std::fmt;
use std::io;
use std::str::FromStr;

use petardo_core::Coord;

/// A move as typed by the player: column first, then row.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Move {
    pub col: Coord,
    pub row: Coord,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveParseError {
    NotAPair,
    NotANumber,
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAPair => write!(f, "enter two numbers separated by a space"),
            Self::NotANumber => write!(f, "coordinates must be non-negative numbers"),
        }
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut fields = line.split_whitespace();
        let (Some(col), Some(row), None) = (fields.next(), fields.next(), fields.next()) else {
            return Err(MoveParseError::NotAPair);
        };
        let col = col.parse().map_err(|_| MoveParseError::NotANumber)?;
        let row = row.parse().map_err(|_| MoveParseError::NotANumber)?;
        Ok(Move { col, row })
    }
}

/// Next line parsed as a single integer. Malformed lines produce a message
/// and are skipped; running out of input is an error, since the game cannot
/// start without its parameters.
pub fn read_integer<T, L>(lines: &mut L) -> io::Result<T>
where
    T: FromStr,
    L: Iterator<Item = io::Result<String>>,
{
    for line in lines {
        match line?.trim().parse() {
            Ok(value) => return Ok(value),
            Err(_) => println!("enter a single non-negative number"),
        }
    }
    Err(io::Error::new(
        io::ErrorKind::UnexpectedEof,
        "input ended before the game parameters were read",
    ))
}

/// Next well-formed move, prompting each turn and re-prompting on malformed
/// lines. `None` once input runs out.
pub fn read_move<L>(lines: &mut L) -> io::Result<Option<Move>>
where
    L: Iterator<Item = io::Result<String>>,
{
    loop {
        println!("enter column and row to reveal");
        let Some(line) = lines.next() else {
            return Ok(None);
        };
        match line?.parse() {
            Ok(mv) => return Ok(Some(mv)),
            Err(err) => println!("{err}"),
        }
    }
}
