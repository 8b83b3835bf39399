//! Parser for dice files: one die per line, faces separated by commas.
//!
//! ```text
//! 2, 2, 4, 4, 9, 9
//! 1, 1, 6, 6, 8, 8
//!
//! 3, 3, 5, 5, 7, 7
//! ```
//!
//! Blank lines are skipped, dice are labelled in the order they appear.

use crate::{Die, Error, Result, MAX_DICE};
use nom::{
    character::complete::{char, i64 as integer, space0},
    combinator::all_consuming,
    error::Error as NomError,
    multi::separated_list1,
    sequence::delimited,
    IResult, Parser,
};

fn atom<'a, T>(
    inner: impl Parser<&'a str, T, NomError<&'a str>>,
) -> impl FnMut(&'a str) -> IResult<&'a str, T> {
    delimited(space0, inner, space0)
}

fn faces(i: &str) -> IResult<&str, Vec<i64>> {
    separated_list1(char(','), atom(integer))(i)
}

/// Parses a single non-blank line into its face values
pub fn parse_line(line: &str) -> Option<Vec<i64>> {
    let (_, faces) = all_consuming(faces)(line.trim()).ok()?;
    Some(faces)
}

pub fn parse_dice(text: &str) -> Result<Vec<Die>> {
    let mut dice = Vec::new();
    for (index, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let faces = parse_line(line).ok_or_else(|| Error::MalformedLine {
            line: index + 1,
            text: line.trim().to_owned(),
        })?;
        dice.push(Die::new(faces)?);
    }

    log::debug!("parsed {} dice", dice.len());

    if dice.is_empty() {
        return Err(Error::NoDice);
    }
    if dice.len() > MAX_DICE {
        return Err(Error::TooManyDice { count: dice.len() });
    }
    Ok(dice)
}
