// Either Reader
//
// Reads back the text written by `Display for Either`:
// `Either.Left(<value>)` or `Either.Right(<value>)`.

use std::fmt;
use std::str::FromStr;

use log::debug;
use nom::{
    branch::alt,
    bytes::complete::{tag, take_while},
    character::complete::char as char_p,
    combinator::{all_consuming, value},
    error::{context, ContextError, ErrorKind, ParseError},
    sequence::{delimited, preceded, tuple},
    IResult,
};
use thiserror::Error;

use crate::either::Either;

#[cfg(test)]
#[path = "reader_tests.rs"]
mod reader_tests;

pub type EitherParserKind<'i> = (&'i str, ErrorKind);

/* Types */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReadError {
    #[error("Not an Either: {0:?}")]
    Syntax(String),

    #[error("Unbalanced parentheses in {0:?}")]
    Unbalanced(String),

    #[error("Could not read Left value: {0}")]
    Left(String),

    #[error("Could not read Right value: {0}")]
    Right(String),
}

/* Parsers */
fn sp_p<'i, E: ParseError<&'i str>>(input: &'i str) -> IResult<&'i str, &'i str, E> {
    take_while(char::is_whitespace)(input)
}

fn side_p<'i, E: ParseError<&'i str> + ContextError<&'i str>>(
    input: &'i str,
) -> IResult<&'i str, Side, E> {
    context(
        "side",
        preceded(
            tag("Either."),
            alt((
                value(Side::Left, tag("Left")),
                value(Side::Right, tag("Right")),
            )),
        ),
    )(input)
}

/// Everything up to the first unmatched `)`.
fn balanced_p<'i, E: ParseError<&'i str>>(input: &'i str) -> IResult<&'i str, &'i str, E> {
    let mut depth: usize = 0;
    for (index, c) in input.char_indices() {
        match c {
            '(' => depth += 1,
            ')' if depth == 0 => return Ok((&input[index..], &input[..index])),
            ')' => depth -= 1,
            _ => {}
        }
    }
    Err(nom::Err::Error(E::from_error_kind(input, ErrorKind::Char)))
}

pub fn either_p<'i, E: ParseError<&'i str> + ContextError<&'i str>>(
    input: &'i str,
) -> IResult<&'i str, (Side, &'i str), E> {
    context(
        "either",
        delimited(
            sp_p,
            tuple((side_p, delimited(char_p('('), balanced_p, char_p(')')))),
            sp_p,
        ),
    )(input)
}

fn is_balanced(src: &str) -> bool {
    let mut depth: usize = 0;
    for c in src.chars() {
        match c {
            '(' => depth += 1,
            ')' if depth == 0 => return false,
            ')' => depth -= 1,
            _ => {}
        }
    }
    depth == 0
}

/// Parses a whole rendering, handing the wrapped text to the inner `FromStr`.
pub fn read_either<L, R>(src: &str) -> Result<Either<L, R>, ReadError>
where
    L: FromStr,
    R: FromStr,
    L::Err: fmt::Display,
    R::Err: fmt::Display,
{
    let (_, (side, inner)) = all_consuming(either_p::<EitherParserKind>)(src).map_err(|err| {
        debug!("rejected {:?}: {}", src, err);
        if side_p::<EitherParserKind>(src.trim_start()).is_ok() && !is_balanced(src) {
            ReadError::Unbalanced(src.to_string())
        } else {
            ReadError::Syntax(src.to_string())
        }
    })?;
    match side {
        Side::Left => inner
            .parse()
            .map(Either::Left)
            .map_err(|err: L::Err| ReadError::Left(err.to_string())),
        Side::Right => inner
            .parse()
            .map(Either::Right)
            .map_err(|err: R::Err| ReadError::Right(err.to_string())),
    }
}

impl<L, R> FromStr for Either<L, R>
where
    L: FromStr,
    R: FromStr,
    L::Err: fmt::Display,
    R::Err: fmt::Display,
{
    type Err = ReadError;

    fn from_str(src: &str) -> Result<Self, Self::Err> {
        read_either(src)
    }
}
