//! Low-level nom parser functions for theme values.
//!
//! Lengths (`0.4in`, `12pt`, `10mm`) and dash patterns (`5 3`) come through
//! here when a generator config is deserialized.

use crate::shape::DashPattern;
use nom::branch::alt;
use nom::bytes::complete::tag_no_case;
use nom::character::complete::{char, digit1, space0, space1};
use nom::combinator::{map, map_res, opt, recognize, value};
use nom::sequence::{delimited, separated_pair};
use nom::{IResult, Parser};
use thiserror::Error;

/// Errors that can occur during style parsing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StyleParseError {
    #[error("Parse error: {0}")]
    Parse(String),
}

// --- Helper Parsers ---

fn ws<'a, F, O>(inner: F) -> impl Parser<&'a str, Output = O, Error = nom::error::Error<&'a str>>
where
    F: Parser<&'a str, Output = O, Error = nom::error::Error<&'a str>>,
{
    delimited(space0, inner, space0)
}

fn parse_f32(input: &str) -> IResult<&str, f32> {
    map_res(
        recognize((
            opt(alt((char('+'), char('-')))),
            alt((
                recognize((digit1, opt((char('.'), digit1)))),
                recognize((char('.'), digit1)),
            )),
        )),
        |s: &str| s.parse::<f32>(),
    )
    .parse(input)
}

// --- Unit & Length Parsers ---

fn parse_unit(input: &str) -> IResult<&str, f32> {
    alt((
        map(tag_no_case("pt"), |_| 1.0),
        map(tag_no_case("px"), |_| 1.0), // Treat px as pt
        map(tag_no_case("in"), |_| 72.0),
        map(tag_no_case("cm"), |_| 28.35),
        map(tag_no_case("mm"), |_| 2.835),
    ))
    .parse(input)
}

/// Parses a length value with optional unit (e.g., "12pt", "1in", "10mm").
/// A bare number is taken as points.
pub fn parse_length(input: &str) -> IResult<&str, f32> {
    let (input, value) = parse_f32(input)?;
    let (input, unit_multiplier) = opt(parse_unit).parse(input)?;
    Ok((input, value * unit_multiplier.unwrap_or(1.0)))
}

/// Parses an on/off dash pair, separated by whitespace or a comma (e.g., "5 3", "4pt, 2pt").
pub fn parse_dash_pattern(input: &str) -> IResult<&str, DashPattern> {
    map(
        separated_pair(
            parse_length,
            alt((value((), ws(char(','))), value((), space1))),
            parse_length,
        ),
        |(on, off)| DashPattern { on, off },
    )
    .parse(input)
}

/// Helper to run a nom parser and convert its result to a `Result<T, StyleParseError>`.
pub fn run_parser<'a, T, P>(mut parser: P, input: &'a str) -> Result<T, StyleParseError>
where
    P: Parser<&'a str, Output = T, Error = nom::error::Error<&'a str>>,
{
    match parser.parse(input.trim()) {
        Ok(("", result)) => Ok(result),
        Ok((rem, _)) => Err(StyleParseError::Parse(format!(
            "Parser did not consume all input. Remainder: '{}'",
            rem
        ))),
        Err(e) => Err(StyleParseError::Parse(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lengths_convert_to_points() {
        assert_eq!(run_parser(parse_length, "0.5in").unwrap(), 36.0);
        assert_eq!(run_parser(parse_length, "12pt").unwrap(), 12.0);
        assert_eq!(run_parser(parse_length, "9").unwrap(), 9.0);
        assert!((run_parser(parse_length, "10mm").unwrap() - 28.35).abs() < 1e-3);
        assert_eq!(run_parser(parse_length, ".25in").unwrap(), 18.0);
    }

    #[test]
    fn length_rejects_trailing_garbage() {
        assert!(run_parser(parse_length, "12 apples").is_err());
        assert!(run_parser(parse_length, "in").is_err());
    }

    #[test]
    fn dash_pattern_accepts_space_or_comma() {
        assert_eq!(
            run_parser(parse_dash_pattern, "5 3").unwrap(),
            DashPattern { on: 5.0, off: 3.0 }
        );
        assert_eq!(
            run_parser(parse_dash_pattern, "4pt, 2pt").unwrap(),
            DashPattern { on: 4.0, off: 2.0 }
        );
    }
}
