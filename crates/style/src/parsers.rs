//! nom parsers for single length tokens such as `10px`, `50%` or `auto`.

use crate::dimension::{Length, Unit};
use nom::branch::alt;
use nom::bytes::complete::{tag, tag_no_case};
use nom::character::complete::{char, digit1};
use nom::combinator::{map, map_res, opt, recognize, value};
use nom::sequence::pair;
use nom::{IResult, Parser};
use thiserror::Error;

/// Errors that can occur during style parsing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StyleParseError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid value for '{property}': {value}")]
    InvalidValue { property: String, value: String },
}

fn parse_f64(input: &str) -> IResult<&str, f64> {
    map_res(
        recognize((
            opt(alt((char('+'), char('-')))),
            alt((
                recognize((digit1, opt((char('.'), digit1)))),
                recognize((char('.'), digit1)),
            )),
        )),
        |s: &str| s.parse::<f64>(),
    )
    .parse(input)
}

// `rem` must be tried before `em`, `vmax`/`vmin` before the shorter viewport units.
fn parse_unit(input: &str) -> IResult<&str, Unit> {
    alt((
        value(Unit::Px, tag_no_case("px")),
        value(Unit::Percent, tag("%")),
        value(Unit::Rem, tag_no_case("rem")),
        value(Unit::Em, tag_no_case("em")),
        value(Unit::VMax, tag_no_case("vmax")),
        value(Unit::VMin, tag_no_case("vmin")),
        value(Unit::Vw, tag_no_case("vw")),
        value(Unit::Vh, tag_no_case("vh")),
    ))
    .parse(input)
}

/// Parses a length token. A bare number yields [`Unit::Number`].
pub fn parse_length(input: &str) -> IResult<&str, Length> {
    alt((
        value(Length::AUTO, tag_no_case("auto")),
        map(pair(parse_f64, opt(parse_unit)), |(v, unit)| {
            Length::new(v, unit.unwrap_or(Unit::Number))
        }),
    ))
    .parse(input)
}

/// Parses a font weight keyword or a bare integer weight.
pub fn parse_font_weight(input: &str) -> IResult<&str, u16> {
    alt((
        value(400, tag_no_case("normal")),
        value(700, tag_no_case("bold")),
        map_res(digit1, |s: &str| s.parse::<u16>()),
    ))
    .parse(input)
}

/// Helper to run a nom parser and convert its result to a `Result<T, StyleParseError>`.
pub fn run_parser<'a, T, F>(mut parser: F, input: &'a str) -> Result<T, StyleParseError>
where
    F: Parser<&'a str, Output = T, Error = nom::error::Error<&'a str>>,
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
