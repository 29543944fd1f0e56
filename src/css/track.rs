//! Grid track sizes: `100px`, `1fr`, `auto`, `minmax(10%, 1fr)`.
//!
//! The grid template strings produced by [`crate::grid`] are plain CSS. This
//! module reads them back into typed [`TrackSize`]s so a layout engine can
//! apply them.

use std::fmt;

use crate::css::scalar::Scalar;
use crate::css::tokenizer::Token;
use crate::css::value::{ValueError, ValueParser};

/// The size of a single grid row or column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrackSize {
    /// One scalar used as both minimum and maximum (`auto`, `1fr`, `100px`).
    Fixed(Scalar),
    /// `minmax(min, max)`.
    MinMax(Scalar, Scalar),
}

impl fmt::Display for TrackSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrackSize::Fixed(s) => write!(f, "{s}"),
            TrackSize::MinMax(min, max) => write!(f, "minmax({min}, {max})"),
        }
    }
}

/// Parse a space-separated track list such as `100px minmax(10%, 1fr) auto`.
///
/// An empty (or whitespace-only) list yields no tracks.
pub fn parse_track_list(input: &str) -> Result<Vec<TrackSize>, ValueError> {
    let mut parser = ValueParser::new(input)?;
    let mut tracks = Vec::new();

    while !parser.is_eof() {
        tracks.push(parse_track(&mut parser)?);
    }

    Ok(tracks)
}

/// Parse a single px or % length, as used by gaps.
pub fn parse_length(input: &str) -> Result<Scalar, ValueError> {
    let mut parser = ValueParser::new(input)?;
    let scalar = parser.parse_scalar()?;
    parser.finish()?;

    if scalar.is_length() {
        Ok(scalar)
    } else {
        Err(ValueError::NotALength(input.trim().to_string()))
    }
}

/// Render tracks back to CSS, space-separated.
pub fn format_track_list(tracks: &[TrackSize]) -> String {
    tracks
        .iter()
        .map(TrackSize::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn parse_track(parser: &mut ValueParser<'_>) -> Result<TrackSize, ValueError> {
    if !parser.peek_keyword("minmax") {
        return parser.parse_scalar().map(TrackSize::Fixed);
    }

    parser.advance(); // consume `minmax`
    parser.expect(&Token::ParenOpen, "'(' after minmax")?;
    let min = parser.parse_scalar()?;
    parser.expect(&Token::Comma, "',' between minmax arguments")?;
    let max = parser.parse_scalar()?;
    parser.expect(&Token::ParenClose, "')' closing minmax")?;

    if min.is_flexible() {
        return Err(ValueError::FlexibleMinimum {
            input: parser.input().to_string(),
            value: min.to_string(),
        });
    }

    Ok(TrackSize::MinMax(min, max))
}
