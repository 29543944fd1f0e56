//! `grid-row` / `grid-column` shorthand: `2`, `span 3`, `1 / -1`, `auto`.

use std::fmt;

use crate::css::tokenizer::Token;
use crate::css::value::{ValueError, ValueParser};

/// One side of a grid line placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineBound {
    /// Let auto-placement decide.
    #[default]
    Auto,
    /// A 1-based line number; negative values count from the end.
    Line(i16),
    /// Span this many tracks from the other side.
    Span(u16),
}

impl fmt::Display for LineBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineBound::Auto => write!(f, "auto"),
            LineBound::Line(n) => write!(f, "{n}"),
            LineBound::Span(n) => write!(f, "span {n}"),
        }
    }
}

/// Start and end of an item along one grid axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GridLine {
    pub start: LineBound,
    pub end: LineBound,
}

impl GridLine {
    /// Fully auto-placed.
    pub fn auto() -> Self {
        Self::default()
    }

    /// Explicit start and (exclusive) end lines.
    pub fn between(start: i16, end: i16) -> Self {
        Self {
            start: LineBound::Line(start),
            end: LineBound::Line(end),
        }
    }

    /// Returns `true` if neither side is constrained.
    pub fn is_auto(&self) -> bool {
        self.start == LineBound::Auto && self.end == LineBound::Auto
    }
}

impl fmt::Display for GridLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.end {
            LineBound::Auto => write!(f, "{}", self.start),
            end => write!(f, "{} / {}", self.start, end),
        }
    }
}

/// Parse the `grid-row`/`grid-column` shorthand.
pub fn parse_grid_line(input: &str) -> Result<GridLine, ValueError> {
    let mut parser = ValueParser::new(input)?;

    let start = parse_bound(&mut parser)?;
    let end = if parser.peek().is_some_and(|(t, _)| *t == Token::Slash) {
        parser.advance(); // consume `/`
        parse_bound(&mut parser)?
    } else {
        LineBound::Auto
    };
    parser.finish()?;

    Ok(GridLine { start, end })
}

fn parse_bound(parser: &mut ValueParser<'_>) -> Result<LineBound, ValueError> {
    if parser.peek_keyword("auto") {
        parser.advance();
        return Ok(LineBound::Auto);
    }

    if parser.peek_keyword("span") {
        parser.advance();
        let text = parser.expect(&Token::Number, "a span count")?;
        return match text.parse::<u16>() {
            Ok(n) if n > 0 => Ok(LineBound::Span(n)),
            _ => Err(parser.unexpected(&text, "expected a positive span count")),
        };
    }

    let text = parser.expect(&Token::Number, "a line number, 'span' or 'auto'")?;
    match text.parse::<i16>() {
        Ok(0) => Err(ValueError::ZeroLine(parser.input().to_string())),
        Ok(n) => Ok(LineBound::Line(n)),
        Err(_) => Err(parser.unexpected(&text, "expected an integer line number")),
    }
}
