//! Shared cursor over lexed CSS value tokens.
//!
//! [`ValueParser`] is the small recursive-descent core used by the track list
//! and grid line parsers. It owns the token stream for one value string and
//! reports failures as [`ValueError`] with the full source value attached.

use crate::css::scalar::Scalar;
use crate::css::tokenizer::{tokenize, Token};

/// Errors from parsing a CSS value.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValueError {
    #[error("could not read '{text}' in '{input}'")]
    Lex { input: String, text: String },
    #[error("unexpected '{found}' in '{input}': {message}")]
    UnexpectedToken {
        input: String,
        found: String,
        message: String,
    },
    #[error("unexpected end of '{input}': {message}")]
    UnexpectedEof { input: String, message: String },
    #[error("flexible size '{value}' cannot be the minimum of minmax() in '{input}'")]
    FlexibleMinimum { input: String, value: String },
    #[error("expected a px or % length, got '{0}'")]
    NotALength(String),
    #[error("grid line 0 is not valid in '{0}'")]
    ZeroLine(String),
}

/// Recursive descent parser state for a single CSS value.
pub(crate) struct ValueParser<'a> {
    input: &'a str,
    tokens: Vec<(Token, String)>,
    cursor: usize,
}

impl<'a> ValueParser<'a> {
    /// Lex `input` and position the cursor at its first token.
    pub(crate) fn new(input: &'a str) -> Result<Self, ValueError> {
        let tokens = tokenize(input).map_err(|text| ValueError::Lex {
            input: input.to_string(),
            text,
        })?;
        Ok(Self {
            input,
            tokens,
            cursor: 0,
        })
    }

    pub(crate) fn input(&self) -> &'a str {
        self.input
    }

    pub(crate) fn is_eof(&self) -> bool {
        self.cursor >= self.tokens.len()
    }

    pub(crate) fn peek(&self) -> Option<&(Token, String)> {
        self.tokens.get(self.cursor)
    }

    /// Returns `true` if the next token is the identifier `keyword`
    /// (ASCII case-insensitive).
    pub(crate) fn peek_keyword(&self, keyword: &str) -> bool {
        matches!(self.peek(), Some((Token::Ident, text)) if text.eq_ignore_ascii_case(keyword))
    }

    pub(crate) fn advance(&mut self) -> Option<(Token, String)> {
        let tok = self.tokens.get(self.cursor).cloned();
        if tok.is_some() {
            self.cursor += 1;
        }
        tok
    }

    pub(crate) fn expect(&mut self, expected: &Token, what: &str) -> Result<String, ValueError> {
        match self.advance() {
            Some((token, text)) if &token == expected => Ok(text),
            Some((_, text)) => Err(self.unexpected(&text, format!("expected {what}"))),
            None => Err(self.eof(format!("expected {what}"))),
        }
    }

    pub(crate) fn unexpected(&self, found: &str, message: impl Into<String>) -> ValueError {
        ValueError::UnexpectedToken {
            input: self.input.to_string(),
            found: found.to_string(),
            message: message.into(),
        }
    }

    pub(crate) fn eof(&self, message: impl Into<String>) -> ValueError {
        ValueError::UnexpectedEof {
            input: self.input.to_string(),
            message: message.into(),
        }
    }

    /// Fail if any tokens remain.
    pub(crate) fn finish(&self) -> Result<(), ValueError> {
        match self.peek() {
            None => Ok(()),
            Some((_, text)) => Err(self.unexpected(text, "expected end of value")),
        }
    }

    /// Parse a scalar: a dimension, a bare number (px), or a sizing keyword.
    pub(crate) fn parse_scalar(&mut self) -> Result<Scalar, ValueError> {
        let (token, text) = self
            .advance()
            .ok_or_else(|| self.eof("expected a size"))?;

        match token {
            Token::Dimension => self.parse_dimension(&text),
            Token::Number => text
                .parse::<f32>()
                .map(Scalar::px)
                .map_err(|_| self.unexpected(&text, "expected a number")),
            Token::Ident => match text.to_ascii_lowercase().as_str() {
                "auto" => Ok(Scalar::auto()),
                "min-content" => Ok(Scalar::min_content()),
                "max-content" => Ok(Scalar::max_content()),
                _ => Err(self.unexpected(&text, "expected a size keyword")),
            },
            _ => Err(self.unexpected(&text, "expected a size")),
        }
    }

    fn parse_dimension(&self, text: &str) -> Result<Scalar, ValueError> {
        let (number, build): (&str, fn(f32) -> Scalar) = if let Some(n) = text.strip_suffix("px") {
            (n, Scalar::px)
        } else if let Some(n) = text.strip_suffix("fr") {
            (n, Scalar::fr)
        } else if let Some(n) = text.strip_suffix('%') {
            (n, Scalar::percent)
        } else {
            return Err(self.unexpected(text, "expected a px, fr or % dimension"));
        };

        number
            .parse::<f32>()
            .map(build)
            .map_err(|_| self.unexpected(text, "expected a number before the unit"))
    }
}
