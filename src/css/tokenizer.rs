//! logos-based tokenizer for CSS value syntax.
//!
//! Covers the values the grid system reads back out of its own output and out
//! of user props: track lists (`100px minmax(10%, 1fr) auto`), grid lines
//! (`1 / span 3`), and area templates (`"header header" ". main"`).
//!
//! Token priority in logos is determined by:
//! 1. Longest match wins (e.g. `1fr` as Dimension beats `1` as Number)
//! 2. For equal length matches, earlier-defined variants win

use logos::Logos;

/// CSS value token produced by the lexer.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\n\r\f]+")]
pub enum Token {
    // ── Compound tokens (longer matches, defined first) ──────────────

    /// Dimension: number with unit suffix like `1fr`, `50%`, `100px`.
    #[regex(r"-?[0-9]+(\.[0-9]+)?(px|fr|%)")]
    Dimension,

    /// Double-quoted string literal, e.g. one row of an area template.
    #[regex(r#""[^"]*""#)]
    StringLiteral,

    /// Number: integer or float, possibly negative.
    #[regex(r"-?[0-9]+(\.[0-9]+)?")]
    Number,

    /// Identifier: keywords like `auto`, `span`, `minmax`, `min-content`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_-]*")]
    Ident,

    // ── Single-character punctuation ─────────────────────────────────

    /// `(`
    #[token("(")]
    ParenOpen,

    /// `)`
    #[token(")")]
    ParenClose,

    /// `,`
    #[token(",")]
    Comma,

    /// `/`
    #[token("/")]
    Slash,
}

/// Tokenize a CSS value into a vector of `(Token, String)` pairs.
///
/// Input that fails to lex is reported as `Err` with the offending text, so
/// callers can surface it instead of silently dropping it.
pub fn tokenize(input: &str) -> Result<Vec<(Token, String)>, String> {
    let lexer = Token::lexer(input);
    lexer
        .spanned()
        .map(|(result, span)| match result {
            Ok(token) => Ok((token, input[span].to_string())),
            Err(()) => Err(input[span].to_string()),
        })
        .collect()
}
