//! Lexer for the text form of a grid layout.
//!
//! The text form is a pipe-delimited table:
//!
//! ```text
//!      | 100px  | 1fr  | 100px
//! auto | header | header | header
//! 1fr  | .      | main | sidebar
//! ```
//!
//! The first line sizes the columns (its leading cell is a placeholder and is
//! dropped). Every following line is a row size followed by one area name per
//! column. This module only splits the table into cells; validation happens
//! in [`crate::grid::template`].

use logos::Logos;

use crate::grid::template::LayoutTable;

/// Token in the text form of a layout.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum LayoutToken {
    /// Cell separator.
    #[token("|")]
    Pipe,

    /// `\r\n`, `\r` or `\n`. `\r\n` wins as the longer match.
    #[regex(r"\r\n|\r|\n")]
    LineBreak,

    /// Cell content up to the next separator or line break.
    #[regex(r"[^|\r\n]+")]
    Text,
}

/// Split the text form of a layout into the table form.
///
/// Leading and trailing whitespace of the whole input is ignored. Cells are
/// trimmed. A blank line between rows is kept as a row with a single empty
/// cell, which the table parser then rejects.
pub fn parse_layout_text(input: &str) -> LayoutTable {
    let trimmed = input.trim();
    let mut lines = split_lines(trimmed).into_iter();

    // The first cell of the sizing line lines the table up with the row
    // sizes below it and carries no meaning.
    let columns = lines
        .next()
        .map(|cells| cells.into_iter().skip(1).collect())
        .unwrap_or_default();

    std::iter::once(columns).chain(lines).collect()
}

/// Split into lines of trimmed cells. Every line has at least one cell.
fn split_lines(input: &str) -> Vec<Vec<String>> {
    let mut lines = Vec::new();
    let mut cells = Vec::new();
    let mut cell = String::new();

    for (token, span) in LayoutToken::lexer(input).spanned() {
        match token {
            Ok(LayoutToken::Text) => cell.push_str(&input[span]),
            Ok(LayoutToken::Pipe) => cells.push(take_cell(&mut cell)),
            Ok(LayoutToken::LineBreak) => {
                cells.push(take_cell(&mut cell));
                lines.push(std::mem::take(&mut cells));
            }
            // Every character is covered by one of the patterns above.
            Err(()) => cell.push_str(&input[span]),
        }
    }

    cells.push(take_cell(&mut cell));
    lines.push(cells);
    lines
}

fn take_cell(cell: &mut String) -> String {
    let trimmed = cell.trim().to_string();
    cell.clear();
    trimmed
}
