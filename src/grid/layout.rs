//! The three ways to describe a grid, and the dispatcher between them.

use serde::Deserialize;

use crate::grid::error::GridLayoutError;
use crate::grid::template::{parse_layout_table, LayoutTable, ParsedTemplate};
use crate::grid::tokenizer::parse_layout_text;

/// Explicit track sizing with no named areas.
///
/// Both strings are CSS track lists and are passed through untouched. Items
/// in such a grid rely on auto flow or explicit lines rather than area names.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TrackSizing {
    /// Column tracks, e.g. `1fr auto auto 50px`.
    #[serde(alias = "columnSizing")]
    pub column_sizing: String,
    /// Row tracks, e.g. `0.5fr auto auto`.
    #[serde(alias = "rowSizing")]
    pub row_sizing: String,
}

impl TrackSizing {
    pub fn new(column_sizing: impl Into<String>, row_sizing: impl Into<String>) -> Self {
        Self {
            column_sizing: column_sizing.into(),
            row_sizing: row_sizing.into(),
        }
    }
}

/// A grid layout description.
///
/// Deserializes untagged: a string is [`GridLayout::Text`], an array of
/// arrays is [`GridLayout::Table`], and an object with `column_sizing` /
/// `row_sizing` (or their camelCase forms) is [`GridLayout::Sizing`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum GridLayout {
    /// Pipe-delimited table text; see [`crate::grid::tokenizer`].
    Text(String),
    /// Sizing row followed by area rows.
    Table(LayoutTable),
    /// Explicit column and row track lists.
    Sizing(TrackSizing),
}

impl GridLayout {
    /// Parse this layout into template strings.
    pub fn parse(&self) -> Result<ParsedTemplate, GridLayoutError> {
        match self {
            GridLayout::Text(text) => parse_layout_table(&parse_layout_text(text)),
            GridLayout::Table(table) => parse_layout_table(table),
            GridLayout::Sizing(sizing) => Ok(parse_track_sizing(sizing)),
        }
    }
}

/// Parse an optional layout. No layout yields an empty template.
pub fn parse_grid_layout(layout: Option<&GridLayout>) -> Result<ParsedTemplate, GridLayoutError> {
    layout.map_or_else(|| Ok(ParsedTemplate::default()), GridLayout::parse)
}

/// Pass explicit sizing through; no area template is produced.
pub fn parse_track_sizing(sizing: &TrackSizing) -> ParsedTemplate {
    ParsedTemplate {
        columns: Some(sizing.column_sizing.clone()),
        rows: Some(sizing.row_sizing.clone()),
        areas: None,
    }
}

impl From<&str> for GridLayout {
    fn from(text: &str) -> Self {
        GridLayout::Text(text.to_string())
    }
}

impl From<String> for GridLayout {
    fn from(text: String) -> Self {
        GridLayout::Text(text)
    }
}

impl From<LayoutTable> for GridLayout {
    fn from(table: LayoutTable) -> Self {
        GridLayout::Table(table)
    }
}

impl From<TrackSizing> for GridLayout {
    fn from(sizing: TrackSizing) -> Self {
        GridLayout::Sizing(sizing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const WORKED_EXAMPLE: &str = "
        | 100px | 1fr | 100px
        auto | header | header | header
        1fr | . | main | sidebar
        auto | footer | footer | footer
    ";

    fn owned(rows: &[&[&str]]) -> LayoutTable {
        rows.iter()
            .map(|row| row.iter().map(|c| c.to_string()).collect())
            .collect()
    }

    #[test]
    fn text_form_worked_example() {
        let parsed = GridLayout::from(WORKED_EXAMPLE).parse().unwrap();
        assert_eq!(
            parsed,
            ParsedTemplate {
                columns: Some("100px 1fr 100px".into()),
                rows: Some("auto 1fr auto".into()),
                areas: Some(
                    r#""header header header" ". main sidebar" "footer footer footer""#.into()
                ),
            }
        );
    }

    #[test]
    fn text_and_table_forms_agree() {
        let table = GridLayout::Table(owned(&[
            &["100px", "1fr", "100px"],
            &["auto", "header", "header", "header"],
            &["1fr", "", "main", "sidebar"],
            &["", "footer", "footer", "footer"],
        ]));
        let text = GridLayout::from(
            "
                 | 100px  | 1fr    | 100px
            auto | header | header | header
            1fr  |        | main   | sidebar
                 | footer | footer | footer
            ",
        );
        assert_eq!(text.parse().unwrap(), table.parse().unwrap());
    }

    #[test]
    fn sizing_form_passes_through() {
        let layout = GridLayout::from(TrackSizing::new("100px 1fr 100px", "auto 1fr 1fr auto"));
        assert_eq!(
            layout.parse().unwrap(),
            ParsedTemplate {
                columns: Some("100px 1fr 100px".into()),
                rows: Some("auto 1fr 1fr auto".into()),
                areas: None,
            }
        );
    }

    #[test]
    fn sizing_form_is_not_validated() {
        let parsed = parse_track_sizing(&TrackSizing::new("not css", ""));
        assert_eq!(parsed.columns.as_deref(), Some("not css"));
        assert_eq!(parsed.rows.as_deref(), Some(""));
    }

    #[test]
    fn no_layout_is_empty() {
        let parsed = parse_grid_layout(None).unwrap();
        assert!(parsed.is_empty());
    }

    #[test]
    fn text_errors_surface_from_table_parser() {
        let err = GridLayout::from("| auto | 1fr\nauto | a").parse().unwrap_err();
        assert_eq!(
            err,
            GridLayoutError::ColumnMismatch {
                row: 0,
                expected: 2,
                found: 1,
            }
        );
    }

    #[test]
    fn blank_text_is_too_small() {
        assert_eq!(
            GridLayout::from("   ").parse().unwrap_err(),
            GridLayoutError::TooFewRows { rows: 1 }
        );
    }

    #[test]
    fn parsing_is_repeatable() {
        let layout = GridLayout::from(WORKED_EXAMPLE);
        assert_eq!(layout.parse().unwrap(), layout.parse().unwrap());
    }

    #[test]
    fn deserializes_each_shape() {
        let text: GridLayout = serde_json::from_str(r#""|1fr\nauto|main""#).unwrap();
        assert!(matches!(text, GridLayout::Text(_)));

        let table: GridLayout = serde_json::from_str(r#"[["1fr"], ["auto", "main"]]"#).unwrap();
        assert_eq!(table, GridLayout::Table(owned(&[&["1fr"], &["auto", "main"]])));

        let sizing: GridLayout =
            serde_json::from_str(r#"{"columnSizing": "1fr 1fr", "rowSizing": "auto"}"#).unwrap();
        assert_eq!(sizing, GridLayout::Sizing(TrackSizing::new("1fr 1fr", "auto")));

        let snake: GridLayout =
            serde_json::from_str(r#"{"column_sizing": "1fr", "row_sizing": "1fr"}"#).unwrap();
        assert!(matches!(snake, GridLayout::Sizing(_)));
    }

    #[test]
    fn deserializing_other_shapes_fails() {
        assert!(serde_json::from_str::<GridLayout>("42").is_err());
        assert!(serde_json::from_str::<GridLayout>(r#"{"columns": "1fr"}"#).is_err());
    }
}
