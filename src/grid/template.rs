//! Table form → grid template strings.
//!
//! Row 0 of a [`LayoutTable`] holds the column sizes. Every later row holds a
//! row size followed by one area name per column. The output is the three
//! CSS strings a grid container needs: `grid-template-columns`,
//! `grid-template-rows` and `grid-template-areas`.

use crate::grid::error::GridLayoutError;

/// Table form of a layout: a sizing row, then area rows.
pub type LayoutTable = Vec<Vec<String>>;

/// Grid template strings ready to apply to a grid container.
///
/// `None` means "leave unconstrained". The table and text forms always fill
/// every field; explicit sizing leaves `areas` empty; no layout leaves all
/// three empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedTemplate {
    /// `grid-template-columns`, e.g. `100px 1fr 100px`.
    pub columns: Option<String>,
    /// `grid-template-rows`, e.g. `auto 1fr auto`.
    pub rows: Option<String>,
    /// `grid-template-areas`, e.g. `"header header" "sidebar main"`.
    pub areas: Option<String>,
}

impl ParsedTemplate {
    /// Returns `true` if no field constrains the grid.
    pub fn is_empty(&self) -> bool {
        self.columns.is_none() && self.rows.is_none() && self.areas.is_none()
    }
}

/// A blank sizing cell means `auto`.
pub fn normalize_size(cell: &str) -> &str {
    match cell.trim() {
        "" => "auto",
        trimmed => trimmed,
    }
}

/// A blank area cell means the unnamed cell `.`.
pub fn normalize_area(cell: &str) -> &str {
    match cell.trim() {
        "" => ".",
        trimmed => trimmed,
    }
}

/// Validate a layout table and turn it into template strings.
///
/// # Errors
///
/// - [`GridLayoutError::TooFewRows`] if there is no area row.
/// - [`GridLayoutError::ColumnMismatch`] for the first area row whose cell
///   count is not `columns + 1`.
pub fn parse_layout_table<R, S>(table: &[R]) -> Result<ParsedTemplate, GridLayoutError>
where
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    let (column_sizing, rows) = match table {
        [column_sizing, rows @ ..] if !rows.is_empty() => (column_sizing.as_ref(), rows),
        _ => return Err(GridLayoutError::TooFewRows { rows: table.len() }),
    };

    let num_columns = column_sizing.len();
    for (index, row) in rows.iter().enumerate() {
        let cells = row.as_ref().len();
        if cells != num_columns + 1 {
            return Err(GridLayoutError::ColumnMismatch {
                row: index,
                expected: num_columns,
                found: cells.saturating_sub(1),
            });
        }
    }

    let columns = column_sizing
        .iter()
        .map(|cell| normalize_size(cell.as_ref()))
        .collect::<Vec<_>>()
        .join(" ");

    // Every row has at least one cell here, so `split_first` always succeeds.
    let row_sizes = rows
        .iter()
        .filter_map(|row| row.as_ref().split_first())
        .map(|(size, _)| normalize_size(size.as_ref()))
        .collect::<Vec<_>>()
        .join(" ");

    let areas = rows
        .iter()
        .filter_map(|row| row.as_ref().split_first())
        .map(|(_, names)| {
            let names: Vec<&str> = names.iter().map(|n| normalize_area(n.as_ref())).collect();
            format!("\"{}\"", names.join(" "))
        })
        .collect::<Vec<_>>()
        .join(" ");

    log::debug!(
        "parsed grid layout table: {} column(s), {} row(s)",
        num_columns,
        rows.len()
    );

    Ok(ParsedTemplate {
        columns: Some(columns),
        rows: Some(row_sizes),
        areas: Some(areas),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(rows: &[&[&str]]) -> Result<ParsedTemplate, GridLayoutError> {
        parse_layout_table(rows)
    }

    fn areas(rows: &[&[&str]]) -> String {
        parse(rows).unwrap().areas.unwrap()
    }

    fn columns(rows: &[&[&str]]) -> String {
        parse(rows).unwrap().columns.unwrap()
    }

    fn row_sizes(rows: &[&[&str]]) -> String {
        parse(rows).unwrap().rows.unwrap()
    }

    // ── Validation ───────────────────────────────────────────────────

    #[test]
    fn column_mismatch_reports_row_index() {
        let err = parse(&[
            &["auto", "1fr", "auto"],
            &["auto", "header", "header", "header"],
            &["1fr", "sidebar", "main"],
        ])
        .unwrap_err();
        assert_eq!(
            err,
            GridLayoutError::ColumnMismatch {
                row: 1,
                expected: 3,
                found: 2,
            }
        );
        assert_eq!(
            err.to_string(),
            "layout row 1 has 2 column(s), but the column sizing row declares 3"
        );
    }

    #[test]
    fn empty_area_row_reports_zero_columns() {
        let err = parse(&[&["auto"], &[]]).unwrap_err();
        assert_eq!(
            err,
            GridLayoutError::ColumnMismatch {
                row: 0,
                expected: 1,
                found: 0,
            }
        );
    }

    #[test]
    fn empty_table_is_too_small() {
        assert_eq!(parse(&[]).unwrap_err(), GridLayoutError::TooFewRows { rows: 0 });
    }

    #[test]
    fn single_row_is_too_small() {
        assert_eq!(
            parse(&[&["auto", "1fr", "auto"]]).unwrap_err(),
            GridLayoutError::TooFewRows { rows: 1 }
        );
    }

    #[test]
    fn minimum_shape_parses() {
        let parsed = parse(&[&["1fr"], &["auto", "main"]]).unwrap();
        assert_eq!(
            parsed,
            ParsedTemplate {
                columns: Some("1fr".into()),
                rows: Some("auto".into()),
                areas: Some("\"main\"".into()),
            }
        );
    }

    // ── grid-template-areas ──────────────────────────────────────────

    #[test]
    fn areas_all_named() {
        assert_eq!(
            areas(&[
                &["auto", "1fr", "auto"],
                &["auto", "header", "header", "header"],
                &["1fr", "sidebar", "main", "main"],
            ]),
            r#""header header header" "sidebar main main""#
        );
    }

    #[test]
    fn areas_blank_cell_is_dot() {
        assert_eq!(
            areas(&[
                &["auto", "1fr", "auto"],
                &["auto", "header", "header", "header"],
                &["1fr", "sidebar", "main", ""],
            ]),
            r#""header header header" "sidebar main .""#
        );
    }

    #[test]
    fn areas_whitespace_cell_is_dot() {
        assert_eq!(
            areas(&[
                &["auto", "1fr", "auto"],
                &["auto", "header", "     ", "header"],
                &["1fr", "sidebar", "main", "main"],
            ]),
            r#""header . header" "sidebar main main""#
        );
    }

    #[test]
    fn areas_literal_dot_is_kept() {
        assert_eq!(
            areas(&[
                &["auto", "1fr", "auto"],
                &["auto", "header", "header", "."],
                &["1fr", "sidebar", "main", "sidebar"],
            ]),
            r#""header header ." "sidebar main sidebar""#
        );
    }

    #[test]
    fn areas_names_are_trimmed() {
        assert_eq!(areas(&[&["1fr"], &["auto", "  main  "]]), r#""main""#);
    }

    // ── grid-template-columns ────────────────────────────────────────

    #[test]
    fn columns_all_sized() {
        assert_eq!(
            columns(&[&["auto", "1fr", "auto"], &["auto", "a", "b", "c"]]),
            "auto 1fr auto"
        );
    }

    #[test]
    fn columns_blank_is_auto() {
        assert_eq!(
            columns(&[&["", "1fr", ""], &["auto", "a", "b", "c"]]),
            "auto 1fr auto"
        );
    }

    #[test]
    fn columns_whitespace_is_auto() {
        assert_eq!(
            columns(&[&["     ", "1fr", "auto"], &["  ", "a", "b", ""]]),
            "auto 1fr auto"
        );
    }

    // ── grid-template-rows ───────────────────────────────────────────

    #[test]
    fn rows_all_sized() {
        assert_eq!(
            row_sizes(&[
                &["auto", "1fr", "auto"],
                &["0.5fr", "header", "header", "header"],
                &["1fr", "sidebar", "main", ""],
            ]),
            "0.5fr 1fr"
        );
    }

    #[test]
    fn rows_blank_is_auto() {
        assert_eq!(
            row_sizes(&[
                &["auto", "1fr", "auto"],
                &["0.5fr", "header", "header", "header"],
                &["", "sidebar", "main", ""],
            ]),
            "0.5fr auto"
        );
    }

    #[test]
    fn rows_whitespace_is_auto() {
        assert_eq!(
            row_sizes(&[
                &["auto", "1fr", "auto"],
                &["0.5fr", "header", "header", "header"],
                &["   ", "sidebar", "main", ""],
            ]),
            "0.5fr auto"
        );
    }

    // ── Shape properties ─────────────────────────────────────────────

    #[test]
    fn one_row_size_and_one_quoted_row_per_area_row() {
        let parsed = parse(&[
            &["1fr", "2fr"],
            &["auto", "a", "b"],
            &["1fr", "c", "d"],
            &["", "e", ""],
        ])
        .unwrap();

        assert_eq!(parsed.rows.unwrap().split(' ').count(), 3);
        let areas = parsed.areas.unwrap();
        let quoted: Vec<&str> = areas
            .split('"')
            .filter(|s| !s.trim().is_empty())
            .collect();
        assert_eq!(quoted, vec!["a b", "c d", "e ."]);
        assert!(quoted.iter().all(|row| row.split(' ').count() == 2));
    }

    #[test]
    fn accepts_owned_tables() {
        let table: LayoutTable = vec![
            vec!["1fr".to_string()],
            vec!["auto".to_string(), "main".to_string()],
        ];
        assert_eq!(parse_layout_table(&table).unwrap().areas.as_deref(), Some(r#""main""#));
    }

    #[test]
    fn normalizers() {
        assert_eq!(normalize_size(""), "auto");
        assert_eq!(normalize_size("   "), "auto");
        assert_eq!(normalize_size(" 1fr "), "1fr");
        assert_eq!(normalize_area(""), ".");
        assert_eq!(normalize_area("   "), ".");
        assert_eq!(normalize_area("."), ".");
        assert_eq!(normalize_area(" main "), "main");
    }
}
