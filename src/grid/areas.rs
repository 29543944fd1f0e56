//! Named area lookup for an area template.
//!
//! [`AreaMap`] reads a `grid-template-areas` string back into the line
//! numbers each named area covers, which is what a layout engine needs to
//! place a [`GridArea`](crate::widgets::GridArea) by name.

use std::collections::BTreeMap;

use crate::css::line::GridLine;
use crate::css::tokenizer::Token;
use crate::css::value::ValueParser;
use crate::grid::error::GridLayoutError;

/// Lines covered by a named area. 1-based, end-exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AreaSpan {
    pub row_start: i16,
    pub row_end: i16,
    pub column_start: i16,
    pub column_end: i16,
}

impl AreaSpan {
    /// The row placement of this area.
    pub fn rows(&self) -> GridLine {
        GridLine::between(self.row_start, self.row_end)
    }

    /// The column placement of this area.
    pub fn columns(&self) -> GridLine {
        GridLine::between(self.column_start, self.column_end)
    }
}

/// Cells seen for one name while scanning the template.
struct Bounds {
    top: usize,
    bottom: usize,
    left: usize,
    right: usize,
    cells: usize,
}

impl Bounds {
    fn new(row: usize, column: usize) -> Self {
        Self {
            top: row,
            bottom: row,
            left: column,
            right: column,
            cells: 1,
        }
    }

    fn include(&mut self, row: usize, column: usize) {
        self.top = self.top.min(row);
        self.bottom = self.bottom.max(row);
        self.left = self.left.min(column);
        self.right = self.right.max(column);
        self.cells += 1;
    }

    fn is_filled(&self) -> bool {
        (self.bottom - self.top + 1) * (self.right - self.left + 1) == self.cells
    }

    fn span(&self) -> AreaSpan {
        AreaSpan {
            row_start: to_line(self.top),
            row_end: to_line(self.bottom + 1),
            column_start: to_line(self.left),
            column_end: to_line(self.right + 1),
        }
    }
}

/// Track index (0-based) to grid line number (1-based).
fn to_line(index: usize) -> i16 {
    i16::try_from(index + 1).unwrap_or(i16::MAX)
}

/// A run of one or more `.` is an unnamed cell.
fn is_unnamed(cell: &str) -> bool {
    !cell.is_empty() && cell.chars().all(|c| c == '.')
}

/// Named areas of a grid and the lines they cover.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AreaMap {
    rows: usize,
    columns: usize,
    areas: BTreeMap<String, AreaSpan>,
}

impl AreaMap {
    /// Read an area template such as `"header header" "sidebar main"`.
    pub fn from_template(template: &str) -> Result<Self, GridLayoutError> {
        let mut parser = ValueParser::new(template)?;
        let mut rows = Vec::new();

        while !parser.is_eof() {
            let quoted = parser.expect(&Token::StringLiteral, "a quoted area row")?;
            let inner = quoted.trim_matches('"');
            rows.push(
                inner
                    .split_whitespace()
                    .map(str::to_string)
                    .collect::<Vec<_>>(),
            );
        }

        Self::from_rows(&rows)
    }

    /// Build from rows of area cells.
    ///
    /// # Errors
    ///
    /// - [`GridLayoutError::RaggedAreas`] if a row is wider or narrower than
    ///   the first.
    /// - [`GridLayoutError::NonRectangularArea`] if a name does not cover a
    ///   filled rectangle.
    pub fn from_rows<R, S>(rows: &[R]) -> Result<Self, GridLayoutError>
    where
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        let columns = rows.first().map_or(0, |row| row.as_ref().len());
        let mut bounds: BTreeMap<&str, Bounds> = BTreeMap::new();

        for (r, row) in rows.iter().enumerate() {
            let cells = row.as_ref();
            if cells.len() != columns {
                return Err(GridLayoutError::RaggedAreas {
                    row: r,
                    expected: columns,
                    found: cells.len(),
                });
            }

            for (c, cell) in cells.iter().enumerate() {
                let name = cell.as_ref();
                if is_unnamed(name) {
                    continue;
                }
                bounds
                    .entry(name)
                    .and_modify(|b| b.include(r, c))
                    .or_insert_with(|| Bounds::new(r, c));
            }
        }

        let mut areas = BTreeMap::new();
        for (name, b) in bounds {
            if !b.is_filled() {
                return Err(GridLayoutError::NonRectangularArea {
                    name: name.to_string(),
                });
            }
            areas.insert(name.to_string(), b.span());
        }

        Ok(Self {
            rows: rows.len(),
            columns,
            areas,
        })
    }

    /// Lines covered by `name`, if the template defines it.
    pub fn get(&self, name: &str) -> Option<AreaSpan> {
        self.areas.get(name).copied()
    }

    /// Area names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.areas.keys().map(String::as_str)
    }

    pub fn row_count(&self) -> usize {
        self.rows
    }

    pub fn column_count(&self) -> usize {
        self.columns
    }

    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::css::value::ValueError;
    use pretty_assertions::assert_eq;

    #[test]
    fn spans_of_worked_example() {
        let map = AreaMap::from_template(
            r#""header header header" ". main sidebar" "footer footer footer""#,
        )
        .unwrap();

        assert_eq!(map.row_count(), 3);
        assert_eq!(map.column_count(), 3);
        assert_eq!(
            map.names().collect::<Vec<_>>(),
            vec!["footer", "header", "main", "sidebar"]
        );
        assert_eq!(
            map.get("header"),
            Some(AreaSpan {
                row_start: 1,
                row_end: 2,
                column_start: 1,
                column_end: 4,
            })
        );
        assert_eq!(
            map.get("main"),
            Some(AreaSpan {
                row_start: 2,
                row_end: 3,
                column_start: 2,
                column_end: 3,
            })
        );
        assert_eq!(map.get("footer").unwrap().rows(), GridLine::between(3, 4));
        assert_eq!(map.get("nav"), None);
    }

    #[test]
    fn block_area_spans_rows_and_columns() {
        let map = AreaMap::from_rows(&[
            ["nav", "main", "main"],
            ["nav", "main", "main"],
        ])
        .unwrap();
        let main = map.get("main").unwrap();
        assert_eq!(main.rows(), GridLine::between(1, 3));
        assert_eq!(main.columns(), GridLine::between(2, 4));
    }

    #[test]
    fn dots_are_unnamed() {
        let map = AreaMap::from_template(r#"". ... a""#).unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("a").unwrap().columns(), GridLine::between(3, 4));
    }

    #[test]
    fn l_shaped_area_is_rejected() {
        let err = AreaMap::from_template(r#""a a" "a b""#).unwrap_err();
        assert_eq!(err, GridLayoutError::NonRectangularArea { name: "a".into() });
    }

    #[test]
    fn split_area_is_rejected() {
        let err = AreaMap::from_template(r#""a b a""#).unwrap_err();
        assert_eq!(err, GridLayoutError::NonRectangularArea { name: "a".into() });
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let err = AreaMap::from_template(r#""a b" "c""#).unwrap_err();
        assert_eq!(
            err,
            GridLayoutError::RaggedAreas {
                row: 1,
                expected: 2,
                found: 1,
            }
        );
    }

    #[test]
    fn unquoted_template_is_rejected() {
        let err = AreaMap::from_template("a b").unwrap_err();
        assert!(matches!(
            err,
            GridLayoutError::Value(ValueError::UnexpectedToken { .. })
        ));
    }

    #[test]
    fn empty_template_has_no_areas() {
        let map = AreaMap::from_template("").unwrap();
        assert!(map.is_empty());
        assert_eq!(map.row_count(), 0);
    }
}
