//! Errors raised while parsing or applying a grid layout.

use crate::css::value::ValueError;

/// Errors from grid layout parsing and resolution.
///
/// All variants describe a mistake in the supplied layout, not a transient
/// condition; callers should surface them rather than retry.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GridLayoutError {
    /// The table form needs a column sizing row plus at least one area row.
    #[error(
        "layout table has {rows} row(s), but needs a column sizing row and at least one area row"
    )]
    TooFewRows { rows: usize },

    /// An area row does not name one area per sized column.
    #[error(
        "layout row {row} has {found} column(s), but the column sizing row declares {expected}"
    )]
    ColumnMismatch {
        /// 0-based index among the area rows (the sizing row is not counted).
        row: usize,
        expected: usize,
        found: usize,
    },

    /// An area template row has a different width than the first row.
    #[error("area template row {row} has {found} cell(s), expected {expected}")]
    RaggedAreas {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A named area does not cover a filled rectangle.
    #[error("area '{name}' does not form a rectangle")]
    NonRectangularArea { name: String },

    /// A grid item names an area the template does not define.
    #[error("area '{name}' is not defined by the grid layout")]
    UnknownArea { name: String },

    /// A sizing, gap or line value could not be read.
    #[error(transparent)]
    Value(#[from] ValueError),
}
