//! GridArea widget: a child of [`Grid`](super::Grid) placed by area name or
//! by explicit row/column lines.

use crate::css::declarations::{build_class_name, InlineStyle};
use crate::css::line::{parse_grid_line, GridLine};
use crate::grid::{AreaMap, GridLayoutError};

/// Class every grid area element carries.
pub const GRID_AREA_CLASS: &str = "gilt-grid-area";

/// Where a grid item sits along both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ItemPlacement {
    pub row: GridLine,
    pub column: GridLine,
}

// ---------------------------------------------------------------------------
// GridArea
// ---------------------------------------------------------------------------

/// A region of a grid.
///
/// Use `name` with a layout that defines areas, or `row`/`column` (CSS
/// `grid-row`/`grid-column` syntax) with a sizing-only layout. The two are
/// mutually exclusive; setting both logs a warning.
///
/// # Examples
///
/// ```ignore
/// let header = GridArea::named("header");
/// let banner = GridArea::new().row("1").column("1 / span 3");
/// ```
#[derive(Debug, Clone, Default)]
pub struct GridArea {
    name: Option<String>,
    row: Option<String>,
    column: Option<String>,
    classes: Vec<String>,
    style: InlineStyle,
}

impl GridArea {
    /// Create an unplaced area; it will be auto-placed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an area bound to a named area of the grid layout.
    pub fn named(name: impl Into<String>) -> Self {
        Self::new().name(name)
    }

    /// Set the area name (builder pattern).
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the `grid-row` shorthand (builder pattern).
    pub fn row(mut self, row: impl Into<String>) -> Self {
        self.row = Some(row.into());
        self
    }

    /// Set the `grid-column` shorthand (builder pattern).
    pub fn column(mut self, column: impl Into<String>) -> Self {
        self.column = Some(column.into());
        self
    }

    /// Add a CSS class (builder pattern).
    pub fn with_class(mut self, class: &str) -> Self {
        let class = class.to_owned();
        if !self.classes.contains(&class) {
            self.classes.push(class);
        }
        self
    }

    /// Extra declarations applied on top of the computed ones (builder pattern).
    pub fn style(mut self, style: InlineStyle) -> Self {
        self.style = style;
        self
    }

    pub fn area_name(&self) -> Option<&str> {
        non_empty(&self.name)
    }

    pub fn row_value(&self) -> Option<&str> {
        non_empty(&self.row)
    }

    pub fn column_value(&self) -> Option<&str> {
        non_empty(&self.column)
    }

    fn has_lines(&self) -> bool {
        self.row_value().is_some() || self.column_value().is_some()
    }

    /// The element's class attribute.
    pub fn class_name(&self) -> String {
        build_class_name(
            self.classes
                .iter()
                .map(String::as_str)
                .chain(std::iter::once(GRID_AREA_CLASS)),
        )
    }

    /// The area's inline declarations.
    ///
    /// Lines are emitted only when a row or column is set, and `grid-area`
    /// only when a name is set.
    pub fn declarations(&self) -> InlineStyle {
        if self.has_lines() && self.area_name().is_some() {
            log::warn!(
                "GridArea '{}' sets both a name and row/column; the placements conflict",
                self.area_name().unwrap_or_default()
            );
        }

        let mut style = InlineStyle::new();
        if self.has_lines() {
            style.set_opt("grid-row", self.row_value());
            style.set_opt("grid-column", self.column_value());
        }
        style.set_opt("grid-area", self.area_name());
        style.merge(&self.style);
        style
    }

    /// Resolve the concrete placement of this area.
    ///
    /// A name is looked up in `areas` and takes precedence over row/column.
    /// Without a name, row and column are parsed; unset axes are auto.
    pub fn placement(&self, areas: &AreaMap) -> Result<ItemPlacement, GridLayoutError> {
        if let Some(name) = self.area_name() {
            let span = areas.get(name).ok_or_else(|| GridLayoutError::UnknownArea {
                name: name.to_string(),
            })?;
            return Ok(ItemPlacement {
                row: span.rows(),
                column: span.columns(),
            });
        }

        Ok(ItemPlacement {
            row: self.row_value().map(parse_grid_line).transpose()?.unwrap_or_default(),
            column: self
                .column_value()
                .map(parse_grid_line)
                .transpose()?
                .unwrap_or_default(),
        })
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

// ===========================================================================
// Tests
// ===========================================================================
