//! Grid widget: a container laid out by a [`GridLayout`].
//!
//! The grid turns its props into the inline declarations of a CSS grid
//! container. Its children are usually [`GridArea`](super::GridArea)s.

use serde::Deserialize;

use crate::css::align::{AxisAlignment, HorizontalAlignment, VerticalAlignment};
use crate::css::declarations::{build_class_name, InlineStyle};
use crate::grid::{parse_grid_layout, GridLayout, GridLayoutError, ParsedTemplate};

/// Class every grid element carries.
pub const GRID_CLASS: &str = "gilt-grid";

/// How auto-placed children fill the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GridFlow {
    /// Fill each row before starting the next.
    #[default]
    Row,
    /// Fill each column before starting the next.
    Column,
}

impl GridFlow {
    pub fn as_css(self) -> &'static str {
        match self {
            GridFlow::Row => "row",
            GridFlow::Column => "column",
        }
    }
}

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// A grid container.
///
/// # Examples
///
/// ```ignore
/// let grid = Grid::new()
///     .layout("
///              | 100px  | 1fr  | 100px
///         auto | header | header | header
///         1fr  | .      | main | sidebar
///     ")
///     .spacing("8px")
///     .vertical_alignment(VerticalAlignment::Center);
///
/// let style = grid.declarations()?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct Grid {
    layout: Option<GridLayout>,
    spacing: Option<String>,
    row_spacing: Option<String>,
    column_spacing: Option<String>,
    horizontal_alignment: Option<HorizontalAlignment>,
    vertical_alignment: Option<VerticalAlignment>,
    cell_horizontal_alignment: Option<HorizontalAlignment>,
    cell_vertical_alignment: Option<VerticalAlignment>,
    flow: GridFlow,
    classes: Vec<String>,
    style: InlineStyle,
}

impl Grid {
    /// Create a grid with no layout, flowing by row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the layout (builder pattern).
    pub fn layout(mut self, layout: impl Into<GridLayout>) -> Self {
        self.layout = Some(layout.into());
        self
    }

    /// Spacing between both rows and columns (builder pattern).
    ///
    /// `row_spacing` and `column_spacing` take precedence when set.
    pub fn spacing(mut self, spacing: impl Into<String>) -> Self {
        self.spacing = Some(spacing.into());
        self
    }

    /// Spacing between rows (builder pattern).
    pub fn row_spacing(mut self, spacing: impl Into<String>) -> Self {
        self.row_spacing = Some(spacing.into());
        self
    }

    /// Spacing between columns (builder pattern).
    pub fn column_spacing(mut self, spacing: impl Into<String>) -> Self {
        self.column_spacing = Some(spacing.into());
        self
    }

    /// Align the whole grid horizontally inside its container (builder pattern).
    pub fn horizontal_alignment(mut self, alignment: HorizontalAlignment) -> Self {
        self.horizontal_alignment = Some(alignment);
        self
    }

    /// Align the whole grid vertically inside its container (builder pattern).
    pub fn vertical_alignment(mut self, alignment: VerticalAlignment) -> Self {
        self.vertical_alignment = Some(alignment);
        self
    }

    /// Align items horizontally within their cells (builder pattern).
    pub fn cell_horizontal_alignment(mut self, alignment: HorizontalAlignment) -> Self {
        self.cell_horizontal_alignment = Some(alignment);
        self
    }

    /// Align items vertically within their cells (builder pattern).
    pub fn cell_vertical_alignment(mut self, alignment: VerticalAlignment) -> Self {
        self.cell_vertical_alignment = Some(alignment);
        self
    }

    /// Set the auto-placement flow (builder pattern).
    ///
    /// Has no visible effect on children placed by area name.
    pub fn flow(mut self, flow: GridFlow) -> Self {
        self.flow = flow;
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

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    pub fn layout_ref(&self) -> Option<&GridLayout> {
        self.layout.as_ref()
    }

    /// Effective gap between rows.
    pub fn row_gap(&self) -> Option<&str> {
        self.row_spacing.as_deref().or(self.spacing.as_deref())
    }

    /// Effective gap between columns.
    pub fn column_gap(&self) -> Option<&str> {
        self.column_spacing.as_deref().or(self.spacing.as_deref())
    }

    pub fn content_alignment(&self) -> (Option<AxisAlignment>, Option<AxisAlignment>) {
        (
            self.horizontal_alignment.map(AxisAlignment::from),
            self.vertical_alignment.map(AxisAlignment::from),
        )
    }

    pub fn item_alignment(&self) -> (Option<AxisAlignment>, Option<AxisAlignment>) {
        (
            self.cell_horizontal_alignment.map(AxisAlignment::from),
            self.cell_vertical_alignment.map(AxisAlignment::from),
        )
    }

    pub fn flow_ref(&self) -> GridFlow {
        self.flow
    }

    /// The element's class attribute.
    pub fn class_name(&self) -> String {
        build_class_name(
            self.classes
                .iter()
                .map(String::as_str)
                .chain(std::iter::once(GRID_CLASS)),
        )
    }

    // -----------------------------------------------------------------------
    // Output
    // -----------------------------------------------------------------------

    /// Parse the layout prop.
    pub fn template(&self) -> Result<ParsedTemplate, GridLayoutError> {
        parse_grid_layout(self.layout.as_ref())
    }

    /// The grid container's inline declarations.
    ///
    /// Fails if the layout is malformed, so a broken layout never renders.
    pub fn declarations(&self) -> Result<InlineStyle, GridLayoutError> {
        let template = self.template()?;
        let (justify_content, align_content) = self.content_alignment();
        let (justify_items, align_items) = self.item_alignment();

        let mut style = InlineStyle::new();
        style.set_opt("grid-template-columns", template.columns);
        style.set_opt("grid-template-rows", template.rows);
        style.set_opt("grid-template-areas", template.areas);
        style.set("display", "grid");
        style.set_opt("row-gap", self.row_gap());
        style.set_opt("column-gap", self.column_gap());
        style.set_opt("justify-content", justify_content.map(AxisAlignment::as_css));
        style.set_opt("align-content", align_content.map(AxisAlignment::as_css));
        style.set_opt("justify-items", justify_items.map(AxisAlignment::as_css));
        style.set_opt("align-items", align_items.map(AxisAlignment::as_css));
        style.set("grid-auto-flow", self.flow.as_css());
        style.merge(&self.style);

        Ok(style)
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::TrackSizing;
    use pretty_assertions::assert_eq;

    const LAYOUT: &str = "
             | 100px  | 1fr    | 100px
        auto | header | header | header
        1fr  | .      | main   | sidebar
             | footer | footer | footer
    ";

    #[test]
    fn declarations_for_text_layout() {
        let style = Grid::new().layout(LAYOUT).declarations().unwrap();
        assert_eq!(style.get("grid-template-columns"), Some("100px 1fr 100px"));
        assert_eq!(style.get("grid-template-rows"), Some("auto 1fr auto"));
        assert_eq!(
            style.get("grid-template-areas"),
            Some(r#""header header header" ". main sidebar" "footer footer footer""#)
        );
        assert_eq!(style.get("display"), Some("grid"));
        assert_eq!(style.get("grid-auto-flow"), Some("row"));
    }

    #[test]
    fn no_layout_sets_no_template() {
        let style = Grid::new().declarations().unwrap();
        assert_eq!(style.get("grid-template-columns"), None);
        assert_eq!(style.get("grid-template-areas"), None);
        assert_eq!(style.to_string(), "display: grid; grid-auto-flow: row;");
    }

    #[test]
    fn sizing_layout_has_no_areas() {
        let style = Grid::new()
            .layout(TrackSizing::new("1fr 1fr", "auto"))
            .declarations()
            .unwrap();
        assert_eq!(style.get("grid-template-columns"), Some("1fr 1fr"));
        assert_eq!(style.get("grid-template-areas"), None);
    }

    #[test]
    fn malformed_layout_fails() {
        let err = Grid::new()
            .layout("| 1fr | 1fr\nauto | a")
            .declarations()
            .unwrap_err();
        assert!(matches!(err, GridLayoutError::ColumnMismatch { row: 0, .. }));
    }

    #[test]
    fn spacing_falls_back_to_shared_value() {
        let grid = Grid::new().spacing("4px").row_spacing("8px");
        assert_eq!(grid.row_gap(), Some("8px"));
        assert_eq!(grid.column_gap(), Some("4px"));

        let style = grid.declarations().unwrap();
        assert_eq!(style.get("row-gap"), Some("8px"));
        assert_eq!(style.get("column-gap"), Some("4px"));
    }

    #[test]
    fn alignment_maps_to_start_center_end() {
        let style = Grid::new()
            .horizontal_alignment(HorizontalAlignment::Left)
            .vertical_alignment(VerticalAlignment::Bottom)
            .cell_horizontal_alignment(HorizontalAlignment::Center)
            .cell_vertical_alignment(VerticalAlignment::Top)
            .declarations()
            .unwrap();
        assert_eq!(style.get("justify-content"), Some("start"));
        assert_eq!(style.get("align-content"), Some("end"));
        assert_eq!(style.get("justify-items"), Some("center"));
        assert_eq!(style.get("align-items"), Some("start"));
    }

    #[test]
    fn column_flow() {
        let style = Grid::new().flow(GridFlow::Column).declarations().unwrap();
        assert_eq!(style.get("grid-auto-flow"), Some("column"));
    }

    #[test]
    fn user_style_wins() {
        let style = Grid::new()
            .spacing("4px")
            .style(InlineStyle::new().with("display", "inline-grid").with("color", "red"))
            .declarations()
            .unwrap();
        assert_eq!(style.get("display"), Some("inline-grid"));
        assert_eq!(style.get("color"), Some("red"));
    }

    #[test]
    fn class_name_appends_grid_class() {
        assert_eq!(Grid::new().class_name(), "gilt-grid");
        assert_eq!(
            Grid::new().with_class("page").with_class("page").class_name(),
            "page gilt-grid"
        );
    }

    #[test]
    fn flow_deserializes_lowercase() {
        let flow: GridFlow = serde_json::from_str(r#""column""#).unwrap();
        assert_eq!(flow, GridFlow::Column);
    }
}
