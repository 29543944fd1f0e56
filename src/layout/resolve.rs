//! Grid props -> taffy Style conversion.
//!
//! Maps the grid's CSS values ([`TrackSize`], [`Scalar`], [`GridLine`],
//! alignment props) onto taffy's layout types.

use taffy::geometry::MinMax;
use taffy::prelude::*;
use taffy::style::{
    GridTemplateComponent, MaxTrackSizingFunction, MinTrackSizingFunction, TrackSizingFunction,
};

use crate::css::align::AxisAlignment;
use crate::css::line::LineBound;
use crate::css::scalar::{Scalar, Unit};
use crate::css::track::{parse_length, parse_track_list, TrackSize};
use crate::grid::GridLayoutError;
use crate::widgets::{Grid, GridFlow, ItemPlacement};

/// Convert a [`Scalar`] to the minimum side of a track.
///
/// `fr` is not a valid minimum and resolves to `auto`, as in CSS.
fn resolve_min(scalar: &Scalar) -> MinTrackSizingFunction {
    match scalar.unit {
        Unit::Px => length(scalar.value),
        Unit::Percent => percent(scalar.value / 100.0),
        Unit::MinContent => min_content(),
        Unit::MaxContent => max_content(),
        Unit::Auto | Unit::Fr => auto(),
    }
}

/// Convert a [`Scalar`] to the maximum side of a track.
fn resolve_max(scalar: &Scalar) -> MaxTrackSizingFunction {
    match scalar.unit {
        Unit::Px => length(scalar.value),
        Unit::Percent => percent(scalar.value / 100.0),
        Unit::Fr => fr(scalar.value),
        Unit::MinContent => min_content(),
        Unit::MaxContent => max_content(),
        Unit::Auto => auto(),
    }
}

/// Convert one [`TrackSize`] to a taffy track sizing function.
///
/// - `100px` -> `minmax(100px, 100px)`
/// - `1fr` -> `minmax(auto, 1fr)`
/// - `auto` -> `minmax(auto, auto)`
/// - `minmax(a, b)` -> itself
pub fn resolve_track(track: &TrackSize) -> TrackSizingFunction {
    let (min, max) = match track {
        TrackSize::Fixed(s) => (resolve_min(s), resolve_max(s)),
        TrackSize::MinMax(min, max) => (resolve_min(min), resolve_max(max)),
    };
    MinMax { min, max }
}

fn resolve_tracks(list: Option<&str>) -> Result<Vec<TrackSizingFunction>, GridLayoutError> {
    let Some(list) = list else {
        return Ok(Vec::new());
    };
    Ok(parse_track_list(list)?.iter().map(resolve_track).collect())
}

/// Convert a gap value (`8px`, `5%`) to a [`LengthPercentage`].
fn resolve_gap(gap: Option<&str>) -> Result<LengthPercentage, GridLayoutError> {
    let Some(gap) = gap else {
        return Ok(LengthPercentage::ZERO);
    };
    let scalar = parse_length(gap)?;
    Ok(match scalar.unit {
        Unit::Percent => LengthPercentage::from_percent(scalar.value / 100.0),
        _ => LengthPercentage::from_length(scalar.value),
    })
}

fn resolve_content_alignment(alignment: Option<AxisAlignment>) -> Option<AlignContent> {
    alignment.map(|a| match a {
        AxisAlignment::Start => AlignContent::Start,
        AxisAlignment::Center => AlignContent::Center,
        AxisAlignment::End => AlignContent::End,
    })
}

fn resolve_item_alignment(alignment: Option<AxisAlignment>) -> Option<AlignItems> {
    alignment.map(|a| match a {
        AxisAlignment::Start => AlignItems::Start,
        AxisAlignment::Center => AlignItems::Center,
        AxisAlignment::End => AlignItems::End,
    })
}

/// Convert a [`Grid`]'s props into the container's [`taffy::Style`].
///
/// Fails if the layout is malformed or a track or gap value cannot be read.
///
/// Mapping summary:
/// - layout columns/rows -> `grid_template_columns`/`grid_template_rows`
/// - `row_spacing`/`column_spacing` (falling back to `spacing`) -> `gap`
/// - `horizontal_alignment`/`vertical_alignment` -> `justify_content`/`align_content`
/// - `cell_*_alignment` -> `justify_items`/`align_items`
/// - `flow` -> `grid_auto_flow`
pub fn resolve_grid_style(grid: &Grid) -> Result<taffy::Style, GridLayoutError> {
    let template = grid.template()?;
    let (justify_content, align_content) = grid.content_alignment();
    let (justify_items, align_items) = grid.item_alignment();

    let mut style = taffy::Style {
        display: Display::Grid,
        ..Default::default()
    };

    style.grid_template_columns = resolve_tracks(template.columns.as_deref())?
        .into_iter()
        .map(GridTemplateComponent::Single)
        .collect();
    style.grid_template_rows = resolve_tracks(template.rows.as_deref())?
        .into_iter()
        .map(GridTemplateComponent::Single)
        .collect();

    style.gap = taffy::geometry::Size {
        width: resolve_gap(grid.column_gap())?,
        height: resolve_gap(grid.row_gap())?,
    };

    style.justify_content = resolve_content_alignment(justify_content);
    style.align_content = resolve_content_alignment(align_content);
    style.justify_items = resolve_item_alignment(justify_items);
    style.align_items = resolve_item_alignment(align_items);

    style.grid_auto_flow = match grid.flow_ref() {
        GridFlow::Row => GridAutoFlow::Row,
        GridFlow::Column => GridAutoFlow::Column,
    };

    Ok(style)
}

/// Convert a resolved [`ItemPlacement`] into a grid item's [`taffy::Style`].
pub fn resolve_item_style(placement: &ItemPlacement) -> taffy::Style {
    let resolve = |bound: LineBound| match bound {
        LineBound::Auto => GridPlacement::Auto,
        LineBound::Line(n) => line(n),
        LineBound::Span(n) => span(n),
    };

    let mut style = taffy::Style::default();
    style.grid_row.start = resolve(placement.row.start);
    style.grid_row.end = resolve(placement.row.end);
    style.grid_column.start = resolve(placement.column.start);
    style.grid_column.end = resolve(placement.column.end);
    style
}
