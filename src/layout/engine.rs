//! TaffyTree wrapper for grid layout computation.
//!
//! [`LayoutEngine`] mirrors a [`Grid`] and its [`GridArea`] children into a
//! taffy layout tree, runs layout computation, and provides results as
//! [`Region`]s.

use taffy::prelude::*;
use thiserror::Error;

use crate::geometry::Region;
use crate::grid::{AreaMap, GridLayoutError};
use crate::widgets::{Grid, GridArea};

use super::resolve::{resolve_grid_style, resolve_item_style};

/// Errors raised while building or computing a layout.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    /// The grid or one of its areas has invalid props.
    #[error(transparent)]
    Grid(#[from] GridLayoutError),

    /// taffy rejected an operation on the layout tree.
    #[error("layout tree error: {0}")]
    Taffy(String),
}

impl From<taffy::TaffyError> for LayoutError {
    fn from(err: taffy::TaffyError) -> Self {
        LayoutError::Taffy(format!("{err:?}"))
    }
}

/// Wraps a [`TaffyTree`] holding one grid container and its items.
pub struct LayoutEngine {
    tree: TaffyTree<()>,
    /// The grid container, if a grid has been synced.
    root: Option<NodeId>,
    /// Item nodes, in the order the areas were passed to [`sync_grid`](Self::sync_grid).
    items: Vec<NodeId>,
}

impl LayoutEngine {
    /// Create a new, empty layout engine.
    pub fn new() -> Self {
        Self {
            tree: TaffyTree::new(),
            root: None,
            items: Vec::new(),
        }
    }

    /// Replace the layout tree with `grid` and its `areas`.
    ///
    /// Named areas are resolved against the grid's layout template, so a name
    /// missing from the layout fails with
    /// [`GridLayoutError::UnknownArea`]. Nothing is replaced on error.
    pub fn sync_grid(&mut self, grid: &Grid, areas: &[GridArea]) -> Result<(), LayoutError> {
        let container_style = resolve_grid_style(grid)?;
        let area_map = match grid.template()?.areas {
            Some(template) => AreaMap::from_template(&template)?,
            None => AreaMap::default(),
        };

        let item_styles = areas
            .iter()
            .map(|area| area.placement(&area_map).map(|p| resolve_item_style(&p)))
            .collect::<Result<Vec<_>, _>>()?;

        self.clear();

        let mut items = Vec::with_capacity(item_styles.len());
        for style in item_styles {
            items.push(self.tree.new_leaf(style)?);
        }
        let root = self.tree.new_with_children(container_style, &items)?;

        log::debug!(
            "synced grid layout: {} item(s), {} named area(s)",
            items.len(),
            area_map.len()
        );

        self.root = Some(root);
        self.items = items;
        Ok(())
    }

    /// Run taffy layout computation with the grid filling the viewport.
    ///
    /// Does nothing if no grid has been synced.
    pub fn compute(&mut self, width: f32, height: f32) -> Result<(), LayoutError> {
        let Some(root) = self.root else {
            return Ok(());
        };

        let mut style = self.tree.style(root)?.clone();
        style.size = taffy::geometry::Size {
            width: Dimension::from_length(width),
            height: Dimension::from_length(height),
        };
        self.tree.set_style(root, style)?;

        self.tree.compute_layout(
            root,
            taffy::geometry::Size {
                width: AvailableSpace::Definite(width),
                height: AvailableSpace::Definite(height),
            },
        )?;
        Ok(())
    }

    /// The grid container's computed region.
    pub fn root_region(&self) -> Option<Region> {
        let layout = self.tree.layout(self.root?).ok()?;
        Some(Region::from_layout(layout))
    }

    /// The computed region of the `index`th area, relative to the grid.
    ///
    /// Taffy's f32 coordinates are rounded to the nearest integer cell.
    pub fn item_region(&self, index: usize) -> Option<Region> {
        let node = *self.items.get(index)?;
        let layout = self.tree.layout(node).ok()?;
        Some(Region::from_layout(layout))
    }

    /// Computed regions of every area, in sync order.
    pub fn item_regions(&self) -> Vec<Region> {
        (0..self.items.len())
            .filter_map(|i| self.item_region(i))
            .collect()
    }

    /// Number of areas in the synced grid.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    fn clear(&mut self) {
        self.tree.clear();
        self.root = None;
        self.items.clear();
    }
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}
