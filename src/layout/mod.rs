//! Layout engine: taffy integration for grids and their areas.

pub mod engine;
pub mod resolve;

pub use engine::{LayoutEngine, LayoutError};
pub use resolve::{resolve_grid_style, resolve_item_style, resolve_track};
