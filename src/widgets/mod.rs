//! Built-in widgets: Grid, GridArea, Toggle, Collapsible.

pub mod collapsible;
pub mod grid;
pub mod grid_area;
pub mod toggle;

pub use collapsible::{Collapsible, HideBehaviour};
pub use grid::{Grid, GridFlow};
pub use grid_area::{GridArea, ItemPlacement};
pub use toggle::Toggle;
