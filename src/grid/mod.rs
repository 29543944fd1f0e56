//! Grid layout grammar: text/table/sizing forms → grid template strings.

pub mod areas;
pub mod error;
pub mod layout;
pub mod template;
pub mod tokenizer;

pub use areas::{AreaMap, AreaSpan};
pub use error::GridLayoutError;
pub use layout::{parse_grid_layout, parse_track_sizing, GridLayout, TrackSizing};
pub use template::{parse_layout_table, LayoutTable, ParsedTemplate};
pub use tokenizer::parse_layout_text;
