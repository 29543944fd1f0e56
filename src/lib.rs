//! # gilt-grid
//!
//! Grid layout for gilt widgets, described the way you would draw it.
//!
//! A layout can be written as pipe-delimited text, given as a table of cells,
//! or reduced to plain column/row sizing. Every form is parsed into the same
//! [`ParsedTemplate`](grid::ParsedTemplate): the CSS `grid-template-columns`,
//! `grid-template-rows` and `grid-template-areas` strings.
//!
//! ```ignore
//! use gilt_grid::grid::{parse_grid_layout, GridLayout};
//!
//! let layout = GridLayout::from("
//!          | 100px  | 1fr
//!     auto | header | header
//!     1fr  | nav    | main
//! ");
//! let template = parse_grid_layout(Some(&layout))?;
//! assert_eq!(template.columns.as_deref(), Some("100px 1fr"));
//! ```
//!
//! ## Core Systems
//!
//! - **[`grid`]**: Layout grammar: text tokenizer, table validation, template strings
//! - **[`css`]**: CSS value tokenizer, track sizes, grid lines, inline declarations
//! - **[`widgets`]**: Grid, GridArea, Toggle and Collapsible builders
//! - **[`layout`]**: Taffy-powered grid computation
//! - **[`state`]**: Controlled/uncontrolled widget state
//! - **[`geometry`]**: Computed regions

// Foundation
pub mod geometry;

// Core systems
pub mod css;
pub mod grid;
pub mod layout;

// Widget system
pub mod state;
pub mod widgets;
