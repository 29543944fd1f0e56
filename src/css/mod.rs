//! CSS value handling: tokenizer, scalars, track lists, grid lines, inline styles.

pub mod align;
pub mod declarations;
pub mod line;
pub mod scalar;
pub mod tokenizer;
pub mod track;
pub mod value;
