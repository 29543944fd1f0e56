//! Component state shared by stateful widgets.

pub mod controllable;

pub use controllable::ControllableState;
