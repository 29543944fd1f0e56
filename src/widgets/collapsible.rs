//! Collapsible widget: a heading that shows or hides its content.

use crate::css::declarations::{build_class_name, InlineStyle};
use crate::state::ControllableState;

/// Class every collapsible element carries.
pub const COLLAPSIBLE_CLASS: &str = "gilt-collapsible";

/// How collapsed content is hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HideBehaviour {
    /// Drop the content entirely; its state is lost.
    #[default]
    Remove,
    /// Keep the content but hide it.
    Hide,
}

/// Content that can be collapsed by activating its heading.
#[derive(Debug, Clone)]
pub struct Collapsible {
    state: ControllableState<bool>,
    behaviour: HideBehaviour,
}

impl Collapsible {
    /// An uncontrolled collapsible that starts expanded.
    pub fn new() -> Self {
        Self::with_default(false)
    }

    /// An uncontrolled collapsible starting collapsed or not.
    pub fn with_default(default_is_collapsed: bool) -> Self {
        Self {
            state: ControllableState::uncontrolled(default_is_collapsed),
            behaviour: HideBehaviour::default(),
        }
    }

    /// A collapsible whose state is owned by the caller.
    pub fn controlled(is_collapsed: bool) -> Self {
        Self {
            state: ControllableState::new(Some(is_collapsed), is_collapsed),
            behaviour: HideBehaviour::default(),
        }
    }

    /// Called with the requested collapsed state (builder pattern).
    pub fn on_change_collapsed(mut self, callback: impl Fn(bool) + 'static) -> Self {
        self.state = self.state.on_change(move |collapsed| callback(*collapsed));
        self
    }

    /// Set how collapsed content is hidden (builder pattern).
    pub fn collapse_behaviour(mut self, behaviour: HideBehaviour) -> Self {
        self.behaviour = behaviour;
        self
    }

    pub fn is_collapsed(&self) -> bool {
        self.state.get()
    }

    /// Pass the owner's latest `is_collapsed` (or `None` to release control).
    pub fn sync(&mut self, is_collapsed: Option<bool>) {
        self.state.sync(is_collapsed);
    }

    /// Handle a click on the heading. Returns `true` if the state changed.
    pub fn toggle(&self) -> bool {
        self.state.request(!self.is_collapsed())
    }

    /// Whether the content is present at all.
    pub fn renders_content(&self) -> bool {
        !(self.is_collapsed() && self.behaviour == HideBehaviour::Remove)
    }

    /// Inline style for the content wrapper.
    pub fn content_style(&self) -> InlineStyle {
        if self.is_collapsed() {
            InlineStyle::new()
                .with("display", "none")
                .with("visibility", "collapse")
        } else {
            InlineStyle::new()
                .with("display", "block")
                .with("visibility", "visible")
        }
    }

    /// The element's class attribute.
    pub fn class_name(&self) -> String {
        build_class_name([COLLAPSIBLE_CLASS])
    }
}

impl Default for Collapsible {
    fn default() -> Self {
        Self::new()
    }
}
