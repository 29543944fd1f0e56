//! Toggle widget: an on/off switch.
//!
//! Can be controlled (the owner passes `is_on` and listens to `on_toggle`) or
//! uncontrolled (the toggle keeps its own state, seeded by a default).

use crate::css::declarations::build_class_name;
use crate::state::ControllableState;

/// Class every toggle element carries.
pub const TOGGLE_CLASS: &str = "gilt-toggle";

// ---------------------------------------------------------------------------
// Toggle
// ---------------------------------------------------------------------------

/// An on/off switch.
///
/// # Examples
///
/// ```ignore
/// let toggle = Toggle::new().on_toggle(|on| println!("now {on}"));
/// toggle.toggle();
/// assert!(toggle.is_on());
/// ```
#[derive(Debug, Clone)]
pub struct Toggle {
    state: ControllableState<bool>,
    disabled: bool,
}

impl Toggle {
    /// An uncontrolled toggle that starts off.
    pub fn new() -> Self {
        Self::with_default(false)
    }

    /// An uncontrolled toggle starting at `default_is_on`.
    pub fn with_default(default_is_on: bool) -> Self {
        Self {
            state: ControllableState::uncontrolled(default_is_on),
            disabled: false,
        }
    }

    /// A toggle whose state is owned by the caller.
    pub fn controlled(is_on: bool) -> Self {
        Self {
            state: ControllableState::new(Some(is_on), is_on),
            disabled: false,
        }
    }

    /// Called with the state the user is trying to switch to (builder pattern).
    pub fn on_toggle(mut self, callback: impl Fn(bool) + 'static) -> Self {
        self.state = self.state.on_change(move |on| callback(*on));
        self
    }

    /// Set whether the toggle is disabled (builder pattern).
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Whether the toggle is currently on.
    pub fn is_on(&self) -> bool {
        self.state.get()
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Disabled toggles are skipped by keyboard navigation.
    pub fn can_focus(&self) -> bool {
        !self.disabled
    }

    /// Pass the owner's latest `is_on` (or `None` to release control).
    pub fn sync(&mut self, is_on: Option<bool>) {
        self.state.sync(is_on);
    }

    /// Handle a click or space press. Returns `true` if the state changed.
    ///
    /// A disabled toggle ignores the interaction and fires no callback.
    pub fn toggle(&self) -> bool {
        if self.disabled {
            return false;
        }
        self.state.request(!self.is_on())
    }

    /// `gilt-toggle-on` or `gilt-toggle-off`.
    pub fn state_class(&self) -> &'static str {
        if self.is_on() {
            "gilt-toggle-on"
        } else {
            "gilt-toggle-off"
        }
    }

    /// The element's class attribute.
    pub fn class_name(&self) -> String {
        build_class_name([TOGGLE_CLASS, self.state_class()])
    }
}

impl Default for Toggle {
    fn default() -> Self {
        Self::new()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
