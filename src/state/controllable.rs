//! Controlled/uncontrolled component state.
//!
//! A stateful component either receives its current value from its owner
//! (controlled) or keeps it itself, seeded from a default (uncontrolled).
//! [`ControllableState`] implements both modes once so every component reads
//! and requests changes the same way:
//!
//! - [`get`](ControllableState::get) returns the owner's value when
//!   controlled, otherwise the internal cell.
//! - [`request`](ControllableState::request) notifies the change callback
//!   and, only when uncontrolled, stores the new value.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

type ChangeCallback<T> = Rc<dyn Fn(&T)>;

/// State cell that is either owned by the component or driven by its owner.
///
/// Cloning shares the internal cell and the callback, the way a component
/// handle is shared between its event handlers.
pub struct ControllableState<T: 'static> {
    controlled: Option<T>,
    internal: Rc<RefCell<T>>,
    on_change: Option<ChangeCallback<T>>,
}

impl<T: Clone + 'static> ControllableState<T> {
    /// Controlled when `controlled` is `Some`; `default` seeds the internal
    /// cell either way.
    pub fn new(controlled: Option<T>, default: T) -> Self {
        Self {
            controlled,
            internal: Rc::new(RefCell::new(default)),
            on_change: None,
        }
    }

    /// An uncontrolled state starting at `default`.
    pub fn uncontrolled(default: T) -> Self {
        Self::new(None, default)
    }

    /// Register the change callback (builder pattern).
    ///
    /// The callback receives every requested value, in both modes.
    pub fn on_change(mut self, callback: impl Fn(&T) + 'static) -> Self {
        self.on_change = Some(Rc::new(callback));
        self
    }

    /// Whether the owner supplies the value.
    pub fn is_controlled(&self) -> bool {
        self.controlled.is_some()
    }

    /// The current value.
    pub fn get(&self) -> T {
        match &self.controlled {
            Some(value) => value.clone(),
            None => self.internal.borrow().clone(),
        }
    }

    /// Ask for a new value. Returns `true` if the value was stored.
    ///
    /// When controlled, the owner decides: only the callback runs, and the
    /// owner is expected to pass the new value back through [`sync`].
    ///
    /// [`sync`]: ControllableState::sync
    pub fn request(&self, value: T) -> bool {
        if let Some(callback) = &self.on_change {
            callback(&value);
        }

        if self.is_controlled() {
            log::debug!("controlled state ignored a write; waiting for the owner to sync");
            return false;
        }

        *self.internal.borrow_mut() = value;
        true
    }

    /// Apply the owner's latest controlled value (on re-render).
    ///
    /// Passing `None` hands control back to the component, which resumes from
    /// its last internal value.
    pub fn sync(&mut self, controlled: Option<T>) {
        self.controlled = controlled;
    }
}

impl<T: Clone + 'static> Clone for ControllableState<T> {
    fn clone(&self) -> Self {
        Self {
            controlled: self.controlled.clone(),
            internal: Rc::clone(&self.internal),
            on_change: self.on_change.clone(),
        }
    }
}

impl<T: fmt::Debug + 'static> fmt::Debug for ControllableState<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ControllableState")
            .field("controlled", &self.controlled)
            .field("internal", &self.internal.borrow())
            .field("has_on_change", &self.on_change.is_some())
            .finish()
    }
}
