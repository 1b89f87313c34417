//! Radio group owner.
//!
//! A [`RadioGroup`] owns the selection for a set of radio controls and
//! produces the [`GroupSelection`] snapshot they render against. It runs in
//! one of two modes:
//!
//! - **Uncontrolled**: the group stores the selection itself. An activation
//!   updates the stored value and marks the group dirty.
//! - **Controlled**: the owner stores the selection. Activations are handed
//!   to the owner's callback and the group's value only changes when the
//!   owner calls [`RadioGroup::set_value`].

use std::sync::Arc;

use log::debug;
use uuid::Uuid;

use crate::selection::{GroupSelection, Notifier};
use crate::state::State;
use crate::value::Value;

/// Unique identifier for a radio group instance.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct GroupId(Uuid);

impl GroupId {
    /// Create a new unique group ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the underlying UUID.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for GroupId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for GroupId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "radio-group-{}", self.0.simple())
    }
}

/// Who owns a group's selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupMode {
    /// The owning application holds the value.
    Controlled,
    /// The group holds the value.
    Uncontrolled,
}

/// A set of mutually exclusive radio controls.
///
/// # Example
///
/// ```
/// use toggle::{RadioGroup, SelectionContext, Value, resolve};
///
/// let group = RadioGroup::uncontrolled(Some("low".into()));
/// let selection = group.selection();
/// let cx = SelectionContext::read(Some(&selection));
///
/// cx.notify(&Value::from("high"));
/// assert_eq!(group.value(), Some(Value::from("high")));
///
/// let next = group.selection();
/// assert!(resolve(&"high".into(), None, next.selected()).is_checked());
/// ```
#[derive(Clone)]
pub struct RadioGroup {
    id: GroupId,
    mode: GroupMode,
    value: State<Option<Value>>,
    owner: Option<Notifier>,
    observer: Option<Notifier>,
}

impl RadioGroup {
    /// Create a group that stores its own selection.
    pub fn uncontrolled(initial: Option<Value>) -> Self {
        Self {
            id: GroupId::new(),
            mode: GroupMode::Uncontrolled,
            value: State::new(initial),
            owner: None,
            observer: None,
        }
    }

    /// Create a group whose selection is owned by the caller.
    ///
    /// `on_value_change` receives every activation; the caller decides
    /// whether to pass the new value back through [`set_value`](Self::set_value).
    pub fn controlled<F>(value: Option<Value>, on_value_change: F) -> Self
    where
        F: Fn(&Value) + Send + Sync + 'static,
    {
        Self {
            id: GroupId::new(),
            mode: GroupMode::Controlled,
            value: State::new(value),
            owner: Some(Arc::new(on_value_change)),
            observer: None,
        }
    }

    /// Observe activations.
    ///
    /// On an uncontrolled group it runs after the stored value has been
    /// updated. On a controlled group it runs after the owner callback, which
    /// is kept. Setting it again replaces the previous observer.
    pub fn on_value_change<F>(mut self, f: F) -> Self
    where
        F: Fn(&Value) + Send + Sync + 'static,
    {
        self.observer = Some(Arc::new(f));
        self
    }

    /// Get the unique ID for this group.
    pub fn id(&self) -> GroupId {
        self.id
    }

    pub fn mode(&self) -> GroupMode {
        self.mode
    }

    /// The currently selected value.
    pub fn value(&self) -> Option<Value> {
        self.value.get()
    }

    /// Check whether `value` is the selected one.
    pub fn is_selected(&self, value: &Value) -> bool {
        self.value.with(|current| current.as_ref() == Some(value))
    }

    /// Replace the selected value.
    ///
    /// This is how the owner of a controlled group re-supplies the
    /// selection. On an uncontrolled group it resets the stored value.
    pub fn set_value(&self, value: Option<Value>) {
        if self.value.replace_if_changed(value) {
            debug!("[radio] {} value set to {:?}", self.id, self.value.get());
        }
    }

    /// Snapshot of the selection for the current render.
    pub fn selection(&self) -> GroupSelection {
        let selection = GroupSelection::new(self.value()).group(self.id);
        let observer = self.observer.clone();

        match self.mode {
            GroupMode::Controlled => match (&self.owner, observer) {
                (Some(owner), None) => selection.with_notifier(Arc::clone(owner)),
                (None, Some(observer)) => selection.with_notifier(observer),
                (Some(owner), Some(observer)) => {
                    let owner = Arc::clone(owner);
                    selection.on_value_change(move |value: &Value| {
                        owner(value);
                        observer(value);
                    })
                }
                (None, None) => selection,
            },
            GroupMode::Uncontrolled => {
                let id = self.id;
                let state = self.value.clone();
                selection.on_value_change(move |value: &Value| {
                    if state.replace_if_changed(Some(value.clone())) {
                        debug!("[radio] {} selected {}", id, value);
                    }
                    if let Some(ref observer) = observer {
                        observer(value);
                    }
                })
            }
        }
    }

    /// Check if the selection changed since the last render.
    pub fn is_dirty(&self) -> bool {
        self.value.is_dirty()
    }

    /// Clear the dirty flag
    pub fn clear_dirty(&self) {
        self.value.clear_dirty();
    }
}

impl std::fmt::Debug for RadioGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RadioGroup")
            .field("id", &self.id)
            .field("mode", &self.mode)
            .field("value", &self.value.get())
            .field("has_owner", &self.owner.is_some())
            .field("has_observer", &self.observer.is_some())
            .finish()
    }
}
