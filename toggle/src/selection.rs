//! Group selection snapshots.
//!
//! A [`GroupSelection`] is what a radio group hands to each of its controls
//! when it renders them. Controls read it through [`SelectionContext`],
//! which also covers controls rendered outside any group.

use std::sync::Arc;

use crate::group::GroupId;
use crate::value::Value;

/// Callback a control uses to tell its group which value was activated.
pub type Notifier = Arc<dyn Fn(&Value) + Send + Sync>;

/// Snapshot of a group's selection for one render.
///
/// Holds at most one selected value, the group's change callback, and the
/// id of the group that produced it. Controls only read it; the selection
/// changes when the group owner produces a new snapshot.
#[derive(Clone, Default)]
pub struct GroupSelection {
    selected: Option<Value>,
    group: Option<GroupId>,
    on_value_change: Option<Notifier>,
}

impl GroupSelection {
    /// Create a snapshot with the given selected value and no callback.
    pub fn new(selected: Option<Value>) -> Self {
        Self {
            selected,
            group: None,
            on_value_change: None,
        }
    }

    /// Tag the snapshot with the group it belongs to.
    ///
    /// Controls use it to keep their element ids apart from controls of
    /// other groups that share a value.
    pub fn group(mut self, id: GroupId) -> Self {
        self.group = Some(id);
        self
    }

    /// Set the change callback.
    pub fn on_value_change<F>(mut self, f: F) -> Self
    where
        F: Fn(&Value) + Send + Sync + 'static,
    {
        self.on_value_change = Some(Arc::new(f));
        self
    }

    /// Set an already shared change callback.
    pub fn with_notifier(mut self, notifier: Notifier) -> Self {
        self.on_value_change = Some(notifier);
        self
    }

    /// The selected value, if any.
    pub fn selected(&self) -> Option<&Value> {
        self.selected.as_ref()
    }

    /// The change callback, if any.
    pub fn notifier(&self) -> Option<&Notifier> {
        self.on_value_change.as_ref()
    }

    pub fn group_id(&self) -> Option<GroupId> {
        self.group
    }
}

impl std::fmt::Debug for GroupSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GroupSelection")
            .field("selected", &self.selected)
            .field("group", &self.group)
            .field("has_notifier", &self.on_value_change.is_some())
            .finish()
    }
}

/// What a control sees of its surrounding group.
///
/// Built from an optional [`GroupSelection`]. Without a group the current
/// value is `None` and notifying does nothing, so a standalone control
/// renders as an independent control.
#[derive(Clone, Copy, Default)]
pub struct SelectionContext<'a> {
    current: Option<&'a Value>,
    group: Option<GroupId>,
    notifier: Option<&'a Notifier>,
}

impl<'a> SelectionContext<'a> {
    /// Read the ambient selection.
    pub fn read(group: Option<&'a GroupSelection>) -> Self {
        match group {
            Some(group) => Self {
                current: group.selected(),
                group: group.group_id(),
                notifier: group.notifier(),
            },
            None => Self::default(),
        }
    }

    /// The currently selected value in the group.
    pub fn current(&self) -> Option<&'a Value> {
        self.current
    }

    /// The id of the enclosing group, if the snapshot carries one.
    pub fn group_id(&self) -> Option<GroupId> {
        self.group
    }

    /// The group's change callback.
    pub fn notifier(&self) -> Option<&'a Notifier> {
        self.notifier
    }

    /// Ask the group to select `value`. No-op without a callback.
    pub fn notify(&self, value: &Value) {
        if let Some(notifier) = self.notifier {
            notifier(value);
        }
    }
}

impl std::fmt::Debug for SelectionContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectionContext")
            .field("current", &self.current)
            .field("group", &self.group)
            .field("has_notifier", &self.notifier.is_some())
            .finish()
    }
}
