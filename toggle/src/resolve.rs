use crate::status::ControlState;
use crate::value::Value;

/// Decide the state of one control.
///
/// An explicit status always wins, which is how a control is driven
/// directly by its owner. Otherwise the control is checked only when the
/// group's selected value equals its own; with no group it is unchecked.
/// `Indeterminate` can only come from an explicit status.
pub fn resolve(own: &Value, explicit: Option<ControlState>, ambient: Option<&Value>) -> ControlState {
    if let Some(status) = explicit {
        return status;
    }

    match ambient {
        Some(selected) if selected == own => ControlState::Checked,
        _ => ControlState::Unchecked,
    }
}
