use log::trace;

use crate::value::Value;

/// Handle a user activation of the control named `own`.
///
/// Runs the control's own callback, then tells the group which value was
/// activated. Either callback may be absent. Nothing is mutated here; the
/// group decides what to do with the notification.
///
/// Callers must not invoke this for disabled controls.
pub fn on_activate(own: &Value, local: Option<&dyn Fn()>, notify: Option<&dyn Fn(&Value)>) {
    trace!(
        "[press] activate {} (local: {}, group: {})",
        own,
        local.is_some(),
        notify.is_some()
    );

    if let Some(on_press) = local {
        on_press();
    }
    if let Some(notify) = notify {
        notify(own);
    }
}
