//! RadioButton widget - one option of a mutually exclusive group.

mod android;
mod ios;

use std::sync::Arc;

use log::trace;
use toggle::{
    ControlState, GroupSelection, RadioStatus, SelectionContext, ToggleError, Value, on_activate,
    resolve,
};

use super::RenderProps;
use crate::handlers::{Handler, HandlerRegistry, ON_PRESS};
use crate::platform::Platform;
use crate::theme::{Rgba, Theme};
use crate::view::{BoxStyle, ControlView};

/// A radio button builder.
///
/// Inside a group the button is checked when the group's selected value is
/// its own, and pressing it tells the group. An explicit `status` overrides
/// the group. Outside a group, with no status, it renders unchecked and a
/// press only runs its own `on_press`.
///
/// # Example
///
/// ```
/// use toggle::{RadioGroup, Value};
/// use toggle_widgets::{HandlerRegistry, Platform, RadioButton, Theme};
///
/// let group = RadioGroup::uncontrolled(Some("low".into()));
/// let registry = HandlerRegistry::new();
/// let theme = Theme::default();
///
/// let selection = group.selection();
/// let high = RadioButton::new("high")
///     .platform(Platform::Ios)
///     .build(Some(&selection), &theme, &registry);
/// assert!(!high.is_checked());
///
/// registry.press(&high.id);
/// assert_eq!(group.value(), Some(Value::from("high")));
/// ```
#[derive(Clone)]
pub struct RadioButton {
    value: Value,
    id: Option<String>,
    status: Option<RadioStatus>,
    disabled: bool,
    on_press: Option<Handler>,
    color: Option<Rgba>,
    platform: Option<Platform>,
    container_style: Option<BoxStyle>,
    mark_style: Option<BoxStyle>,
}

impl RadioButton {
    /// Create a radio button for `value`.
    pub fn new(value: impl Into<Value>) -> Self {
        Self {
            value: value.into(),
            id: None,
            status: None,
            disabled: false,
            on_press: None,
            color: None,
            platform: None,
            container_style: None,
            mark_style: None,
        }
    }

    /// Set the element id.
    ///
    /// Inside a group it defaults to `<group id>-<value>`, e.g.
    /// `radio-group-<uuid>-high`, so groups sharing a value don't collide.
    /// Outside a group it defaults to `radio-<value>`.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Drive the button explicitly, ignoring the group's selection.
    pub fn status(mut self, status: RadioStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Like [`status`](Self::status), for a loosely typed state.
    pub fn try_status(self, state: ControlState) -> Result<Self, ToggleError> {
        Ok(self.status(RadioStatus::try_from(state)?))
    }

    /// Mark the radio button as disabled.
    ///
    /// Disabled buttons don't register a press handler.
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Set the press callback. Runs before the group is notified.
    pub fn on_press<F>(mut self, f: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_press = Some(Arc::new(f));
        self
    }

    /// Set the checked color.
    pub fn color(mut self, color: Rgba) -> Self {
        self.color = Some(color);
        self
    }

    /// Set the platform look.
    pub fn platform(mut self, platform: Platform) -> Self {
        self.platform = Some(platform);
        self
    }

    /// Replace the default container style.
    pub fn container_style(mut self, style: BoxStyle) -> Self {
        self.container_style = Some(style);
        self
    }

    /// Replace the default mark style.
    pub fn mark_style(mut self, style: BoxStyle) -> Self {
        self.mark_style = Some(style);
        self
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    /// The state this button would render with.
    pub fn resolve_state(&self, group: Option<&GroupSelection>) -> ControlState {
        let cx = SelectionContext::read(group);
        resolve(&self.value, self.status.map(ControlState::from), cx.current())
    }

    /// Build the radio button.
    ///
    /// `group` is the selection of the enclosing group, if any.
    pub fn build(
        self,
        group: Option<&GroupSelection>,
        theme: &Theme,
        registry: &HandlerRegistry,
    ) -> ControlView {
        let cx = SelectionContext::read(group);
        let state = resolve(&self.value, self.status.map(ControlState::from), cx.current());
        let id = match (&self.id, cx.group_id()) {
            (Some(id), _) => id.clone(),
            (None, Some(group)) => format!("{group}-{}", self.value),
            (None, None) => format!("radio-{}", self.value),
        };
        let platform = self.platform.unwrap_or_default();
        trace!("[radio] {id} resolved {state} ({platform:?})");

        if !self.disabled {
            let value = self.value.clone();
            let on_press = self.on_press.clone();
            let notifier = cx.notifier().cloned();
            registry.register(
                &id,
                ON_PRESS,
                Arc::new(move || {
                    on_activate(
                        &value,
                        on_press.as_deref().map(|f| f as &dyn Fn()),
                        notifier.as_deref().map(|n| n as &dyn Fn(&Value)),
                    );
                }),
            );
        }

        let props = RenderProps {
            id,
            state,
            disabled: self.disabled,
            color: self.color,
            container_style: self.container_style,
            mark_style: self.mark_style,
            theme,
        };
        match platform {
            Platform::Ios => ios::render(props),
            Platform::Android => android::render(props),
        }
    }
}

impl std::fmt::Debug for RadioButton {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RadioButton")
            .field("value", &self.value)
            .field("id", &self.id)
            .field("status", &self.status)
            .field("disabled", &self.disabled)
            .field("has_on_press", &self.on_press.is_some())
            .field("platform", &self.platform)
            .finish()
    }
}
