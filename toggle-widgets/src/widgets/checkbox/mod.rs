//! Checkbox widget - a two-state control with an optional partial state.

mod android;
mod ios;

use std::sync::Arc;

use log::trace;
use toggle::{ControlState, State, Value, on_activate, resolve};
use uuid::Uuid;

use super::RenderProps;
use crate::handlers::{Handler, HandlerRegistry, ON_PRESS};
use crate::platform::Platform;
use crate::theme::{Rgba, Theme};
use crate::view::{BoxStyle, ControlView};

/// Where a checkbox gets its status from.
#[derive(Clone, Debug)]
enum StatusSource {
    /// Owned by the caller; a press only runs `on_press`.
    Fixed(ControlState),
    /// Shared state the checkbox toggles itself on press.
    Bound(State<ControlState>),
}

/// A checkbox builder.
///
/// Checkboxes don't coordinate with each other. Either the caller passes
/// the status on every render ([`Checkbox::new`]) or the checkbox is bound
/// to a [`State`] it toggles on press ([`Checkbox::bound`]).
///
/// # Example
///
/// ```
/// use toggle::{ControlState, State};
/// use toggle_widgets::{Checkbox, HandlerRegistry, Theme};
///
/// let agree = State::new(ControlState::Unchecked);
/// let registry = HandlerRegistry::new();
///
/// let view = Checkbox::bound(&agree).id("agree").build(&Theme::default(), &registry);
/// assert!(!view.is_checked());
///
/// registry.press("agree");
/// assert_eq!(agree.get(), ControlState::Checked);
/// ```
#[derive(Clone)]
pub struct Checkbox {
    source: StatusSource,
    value: Option<Value>,
    id: Option<String>,
    disabled: bool,
    on_press: Option<Handler>,
    color: Option<Rgba>,
    platform: Option<Platform>,
    container_style: Option<BoxStyle>,
    mark_style: Option<BoxStyle>,
}

impl Checkbox {
    /// Create a checkbox with a caller-managed status.
    pub fn new(status: ControlState) -> Self {
        Self::with_source(StatusSource::Fixed(status))
    }

    /// Create a checkbox that toggles `state` when pressed.
    pub fn bound(state: &State<ControlState>) -> Self {
        Self::with_source(StatusSource::Bound(state.clone()))
    }

    fn with_source(source: StatusSource) -> Self {
        Self {
            source,
            value: None,
            id: None,
            disabled: false,
            on_press: None,
            color: None,
            platform: None,
            container_style: None,
            mark_style: None,
        }
    }

    /// Name the checkbox. Used in the default id and in press logs.
    pub fn value(mut self, value: impl Into<Value>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Set the element id.
    ///
    /// Defaults to `checkbox-<value>`. Without a value every build gets a
    /// fresh `checkbox-<uuid>`, so press through the returned view's id.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Mark the checkbox as disabled.
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Set the press callback.
    ///
    /// For a bound checkbox it runs after the state has been toggled.
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

    /// The status this checkbox renders with right now.
    pub fn status(&self) -> ControlState {
        match &self.source {
            StatusSource::Fixed(status) => *status,
            StatusSource::Bound(state) => state.get(),
        }
    }

    /// Build the checkbox.
    pub fn build(self, theme: &Theme, registry: &HandlerRegistry) -> ControlView {
        let id = match (&self.id, &self.value) {
            (Some(id), _) => id.clone(),
            (None, Some(value)) => format!("checkbox-{value}"),
            (None, None) => format!("checkbox-{}", Uuid::new_v4().simple()),
        };
        let value = self
            .value
            .clone()
            .unwrap_or_else(|| Value::from(id.as_str()));
        let state = resolve(&value, Some(self.status()), None);
        let platform = self.platform.unwrap_or_default();
        trace!("[checkbox] {id} is {state} ({platform:?})");

        if !self.disabled {
            let bound = match &self.source {
                StatusSource::Bound(state) => Some(state.clone()),
                StatusSource::Fixed(_) => None,
            };
            let on_press = self.on_press.clone();
            registry.register(
                &id,
                ON_PRESS,
                Arc::new(move || {
                    if let Some(ref state) = bound {
                        state.update(|s| *s = s.toggled());
                    }
                    on_activate(&value, on_press.as_deref().map(|f| f as &dyn Fn()), None);
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

impl std::fmt::Debug for Checkbox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Checkbox")
            .field("source", &self.source)
            .field("value", &self.value)
            .field("id", &self.id)
            .field("disabled", &self.disabled)
            .field("has_on_press", &self.on_press.is_some())
            .field("platform", &self.platform)
            .finish()
    }
}
