//! Renderer-agnostic description of a built control.

use toggle::ControlState;

use crate::platform::Platform;
use crate::theme::{Rgba, TextDirection};

/// Which family a control belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlKind {
    Radio,
    Checkbox,
}

/// A glyph from the material community icon set.
#[derive(Debug, Clone)]
pub struct Icon {
    pub name: &'static str,
    pub size: f32,
    pub color: Rgba,
    pub direction: TextDirection,
}

/// Box styling for a control's container or mark.
///
/// Custom styles passed to a widget replace the platform defaults
/// wholesale, they are not merged.
#[derive(Debug, Clone, Default)]
pub struct BoxStyle {
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub border_radius: f32,
    pub border_width: f32,
    pub border_color: Option<Rgba>,
    pub background: Option<Rgba>,
    pub margin_top: f32,
    pub margin_right: f32,
}

impl BoxStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set width and height.
    pub fn size(mut self, width: f32, height: f32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    pub fn height(mut self, height: f32) -> Self {
        self.height = Some(height);
        self
    }

    /// Set the border width and color.
    pub fn border(mut self, width: f32, color: Rgba) -> Self {
        self.border_width = width;
        self.border_color = Some(color);
        self
    }

    pub fn radius(mut self, radius: f32) -> Self {
        self.border_radius = radius;
        self
    }

    pub fn background(mut self, color: Rgba) -> Self {
        self.background = Some(color);
        self
    }

    pub fn margin_top(mut self, margin: f32) -> Self {
        self.margin_top = margin;
        self
    }

    pub fn margin_right(mut self, margin: f32) -> Self {
        self.margin_right = margin;
        self
    }
}

/// Accessibility attributes of a control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accessibility {
    pub role: &'static str,
    /// Android component type, e.g. `radiobutton_checked`.
    pub component_type: &'static str,
    /// iOS traits.
    pub traits: Vec<&'static str>,
    pub states: Vec<&'static str>,
    pub live_region: &'static str,
}

impl Accessibility {
    /// Attributes for a pressable control exposed as a button.
    pub(crate) fn button(component_type: &'static str, disabled: bool) -> Self {
        let (traits, states) = if disabled {
            (vec!["button", "disabled"], vec!["disabled"])
        } else {
            (vec!["button"], Vec::new())
        };
        Self {
            role: "button",
            component_type,
            traits,
            states,
            live_region: "polite",
        }
    }
}

/// One built checkbox or radio control.
#[derive(Debug, Clone)]
pub struct ControlView {
    /// Element id; pass it to [`HandlerRegistry::press`](crate::HandlerRegistry::press).
    pub id: String,
    pub kind: ControlKind,
    pub platform: Platform,
    /// Resolved state for this render.
    pub state: ControlState,
    pub disabled: bool,
    /// Whether a press handler was registered.
    pub pressable: bool,
    pub icon: Icon,
    /// Opacity of the mark layer (0.0 hides it).
    pub mark_opacity: f32,
    pub ripple_color: Rgba,
    /// Ripple is not clipped to the container.
    pub borderless: bool,
    pub container: BoxStyle,
    pub mark: BoxStyle,
    pub accessibility: Accessibility,
}

impl ControlView {
    pub fn is_checked(&self) -> bool {
        self.state.is_checked()
    }

    /// Whether the mark layer is drawn at all.
    pub fn is_mark_visible(&self) -> bool {
        self.mark_opacity > 0.0
    }
}
