//! Built-in widgets.
//!
//! Each widget is a builder that produces a [`ControlView`]. Building a
//! widget resolves its state once and, unless it is disabled, registers an
//! [`ON_PRESS`](crate::ON_PRESS) handler in the [`HandlerRegistry`](crate::HandlerRegistry).
//!
//! The look is chosen per widget with `.platform(..)`, defaulting to
//! [`Platform::current`](crate::Platform::current). Every platform renderer
//! receives the same [`RenderProps`]; they differ only in how the state is
//! drawn.

pub mod checkbox;
pub mod radio_button;

pub use checkbox::Checkbox;
pub use radio_button::RadioButton;

use toggle::ControlState;

use crate::theme::{Rgba, Theme};
use crate::view::BoxStyle;

/// Inputs shared by all platform renderers.
pub(crate) struct RenderProps<'a> {
    pub id: String,
    pub state: ControlState,
    pub disabled: bool,
    pub color: Option<Rgba>,
    pub container_style: Option<BoxStyle>,
    pub mark_style: Option<BoxStyle>,
    pub theme: &'a Theme,
}

impl RenderProps<'_> {
    /// Color of the mark when checked.
    pub fn checked_color(&self) -> Rgba {
        self.theme.checked_color(self.color, self.disabled)
    }

    pub fn ripple_color(&self) -> Rgba {
        self.theme.ripple_color(self.checked_color(), self.disabled)
    }
}
