//! Checkbox and radio button widgets.
//!
//! Widgets are builders that produce a [`ControlView`], a renderer-agnostic
//! description of one control. Which control is checked, and what a press
//! does, is decided by the `toggle` crate; this crate turns those decisions
//! into icons, colors and accessibility attributes for each platform look.

pub mod handlers;
pub mod platform;
pub mod theme;
pub mod view;
pub mod widgets;

pub use handlers::{Handler, HandlerRegistry, ON_PRESS};
pub use platform::Platform;
pub use theme::{Rgba, TextDirection, Theme, ThemeConfig, ThemeError};
pub use view::{Accessibility, BoxStyle, ControlKind, ControlView, Icon};
pub use widgets::{Checkbox, RadioButton};

pub mod prelude {
    pub use crate::handlers::{Handler, HandlerRegistry, ON_PRESS};
    pub use crate::platform::Platform;
    pub use crate::theme::{Rgba, TextDirection, Theme, ThemeConfig};
    pub use crate::view::{ControlKind, ControlView};
    pub use crate::widgets::{Checkbox, RadioButton};

    pub use toggle::prelude::*;
}
