//! Colors used by checkbox and radio widgets.

use color::{AlphaColor, Srgb};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Straight-alpha sRGB color.
pub type Rgba = AlphaColor<Srgb>;

/// Alpha of the ripple drawn over a disabled control.
const DISABLED_RIPPLE_ALPHA: f32 = 0.16;

/// How much the checked color is faded to get the ripple color.
const RIPPLE_FADE: f32 = 0.32;

/// Alpha of the outline of an unchecked Android control.
const UNCHECKED_ALPHA: f32 = 0.54;

/// Layout direction reported to icon renderers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    #[default]
    Ltr,
    Rtl,
}

/// Widget colors.
///
/// # Example
///
/// ```
/// use toggle_widgets::{Rgba, Theme};
///
/// let theme = Theme::default().accent(Rgba::from_rgba8(0x62, 0x00, 0xee, 0xff));
/// let ripple = theme.ripple_color(theme.checked_color(None, false), false);
/// assert!((ripple.components[3] - 0.68).abs() < 1e-4);
/// ```
#[derive(Debug, Clone)]
pub struct Theme {
    /// Checked color when a control has no color of its own.
    pub accent: Rgba,
    /// Color of disabled controls.
    pub disabled: Rgba,
    /// Base for unchecked outlines and disabled ripples.
    pub text: Rgba,
    /// Color of the check glyph on iOS.
    pub icon: Rgba,
    /// Fill behind the check glyph on iOS.
    pub mark: Rgba,
    /// Outline of the iOS control.
    pub border: Rgba,
    /// Layout direction reported on every icon; renderers don't mirror.
    pub direction: TextDirection,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: Rgba::from_rgba8(0x03, 0xda, 0xc4, 0xff),
            disabled: Rgba::from_rgba8(0x00, 0x00, 0x00, 0x42),
            text: Rgba::from_rgba8(0x00, 0x00, 0x00, 0xff),
            icon: Rgba::from_rgba8(0xff, 0xff, 0xff, 0xff),
            mark: Rgba::from_rgba8(0x77, 0x5d, 0xa3, 0xff),
            border: Rgba::from_rgba8(0x00, 0x00, 0x00, 0xff),
            direction: TextDirection::Ltr,
        }
    }
}

impl Theme {
    /// Set the accent color.
    pub fn accent(mut self, color: Rgba) -> Self {
        self.accent = color;
        self
    }

    /// Set the disabled color.
    pub fn disabled(mut self, color: Rgba) -> Self {
        self.disabled = color;
        self
    }

    /// Set the text color.
    pub fn text(mut self, color: Rgba) -> Self {
        self.text = color;
        self
    }

    /// Set the layout direction.
    pub fn direction(mut self, direction: TextDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Build a theme from a config, starting from the defaults.
    pub fn from_config(config: &ThemeConfig) -> Result<Self, ThemeError> {
        let mut theme = Self::default();

        let fields = [
            ("accent", &config.accent, &mut theme.accent),
            ("disabled", &config.disabled, &mut theme.disabled),
            ("text", &config.text, &mut theme.text),
            ("icon", &config.icon, &mut theme.icon),
            ("mark", &config.mark, &mut theme.mark),
            ("border", &config.border, &mut theme.border),
        ];
        for (field, value, slot) in fields {
            if let Some(value) = value {
                *slot = parse_color(field, value)?;
            }
        }

        if let Some(direction) = config.direction {
            theme.direction = direction;
        }
        Ok(theme)
    }

    /// Color of the mark of a checked control.
    pub fn checked_color(&self, custom: Option<Rgba>, disabled: bool) -> Rgba {
        if disabled {
            self.disabled
        } else {
            custom.unwrap_or(self.accent)
        }
    }

    /// Color of the outline of an unchecked control.
    pub fn unchecked_color(&self, disabled: bool) -> Rgba {
        if disabled {
            self.disabled
        } else {
            self.text.with_alpha(UNCHECKED_ALPHA)
        }
    }

    /// Color of the press feedback.
    pub fn ripple_color(&self, checked: Rgba, disabled: bool) -> Rgba {
        if disabled {
            self.text.with_alpha(DISABLED_RIPPLE_ALPHA)
        } else {
            checked.multiply_alpha(1.0 - RIPPLE_FADE)
        }
    }
}

/// Theme overrides as CSS color strings.
///
/// Every field is optional; missing fields keep the default theme color.
///
/// ```ignore
/// { "accent": "#6200ee", "direction": "rtl" }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    pub accent: Option<String>,
    pub disabled: Option<String>,
    pub text: Option<String>,
    pub icon: Option<String>,
    pub mark: Option<String>,
    pub border: Option<String>,
    pub direction: Option<TextDirection>,
}

/// Errors that can occur when building a theme from config.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeError {
    /// A color string could not be parsed.
    #[error("Invalid color '{value}' for theme field '{field}': {reason}")]
    InvalidColor {
        /// The theme field being set.
        field: &'static str,
        /// The rejected input.
        value: String,
        /// Parser message.
        reason: String,
    },
}

fn parse_color(field: &'static str, value: &str) -> Result<Rgba, ThemeError> {
    let parsed = color::parse_color(value).map_err(|e| ThemeError::InvalidColor {
        field,
        value: value.to_string(),
        reason: e.to_string(),
    })?;
    Ok(parsed.to_alpha_color())
}
