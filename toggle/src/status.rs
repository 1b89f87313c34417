//! Control states.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ToggleError;

/// The rendered state of a checkbox or radio control.
///
/// Never stored by a control; recomputed from props and the group snapshot
/// on every render. `Indeterminate` is only valid for checkboxes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlState {
    Checked,
    #[default]
    Unchecked,
    Indeterminate,
}

impl ControlState {
    /// Whether the control is fully checked.
    pub fn is_checked(self) -> bool {
        self == Self::Checked
    }

    /// Whether the control is in the partial state.
    pub fn is_indeterminate(self) -> bool {
        self == Self::Indeterminate
    }

    /// Whether a mark (check or dash) should be shown.
    pub fn shows_mark(self) -> bool {
        matches!(self, Self::Checked | Self::Indeterminate)
    }

    /// The state a standalone checkbox moves to when pressed.
    ///
    /// A partial checkbox becomes fully checked.
    pub fn toggled(self) -> Self {
        match self {
            Self::Checked => Self::Unchecked,
            Self::Unchecked | Self::Indeterminate => Self::Checked,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Checked => "checked",
            Self::Unchecked => "unchecked",
            Self::Indeterminate => "indeterminate",
        }
    }
}

impl From<bool> for ControlState {
    fn from(checked: bool) -> Self {
        if checked { Self::Checked } else { Self::Unchecked }
    }
}

impl FromStr for ControlState {
    type Err = ToggleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "checked" => Ok(Self::Checked),
            "unchecked" => Ok(Self::Unchecked),
            "indeterminate" => Ok(Self::Indeterminate),
            other => Err(ToggleError::UnknownStatus(other.to_string())),
        }
    }
}

impl fmt::Display for ControlState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Explicit status a radio button may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RadioStatus {
    Checked,
    Unchecked,
}

impl From<RadioStatus> for ControlState {
    fn from(status: RadioStatus) -> Self {
        match status {
            RadioStatus::Checked => Self::Checked,
            RadioStatus::Unchecked => Self::Unchecked,
        }
    }
}

impl From<bool> for RadioStatus {
    fn from(checked: bool) -> Self {
        if checked { Self::Checked } else { Self::Unchecked }
    }
}

impl TryFrom<ControlState> for RadioStatus {
    type Error = ToggleError;

    fn try_from(state: ControlState) -> Result<Self, Self::Error> {
        match state {
            ControlState::Checked => Ok(Self::Checked),
            ControlState::Unchecked => Ok(Self::Unchecked),
            ControlState::Indeterminate => Err(ToggleError::IndeterminateRadio),
        }
    }
}

impl FromStr for RadioStatus {
    type Err = ToggleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<ControlState>()?.try_into()
    }
}
