use serde::{Deserialize, Serialize};

/// Which platform look a control is rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Checkmark style, no visible mark when unchecked.
    Ios,
    /// Material style: outlined box or ring, filled when checked.
    Android,
}

impl Platform {
    /// The look native to the compile target.
    pub fn current() -> Self {
        if cfg!(any(target_os = "ios", target_os = "macos")) {
            Self::Ios
        } else {
            Self::Android
        }
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::current()
    }
}
