//! Error types for control props.

use thiserror::Error;

/// Errors raised while interpreting control props.
///
/// The selection decisions themselves never fail; these only cover the
/// edges where loosely typed input is turned into a control state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToggleError {
    /// A status string was not one of the known states.
    #[error("Unknown control status '{0}' (expected checked, unchecked or indeterminate)")]
    UnknownStatus(String),

    /// A radio button was given the indeterminate status.
    #[error("Radio buttons cannot be indeterminate")]
    IndeterminateRadio,
}
