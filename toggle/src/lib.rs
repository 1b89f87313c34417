//! Selection coordination for checkbox and radio controls.
//!
//! A radio group hands every control a [`GroupSelection`] snapshot at render
//! time. Each control combines the snapshot with its own props through
//! [`resolve`] to decide whether it is checked, and calls [`on_activate`]
//! when the user presses it. The group is the only writer of the selection.

pub mod error;
pub mod group;
pub mod press;
pub mod resolve;
pub mod selection;
pub mod state;
pub mod status;
pub mod value;

pub use error::ToggleError;
pub use group::{GroupId, GroupMode, RadioGroup};
pub use press::on_activate;
pub use resolve::resolve;
pub use selection::{GroupSelection, Notifier, SelectionContext};
pub use state::State;
pub use status::{ControlState, RadioStatus};
pub use value::Value;

pub mod prelude {
    pub use crate::error::ToggleError;
    pub use crate::group::{GroupId, GroupMode, RadioGroup};
    pub use crate::press::on_activate;
    pub use crate::resolve::resolve;
    pub use crate::selection::{GroupSelection, Notifier, SelectionContext};
    pub use crate::state::State;
    pub use crate::status::{ControlState, RadioStatus};
    pub use crate::value::Value;
}
