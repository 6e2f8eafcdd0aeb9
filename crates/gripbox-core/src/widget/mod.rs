//! The interactive rectangle and its gesture state.
//!
//! [`GripBox`] consumes pointer events from the host and owns the geometry
//! it mutates; [`Mode`] is the per-gesture state machine, with the anchors
//! captured at press living inside the active variant so they cannot
//! outlive the gesture.

mod rect;
mod state;

pub use rect::{GripBox, Response};
pub use state::{Mode, ResizeAnchor};
