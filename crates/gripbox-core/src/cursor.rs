//! Cursor affordance hints surfaced to the host.

use crate::zone::ResizeDirection;
use serde::{Deserialize, Serialize};

/// Cursor appearance the host should apply.
///
/// The widget never touches the platform cursor itself; it reports a hint
/// and the host maps it onto whatever its toolkit provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CursorHint {
    /// Plain pointer.
    #[default]
    Default,
    /// Open hand over the draggable interior.
    Grab,
    /// Omnidirectional move, shown while a drag is active.
    Move,
    /// Vertical resize (top or bottom edge).
    NsResize,
    /// Horizontal resize (left or right edge).
    EwResize,
    /// Diagonal resize along the top-left/bottom-right axis.
    NwseResize,
    /// Diagonal resize along the top-right/bottom-left axis.
    NeswResize,
}

impl CursorHint {
    /// Hint for hovering a border zone, or the interior when `None`.
    pub fn for_zone(direction: Option<ResizeDirection>) -> Self {
        match direction {
            Some(ResizeDirection::TopLeft | ResizeDirection::BottomRight) => Self::NwseResize,
            Some(ResizeDirection::TopRight | ResizeDirection::BottomLeft) => Self::NeswResize,
            Some(ResizeDirection::Top | ResizeDirection::Bottom) => Self::NsResize,
            Some(ResizeDirection::Left | ResizeDirection::Right) => Self::EwResize,
            None => Self::Grab,
        }
    }
}
