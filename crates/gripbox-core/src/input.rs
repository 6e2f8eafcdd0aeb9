//! Pointer events delivered by the host.
//!
//! Positions are parent-relative: the same coordinate space the widget's
//! geometry lives in. The host is expected to translate whatever its native
//! event type is into [`PointerEvent`] and feed every event to the widget;
//! the widget decides for itself whether an event lands on it.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

impl MouseButton {
    /// Only the primary button starts or ends gestures.
    pub fn is_primary(self) -> bool {
        self == Self::Left
    }
}

/// Pointer event in parent-relative coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Down {
        position: Point,
        button: MouseButton,
    },
    Up {
        position: Point,
        button: MouseButton,
    },
    Move {
        position: Point,
    },
    /// The host lost pointer capture (focus change, grab break). Treated as
    /// an implicit release so a gesture can never get stuck.
    CaptureLost,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_button() {
        assert!(MouseButton::Left.is_primary());
        assert!(!MouseButton::Right.is_primary());
        assert!(!MouseButton::Middle.is_primary());
    }
}
