//! Gesture state definitions.

use crate::geometry::Geometry;
use crate::zone::ResizeDirection;
use kurbo::{Point, Vec2};

/// Snapshot taken when a resize gesture starts.
///
/// Deltas are computed against this original press reference rather than
/// re-anchored every move, so the end state is insensitive to dropped move
/// events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeAnchor {
    /// Pointer position at press, parent-relative.
    pub pointer: Point,
    /// Geometry at press.
    pub origin: Geometry,
}

/// Interaction mode. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Mode {
    /// No gesture in flight; moves only update the cursor hint.
    #[default]
    Idle,
    /// Body drag. `grab` is the press offset within the widget, so the
    /// grabbed point tracks the pointer for the whole gesture.
    Dragging { grab: Vec2 },
    /// Edge or corner drag.
    Resizing {
        direction: ResizeDirection,
        anchor: ResizeAnchor,
    },
}

impl Mode {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    pub fn is_resizing(&self) -> bool {
        matches!(self, Self::Resizing { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_predicates() {
        assert!(Mode::Idle.is_idle());
        let dragging = Mode::Dragging {
            grab: Vec2::new(5.0, 5.0),
        };
        assert!(dragging.is_dragging());
        assert!(!dragging.is_idle());
        let resizing = Mode::Resizing {
            direction: ResizeDirection::Top,
            anchor: ResizeAnchor {
                pointer: Point::ZERO,
                origin: Geometry::default(),
            },
        };
        assert!(resizing.is_resizing());
        assert!(!resizing.is_dragging());
    }
}
