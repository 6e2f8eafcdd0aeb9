//! Widget geometry: parent-relative position and size.

use kurbo::{Point, Rect, Size};
use serde::{Deserialize, Serialize};

/// Default width and height for a freshly constructed widget.
pub const DEFAULT_SIZE: f64 = 100.0;

/// Placement of the widget inside its parent.
///
/// The position is the top-left corner relative to the parent's client
/// origin. Mutation goes through the widget so the minimum-size and
/// containment invariants hold after every change.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    /// Top-left corner, relative to the parent's client origin.
    pub position: Point,
    /// Width of the widget.
    pub width: f64,
    /// Height of the widget.
    pub height: f64,
}

impl Default for Geometry {
    fn default() -> Self {
        Self::new(Point::ZERO, DEFAULT_SIZE, DEFAULT_SIZE)
    }
}

impl Geometry {
    /// Create a new geometry.
    pub fn new(position: Point, width: f64, height: f64) -> Self {
        Self {
            position,
            width,
            height,
        }
    }

    /// Size of the widget.
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// The occupied area as a kurbo rect in parent coordinates.
    pub fn as_rect(&self) -> Rect {
        Rect::new(
            self.position.x,
            self.position.y,
            self.position.x + self.width,
            self.position.y + self.height,
        )
    }

    /// Convert a parent-relative point into the widget's local space.
    pub fn to_local(&self, parent_point: Point) -> Point {
        Point::new(
            parent_point.x - self.position.x,
            parent_point.y - self.position.y,
        )
    }

    /// Whether a parent-relative point lies on the widget, borders included.
    pub fn contains(&self, parent_point: Point) -> bool {
        let local = self.to_local(parent_point);
        local.x >= 0.0 && local.x <= self.width && local.y >= 0.0 && local.y <= self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_geometry() {
        let geometry = Geometry::default();
        assert_eq!(geometry.position, Point::ZERO);
        assert!((geometry.width - 100.0).abs() < f64::EPSILON);
        assert!((geometry.height - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_as_rect() {
        let geometry = Geometry::new(Point::new(10.0, 20.0), 100.0, 50.0);
        let rect = geometry.as_rect();
        assert!((rect.x0 - 10.0).abs() < f64::EPSILON);
        assert!((rect.y0 - 20.0).abs() < f64::EPSILON);
        assert!((rect.x1 - 110.0).abs() < f64::EPSILON);
        assert!((rect.y1 - 70.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_to_local() {
        let geometry = Geometry::new(Point::new(10.0, 20.0), 100.0, 50.0);
        let local = geometry.to_local(Point::new(15.0, 25.0));
        assert!((local.x - 5.0).abs() < f64::EPSILON);
        assert!((local.y - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_contains_includes_borders() {
        let geometry = Geometry::new(Point::new(10.0, 10.0), 50.0, 50.0);
        assert!(geometry.contains(Point::new(10.0, 10.0)));
        assert!(geometry.contains(Point::new(60.0, 60.0)));
        assert!(geometry.contains(Point::new(35.0, 35.0)));
        assert!(!geometry.contains(Point::new(9.0, 35.0)));
        assert!(!geometry.contains(Point::new(35.0, 61.0)));
    }
}
