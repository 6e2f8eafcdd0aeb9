//! Resize-zone classification along the widget border.
//!
//! Two interchangeable policies map a local pointer position to a resize
//! direction: an edge-proximity test ([`classify_margin`]) and a lookup
//! against eight fixed handle rectangles ([`classify_zones`]). The handle
//! rectangles double as the decoration geometry, so what is painted and
//! what is hit-tested can never disagree.

use kurbo::{Point, Rect, Size};
use serde::{Deserialize, Serialize};

/// Which part of the border a resize gesture grabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResizeDirection {
    Top,
    Bottom,
    Left,
    Right,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl ResizeDirection {
    /// Whether the gesture moves the left edge.
    pub fn affects_left(self) -> bool {
        matches!(self, Self::Left | Self::TopLeft | Self::BottomLeft)
    }

    /// Whether the gesture moves the right edge.
    pub fn affects_right(self) -> bool {
        matches!(self, Self::Right | Self::TopRight | Self::BottomRight)
    }

    /// Whether the gesture moves the top edge.
    pub fn affects_top(self) -> bool {
        matches!(self, Self::Top | Self::TopLeft | Self::TopRight)
    }

    /// Whether the gesture moves the bottom edge.
    pub fn affects_bottom(self) -> bool {
        matches!(self, Self::Bottom | Self::BottomLeft | Self::BottomRight)
    }
}

/// Classify a local pointer position by proximity to the four edges.
///
/// Each edge is tested independently; a corner is the conjunction of two
/// adjacent edges and wins over either edge alone. When the widget is
/// narrower than `2 * margin` the tests overlap and the corner arms still
/// resolve first, so degenerate sizes classify without contradiction.
pub fn classify_margin(local: Point, size: Size, margin: f64) -> Option<ResizeDirection> {
    let left = local.x <= margin;
    let right = local.x >= size.width - margin;
    let top = local.y <= margin;
    let bottom = local.y >= size.height - margin;

    if top && left {
        Some(ResizeDirection::TopLeft)
    } else if top && right {
        Some(ResizeDirection::TopRight)
    } else if bottom && left {
        Some(ResizeDirection::BottomLeft)
    } else if bottom && right {
        Some(ResizeDirection::BottomRight)
    } else if top {
        Some(ResizeDirection::Top)
    } else if bottom {
        Some(ResizeDirection::Bottom)
    } else if left {
        Some(ResizeDirection::Left)
    } else if right {
        Some(ResizeDirection::Right)
    } else {
        None
    }
}

/// The eight handle rectangles along the border, in local coordinates.
///
/// Four corner squares of side `handle_size`, four edge strips filling the
/// remainder of each side. Corners come first so that zone lookup gives
/// them priority. When a side is shorter than `2 * handle_size` the strip
/// on that side collapses to zero extent instead of going negative.
pub fn handle_zones(size: Size, handle_size: f64) -> [(ResizeDirection, Rect); 8] {
    let w = size.width;
    let h = size.height;
    let hs = handle_size;
    // Strip endpoints, saturated so x1 >= x0 and y1 >= y0.
    let strip_x1 = (w - hs).max(hs);
    let strip_y1 = (h - hs).max(hs);

    [
        (ResizeDirection::TopLeft, Rect::new(0.0, 0.0, hs, hs)),
        (ResizeDirection::TopRight, Rect::new(w - hs, 0.0, w, hs)),
        (ResizeDirection::BottomLeft, Rect::new(0.0, h - hs, hs, h)),
        (
            ResizeDirection::BottomRight,
            Rect::new(w - hs, h - hs, w, h),
        ),
        (ResizeDirection::Top, Rect::new(hs, 0.0, strip_x1, hs)),
        (ResizeDirection::Bottom, Rect::new(hs, h - hs, strip_x1, h)),
        (ResizeDirection::Left, Rect::new(0.0, hs, hs, strip_y1)),
        (ResizeDirection::Right, Rect::new(w - hs, hs, w, strip_y1)),
    ]
}

/// Classify a local pointer position against the handle rectangles.
///
/// Returns the first zone containing the point, corners first.
pub fn classify_zones(local: Point, size: Size, handle_size: f64) -> Option<ResizeDirection> {
    handle_zones(size, handle_size)
        .into_iter()
        .find(|(_, zone)| zone_contains(*zone, local))
        .map(|(direction, _)| direction)
}

/// Inclusive containment test; a zero-extent zone contains nothing.
fn zone_contains(zone: Rect, point: Point) -> bool {
    zone.width() > 0.0
        && zone.height() > 0.0
        && point.x >= zone.x0
        && point.x <= zone.x1
        && point.y >= zone.y0
        && point.y <= zone.y1
}
