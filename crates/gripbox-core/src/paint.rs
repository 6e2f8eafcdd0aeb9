//! Drawing seam between the widget and the host surface.

use kurbo::Rect;
use peniko::Color;

/// Minimal drawing surface the widget paints through.
///
/// The widget only ever fills axis-aligned rectangles (its body and, under
/// the handle hit policy, the eight handle squares), so this is the whole
/// contract. Hosts adapt their renderer to it; `gripbox-render` ships a
/// tiny-skia implementation.
pub trait Painter {
    /// Fill an axis-aligned rectangle, coordinates relative to the parent.
    fn fill_rect(&mut self, rect: Rect, color: Color);
}
