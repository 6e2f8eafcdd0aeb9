//! tiny-skia rasterization of the widget.

use gripbox_core::{GripBox, Painter};
use kurbo::Rect;
use peniko::Color;
use thiserror::Error;
use tiny_skia::{Paint, Pixmap, Rect as SkiaRect, Transform};

/// Rasterization errors.
#[derive(Debug, Error)]
pub enum RasterError {
    #[error("failed to create {width}x{height} pixmap")]
    PixmapCreation { width: u32, height: u32 },
}

/// Fills widget rectangles into an owned pixmap.
///
/// Coordinates arriving through [`Painter`] are parent-relative, so the
/// pixmap is expected to cover the parent's client area.
pub struct PixmapPainter {
    pixmap: Pixmap,
}

impl PixmapPainter {
    /// Create a painter over a fresh pixmap filled with `background`.
    pub fn new(width: u32, height: u32, background: Color) -> Result<Self, RasterError> {
        let mut pixmap =
            Pixmap::new(width, height).ok_or(RasterError::PixmapCreation { width, height })?;
        pixmap.fill(to_skia(background));
        Ok(Self { pixmap })
    }

    /// Borrow the rendered pixmap.
    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// Take the rendered pixmap.
    pub fn into_pixmap(self) -> Pixmap {
        self.pixmap
    }
}

impl Painter for PixmapPainter {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        if rect.width() <= 0.0 || rect.height() <= 0.0 {
            return;
        }
        let Some(skia_rect) = SkiaRect::from_ltrb(
            rect.x0 as f32,
            rect.y0 as f32,
            rect.x1 as f32,
            rect.y1 as f32,
        ) else {
            log::trace!("unrepresentable rect skipped: {rect:?}");
            return;
        };

        let rgba = color.to_rgba8();
        let mut paint = Paint::default();
        paint.set_color_rgba8(rgba.r, rgba.g, rgba.b, rgba.a);
        paint.anti_alias = false;

        self.pixmap
            .fill_rect(skia_rect, &paint, Transform::identity(), None);
    }
}

fn to_skia(color: Color) -> tiny_skia::Color {
    let rgba = color.to_rgba8();
    tiny_skia::Color::from_rgba8(rgba.r, rgba.g, rgba.b, rgba.a)
}

/// Rasterize the widget into a fresh pixmap covering the parent area.
pub fn render_widget(
    widget: &GripBox,
    width: u32,
    height: u32,
    background: Color,
) -> Result<Pixmap, RasterError> {
    let mut painter = PixmapPainter::new(width, height, background)?;
    widget.paint(&mut painter);
    Ok(painter.into_pixmap())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gripbox_core::{Geometry, HitPolicy, WidgetConfig};
    use kurbo::{Point, Size};

    fn rgb(pixel: tiny_skia::PremultipliedColorU8) -> (u8, u8, u8) {
        // All test colors are opaque, so premultiplied equals straight.
        (pixel.red(), pixel.green(), pixel.blue())
    }

    fn placed_widget(config: WidgetConfig) -> GripBox {
        let mut widget = GripBox::with_config(config).unwrap();
        widget.set_parent_size(Some(Size::new(200.0, 200.0)));
        widget.set_geometry(Geometry::new(Point::new(10.0, 10.0), 100.0, 100.0));
        widget
    }

    #[test]
    fn test_body_fill() {
        let widget = placed_widget(WidgetConfig::default());
        let background = Color::from_rgba8(0, 0, 0, 255);
        let pixmap = render_widget(&widget, 200, 200, background).unwrap();

        let body = widget.style().body().to_rgba8();
        let inside = pixmap.pixel(60, 60).unwrap();
        assert_eq!(rgb(inside), (body.r, body.g, body.b));

        let outside = pixmap.pixel(150, 150).unwrap();
        assert_eq!(rgb(outside), (0, 0, 0));
    }

    #[test]
    fn test_handles_drawn_under_handle_policy() {
        let config = WidgetConfig {
            hit_policy: HitPolicy::Handles,
            ..WidgetConfig::default()
        };
        let widget = placed_widget(config);
        let pixmap =
            render_widget(&widget, 200, 200, Color::from_rgba8(0, 0, 0, 255)).unwrap();

        // Center of the top-left corner square: local (5, 5), parent (15, 15).
        let handle = widget.style().handle().to_rgba8();
        let pixel = pixmap.pixel(15, 15).unwrap();
        assert_eq!(rgb(pixel), (handle.r, handle.g, handle.b));

        // Interior stays body-colored.
        let body = widget.style().body().to_rgba8();
        let pixel = pixmap.pixel(60, 60).unwrap();
        assert_eq!(rgb(pixel), (body.r, body.g, body.b));
    }

    #[test]
    fn test_no_handles_under_margin_policy() {
        let widget = placed_widget(WidgetConfig::default());
        let pixmap =
            render_widget(&widget, 200, 200, Color::from_rgba8(0, 0, 0, 255)).unwrap();

        let body = widget.style().body().to_rgba8();
        let pixel = pixmap.pixel(15, 15).unwrap();
        assert_eq!(rgb(pixel), (body.r, body.g, body.b));
    }

    #[test]
    fn test_zero_size_pixmap_is_an_error() {
        let widget = GripBox::new();
        let result = render_widget(&widget, 0, 0, Color::from_rgba8(0, 0, 0, 255));
        assert!(matches!(
            result,
            Err(RasterError::PixmapCreation {
                width: 0,
                height: 0
            })
        ));
    }
}
