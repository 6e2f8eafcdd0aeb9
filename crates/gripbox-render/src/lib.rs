//! Gripbox Render Library
//!
//! Software rasterization for the gripbox widget. Adapts the core's
//! [`Painter`](gripbox_core::Painter) seam to a `tiny_skia::Pixmap` so a
//! host without a renderer of its own can blit the widget (and its resize
//! handles) straight into a framebuffer.

mod raster;

pub use raster::{PixmapPainter, RasterError, render_widget};
