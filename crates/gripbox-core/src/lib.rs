//! Gripbox Core Library
//!
//! Platform-agnostic interaction core for an embeddable, user-draggable and
//! user-resizable rectangular widget. The host owns the window, the event
//! loop, and the drawing surface; this crate owns hit-zone classification,
//! cursor hints, the drag/resize gesture machine, and containment clamping.

pub mod config;
pub mod cursor;
pub mod geometry;
pub mod input;
pub mod paint;
pub mod style;
pub mod widget;
pub mod zone;

pub use config::{ConfigError, HitPolicy, WidgetConfig};
pub use cursor::CursorHint;
pub use geometry::Geometry;
pub use input::{MouseButton, PointerEvent};
pub use paint::Painter;
pub use style::{SerializableColor, WidgetStyle};
pub use widget::{GripBox, Mode, ResizeAnchor, Response};
pub use zone::ResizeDirection;
