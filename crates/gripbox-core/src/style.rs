//! Fill colors for the widget body and its handles.

use peniko::Color;
use serde::{Deserialize, Serialize};

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl SerializableColor {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

impl From<Color> for SerializableColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<SerializableColor> for Color {
    fn from(color: SerializableColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Visual style of the widget.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WidgetStyle {
    /// Fill of the widget body.
    pub body_fill: SerializableColor,
    /// Fill of the resize handles (handle hit policy only).
    pub handle_fill: SerializableColor,
}

impl Default for WidgetStyle {
    fn default() -> Self {
        Self {
            // Light blue body, steel blue handles.
            body_fill: SerializableColor::new(173, 216, 230, 255),
            handle_fill: SerializableColor::new(70, 130, 180, 255),
        }
    }
}

impl WidgetStyle {
    /// Body fill as a peniko color.
    pub fn body(&self) -> Color {
        self.body_fill.into()
    }

    /// Handle fill as a peniko color.
    pub fn handle(&self) -> Color {
        self.handle_fill.into()
    }

    /// Set the body fill from a peniko color.
    pub fn set_body(&mut self, color: Color) {
        self.body_fill = color.into();
    }

    /// Set the handle fill from a peniko color.
    pub fn set_handle(&mut self, color: Color) {
        self.handle_fill = color.into();
    }
}
