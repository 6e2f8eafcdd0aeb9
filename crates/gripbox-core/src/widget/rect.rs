//! The interactive rectangle component.

use kurbo::{Point, Size};

use super::state::{Mode, ResizeAnchor};
use crate::config::{ConfigError, HitPolicy, WidgetConfig};
use crate::cursor::CursorHint;
use crate::geometry::Geometry;
use crate::input::{MouseButton, PointerEvent};
use crate::paint::Painter;
use crate::style::WidgetStyle;
use crate::zone::{self, ResizeDirection};

/// What the host should do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Response {
    /// Cursor appearance to apply, if it should change on this event.
    pub cursor: Option<CursorHint>,
    /// Geometry changed; the host should schedule a redraw.
    pub geometry_changed: bool,
}

/// A draggable, resizable rectangle embedded in a host container.
///
/// The host feeds it [`PointerEvent`]s in parent-relative coordinates and
/// applies whatever the returned [`Response`] asks for. Geometry is only
/// reachable through accessors; every mutation path, gesture or
/// programmatic, enforces the minimum-size and containment invariants.
#[derive(Debug, Clone)]
pub struct GripBox {
    geometry: Geometry,
    mode: Mode,
    config: WidgetConfig,
    style: WidgetStyle,
    /// Client size of the parent container. `None` while unparented, which
    /// disables every containment-dependent mutation.
    parent: Option<Size>,
}

impl Default for GripBox {
    fn default() -> Self {
        Self::new()
    }
}

impl GripBox {
    /// Create a widget with default configuration and geometry.
    pub fn new() -> Self {
        Self {
            geometry: Geometry::default(),
            mode: Mode::Idle,
            config: WidgetConfig::default(),
            style: WidgetStyle::default(),
            parent: None,
        }
    }

    /// Create a widget with a validated configuration.
    pub fn with_config(config: WidgetConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::new()
        })
    }

    /// Current geometry.
    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// Current interaction mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Active configuration.
    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    /// Visual style.
    pub fn style(&self) -> &WidgetStyle {
        &self.style
    }

    /// Replace the visual style.
    pub fn set_style(&mut self, style: WidgetStyle) {
        self.style = style;
    }

    /// Parent client size, if known.
    pub fn parent_size(&self) -> Option<Size> {
        self.parent
    }

    /// Update the parent client size. `None` marks the widget unparented.
    pub fn set_parent_size(&mut self, parent: Option<Size>) {
        self.parent = parent;
    }

    /// Programmatic repositioning. The geometry is normalized before it is
    /// applied: sizes floor at the configured minimum and, when the parent
    /// is known, the widget is pulled back inside its bounds.
    pub fn set_geometry(&mut self, geometry: Geometry) {
        self.geometry = self.normalized(geometry);
    }

    /// Classify a parent-relative pointer position against the border
    /// zones. `None` for the interior and for points off the widget.
    pub fn classify(&self, parent_point: Point) -> Option<ResizeDirection> {
        if !self.geometry.contains(parent_point) {
            return None;
        }
        self.classify_local(self.geometry.to_local(parent_point))
    }

    /// Feed one pointer event through the gesture machine.
    pub fn handle_event(&mut self, event: PointerEvent) -> Response {
        match event {
            PointerEvent::Down { position, button } => self.on_pointer_down(position, button),
            PointerEvent::Move { position } => self.on_pointer_move(position),
            PointerEvent::Up { position, button } => self.on_pointer_up(position, button),
            PointerEvent::CaptureLost => self.on_capture_lost(),
        }
    }

    /// Primary-button press: start a resize if a border zone is hit, a drag
    /// otherwise. A press while a gesture is already in flight is ignored
    /// until a release closes it.
    pub fn on_pointer_down(&mut self, position: Point, button: MouseButton) -> Response {
        if !button.is_primary() {
            return Response::default();
        }
        if !self.mode.is_idle() {
            log::debug!("press at {position:?} ignored, gesture already in flight");
            return Response::default();
        }
        if !self.geometry.contains(position) {
            return Response::default();
        }

        let local = self.geometry.to_local(position);
        match self.classify_local(local) {
            Some(direction) => {
                self.mode = Mode::Resizing {
                    direction,
                    anchor: ResizeAnchor {
                        pointer: position,
                        origin: self.geometry,
                    },
                };
                log::debug!("resize gesture started: {direction:?}");
                Response {
                    cursor: Some(CursorHint::for_zone(Some(direction))),
                    geometry_changed: false,
                }
            }
            None => {
                self.mode = Mode::Dragging {
                    grab: local.to_vec2(),
                };
                log::debug!("drag gesture started at local {local:?}");
                Response {
                    cursor: Some(CursorHint::Move),
                    geometry_changed: false,
                }
            }
        }
    }

    /// Pointer motion: hover feedback while idle, geometry mutation while a
    /// gesture is active.
    pub fn on_pointer_move(&mut self, position: Point) -> Response {
        match self.mode {
            Mode::Idle => {
                let hint = if self.geometry.contains(position) {
                    CursorHint::for_zone(self.classify_local(self.geometry.to_local(position)))
                } else {
                    CursorHint::Default
                };
                Response {
                    cursor: Some(hint),
                    geometry_changed: false,
                }
            }
            Mode::Dragging { grab } => {
                let changed = self.drag_to(position, grab);
                Response {
                    cursor: Some(CursorHint::Move),
                    geometry_changed: changed,
                }
            }
            Mode::Resizing { direction, anchor } => {
                let changed = self.resize_to(position, direction, anchor);
                Response {
                    cursor: Some(CursorHint::for_zone(Some(direction))),
                    geometry_changed: changed,
                }
            }
        }
    }

    /// Primary-button release ends the active gesture; the final geometry
    /// was already applied by the last move.
    pub fn on_pointer_up(&mut self, _position: Point, button: MouseButton) -> Response {
        if !button.is_primary() || self.mode.is_idle() {
            return Response::default();
        }
        log::debug!("gesture ended");
        self.mode = Mode::Idle;
        Response {
            cursor: Some(CursorHint::Default),
            geometry_changed: false,
        }
    }

    /// Capture loss is an implicit release, so a gesture cannot get stuck
    /// when the host never delivers the matching pointer-up.
    pub fn on_capture_lost(&mut self) -> Response {
        if self.mode.is_idle() {
            return Response::default();
        }
        log::debug!("gesture ended by capture loss");
        self.mode = Mode::Idle;
        Response {
            cursor: Some(CursorHint::Default),
            geometry_changed: false,
        }
    }

    /// Paint the body, plus the handle squares under the handle hit policy.
    /// The handle rectangles come from the same zone geometry the
    /// classifier uses.
    pub fn paint(&self, painter: &mut dyn Painter) {
        painter.fill_rect(self.geometry.as_rect(), self.style.body());
        if self.config.hit_policy == HitPolicy::Handles {
            let offset = self.geometry.position.to_vec2();
            for (_, zone) in zone::handle_zones(self.geometry.size(), self.config.handle_size) {
                if zone.width() > 0.0 && zone.height() > 0.0 {
                    painter.fill_rect(zone + offset, self.style.handle());
                }
            }
        }
    }

    fn classify_local(&self, local: Point) -> Option<ResizeDirection> {
        match self.config.hit_policy {
            HitPolicy::Margin => {
                zone::classify_margin(local, self.geometry.size(), self.config.hit_margin)
            }
            HitPolicy::Handles => {
                zone::classify_zones(local, self.geometry.size(), self.config.handle_size)
            }
        }
    }

    /// Move the widget so the grabbed point follows the pointer, clamped
    /// per axis to keep the widget fully inside the parent.
    fn drag_to(&mut self, position: Point, grab: kurbo::Vec2) -> bool {
        let Some(parent) = self.parent else {
            log::trace!("move skipped, no parent bounds");
            return false;
        };
        let target = position - grab;
        let max_x = (parent.width - self.geometry.width).max(0.0);
        let max_y = (parent.height - self.geometry.height).max(0.0);
        let clamped = Point::new(target.x.clamp(0.0, max_x), target.y.clamp(0.0, max_y));
        if clamped == self.geometry.position {
            return false;
        }
        self.geometry.position = clamped;
        true
    }

    /// Recompute geometry from the press anchor. Edges adjacent to the
    /// grabbed zone follow the pointer; the opposite edges stay put. Sizes
    /// floor at the minimum and the result never extends past the parent.
    fn resize_to(&mut self, position: Point, direction: ResizeDirection, anchor: ResizeAnchor) -> bool {
        let Some(parent) = self.parent else {
            log::trace!("resize skipped, no parent bounds");
            return false;
        };
        let delta = position - anchor.pointer;
        let origin = anchor.origin;
        let min = self.config.min_size;
        // A moving left/top edge stops one minimum short of the far side,
        // so the containment clamp below can never push a size under the
        // minimum.
        let max_x = (parent.width - min).max(0.0);
        let max_y = (parent.height - min).max(0.0);

        let mut x = origin.position.x;
        let mut y = origin.position.y;
        let mut w = origin.width;
        let mut h = origin.height;

        if direction.affects_left() {
            x = (origin.position.x + delta.x).clamp(0.0, max_x);
            w = (origin.width - delta.x).max(min);
        } else if direction.affects_right() {
            w = (origin.width + delta.x).max(min);
        }
        if direction.affects_top() {
            y = (origin.position.y + delta.y).clamp(0.0, max_y);
            h = (origin.height - delta.y).max(min);
        } else if direction.affects_bottom() {
            h = (origin.height + delta.y).max(min);
        }

        w = w.min((parent.width - x).max(min));
        h = h.min((parent.height - y).max(min));

        let next = Geometry::new(Point::new(x, y), w, h);
        if next == self.geometry {
            return false;
        }
        // Position and size land in one assignment; no intermediate frame.
        self.geometry = next;
        true
    }

    fn normalized(&self, mut geometry: Geometry) -> Geometry {
        let min = self.config.min_size;
        geometry.width = geometry.width.max(min);
        geometry.height = geometry.height.max(min);
        match self.parent {
            Some(parent) => {
                geometry.width = geometry.width.min(parent.width.max(min));
                geometry.height = geometry.height.min(parent.height.max(min));
                geometry.position.x = geometry
                    .position
                    .x
                    .clamp(0.0, (parent.width - geometry.width).max(0.0));
                geometry.position.y = geometry
                    .position
                    .y
                    .clamp(0.0, (parent.height - geometry.height).max(0.0));
            }
            None => {
                geometry.position.x = geometry.position.x.max(0.0);
                geometry.position.y = geometry.position.y.max(0.0);
            }
        }
        geometry
    }
}
