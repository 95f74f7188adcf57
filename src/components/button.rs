//! Interactive button widget
//!
//! The button is the composite primitive of the toolkit: fill, border,
//! label and icon layers, each independently visible and hover-capable,
//! over a single dirty flag and a pair of touch-edge latches. Lists and
//! pagination indicators are built out of buttons.
//!
//! One poll cycle is two calls: [`Button::poll`] samples the touch panel
//! and updates the edge state, [`Button::draw`] repaints if and only if
//! the widget is dirty. Draws are idempotent between polls; polling more
//! than once per cycle would fold two edges into one.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::glyph::Glyph;
use crate::styling;
use crate::surface::{DrawSurface, TextDatum};
use crate::touch::TouchSource;

const LABEL_CAPACITY: usize = 32;

/// Anchor of a label or icon inside the button rectangle.
///
/// Only center alignments exist; other placements are reached by adding
/// pixel offsets to the anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    TopCenter,
    RightCenter,
    BottomCenter,
    LeftCenter,
    #[default]
    MiddleCenter,
}

/// Rectangular touch button with optional rounded corners, label and
/// icon.
pub struct Button {
    bounds: Rectangle,
    radius: u32,

    fill_color: Rgb565,
    fill_hover_color: Rgb565,
    border_color: Rgb565,
    border_hover_color: Rgb565,
    label_color: Rgb565,
    label_hover_color: Rgb565,
    icon_color: Rgb565,
    icon_hover_color: Rgb565,

    label: heapless::String<LABEL_CAPACITY>,
    label_align: Align,
    label_offset: Point,

    icon: Option<Glyph>,
    icon_align: Align,
    icon_offset: Point,

    visible: bool,
    enabled: bool,
    fill_visible: bool,
    border_visible: bool,
    label_visible: bool,
    icon_visible: bool,

    hover_enabled: bool,
    fill_hover_enabled: bool,
    border_hover_enabled: bool,
    label_hover_enabled: bool,
    icon_hover_enabled: bool,

    current_touch: bool,
    prev_touch: bool,
    dirty: bool,

    /// Secondary latch with no built-in visual effect; checkbox/radio
    /// semantics branch on it from the outside.
    active: bool,

    pressure_threshold: u16,
}

impl Default for Button {
    fn default() -> Self {
        Self {
            bounds: Rectangle::zero(),
            radius: styling::DEFAULT_CORNER_RADIUS,
            fill_color: styling::BLACK,
            fill_hover_color: styling::DEFAULT_FILL_HOVER_COLOR,
            border_color: styling::DEFAULT_BORDER_COLOR,
            border_hover_color: styling::DEFAULT_BORDER_HOVER_COLOR,
            label_color: styling::WHITE,
            label_hover_color: styling::DEFAULT_LABEL_HOVER_COLOR,
            icon_color: styling::DEFAULT_ICON_COLOR,
            icon_hover_color: styling::DEFAULT_ICON_HOVER_COLOR,
            label: heapless::String::new(),
            label_align: Align::MiddleCenter,
            label_offset: Point::zero(),
            icon: None,
            icon_align: Align::MiddleCenter,
            icon_offset: Point::zero(),
            visible: true,
            enabled: true,
            fill_visible: true,
            border_visible: false,
            label_visible: true,
            icon_visible: false,
            hover_enabled: true,
            fill_hover_enabled: true,
            border_hover_enabled: false,
            label_hover_enabled: true,
            icon_hover_enabled: false,
            current_touch: false,
            prev_touch: false,
            dirty: true,
            active: false,
            pressure_threshold: styling::PRESSURE_THRESHOLD,
        }
    }
}

impl Button {
    pub fn new(bounds: Rectangle, fill_color: Rgb565, label_color: Rgb565, label: &str) -> Self {
        let mut button = Self::default();
        button.bind(bounds, fill_color, label_color, label);
        button
    }

    /// (Re)initializes geometry, colors and label, restoring every other
    /// setting to its default. The widget comes out dirty so the first
    /// draw always paints.
    pub fn bind(
        &mut self,
        bounds: Rectangle,
        fill_color: Rgb565,
        label_color: Rgb565,
        label: &str,
    ) {
        self.bounds = bounds;
        self.radius = styling::DEFAULT_CORNER_RADIUS;
        self.fill_color = fill_color;
        self.fill_hover_color = styling::DEFAULT_FILL_HOVER_COLOR;
        self.border_color = styling::DEFAULT_BORDER_COLOR;
        self.border_hover_color = styling::DEFAULT_BORDER_HOVER_COLOR;
        self.label_color = label_color;
        self.label_hover_color = styling::DEFAULT_LABEL_HOVER_COLOR;
        self.icon_color = styling::DEFAULT_ICON_COLOR;
        self.icon_hover_color = styling::DEFAULT_ICON_HOVER_COLOR;
        self.label.clear();
        self.label.push_str(label).ok();
        self.label_align = Align::MiddleCenter;
        self.label_offset = Point::zero();
        self.icon = None;
        self.icon_align = Align::MiddleCenter;
        self.icon_offset = Point::zero();
        self.visible = true;
        self.enabled = true;
        self.fill_visible = true;
        self.border_visible = false;
        self.label_visible = true;
        self.icon_visible = false;
        self.hover_enabled = true;
        self.fill_hover_enabled = true;
        self.border_hover_enabled = false;
        self.label_hover_enabled = true;
        self.icon_hover_enabled = false;
        self.current_touch = false;
        self.prev_touch = false;
        self.dirty = true;
        self.active = false;
        self.pressure_threshold = styling::PRESSURE_THRESHOLD;
    }

    // ------------------------------------------------------------------
    // Touch
    // ------------------------------------------------------------------

    /// Samples the touch panel once and updates the edge state.
    ///
    /// The dirty flag is raised on the rising and the falling edge of a
    /// hit, never on sustained touch or sustained release, and a pending
    /// external invalidation is never cancelled. Returns whether the
    /// button is hit by the current sample.
    pub fn poll<T: TouchSource>(&mut self, touch: &mut T) -> bool {
        let mut hit = false;
        if touch.is_touched(0) {
            let sample = touch.sample_point();
            hit = self.bounds.contains(sample.point())
                && sample.pressure >= self.pressure_threshold;
        }

        if hit {
            if !self.current_touch {
                self.dirty = true;
            }
            self.current_touch = true;
            self.prev_touch = true;
        } else {
            if self.current_touch {
                self.dirty = true;
            }
            // prev_touch stays latched until is_pressed() consumes it.
            self.current_touch = false;
        }

        hit
    }

    /// True exactly once per touch-and-release cycle, on the release.
    pub fn is_pressed(&mut self) -> bool {
        if !self.current_touch && self.prev_touch {
            self.prev_touch = false;
            true
        } else {
            false
        }
    }

    /// Whether the most recent poll registered contact on this button.
    pub fn is_touched(&self) -> bool {
        self.current_touch
    }

    pub fn contains(&self, point: Point) -> bool {
        self.bounds.contains(point)
    }

    // ------------------------------------------------------------------
    // Drawing
    // ------------------------------------------------------------------

    /// Repaints the button if it is visible and dirty, layer by layer:
    /// fill, border, icon, label. Issues zero surface calls otherwise.
    pub fn draw<S: DrawSurface>(&mut self, surface: &mut S) -> Result<(), S::Error> {
        if !self.visible || !self.dirty {
            return Ok(());
        }

        let hover = self.hover_enabled && self.enabled && self.current_touch;

        if self.fill_visible {
            let color = if !self.enabled {
                styling::DISABLED_BG_COLOR
            } else if hover && self.fill_hover_enabled {
                self.fill_hover_color
            } else {
                self.fill_color
            };
            surface.fill_rounded_rect(self.bounds, self.radius, color)?;
        }

        if self.border_visible {
            let color = if !self.enabled {
                styling::DISABLED_FG_COLOR
            } else if hover && self.border_hover_enabled {
                self.border_hover_color
            } else {
                self.border_color
            };
            surface.stroke_rounded_rect(self.bounds, self.radius, color)?;
        }

        if self.icon_visible {
            if let Some(icon) = self.icon.as_mut() {
                icon.compute_bounds();
            }
            if let Some(icon) = &self.icon {
                let color = if !self.enabled {
                    styling::DISABLED_FG_COLOR
                } else if hover && self.icon_hover_enabled {
                    self.icon_hover_color
                } else {
                    self.icon_color
                };
                let anchor = self.icon_anchor(icon);
                icon.render(surface, anchor.x, anchor.y, color)?;
            }
        }

        if self.label_visible {
            let (fg, bg) = if !self.enabled {
                (styling::DISABLED_FG_COLOR, styling::DISABLED_BG_COLOR)
            } else if hover && self.label_hover_enabled {
                (self.label_hover_color, self.fill_hover_color)
            } else {
                (self.label_color, self.fill_color)
            };
            let (datum, anchor) = self.label_anchor();
            surface.set_text_color(fg, bg);
            surface.set_text_datum(datum);
            surface.draw_string(&self.label, anchor.x, anchor.y)?;
        }

        self.dirty = false;
        Ok(())
    }

    /// Paints over the button's footprint, e.g. before hiding it.
    pub fn clear<S: DrawSurface>(&self, surface: &mut S, bg: Rgb565) -> Result<(), S::Error> {
        surface.fill_rounded_rect(self.bounds, self.radius, bg)
    }

    fn label_anchor(&self) -> (TextDatum, Point) {
        let tl = self.bounds.top_left;
        let w = self.bounds.size.width as i32;
        let h = self.bounds.size.height as i32;
        let off = self.label_offset;

        match self.label_align {
            Align::TopCenter => (
                TextDatum::TopCenter,
                Point::new(tl.x + off.x + w / 2, tl.y + off.y),
            ),
            Align::RightCenter => (
                TextDatum::MiddleRight,
                Point::new(tl.x + off.x + w, tl.y + off.y + h / 2),
            ),
            Align::BottomCenter => (
                TextDatum::BottomCenter,
                Point::new(tl.x + off.x + w / 2, tl.y + off.y + h),
            ),
            Align::LeftCenter => (
                TextDatum::MiddleLeft,
                Point::new(tl.x + off.x, tl.y + off.y + h / 2),
            ),
            Align::MiddleCenter => (
                TextDatum::MiddleCenter,
                Point::new(tl.x + off.x + w / 2, tl.y + off.y + h / 2),
            ),
        }
    }

    /// Icon anchors compensate for the glyph's tight-bound offsets so
    /// the trimmed ink, not the nominal cell, lands on the anchor.
    fn icon_anchor(&self, icon: &Glyph) -> Point {
        let tl = self.bounds.top_left;
        let w = self.bounds.size.width as i32;
        let h = self.bounds.size.height as i32;
        let off = self.icon_offset;
        let (gw, gh) = (icon.tight_width(), icon.tight_height());
        let (gx, gy) = (icon.offset_x(), icon.offset_y());

        match self.icon_align {
            Align::TopCenter => Point::new(tl.x + off.x + (w - gw) / 2 - gx, tl.y + off.y - gy),
            Align::RightCenter => {
                Point::new(tl.x + off.x + (w - gw), tl.y + off.y + (h - gh) / 2 - gy)
            }
            Align::BottomCenter => Point::new(
                tl.x + off.x + (w - gw) / 2 - gx,
                tl.y + off.y + (h - gh) - gy,
            ),
            Align::LeftCenter => Point::new(tl.x + off.x - gx, tl.y + off.y + (h - gh) / 2 - gy),
            Align::MiddleCenter => Point::new(
                tl.x + off.x + (w - gw) / 2 - gx,
                tl.y + off.y + (h - gh) / 2 - gy,
            ),
        }
    }

    // ------------------------------------------------------------------
    // State toggles
    // ------------------------------------------------------------------

    /// Visibility changes do not repaint by themselves; hiding a button
    /// leaves its pixels behind unless the caller clears the area.
    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Disabled buttons keep tracking touch edges internally but render
    /// with the fixed disabled colors and never reflect hover.
    pub fn disable(&mut self) {
        self.enabled = false;
    }

    pub fn enable(&mut self) {
        self.enabled = true;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Clears the touch latches and forces a repaint. Called when a page
    /// becomes active so no stale edge state leaks into the new cycle.
    pub fn reset(&mut self) {
        self.current_touch = false;
        self.prev_touch = false;
        self.dirty = true;
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn activate(&mut self) {
        self.active = true;
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    pub fn toggle_active(&mut self) {
        self.active = !self.active;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    // ------------------------------------------------------------------
    // Geometry and appearance
    // ------------------------------------------------------------------

    pub fn bounds(&self) -> Rectangle {
        self.bounds
    }

    /// Moves the button without invalidating it. Lists reposition their
    /// items on every draw; forcing a repaint here would defeat the
    /// per-item dirty tracking.
    pub fn set_position(&mut self, x: i32, y: i32) {
        self.bounds.top_left = Point::new(x, y);
    }

    pub fn set_radius(&mut self, radius: u32) {
        self.radius = radius;
        self.dirty = true;
    }

    pub fn set_label(&mut self, label: &str) {
        if self.label.as_str() != label {
            self.label.clear();
            self.label.push_str(label).ok();
            self.dirty = true;
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_label_align(&mut self, align: Align) {
        self.label_align = align;
    }

    pub fn set_label_offset(&mut self, x: i32, y: i32) {
        self.label_offset = Point::new(x, y);
    }

    pub fn set_icon(&mut self, icon: Glyph) {
        self.icon = Some(icon);
        self.icon_visible = true;
        self.dirty = true;
    }

    pub fn set_icon_align(&mut self, align: Align) {
        self.icon_align = align;
    }

    pub fn set_icon_offset(&mut self, x: i32, y: i32) {
        self.icon_offset = Point::new(x, y);
    }

    pub fn set_border_color(&mut self, color: Rgb565) {
        self.border_color = color;
    }

    /// Raw palette write, no invalidation. The list focus swap rewrites
    /// these every draw and relies on the dirty flag staying untouched.
    pub fn set_fill_color(&mut self, color: Rgb565) {
        self.fill_color = color;
    }

    /// Raw palette write, no invalidation; see
    /// [`set_fill_color`](Self::set_fill_color).
    pub fn set_label_color(&mut self, color: Rgb565) {
        self.label_color = color;
    }

    pub fn set_pressure_threshold(&mut self, threshold: u16) {
        self.pressure_threshold = threshold;
    }

    // ------------------------------------------------------------------
    // Per-layer toggles
    // ------------------------------------------------------------------

    pub fn show_fill(&mut self) {
        self.fill_visible = true;
    }

    pub fn hide_fill(&mut self) {
        self.fill_visible = false;
    }

    pub fn show_border(&mut self) {
        self.border_visible = true;
    }

    pub fn hide_border(&mut self) {
        self.border_visible = false;
    }

    pub fn show_label(&mut self) {
        self.label_visible = true;
    }

    pub fn hide_label(&mut self) {
        self.label_visible = false;
    }

    pub fn show_icon(&mut self) {
        self.icon_visible = true;
    }

    pub fn hide_icon(&mut self) {
        self.icon_visible = false;
    }

    pub fn enable_hover(&mut self) {
        self.hover_enabled = true;
    }

    pub fn disable_hover(&mut self) {
        self.hover_enabled = false;
    }

    pub fn enable_fill_hover(&mut self) {
        self.fill_hover_enabled = true;
    }

    pub fn disable_fill_hover(&mut self) {
        self.fill_hover_enabled = false;
    }

    pub fn enable_border_hover(&mut self) {
        self.border_hover_enabled = true;
    }

    pub fn disable_border_hover(&mut self) {
        self.border_hover_enabled = false;
    }

    pub fn enable_label_hover(&mut self) {
        self.label_hover_enabled = true;
    }

    pub fn disable_label_hover(&mut self) {
        self.label_hover_enabled = false;
    }

    pub fn enable_icon_hover(&mut self) {
        self.icon_hover_enabled = true;
    }

    pub fn disable_icon_hover(&mut self) {
        self.icon_hover_enabled = false;
    }
}
