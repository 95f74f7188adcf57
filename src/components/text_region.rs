//! Bordered, clipped text viewport
//!
//! Two nested rectangles: the outer area carries the background and
//! border, the inner area (outer minus padding) clips the text. Any
//! repaint is a full repaint; there is no line-level diffing.
//!
//! Text mutators deliberately do not set the dirty flag: `draw` compares
//! `text` against `prev_text` and repaints on inequality, so mutations
//! are always picked up. [`TextRegion::update`] exists to force a
//! repaint when the text itself is unchanged (e.g. a color change).

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::surface::{DrawSurface, TextDatum};

const TEXT_CAPACITY: usize = 256;

const DEFAULT_BORDER_THICKNESS: u32 = 2;

pub struct TextRegion {
    outer: Rectangle,
    inner: Rectangle,
    border_thickness: u32,
    name: &'static str,

    text: heapless::String<TEXT_CAPACITY>,
    prev_text: heapless::String<TEXT_CAPACITY>,

    fg: Rgb565,
    bg: Rgb565,
    border_color: Rgb565,

    visible: bool,
    text_enabled: bool,
    dirty: bool,
}

impl TextRegion {
    /// The inner rect starts out equal to the outer rect; padding shrinks
    /// it.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        fg: Rgb565,
        bg: Rgb565,
        border_color: Rgb565,
        name: &'static str,
    ) -> Self {
        let outer = Rectangle::new(Point::new(x, y), Size::new(width, height));
        Self {
            outer,
            inner: outer,
            border_thickness: DEFAULT_BORDER_THICKNESS,
            name,
            text: heapless::String::new(),
            prev_text: heapless::String::new(),
            fg,
            bg,
            border_color,
            visible: true,
            text_enabled: true,
            dirty: true,
        }
    }

    /// Recomputes the inner rect. Each positive padding component pulls
    /// that edge in; non-positive components leave the edge at the outer
    /// bound. The inner rect never leaves the outer rect.
    pub fn set_padding(&mut self, left: i32, top: i32, right: i32, bottom: i32) {
        let mut x = self.outer.top_left.x;
        let mut y = self.outer.top_left.y;
        let mut width = self.outer.size.width as i32;
        let mut height = self.outer.size.height as i32;

        if left > 0 {
            x += left;
            width -= left;
        }
        if top > 0 {
            y += top;
            height -= top;
        }
        if right > 0 {
            width -= right;
        }
        if bottom > 0 {
            height -= bottom;
        }

        self.inner = Rectangle::new(
            Point::new(x, y),
            Size::new(width.max(0) as u32, height.max(0) as u32),
        );
    }

    pub fn inner_rect(&self) -> Rectangle {
        self.inner
    }

    pub fn outer_rect(&self) -> Rectangle {
        self.outer
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn set_border_thickness(&mut self, thickness: u32) {
        self.border_thickness = thickness;
    }

    /// Tracks the previous text for erase decisions but does not dirty;
    /// the next draw notices the inequality by itself.
    pub fn set_text(&mut self, text: &str) {
        if self.text.as_str() != text {
            self.prev_text = self.text.clone();
            self.text.clear();
            self.text.push_str(text).ok();
        }
    }

    pub fn append_text(&mut self, text: &str) {
        if !text.is_empty() {
            self.prev_text = self.text.clone();
            self.text.push_str(text).ok();
        }
    }

    pub fn clear_text(&mut self) {
        if !self.text.is_empty() {
            self.prev_text = self.text.clone();
            self.text.clear();
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Forces a repaint even when the text is unchanged.
    pub fn update(&mut self) {
        self.dirty = true;
    }

    pub fn reset(&mut self) {
        self.dirty = true;
    }

    pub fn enable_text(&mut self) {
        self.text_enabled = true;
    }

    /// Disabling the built-in text stops draws entirely; manual drawing
    /// through [`open`](Self::open)/[`close`](Self::close) is unaffected.
    pub fn disable_text(&mut self) {
        self.text_enabled = false;
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    fn paint_frame<S: DrawSurface>(&self, surface: &mut S) -> Result<(), S::Error> {
        surface.fill_rounded_rect(self.outer, 0, self.bg)?;

        for inset in 0..self.border_thickness as i32 {
            let width = self.outer.size.width as i32 - 2 * inset;
            let height = self.outer.size.height as i32 - 2 * inset;
            if width <= 0 || height <= 0 {
                break;
            }
            let ring = Rectangle::new(
                self.outer.top_left + Point::new(inset, inset),
                Size::new(width as u32, height as u32),
            );
            surface.stroke_rounded_rect(ring, 0, self.border_color)?;
        }
        Ok(())
    }

    /// Repaints the region when the text changed or a repaint was forced.
    pub fn draw<S: DrawSurface>(&mut self, surface: &mut S) -> Result<(), S::Error> {
        if !self.visible || !self.text_enabled {
            return Ok(());
        }
        if self.text == self.prev_text && !self.dirty {
            return Ok(());
        }

        self.paint_frame(surface)?;
        surface.set_clip_region(self.inner);

        if !self.text.is_empty() {
            surface.set_text_color(self.fg, self.bg);
            surface.set_text_datum(TextDatum::TopLeft);
            surface.draw_string(&self.text, self.inner.top_left.x, self.inner.top_left.y)?;
        }

        self.prev_text = self.text.clone();
        self.dirty = false;

        surface.reset_clip_region();
        Ok(())
    }

    /// Unconditionally paints the frame and establishes the inner clip so
    /// the caller can draw into the region manually. Pair with
    /// [`close`](Self::close).
    pub fn open<S: DrawSurface>(&mut self, surface: &mut S) -> Result<(), S::Error> {
        if !self.visible {
            return Ok(());
        }
        self.paint_frame(surface)?;
        surface.set_clip_region(self.inner);
        Ok(())
    }

    /// Releases all clipping, restoring the full surface.
    pub fn close<S: DrawSurface>(&self, surface: &mut S) {
        surface.reset_clip_region();
    }
}
