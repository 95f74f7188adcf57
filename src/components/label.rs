//! Free-standing text label with erase-by-previous redrawing
//!
//! Clearing a string by redrawing it in the background color is much
//! cheaper than filling its bounding rectangle, but it requires knowing
//! exactly what is on screen. `previous` always holds the painted text;
//! `current` holds the desired text. A draw converges the two.

use embedded_graphics::mono_font::MonoFont;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use crate::surface::{DrawSurface, TextDatum};

const LABEL_CAPACITY: usize = 64;

/// A positioned string with dirty-flag lifecycle.
pub struct Label {
    position: Point,
    current: heapless::String<LABEL_CAPACITY>,
    previous: heapless::String<LABEL_CAPACITY>,
    fg: Rgb565,
    bg: Rgb565,
    font: Option<&'static MonoFont<'static>>,
    dirty: bool,
    visible: bool,
    was_drawn: bool,
}

impl Label {
    /// Current and previous text start out equal so the first draw does
    /// not erase phantom content.
    pub fn new(text: &str, x: i32, y: i32, fg: Rgb565, bg: Rgb565, visible: bool) -> Self {
        let mut current = heapless::String::new();
        current.push_str(text).ok();

        Self {
            position: Point::new(x, y),
            previous: current.clone(),
            current,
            fg,
            bg,
            font: None,
            dirty: true,
            visible,
            was_drawn: false,
        }
    }

    pub fn with_font(mut self, font: &'static MonoFont<'static>) -> Self {
        self.font = Some(font);
        self
    }

    /// Replace the text. Setting the same value explicitly clears the
    /// dirty flag rather than leaving it untouched.
    pub fn set_text(&mut self, text: &str) {
        if self.current.as_str() != text {
            self.previous = self.current.clone();
            self.current.clear();
            self.current.push_str(text).ok();
            self.dirty = true;
        } else {
            self.dirty = false;
        }
    }

    /// Force a repaint without changing the text (e.g. after a page
    /// switch invalidated the screen).
    pub fn refresh(&mut self) {
        self.dirty = true;
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    /// The on-screen text is cleared on the next draw call.
    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn text(&self) -> &str {
        &self.current
    }

    /// What is currently painted on the surface.
    pub fn displayed_text(&self) -> &str {
        &self.previous
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Draws or erases the label as needed. Issues zero surface calls
    /// when nothing changed.
    pub fn draw<S: DrawSurface>(&mut self, surface: &mut S) -> Result<(), S::Error> {
        if self.visible && (self.dirty || !self.was_drawn) {
            if let Some(font) = self.font {
                surface.load_font(font);
            }
            surface.set_text_datum(TextDatum::TopLeft);

            if self.was_drawn {
                surface.set_text_color(self.bg, self.bg);
                surface.draw_string(&self.previous, self.position.x, self.position.y)?;
            }

            surface.set_text_color(self.fg, self.bg);
            surface.draw_string(&self.current, self.position.x, self.position.y)?;

            self.previous = self.current.clone();
            self.dirty = false;
            self.was_drawn = true;
        } else if !self.visible && self.was_drawn {
            if let Some(font) = self.font {
                surface.load_font(font);
            }
            surface.set_text_datum(TextDatum::TopLeft);
            surface.set_text_color(self.bg, self.bg);

            // A pending text change means `previous` is what is painted.
            let erase = if self.dirty {
                &self.previous
            } else {
                &self.current
            };
            surface.draw_string(erase, self.position.x, self.position.y)?;

            self.was_drawn = false;
        }

        Ok(())
    }
}
