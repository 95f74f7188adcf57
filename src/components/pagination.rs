//! Pagination indicator: a bounded counter rendered as "current/max"
//!
//! Wraps a single [`Button`] and keeps its label in sync with the
//! counter. All mutators validate their input and report rejection with
//! a `bool` instead of clamping silently; accepted mutations rewrite the
//! label and mark the button dirty.

use core::fmt::Write;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::components::button::Button;
use crate::surface::DrawSurface;

/// Bounded `start <= current <= max` counter over one button.
pub struct Pagination {
    button: Button,
    start_value: i32,
    max_value: i32,
    current_value: i32,
}

impl Pagination {
    pub fn new(
        bounds: Rectangle,
        max: i32,
        fill_color: Rgb565,
        label_color: Rgb565,
        border_color: Rgb565,
    ) -> Self {
        let mut pagination = Self {
            button: Button::default(),
            start_value: 1,
            max_value: max,
            current_value: 1,
        };
        pagination.bind(bounds, max, fill_color, label_color, border_color);
        pagination
    }

    pub fn bind(
        &mut self,
        bounds: Rectangle,
        max: i32,
        fill_color: Rgb565,
        label_color: Rgb565,
        border_color: Rgb565,
    ) {
        self.button.bind(bounds, fill_color, label_color, "");
        self.button.set_border_color(border_color);
        self.max_value = max;
        self.start_value = 1;
        self.current_value = 1;
        self.relabel();
    }

    fn relabel(&mut self) {
        let mut label = heapless::String::<24>::new();
        write!(label, "{}/{}", self.current_value, self.max_value).ok();
        self.button.set_label(&label);
        self.button.mark_dirty();
    }

    /// Steps the counter up. No-op at the maximum.
    pub fn increment(&mut self) -> bool {
        if self.current_value >= self.max_value {
            return false;
        }
        self.current_value += 1;
        self.relabel();
        true
    }

    /// Steps the counter down. No-op at the start value.
    pub fn decrement(&mut self) -> bool {
        if self.current_value <= self.start_value {
            return false;
        }
        self.current_value -= 1;
        self.relabel();
        true
    }

    /// Rejects values outside `[start, max]`.
    pub fn set_current_value(&mut self, value: i32) -> bool {
        if value < self.start_value || value > self.max_value {
            return false;
        }
        self.current_value = value;
        self.relabel();
        true
    }

    pub fn current_value(&self) -> i32 {
        self.current_value
    }

    /// Rejects values below the start value.
    pub fn set_max_value(&mut self, value: i32) -> bool {
        if value < self.start_value {
            return false;
        }
        self.max_value = value;
        self.relabel();
        true
    }

    pub fn max_value(&self) -> i32 {
        self.max_value
    }

    /// Rejects values that would break `start <= current <= max`.
    pub fn set_start_value(&mut self, value: i32) -> bool {
        if value > self.max_value || value > self.current_value {
            return false;
        }
        self.start_value = value;
        true
    }

    pub fn start_value(&self) -> i32 {
        self.start_value
    }

    /// Back to the start value.
    pub fn reset(&mut self) {
        self.current_value = self.start_value;
        self.relabel();
    }

    /// The rendered "current/max" text.
    pub fn label(&self) -> &str {
        self.button.label()
    }

    pub fn draw<S: DrawSurface>(&mut self, surface: &mut S) -> Result<(), S::Error> {
        self.button.draw(surface)
    }

    pub fn show(&mut self) {
        self.button.show();
    }

    pub fn hide(&mut self) {
        self.button.hide();
    }

    pub fn enable(&mut self) {
        self.button.enable();
    }

    /// A disabled indicator is frozen in its disabled colors.
    pub fn disable(&mut self) {
        self.button.disable();
    }

    pub fn button(&self) -> &Button {
        &self.button
    }

    pub fn button_mut(&mut self) -> &mut Button {
        &mut self.button
    }
}
