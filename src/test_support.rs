//! Headless test doubles: a surface that records every issued drawing
//! operation and a touch source driven by the test.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::convert::Infallible;

use embedded_graphics::mono_font::MonoFont;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::surface::{DrawSurface, TextDatum};
use crate::touch::{TouchSample, TouchSource};

#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceOp {
    FillRoundedRect {
        rect: Rectangle,
        radius: u32,
        color: Rgb565,
    },
    StrokeRoundedRect {
        rect: Rectangle,
        radius: u32,
        color: Rgb565,
    },
    Pixel {
        point: Point,
        color: Rgb565,
    },
    DrawString {
        text: String,
        x: i32,
        y: i32,
        fg: Rgb565,
        bg: Rgb565,
        datum: TextDatum,
    },
    SetClip(Rectangle),
    ResetClip,
}

/// Records drawing operations instead of rendering them. State-setting
/// calls (color, datum, font) are folded into the recorded string draws
/// so assertions see the effective state per operation.
pub struct RecordingSurface {
    pub ops: Vec<SurfaceOp>,
    fg: Rgb565,
    bg: Rgb565,
    datum: TextDatum,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self {
            ops: Vec::new(),
            fg: crate::styling::WHITE,
            bg: crate::styling::BLACK,
            datum: TextDatum::default(),
        }
    }

    pub fn clear(&mut self) {
        self.ops.clear();
    }

    pub fn op_count(&self) -> usize {
        self.ops.len()
    }

    /// All recorded string draws as `(text, fg, bg)`.
    pub fn strings(&self) -> Vec<(String, Rgb565, Rgb565)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                SurfaceOp::DrawString { text, fg, bg, .. } => {
                    Some((text.clone(), *fg, *bg))
                }
                _ => None,
            })
            .collect()
    }
}

impl DrawSurface for RecordingSurface {
    type Error = Infallible;

    fn fill_rounded_rect(
        &mut self,
        rect: Rectangle,
        radius: u32,
        color: Rgb565,
    ) -> Result<(), Self::Error> {
        self.ops.push(SurfaceOp::FillRoundedRect {
            rect,
            radius,
            color,
        });
        Ok(())
    }

    fn stroke_rounded_rect(
        &mut self,
        rect: Rectangle,
        radius: u32,
        color: Rgb565,
    ) -> Result<(), Self::Error> {
        self.ops.push(SurfaceOp::StrokeRoundedRect {
            rect,
            radius,
            color,
        });
        Ok(())
    }

    fn draw_pixel(&mut self, point: Point, color: Rgb565) -> Result<(), Self::Error> {
        self.ops.push(SurfaceOp::Pixel { point, color });
        Ok(())
    }

    fn set_text_color(&mut self, fg: Rgb565, bg: Rgb565) {
        self.fg = fg;
        self.bg = bg;
    }

    fn set_text_datum(&mut self, datum: TextDatum) {
        self.datum = datum;
    }

    fn load_font(&mut self, _font: &'static MonoFont<'static>) {}

    fn draw_string(&mut self, text: &str, x: i32, y: i32) -> Result<(), Self::Error> {
        self.ops.push(SurfaceOp::DrawString {
            text: text.to_string(),
            x,
            y,
            fg: self.fg,
            bg: self.bg,
            datum: self.datum,
        });
        Ok(())
    }

    fn set_clip_region(&mut self, rect: Rectangle) {
        self.ops.push(SurfaceOp::SetClip(rect));
    }

    fn reset_clip_region(&mut self) {
        self.ops.push(SurfaceOp::ResetClip);
    }
}

/// Touch source whose state the test sets between poll cycles.
pub struct ScriptedTouch {
    sample: Option<TouchSample>,
}

impl ScriptedTouch {
    pub fn new() -> Self {
        Self { sample: None }
    }

    pub fn press(&mut self, x: i32, y: i32, pressure: u16) {
        self.sample = Some(TouchSample::new(x, y, pressure));
    }

    pub fn release(&mut self) {
        self.sample = None;
    }
}

impl TouchSource for ScriptedTouch {
    fn is_touched(&mut self, _channel: u8) -> bool {
        self.sample.is_some()
    }

    fn sample_point(&mut self) -> TouchSample {
        self.sample.unwrap_or(TouchSample::new(0, 0, 0))
    }
}
