//! Drawing-surface seam between widgets and the display driver
//!
//! Widgets never talk to a display directly. Every draw call goes through
//! the [`DrawSurface`] trait, injected per call, which keeps the toolkit
//! headless-testable: a mock surface can record every issued operation.
//!
//! [`EgSurface`] is the production implementation, wrapping any
//! embedded-graphics [`DrawTarget`] with `Rgb565` color.

use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::mono_font::{MonoFont, MonoTextStyleBuilder, ascii::FONT_6X10};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle, RoundedRectangle};
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyle, TextStyleBuilder};

/// Anchor datum used when drawing a string.
///
/// The datum decides which point of the rendered text lands on the
/// coordinates passed to [`DrawSurface::draw_string`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextDatum {
    /// Top-left corner of the text (the surface default)
    #[default]
    TopLeft,
    /// Top edge, horizontally centered
    TopCenter,
    /// Left edge, vertically centered
    MiddleLeft,
    /// Dead center of the text
    MiddleCenter,
    /// Right edge, vertically centered
    MiddleRight,
    /// Bottom edge, horizontally centered
    BottomCenter,
}

impl TextDatum {
    fn text_style(self) -> TextStyle {
        let (alignment, baseline) = match self {
            TextDatum::TopLeft => (Alignment::Left, Baseline::Top),
            TextDatum::TopCenter => (Alignment::Center, Baseline::Top),
            TextDatum::MiddleLeft => (Alignment::Left, Baseline::Middle),
            TextDatum::MiddleCenter => (Alignment::Center, Baseline::Middle),
            TextDatum::MiddleRight => (Alignment::Right, Baseline::Middle),
            TextDatum::BottomCenter => (Alignment::Center, Baseline::Bottom),
        };

        TextStyleBuilder::new()
            .alignment(alignment)
            .baseline(baseline)
            .build()
    }
}

/// Primitive drawing operations a display must provide.
///
/// The text pipeline is stateful, matching the TFT-driver model the
/// widgets were designed around: color pair, datum and font are set
/// first, then [`draw_string`](Self::draw_string) uses them. Passing the
/// background color along with the foreground is what makes
/// erase-by-redraw work (drawing a string bg-on-bg clears it).
pub trait DrawSurface {
    type Error;

    /// Fill a rounded rectangle. A radius of zero fills a plain rect.
    fn fill_rounded_rect(
        &mut self,
        rect: Rectangle,
        radius: u32,
        color: Rgb565,
    ) -> Result<(), Self::Error>;

    /// Stroke the one-pixel outline of a rounded rectangle.
    fn stroke_rounded_rect(
        &mut self,
        rect: Rectangle,
        radius: u32,
        color: Rgb565,
    ) -> Result<(), Self::Error>;

    /// Draw a single pixel.
    fn draw_pixel(&mut self, point: Point, color: Rgb565) -> Result<(), Self::Error>;

    /// Set the foreground/background color pair used by subsequent
    /// string draws.
    fn set_text_color(&mut self, fg: Rgb565, bg: Rgb565);

    /// Set the alignment datum used by subsequent string draws.
    fn set_text_datum(&mut self, datum: TextDatum);

    /// Select the font used by subsequent string draws.
    fn load_font(&mut self, font: &'static MonoFont<'static>);

    /// Draw `text` with the current color pair, datum and font, anchored
    /// at `(x, y)`.
    fn draw_string(&mut self, text: &str, x: i32, y: i32) -> Result<(), Self::Error>;

    /// Restrict all subsequent operations to `rect`.
    fn set_clip_region(&mut self, rect: Rectangle);

    /// Remove any clip restriction.
    fn reset_clip_region(&mut self);
}

/// [`DrawSurface`] implementation over any embedded-graphics target.
pub struct EgSurface<D> {
    target: D,
    font: &'static MonoFont<'static>,
    text_fg: Rgb565,
    text_bg: Rgb565,
    datum: TextDatum,
    clip: Option<Rectangle>,
}

impl<D> EgSurface<D>
where
    D: DrawTarget<Color = Rgb565>,
{
    pub fn new(target: D) -> Self {
        Self {
            target,
            font: &FONT_6X10,
            text_fg: crate::styling::WHITE,
            text_bg: crate::styling::BLACK,
            datum: TextDatum::default(),
            clip: None,
        }
    }

    /// Access the wrapped target, e.g. to flush a buffered display.
    pub fn target_mut(&mut self) -> &mut D {
        &mut self.target
    }

    pub fn into_target(self) -> D {
        self.target
    }
}

impl<D> DrawSurface for EgSurface<D>
where
    D: DrawTarget<Color = Rgb565>,
{
    type Error = D::Error;

    fn fill_rounded_rect(
        &mut self,
        rect: Rectangle,
        radius: u32,
        color: Rgb565,
    ) -> Result<(), Self::Error> {
        let styled = RoundedRectangle::with_equal_corners(rect, Size::new(radius, radius))
            .into_styled(PrimitiveStyle::with_fill(color));

        match self.clip {
            Some(clip) => styled.draw(&mut self.target.clipped(&clip)),
            None => styled.draw(&mut self.target),
        }
    }

    fn stroke_rounded_rect(
        &mut self,
        rect: Rectangle,
        radius: u32,
        color: Rgb565,
    ) -> Result<(), Self::Error> {
        let styled = RoundedRectangle::with_equal_corners(rect, Size::new(radius, radius))
            .into_styled(PrimitiveStyle::with_stroke(color, 1));

        match self.clip {
            Some(clip) => styled.draw(&mut self.target.clipped(&clip)),
            None => styled.draw(&mut self.target),
        }
    }

    fn draw_pixel(&mut self, point: Point, color: Rgb565) -> Result<(), Self::Error> {
        let pixel = Pixel(point, color);

        match self.clip {
            Some(clip) => pixel.draw(&mut self.target.clipped(&clip)),
            None => pixel.draw(&mut self.target),
        }
    }

    fn set_text_color(&mut self, fg: Rgb565, bg: Rgb565) {
        self.text_fg = fg;
        self.text_bg = bg;
    }

    fn set_text_datum(&mut self, datum: TextDatum) {
        self.datum = datum;
    }

    fn load_font(&mut self, font: &'static MonoFont<'static>) {
        self.font = font;
    }

    fn draw_string(&mut self, text: &str, x: i32, y: i32) -> Result<(), Self::Error> {
        let character_style = MonoTextStyleBuilder::new()
            .font(self.font)
            .text_color(self.text_fg)
            .background_color(self.text_bg)
            .build();

        let styled = Text::with_text_style(
            text,
            Point::new(x, y),
            character_style,
            self.datum.text_style(),
        );

        match self.clip {
            Some(clip) => styled.draw(&mut self.target.clipped(&clip)).map(|_| ()),
            None => styled.draw(&mut self.target).map(|_| ()),
        }
    }

    fn set_clip_region(&mut self, rect: Rectangle) {
        self.clip = Some(rect);
    }

    fn reset_clip_region(&mut self) {
        self.clip = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use core::convert::Infallible;

    /// Minimal pixel-collecting target for exercising the adapter.
    struct PixelSink {
        pixels: Vec<(Point, Rgb565)>,
    }

    impl PixelSink {
        fn new() -> Self {
            Self { pixels: Vec::new() }
        }
    }

    impl OriginDimensions for PixelSink {
        fn size(&self) -> Size {
            Size::new(240, 320)
        }
    }

    impl DrawTarget for PixelSink {
        type Color = Rgb565;
        type Error = Infallible;

        fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
        where
            I: IntoIterator<Item = Pixel<Rgb565>>,
        {
            for Pixel(point, color) in pixels {
                self.pixels.push((point, color));
            }
            Ok(())
        }
    }

    #[test]
    fn fill_square_rect_covers_area() {
        let mut surface = EgSurface::new(PixelSink::new());
        let rect = Rectangle::new(Point::new(2, 3), Size::new(4, 5));
        surface
            .fill_rounded_rect(rect, 0, crate::styling::YELLOW)
            .unwrap();

        let sink = surface.into_target();
        assert_eq!(sink.pixels.len(), 20);
        assert!(sink.pixels.iter().all(|(p, _)| rect.contains(*p)));
    }

    #[test]
    fn clip_region_filters_pixels() {
        let mut surface = EgSurface::new(PixelSink::new());
        let clip = Rectangle::new(Point::new(10, 10), Size::new(4, 4));

        surface.set_clip_region(clip);
        surface
            .draw_pixel(Point::new(0, 0), crate::styling::WHITE)
            .unwrap();
        surface
            .draw_pixel(Point::new(11, 11), crate::styling::WHITE)
            .unwrap();
        surface.reset_clip_region();
        surface
            .draw_pixel(Point::new(0, 0), crate::styling::WHITE)
            .unwrap();

        let sink = surface.into_target();
        let points: Vec<Point> = sink.pixels.iter().map(|(p, _)| *p).collect();
        assert_eq!(points, [Point::new(11, 11), Point::new(0, 0)]);
    }

    #[test]
    fn draw_string_emits_foreground_and_background() {
        let mut surface = EgSurface::new(PixelSink::new());
        surface.set_text_color(crate::styling::WHITE, crate::styling::BLACK);
        surface.draw_string("A", 10, 10).unwrap();

        let sink = surface.into_target();
        assert!(
            sink.pixels
                .iter()
                .any(|(_, c)| *c == crate::styling::WHITE)
        );
        assert!(
            sink.pixels
                .iter()
                .any(|(_, c)| *c == crate::styling::BLACK)
        );
    }
}
