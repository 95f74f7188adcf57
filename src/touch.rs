//! Touch-panel seam
//!
//! The toolkit consumes touch input through [`TouchSource`], one sample
//! at a time. Drivers (capacitive I2C controllers, resistive SPI ADCs)
//! implement it outside this crate; tests implement it with a scripted
//! source.

use embedded_graphics::prelude::*;

/// One raw touch-panel sample in display coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TouchSample {
    pub x: i32,
    pub y: i32,
    /// Reported contact pressure. Capacitive panels that have no Z axis
    /// report a constant non-zero value.
    pub pressure: u16,
}

impl TouchSample {
    pub fn new(x: i32, y: i32, pressure: u16) -> Self {
        Self { x, y, pressure }
    }

    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// A pollable source of touch samples.
pub trait TouchSource {
    /// Whether the panel currently reports contact on `channel`.
    /// Single-touch panels only answer channel 0.
    fn is_touched(&mut self, channel: u8) -> bool;

    /// The most recent sample. Only meaningful right after
    /// [`is_touched`](Self::is_touched) returned true.
    fn sample_point(&mut self) -> TouchSample;
}
