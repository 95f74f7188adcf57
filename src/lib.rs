//! tacto - retained-mode touch widget toolkit for embedded displays
//!
//! Buttons, labels, scrollable lists, pagination indicators and clipped
//! text regions for microcontroller-driven touchscreens, drawn through
//! an injected [`DrawSurface`] and fed by an injected [`TouchSource`].
//! Widgets track their own dirty state and repaint only on change, so a
//! poll loop can call `draw()` every cycle without flicker.
//!
//! The expected cycle, once per iteration of the host's loop:
//!
//! 1. `poll(touch)` every interactive widget (samples touch edges),
//! 2. react to `is_pressed()` events,
//! 3. `draw(surface)` every widget of the active page.
//!
//! It is `#![no_std]` with `extern crate alloc` so it compiles on both
//! embedded targets and desktop hosts (for tests and simulators).

#![no_std]

extern crate alloc;

pub mod components;
pub mod glyph;
pub mod page_manager;
pub mod styling;
pub mod surface;
pub mod touch;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export commonly used items
pub use components::{Align, Button, Label, List, Pagination, TextRegion};
pub use glyph::Glyph;
pub use page_manager::{MAX_PAGES, Page, PageId, PageManager, UiError};
pub use surface::{DrawSurface, EgSurface, TextDatum};
pub use touch::{TouchSample, TouchSource};
