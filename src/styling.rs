//! Default colors and behavior constants for widgets
//!
//! RGB565 format, 16-bit color depth:
//! - Red: 5 bits (0-31)
//! - Green: 6 bits (0-63)
//! - Blue: 5 bits (0-31)

use embedded_graphics::pixelcolor::Rgb565;

// ============================================================================
// Base Colors
// ============================================================================

/// Pure white - maximum brightness in RGB565
pub const WHITE: Rgb565 = Rgb565::new(31, 63, 31);

/// Pure black
pub const BLACK: Rgb565 = Rgb565::new(0, 0, 0);

/// Full-intensity yellow
pub const YELLOW: Rgb565 = Rgb565::new(31, 63, 0);

// ============================================================================
// Widget Defaults
// ============================================================================

/// Default button border color
pub const DEFAULT_BORDER_COLOR: Rgb565 = WHITE;

/// Default button border color while touched
pub const DEFAULT_BORDER_HOVER_COLOR: Rgb565 = BLACK;

/// Default button fill color while touched
pub const DEFAULT_FILL_HOVER_COLOR: Rgb565 = YELLOW;

/// Default button label color while touched
pub const DEFAULT_LABEL_HOVER_COLOR: Rgb565 = BLACK;

/// Default icon color
pub const DEFAULT_ICON_COLOR: Rgb565 = WHITE;

/// Default icon color while touched
pub const DEFAULT_ICON_HOVER_COLOR: Rgb565 = BLACK;

/// Foreground color of disabled widgets
pub const DISABLED_FG_COLOR: Rgb565 = BLACK;

/// Fill color of disabled widgets
pub const DISABLED_BG_COLOR: Rgb565 = BLACK;

/// Default corner radius of buttons, in pixels
pub const DEFAULT_CORNER_RADIUS: u32 = 3;

/// Minimum pressure a touch sample must report to count as a hit.
/// Zero means any contact counts; resistive panels that report a
/// meaningful Z axis can raise this per button.
pub const PRESSURE_THRESHOLD: u16 = 0;
