//! Color constants for the instrument cluster.
//!
//! The cluster targets a desktop window, so colors are 24-bit [`Rgb888`] rather than the
//! 16-bit format native to SPI panels. Standard colors come from the `RgbColor` trait
//! constants; the two grays are application-specific.

use embedded_graphics::pixelcolor::{Rgb888, RgbColor};

// =============================================================================
// Standard Colors (from RgbColor trait)
// =============================================================================

/// Pure black. Screen background, tick labels, small-gauge bezels.
pub const BLACK: Rgb888 = Rgb888::BLACK;

/// Pure white. Gauge faces and text on blue widgets.
pub const WHITE: Rgb888 = Rgb888::WHITE;

/// Pure red. Needles and fuel dash labels.
pub const RED: Rgb888 = Rgb888::RED;

/// Pure green. Fill color in rasterizer tests.
pub const GREEN: Rgb888 = Rgb888::GREEN;

/// Pure blue. Shift indicator and mode button fill.
pub const BLUE: Rgb888 = Rgb888::BLUE;

// =============================================================================
// Custom Colors
// =============================================================================

/// Light gray (192, 192, 192). Large-gauge bezels and the info center frame.
pub const GRAY: Rgb888 = Rgb888::new(192, 192, 192);

/// Dark gray (32, 32, 32). Separator panel behind the center widgets.
pub const DARK_GRAY: Rgb888 = Rgb888::new(32, 32, 32);
