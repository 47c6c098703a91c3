//! Viewport and geometry configuration constants.
//!
//! The layout is pinned to a 1600x800 viewport. Every other position in
//! [`layout`](crate::layout) is an absolute pixel coordinate inside it.

// =============================================================================
// Display Configuration
// =============================================================================

/// Viewport width in pixels.
pub const SCREEN_WIDTH: u32 = 1600;

/// Viewport height in pixels.
pub const SCREEN_HEIGHT: u32 = 800;

/// Target frame rate of the render loop.
pub const TARGET_FPS: u32 = 60;

// =============================================================================
// Gauge Geometry
// =============================================================================

/// Face radius of a gauge with `radius_scale == 1.0`.
pub const BASE_GAUGE_RADIUS: f32 = 120.0;

/// Width of the bezel ring drawn around each gauge face.
pub const BEZEL_WIDTH: u32 = 5;

/// Sweep of every needle, in degrees.
pub const NEEDLE_SWEEP_DEGREES: f32 = 180.0;

/// Distance from the gauge center to the wide end of the needle.
pub const NEEDLE_PIVOT_DISTANCE: f32 = 10.0;

/// Half-width of the needle's wide end.
pub const NEEDLE_HALF_WIDTH: f32 = 5.0;

// =============================================================================
// Text
// =============================================================================

/// Default glyph height for labels and the mode button.
pub const FONT_SIZE: u32 = 24;

/// Glyph height of the gear letter in the shift indicator.
pub const SHIFT_FONT_SIZE: u32 = 36;
