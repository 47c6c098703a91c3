//! Fixed panel layout for the 1600x800 viewport.
//!
//! All positions are absolute pixels, pre-computed as `const` in the same way the cell
//! grid of the small-screen dashboard is. The table is pure data; behaviour lives in
//! the compositor.
//!
//! ```text
//!   (515,360) TACH     (655,210) TEMP  (800,225) GEAR  (945,210) FUEL     (1085,360) SPEED
//!                        [ separator 550x250 + info center 150x200 @ (800,400) ]
//!  [MODE] (25,750) 125x50
//! ```
//!
//! # Limitations
//!
//! The layout does not scale with the viewport. Supporting another resolution means
//! providing another table.

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::{ContainsPoint, Rectangle};

use crate::colors::{BLACK, BLUE, DARK_GRAY, GRAY};
use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::gauge::{GaugeKind, GaugeSpec};
use crate::ticks::TickScale;

// =============================================================================
// Pre-computed Layout Constants
// =============================================================================

/// Center of the separator panel and the info center.
const PANEL_CENTER: Point = Point::new(800, 400);

const SEPARATOR_SIZE: Size = Size::new(550, 250);

const INFO_CENTER_SIZE: Size = Size::new(150, 200);

const INFO_CENTER_BEZEL: u32 = 5;

const SHIFT_INDICATOR_CENTER: Point = Point::new(800, 225);

const SHIFT_INDICATOR_SIZE: Size = Size::new(50, 50);

const MODE_BUTTON_SIZE: Size = Size::new(125, 50);

/// Mode button hugs the bottom edge, 25 px in from the left.
const MODE_BUTTON_ORIGIN: Point = Point::new(25, (SCREEN_HEIGHT - MODE_BUTTON_SIZE.height) as i32);

/// Small gauges (temperature, fuel) are two thirds of the base size.
const SMALL_GAUGE_SCALE: f32 = 2.0 / 3.0;

/// Large gauges (tachometer, speedometer) are 1.3× the base size.
const LARGE_GAUGE_SCALE: f32 = 1.3;

const TEMP_START: f32 = 315.0;
const TACHOMETER_START: f32 = 225.0;
const FUEL_START: f32 = 225.0;
const SPEEDOMETER_START: f32 = 210.0;

const TEMP_MAX: f32 = 100.0;
const TACHOMETER_MAX: f32 = 8000.0;
const FUEL_MAX: f32 = 100.0;
const SPEEDOMETER_MAX: f32 = 120.0;

// =============================================================================
// Layout Types
// =============================================================================

/// A filled rectangle positioned by its center.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct CenteredBox {
    pub center: Point,
    pub size: Size,
    pub color: Rgb888,
}

impl CenteredBox {
    /// Top-left corner, using integer halving like the rest of the pixel math.
    pub const fn top_left(&self) -> Point {
        Point::new(
            self.center.x - (self.size.width / 2) as i32,
            self.center.y - (self.size.height / 2) as i32,
        )
    }

    pub const fn rectangle(&self) -> Rectangle { Rectangle::new(self.top_left(), self.size) }
}

/// One gauge position on the panel.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct GaugeSlot {
    pub kind: GaugeKind,
    pub spec: GaugeSpec,
    pub bezel: Rgb888,
    /// Scale labels drawn over the face, if any.
    pub scale: Option<TickScale>,
}

/// Complete panel composition.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct PanelLayout {
    pub viewport: Size,
    pub separator: CenteredBox,
    pub info_center: CenteredBox,
    /// Bezel ring width around the info center.
    pub info_center_bezel: u32,
    pub info_center_bezel_color: Rgb888,
    pub shift_indicator: CenteredBox,
    /// Temperature, tachometer, fuel, speedometer.
    pub gauges: [GaugeSlot; 4],
    pub mode_button: Rectangle,
    pub mode_button_color: Rgb888,
}

impl PanelLayout {
    /// The 1600x800 cluster layout.
    pub const fn standard() -> Self {
        Self {
            viewport: Size::new(SCREEN_WIDTH, SCREEN_HEIGHT),
            separator: CenteredBox {
                center: PANEL_CENTER,
                size: SEPARATOR_SIZE,
                color: DARK_GRAY,
            },
            info_center: CenteredBox {
                center: PANEL_CENTER,
                size: INFO_CENTER_SIZE,
                color: BLACK,
            },
            info_center_bezel: INFO_CENTER_BEZEL,
            info_center_bezel_color: GRAY,
            shift_indicator: CenteredBox {
                center: SHIFT_INDICATOR_CENTER,
                size: SHIFT_INDICATOR_SIZE,
                color: BLUE,
            },
            gauges: [
                GaugeSlot {
                    kind: GaugeKind::Temperature,
                    spec: GaugeSpec::new(0.0, TEMP_MAX, TEMP_START, Point::new(655, 210), SMALL_GAUGE_SCALE),
                    bezel: BLACK,
                    scale: None,
                },
                GaugeSlot {
                    kind: GaugeKind::Tachometer,
                    spec: GaugeSpec::new(
                        0.0,
                        TACHOMETER_MAX,
                        TACHOMETER_START,
                        Point::new(515, 360),
                        LARGE_GAUGE_SCALE,
                    ),
                    bezel: GRAY,
                    scale: Some(TickScale::Tachometer),
                },
                GaugeSlot {
                    kind: GaugeKind::Fuel,
                    spec: GaugeSpec::new(0.0, FUEL_MAX, FUEL_START, Point::new(945, 210), SMALL_GAUGE_SCALE),
                    bezel: BLACK,
                    scale: Some(TickScale::Fuel),
                },
                GaugeSlot {
                    kind: GaugeKind::Speedometer,
                    spec: GaugeSpec::new(
                        0.0,
                        SPEEDOMETER_MAX,
                        SPEEDOMETER_START,
                        Point::new(1085, 360),
                        LARGE_GAUGE_SCALE,
                    ),
                    bezel: GRAY,
                    scale: Some(TickScale::Speedometer),
                },
            ],
            mode_button: Rectangle::new(MODE_BUTTON_ORIGIN, MODE_BUTTON_SIZE),
            mode_button_color: BLUE,
        }
    }

    /// Slot of the given gauge.
    pub fn gauge(
        &self,
        kind: GaugeKind,
    ) -> &GaugeSlot {
        // Every layout carries exactly one slot per kind.
        let index = match kind {
            GaugeKind::Temperature => 0,
            GaugeKind::Tachometer => 1,
            GaugeKind::Fuel => 2,
            GaugeKind::Speedometer => 3,
        };
        &self.gauges[index]
    }

    /// Center of the mode button label.
    pub const fn mode_button_center(&self) -> Point {
        Point::new(
            self.mode_button.top_left.x + (self.mode_button.size.width / 2) as i32,
            self.mode_button.top_left.y + (self.mode_button.size.height / 2) as i32,
        )
    }

    /// Whether `point` lies on a pixel the mode button paints.
    pub fn mode_button_contains(
        &self,
        point: Point,
    ) -> bool {
        self.mode_button.contains(point)
    }
}

// Gauge range checks in `GaugeSpec::new` run at compile time for the standard table.
const _: PanelLayout = PanelLayout::standard();

impl Default for PanelLayout {
    fn default() -> Self { Self::standard() }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gauge_lookup_matches_kind() {
        let layout = PanelLayout::standard();
        for kind in [
            GaugeKind::Temperature,
            GaugeKind::Tachometer,
            GaugeKind::Fuel,
            GaugeKind::Speedometer,
        ] {
            assert_eq!(layout.gauge(kind).kind, kind);
        }
    }

    #[test]
    fn test_gauge_positions() {
        let layout = PanelLayout::standard();
        assert_eq!(layout.gauge(GaugeKind::Temperature).spec.center(), Point::new(655, 210));
        assert_eq!(layout.gauge(GaugeKind::Tachometer).spec.center(), Point::new(515, 360));
        assert_eq!(layout.gauge(GaugeKind::Fuel).spec.center(), Point::new(945, 210));
        assert_eq!(layout.gauge(GaugeKind::Speedometer).spec.center(), Point::new(1085, 360));
        assert_eq!(layout.gauge(GaugeKind::Tachometer).spec.gauge_radius(), 156);
        assert_eq!(layout.gauge(GaugeKind::Fuel).spec.gauge_radius(), 80);
    }

    #[test]
    fn test_only_temperature_is_unlabelled() {
        let layout = PanelLayout::standard();
        assert_eq!(layout.gauge(GaugeKind::Temperature).scale, None);
        assert_eq!(layout.gauge(GaugeKind::Fuel).scale, Some(TickScale::Fuel));
    }

    #[test]
    fn test_centered_boxes() {
        let layout = PanelLayout::standard();
        assert_eq!(layout.separator.top_left(), Point::new(525, 275));
        assert_eq!(layout.info_center.top_left(), Point::new(725, 300));
        assert_eq!(layout.shift_indicator.top_left(), Point::new(775, 200));
    }

    #[test]
    fn test_mode_button_geometry() {
        let layout = PanelLayout::standard();
        assert_eq!(layout.mode_button.top_left, Point::new(25, 750));
        assert_eq!(layout.mode_button.size, Size::new(125, 50));
        assert_eq!(layout.mode_button_center(), Point::new(87, 775));
    }

    #[test]
    fn test_mode_button_hit_test_matches_painted_pixels() {
        let layout = PanelLayout::standard();
        assert!(layout.mode_button_contains(Point::new(25, 750)));
        assert!(layout.mode_button_contains(Point::new(149, 799)));
        assert!(layout.mode_button_contains(Point::new(87, 775)));
        assert!(!layout.mode_button_contains(Point::new(24, 775)));
        assert!(!layout.mode_button_contains(Point::new(150, 775)));
        assert!(!layout.mode_button_contains(Point::new(87, 749)));
        assert!(!layout.mode_button_contains(Point::new(87, 800)));
        assert!(!layout.mode_button_contains(Point::new(800, 400)));
    }
}
