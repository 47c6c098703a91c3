//! Scale label layout for the three labelled gauge families.
//!
//! Each family places its labels with its own rule:
//!
//! | Family | Labels | Angles | Radius |
//! |--------|--------|--------|--------|
//! | Tachometer | `"0"`..`"7"` | −135° then +35° per label, dial frame | 0.9 × gauge radius |
//! | Speedometer | every 10 km/h, 0..=max | `210 − 1.3 · (v/max) · 180` | 0.9 × 140 |
//! | Fuel | 20 dashes | `315 + 12·i` | 0.9 × 85 |
//!
//! Known quirks of the scales:
//!
//! - Tachometer labels step by 35°, not the 270°/7 an even spread over ±135° would give,
//!   so the last label lands at 110°.
//! - Speedometer labels spread 1.3× wider than the needle's 180° sweep and run clockwise
//!   while the needle runs counter-clockwise.
//! - Speedometer labels and fuel dashes use fixed reference radii (140 and 85 px)
//!   whatever the gauge's size.
//!
//! Labels depend only on the [`GaugeSpec`]; they are regenerated every frame.

use core::fmt::Write;

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::Point;
use heapless::{String, Vec};

use crate::colors::{BLACK, RED};
use crate::gauge::{GaugeSpec, polar_point};

/// Maximum number of labels one scale can produce.
pub const MAX_TICK_LABELS: usize = 32;

/// Maximum characters in one label.
pub const TICK_TEXT_LEN: usize = 4;

/// Labels of one gauge, in drawing order.
pub type TickLabels = Vec<TickLabel, MAX_TICK_LABELS>;

// =============================================================================
// Scale Constants
// =============================================================================

/// Label radius as a fraction of the reference radius (all families).
const LABEL_RADIUS_FRACTION: f32 = 0.9;

/// First tachometer label angle in the dial frame.
const TACH_FIRST_ANGLE: i32 = -135;

/// Last permitted tachometer label angle in the dial frame.
const TACH_LAST_ANGLE: i32 = 135;

/// Dial-frame step between tachometer labels.
const TACH_STEP: usize = 35;

/// Tachometer label texts (thousands of rpm).
const TACH_LABELS: [&str; 8] = ["0", "1", "2", "3", "4", "5", "6", "7"];

/// Speed difference between adjacent speedometer labels.
const SPEEDO_STEP: usize = 10;

/// How much wider than the needle sweep the speedometer labels spread.
const SPEEDO_LABEL_SPREAD: f32 = 1.3;

/// The fuel scale string; one dash per slot.
const FUEL_DASHES: &str = "--------------------";

/// Angle of the first fuel dash.
const FUEL_FIRST_ANGLE: f32 = 315.0;

/// Angular width of one fuel dash slot.
const FUEL_SLOT_DEGREES: f32 = 12.0;

/// Fuel dash indices drawn at double size.
const FUEL_MEDIUM_INDICES: [usize; 3] = [4, 9, 14];

/// Fixed reference radius of the speedometer label ring.
const SPEEDO_REFERENCE_RADIUS: f32 = 140.0;

/// Fixed reference radius of the fuel dash ring.
const FUEL_REFERENCE_RADIUS: f32 = 85.0;

// =============================================================================
// Label Types
// =============================================================================

/// Size/weight tier of a label glyph.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum Emphasis {
    /// Base size, regular weight.
    #[default]
    Normal,
    /// Double size, bold.
    Medium,
    /// Triple size, bold.
    Strong,
}

impl Emphasis {
    /// Multiplier applied to the scale's base font size.
    #[inline]
    pub const fn size_factor(self) -> u32 {
        match self {
            Self::Normal => 1,
            Self::Medium => 2,
            Self::Strong => 3,
        }
    }

    #[inline]
    pub const fn is_bold(self) -> bool { !matches!(self, Self::Normal) }
}

/// Reference frame of a label's `angle_degrees`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AngleFrame {
    /// Math convention: 0° right, counter-clockwise positive.
    Standard,
    /// Rotated by 90° and mirrored: 0° at twelve o'clock, clockwise positive.
    Dial,
}

/// One scale label.
#[derive(Clone, PartialEq, Debug)]
pub struct TickLabel {
    pub text: String<TICK_TEXT_LEN>,
    pub angle_degrees: f32,
    pub frame: AngleFrame,
    pub radius_fraction: f32,
    pub emphasis: Emphasis,
}

impl TickLabel {
    /// Angle in the math convention, whatever frame the label was laid out in.
    pub fn math_angle_degrees(&self) -> f32 {
        match self.frame {
            AngleFrame::Standard => self.angle_degrees,
            AngleFrame::Dial => 90.0 - self.angle_degrees,
        }
    }

    /// Screen position of the label's center.
    pub fn anchor(
        &self,
        center: Point,
        reference_radius: f32,
    ) -> Point {
        // Radius is truncated to whole pixels before projecting.
        let radius = (reference_radius * self.radius_fraction) as i32 as f32;
        polar_point(center, radius, self.math_angle_degrees().to_radians())
    }
}

// =============================================================================
// Scale Families
// =============================================================================

/// Label algorithm of a gauge family.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TickScale {
    Tachometer,
    Speedometer,
    Fuel,
}

impl TickScale {
    /// Lay out this family's labels for `spec`.
    pub fn labels(
        self,
        spec: &GaugeSpec,
    ) -> TickLabels {
        match self {
            Self::Tachometer => tachometer_labels(),
            Self::Speedometer => speedometer_labels(spec),
            Self::Fuel => fuel_labels(),
        }
    }

    /// Radius the label `radius_fraction` is measured against.
    pub fn reference_radius(
        self,
        spec: &GaugeSpec,
    ) -> f32 {
        match self {
            Self::Tachometer => spec.gauge_radius() as f32,
            Self::Speedometer => SPEEDO_REFERENCE_RADIUS,
            Self::Fuel => FUEL_REFERENCE_RADIUS,
        }
    }

    /// Glyph height of a [`Emphasis::Normal`] label.
    #[inline]
    pub const fn base_font_size(self) -> u32 {
        match self {
            Self::Tachometer | Self::Speedometer => 24,
            Self::Fuel => 14,
        }
    }

    #[inline]
    pub const fn label_color(self) -> Rgb888 {
        match self {
            Self::Tachometer | Self::Speedometer => BLACK,
            Self::Fuel => RED,
        }
    }
}

fn label(
    text: &str,
    angle_degrees: f32,
    frame: AngleFrame,
    emphasis: Emphasis,
) -> TickLabel {
    let mut buf = String::new();
    buf.push_str(text).ok();
    TickLabel {
        text: buf,
        angle_degrees,
        frame,
        radius_fraction: LABEL_RADIUS_FRACTION,
        emphasis,
    }
}

fn tachometer_labels() -> TickLabels {
    let mut labels = TickLabels::new();
    let angles = (TACH_FIRST_ANGLE..=TACH_LAST_ANGLE).step_by(TACH_STEP);
    for (angle, text) in angles.zip(TACH_LABELS) {
        labels
            .push(label(text, angle as f32, AngleFrame::Dial, Emphasis::Normal))
            .ok();
    }
    labels
}

fn speedometer_labels(spec: &GaugeSpec) -> TickLabels {
    let mut labels = TickLabels::new();
    let max_speed = spec.max_value();
    let start = spec.start_angle_degrees();
    let sweep = spec.sweep_degrees();

    for speed in (spec.min_value() as u32..=max_speed as u32).step_by(SPEEDO_STEP) {
        let angle = start - SPEEDO_LABEL_SPREAD * (speed as f32 / max_speed) * sweep;
        let mut text: String<TICK_TEXT_LEN> = String::new();
        write!(text, "{speed}").ok();
        if labels
            .push(label(&text, angle, AngleFrame::Standard, Emphasis::Normal))
            .is_err()
        {
            break;
        }
    }
    labels
}

fn fuel_labels() -> TickLabels {
    let mut labels = TickLabels::new();
    let last = FUEL_DASHES.len() - 1;

    for (i, dash) in FUEL_DASHES.char_indices() {
        let emphasis = if i == 0 || i == last {
            Emphasis::Strong
        } else if FUEL_MEDIUM_INDICES.contains(&i) {
            Emphasis::Medium
        } else {
            Emphasis::Normal
        };
        let mut text = [0u8; 4];
        let angle = FUEL_FIRST_ANGLE + i as f32 * FUEL_SLOT_DEGREES;
        labels
            .push(label(dash.encode_utf8(&mut text), angle, AngleFrame::Standard, emphasis))
            .ok();
    }
    labels
}

// =============================================================================
// Unit Tests
// =============================================================================
