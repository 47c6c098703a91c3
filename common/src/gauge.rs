//! Gauge descriptors and the value-to-needle mapping.
//!
//! Every gauge on the panel is described by an immutable [`GaugeSpec`]: its value range,
//! the angle its needle rests at for the minimum value, and where and how large it is
//! drawn. The needle sweeps counter-clockwise (increasing math angle) through
//! [`NEEDLE_SWEEP_DEGREES`] as the value goes from minimum to maximum.
//!
//! # Angle Conventions
//!
//! Angles follow the math convention: 0° points right, 90° points up. Screen Y grows
//! downward, so a point at angle `a` and distance `r` from the center is
//! `(cx + r·cos a, cy − r·sin a)`.
//!
//! # Out-of-Range Values
//!
//! [`GaugeSpec::needle_angle`] does not clamp. A fuel level of 110 % puts the needle past
//! the end of the scale, exactly like the analog cluster this models. Callers that want a
//! pinned needle use [`GaugeSpec::needle_angle_clamped`] (see [`NeedlePolicy`]).

use embedded_graphics::prelude::Point;

use crate::config::{BASE_GAUGE_RADIUS, NEEDLE_HALF_WIDTH, NEEDLE_PIVOT_DISTANCE, NEEDLE_SWEEP_DEGREES};

/// Which physical gauge a descriptor belongs to.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GaugeKind {
    /// Engine coolant temperature, 0-100 °C.
    Temperature,
    /// Engine speed, 0-8000 rpm.
    Tachometer,
    /// Fuel level, 0-100 %.
    Fuel,
    /// Vehicle speed, 0-120 km/h.
    Speedometer,
}

/// How a needle treats values outside the gauge range.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum NeedlePolicy {
    /// Needle follows the raw value, even past either end of the scale.
    #[default]
    Unclamped,
    /// Needle stops at the ends of the scale.
    Clamped,
}

/// Immutable descriptor of one gauge.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct GaugeSpec {
    min_value: f32,
    max_value: f32,
    start_angle_degrees: f32,
    sweep_degrees: f32,
    center: Point,
    radius_scale: f32,
}

impl GaugeSpec {
    /// Build a gauge descriptor.
    ///
    /// # Panics
    ///
    /// Panics if `max_value <= min_value` or `radius_scale <= 0`. Layout tables are
    /// `const`, so a bad table fails to compile rather than panicking at runtime.
    pub const fn new(
        min_value: f32,
        max_value: f32,
        start_angle_degrees: f32,
        center: Point,
        radius_scale: f32,
    ) -> Self {
        assert!(max_value > min_value, "gauge max must exceed min");
        assert!(radius_scale > 0.0, "gauge radius scale must be positive");
        Self {
            min_value,
            max_value,
            start_angle_degrees,
            sweep_degrees: NEEDLE_SWEEP_DEGREES,
            center,
            radius_scale,
        }
    }

    #[inline]
    pub const fn min_value(&self) -> f32 { self.min_value }

    #[inline]
    pub const fn max_value(&self) -> f32 { self.max_value }

    #[inline]
    pub const fn start_angle_degrees(&self) -> f32 { self.start_angle_degrees }

    #[inline]
    pub const fn sweep_degrees(&self) -> f32 { self.sweep_degrees }

    #[inline]
    pub const fn center(&self) -> Point { self.center }

    #[inline]
    pub const fn radius_scale(&self) -> f32 { self.radius_scale }

    /// Face radius in pixels (`120 × radius_scale`, truncated).
    #[inline]
    pub fn gauge_radius(&self) -> u32 { (BASE_GAUGE_RADIUS * self.radius_scale) as u32 }

    /// Needle angle in radians for `value`. Not clamped.
    pub fn needle_angle(
        &self,
        value: f32,
    ) -> f32 {
        let fraction = (value - self.min_value) / (self.max_value - self.min_value);
        (self.start_angle_degrees + fraction * self.sweep_degrees).to_radians()
    }

    /// Needle angle in radians for `value` pinned into `[min_value, max_value]`.
    pub fn needle_angle_clamped(
        &self,
        value: f32,
    ) -> f32 {
        self.needle_angle(value.clamp(self.min_value, self.max_value))
    }

    /// Needle angle under the given policy.
    pub fn needle_angle_with(
        &self,
        value: f32,
        policy: NeedlePolicy,
    ) -> f32 {
        match policy {
            NeedlePolicy::Unclamped => self.needle_angle(value),
            NeedlePolicy::Clamped => self.needle_angle_clamped(value),
        }
    }

    /// Needle triangle for an angle in radians: `[tip, base_a, base_b]`.
    ///
    /// The tip sits on the face edge; the base straddles the pivot point 10 px out from
    /// the center, offset ±5 px along the perpendicular.
    pub fn needle_triangle(
        &self,
        angle: f32,
    ) -> [Point; 3] {
        let tip = polar_point(self.center, self.gauge_radius() as f32, angle);

        let (sin, cos) = sin_cos(angle);
        let pivot_x = self.center.x as f32 + NEEDLE_PIVOT_DISTANCE * cos;
        let pivot_y = self.center.y as f32 - NEEDLE_PIVOT_DISTANCE * sin;
        // Perpendicular to the screen-space direction (cos, -sin).
        let (perp_x, perp_y) = (sin * NEEDLE_HALF_WIDTH, cos * NEEDLE_HALF_WIDTH);

        [
            tip,
            Point::new((pivot_x + perp_x) as i32, (pivot_y + perp_y) as i32),
            Point::new((pivot_x - perp_x) as i32, (pivot_y - perp_y) as i32),
        ]
    }
}

/// Point at `radius` from `center` along `angle` (radians), truncated toward zero.
pub fn polar_point(
    center: Point,
    radius: f32,
    angle: f32,
) -> Point {
    let (sin, cos) = sin_cos(angle);
    Point::new(
        (center.x as f32 + radius * cos) as i32,
        (center.y as f32 - radius * sin) as i32,
    )
}

#[inline]
fn sin_cos(angle: f32) -> (f32, f32) {
    let a = micromath::F32(angle);
    (a.sin().0, a.cos().0)
}

// =============================================================================
// Unit Tests
// =============================================================================
