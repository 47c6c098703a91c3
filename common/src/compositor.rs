//! Frame composition: telemetry + mode + layout in, draw list out.
//!
//! Composition is a pure function. It never touches a display, so the whole panel can
//! be checked in tests by inspecting the returned [`Frame`].
//!
//! # Draw Order
//!
//! Every mode starts by clearing the viewport and ends with the mode button. In
//! [`DisplayMode::Dashboard`] the panel is drawn back to front:
//!
//! 1. Separator panel and info center (with bezel)
//! 2. Temperature gauge
//! 3. Tachometer, then its labels
//! 4. Shift indicator
//! 5. Fuel gauge, then its dash labels
//! 6. Speedometer, then its labels
//!
//! Each gauge is a bezel circle, a white face, a red needle triangle and its labels.
//! The other modes draw nothing between the clear and the button.

use embedded_graphics::prelude::{Point, Size};

use crate::colors::{BLACK, RED, WHITE};
use crate::config::{BEZEL_WIDTH, FONT_SIZE, SHIFT_FONT_SIZE};
use crate::draw::{DrawPrimitive, Frame};
use crate::gauge::{GaugeKind, NeedlePolicy};
use crate::layout::{GaugeSlot, PanelLayout};
use crate::pages::DisplayMode;
use crate::state::AppState;
use crate::telemetry::TelemetrySnapshot;

/// Text shown in the shift indicator while the gear is unknown.
pub const UNKNOWN_GEAR: &str = "-";

/// Compose the frame for the current application state.
pub fn compose(
    state: &AppState,
    layout: &PanelLayout,
) -> Frame {
    compose_frame(&state.snapshot, state.modes.mode(), layout, state.needle_policy)
}

/// Compose one frame from explicit inputs.
pub fn compose_frame(
    snapshot: &TelemetrySnapshot,
    mode: DisplayMode,
    layout: &PanelLayout,
    policy: NeedlePolicy,
) -> Frame {
    let mut frame = Frame::new();

    frame.push(DrawPrimitive::rectangle(Point::zero(), layout.viewport, BLACK));

    match mode {
        DisplayMode::Dashboard => draw_dashboard(&mut frame, snapshot, layout, policy),
        // Placeholder views: blank screen plus the mode button.
        DisplayMode::Sensors | DisplayMode::Diagnostics | DisplayMode::Logs => {}
    }

    draw_mode_button(&mut frame, mode, layout);
    frame
}

/// Value a gauge displays, if known.
pub fn gauge_value(
    snapshot: &TelemetrySnapshot,
    kind: GaugeKind,
) -> Option<f32> {
    match kind {
        GaugeKind::Temperature => snapshot.engine_temperature,
        GaugeKind::Tachometer => snapshot.rpm,
        GaugeKind::Fuel => snapshot.fuel_level,
        GaugeKind::Speedometer => snapshot.speed,
    }
}

fn draw_dashboard(
    frame: &mut Frame,
    snapshot: &TelemetrySnapshot,
    layout: &PanelLayout,
    policy: NeedlePolicy,
) {
    let separator = layout.separator;
    frame.push(DrawPrimitive::rectangle(separator.top_left(), separator.size, separator.color));

    let info = layout.info_center;
    let bezel = layout.info_center_bezel;
    frame.push(DrawPrimitive::rectangle(
        info.top_left() - Point::new(bezel as i32, bezel as i32),
        info.size + Size::new(2 * bezel, 2 * bezel),
        layout.info_center_bezel_color,
    ));
    frame.push(DrawPrimitive::rectangle(info.top_left(), info.size, info.color));

    for slot in &layout.gauges {
        draw_gauge(frame, slot, gauge_value(snapshot, slot.kind), policy);
        // The shift indicator sits between the tachometer and the fuel gauge.
        if slot.kind == GaugeKind::Tachometer {
            draw_shift_indicator(frame, snapshot, layout);
        }
    }
}

fn draw_gauge(
    frame: &mut Frame,
    slot: &GaugeSlot,
    value: Option<f32>,
    policy: NeedlePolicy,
) {
    let spec = &slot.spec;
    let center = spec.center();
    let radius = spec.gauge_radius();

    frame.push(DrawPrimitive::circle(center, radius + BEZEL_WIDTH, slot.bezel));
    frame.push(DrawPrimitive::circle(center, radius, WHITE));

    // Unknown values rest the needle at the bottom of the scale.
    let angle = spec.needle_angle_with(value.unwrap_or(spec.min_value()), policy);
    frame.push(DrawPrimitive::polygon(&spec.needle_triangle(angle), RED));

    let Some(scale) = slot.scale else {
        return;
    };
    let reference_radius = scale.reference_radius(spec);
    for label in scale.labels(spec) {
        frame.push(DrawPrimitive::text(
            &label.text,
            scale.base_font_size() * label.emphasis.size_factor(),
            label.emphasis.is_bold(),
            scale.label_color(),
            label.anchor(center, reference_radius),
        ));
    }
}

fn draw_shift_indicator(
    frame: &mut Frame,
    snapshot: &TelemetrySnapshot,
    layout: &PanelLayout,
) {
    let shift = layout.shift_indicator;
    frame.push(DrawPrimitive::rectangle(shift.top_left(), shift.size, shift.color));

    let gear = snapshot.gear.as_deref().unwrap_or(UNKNOWN_GEAR);
    frame.push(DrawPrimitive::text(gear, SHIFT_FONT_SIZE, false, WHITE, shift.center));
}

fn draw_mode_button(
    frame: &mut Frame,
    mode: DisplayMode,
    layout: &PanelLayout,
) {
    frame.push(DrawPrimitive::rectangle(
        layout.mode_button.top_left,
        layout.mode_button.size,
        layout.mode_button_color,
    ));
    frame.push(DrawPrimitive::text(
        mode.label(),
        FONT_SIZE,
        false,
        WHITE,
        layout.mode_button_center(),
    ));
}

// =============================================================================
// Unit Tests
// =============================================================================
