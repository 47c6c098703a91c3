//! Startup and the frame loop.
//!
//! # Frame Loop
//!
//! ```text
//!   window events ──▶ AppState::handle_input      (mode button, quit)
//!   feed.drain()  ──▶ AppState::apply_reading      (between frames only)
//!   compose(state) ──▶ display.submit(frame) ──▶ window.update ──▶ FrameClock::wait
//! ```
//!
//! Telemetry failures never leave this loop; the cluster keeps showing the last known
//! values. Only a [`StartupFault`] ends the program with an error.

use std::io::{self, Write};
use std::time::Instant;

use cluster_common::{AppState, Canvas, Control, InputEvent, PanelLayout, compose};
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics_simulator::sdl2::MouseButton;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use tracing::{debug, info, warn};

use crate::catalog::CodeCatalog;
use crate::cli::{Args, SourceKind};
use crate::config::{FEED_CAPACITY, FRAME_TIME, WINDOW_TITLE};
use crate::error::StartupFault;
use crate::telemetry::{LinkMonitor, PollOutcome, SimulatedSource, StaticSource, TelemetryFeed, TelemetrySource};
use crate::timing::FrameClock;

/// Run the application with parsed options.
pub fn run(args: &Args) -> Result<(), StartupFault> {
    let catalog = CodeCatalog::load(&args.catalog)?;
    info!(path = %args.catalog.display(), codes = catalog.len(), "trouble-code catalog loaded");

    let mut source = build_source(args);

    if args.list_codes {
        list_codes(source.as_mut(), &catalog);
        return Ok(());
    }

    run_cluster(args, source)
}

fn build_source(args: &Args) -> Box<dyn TelemetrySource> {
    match args.source {
        SourceKind::Static => Box::new(StaticSource::parked()),
        SourceKind::Simulated => Box::new(SimulatedSource::new(args.poll_interval())),
    }
}

// =============================================================================
// Trouble Codes
// =============================================================================

fn list_codes(
    source: &mut dyn TelemetrySource,
    catalog: &CodeCatalog,
) {
    let codes = match source.trouble_codes() {
        Ok(codes) => codes,
        Err(err) => {
            warn!("unable to retrieve trouble codes: {err}");
            return;
        }
    };
    info!(count = codes.len(), "stored trouble codes retrieved");

    let mut out = io::stdout().lock();
    if let Err(err) = write_codes(&mut out, &codes, catalog) {
        warn!("failed to print trouble codes: {err}");
    }
}

fn write_codes<W: Write>(
    out: &mut W,
    codes: &[String],
    catalog: &CodeCatalog,
) -> io::Result<()> {
    for code in codes {
        writeln!(out, "{}", code_line(code, catalog))?;
    }
    out.flush()
}

/// `CODE: description` for one stored code.
pub fn code_line(
    code: &str,
    catalog: &CodeCatalog,
) -> String {
    format!("{code}: {}", catalog.describe(code).unwrap_or("unknown code"))
}

// =============================================================================
// Cluster Window
// =============================================================================

fn run_cluster(
    args: &Args,
    source: Box<dyn TelemetrySource>,
) -> Result<(), StartupFault> {
    let layout = PanelLayout::standard();
    let mut state = AppState::new(args.needle_policy());
    let mut monitor = LinkMonitor::new();

    let feed = TelemetryFeed::spawn(source, args.poll_interval(), FEED_CAPACITY)
        .map_err(|source| StartupFault::FeedSpawn { source })?;
    info!(
        source = ?args.source,
        interval_ms = args.poll_interval_ms,
        needles = ?state.needle_policy,
        "telemetry feed started"
    );

    let mut display: SimulatorDisplay<Rgb888> = SimulatorDisplay::new(layout.viewport);
    let output_settings = OutputSettingsBuilder::new().scale(args.scale).build();
    let mut window = Window::new(WINDOW_TITLE, &output_settings);

    // First update opens the window; events are only available afterwards.
    display.submit(&compose(&state, &layout)).ok();
    window.update(&display);

    let mut clock = FrameClock::new(FRAME_TIME, Instant::now());
    let mut last_dropped = 0;

    'running: loop {
        for event in window.events() {
            let Some(input) = translate_event(event) else {
                continue;
            };
            match state.handle_input(&input, &layout) {
                Control::Quit => break 'running,
                Control::ModeChanged(mode) => info!("{WINDOW_TITLE} - {}", mode.label()),
                Control::Continue => {}
            }
        }

        apply_outcomes(&mut state, &mut monitor, feed.drain());

        let frame = compose(&state, &layout);
        if frame.dropped() != last_dropped {
            last_dropped = frame.dropped();
            if last_dropped > 0 {
                warn!(dropped = last_dropped, "frame full, primitives dropped");
            }
        }
        display.submit(&frame).ok();
        window.update(&display);

        clock.wait();
    }

    feed.shutdown();
    info!("cluster closed");
    Ok(())
}

/// Map a window event onto the cluster's input vocabulary.
pub fn translate_event(event: SimulatorEvent) -> Option<InputEvent> {
    match event {
        SimulatorEvent::Quit => Some(InputEvent::Quit),
        SimulatorEvent::MouseButtonDown {
            mouse_btn: MouseButton::Left,
            point,
        } => Some(InputEvent::PrimaryActivation(point)),
        _ => None,
    }
}

/// Fold drained poll outcomes into the state, oldest first.
pub fn apply_outcomes(
    state: &mut AppState,
    monitor: &mut LinkMonitor,
    outcomes: impl IntoIterator<Item = PollOutcome>,
) {
    for outcome in outcomes {
        monitor.observe(&outcome);
        let Ok(reading) = outcome else {
            continue;
        };
        let missing = state.apply_reading(&reading);
        if !missing.is_empty() {
            let fields: Vec<&str> = missing.iter().map(|field| field.name()).collect();
            debug!(?fields, "telemetry fields unavailable, keeping previous values");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use cluster_common::DisplayMode;
    use cluster_common::telemetry::{TelemetryReading, gear_label};
    use embedded_graphics::prelude::Point;

    use super::*;
    use crate::error::TelemetryError;

    fn catalog() -> CodeCatalog {
        let mut entries = BTreeMap::new();
        entries.insert("P0301".to_string(), "Cylinder 1 Misfire Detected".to_string());
        CodeCatalog::from_entries(entries)
    }

    #[test]
    fn test_code_lines() {
        let catalog = catalog();
        assert_eq!(code_line("P0301", &catalog), "P0301: Cylinder 1 Misfire Detected");
        assert_eq!(code_line("P0420", &catalog), "P0420: unknown code");
    }

    #[test]
    fn test_write_codes_one_per_line() {
        let mut out = Vec::new();
        write_codes(&mut out, &["P0301".to_string(), "P0420".to_string()], &catalog()).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "P0301: Cylinder 1 Misfire Detected\nP0420: unknown code\n");
    }

    #[test]
    fn test_translate_quit_and_left_click() {
        assert_eq!(translate_event(SimulatorEvent::Quit), Some(InputEvent::Quit));
        let click = SimulatorEvent::MouseButtonDown {
            mouse_btn: MouseButton::Left,
            point: Point::new(30, 760),
        };
        assert_eq!(translate_event(click), Some(InputEvent::PrimaryActivation(Point::new(30, 760))));
    }

    #[test]
    fn test_translate_ignores_other_events() {
        let right = SimulatorEvent::MouseButtonDown {
            mouse_btn: MouseButton::Right,
            point: Point::new(30, 760),
        };
        assert_eq!(translate_event(right), None);
        let release = SimulatorEvent::MouseButtonUp {
            mouse_btn: MouseButton::Left,
            point: Point::new(30, 760),
        };
        assert_eq!(translate_event(release), None);
        assert_eq!(translate_event(SimulatorEvent::MouseMove { point: Point::zero() }), None);
    }

    #[test]
    fn test_click_on_button_cycles_mode() {
        let layout = PanelLayout::standard();
        let mut state = AppState::default();
        let input = translate_event(SimulatorEvent::MouseButtonDown {
            mouse_btn: MouseButton::Left,
            point: layout.mode_button_center(),
        })
        .unwrap();
        assert_eq!(state.handle_input(&input, &layout), Control::ModeChanged(DisplayMode::Sensors));
    }

    #[test]
    fn test_outcomes_apply_in_order_and_failures_keep_values() {
        let mut state = AppState::default();
        let mut monitor = LinkMonitor::new();
        let outcomes = vec![
            Ok(TelemetryReading {
                speed: Some(40.0),
                gear: Some(gear_label("3")),
                ..TelemetryReading::default()
            }),
            Ok(TelemetryReading {
                speed: Some(55.0),
                ..TelemetryReading::default()
            }),
            Err(TelemetryError::ConnectionLost {
                reason: "timeout".to_string(),
            }),
        ];

        apply_outcomes(&mut state, &mut monitor, outcomes);

        assert_eq!(state.snapshot.speed, Some(55.0));
        assert_eq!(state.snapshot.gear.as_deref(), Some("3"));
        assert!(monitor.is_lost());
    }

    #[test]
    fn test_build_source_follows_flag() {
        let args = <Args as clap::Parser>::try_parse_from(["obd-cluster", "--source", "static"]).unwrap();
        let mut source = build_source(&args);
        assert_eq!(source.poll().unwrap().gear.as_deref(), Some("P"));
    }
}
