//! Telemetry sources and the background feed.
//!
//! A [`TelemetrySource`] answers one poll at a time. [`TelemetryFeed`] owns a source on a
//! worker thread, polls it at a fixed interval and publishes each whole outcome over a
//! bounded channel. The frame loop drains the channel between frames, so the snapshot it
//! renders is only ever updated with complete readings.
//!
//! ```text
//!   worker thread                        frame loop
//!   source.poll() ──try_send──▶ [bounded queue] ──drain──▶ AppState::apply_reading
//! ```
//!
//! A full queue drops the newest outcome (the poller never blocks on the renderer). The
//! worker exits on its next send after the feed is dropped.

use std::io;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use cluster_common::telemetry::{TelemetryReading, gear_label};
use crossbeam_channel::{Receiver, TrySendError, bounded};
use tracing::{debug, info, warn};

use crate::error::TelemetryError;

/// Result of one poll.
pub type PollOutcome = Result<TelemetryReading, TelemetryError>;

/// Something that can be asked for the current vehicle state.
pub trait TelemetrySource: Send {
    /// Read every value the interface can currently provide.
    fn poll(&mut self) -> PollOutcome;

    /// Stored diagnostic trouble codes.
    fn trouble_codes(&mut self) -> Result<Vec<String>, TelemetryError>;
}

// =============================================================================
// Static Source
// =============================================================================

/// Always returns the same reading.
#[derive(Clone, Debug)]
pub struct StaticSource {
    reading: TelemetryReading,
    codes: Vec<String>,
}

impl StaticSource {
    pub fn new(reading: TelemetryReading) -> Self {
        Self {
            reading,
            codes: Vec::new(),
        }
    }

    /// A parked vehicle with the engine off.
    pub fn parked() -> Self {
        Self::new(TelemetryReading {
            speed: Some(0.0),
            rpm: Some(0.0),
            fuel_level: Some(0.0),
            engine_temperature: Some(0.0),
            gear: Some(gear_label("P")),
        })
    }
}

impl TelemetrySource for StaticSource {
    fn poll(&mut self) -> PollOutcome { Ok(self.reading.clone()) }

    fn trouble_codes(&mut self) -> Result<Vec<String>, TelemetryError> { Ok(self.codes.clone()) }
}

// =============================================================================
// Simulated Source
// =============================================================================

/// Codes the simulated vehicle reports as stored.
const SIMULATED_CODES: [&str; 2] = ["P0301", "P0420"];

/// Sine-sweep signals that move every needle through its range.
#[derive(Clone, Debug)]
pub struct SimulatedSource {
    /// Signal time in seconds.
    t: f32,
    /// Signal time advanced per poll.
    step: f32,
}

impl SimulatedSource {
    pub fn new(poll_interval: Duration) -> Self {
        Self {
            t: 0.0,
            step: poll_interval.as_secs_f32(),
        }
    }

    fn reading_at(t: f32) -> TelemetryReading {
        let speed = fake_signal(t, 0.0, 125.0, 0.05);
        TelemetryReading {
            speed: Some(speed),
            rpm: Some(fake_signal(t, 800.0, 7200.0, 0.11)),
            fuel_level: Some(fake_signal(t, 5.0, 95.0, 0.01)),
            engine_temperature: Some(fake_signal(t, 40.0, 95.0, 0.02)),
            gear: Some(gear_label(gear_for_speed(speed))),
        }
    }
}

impl TelemetrySource for SimulatedSource {
    fn poll(&mut self) -> PollOutcome {
        let reading = Self::reading_at(self.t);
        self.t += self.step;
        Ok(reading)
    }

    fn trouble_codes(&mut self) -> Result<Vec<String>, TelemetryError> {
        Ok(SIMULATED_CODES.iter().map(|code| (*code).to_string()).collect())
    }
}

/// Generate a smooth sine wave oscillating between min and max.
///
/// - `t`: time parameter (seconds)
/// - `freq`: oscillation speed (higher = faster)
fn fake_signal(
    t: f32,
    min: f32,
    max: f32,
    freq: f32,
) -> f32 {
    let normalized = (t * freq).sin().mul_add(0.5, 0.5);
    min + normalized * (max - min)
}

/// Gear a five-speed box would be in at `speed` km/h.
fn gear_for_speed(speed: f32) -> &'static str {
    match speed {
        s if s < 1.0 => "N",
        s if s < 20.0 => "1",
        s if s < 40.0 => "2",
        s if s < 60.0 => "3",
        s if s < 85.0 => "4",
        _ => "5",
    }
}

// =============================================================================
// Background Feed
// =============================================================================

/// Background poller publishing outcomes to the frame loop.
pub struct TelemetryFeed {
    rx: Receiver<PollOutcome>,
    worker: Option<JoinHandle<()>>,
}

impl TelemetryFeed {
    /// Start polling `source` every `interval` on a dedicated thread.
    pub fn spawn(
        mut source: Box<dyn TelemetrySource>,
        interval: Duration,
        capacity: usize,
    ) -> io::Result<Self> {
        let (tx, rx) = bounded::<PollOutcome>(capacity);

        let worker = thread::Builder::new().name("telemetry-feed".to_string()).spawn(move || {
            loop {
                match tx.try_send(source.poll()) {
                    Ok(()) => {}
                    Err(TrySendError::Full(_)) => warn!("telemetry queue full, dropping poll outcome"),
                    Err(TrySendError::Disconnected(_)) => break,
                }
                thread::sleep(interval);
            }
            debug!("telemetry feed stopped");
        })?;

        Ok(Self {
            rx,
            worker: Some(worker),
        })
    }

    /// Every outcome published since the previous drain, oldest first.
    pub fn drain(&self) -> Vec<PollOutcome> { self.rx.try_iter().collect() }

    /// Stop the worker and wait for it to exit.
    pub fn shutdown(mut self) {
        let worker = self.worker.take();
        drop(self);
        if let Some(worker) = worker {
            worker.join().ok();
        }
    }
}

// =============================================================================
// Link Monitoring
// =============================================================================

/// Change in link health reported by [`LinkMonitor::observe`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LinkTransition {
    Lost(TelemetryError),
    Restored,
}

/// Tracks link health across poll outcomes so each outage is reported once.
#[derive(Clone, Copy, Debug, Default)]
pub struct LinkMonitor {
    lost: bool,
}

impl LinkMonitor {
    pub const fn new() -> Self { Self { lost: false } }

    pub const fn is_lost(&self) -> bool { self.lost }

    /// Record one outcome, logging and returning a transition if the link changed state.
    pub fn observe(
        &mut self,
        outcome: &PollOutcome,
    ) -> Option<LinkTransition> {
        match (outcome, self.lost) {
            (Err(err), false) => {
                self.lost = true;
                warn!("{err}, keeping last known values");
                Some(LinkTransition::Lost(err.clone()))
            }
            (Ok(_), true) => {
                self.lost = false;
                info!("vehicle interface connection restored");
                Some(LinkTransition::Restored)
            }
            _ => None,
        }
    }
}
