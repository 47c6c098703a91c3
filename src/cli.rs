//! Command-line options.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use cluster_common::NeedlePolicy;

use crate::config::{DEFAULT_CATALOG_PATH, DEFAULT_POLL_INTERVAL_MS, DEFAULT_WINDOW_SCALE};

#[derive(Parser, Debug)]
#[command(name = "obd-cluster", version, about = "Simulated OBD-II instrument cluster")]
pub struct Args {
    #[arg(long, default_value = DEFAULT_CATALOG_PATH, help = "Trouble-code catalog (JSON object of code -> description)")]
    pub catalog: PathBuf,

    #[arg(long, value_enum, default_value_t = SourceKind::Simulated, help = "Where telemetry comes from")]
    pub source: SourceKind,

    #[arg(
        long,
        default_value_t = DEFAULT_POLL_INTERVAL_MS,
        value_parser = clap::value_parser!(u64).range(1..),
        help = "Milliseconds between telemetry polls"
    )]
    pub poll_interval_ms: u64,

    #[arg(
        long,
        default_value_t = DEFAULT_WINDOW_SCALE,
        value_parser = clap::value_parser!(u32).range(1..=4),
        help = "Window pixel scale"
    )]
    pub scale: u32,

    #[arg(long, default_value_t = false, help = "Pin needles at the dial ends for out-of-range values")]
    pub clamp_needles: bool,

    #[arg(long, default_value_t = false, help = "Print stored trouble codes and exit")]
    pub list_codes: bool,

    #[arg(long, default_value = "info", help = "Log filter when RUST_LOG is not set")]
    pub log_level: String,
}

/// Telemetry source selectable on the command line.
#[derive(Clone, Copy, PartialEq, Eq, Debug, ValueEnum)]
pub enum SourceKind {
    /// Fixed parked-vehicle values.
    Static,
    /// Sine-sweep signals that exercise every gauge.
    Simulated,
}

impl Args {
    pub fn poll_interval(&self) -> Duration { Duration::from_millis(self.poll_interval_ms) }

    pub fn needle_policy(&self) -> NeedlePolicy {
        if self.clamp_needles {
            NeedlePolicy::Clamped
        } else {
            NeedlePolicy::Unclamped
        }
    }
}
