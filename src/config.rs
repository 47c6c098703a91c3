//! Application configuration constants.
//!
//! Geometry lives in [`cluster_common::config`]; this module holds what only the desktop
//! application needs: window title, frame timing and telemetry feed defaults. Values the
//! operator may change at runtime are exposed as CLI flags in [`crate::cli`], with the
//! constants below as their defaults.

use std::time::Duration;

use cluster_common::config::TARGET_FPS;

// =============================================================================
// Window Configuration
// =============================================================================

/// Window title.
pub const WINDOW_TITLE: &str = "OBD-II Tool";

/// Default pixel scale of the simulator window.
pub const DEFAULT_WINDOW_SCALE: u32 = 1;

// =============================================================================
// Timing Configuration
// =============================================================================

/// Target frame time (60 FPS). The main loop sleeps until the next deadline.
pub const FRAME_TIME: Duration = Duration::from_nanos(1_000_000_000 / TARGET_FPS as u64);

/// Default interval between two telemetry polls.
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 500;

/// Outcomes the feed may queue before the frame loop drains them.
/// A full queue drops new outcomes instead of blocking the poller.
pub const FEED_CAPACITY: usize = 16;

// =============================================================================
// Paths
// =============================================================================

/// Trouble-code catalog loaded at startup.
pub const DEFAULT_CATALOG_PATH: &str = "obd2_codes.json";
