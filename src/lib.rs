//! Desktop shell of the OBD-II instrument cluster.
//!
//! The gauge geometry, layout, display modes and compositor live in `cluster-common`.
//! This crate adds what a desktop run needs around them:
//!
//! - [`cli`]: Command-line options
//! - [`config`]: Window, timing and path defaults
//! - [`error`]: Startup and telemetry error types
//! - [`logging`]: `tracing` subscriber setup
//! - [`catalog`]: Trouble-code catalog loaded from JSON
//! - [`telemetry`]: Telemetry sources, background feed and link monitoring
//! - [`timing`]: Fixed-rate frame clock
//! - [`runtime`]: Startup sequence and the simulator frame loop

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod runtime;
pub mod telemetry;
pub mod timing;
