//! Core logic for the OBD-II instrument cluster.
//!
//! Everything here is platform-agnostic and `no_std`: the cluster window, the telemetry
//! transport and the frame clock live in the application crate. This crate turns the
//! latest telemetry into a draw list and back-end code turns the draw list into pixels.
//!
//! - [`colors`]: RGB888 color constants
//! - [`config`]: Screen and gauge geometry constants
//! - [`gauge`]: Value-to-angle mapping and needle geometry
//! - [`ticks`]: Tick label placement for each labelled dial
//! - [`layout`]: Fixed panel layout for the 1600x800 viewport
//! - [`pages`]: Display modes and the mode button state machine
//! - [`input`]: Back-end neutral input events
//! - [`telemetry`]: Telemetry readings and the latest-known snapshot
//! - [`state`]: Application state rendered each frame
//! - [`draw`]: Draw primitives and frames
//! - [`compositor`]: Builds the frame for the current state
//! - [`styles`]: Font selection and text alignment
//! - [`canvas`]: Rasterizes frames onto any `embedded-graphics` target
//!
//! # no_std Compatibility
//!
//! Trigonometry goes through `micromath`, strings and lists through `heapless`, so the
//! crate builds without `std` and without an allocator.

#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod canvas;
pub mod colors;
pub mod compositor;
pub mod config;
pub mod draw;
pub mod gauge;
pub mod input;
pub mod layout;
pub mod pages;
pub mod state;
pub mod styles;
pub mod telemetry;
pub mod ticks;

// Re-export commonly used items
pub use canvas::Canvas;
pub use compositor::compose;
pub use draw::{DrawPrimitive, Frame};
pub use gauge::{GaugeKind, GaugeSpec, NeedlePolicy};
pub use input::InputEvent;
pub use layout::PanelLayout;
pub use pages::{DisplayMode, ModeStateMachine};
pub use state::{AppState, Control};
pub use telemetry::{TelemetryReading, TelemetrySnapshot};
