//! OBD-II instrument cluster simulator.
//!
//! Opens a 1600x800 window with four analog gauges (temperature, tachometer, fuel,
//! speedometer), a gear indicator and the mode button, fed by a telemetry source on a
//! background thread.
//!
//! # Controls
//!
//! | Input | Action |
//! |-------|--------|
//! | Left click on MODE button | Cycle Dashboard → Sensors → Diagnostics → Logs |
//! | Close window | Quit |
//!
//! # Usage
//!
//! ```text
//! obd-cluster [--source static|simulated] [--poll-interval-ms N] [--scale N]
//!             [--clamp-needles] [--catalog PATH] [--list-codes] [--log-level FILTER]
//! ```

use std::process::ExitCode;

use clap::Parser;
use obd_cluster::cli::Args;
use obd_cluster::{logging, runtime};
use tracing::error;

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(&args.log_level);

    match runtime::run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
