//! Application state passed into the compositor each frame.
//!
//! Everything the cluster renders from lives here: the latest telemetry snapshot, the
//! display mode machine and the needle policy. The frame loop owns one [`AppState`] and
//! mutates it only between frames.

use crate::gauge::NeedlePolicy;
use crate::input::InputEvent;
use crate::layout::PanelLayout;
use crate::pages::{DisplayMode, ModeStateMachine};
use crate::telemetry::{MissingFields, TelemetryReading, TelemetrySnapshot};

/// What the frame loop should do after an input event.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Control {
    Continue,
    /// Mode changed; the loop keeps running.
    ModeChanged(DisplayMode),
    Quit,
}

/// Per-process cluster state.
#[derive(Clone, PartialEq, Default, Debug)]
pub struct AppState {
    pub snapshot: TelemetrySnapshot,
    pub modes: ModeStateMachine,
    pub needle_policy: NeedlePolicy,
}

impl AppState {
    pub fn new(needle_policy: NeedlePolicy) -> Self {
        Self {
            snapshot: TelemetrySnapshot::default(),
            modes: ModeStateMachine::new(),
            needle_policy,
        }
    }

    #[inline]
    pub const fn mode(&self) -> DisplayMode { self.modes.mode() }

    /// Route one input event. Quit is answered here; everything else goes to the mode machine.
    pub fn handle_input(
        &mut self,
        event: &InputEvent,
        layout: &PanelLayout,
    ) -> Control {
        if *event == InputEvent::Quit {
            return Control::Quit;
        }
        match self.modes.handle(event, layout) {
            Some(mode) => Control::ModeChanged(mode),
            None => Control::Continue,
        }
    }

    /// Fold a telemetry reading into the snapshot.
    pub fn apply_reading(
        &mut self,
        reading: &TelemetryReading,
    ) -> MissingFields {
        self.snapshot.apply(reading)
    }
}
