//! Display mode navigation.
//!
//! The cluster cycles through four views with a single on-screen button. Clicking the
//! mode button advances one step; there is no way back except going all the way round.
//!
//! ```text
//! Dashboard -> Sensors -> Diagnostics -> Logs -> Dashboard
//! ```
//!
//! # Modes
//!
//! - [`DisplayMode::Dashboard`]: the analog gauge panel
//! - [`DisplayMode::Sensors`], [`DisplayMode::Diagnostics`], [`DisplayMode::Logs`]:
//!   placeholders that currently show a blank screen with the mode button

use crate::input::InputEvent;
use crate::layout::PanelLayout;

/// Available display modes.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum DisplayMode {
    /// Analog gauge panel.
    #[default]
    Dashboard,
    /// Live sensor readout (placeholder).
    Sensors,
    /// Trouble-code view (placeholder).
    Diagnostics,
    /// Log view (placeholder).
    Logs,
}

impl DisplayMode {
    /// All modes in cycle order.
    pub const ALL: [Self; 4] = [Self::Dashboard, Self::Sensors, Self::Diagnostics, Self::Logs];

    /// Next mode in the cycle.
    #[inline]
    pub const fn next(self) -> Self {
        match self {
            Self::Dashboard => Self::Sensors,
            Self::Sensors => Self::Diagnostics,
            Self::Diagnostics => Self::Logs,
            Self::Logs => Self::Dashboard,
        }
    }

    /// Name shown on the mode button.
    #[inline]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Sensors => "Sensors",
            Self::Diagnostics => "Diagnostics",
            Self::Logs => "Logs",
        }
    }
}

/// Owner of the active display mode.
///
/// The mode only changes through [`ModeStateMachine::handle`]. Quit events are not
/// observed here; the frame loop handles them.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct ModeStateMachine {
    mode: DisplayMode,
}

impl ModeStateMachine {
    /// Start on the dashboard.
    pub const fn new() -> Self {
        Self {
            mode: DisplayMode::Dashboard,
        }
    }

    #[inline]
    pub const fn mode(&self) -> DisplayMode { self.mode }

    /// Feed one input event. Returns the new mode if the event caused a transition.
    pub fn handle(
        &mut self,
        event: &InputEvent,
        layout: &PanelLayout,
    ) -> Option<DisplayMode> {
        match event {
            InputEvent::PrimaryActivation(point) if layout.mode_button_contains(*point) => {
                self.mode = self.mode.next();
                Some(self.mode)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use embedded_graphics::prelude::Point;

    use super::*;

    const INSIDE: InputEvent = InputEvent::PrimaryActivation(Point::new(80, 770));
    const OUTSIDE: InputEvent = InputEvent::PrimaryActivation(Point::new(800, 400));

    #[test]
    fn test_mode_default() {
        assert_eq!(DisplayMode::default(), DisplayMode::Dashboard);
        assert_eq!(ModeStateMachine::new().mode(), DisplayMode::Dashboard);
    }

    #[test]
    fn test_mode_next() {
        assert_eq!(DisplayMode::Dashboard.next(), DisplayMode::Sensors);
        assert_eq!(DisplayMode::Sensors.next(), DisplayMode::Diagnostics);
        assert_eq!(DisplayMode::Diagnostics.next(), DisplayMode::Logs);
        assert_eq!(DisplayMode::Logs.next(), DisplayMode::Dashboard);
    }

    #[test]
    fn test_four_activations_return_to_dashboard() {
        let layout = PanelLayout::standard();
        let mut machine = ModeStateMachine::new();
        let seen: [Option<DisplayMode>; 4] = core::array::from_fn(|_| machine.handle(&INSIDE, &layout));
        assert_eq!(
            seen,
            [
                Some(DisplayMode::Sensors),
                Some(DisplayMode::Diagnostics),
                Some(DisplayMode::Logs),
                Some(DisplayMode::Dashboard),
            ]
        );
        assert_eq!(machine.mode(), DisplayMode::Dashboard);
    }

    #[test]
    fn test_outside_activation_is_ignored() {
        let layout = PanelLayout::standard();
        for start in DisplayMode::ALL {
            let mut machine = ModeStateMachine { mode: start };
            assert_eq!(machine.handle(&OUTSIDE, &layout), None);
            assert_eq!(machine.mode(), start);
        }
    }

    #[test]
    fn test_click_just_past_button_edge_is_ignored() {
        let layout = PanelLayout::standard();
        let mut machine = ModeStateMachine::new();
        for point in [Point::new(150, 775), Point::new(87, 800)] {
            assert_eq!(machine.handle(&InputEvent::PrimaryActivation(point), &layout), None, "{point:?}");
        }
        let corner = InputEvent::PrimaryActivation(Point::new(149, 799));
        assert_eq!(machine.handle(&corner, &layout), Some(DisplayMode::Sensors));
    }

    #[test]
    fn test_quit_is_not_observed() {
        let layout = PanelLayout::standard();
        let mut machine = ModeStateMachine::new();
        assert_eq!(machine.handle(&InputEvent::Quit, &layout), None);
        assert_eq!(machine.mode(), DisplayMode::Dashboard);
    }

    #[test]
    fn test_labels() {
        assert_eq!(DisplayMode::Dashboard.label(), "Dashboard");
        assert_eq!(DisplayMode::Diagnostics.label(), "Diagnostics");
    }
}
