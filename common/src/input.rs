//! Input events consumed by the cluster core.
//!
//! The window shell translates its native events into [`InputEvent`] and drops anything
//! the core has no use for (key presses, mouse motion, wheel).

use embedded_graphics::prelude::Point;

/// One input event in viewport coordinates.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum InputEvent {
    /// The operator closed the window.
    Quit,
    /// Primary button press (left click or tap) at a screen position.
    PrimaryActivation(Point),
}
