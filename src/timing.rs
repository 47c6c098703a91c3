//! Fixed-rate frame pacing.
//!
//! Deadlines advance by exactly one period per frame, so short frames do not accumulate
//! drift. A frame that overruns its deadline starts the next one immediately and the
//! schedule restarts from there instead of trying to catch up.

use std::thread;
use std::time::{Duration, Instant};

#[derive(Clone, Copy, Debug)]
pub struct FrameClock {
    period: Duration,
    deadline: Instant,
}

impl FrameClock {
    pub fn new(
        period: Duration,
        now: Instant,
    ) -> Self {
        Self {
            period,
            deadline: now + period,
        }
    }

    #[inline]
    pub const fn period(&self) -> Duration { self.period }

    /// Time left until the current deadline, or `None` on overrun. Advances the schedule.
    pub fn schedule(
        &mut self,
        now: Instant,
    ) -> Option<Duration> {
        if now < self.deadline {
            let wait = self.deadline - now;
            self.deadline += self.period;
            Some(wait)
        } else {
            self.deadline = now + self.period;
            None
        }
    }

    /// Sleep until the end of the current frame.
    pub fn wait(&mut self) {
        if let Some(wait) = self.schedule(Instant::now()) {
            thread::sleep(wait);
        }
    }
}
