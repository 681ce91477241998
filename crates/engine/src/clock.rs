use std::time::{Duration, Instant};

use crate::types::TICKS_PER_SECOND;

/// Length of one logical tick as a `Duration` (16.67ms).
pub const TICK_INTERVAL: Duration = Duration::from_nanos(1_000_000_000 / TICKS_PER_SECOND as u64);

/// Monotonic game clock: milliseconds since the game started.
#[derive(Debug, Clone, Copy)]
pub struct GameClock {
    origin: Instant,
}

impl GameClock {
    pub fn start() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    pub fn origin(&self) -> Instant {
        self.origin
    }

    pub fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }
}

/// Fixed-rate deadline tracker for the 60 Hz tick.
///
/// If the loop falls more than one tick behind (e.g. the process was
/// suspended), the schedule restarts from now instead of replaying every
/// missed tick in a burst.
#[derive(Debug, Clone, Copy)]
pub struct TickSchedule {
    next: Instant,
}

impl TickSchedule {
    pub fn starting_at(at: Instant) -> Self {
        Self { next: at }
    }

    /// Time left until the next tick is due.
    pub fn timeout(&self, now: Instant) -> Duration {
        self.next.saturating_duration_since(now)
    }

    /// If a tick is due at `now`, consume it and return true.
    pub fn poll_due(&mut self, now: Instant) -> bool {
        if now < self.next {
            return false;
        }
        self.next += TICK_INTERVAL;
        if self.next < now {
            self.next = now + TICK_INTERVAL;
        }
        true
    }
}
