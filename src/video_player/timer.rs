// SPDX-License-Identifier: MPL-2.0
//! Deadline timers polled from the UI tick.
//!
//! Both timers are plain state: they never spawn tasks or threads. The owner
//! calls `poll(now)` on every UI tick and acts on the returned flag, which
//! keeps every expiry on the same cooperative context as user input.
//!
//! - [`OneShotTimer`]: auto-hide countdown for the transport overlay
//! - [`PeriodicTimer`]: time sync cadence

use std::time::{Duration, Instant};

/// Single-shot countdown.
///
/// `start` always re-arms from `now`; `stop` is idempotent.
#[derive(Debug, Clone)]
pub struct OneShotTimer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl OneShotTimer {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Arms (or re-arms) the countdown.
    pub fn start(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    /// Cancels the countdown. Safe to call on a stopped timer.
    pub fn stop(&mut self) {
        self.deadline = None;
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.deadline.is_some()
    }

    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Returns true exactly once when the deadline has passed, then disarms.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

/// Fixed-rate timer.
///
/// Fires at most once per `poll`, even when several periods elapsed since the
/// previous call; missed periods are skipped rather than replayed.
#[derive(Debug, Clone)]
pub struct PeriodicTimer {
    interval: Duration,
    next: Option<Instant>,
}

impl PeriodicTimer {
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next: None,
        }
    }

    /// Starts firing one interval from `now`.
    pub fn start(&mut self, now: Instant) {
        self.next = Some(now + self.interval);
    }

    /// Stops the timer. Safe to call on a stopped timer.
    pub fn stop(&mut self) {
        self.next = None;
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.next.is_some()
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(mut next) = self.next else {
            return false;
        };
        if now < next {
            return false;
        }
        while next <= now {
            next += self.interval;
        }
        self.next = Some(next);
        true
    }
}
