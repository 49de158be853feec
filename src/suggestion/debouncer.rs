//! Single-slot idle debouncer
//!
//! Tracks one pending deadline at a time. Recording new activity always
//! replaces the prior deadline, so at most one trigger is ever outstanding.
//! The deadline is polled from the main loop's tick rather than delivered by a
//! timer thread, which keeps the whole lifecycle single-threaded.

use std::time::{Duration, Instant};

pub struct IdleDebouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl IdleDebouncer {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
            deadline: None,
        }
    }

    /// Re-arm the debouncer: the deadline moves to `now + delay`, cancelling
    /// any previously scheduled trigger.
    pub fn record_activity(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    /// Drop any pending trigger without firing it
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Whether a trigger is currently scheduled
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Returns true exactly once when the deadline has elapsed
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

#[cfg(test)]
#[path = "debouncer_tests.rs"]
mod debouncer_tests;
