//! Input focus with a delayed dropdown close
//!
//! Losing focus does not close the dropdown at once: a pointer press on a
//! suggestion arrives after the blur, so the close waits out a grace period
//! and is dropped if a commit lands first.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct FocusState {
    focused: bool,
    grace: Duration,
    close_at: Option<Instant>,
}

impl FocusState {
    pub fn new(grace_ms: u64) -> Self {
        Self {
            focused: false,
            grace: Duration::from_millis(grace_ms),
            close_at: None,
        }
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn is_close_pending(&self) -> bool {
        self.close_at.is_some()
    }

    pub fn focus(&mut self) {
        self.focused = true;
        self.close_at = None;
    }

    /// Lose focus and schedule the dropdown close
    pub fn blur(&mut self, now: Instant) {
        if !self.focused && self.close_at.is_some() {
            return;
        }
        self.focused = false;
        self.close_at = Some(now + self.grace);
    }

    /// Lose focus with nothing left to close
    pub fn blur_immediately(&mut self) {
        self.focused = false;
        self.close_at = None;
    }

    pub fn cancel_pending_close(&mut self) -> bool {
        self.close_at.take().is_some()
    }

    /// Consume the pending close once the grace period has elapsed
    pub fn take_due_close(&mut self, now: Instant) -> bool {
        match self.close_at {
            Some(deadline) if now >= deadline => {
                self.close_at = None;
                true
            }
            _ => false,
        }
    }
}
