//! Transient celebration effect with a fixed lifetime.

use std::time::{Duration, Instant};

use crate::feedback::Feedback;

/// Timer driving the celebration shown after a correct answer.
///
/// Starting it again while active pushes the deadline out; there is only
/// ever one pending hide.
#[derive(Debug, Clone)]
pub struct Celebration {
    duration: Duration,
    deadline: Option<Instant>,
}

impl Celebration {
    /// Create an idle timer with the given lifetime.
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            deadline: None,
        }
    }

    /// How long each celebration lasts.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Whether the effect is currently showing.
    pub fn is_active(&self) -> bool {
        self.deadline.is_some()
    }

    /// Time left before the effect clears, if active.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline.map(|d| d.saturating_duration_since(now))
    }

    /// Show the effect and (re)arm the deadline.
    pub fn start<F: Feedback + ?Sized>(&mut self, now: Instant, feedback: &mut F) {
        self.deadline = Some(now + self.duration);
        feedback.show_celebration();
    }

    /// Hide the effect if its deadline has passed. Returns `true` if it was
    /// cleared by this call.
    pub fn tick<F: Feedback + ?Sized>(&mut self, now: Instant, feedback: &mut F) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                feedback.hide_celebration();
                true
            }
            _ => false,
        }
    }
}
