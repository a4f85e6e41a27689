//! Fire-and-forget feedback capabilities: audio cues and celebrations.
//!
//! The quiz state machine calls into a [`Feedback`] but never observes a
//! result. Implementations swallow their own failures.

/// Audio cue played after an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// The answer was correct.
    Success,
    /// The answer was wrong.
    Error,
}

/// Sink for answer feedback.
pub trait Feedback {
    /// Play an audio cue.
    fn play(&mut self, cue: Cue);

    /// Show the celebration effect.
    fn show_celebration(&mut self);

    /// Hide the celebration effect.
    fn hide_celebration(&mut self);
}

/// Feedback that does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFeedback;

impl Feedback for NoFeedback {
    fn play(&mut self, _cue: Cue) {}
    fn show_celebration(&mut self) {}
    fn hide_celebration(&mut self) {}
}

/// Something the feedback sink was asked to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackEvent {
    /// `play` was called.
    Played(Cue),
    /// `show_celebration` was called.
    Shown,
    /// `hide_celebration` was called.
    Hidden,
}

/// Feedback that records every call, in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingFeedback {
    /// Calls received so far.
    pub events: Vec<FeedbackEvent>,
}

impl Feedback for RecordingFeedback {
    fn play(&mut self, cue: Cue) {
        self.events.push(FeedbackEvent::Played(cue));
    }

    fn show_celebration(&mut self) {
        self.events.push(FeedbackEvent::Shown);
    }

    fn hide_celebration(&mut self) {
        self.events.push(FeedbackEvent::Hidden);
    }
}

impl<F: Feedback + ?Sized> Feedback for &mut F {
    fn play(&mut self, cue: Cue) {
        (**self).play(cue);
    }

    fn show_celebration(&mut self) {
        (**self).show_celebration();
    }

    fn hide_celebration(&mut self) {
        (**self).hide_celebration();
    }
}
