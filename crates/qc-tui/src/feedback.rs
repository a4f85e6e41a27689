//! Terminal-side feedback: the bell for correct answers and a celebration flag.

use qc_core::{Cue, Feedback};

/// Feedback sink drained by the event loop.
///
/// Nothing here can fail; the loop writes the bell and ignores errors.
#[derive(Debug, Clone, Default)]
pub struct TerminalFeedback {
    /// A bell is waiting to be written.
    pub pending_bell: bool,
    /// The confetti overlay is visible.
    pub celebrating: bool,
    /// Last cue played, shown in the status line.
    pub last_cue: Option<Cue>,
}

impl TerminalFeedback {
    /// Take the pending bell, if any.
    pub fn take_bell(&mut self) -> bool {
        std::mem::take(&mut self.pending_bell)
    }
}

impl Feedback for TerminalFeedback {
    fn play(&mut self, cue: Cue) {
        self.last_cue = Some(cue);
        if cue == Cue::Success {
            self.pending_bell = true;
        }
    }

    fn show_celebration(&mut self) {
        self.celebrating = true;
    }

    fn hide_celebration(&mut self) {
        self.celebrating = false;
    }
}
