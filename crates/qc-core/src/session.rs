//! Quiz session: the state machine wired to its bank, randomness and feedback.

use std::time::Instant;

use rand::rngs::StdRng;

use crate::bank::QuoteBank;
use crate::celebration::Celebration;
use crate::config::QuizConfig;
use crate::error::QuizResult;
use crate::feedback::{Cue, Feedback};
use crate::random::RandomSource;
use crate::state::{Phase, QuizState, Verdict, generate_question};

/// A single live quiz.
///
/// The bank is fixed at construction. Feedback calls are fire-and-forget
/// and never influence the score or the answer state.
pub struct QuizSession<R = StdRng, F = crate::feedback::NoFeedback> {
    bank: QuoteBank,
    state: QuizState,
    rng: R,
    feedback: F,
    celebration: Celebration,
    questions_asked: u32,
}

impl<F: Feedback> QuizSession<StdRng, F> {
    /// Create a session whose randomness and timings come from `config`.
    pub fn from_config(bank: QuoteBank, config: &QuizConfig, feedback: F) -> Self {
        Self::new(bank, config.rng(), feedback, Celebration::new(config.celebration))
    }
}

impl<R: RandomSource, F: Feedback> QuizSession<R, F> {
    /// Create a session with an explicit random source.
    ///
    /// No question is loaded until [`start`](Self::start) is called.
    pub fn new(bank: QuoteBank, rng: R, feedback: F, celebration: Celebration) -> Self {
        Self {
            bank,
            state: QuizState::new(),
            rng,
            feedback,
            celebration,
            questions_asked: 0,
        }
    }

    /// The quote bank backing this session.
    pub fn bank(&self) -> &QuoteBank {
        &self.bank
    }

    /// Current quiz state.
    pub fn state(&self) -> &QuizState {
        &self.state
    }

    /// Current phase of the state machine.
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// The feedback sink.
    pub fn feedback(&self) -> &F {
        &self.feedback
    }

    /// Mutable access to the feedback sink.
    pub fn feedback_mut(&mut self) -> &mut F {
        &mut self.feedback
    }

    /// Whether the celebration effect is showing.
    pub fn celebrating(&self) -> bool {
        self.celebration.is_active()
    }

    /// Number of questions loaded so far.
    pub fn questions_asked(&self) -> u32 {
        self.questions_asked
    }

    /// Load the first question.
    pub fn start(&mut self) -> QuizResult<()> {
        self.next_question()
    }

    /// Replace the current question with a freshly generated one.
    ///
    /// On error (a category is empty, or no distractor exists) the state is
    /// left exactly as it was.
    pub fn next_question(&mut self) -> QuizResult<()> {
        let question = generate_question(&self.bank, &mut self.rng)?;
        self.state.load(question);
        self.questions_asked += 1;
        Ok(())
    }

    /// Move on after answering. Returns `Ok(false)` and does nothing while
    /// the current question is still unanswered.
    pub fn advance(&mut self) -> QuizResult<bool> {
        if self.state.phase() != Phase::Answered {
            return Ok(false);
        }
        self.next_question()?;
        Ok(true)
    }

    /// Submit the player's pick and fire the matching feedback.
    ///
    /// Returns `None` if the submission was rejected because there is no
    /// question or it was already answered.
    pub fn submit_answer(&mut self, author: &str, now: Instant) -> Option<Verdict> {
        let verdict = self.state.submit(author)?;
        match verdict {
            Verdict::Correct => {
                self.feedback.play(Cue::Success);
                self.celebration.start(now, &mut self.feedback);
            }
            Verdict::Incorrect => self.feedback.play(Cue::Error),
        }
        Some(verdict)
    }

    /// Submit the option at `index` (0 or 1).
    pub fn submit_option(&mut self, index: usize, now: Instant) -> Option<Verdict> {
        let author = self.state.options().get(index)?.clone();
        self.submit_answer(&author, now)
    }

    /// Advance timers. Returns `true` if the celebration was cleared.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.celebration.tick(now, &mut self.feedback)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::error::QuizError;
    use crate::feedback::{FeedbackEvent, NoFeedback, RecordingFeedback};
    use crate::quote::{Category, Quote};
    use crate::random::ScriptedRandom;

    fn q(author: &str, citation: &str, category: Category) -> Quote {
        Quote::new(author, citation, "src", "ref", category)
    }

    fn bank() -> QuoteBank {
        QuoteBank::new(
            vec![q("X", "q1", Category::Rap), q("X", "q3", Category::Rap)],
            vec![q("Y", "q2", Category::Author), q("Z", "q4", Category::Author)],
        )
    }

    fn test_session() -> QuizSession<StdRng, RecordingFeedback> {
        let config = QuizConfig::default().with_seed(42);
        let mut s = QuizSession::from_config(bank(), &config, RecordingFeedback::default());
        s.start().unwrap();
        s
    }

    fn true_author(s: &QuizSession<StdRng, RecordingFeedback>) -> String {
        s.state().current_quote().unwrap().author.clone()
    }

    fn wrong_author(s: &QuizSession<StdRng, RecordingFeedback>) -> String {
        let right = true_author(s);
        s.state()
            .options()
            .iter()
            .find(|o| **o != right)
            .unwrap()
            .clone()
    }

    #[test]
    fn new_session_is_loading() {
        let s = QuizSession::new(
            bank(),
            ScriptedRandom::default(),
            NoFeedback,
            Celebration::new(Duration::from_secs(3)),
        );
        assert_eq!(s.phase(), Phase::Loading);
        assert_eq!(s.questions_asked(), 0);
    }

    #[test]
    fn start_loads_question() {
        let s = test_session();
        assert_eq!(s.phase(), Phase::Unanswered);
        assert_eq!(s.state().options().len(), 2);
        assert!(s.state().options().contains(&true_author(&s)));
        assert_eq!(s.questions_asked(), 1);
    }

    #[test]
    fn start_with_empty_category_stays_loading() {
        let config = QuizConfig::default().with_seed(1);
        let bank = QuoteBank::new(vec![q("X", "q1", Category::Rap)], Vec::new());
        let mut s = QuizSession::from_config(bank, &config, NoFeedback);
        assert_eq!(s.start(), Err(QuizError::NotReady(Category::Author)));
        assert_eq!(s.phase(), Phase::Loading);
        assert_eq!(s.submit_answer("X", Instant::now()), None);
    }

    #[test]
    fn correct_answer_scores_and_celebrates() {
        let mut s = test_session();
        let now = Instant::now();
        let author = true_author(&s);

        assert_eq!(s.submit_answer(&author, now), Some(Verdict::Correct));
        assert_eq!(s.state().score(), 1);
        assert!(s.celebrating());
        assert_eq!(
            s.feedback().events,
            [FeedbackEvent::Played(Cue::Success), FeedbackEvent::Shown]
        );
    }

    #[test]
    fn second_submission_is_ignored() {
        let mut s = test_session();
        let now = Instant::now();
        let author = true_author(&s);

        let wrong = wrong_author(&s);
        s.submit_answer(&author, now);
        let before = s.state().clone();
        assert_eq!(s.submit_answer(&author, now), None);
        assert_eq!(s.submit_answer(&wrong, now), None);
        assert_eq!(s.state(), &before);
        assert_eq!(s.state().score(), 1);
        assert_eq!(s.feedback().events.len(), 2);
    }

    #[test]
    fn wrong_answer_plays_error_cue() {
        let mut s = test_session();
        let wrong = wrong_author(&s);

        assert_eq!(s.submit_answer(&wrong, Instant::now()), Some(Verdict::Incorrect));
        assert_eq!(s.state().score(), 0);
        assert!(s.state().answered());
        assert_eq!(s.state().selected_answer(), Some(wrong.as_str()));
        assert!(!s.celebrating());
        assert_eq!(s.feedback().events, [FeedbackEvent::Played(Cue::Error)]);
    }

    #[test]
    fn submit_option_by_index() {
        let mut s = test_session();
        let first = s.state().options()[0].clone();
        s.submit_option(0, Instant::now()).unwrap();
        assert_eq!(s.state().selected_answer(), Some(first.as_str()));
        assert_eq!(s.submit_option(5, Instant::now()), None);
    }

    #[test]
    fn advance_before_answer_is_noop() {
        let mut s = test_session();
        let before = s.state().clone();
        assert_eq!(s.advance(), Ok(false));
        assert_eq!(s.state(), &before);
        assert_eq!(s.questions_asked(), 1);
    }

    #[test]
    fn advance_after_answer_resets() {
        let mut s = test_session();
        let author = true_author(&s);
        s.submit_answer(&author, Instant::now());

        assert_eq!(s.advance(), Ok(true));
        assert_eq!(s.phase(), Phase::Unanswered);
        assert_eq!(s.state().selected_answer(), None);
        assert_eq!(s.state().score(), 1);
        assert_eq!(s.questions_asked(), 2);
    }

    #[test]
    fn celebration_clears_after_three_seconds() {
        let mut s = test_session();
        let t0 = Instant::now();
        let author = true_author(&s);
        s.submit_answer(&author, t0);

        assert!(!s.tick(t0 + Duration::from_millis(2_999)));
        assert!(s.celebrating());
        assert!(s.tick(t0 + Duration::from_secs(3)));
        assert!(!s.celebrating());
        assert_eq!(s.feedback().events.last(), Some(&FeedbackEvent::Hidden));
    }

    #[test]
    fn celebration_survives_advance_then_clears() {
        let mut s = test_session();
        let t0 = Instant::now();
        let author = true_author(&s);
        s.submit_answer(&author, t0);
        s.advance().unwrap();

        assert!(s.celebrating());
        assert!(s.tick(t0 + Duration::from_secs(4)));
        assert!(!s.celebrating());
    }

    #[test]
    fn score_accumulates_over_questions() {
        let mut s = test_session();
        for _ in 0..10 {
            let author = true_author(&s);
            s.submit_answer(&author, Instant::now());
            s.advance().unwrap();
        }
        assert_eq!(s.state().score(), 10);
        assert_eq!(s.questions_asked(), 11);
    }

    #[test]
    fn end_to_end_two_authors() {
        let bank = QuoteBank::new(
            vec![q("X", "q1", Category::Rap)],
            vec![q("Y", "q2", Category::Author)],
        );
        let config = QuizConfig::default().with_seed(7);
        let mut s = QuizSession::from_config(bank, &config, NoFeedback);
        s.start().unwrap();
        for _ in 0..50 {
            let mut options = s.state().options().to_vec();
            options.sort();
            assert_eq!(options, ["X", "Y"]);
            s.submit_option(0, Instant::now());
            s.advance().unwrap();
        }
    }
}
