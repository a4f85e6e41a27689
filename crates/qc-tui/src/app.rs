//! Top-level application state and key handling.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::rngs::StdRng;
use tracing::{debug, warn};

use qc_core::{Phase, QuizConfig, QuizSession, QuoteBank};

use crate::feedback::TerminalFeedback;

/// The live quiz as driven by the terminal.
pub type TerminalSession = QuizSession<StdRng, TerminalFeedback>;

/// Main application state.
pub struct QuizApp {
    /// The quiz, once the quote bank has arrived.
    pub session: Option<TerminalSession>,
    /// Session configuration applied when the bank arrives.
    pub config: QuizConfig,
    /// Option highlighted for Enter/Space (0 or 1).
    pub focus: usize,
    /// Whether to show the help popup.
    pub show_help: bool,
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Incremented on every tick; animates the confetti.
    pub frame: u64,
}

impl QuizApp {
    /// Create an app that is still waiting for its quotes.
    pub fn new(config: QuizConfig) -> Self {
        Self {
            session: None,
            config,
            focus: 0,
            show_help: false,
            should_quit: false,
            frame: 0,
        }
    }

    /// Create an app with its bank already loaded.
    pub fn with_bank(config: QuizConfig, bank: QuoteBank) -> Self {
        let mut app = Self::new(config);
        app.install_bank(bank);
        app
    }

    /// Start the quiz on a freshly loaded bank.
    ///
    /// If a category is empty no question is generated and the app keeps
    /// showing the loading screen.
    pub fn install_bank(&mut self, bank: QuoteBank) {
        let mut session =
            QuizSession::from_config(bank, &self.config, TerminalFeedback::default());
        if let Err(e) = session.start() {
            warn!(error = %e, "no question could be generated");
        }
        self.focus = 0;
        self.session = Some(session);
    }

    /// Current phase; `Loading` until a question exists.
    pub fn phase(&self) -> Phase {
        self.session
            .as_ref()
            .map(|s| s.phase())
            .unwrap_or(Phase::Loading)
    }

    /// Advance timers.
    pub fn tick(&mut self, now: Instant) {
        self.frame = self.frame.wrapping_add(1);
        if let Some(session) = self.session.as_mut() {
            session.tick(now);
        }
    }

    /// Whether the confetti overlay should be drawn.
    pub fn celebrating(&self) -> bool {
        self.session
            .as_ref()
            .is_some_and(|s| s.feedback().celebrating)
    }

    /// Take a pending bell from the feedback sink.
    pub fn take_bell(&mut self) -> bool {
        self.session
            .as_mut()
            .is_some_and(|s| s.feedback_mut().take_bell())
    }

    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Char('q') => {
                self.should_quit = true;
                return;
            }
            KeyCode::Esc => {
                if self.show_help {
                    self.show_help = false;
                } else {
                    self.should_quit = true;
                }
                return;
            }
            KeyCode::Char('?') => {
                self.show_help = !self.show_help;
                return;
            }
            _ => {}
        }

        match self.phase() {
            Phase::Loading => {}
            Phase::Unanswered => self.handle_unanswered(key.code, now),
            Phase::Answered => self.handle_answered(key.code),
        }
    }

    fn handle_unanswered(&mut self, code: KeyCode, now: Instant) {
        match code {
            KeyCode::Char('1') => self.submit(0, now),
            KeyCode::Char('2') => self.submit(1, now),
            KeyCode::Left | KeyCode::Char('h') => self.focus = 0,
            KeyCode::Right | KeyCode::Char('l') => self.focus = 1,
            KeyCode::Tab | KeyCode::BackTab => self.focus = 1 - self.focus,
            KeyCode::Enter | KeyCode::Char(' ') => self.submit(self.focus, now),
            _ => {}
        }
    }

    fn handle_answered(&mut self, code: KeyCode) {
        if !matches!(code, KeyCode::Char('n') | KeyCode::Enter | KeyCode::Char(' ')) {
            return;
        }
        let Some(session) = self.session.as_mut() else {
            return;
        };
        match session.advance() {
            Ok(_) => self.focus = 0,
            Err(e) => warn!(error = %e, "could not load the next question"),
        }
    }

    fn submit(&mut self, index: usize, now: Instant) {
        self.focus = index;
        if let Some(session) = self.session.as_mut() {
            let verdict = session.submit_option(index, now);
            debug!(?verdict, score = session.state().score(), "answer submitted");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use qc_core::{Category, Cue, Quote};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn bank() -> QuoteBank {
        QuoteBank::new(
            vec![Quote::new("X", "q1", "Song", "", Category::Rap)],
            vec![Quote::new("Y", "q2", "Book", "", Category::Author)],
        )
    }

    fn test_app() -> QuizApp {
        QuizApp::with_bank(QuizConfig::default().with_seed(42), bank())
    }

    fn correct_index(app: &QuizApp) -> usize {
        app.session
            .as_ref()
            .and_then(|s| s.state().question())
            .map(|q| q.correct_position())
            .unwrap()
    }

    fn score(app: &QuizApp) -> u32 {
        app.session.as_ref().unwrap().state().score()
    }

    #[test]
    fn waits_for_bank() {
        let mut app = QuizApp::new(QuizConfig::default().with_seed(1));
        assert_eq!(app.phase(), Phase::Loading);
        app.handle_key(key(KeyCode::Char('1')), Instant::now());
        assert_eq!(app.phase(), Phase::Loading);
        assert!(!app.celebrating());
    }

    #[test]
    fn half_empty_bank_keeps_loading() {
        let bank = QuoteBank::new(vec![Quote::new("X", "q1", "", "", Category::Rap)], Vec::new());
        let app = QuizApp::with_bank(QuizConfig::default().with_seed(1), bank);
        assert!(app.session.is_some());
        assert_eq!(app.phase(), Phase::Loading);
    }

    #[test]
    fn number_key_answers() {
        let mut app = test_app();
        let right = correct_index(&app);
        let digit = char::from(b'1' + right as u8);

        app.handle_key(key(KeyCode::Char(digit)), Instant::now());
        assert_eq!(app.phase(), Phase::Answered);
        assert_eq!(score(&app), 1);
        assert!(app.celebrating());
        assert!(app.take_bell());
    }

    #[test]
    fn focus_and_enter_answers_wrong() {
        let mut app = test_app();
        let wrong = 1 - correct_index(&app);
        let nav = if wrong == 0 { KeyCode::Left } else { KeyCode::Right };

        app.handle_key(key(nav), Instant::now());
        assert_eq!(app.focus, wrong);
        app.handle_key(key(KeyCode::Enter), Instant::now());

        assert_eq!(app.phase(), Phase::Answered);
        assert_eq!(score(&app), 0);
        assert!(!app.celebrating());
        assert!(!app.take_bell());
        let last = app.session.as_ref().unwrap().feedback().last_cue;
        assert_eq!(last, Some(Cue::Error));
    }

    #[test]
    fn second_answer_ignored() {
        let mut app = test_app();
        let right = correct_index(&app);
        let now = Instant::now();
        app.handle_key(key(KeyCode::Char(char::from(b'1' + right as u8))), now);
        app.handle_key(key(KeyCode::Char('1')), now);
        app.handle_key(key(KeyCode::Char('2')), now);
        assert_eq!(score(&app), 1);
    }

    #[test]
    fn next_only_after_answer() {
        let mut app = test_app();
        app.handle_key(key(KeyCode::Char('n')), Instant::now());
        assert_eq!(app.session.as_ref().unwrap().questions_asked(), 1);

        app.handle_key(key(KeyCode::Char('1')), Instant::now());
        app.handle_key(key(KeyCode::Char('n')), Instant::now());
        assert_eq!(app.session.as_ref().unwrap().questions_asked(), 2);
        assert_eq!(app.phase(), Phase::Unanswered);
        assert_eq!(app.focus, 0);
    }

    #[test]
    fn celebration_clears_on_tick() {
        let mut app = test_app();
        let t0 = Instant::now();
        let right = correct_index(&app);
        app.handle_key(key(KeyCode::Char(char::from(b'1' + right as u8))), t0);
        assert!(app.celebrating());

        app.tick(t0 + Duration::from_secs(1));
        assert!(app.celebrating());
        app.tick(t0 + Duration::from_secs(3));
        assert!(!app.celebrating());
        assert_eq!(app.frame, 2);
    }

    #[test]
    fn help_and_quit_keys() {
        let mut app = test_app();
        app.handle_key(key(KeyCode::Char('?')), Instant::now());
        assert!(app.show_help);
        app.handle_key(key(KeyCode::Esc), Instant::now());
        assert!(!app.show_help);
        assert!(!app.should_quit);
        app.handle_key(key(KeyCode::Esc), Instant::now());
        assert!(app.should_quit);

        let mut app = test_app();
        app.handle_key(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            Instant::now(),
        );
        assert!(app.should_quit);
    }
}
