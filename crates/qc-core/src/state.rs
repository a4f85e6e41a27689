//! Question generation and the per-question answer state machine.
//!
//! Each question starts `Unanswered`. Exactly one submission moves it to
//! `Answered`; further submissions are ignored. Loading the next question
//! replaces the quote and options and returns to `Unanswered`, keeping the
//! score.

use crate::bank::QuoteBank;
use crate::error::{QuizError, QuizResult};
use crate::quote::{Category, Quote};
use crate::random::{RandomSource, pick};

/// A quote to attribute plus the two candidate authors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    /// The quote being tested.
    pub quote: Quote,
    /// The true author and one distractor, in display order.
    pub options: [String; 2],
}

impl Question {
    /// Position of the true author within `options`.
    pub fn correct_position(&self) -> usize {
        if self.options[0] == self.quote.author {
            0
        } else {
            1
        }
    }
}

/// Build a random question from the bank.
///
/// The quote is drawn uniformly from both categories combined. The
/// distractor is a distinct author from the opposite category; when that
/// category only has the true author, the quote's own category is used
/// instead.
pub fn generate_question<R: RandomSource + ?Sized>(
    bank: &QuoteBank,
    rng: &mut R,
) -> QuizResult<Question> {
    for category in Category::ALL {
        if bank.quotes(category).is_empty() {
            return Err(QuizError::NotReady(category));
        }
    }

    let quote = bank
        .get(rng.pick_index(bank.len()))
        .ok_or(QuizError::NotReady(Category::Rap))?
        .clone();
    let distractor = pick_distractor(bank, &quote, rng)?;

    let mut options = [quote.author.clone(), distractor];
    if rng.swap_pair() {
        options.swap(0, 1);
    }

    Ok(Question { quote, options })
}

fn pick_distractor<R: RandomSource + ?Sized>(
    bank: &QuoteBank,
    quote: &Quote,
    rng: &mut R,
) -> QuizResult<String> {
    for category in [quote.category.opposite(), quote.category] {
        let candidates: Vec<&str> = bank
            .distinct_authors(category)
            .into_iter()
            .filter(|author| *author != quote.author)
            .collect();
        if let Some(author) = pick(rng, &candidates) {
            return Ok((*author).to_string());
        }
    }
    Err(QuizError::NoDistractor(quote.author.clone()))
}

/// Where the current question stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No question has been loaded yet.
    Loading,
    /// Waiting for the player's pick.
    Unanswered,
    /// The pick is in; waiting to advance.
    Answered,
}

/// Outcome of an accepted submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The picked author wrote the quote.
    Correct,
    /// The picked author did not.
    Incorrect,
}

impl Verdict {
    /// Whether the answer scored.
    pub fn is_correct(self) -> bool {
        self == Self::Correct
    }
}

/// Visual state of one option button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionState {
    /// Not answered yet; selectable.
    Neutral,
    /// The true author, revealed after answering.
    Correct,
    /// The player's wrong pick.
    Incorrect,
    /// Neither; greyed out after answering.
    Disabled,
}

/// Derive an option's visual state from the answer status alone.
pub fn option_state(
    answered: bool,
    option: &str,
    true_author: &str,
    selected: Option<&str>,
) -> OptionState {
    if !answered {
        OptionState::Neutral
    } else if option == true_author {
        OptionState::Correct
    } else if selected == Some(option) {
        OptionState::Incorrect
    } else {
        OptionState::Disabled
    }
}

/// Mutable quiz state: current question, answer status and score.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizState {
    question: Option<Question>,
    answered: bool,
    selected_answer: Option<String>,
    score: u32,
}

impl QuizState {
    /// Fresh state: no question, score zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current question, if one is loaded.
    pub fn question(&self) -> Option<&Question> {
        self.question.as_ref()
    }

    /// The quote being tested, if one is loaded.
    pub fn current_quote(&self) -> Option<&Quote> {
        self.question.as_ref().map(|q| &q.quote)
    }

    /// The two options, or an empty slice before the first question.
    pub fn options(&self) -> &[String] {
        match &self.question {
            Some(q) => &q.options,
            None => &[],
        }
    }

    /// Whether the current question has been answered.
    pub fn answered(&self) -> bool {
        self.answered
    }

    /// The author the player picked for the current question.
    pub fn selected_answer(&self) -> Option<&str> {
        self.selected_answer.as_deref()
    }

    /// Number of correct answers this session.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        match (&self.question, self.answered) {
            (None, _) => Phase::Loading,
            (Some(_), false) => Phase::Unanswered,
            (Some(_), true) => Phase::Answered,
        }
    }

    /// The quote, once its answer may be revealed.
    pub fn revealed(&self) -> Option<&Quote> {
        if self.answered {
            self.current_quote()
        } else {
            None
        }
    }

    /// Replace the current question and clear the answer.
    pub fn load(&mut self, question: Question) {
        self.question = Some(question);
        self.answered = false;
        self.selected_answer = None;
    }

    /// Record the player's pick.
    ///
    /// Returns `None` without touching anything when there is no question or
    /// it was already answered.
    pub fn submit(&mut self, author: &str) -> Option<Verdict> {
        if self.answered {
            return None;
        }
        let correct = self.current_quote()?.author == author;

        self.selected_answer = Some(author.to_string());
        self.answered = true;

        if correct {
            self.score += 1;
            Some(Verdict::Correct)
        } else {
            Some(Verdict::Incorrect)
        }
    }

    /// Visual state for one of the current options.
    pub fn option_state(&self, option: &str) -> OptionState {
        match self.current_quote() {
            Some(quote) => option_state(
                self.answered,
                option,
                &quote.author,
                self.selected_answer(),
            ),
            None => OptionState::Neutral,
        }
    }
}
