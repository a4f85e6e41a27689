//! Quote attribution quiz engine.
//!
//! Parses the two quote collections (rap lyrics and written works) from
//! comma-separated payloads, and runs the question/answer state machine:
//! pick a random quote, offer its true author next to a distractor from
//! the other collection, score correct picks, and fire feedback.

pub mod bank;
pub mod celebration;
pub mod config;
pub mod error;
pub mod feedback;
pub mod parse;
pub mod quote;
pub mod random;
pub mod session;
pub mod state;

pub use bank::{CategorySummary, QuoteBank};
pub use celebration::Celebration;
pub use config::QuizConfig;
pub use error::{QuizError, QuizResult};
pub use feedback::{Cue, Feedback, NoFeedback};
pub use parse::{parse_quotes, split_record};
pub use quote::{Category, Quote};
pub use random::RandomSource;
pub use session::QuizSession;
pub use state::{OptionState, Phase, Question, QuizState, Verdict, generate_question};
