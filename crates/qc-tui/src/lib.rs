//! Terminal UI for Quote Clash, the rap-or-literature quote quiz.
//!
//! Shows one quote at a time and two candidate authors; the player picks
//! who said it. Quotes load in the background from bundled data, local
//! files or URLs.

pub mod app;
pub mod feedback;
pub mod shared;
pub mod terminal;
pub mod view;
