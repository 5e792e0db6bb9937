//! Terminal input module (surface-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into browse-screen and quiz-screen actions; the
//! runner turns those into core commands. Plain letters stay available for
//! typing into the browse filter, so quitting is Ctrl+C only.

pub mod map;

pub use map::{map_browse_key, map_quiz_key, should_quit, BrowseAction, QuizAction};
