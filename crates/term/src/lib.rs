//! Terminal rendering for the word quiz.
//!
//! Split in the same spirit as the core: [`fb`] and [`views`] are pure and
//! unit-testable; only [`renderer`] touches the real terminal.

pub mod fb;
pub mod renderer;
pub mod views;

pub use fb::{Cell, Frame, Style};
pub use renderer::TerminalRenderer;
pub use views::{render_browse, render_quiz, BrowseScreen, Viewport};
