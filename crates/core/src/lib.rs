//! Core quiz logic module - pure, deterministic, and testable
//!
//! This module contains the puzzle generator and the quiz session state
//! machine. It has **zero dependencies** on UI, networking, or I/O, making it:
//!
//! - **Deterministic**: Same seed and catalog produce identical sessions
//! - **Testable**: Unit tests cover every state transition and invariant
//! - **Portable**: Can run behind any surface (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`puzzle`]: masking policy and answer-option generation
//! - [`session`]: round selection, countdown, scoring, lifecycle
//! - [`snapshot`]: render-ready view of a session for surfaces
//! - [`rng`]: seeded LCG so all randomness is injected
//!
//! # Example
//!
//! ```
//! use tui_wordquiz_core::QuizSession;
//! use tui_wordquiz_types::{QuizPhase, WordCategory, WordRecord};
//!
//! let catalog = vec![
//!     WordRecord::new("cat", "/kăt/", WordCategory::Simple),
//!     WordRecord::new("ship", "/shĭp/", WordCategory::Digraph),
//! ];
//! let mut session = QuizSession::new(12345, catalog);
//! session.start().unwrap();
//! assert_eq!(session.phase(), QuizPhase::RoundActive);
//!
//! // Answering correctly scores a point.
//! let answer = session.current_puzzle().unwrap().answer.clone();
//! session.submit_answer(&answer);
//! assert_eq!(session.score(), 1);
//! ```
//!
//! # Timing
//!
//! The session is pull-ticked: call [`QuizSession::tick`] with elapsed
//! milliseconds from the host loop. Each round counts down from 10 seconds;
//! a resolved round shows its feedback for 2.5s (answer) or 2s (timeout)
//! before advancing.

pub mod puzzle;
pub mod rng;
pub mod session;
pub mod snapshot;

pub use tui_wordquiz_types as types;

// Re-export commonly used types for convenience
pub use puzzle::{generate_puzzle, is_quizzable, InvalidWordError, Puzzle};
pub use rng::SimpleRng;
pub use session::{Feedback, QuizSession, SessionError};
pub use snapshot::SessionSnapshot;
