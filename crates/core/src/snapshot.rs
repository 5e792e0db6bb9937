//! Snapshot module - render-ready view of a quiz session
//!
//! The terminal front-end draws from a [`SessionSnapshot`] rather than poking
//! at session internals. Callers can keep one snapshot and refresh it in
//! place each frame to reuse the string buffers.

use crate::session::{Feedback, QuizSession};
use tui_wordquiz_types::QuizPhase;

/// Everything a surface needs to draw the quiz.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub phase: QuizPhase,
    pub round_index: usize,
    pub total_rounds: usize,
    pub score: u32,
    pub seconds_left: u32,
    pub answered: bool,
    /// Full word text (what the audio surface speaks); empty between rounds
    pub word: String,
    pub phonetic: String,
    pub masked: String,
    pub answer: String,
    pub options: Vec<String>,
    pub feedback: Option<Feedback>,
}

impl QuizSession {
    /// Refresh `out` from the current session state, reusing its buffers.
    pub fn snapshot_into(&self, out: &mut SessionSnapshot) {
        out.phase = self.phase();
        out.round_index = self.round_index();
        out.total_rounds = self.total_rounds();
        out.score = self.score();
        out.seconds_left = self.seconds_left();
        out.answered = self.answered();
        out.feedback = self.feedback();

        match self.current_puzzle() {
            Some(puzzle) => {
                out.word.clone_from(&puzzle.word.text);
                out.phonetic.clone_from(&puzzle.word.phonetic);
                out.masked.clone_from(&puzzle.masked);
                out.answer.clone_from(&puzzle.answer);
                out.options.clear();
                out.options.extend(puzzle.options.iter().cloned());
            }
            None => {
                out.word.clear();
                out.phonetic.clear();
                out.masked.clear();
                out.answer.clear();
                out.options.clear();
            }
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let mut snap = SessionSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }
}
