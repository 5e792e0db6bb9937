//! Session module - the quiz state machine
//!
//! A [`QuizSession`] owns one quiz attempt: the selected round words, the
//! score, the per-round countdown, and the answer state. It is driven by a
//! host event loop (commands in, [`QuizEvent`]s out) and never performs I/O.
//!
//! # Timing
//!
//! The host calls [`QuizSession::tick`] with elapsed milliseconds. The session
//! accumulates them into whole countdown seconds while a round is active, and
//! into the feedback-reveal delay after a round resolves. Both the countdown
//! and the user's answer race to resolve a round; the `answered` flag is the
//! authoritative guard, so whichever lands first wins and the other becomes a
//! no-op.
//!
//! # Cancellation
//!
//! `abort` (and every round start) bumps a generation counter and resets all
//! timer state, so nothing from an earlier round can leak into a later one.
//! Ticks outside an active session are no-ops.

use std::collections::VecDeque;

use arrayvec::ArrayVec;
use thiserror::Error;

use crate::puzzle::{generate_puzzle, is_quizzable, Puzzle};
use crate::rng::SimpleRng;
use tui_wordquiz_types::{
    MessageTier, QuizCommand, QuizEvent, QuizPhase, WordCategory, WordRecord, ANSWER_REVEAL_MS,
    POOL_TAKE, ROUND_SECONDS, SHORT_WORD_MAX_LEN, TIMEOUT_REVEAL_MS, TOTAL_ROUNDS,
};

/// How the current round resolved, kept for rendering until the next round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feedback {
    pub correct: bool,
    pub timed_out: bool,
}

/// Errors from session commands. All recoverable: the session stays usable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// Neither difficulty pool yielded a single quizzable word.
    #[error("no quizzable words available to start a session")]
    InsufficientPool,
    /// `start` is only valid from `Idle` or `Finished`.
    #[error("a quiz is already in progress")]
    AlreadyRunning,
}

/// One quiz attempt from start to finished or aborted.
#[derive(Debug, Clone)]
pub struct QuizSession {
    catalog_words: Vec<WordRecord>,
    rng: SimpleRng,
    phase: QuizPhase,
    round_words: ArrayVec<WordRecord, TOTAL_ROUNDS>,
    round_index: usize,
    score: u32,
    current: Option<Puzzle>,
    answered: bool,
    feedback: Option<Feedback>,
    seconds_left: u32,
    second_timer_ms: u32,
    reveal_timer_ms: u32,
    /// Bumped on every round start and abort; a countdown from an older
    /// generation can never observe the current round.
    generation: u32,
    events: VecDeque<QuizEvent>,
}

impl QuizSession {
    /// Create an idle session over the given catalog words.
    pub fn new(seed: u32, catalog_words: Vec<WordRecord>) -> Self {
        Self {
            catalog_words,
            rng: SimpleRng::new(seed),
            phase: QuizPhase::Idle,
            round_words: ArrayVec::new(),
            round_index: 0,
            score: 0,
            current: None,
            answered: false,
            feedback: None,
            seconds_left: 0,
            second_timer_ms: 0,
            reveal_timer_ms: 0,
            generation: 0,
            events: VecDeque::new(),
        }
    }

    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn round_index(&self) -> usize {
        self.round_index
    }

    /// Rounds in this session (≤ [`TOTAL_ROUNDS`]; 0 while idle).
    pub fn total_rounds(&self) -> usize {
        self.round_words.len()
    }

    pub fn seconds_left(&self) -> u32 {
        self.seconds_left
    }

    pub fn answered(&self) -> bool {
        self.answered
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    pub fn current_puzzle(&self) -> Option<&Puzzle> {
        self.current.as_ref()
    }

    pub fn round_words(&self) -> &[WordRecord] {
        &self.round_words
    }

    pub fn feedback(&self) -> Option<Feedback> {
        self.feedback
    }

    /// Take the oldest pending event, if any.
    pub fn pop_event(&mut self) -> Option<QuizEvent> {
        self.events.pop_front()
    }

    /// Dispatch a command from the host surface.
    pub fn apply_command(&mut self, command: QuizCommand) -> Result<(), SessionError> {
        match command {
            QuizCommand::Start => self.start(),
            QuizCommand::SubmitAnswer(letter) => {
                self.submit_answer(&letter);
                Ok(())
            }
            QuizCommand::Abort => {
                self.abort();
                Ok(())
            }
        }
    }

    /// Select round words and begin the first round.
    ///
    /// Valid from `Idle` and `Finished` only.
    pub fn start(&mut self) -> Result<(), SessionError> {
        match self.phase {
            QuizPhase::Idle | QuizPhase::Finished => {}
            _ => return Err(SessionError::AlreadyRunning),
        }

        self.phase = QuizPhase::Selecting;
        let selected = select_round_words(&self.catalog_words, &mut self.rng);
        if selected.is_empty() {
            self.phase = QuizPhase::Idle;
            return Err(SessionError::InsufficientPool);
        }

        self.round_words = selected;
        self.round_index = 0;
        self.score = 0;
        self.events.clear();
        self.begin_round();
        Ok(())
    }

    /// Answer the current round.
    ///
    /// A no-op once the round is resolved, which makes the countdown/input
    /// race safe: first writer wins.
    pub fn submit_answer(&mut self, letter: &str) {
        if self.phase != QuizPhase::RoundActive || self.answered {
            return;
        }
        let Some(puzzle) = self.current.as_ref() else {
            return;
        };

        self.answered = true;
        let correct = letter.trim().to_uppercase() == puzzle.answer;
        if correct {
            self.score += 1;
        }
        self.feedback = Some(Feedback {
            correct,
            timed_out: false,
        });
        self.events.push_back(QuizEvent::Answered {
            correct,
            correct_answer: puzzle.answer.clone(),
            timed_out: false,
        });
        self.reveal_timer_ms = ANSWER_REVEAL_MS;
        self.phase = QuizPhase::RoundResolved;
    }

    /// Advance time by `elapsed_ms`.
    ///
    /// Emits one `Tick` per whole countdown second. A tick outside an active
    /// round is a no-op, so a stale timer can never touch a later round.
    pub fn tick(&mut self, elapsed_ms: u32) {
        match self.phase {
            QuizPhase::RoundActive => {
                self.second_timer_ms += elapsed_ms;
                while self.second_timer_ms >= 1000 {
                    self.second_timer_ms -= 1000;
                    if self.seconds_left > 0 {
                        self.seconds_left -= 1;
                    }
                    self.events.push_back(QuizEvent::Tick {
                        seconds_left: self.seconds_left,
                    });
                    if self.seconds_left == 0 {
                        self.resolve_timeout();
                        break;
                    }
                }
            }
            QuizPhase::RoundResolved => {
                self.reveal_timer_ms = self.reveal_timer_ms.saturating_sub(elapsed_ms);
                if self.reveal_timer_ms == 0 {
                    self.advance();
                }
            }
            _ => {}
        }
    }

    /// Discard the session and return to `Idle`.
    ///
    /// Valid from any state; cancels the countdown and drops pending events.
    pub fn abort(&mut self) {
        if self.phase == QuizPhase::Idle {
            return;
        }
        self.generation = self.generation.wrapping_add(1);
        self.phase = QuizPhase::Idle;
        self.round_words.clear();
        self.round_index = 0;
        self.score = 0;
        self.current = None;
        self.answered = false;
        self.feedback = None;
        self.seconds_left = 0;
        self.second_timer_ms = 0;
        self.reveal_timer_ms = 0;
        self.events.clear();
    }

    fn begin_round(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.answered = false;
        self.feedback = None;
        self.seconds_left = ROUND_SECONDS;
        self.second_timer_ms = 0;
        self.reveal_timer_ms = 0;

        let word = &self.round_words[self.round_index];
        match generate_puzzle(word, &mut self.rng) {
            Ok(puzzle) => {
                self.events.push_back(QuizEvent::RoundStarted {
                    word: puzzle.word.text.clone(),
                    masked: puzzle.masked.clone(),
                    options: puzzle.options.iter().cloned().collect(),
                    round_index: self.round_index,
                    total_rounds: self.round_words.len(),
                    score: self.score,
                });
                self.current = Some(puzzle);
                self.phase = QuizPhase::RoundActive;
            }
            Err(_) => {
                // Selection only admits quizzable words, so this cannot
                // happen; skip the round rather than stall the session.
                self.advance();
            }
        }
    }

    fn resolve_timeout(&mut self) {
        if self.answered {
            return;
        }
        let Some(puzzle) = self.current.as_ref() else {
            return;
        };

        self.answered = true;
        self.feedback = Some(Feedback {
            correct: false,
            timed_out: true,
        });
        self.events.push_back(QuizEvent::Answered {
            correct: false,
            correct_answer: puzzle.answer.clone(),
            timed_out: true,
        });
        self.reveal_timer_ms = TIMEOUT_REVEAL_MS;
        self.phase = QuizPhase::RoundResolved;
    }

    fn advance(&mut self) {
        self.round_index += 1;
        self.current = None;
        if self.round_index >= self.round_words.len() {
            self.phase = QuizPhase::Finished;
            let total = self.round_words.len();
            self.events.push_back(QuizEvent::Finished {
                score: self.score,
                total_rounds: total,
                tier: MessageTier::for_score(self.score, total),
            });
        } else {
            self.begin_round();
        }
    }
}

/// Whether a word belongs to the easy pool (short simple words).
fn is_easy(word: &WordRecord) -> bool {
    word.category == WordCategory::Simple && word.text.chars().count() <= SHORT_WORD_MAX_LEN
}

/// Whether a word belongs to the hard pool (pattern words).
fn is_hard(word: &WordRecord) -> bool {
    matches!(
        word.category,
        WordCategory::Digraph | WordCategory::Blend | WordCategory::Trigraph | WordCategory::VowelTeam
    )
}

/// Pick the session's round words: up to [`POOL_TAKE`] from each pool,
/// padded from the other pool's remainder when one runs short, shuffled.
fn select_round_words(
    words: &[WordRecord],
    rng: &mut SimpleRng,
) -> ArrayVec<WordRecord, TOTAL_ROUNDS> {
    let mut easy: Vec<&WordRecord> = words
        .iter()
        .filter(|w| is_quizzable(w) && is_easy(w))
        .collect();
    let mut hard: Vec<&WordRecord> = words
        .iter()
        .filter(|w| is_quizzable(w) && is_hard(w))
        .collect();
    rng.shuffle(&mut easy);
    rng.shuffle(&mut hard);

    let mut picked: Vec<&WordRecord> = Vec::with_capacity(TOTAL_ROUNDS);
    picked.extend(easy.iter().copied().take(POOL_TAKE));
    picked.extend(hard.iter().copied().take(POOL_TAKE));
    for pool in [&easy, &hard] {
        for &w in pool.iter().skip(POOL_TAKE) {
            if picked.len() >= TOTAL_ROUNDS {
                break;
            }
            picked.push(w);
        }
    }
    rng.shuffle(&mut picked);

    picked
        .into_iter()
        .take(TOTAL_ROUNDS)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn easy_words(n: usize) -> Vec<WordRecord> {
        // Distinct 3-letter strings: "ca0", "ca1", ...
        (0..n)
            .map(|i| {
                WordRecord::new(
                    format!("c{}{}", (b'a' + (i / 10) as u8) as char, i % 10),
                    "",
                    WordCategory::Simple,
                )
            })
            .collect()
    }

    fn hard_words(n: usize) -> Vec<WordRecord> {
        (0..n)
            .map(|i| {
                WordRecord::new(
                    format!("shi{}{}", (b'a' + (i / 10) as u8) as char, i % 10),
                    "",
                    WordCategory::Digraph,
                )
            })
            .collect()
    }

    fn full_catalog() -> Vec<WordRecord> {
        let mut words = easy_words(8);
        words.extend(hard_words(8));
        words
    }

    fn started_session(seed: u32) -> QuizSession {
        let mut session = QuizSession::new(seed, full_catalog());
        session.start().unwrap();
        session
    }

    /// Resolve the current round with the right answer and advance past the
    /// feedback delay.
    fn answer_correctly(session: &mut QuizSession) {
        let answer = session.current_puzzle().unwrap().answer.clone();
        session.submit_answer(&answer);
        session.tick(ANSWER_REVEAL_MS);
    }

    #[test]
    fn new_session_is_idle() {
        let session = QuizSession::new(1, full_catalog());
        assert_eq!(session.phase(), QuizPhase::Idle);
        assert_eq!(session.score(), 0);
        assert_eq!(session.total_rounds(), 0);
    }

    #[test]
    fn start_selects_five_from_each_pool() {
        let mut session = started_session(12345);
        assert_eq!(session.phase(), QuizPhase::RoundActive);
        assert_eq!(session.total_rounds(), TOTAL_ROUNDS);

        let easy = session.round_words().iter().filter(|w| is_easy(w)).count();
        let hard = session.round_words().iter().filter(|w| is_hard(w)).count();
        assert_eq!(easy, POOL_TAKE);
        assert_eq!(hard, POOL_TAKE);

        match session.pop_event() {
            Some(QuizEvent::RoundStarted {
                round_index,
                total_rounds,
                score,
                options,
                ..
            }) => {
                assert_eq!(round_index, 0);
                assert_eq!(total_rounds, TOTAL_ROUNDS);
                assert_eq!(score, 0);
                assert_eq!(options.len(), 4);
            }
            other => panic!("expected RoundStarted, got {:?}", other),
        }
    }

    #[test]
    fn round_words_are_distinct() {
        let session = started_session(777);
        let words = session.round_words();
        for (i, a) in words.iter().enumerate() {
            for b in words.iter().skip(i + 1) {
                assert_ne!(a.text, b.text);
            }
        }
    }

    #[test]
    fn short_pool_pads_from_the_other() {
        let mut words = easy_words(2);
        words.extend(hard_words(20));
        let mut session = QuizSession::new(9, words);
        session.start().unwrap();
        assert_eq!(session.total_rounds(), TOTAL_ROUNDS);
        let easy = session.round_words().iter().filter(|w| is_easy(w)).count();
        assert_eq!(easy, 2);
    }

    #[test]
    fn tiny_pools_shrink_the_session() {
        let mut words = easy_words(2);
        words.extend(hard_words(3));
        let mut session = QuizSession::new(9, words);
        session.start().unwrap();
        assert_eq!(session.total_rounds(), 5);
    }

    #[test]
    fn no_pool_words_fails_to_start() {
        let words = vec![
            WordRecord::new("knee", "", WordCategory::Silent),
            WordRecord::new("cake", "", WordCategory::MagicE),
        ];
        let mut session = QuizSession::new(9, words);
        assert_eq!(session.start(), Err(SessionError::InsufficientPool));
        assert_eq!(session.phase(), QuizPhase::Idle);
    }

    #[test]
    fn start_twice_is_rejected() {
        let mut session = started_session(5);
        assert_eq!(session.start(), Err(SessionError::AlreadyRunning));
        assert_eq!(session.phase(), QuizPhase::RoundActive);
    }

    #[test]
    fn correct_answer_scores_and_resolves() {
        let mut session = started_session(42);
        while session.pop_event().is_some() {}

        let answer = session.current_puzzle().unwrap().answer.clone();
        session.submit_answer(&answer);

        assert_eq!(session.score(), 1);
        assert_eq!(session.phase(), QuizPhase::RoundResolved);
        assert!(session.answered());
        match session.pop_event() {
            Some(QuizEvent::Answered {
                correct,
                correct_answer,
                timed_out,
            }) => {
                assert!(correct);
                assert!(!timed_out);
                assert_eq!(correct_answer, answer);
            }
            other => panic!("expected Answered, got {:?}", other),
        }
    }

    #[test]
    fn answers_are_case_insensitive() {
        let mut session = started_session(42);
        let answer = session.current_puzzle().unwrap().answer.to_lowercase();
        session.submit_answer(&answer);
        assert_eq!(session.score(), 1);
    }

    #[test]
    fn wrong_answer_does_not_score() {
        let mut session = started_session(42);
        while session.pop_event().is_some() {}

        let answer = session.current_puzzle().unwrap().answer.clone();
        let wrong = session
            .current_puzzle()
            .unwrap()
            .options
            .iter()
            .find(|o| **o != answer)
            .unwrap()
            .clone();
        session.submit_answer(&wrong);

        assert_eq!(session.score(), 0);
        match session.pop_event() {
            Some(QuizEvent::Answered {
                correct,
                correct_answer,
                ..
            }) => {
                assert!(!correct);
                assert_eq!(correct_answer, answer);
            }
            other => panic!("expected Answered, got {:?}", other),
        }
    }

    #[test]
    fn second_submission_is_a_noop() {
        let mut session = started_session(42);
        let answer = session.current_puzzle().unwrap().answer.clone();
        let wrong = session
            .current_puzzle()
            .unwrap()
            .options
            .iter()
            .find(|o| **o != answer)
            .unwrap()
            .clone();

        session.submit_answer(&wrong);
        while session.pop_event().is_some() {}
        session.submit_answer(&answer);

        assert_eq!(session.score(), 0);
        assert!(session.pop_event().is_none(), "no second Answered event");
    }

    #[test]
    fn countdown_ticks_once_per_second() {
        let mut session = started_session(42);
        while session.pop_event().is_some() {}

        for _ in 0..20 {
            session.tick(50);
        }
        assert_eq!(session.seconds_left(), ROUND_SECONDS - 1);
        match session.pop_event() {
            Some(QuizEvent::Tick { seconds_left }) => {
                assert_eq!(seconds_left, ROUND_SECONDS - 1)
            }
            other => panic!("expected Tick, got {:?}", other),
        }
        assert!(session.pop_event().is_none());
    }

    #[test]
    fn timeout_resolves_the_round_exactly_once() {
        let mut session = started_session(42);
        while session.pop_event().is_some() {}

        for _ in 0..ROUND_SECONDS {
            session.tick(1000);
        }

        assert_eq!(session.phase(), QuizPhase::RoundResolved);
        assert_eq!(session.score(), 0);

        let mut answered_events = 0;
        while let Some(event) = session.pop_event() {
            if let QuizEvent::Answered {
                correct, timed_out, ..
            } = event
            {
                assert!(!correct);
                assert!(timed_out);
                answered_events += 1;
            }
        }
        assert_eq!(answered_events, 1);

        // Extra ticks during the reveal must not resolve again.
        session.tick(1000);
        assert!(!matches!(
            session.pop_event(),
            Some(QuizEvent::Answered { .. })
        ));
    }

    #[test]
    fn submission_after_timeout_is_a_noop() {
        let mut session = started_session(42);
        let answer = session.current_puzzle().unwrap().answer.clone();
        for _ in 0..ROUND_SECONDS {
            session.tick(1000);
        }
        session.submit_answer(&answer);
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn timeout_reveal_advances_after_two_seconds() {
        let mut session = started_session(42);
        for _ in 0..ROUND_SECONDS {
            session.tick(1000);
        }
        assert_eq!(session.round_index(), 0);
        session.tick(TIMEOUT_REVEAL_MS - 1);
        assert_eq!(session.round_index(), 0);
        session.tick(1);
        assert_eq!(session.round_index(), 1);
        assert_eq!(session.phase(), QuizPhase::RoundActive);
    }

    #[test]
    fn answer_reveal_advances_after_twoandahalf_seconds() {
        let mut session = started_session(42);
        let answer = session.current_puzzle().unwrap().answer.clone();
        session.submit_answer(&answer);

        session.tick(TIMEOUT_REVEAL_MS);
        assert_eq!(session.round_index(), 0, "explicit answers reveal longer");
        session.tick(ANSWER_REVEAL_MS - TIMEOUT_REVEAL_MS);
        assert_eq!(session.round_index(), 1);
    }

    #[test]
    fn generation_bumps_every_round_and_abort() {
        let mut session = started_session(42);
        let after_start = session.generation();
        assert!(after_start > 0);

        answer_correctly(&mut session);
        assert_eq!(session.generation(), after_start + 1);

        session.abort();
        assert_eq!(session.generation(), after_start + 2);
    }

    #[test]
    fn abort_discards_everything() {
        let mut session = started_session(42);
        answer_correctly(&mut session);
        session.abort();

        assert_eq!(session.phase(), QuizPhase::Idle);
        assert_eq!(session.score(), 0);
        assert_eq!(session.total_rounds(), 0);
        assert!(session.current_puzzle().is_none());
        assert!(session.pop_event().is_none());
    }

    #[test]
    fn ticks_after_abort_are_noops() {
        let mut session = started_session(42);
        session.abort();
        session.tick(60_000);
        assert_eq!(session.phase(), QuizPhase::Idle);
        assert!(session.pop_event().is_none());
    }

    #[test]
    fn abort_while_idle_does_nothing() {
        let mut session = QuizSession::new(1, full_catalog());
        session.abort();
        assert_eq!(session.phase(), QuizPhase::Idle);
        assert_eq!(session.generation(), 0);
    }

    #[test]
    fn perfect_run_finishes_in_top_tier() {
        let mut session = started_session(42);
        for _ in 0..TOTAL_ROUNDS {
            answer_correctly(&mut session);
        }

        assert_eq!(session.phase(), QuizPhase::Finished);
        let mut finished = None;
        while let Some(event) = session.pop_event() {
            if let QuizEvent::Finished { .. } = event {
                finished = Some(event);
            }
        }
        assert_eq!(
            finished,
            Some(QuizEvent::Finished {
                score: TOTAL_ROUNDS as u32,
                total_rounds: TOTAL_ROUNDS,
                tier: MessageTier::Top,
            })
        );
    }

    #[test]
    fn all_timeouts_finish_in_encourage_tier() {
        let mut session = started_session(42);
        for _ in 0..TOTAL_ROUNDS {
            for _ in 0..ROUND_SECONDS {
                session.tick(1000);
            }
            session.tick(TIMEOUT_REVEAL_MS);
        }

        assert_eq!(session.phase(), QuizPhase::Finished);
        let mut tier = None;
        while let Some(event) = session.pop_event() {
            if let QuizEvent::Finished { tier: t, score, .. } = event {
                assert_eq!(score, 0);
                tier = Some(t);
            }
        }
        assert_eq!(tier, Some(MessageTier::Encourage));
    }

    #[test]
    fn finished_session_can_restart() {
        let mut session = started_session(42);
        for _ in 0..TOTAL_ROUNDS {
            answer_correctly(&mut session);
        }
        assert_eq!(session.phase(), QuizPhase::Finished);

        session.start().unwrap();
        assert_eq!(session.phase(), QuizPhase::RoundActive);
        assert_eq!(session.score(), 0);
        assert_eq!(session.round_index(), 0);
    }

    #[test]
    fn apply_command_drives_the_same_paths() {
        let mut session = QuizSession::new(42, full_catalog());
        session.apply_command(QuizCommand::Start).unwrap();
        assert_eq!(session.phase(), QuizPhase::RoundActive);

        let answer = session.current_puzzle().unwrap().answer.clone();
        session
            .apply_command(QuizCommand::SubmitAnswer(answer))
            .unwrap();
        assert_eq!(session.score(), 1);

        session.apply_command(QuizCommand::Abort).unwrap();
        assert_eq!(session.phase(), QuizPhase::Idle);
    }

    #[test]
    fn same_seed_selects_same_words() {
        let a = started_session(1234);
        let b = started_session(1234);
        let texts = |s: &QuizSession| -> Vec<String> {
            s.round_words().iter().map(|w| w.text.clone()).collect()
        };
        assert_eq!(texts(&a), texts(&b));
    }
}
