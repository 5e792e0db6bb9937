//! Shared types module - data structures and constants for the word quiz
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (catalog loading, quiz logic, terminal rendering).
//!
//! # Quiz Shape Constants
//!
//! A session runs up to [`TOTAL_ROUNDS`] rounds, each presenting one masked
//! word with [`OPTION_COUNT`] answer options.
//!
//! # Quiz Timing Constants
//!
//! Timing values are in milliseconds unless noted:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 50 | Host loop timestep |
//! | `ROUND_SECONDS` | 10 | Countdown per round (seconds) |
//! | `ANSWER_REVEAL_MS` | 2500 | Feedback display after an explicit answer |
//! | `TIMEOUT_REVEAL_MS` | 2000 | Feedback display after a timeout |
//!
//! # Examples
//!
//! ```
//! use tui_wordquiz_types::{MessageTier, WordCategory, TOTAL_ROUNDS};
//!
//! // Parse a category from its catalog spelling
//! let cat = WordCategory::from_str("vowel_team").unwrap();
//! assert_eq!(cat, WordCategory::VowelTeam);
//! assert_eq!(cat.as_str(), "vowel_team");
//!
//! // A perfect run lands in the top message tier
//! assert_eq!(MessageTier::for_score(10, TOTAL_ROUNDS), MessageTier::Top);
//! ```

/// Maximum rounds per quiz session (10)
///
/// Sessions can be shorter when the catalog's word pools are small.
pub const TOTAL_ROUNDS: usize = 10;

/// Words drawn from each difficulty pool when selecting a session (5 + 5)
pub const POOL_TAKE: usize = 5;

/// Answer options per round (1 correct + 3 distractors)
pub const OPTION_COUNT: usize = 4;

/// Countdown per round, in seconds
pub const ROUND_SECONDS: u32 = 10;

/// Host loop timestep in milliseconds
pub const TICK_MS: u32 = 50;

/// Feedback display duration after an explicit answer (2500ms)
pub const ANSWER_REVEAL_MS: u32 = 2500;

/// Feedback display duration after a round times out (2000ms)
pub const TIMEOUT_REVEAL_MS: u32 = 2000;

/// Words at or below this length mask a single interior character
pub const SHORT_WORD_MAX_LEN: usize = 3;

/// Minimum word length that leaves a maskable position (index 0 is never masked)
pub const MIN_QUIZ_WORD_LEN: usize = 2;

/// Placeholder glyph shown for each masked character
pub const MASK_CHAR: char = '_';

/// Phonics category of a catalog word
///
/// Categories drive quiz word selection: `Simple` short words form the easy
/// pool, while `Digraph`, `Blend`, `Trigraph`, and `VowelTeam` words form the
/// hard pool. The remaining categories appear in the browse list only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordCategory {
    Simple,
    Digraph,
    Trigraph,
    Blend,
    VowelTeam,
    Diphthong,
    Silent,
    MagicE,
    RControlled,
    Double,
    Schwa,
    Special,
}

impl WordCategory {
    /// Parse a category from its catalog spelling (snake_case, case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_wordquiz_types::WordCategory;
    ///
    /// assert_eq!(WordCategory::from_str("simple"), Some(WordCategory::Simple));
    /// assert_eq!(WordCategory::from_str("magic_e"), Some(WordCategory::MagicE));
    /// assert_eq!(WordCategory::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "simple" => Some(WordCategory::Simple),
            "digraph" => Some(WordCategory::Digraph),
            "trigraph" => Some(WordCategory::Trigraph),
            "blend" => Some(WordCategory::Blend),
            "vowel_team" => Some(WordCategory::VowelTeam),
            "diphthong" => Some(WordCategory::Diphthong),
            "silent" => Some(WordCategory::Silent),
            "magic_e" => Some(WordCategory::MagicE),
            "r_controlled" => Some(WordCategory::RControlled),
            "double" => Some(WordCategory::Double),
            "schwa" => Some(WordCategory::Schwa),
            "special" => Some(WordCategory::Special),
            _ => None,
        }
    }

    /// Catalog spelling of the category
    pub fn as_str(&self) -> &'static str {
        match self {
            WordCategory::Simple => "simple",
            WordCategory::Digraph => "digraph",
            WordCategory::Trigraph => "trigraph",
            WordCategory::Blend => "blend",
            WordCategory::VowelTeam => "vowel_team",
            WordCategory::Diphthong => "diphthong",
            WordCategory::Silent => "silent",
            WordCategory::MagicE => "magic_e",
            WordCategory::RControlled => "r_controlled",
            WordCategory::Double => "double",
            WordCategory::Schwa => "schwa",
            WordCategory::Special => "special",
        }
    }

    /// Human-readable label for list displays
    pub fn label(&self) -> &'static str {
        match self {
            WordCategory::Simple => "Simple",
            WordCategory::Digraph => "Digraph",
            WordCategory::Trigraph => "Trigraph",
            WordCategory::Blend => "Blend",
            WordCategory::VowelTeam => "Vowel team",
            WordCategory::Diphthong => "Diphthong",
            WordCategory::Silent => "Silent letter",
            WordCategory::MagicE => "Magic e",
            WordCategory::RControlled => "R-controlled",
            WordCategory::Double => "Double letter",
            WordCategory::Schwa => "Schwa",
            WordCategory::Special => "Special",
        }
    }
}

/// One vocabulary entry, immutable once loaded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordRecord {
    /// The word itself, as spelled in the catalog (non-empty)
    pub text: String,
    /// Pronunciation hint shown when the word is "spoken"
    pub phonetic: String,
    /// Phonics category
    pub category: WordCategory,
}

impl WordRecord {
    pub fn new(
        text: impl Into<String>,
        phonetic: impl Into<String>,
        category: WordCategory,
    ) -> Self {
        Self {
            text: text.into(),
            phonetic: phonetic.into(),
            category,
        }
    }
}

/// Quiz session lifecycle states
///
/// ```text
/// Idle -> Selecting -> RoundActive -> RoundResolved -+-> RoundActive
///                                                    `-> Finished
/// ```
///
/// `Selecting` is transient: `start` selects the round words and immediately
/// begins the first round. `Finished` allows restarting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuizPhase {
    #[default]
    Idle,
    Selecting,
    RoundActive,
    RoundResolved,
    Finished,
}

impl QuizPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuizPhase::Idle => "idle",
            QuizPhase::Selecting => "selecting",
            QuizPhase::RoundActive => "round_active",
            QuizPhase::RoundResolved => "round_resolved",
            QuizPhase::Finished => "finished",
        }
    }
}

/// Commands the host surface sends into the quiz session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizCommand {
    /// Begin a new session (valid from `Idle` and `Finished`)
    Start,
    /// Answer the current round with the given letter or letter pair
    SubmitAnswer(String),
    /// Discard the session and return to `Idle` (valid from any non-idle state)
    Abort,
}

/// Events the quiz session emits for the host surface to render
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizEvent {
    /// A new round began: speak `word`, display `masked` and `options`
    RoundStarted {
        word: String,
        masked: String,
        options: Vec<String>,
        round_index: usize,
        total_rounds: usize,
        score: u32,
    },
    /// One second of the countdown elapsed
    Tick { seconds_left: u32 },
    /// The round resolved, by answer or by timeout
    Answered {
        correct: bool,
        correct_answer: String,
        timed_out: bool,
    },
    /// The session ended; show the score and the tier message
    Finished {
        score: u32,
        total_rounds: usize,
        tier: MessageTier,
    },
}

/// End-of-quiz encouragement tier, from the final score percentage
///
/// | Tier | Threshold |
/// |------|-----------|
/// | `Top` | ≥ 90% |
/// | `High` | ≥ 70% |
/// | `Mid` | ≥ 50% |
/// | `Encourage` | below 50% |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageTier {
    Top,
    High,
    Mid,
    Encourage,
}

impl MessageTier {
    /// Tier for `score` correct answers out of `total` rounds
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_wordquiz_types::MessageTier;
    ///
    /// assert_eq!(MessageTier::for_score(9, 10), MessageTier::Top);
    /// assert_eq!(MessageTier::for_score(7, 10), MessageTier::High);
    /// assert_eq!(MessageTier::for_score(5, 10), MessageTier::Mid);
    /// assert_eq!(MessageTier::for_score(4, 10), MessageTier::Encourage);
    /// ```
    pub fn for_score(score: u32, total: usize) -> Self {
        if total == 0 {
            return MessageTier::Encourage;
        }
        let total = total as u32;
        if score * 100 >= total * 90 {
            MessageTier::Top
        } else if score * 100 >= total * 70 {
            MessageTier::High
        } else if score * 100 >= total * 50 {
            MessageTier::Mid
        } else {
            MessageTier::Encourage
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MessageTier::Top => "top",
            MessageTier::High => "high",
            MessageTier::Mid => "mid",
            MessageTier::Encourage => "encourage",
        }
    }

    /// Encouragement message shown on the finish screen
    pub fn message(&self) -> &'static str {
        match self {
            MessageTier::Top => "Outstanding! You're a word wizard!",
            MessageTier::High => "Great job! Keep it up!",
            MessageTier::Mid => "Nice work! Practice makes perfect.",
            MessageTier::Encourage => "Good try! Every round makes you stronger.",
        }
    }
}
