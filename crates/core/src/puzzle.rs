//! Puzzle module - turns a word into a masked display and four answer options
//!
//! Masking policy, first match wins:
//!
//! 1. Words of up to 3 characters mask one interior character (index 1 or 2,
//!    never the first letter).
//! 2. Otherwise the first digraph occurrence (SH CH TH PH WH) is masked whole.
//! 3. Otherwise the first blend occurrence (ST SP SK SM SN SL SW SC) is
//!    masked whole.
//! 4. Otherwise one character at a uniformly random position is masked.
//!
//! The answer options are the masked substring plus three distractors, drawn
//! first from a visual/phonetic confusability table and padded with random
//! letters until exactly [`OPTION_COUNT`] unique options exist, then shuffled.

use arrayvec::ArrayVec;
use thiserror::Error;

use crate::rng::SimpleRng;
use tui_wordquiz_types::{
    WordRecord, MASK_CHAR, MIN_QUIZ_WORD_LEN, OPTION_COUNT, SHORT_WORD_MAX_LEN,
};

/// Consonant digraphs, scanned before blends
pub const DIGRAPHS: [&str; 5] = ["SH", "CH", "TH", "PH", "WH"];

/// S-blends, scanned after digraphs
pub const BLENDS: [&str; 8] = ["ST", "SP", "SK", "SM", "SN", "SL", "SW", "SC"];

/// Distractors offered when the answer has no confusability entry
const DEFAULT_DISTRACTORS: &[&str] = &["SH", "ST", "SP"];

/// Visual/phonetic confusability table, keyed by the correct answer.
///
/// Single letters list look-alike or sound-alike letters; the two-letter
/// entries cover the digraphs and the most common blends. Answers without an
/// entry fall back to [`DEFAULT_DISTRACTORS`].
const CONFUSABLE: [(&str, &[&str]); 35] = [
    ("A", &["E", "O", "U"]),
    ("B", &["D", "P", "R"]),
    ("C", &["K", "S", "O"]),
    ("D", &["B", "P", "T"]),
    ("E", &["A", "I", "O"]),
    ("F", &["T", "E", "H"]),
    ("G", &["J", "C", "Q"]),
    ("H", &["N", "K", "M"]),
    ("I", &["E", "L", "J"]),
    ("J", &["G", "I", "Y"]),
    ("K", &["C", "X", "H"]),
    ("L", &["I", "R", "T"]),
    ("M", &["N", "W", "H"]),
    ("N", &["M", "H", "U"]),
    ("O", &["A", "E", "U"]),
    ("P", &["B", "D", "Q"]),
    ("Q", &["O", "G"]),
    ("R", &["B", "P", "N"]),
    ("S", &["C", "Z", "X"]),
    ("T", &["F", "D", "L"]),
    ("U", &["O", "A", "V"]),
    ("V", &["U", "W", "Y"]),
    ("W", &["V", "M", "U"]),
    ("X", &["K", "S"]),
    ("Y", &["V", "J", "I"]),
    ("Z", &["S", "X", "N"]),
    ("SH", &["CH", "TH", "WH"]),
    ("CH", &["SH", "TH", "PH"]),
    ("TH", &["SH", "CH", "WH"]),
    ("PH", &["TH", "WH", "SH"]),
    ("WH", &["SH", "TH", "PH"]),
    ("ST", &["SP", "SK", "SL"]),
    ("SP", &["ST", "SK", "SM"]),
    ("SK", &["SC", "ST", "SP"]),
    ("SL", &["SW", "ST", "SN"]),
];

/// One quiz round's question: a masked word and its answer options.
///
/// Invariant: `options` holds exactly [`OPTION_COUNT`] distinct entries and
/// contains `answer` exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    /// The word this puzzle was generated from
    pub word: WordRecord,
    /// Uppercased word with the masked span replaced by [`MASK_CHAR`]s
    pub masked: String,
    /// The masked substring (one or two uppercase letters)
    pub answer: String,
    pub options: ArrayVec<String, OPTION_COUNT>,
}

/// A word that cannot be turned into a puzzle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidWordError {
    #[error("word text is empty")]
    Empty,
    /// Index 0 is never masked, so one-character words have no legal mask.
    #[error("word {0:?} has no maskable position")]
    TooShort(String),
}

/// Whether a word is long enough to quiz.
pub fn is_quizzable(word: &WordRecord) -> bool {
    word.text.trim().chars().count() >= MIN_QUIZ_WORD_LEN
}

/// Generate a puzzle for `word`, drawing randomness from `rng`.
pub fn generate_puzzle(
    word: &WordRecord,
    rng: &mut SimpleRng,
) -> Result<Puzzle, InvalidWordError> {
    let chars: Vec<char> = word.text.trim().to_uppercase().chars().collect();
    let (start, len) = mask_span(&chars, rng)?;

    let answer: String = chars[start..start + len].iter().collect();
    let masked: String = chars
        .iter()
        .enumerate()
        .map(|(i, &c)| {
            if i >= start && i < start + len {
                MASK_CHAR
            } else {
                c
            }
        })
        .collect();
    let options = build_options(&answer, rng);

    Ok(Puzzle {
        word: word.clone(),
        masked,
        answer,
        options,
    })
}

/// Pick the span to mask: `(start, len)` in characters.
fn mask_span(chars: &[char], rng: &mut SimpleRng) -> Result<(usize, usize), InvalidWordError> {
    let len = chars.len();
    if len == 0 {
        return Err(InvalidWordError::Empty);
    }
    if len < MIN_QUIZ_WORD_LEN {
        return Err(InvalidWordError::TooShort(chars.iter().collect()));
    }

    if len <= SHORT_WORD_MAX_LEN {
        // Interior position only: index 1 for 2-letter words, 1 or 2 otherwise.
        let candidates = (len - 1).min(2) as u32;
        let pos = 1 + rng.next_range(candidates) as usize;
        return Ok((pos, 1));
    }

    if let Some(i) = find_first(chars, &DIGRAPHS) {
        return Ok((i, 2));
    }
    if let Some(i) = find_first(chars, &BLENDS) {
        return Ok((i, 2));
    }

    Ok((rng.next_range(len as u32) as usize, 1))
}

/// Leftmost position where any of `patterns` occurs, scanning left to right.
fn find_first(chars: &[char], patterns: &[&str]) -> Option<usize> {
    for i in 0..chars.len().saturating_sub(1) {
        let pair: String = chars[i..i + 2].iter().collect();
        if patterns.contains(&pair.as_str()) {
            return Some(i);
        }
    }
    None
}

fn confusable_candidates(answer: &str) -> &'static [&'static str] {
    for &(key, set) in CONFUSABLE.iter() {
        if key == answer {
            return set;
        }
    }
    DEFAULT_DISTRACTORS
}

/// Assemble the answer plus three distractors and shuffle.
fn build_options(answer: &str, rng: &mut SimpleRng) -> ArrayVec<String, OPTION_COUNT> {
    let mut options: ArrayVec<String, OPTION_COUNT> = ArrayVec::new();
    options.push(answer.to_string());

    for candidate in confusable_candidates(answer) {
        if options.is_full() {
            break;
        }
        if options.iter().any(|o| o == candidate) {
            continue;
        }
        options.push((*candidate).to_string());
    }

    // Pad with fresh random letters when the table ran short.
    while !options.is_full() {
        let letter = rng.letter().to_string();
        if options.iter().any(|o| *o == letter) {
            continue;
        }
        options.push(letter);
    }

    rng.shuffle(&mut options);
    options
}
