//! Catalog module - loads and indexes the vocabulary list
//!
//! A catalog is an ordered list of [`WordRecord`]s for one language, loaded
//! once from a static JSON data file (`words.<tag>.json`). After loading, the
//! catalog is immutable: lookups go through a derived text→position index and
//! every indexed record is also present in the ordered sequence.
//!
//! Malformed entries (empty text, words too short to mask, unknown category,
//! duplicate text) are skipped and counted rather than failing the load. Only
//! a file that yields no usable entry at all is an error.
//!
//! # Data file format
//!
//! ```json
//! [
//!   { "word": "ship", "phonetic": "/shĭp/", "category": "digraph" },
//!   { "word": "cat",  "phonetic": "/kăt/",  "category": "simple" }
//! ]
//! ```
//!
//! # Example
//!
//! ```
//! use tui_wordquiz_catalog::Catalog;
//!
//! let catalog = Catalog::from_json_str(
//!     r#"[{"word": "ship", "phonetic": "/shĭp/", "category": "digraph"}]"#,
//! )
//! .unwrap();
//! assert_eq!(catalog.len(), 1);
//! assert!(catalog.get("SHIP").is_some());
//! ```

pub mod error;

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use tui_wordquiz_types::{WordCategory, WordRecord, MIN_QUIZ_WORD_LEN};

pub use error::{CatalogError, Result};

/// One entry as it appears in the JSON data file, before validation.
#[derive(Debug, Deserialize)]
struct RawEntry {
    word: String,
    #[serde(default)]
    phonetic: String,
    category: String,
}

/// An immutable, indexed vocabulary list for one language.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    words: Vec<WordRecord>,
    /// Uppercased text → position in `words`. Keys are unique.
    index: HashMap<String, usize>,
    skipped: usize,
}

impl Catalog {
    /// Load the catalog for a language tag from `data_dir/words.<tag>.json`.
    pub fn load_language(data_dir: &Path, tag: &str) -> Result<Self> {
        let path = data_dir.join(format!("words.{tag}.json"));
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Parse a catalog from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: Vec<RawEntry> = serde_json::from_str(json)?;
        let mut catalog = Catalog::default();
        for entry in raw {
            match validate(&entry) {
                Some(record) => catalog.push_unique(record),
                None => catalog.skipped += 1,
            }
        }
        if catalog.words.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(catalog)
    }

    /// Build a catalog from already-validated records.
    ///
    /// Duplicate texts are skipped and counted, preserving the key-uniqueness
    /// invariant of the index.
    pub fn from_records(records: Vec<WordRecord>) -> Result<Self> {
        let mut catalog = Catalog::default();
        for record in records {
            catalog.push_unique(record);
        }
        if catalog.words.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(catalog)
    }

    fn push_unique(&mut self, record: WordRecord) {
        let key = record.text.to_uppercase();
        if self.index.contains_key(&key) {
            self.skipped += 1;
            return;
        }
        self.index.insert(key, self.words.len());
        self.words.push(record);
    }

    /// Exact lookup by word text (case-insensitive).
    pub fn get(&self, text: &str) -> Option<&WordRecord> {
        self.index
            .get(&text.to_uppercase())
            .map(|&i| &self.words[i])
    }

    /// All records, in file order.
    pub fn words(&self) -> &[WordRecord] {
        &self.words
    }

    pub fn iter(&self) -> impl Iterator<Item = &WordRecord> {
        self.words.iter()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of malformed or duplicate entries dropped during load.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Case-insensitive substring search, in file order.
    ///
    /// An empty query matches everything (the browse list's unfiltered state).
    pub fn search(&self, query: &str) -> Vec<&WordRecord> {
        let needle = query.to_uppercase();
        self.words
            .iter()
            .filter(|w| w.text.to_uppercase().contains(&needle))
            .collect()
    }
}

/// Validate one raw entry into a `WordRecord`.
///
/// Returns `None` for entries that cannot be quizzed: blank text, text too
/// short to leave a maskable position, or an unknown category.
fn validate(entry: &RawEntry) -> Option<WordRecord> {
    let text = entry.word.trim();
    if text.chars().count() < MIN_QUIZ_WORD_LEN {
        return None;
    }
    let category = WordCategory::from_str(entry.category.trim())?;
    Some(WordRecord::new(text, entry.phonetic.trim(), category))
}
