//! Dictionary lookups for the game
//!
//! The game only needs two things from a dictionary: a membership test for
//! guesses and, when no secret is given, a random word of the right length.
//! [`WordSource`] captures that; [`Dictionary`] is the in-memory implementation
//! backed by the embedded list or a one-word-per-line file.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use rand::RngCore;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;

/// Capability the game engine requires from a dictionary
pub trait WordSource {
    /// Case-insensitive membership test
    fn is_valid_word(&self, word: &str) -> bool;

    /// Pick a word of exactly `len` letters a-z, or `None` if there is none
    fn sample_word_of_length(&self, len: usize, rng: &mut dyn RngCore) -> Option<String>;
}

/// Set-backed dictionary
///
/// Entries are trimmed and lowercased; blank entries and duplicates are dropped.
/// Words of any length are members; sampling only considers plain a-z words.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: Vec<String>,
    index: FxHashSet<String>,
}

impl Dictionary {
    /// Build a dictionary from any list of words
    ///
    /// # Examples
    /// ```
    /// use wordle_game::dictionary::{Dictionary, WordSource};
    ///
    /// let dict = Dictionary::from_words(["cat", " Tidal ", ""]);
    /// assert_eq!(dict.len(), 2);
    /// assert!(dict.is_valid_word("TIDAL"));
    /// assert!(!dict.is_valid_word("bilibili"));
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dict = Self::default();
        for word in words {
            let word = word.as_ref().trim().to_lowercase();
            if !word.is_empty() && dict.index.insert(word.clone()) {
                dict.words.push(word);
            }
        }
        dict
    }

    /// Dictionary built from the list compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_words(WORDS)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words in the order they were loaded
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Number of entries with exactly `len` letters
    #[must_use]
    pub fn count_of_length(&self, len: usize) -> usize {
        self.words.iter().filter(|w| w.chars().count() == len).count()
    }
}

impl WordSource for Dictionary {
    fn is_valid_word(&self, word: &str) -> bool {
        self.index.contains(&word.trim().to_lowercase())
    }

    fn sample_word_of_length(&self, len: usize, rng: &mut dyn RngCore) -> Option<String> {
        let qualified: Vec<&String> = self
            .words
            .iter()
            .filter(|w| w.len() == len && w.bytes().all(|b| b.is_ascii_lowercase()))
            .collect();
        qualified.choose(rng).map(|w| (*w).clone())
    }
}
