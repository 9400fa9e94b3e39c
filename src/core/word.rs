//! Wordle word representation
//!
//! A Word stores exactly [`WORD_LEN`] lowercase ASCII letters.

use rustc_hash::FxHashMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of letters in every secret and guess
pub const WORD_LEN: usize = 5;

/// A 5-letter Wordle word
///
/// Input is case-insensitive and normalized to lowercase on construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    chars: [u8; WORD_LEN],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must be exactly {WORD_LEN} letters, got {0}")]
    InvalidLength(usize),
    #[error("Word must contain only the letters a-z")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5 characters
    /// - Contains anything other than the letters a-z (in either case)
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    ///
    /// let word = Word::new("Crane").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let mut text: String = text.into();

        let len = text.chars().count();
        if len != WORD_LEN {
            return Err(WordError::InvalidLength(len));
        }

        // Checked before folding case: some non-ASCII letters lowercase to a-z
        if !text.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(WordError::InvalidCharacters);
        }
        text.make_ascii_lowercase();

        let mut chars = [0u8; WORD_LEN];
        chars.copy_from_slice(text.as_bytes());

        Ok(Self { text, chars })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LEN] {
        &self.chars
    }

    /// Get the character at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> u8 {
        self.chars[position]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.chars.contains(&letter)
    }

    /// Get the count of each letter in the word
    #[inline]
    pub(crate) fn char_counts(&self) -> FxHashMap<u8, u8> {
        let mut counts = FxHashMap::default();
        for &ch in &self.chars {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

impl FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
