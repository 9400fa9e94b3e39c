//! Guess feedback calculation and representation
//!
//! Each position of a guess is classified as:
//! - Absent (letter not in the secret, after accounting for duplicates)
//! - Present (letter in the secret, wrong position)
//! - Correct (letter in the correct position)

use super::Word;
use super::word::WORD_LEN;
use std::fmt;
use std::str::FromStr;

/// Per-position classification of a guessed letter
///
/// Ordered by how much it reveals: `Absent < Present < Correct`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Mark {
    Absent,
    Present,
    Correct,
}

impl Mark {
    /// Single-character code used by [`Feedback::parse`] and plain output
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Absent => '-',
            Self::Present => 'Y',
            Self::Correct => 'G',
        }
    }

    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Absent => '⬜',
            Self::Present => '🟨',
            Self::Correct => '🟩',
        }
    }
}

/// Feedback for one guess, positionally aligned with the guessed word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Mark; WORD_LEN]);

impl Feedback {
    /// All greens (perfect match)
    pub const PERFECT: Self = Self([Mark::Correct; WORD_LEN]);

    #[inline]
    #[must_use]
    pub const fn new(marks: [Mark; WORD_LEN]) -> Self {
        Self(marks)
    }

    #[inline]
    #[must_use]
    pub const fn marks(&self) -> &[Mark; WORD_LEN] {
        &self.0
    }

    /// Mark at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn mark_at(&self, position: usize) -> Mark {
        self.0[position]
    }

    /// Check if every position is Correct
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.0.iter().all(|&m| m == Mark::Correct)
    }

    /// Count positions carrying the given mark
    #[must_use]
    pub fn count(&self, mark: Mark) -> usize {
        self.0.iter().filter(|&&m| m == mark).count()
    }

    /// Parse feedback from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for Correct
    /// - 'Y'/'y'/🟨 for Present
    /// - '-'/'_'/⬜ for Absent
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Feedback;
    ///
    /// let f1 = Feedback::parse("GY-GY").unwrap();
    /// let f2 = Feedback::parse("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(f1, f2);
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let chars: Vec<char> = s.chars().collect();

        if chars.len() != WORD_LEN {
            return None;
        }

        let mut marks = [Mark::Absent; WORD_LEN];
        for (slot, ch) in marks.iter_mut().zip(chars) {
            *slot = match ch {
                'G' | 'g' | '🟩' => Mark::Correct,
                'Y' | 'y' | '🟨' => Mark::Present,
                '-' | '_' | '⬜' => Mark::Absent,
                _ => return None,
            };
        }

        Some(Self(marks))
    }

    /// Convert feedback to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|m| m.emoji()).collect()
    }
}

impl FromStr for Feedback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid feedback string: {s}"))
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in &self.0 {
            write!(f, "{}", mark.code())?;
        }
        Ok(())
    }
}

/// Compare `guess` against `secret`
///
/// This implements Wordle's exact feedback rules, including proper handling
/// of duplicate letters.
///
/// # Algorithm
/// 1. First pass: mark exact matches Correct; every other secret letter goes
///    into the pool of unmatched letters
/// 2. Second pass: left to right, a non-Correct position is Present if its
///    letter is still in the pool (consuming one occurrence), else Absent
///
/// # Examples
/// ```
/// use wordle_game::core::{Feedback, Word, evaluate};
///
/// let secret = Word::new("chair").unwrap();
/// let guess = Word::new("error").unwrap();
///
/// // Only the final R matches; the secret has no R left for the others
/// assert_eq!(evaluate(&secret, &guess), Feedback::parse("----G").unwrap());
/// ```
#[must_use]
pub fn evaluate(secret: &Word, guess: &Word) -> Feedback {
    let mut marks = [Mark::Absent; WORD_LEN];
    let mut unmatched = secret.char_counts();

    // Allow: Index needed to access guess[i], secret[i], and set marks[i]
    #[allow(clippy::needless_range_loop)]
    for i in 0..WORD_LEN {
        if guess.char_at(i) == secret.char_at(i) {
            marks[i] = Mark::Correct;
            if let Some(count) = unmatched.get_mut(&guess.char_at(i)) {
                *count -= 1;
            }
        }
    }

    #[allow(clippy::needless_range_loop)]
    for i in 0..WORD_LEN {
        if marks[i] == Mark::Correct {
            continue;
        }
        if let Some(count) = unmatched.get_mut(&guess.char_at(i))
            && *count > 0
        {
            marks[i] = Mark::Present;
            *count -= 1;
        }
    }

    Feedback(marks)
}
