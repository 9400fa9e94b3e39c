//! Per-letter knowledge aggregated over a guess history
//!
//! Drives the keyboard overlay: every letter of the alphabet carries the best
//! status any guess has revealed for it so far.

use super::feedback::Mark;
use super::{Feedback, Word};

const ALPHABET_LEN: usize = 26;

/// Best-known status of a single letter
///
/// Ordered by priority: `Unknown < Absent < Present < Correct`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterStatus {
    #[default]
    Unknown,
    Absent,
    Present,
    Correct,
}

impl From<Mark> for LetterStatus {
    fn from(mark: Mark) -> Self {
        match mark {
            Mark::Absent => Self::Absent,
            Mark::Present => Self::Present,
            Mark::Correct => Self::Correct,
        }
    }
}

/// A submitted guess paired with the feedback it received
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    pub word: Word,
    pub feedback: Feedback,
}

impl GuessRecord {
    #[must_use]
    pub const fn new(word: Word, feedback: Feedback) -> Self {
        Self { word, feedback }
    }

    /// Letters paired with their marks, in position order
    pub fn letters(&self) -> impl Iterator<Item = (u8, Mark)> + '_ {
        self.word
            .chars()
            .iter()
            .copied()
            .zip(self.feedback.marks().iter().copied())
    }
}

/// Status of every letter a-z
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LetterKnowledge([LetterStatus; ALPHABET_LEN]);

impl LetterKnowledge {
    /// Fold a full history into per-letter knowledge
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{GuessRecord, LetterKnowledge, LetterStatus, Word, evaluate};
    ///
    /// let secret = Word::new("chair").unwrap();
    /// let guess = Word::new("error").unwrap();
    /// let record = GuessRecord::new(guess.clone(), evaluate(&secret, &guess));
    ///
    /// let knowledge = LetterKnowledge::aggregate(&[record]);
    /// // Absent at indices 1 and 2 does not hide the Correct at index 4
    /// assert_eq!(knowledge.status(b'r'), LetterStatus::Correct);
    /// assert_eq!(knowledge.status(b'e'), LetterStatus::Absent);
    /// assert_eq!(knowledge.status(b'z'), LetterStatus::Unknown);
    /// ```
    #[must_use]
    pub fn aggregate(history: &[GuessRecord]) -> Self {
        history.iter().fold(Self::default(), |mut knowledge, record| {
            knowledge.record(record);
            knowledge
        })
    }

    /// Merge one more record; a letter's status never goes down
    pub fn record(&mut self, record: &GuessRecord) {
        for (letter, mark) in record.letters() {
            if let Some(slot) = index_of(letter).map(|i| &mut self.0[i]) {
                *slot = (*slot).max(LetterStatus::from(mark));
            }
        }
    }

    /// Status of a letter; anything outside a-z is `Unknown`
    #[must_use]
    pub fn status(&self, letter: u8) -> LetterStatus {
        index_of(letter.to_ascii_lowercase()).map_or(LetterStatus::Unknown, |i| self.0[i])
    }

    /// Every letter a-z with its status, in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = (u8, LetterStatus)> + '_ {
        (b'a'..=b'z').zip(self.0.iter().copied())
    }

    /// Letters currently known to hold the given status
    #[must_use]
    pub fn letters_with(&self, status: LetterStatus) -> Vec<u8> {
        self.iter()
            .filter(|&(_, s)| s == status)
            .map(|(letter, _)| letter)
            .collect()
    }
}

fn index_of(letter: u8) -> Option<usize> {
    letter
        .is_ascii_lowercase()
        .then(|| usize::from(letter - b'a'))
}
