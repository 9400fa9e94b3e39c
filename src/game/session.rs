//! Single-game state machine
//!
//! A session moves `InProgress → Won | Lost` by appending validated guesses.
//! Once terminal it rejects guesses until [`GameSession::reset`] assigns a new
//! secret.

use super::GameError;
use crate::core::{Feedback, GuessRecord, LetterKnowledge, WORD_LEN, Word, evaluate};
use crate::dictionary::WordSource;
use rand::RngCore;
use std::fmt;

/// Number of guesses a player gets per game
pub const MAX_ATTEMPTS: usize = 6;

/// Progress of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::InProgress => "in progress",
            Self::Won => "won",
            Self::Lost => "lost",
        };
        f.write_str(text)
    }
}

/// Result of an accepted guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnOutcome {
    pub feedback: Feedback,
    pub status: GameStatus,
}

/// One game of Wordle against a fixed secret
///
/// The session borrows its dictionary for guess validation; it never performs
/// I/O of its own.
pub struct GameSession<'a, D: WordSource + ?Sized> {
    dictionary: &'a D,
    secret: Word,
    history: Vec<GuessRecord>,
    status: GameStatus,
}

impl<'a, D: WordSource + ?Sized> GameSession<'a, D> {
    /// Start a session against a known secret
    #[must_use]
    pub const fn new(secret: Word, dictionary: &'a D) -> Self {
        Self {
            dictionary,
            secret,
            history: Vec::new(),
            status: GameStatus::InProgress,
        }
    }

    /// Start a session, drawing the secret from the dictionary when none is given
    ///
    /// An explicit secret must itself pass the same checks as a guess.
    ///
    /// # Errors
    ///
    /// - `InvalidLength` / `UnknownWord` if the explicit secret is not a valid word
    /// - `NoSecretAvailable` if the dictionary has no five-letter word to offer
    ///
    /// # Examples
    /// ```
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    /// use wordle_game::dictionary::Dictionary;
    /// use wordle_game::game::{GameSession, GameStatus};
    ///
    /// let dict = Dictionary::from_words(["midst", "tidal"]);
    /// let mut rng = StdRng::seed_from_u64(1);
    ///
    /// let mut session = GameSession::create(Some("midst"), &dict, &mut rng).unwrap();
    /// let outcome = session.submit_guess("tidal").unwrap();
    /// assert_eq!(outcome.feedback.to_string(), "YGG--");
    /// assert_eq!(outcome.status, GameStatus::InProgress);
    /// ```
    pub fn create(
        secret: Option<&str>,
        dictionary: &'a D,
        rng: &mut dyn RngCore,
    ) -> Result<Self, GameError> {
        let secret = match secret {
            Some(text) => validate(text, dictionary)?,
            None => random_secret(dictionary, rng)?,
        };
        Ok(Self::new(secret, dictionary))
    }

    /// Submit a guess
    ///
    /// Checks run in order: the session is still in progress, the guess has
    /// five letters, the dictionary knows it. A rejected guess leaves the
    /// session untouched and costs no attempt.
    ///
    /// # Errors
    ///
    /// `SessionTerminal`, `InvalidLength` or `UnknownWord`, per the failed check.
    pub fn submit_guess(&mut self, candidate: &str) -> Result<TurnOutcome, GameError> {
        if self.status.is_terminal() {
            return Err(GameError::SessionTerminal(self.status));
        }

        let guess = validate(candidate, self.dictionary)?;
        let feedback = evaluate(&self.secret, &guess);
        self.history.push(GuessRecord::new(guess, feedback));

        if feedback.is_win() {
            self.status = GameStatus::Won;
        } else if self.history.len() == MAX_ATTEMPTS {
            self.status = GameStatus::Lost;
        }

        Ok(TurnOutcome {
            feedback,
            status: self.status,
        })
    }

    /// Per-letter knowledge over every guess so far
    #[must_use]
    pub fn knowledge(&self) -> LetterKnowledge {
        LetterKnowledge::aggregate(&self.history)
    }

    /// Start over against a new secret, whatever the current state
    pub fn reset(&mut self, new_secret: Word) {
        self.secret = new_secret;
        self.history.clear();
        self.status = GameStatus::InProgress;
    }

    /// Start over against a secret drawn from the dictionary
    ///
    /// # Errors
    ///
    /// `NoSecretAvailable` if the dictionary has no five-letter word; the
    /// session is left as it was.
    pub fn reset_random(&mut self, rng: &mut dyn RngCore) -> Result<(), GameError> {
        let secret = random_secret(self.dictionary, rng)?;
        self.reset(secret);
        Ok(())
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    #[must_use]
    pub fn attempts(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn remaining_attempts(&self) -> usize {
        MAX_ATTEMPTS - self.history.len()
    }

    /// The secret, for end-of-game reveal (or cheating)
    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    #[must_use]
    pub const fn dictionary(&self) -> &'a D {
        self.dictionary
    }
}

impl<D: WordSource + ?Sized> fmt::Debug for GameSession<'_, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameSession")
            .field("attempts", &self.history.len())
            .field("status", &self.status)
            .finish_non_exhaustive()
    }
}

fn validate<D: WordSource + ?Sized>(candidate: &str, dictionary: &D) -> Result<Word, GameError> {
    let candidate = candidate.trim();

    let actual = candidate.chars().count();
    if actual != WORD_LEN {
        return Err(GameError::InvalidLength {
            expected: WORD_LEN,
            actual,
        });
    }

    let unknown = || GameError::UnknownWord(candidate.to_lowercase());
    if !dictionary.is_valid_word(candidate) {
        return Err(unknown());
    }
    Word::new(candidate).map_err(|_| unknown())
}

fn random_secret<D: WordSource + ?Sized>(
    dictionary: &D,
    rng: &mut dyn RngCore,
) -> Result<Word, GameError> {
    let text = dictionary
        .sample_word_of_length(WORD_LEN, rng)
        .ok_or(GameError::NoSecretAvailable)?;
    Word::new(text.as_str()).map_err(|_| GameError::UnknownWord(text))
}
