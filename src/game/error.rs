//! Errors returned by the game engine

use super::GameStatus;
use crate::core::WORD_LEN;
use thiserror::Error;

/// Why a session could not be created or a guess was rejected
///
/// Every variant is recoverable: the caller re-prompts or resets. A rejected
/// guess never consumes an attempt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("guess must be {expected} letters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("{0}: not a word")]
    UnknownWord(String),

    #[error("game is already over ({0})")]
    SessionTerminal(GameStatus),

    #[error("dictionary has no {WORD_LEN}-letter words to pick a secret from")]
    NoSecretAvailable,
}
