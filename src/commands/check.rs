//! One-shot feedback check
//!
//! Evaluates a single guess against a given secret without starting a game.

use crate::core::{Feedback, Word, WordError, evaluate};

/// Result of checking one guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub secret: Word,
    pub guess: Word,
    pub feedback: Feedback,
}

/// Compare `guess` against `secret`
///
/// Neither word is checked against a dictionary; any five letters will do.
///
/// # Errors
///
/// Returns `WordError` if either argument is not five letters a-z.
pub fn check_guess(secret: &str, guess: &str) -> Result<CheckResult, WordError> {
    let secret = Word::new(secret)?;
    let guess = Word::new(guess)?;
    let feedback = evaluate(&secret, &guess);
    Ok(CheckResult {
        secret,
        guess,
        feedback,
    })
}
