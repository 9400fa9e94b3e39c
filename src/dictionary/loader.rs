//! Dictionary loading utilities
//!
//! Dictionary files hold one word per line; blank lines are ignored.

use super::Dictionary;
use std::fs;
use std::io;
use std::path::Path;

/// Load a dictionary from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_game::dictionary::loader::load_from_file;
///
/// let dict = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", dict.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Dictionary> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let dict = Dictionary::from_words(content.lines());

    tracing::debug!(
        path = %path.display(),
        words = dict.len(),
        five_letter = dict.count_of_length(crate::core::WORD_LEN),
        "loaded dictionary file"
    );

    Ok(dict)
}
