//! Runtime configuration for the game shells
//!
//! [`PlayConfig`] is the plain settings bag built from the command line;
//! [`GameContext`] is what the shells carry around while playing. It owns the
//! random source for secret selection and the output policy, so nothing in the
//! crate reaches for process-wide state.

use crate::dictionary::{Dictionary, loader::load_from_file};
use anyhow::{Context, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;

/// How the line-based shell renders output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputStyle {
    /// Use ANSI colors for letters and banners
    pub color: bool,
    /// Clear the screen before redrawing the board
    pub clear_screen: bool,
    /// Leave letters known to be absent blank on the keyboard line
    pub hide_absent: bool,
}

impl Default for OutputStyle {
    fn default() -> Self {
        Self {
            color: true,
            clear_screen: true,
            hide_absent: true,
        }
    }
}

impl OutputStyle {
    /// No colors, no screen clearing; suitable for pipes and tests
    #[must_use]
    pub const fn plain() -> Self {
        Self {
            color: false,
            clear_screen: false,
            hide_absent: true,
        }
    }
}

/// Settings for a play session, usually filled from CLI flags
#[derive(Debug, Clone, Default)]
pub struct PlayConfig {
    /// Dictionary file; the embedded list when `None`
    pub dict_path: Option<PathBuf>,
    /// Explicit secret for the first game
    pub secret: Option<String>,
    /// Seed for secret selection; OS entropy when `None`
    pub seed: Option<u64>,
    /// Print the secret before the first guess
    pub cheat: bool,
    /// Keep starting new games until the player quits
    pub replay: bool,
    /// Look up the secret's meaning when a game ends
    pub meaning: bool,
    pub style: OutputStyle,
}

impl PlayConfig {
    /// Load the configured dictionary
    ///
    /// # Errors
    ///
    /// Returns an error if the dictionary file cannot be read.
    pub fn load_dictionary(&self) -> Result<Dictionary> {
        let dict = match &self.dict_path {
            Some(path) => load_from_file(path)
                .with_context(|| format!("Failed to load dictionary {}", path.display()))?,
            None => Dictionary::embedded(),
        };
        tracing::info!(words = dict.len(), "dictionary ready");
        Ok(dict)
    }

    /// Build the context the shells play with
    #[must_use]
    pub fn context(&self) -> GameContext {
        GameContext::new(self.seed, self.style)
    }
}

/// Mutable state shared by every game in one run
#[derive(Debug)]
pub struct GameContext {
    rng: StdRng,
    pub style: OutputStyle,
}

impl GameContext {
    #[must_use]
    pub fn new(seed: Option<u64>, style: OutputStyle) -> Self {
        let rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        Self { rng, style }
    }

    /// Random source for secret selection
    pub fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::WordSource;
    use rand::RngCore;
    use std::io::Write;

    #[test]
    fn seeded_contexts_agree() {
        let mut a = GameContext::new(Some(11), OutputStyle::plain());
        let mut b = GameContext::new(Some(11), OutputStyle::plain());
        assert_eq!(a.rng().next_u64(), b.rng().next_u64());
    }

    #[test]
    fn default_dictionary_is_embedded() {
        let dict = PlayConfig::default().load_dictionary().unwrap();
        assert_eq!(dict.len(), crate::dictionary::WORDS_COUNT);
    }

    #[test]
    fn dictionary_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "midst\ntidal").unwrap();

        let config = PlayConfig {
            dict_path: Some(file.path().to_path_buf()),
            ..PlayConfig::default()
        };
        let dict = config.load_dictionary().unwrap();
        assert_eq!(dict.len(), 2);
        assert!(dict.is_valid_word("tidal"));
    }

    #[test]
    fn missing_dictionary_file_reports_path() {
        let config = PlayConfig {
            dict_path: Some(PathBuf::from("/definitely/not/here.txt")),
            ..PlayConfig::default()
        };
        let err = config.load_dictionary().unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.txt"));
    }
}
