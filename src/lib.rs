//! Wordle Game
//!
//! Guess a five letter secret in six tries. Each guess is scored letter by
//! letter, with repeated letters only credited as often as the secret holds
//! them, and the board keeps a per-letter summary of everything learned.
//!
//! # Quick Start
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use wordle_game::dictionary::Dictionary;
//! use wordle_game::game::{GameSession, GameStatus};
//!
//! let dict = Dictionary::embedded();
//! let mut rng = StdRng::seed_from_u64(42);
//! let mut session = GameSession::create(Some("midst"), &dict, &mut rng).unwrap();
//!
//! let outcome = session.submit_guess("tidal").unwrap();
//! assert_eq!(outcome.feedback.to_string(), "YGG--");
//!
//! let outcome = session.submit_guess("midst").unwrap();
//! assert_eq!(outcome.status, GameStatus::Won);
//! ```

// Core domain types
pub mod core;

// Game engine
pub mod game;

// Word lists
pub mod dictionary;

// Runtime configuration
pub mod config;

// Word meaning lookup
pub mod meaning;

// Tracing setup
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
