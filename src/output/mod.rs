//! Terminal output formatting
//!
//! Maps feedback marks and letter knowledge to colored text for the
//! line-based game and the `check` command.

pub mod display;
pub mod formatters;

pub use display::{print_check_result, write_board, write_game_over, write_statistics};
