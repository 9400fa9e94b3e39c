//! Game engine
//!
//! Turn-based session state, its errors and cross-game statistics.

mod error;
mod session;
mod stats;

pub use error::GameError;
pub use session::{GameSession, GameStatus, MAX_ATTEMPTS, TurnOutcome};
pub use stats::Statistics;
