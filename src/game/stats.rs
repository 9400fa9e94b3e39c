//! Win/loss bookkeeping across replayed games

use super::{GameSession, GameStatus, MAX_ATTEMPTS};
use crate::dictionary::WordSource;

/// Running totals for one process
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// `guess_distribution[n - 1]` counts games won in `n` guesses
    pub guess_distribution: [usize; MAX_ATTEMPTS],
    pub current_streak: usize,
    pub max_streak: usize,
}

impl Statistics {
    /// Record a finished session; sessions still in progress are ignored
    pub fn record<D: WordSource + ?Sized>(&mut self, session: &GameSession<'_, D>) {
        match session.status() {
            GameStatus::InProgress => {}
            GameStatus::Won => {
                self.total_games += 1;
                self.games_won += 1;
                self.guess_distribution[session.attempts() - 1] += 1;
                self.current_streak += 1;
                self.max_streak = self.max_streak.max(self.current_streak);
            }
            GameStatus::Lost => {
                self.total_games += 1;
                self.current_streak = 0;
            }
        }
    }

    #[must_use]
    pub fn games_lost(&self) -> usize {
        self.total_games - self.games_won
    }

    /// Percentage of games won, 0 when nothing has been played
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::dictionary::Dictionary;

    fn play(dict: &Dictionary, secret: &str, guesses: &[&str]) -> Statistics {
        let mut stats = Statistics::default();
        let mut game = GameSession::new(Word::new(secret).unwrap(), dict);
        for guess in guesses {
            game.submit_guess(guess).unwrap();
        }
        stats.record(&game);
        stats
    }

    #[test]
    fn records_win_in_distribution() {
        let dict = Dictionary::from_words(["midst", "tidal"]);
        let stats = play(&dict, "midst", &["tidal", "midst"]);
        assert_eq!(stats.total_games, 1);
        assert_eq!(stats.games_won, 1);
        assert_eq!(stats.guess_distribution, [0, 1, 0, 0, 0, 0]);
        assert_eq!(stats.current_streak, 1);
        assert!((stats.win_rate() - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn loss_resets_streak() {
        let dict = Dictionary::from_words(["midst", "tidal", "daily"]);
        let mut stats = Statistics::default();

        let mut game = GameSession::new(Word::new("midst").unwrap(), &dict);
        game.submit_guess("midst").unwrap();
        stats.record(&game);

        game.reset(Word::new("daily").unwrap());
        for _ in 0..MAX_ATTEMPTS {
            game.submit_guess("tidal").unwrap();
        }
        stats.record(&game);

        assert_eq!(stats.total_games, 2);
        assert_eq!(stats.games_lost(), 1);
        assert_eq!(stats.current_streak, 0);
        assert_eq!(stats.max_streak, 1);
        assert!((stats.win_rate() - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn in_progress_is_not_counted() {
        let dict = Dictionary::from_words(["midst", "tidal"]);
        let stats = play(&dict, "midst", &["tidal"]);
        assert_eq!(stats, Statistics::default());
        assert!(stats.win_rate().abs() < f64::EPSILON);
    }
}
