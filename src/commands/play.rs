//! Line-based game shell
//!
//! Reads one guess per line from any buffered reader and redraws the board
//! after every accepted guess. With replay on, a finished game is followed by
//! a fresh random secret until the player quits.

use crate::config::{GameContext, OutputStyle, PlayConfig};
use crate::dictionary::Dictionary;
use crate::game::{GameError, GameSession, Statistics};
use crate::meaning::{MeaningSource, describe};
use crate::output::{write_board, write_game_over, write_statistics};
use anyhow::Result;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{BufRead, Write};
use std::time::Duration;

const QUIT_COMMANDS: [&str; 3] = ["quit", "exit", ":q"];

/// Play until the input runs out, the player quits, or (without replay) the
/// first game ends
///
/// Returns the statistics of every finished game.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails, or if no
/// secret can be chosen.
pub fn run_play<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    config: &PlayConfig,
    dictionary: &Dictionary,
    ctx: &mut GameContext,
    meaning: Option<&dyn MeaningSource>,
) -> Result<Statistics> {
    let style = ctx.style;
    let mut session = GameSession::create(config.secret.as_deref(), dictionary, ctx.rng())?;
    let mut stats = Statistics::default();

    loop {
        tracing::debug!("new game");
        if config.cheat {
            writeln!(out, "The secret word is {}", session.secret())?;
        }
        writeln!(out, "Start by typing a five letter word, then press [ENTER]")?;
        out.flush()?;

        while !session.status().is_terminal() {
            let Some(line) = read_line(input)? else {
                return Ok(stats);
            };
            if is_quit(&line) {
                return Ok(stats);
            }

            match session.submit_guess(&line) {
                Ok(_) => write_board(out, session.history(), &session.knowledge(), &style)?,
                Err(err @ (GameError::InvalidLength { .. } | GameError::UnknownWord(_))) => {
                    write_error(out, &format!("{err}, try again"), &style)?;
                }
                Err(err) => return Err(err.into()),
            }
        }

        stats.record(&session);
        tracing::info!(
            status = %session.status(),
            attempts = session.attempts(),
            secret = %session.secret(),
            "game finished"
        );
        write_game_over(
            out,
            session.status(),
            session.secret().text(),
            session.history(),
            &style,
        )?;

        if let (true, Some(source)) = (config.meaning, meaning) {
            let text = lookup_with_spinner(source, session.secret().text());
            writeln!(out, "{text}")?;
        }

        if !config.replay {
            return Ok(stats);
        }

        writeln!(out, "Press [ENTER] to play again or type 'quit' to exit")?;
        out.flush()?;
        match read_line(input)? {
            Some(line) if !is_quit(&line) => {}
            _ => {
                write_statistics(out, &stats, &style)?;
                return Ok(stats);
            }
        }

        session.reset_random(ctx.rng())?;
        write_statistics(out, &stats, &style)?;
    }
}

/// Next line of input, trimmed; `None` at end of input
///
/// Bytes that are not UTF-8 are replaced rather than failing the read, so a
/// garbled line is just a guess that gets rejected.
fn read_line<R: BufRead>(input: &mut R) -> std::io::Result<Option<String>> {
    let mut line = Vec::new();
    if input.read_until(b'\n', &mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(String::from_utf8_lossy(&line).trim().to_string()))
}

fn is_quit(line: &str) -> bool {
    QUIT_COMMANDS
        .iter()
        .any(|command| line.eq_ignore_ascii_case(command))
}

fn write_error<W: Write>(out: &mut W, message: &str, style: &OutputStyle) -> std::io::Result<()> {
    if style.color {
        writeln!(out, "{}", message.red())
    } else {
        writeln!(out, "{message}")
    }
}

fn lookup_with_spinner(source: &dyn MeaningSource, word: &str) -> String {
    let spinner = ProgressBar::new_spinner();
    if let Ok(spinner_style) = ProgressStyle::default_spinner().template("{spinner} {msg}") {
        spinner.set_style(spinner_style);
    }
    spinner.set_message(format!("Looking up {word}..."));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let text = describe(source, word);
    spinner.finish_and_clear();
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meaning::{Entry, MeaningError};
    use std::io::Cursor;

    fn plain_config(secret: &str) -> PlayConfig {
        PlayConfig {
            secret: Some(secret.to_string()),
            style: OutputStyle::plain(),
            ..PlayConfig::default()
        }
    }

    fn play(
        config: &PlayConfig,
        dictionary: &Dictionary,
        input: &str,
        meaning: Option<&dyn MeaningSource>,
    ) -> (Statistics, String) {
        let mut ctx = GameContext::new(Some(7), config.style);
        let mut out = Vec::new();
        let stats = run_play(
            &mut Cursor::new(input),
            &mut out,
            config,
            dictionary,
            &mut ctx,
            meaning,
        )
        .unwrap();
        (stats, String::from_utf8(out).unwrap())
    }

    #[test]
    fn winning_game() {
        let dict = Dictionary::embedded();
        let (stats, text) = play(
            &plain_config("midst"),
            &dict,
            "daily\nsword\nunite\ntidal\nmidst\n",
            None,
        );

        assert_eq!(stats.games_won, 1);
        assert_eq!(stats.guess_distribution[4], 1);
        assert!(text.contains("TIDAL YGG--"));
        assert!(text.contains("You win in 5/6! The secret word is midst."));
    }

    #[test]
    fn losing_game() {
        let dict = Dictionary::embedded();
        let (stats, text) = play(
            &plain_config("midst"),
            &dict,
            "daily\nsword\nunite\ntidal\nplane\nchair\n",
            None,
        );

        assert_eq!(stats.total_games, 1);
        assert_eq!(stats.games_lost(), 1);
        assert!(text.contains("You lose by using up all the chances! The secret word is midst."));
    }

    #[test]
    fn rejected_guesses_are_reported_and_free() {
        let dict = Dictionary::embedded();
        let (stats, text) = play(
            &plain_config("midst"),
            &dict,
            "cat\nzzzzz\nbilibili\nmidst\n",
            None,
        );

        assert!(text.contains("guess must be 5 letters, got 3, try again"));
        assert!(text.contains("zzzzz: not a word, try again"));
        assert!(text.contains("guess must be 5 letters, got 8, try again"));
        assert!(text.contains("You win in 1/6!"));
        assert_eq!(stats.games_won, 1);
    }

    #[test]
    fn quit_and_eof_end_the_game_unrecorded() {
        let dict = Dictionary::embedded();
        let (stats, text) = play(&plain_config("midst"), &dict, "tidal\nquit\nmidst\n", None);
        assert_eq!(stats.total_games, 0);
        assert!(!text.contains("You win"));

        let (stats, _) = play(&plain_config("midst"), &dict, "tidal\n", None);
        assert_eq!(stats.total_games, 0);
    }

    #[test]
    fn cheat_reveals_secret() {
        let dict = Dictionary::embedded();
        let config = PlayConfig {
            cheat: true,
            ..plain_config("midst")
        };
        let (_, text) = play(&config, &dict, "", None);
        assert!(text.starts_with("The secret word is midst\n"));
    }

    #[test]
    fn replay_draws_new_secrets_until_quit() {
        let dict = Dictionary::from_words(["midst"]);
        let config = PlayConfig {
            replay: true,
            ..plain_config("midst")
        };
        let (stats, text) = play(&config, &dict, "midst\n\nmidst\nquit\n", None);

        assert_eq!(stats.total_games, 2);
        assert_eq!(stats.games_won, 2);
        assert_eq!(stats.max_streak, 2);
        assert_eq!(text.matches("Press [ENTER] to play again").count(), 2);
        assert!(text.contains("Statistics:"));
    }

    #[test]
    fn bad_explicit_secret_is_an_error() {
        let dict = Dictionary::embedded();
        let mut ctx = GameContext::new(Some(1), OutputStyle::plain());
        let result = run_play(
            &mut Cursor::new(""),
            &mut Vec::new(),
            &plain_config("bilibili"),
            &dict,
            &mut ctx,
            None,
        );
        assert!(result.is_err());
    }

    #[test]
    fn invalid_utf8_line_is_rejected_not_fatal() {
        let dict = Dictionary::embedded();
        let mut ctx = GameContext::new(Some(1), OutputStyle::plain());
        let mut out = Vec::new();
        let stats = run_play(
            &mut Cursor::new(b"\xff\xfeabc\nmidst\n".to_vec()),
            &mut out,
            &plain_config("midst"),
            &dict,
            &mut ctx,
            None,
        )
        .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("\u{fffd}\u{fffd}abc: not a word, try again"));
        assert_eq!(stats.games_won, 1);
    }

    struct NoMeaning;

    impl MeaningSource for NoMeaning {
        fn lookup(&self, word: &str) -> Result<Entry, MeaningError> {
            Err(MeaningError::NotFound(word.to_string()))
        }
    }

    #[test]
    fn meaning_shown_after_game() {
        let dict = Dictionary::embedded();
        let config = PlayConfig {
            meaning: true,
            ..plain_config("midst")
        };
        let (_, text) = play(&config, &dict, "midst\n", Some(&NoMeaning));
        assert!(text.contains("No meaning found for midst"));
    }
}
