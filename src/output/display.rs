//! Display functions for the line-based game

use super::formatters::{create_progress_bar, format_board, format_keyboard, share_grid};
use crate::commands::CheckResult;
use crate::config::OutputStyle;
use crate::core::{GuessRecord, LetterKnowledge};
use crate::game::{GameStatus, MAX_ATTEMPTS, Statistics};
use colored::Colorize;
use crossterm::{
    cursor::MoveTo,
    queue,
    terminal::{Clear, ClearType},
};
use std::io::{self, Write};

/// Redraw the board and the keyboard knowledge line
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_board<W: Write>(
    out: &mut W,
    history: &[GuessRecord],
    knowledge: &LetterKnowledge,
    style: &OutputStyle,
) -> io::Result<()> {
    if style.clear_screen {
        queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    }
    writeln!(out, "{}", format_board(history, style))?;
    writeln!(out, "Knowledge:")?;
    writeln!(out, "{}", format_keyboard(knowledge, style))?;
    out.flush()
}

/// Announce the end of a game and reveal the secret
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_game_over<W: Write>(
    out: &mut W,
    status: GameStatus,
    secret: &str,
    history: &[GuessRecord],
    style: &OutputStyle,
) -> io::Result<()> {
    let message = match status {
        GameStatus::Won => format!(
            "You win in {}/{MAX_ATTEMPTS}! The secret word is {secret}.",
            history.len()
        ),
        GameStatus::Lost => {
            format!("You lose by using up all the chances! The secret word is {secret}.")
        }
        GameStatus::InProgress => return Ok(()),
    };

    if style.color {
        let banner = if status == GameStatus::Won {
            message.green().bold()
        } else {
            message.red().bold()
        };
        writeln!(out, "{banner}")?;
    } else {
        writeln!(out, "{message}")?;
    }
    writeln!(out, "{}", share_grid(history))
}

/// Print totals and the guess distribution across replayed games
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_statistics<W: Write>(
    out: &mut W,
    stats: &Statistics,
    style: &OutputStyle,
) -> io::Result<()> {
    let title = "Statistics:";
    if style.color {
        writeln!(out, "\n{}", title.bright_cyan().bold())?;
    } else {
        writeln!(out, "\n{title}")?;
    }
    writeln!(out, "   Played:      {}", stats.total_games)?;
    writeln!(out, "   Won:         {}", stats.games_won)?;
    writeln!(out, "   Win rate:    {:.0}%", stats.win_rate())?;
    writeln!(
        out,
        "   Streak:      {} (best {})",
        stats.current_streak, stats.max_streak
    )?;

    let most = stats.guess_distribution.iter().copied().max().unwrap_or(0);
    for (i, &count) in stats.guess_distribution.iter().enumerate() {
        let bar = create_progress_bar(count, most, 20);
        let bar = if style.color {
            bar.green().to_string()
        } else {
            bar
        };
        writeln!(out, "   {}: {bar} {count}", i + 1)?;
    }
    Ok(())
}

/// Print the result of the `check` command
pub fn print_check_result(result: &CheckResult, style: &OutputStyle) {
    let record = GuessRecord::new(result.guess.clone(), result.feedback);
    println!(
        "{} → {}",
        result.secret.text().to_uppercase(),
        super::formatters::format_guess(&record, style)
    );
    println!("{}", result.feedback.to_emoji());
}
