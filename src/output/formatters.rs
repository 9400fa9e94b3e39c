//! Formatting utilities for terminal output

use crate::config::OutputStyle;
use crate::core::{GuessRecord, LetterKnowledge, LetterStatus, Mark, WORD_LEN};
use crate::game::MAX_ATTEMPTS;
use colored::Colorize;

/// Uppercase a letter and color it by the mark it received
#[must_use]
pub fn format_letter(letter: u8, mark: Mark, style: &OutputStyle) -> String {
    let text = char::from(letter.to_ascii_uppercase()).to_string();
    if !style.color {
        return text;
    }
    match mark {
        Mark::Correct => text.green().bold().to_string(),
        Mark::Present => text.yellow().bold().to_string(),
        Mark::Absent => text.white().to_string(),
    }
}

/// A guessed word with each letter colored by its feedback
#[must_use]
pub fn format_guess(record: &GuessRecord, style: &OutputStyle) -> String {
    let letters: String = record
        .letters()
        .map(|(letter, mark)| format_letter(letter, mark, style))
        .collect();
    if style.color {
        letters
    } else {
        // Without color the marks have to be spelled out
        format!("{letters} {}", record.feedback)
    }
}

/// All six board rows; rows not yet played show as underscores
#[must_use]
pub fn format_board(history: &[GuessRecord], style: &OutputStyle) -> String {
    (0..MAX_ATTEMPTS)
        .map(|row| {
            history
                .get(row)
                .map_or_else(|| "_".repeat(WORD_LEN), |record| format_guess(record, style))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// The alphabet colored by what is known about each letter
///
/// Letters known to be absent are left blank when `style.hide_absent` is set.
#[must_use]
pub fn format_keyboard(knowledge: &LetterKnowledge, style: &OutputStyle) -> String {
    knowledge
        .iter()
        .map(|(letter, status)| {
            let text = char::from(letter.to_ascii_uppercase()).to_string();
            match status {
                LetterStatus::Absent if style.hide_absent => " ".to_string(),
                _ if !style.color => text,
                LetterStatus::Correct => text.green().to_string(),
                LetterStatus::Present => text.yellow().to_string(),
                LetterStatus::Absent => text.bright_black().to_string(),
                LetterStatus::Unknown => text.white().to_string(),
            }
        })
        .collect()
}

/// Emoji grid of a finished game, one line per guess
#[must_use]
pub fn share_grid(history: &[GuessRecord]) -> String {
    history
        .iter()
        .map(|record| record.feedback.to_emoji())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 { 0 } else { value * width / max };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Word, evaluate};

    fn record(secret: &str, guess: &str) -> GuessRecord {
        let secret = Word::new(secret).unwrap();
        let guess = Word::new(guess).unwrap();
        let feedback = evaluate(&secret, &guess);
        GuessRecord::new(guess, feedback)
    }

    #[test]
    fn plain_guess_spells_out_marks() {
        let text = format_guess(&record("chair", "error"), &OutputStyle::plain());
        assert_eq!(text, "ERROR ----G");
    }

    #[test]
    fn board_pads_unplayed_rows() {
        let history = [record("midst", "daily"), record("midst", "tidal")];
        let board = format_board(&history, &OutputStyle::plain());
        let rows: Vec<&str> = board.lines().collect();
        assert_eq!(rows.len(), 6);
        assert_eq!(rows[0], "DAILY Y-Y--");
        assert_eq!(rows[1], "TIDAL YGG--");
        assert!(rows[2..].iter().all(|&row| row == "_____"));
    }

    #[test]
    fn keyboard_hides_absent_letters() {
        let knowledge = LetterKnowledge::aggregate(&[record("chair", "error")]);
        let keys = format_keyboard(&knowledge, &OutputStyle::plain());
        assert_eq!(keys.len(), 26);
        assert_eq!(&keys[..6], "ABCD F");
        assert_eq!(&keys[13..18], "N PQR");
    }

    #[test]
    fn keyboard_shows_absent_when_asked() {
        let knowledge = LetterKnowledge::aggregate(&[record("chair", "error")]);
        let style = OutputStyle {
            hide_absent: false,
            ..OutputStyle::plain()
        };
        assert_eq!(
            format_keyboard(&knowledge, &style),
            "ABCDEFGHIJKLMNOPQRSTUVWXYZ"
        );
    }

    #[test]
    fn share_grid_lines() {
        let history = [record("midst", "tidal"), record("midst", "midst")];
        assert_eq!(share_grid(&history), "🟨🟩🟩⬜⬜\n🟩🟩🟩🟩🟩");
    }

    #[test]
    fn progress_bar_bounds() {
        assert_eq!(create_progress_bar(0, 10, 10), "░░░░░░░░░░");
        assert_eq!(create_progress_bar(10, 10, 10), "██████████");
        assert_eq!(create_progress_bar(5, 10, 10), "█████░░░░░");
        assert_eq!(create_progress_bar(3, 0, 4), "░░░░");
    }
}
