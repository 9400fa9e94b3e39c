//! TUI rendering with ratatui
//!
//! The board, a keyboard colored by letter knowledge, and the message log.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{LetterKnowledge, LetterStatus, Mark, WORD_LEN};
use crate::game::MAX_ATTEMPTS;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("W O R D L E")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn tile_style(mark: Mark) -> Style {
    let bg = match mark {
        Mark::Correct => Color::Green,
        Mark::Present => Color::Yellow,
        Mark::Absent => Color::DarkGray,
    };
    Style::default()
        .fg(Color::Black)
        .bg(bg)
        .add_modifier(Modifier::BOLD)
}

fn key_style(status: LetterStatus) -> Style {
    match status {
        LetterStatus::Correct => Style::default().fg(Color::Black).bg(Color::Green),
        LetterStatus::Present => Style::default().fg(Color::Black).bg(Color::Yellow),
        LetterStatus::Absent => Style::default().fg(Color::DarkGray),
        LetterStatus::Unknown => Style::default().fg(Color::White),
    }
}

fn tile(letter: char, style: Style) -> Span<'static> {
    Span::styled(format!(" {} ", letter.to_ascii_uppercase()), style)
}

/// One line per attempt: played rows in feedback colors, then the row being
/// typed, then empty rows
fn board_lines(app: &App) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(MAX_ATTEMPTS * 2);
    let history = app.session.history();

    for row in 0..MAX_ATTEMPTS {
        let spans: Vec<Span> = if let Some(record) = history.get(row) {
            record
                .letters()
                .flat_map(|(letter, mark)| {
                    [tile(char::from(letter), tile_style(mark)), Span::raw(" ")]
                })
                .collect()
        } else if row == history.len() && app.input_mode == InputMode::Guessing {
            let typed: Vec<char> = app.input_buffer.chars().collect();
            (0..WORD_LEN)
                .flat_map(|i| {
                    let span = typed.get(i).map_or_else(
                        || tile('_', Style::default().fg(Color::DarkGray)),
                        |&c| tile(c, Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
                    );
                    [span, Span::raw(" ")]
                })
                .collect()
        } else {
            (0..WORD_LEN)
                .flat_map(|_| {
                    [
                        tile('_', Style::default().fg(Color::DarkGray)),
                        Span::raw(" "),
                    ]
                })
                .collect()
        };
        lines.push(Line::from(spans));
        lines.push(Line::default());
    }
    lines
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let board = Paragraph::new(board_lines(app))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Board ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(board, area);
}

fn render_side_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Keyboard
            Constraint::Length(3), // Attempts gauge
            Constraint::Min(5),    // Messages or meaning
        ])
        .split(area);

    render_keyboard(f, &app.session.knowledge(), chunks[0]);
    render_attempts(f, app, chunks[1]);
    if let Some(text) = &app.meaning_text {
        render_meaning(f, text, chunks[2]);
    } else {
        render_messages(f, app, chunks[2]);
    }
}

fn render_keyboard(f: &mut Frame, knowledge: &LetterKnowledge, area: Rect) {
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .bytes()
                .map(|letter| tile(char::from(letter), key_style(knowledge.status(letter))))
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Keyboard ").borders(Borders::ALL));
    f.render_widget(keyboard, area);
}

fn render_attempts(f: &mut Frame, app: &App, area: Rect) {
    let used = app.session.attempts();
    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Attempts ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent((used * 100 / MAX_ATTEMPTS) as u16)
        .label(format!("{used}/{MAX_ATTEMPTS}"));

    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_meaning(f: &mut Frame, text: &str, area: Rect) {
    let paragraph = Paragraph::new(text.to_string())
        .block(
            Block::default()
                .title(" Meaning ")
                .borders(Borders::ALL)
                .style(Style::default().fg(Color::Green)),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::GameOver => (
            " Game over | n: new game  m: meaning  q: quit ",
            "",
            Color::Green,
        ),
        InputMode::Guessing => (
            " Your guess | Enter: submit  Esc: quit ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content.to_uppercase())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let status = Paragraph::new(format!("Game: {}", app.session.status()))
        .alignment(Alignment::Center);
    f.render_widget(status, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[1],
    );

    let streak_text = format!(
        "Streak: {} (best {})",
        app.stats.current_streak, app.stats.max_streak
    );
    f.render_widget(
        Paragraph::new(streak_text).alignment(Alignment::Center),
        chunks[2],
    );

    let left = Paragraph::new(format!(
        "Attempts left: {}",
        app.session.remaining_attempts()
    ))
    .alignment(Alignment::Center)
    .style(Style::default().fg(Color::DarkGray));
    f.render_widget(left, chunks[3]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PlayConfig;
    use crate::dictionary::Dictionary;
    use ratatui::{Terminal, backend::TestBackend};

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(ratatui::buffer::Cell::symbol).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn app(dict: &Dictionary) -> App<'_> {
        let config = PlayConfig {
            secret: Some("midst".to_string()),
            seed: Some(5),
            ..PlayConfig::default()
        };
        App::new(&config, dict, None).unwrap()
    }

    #[test]
    fn draws_board_and_keyboard() {
        let dict = Dictionary::embedded();
        let mut app = app(&dict);
        app.input_buffer = "tidal".to_string();
        app.submit_guess();
        app.input_buffer = "da".to_string();

        let text = screen(&app);
        assert!(text.contains("W O R D L E"));
        assert!(text.contains(" T   I   D   A   L "));
        assert!(text.contains(" D   A   _ "));
        assert!(text.contains(" Q  W  E  R  T "));
        assert!(text.contains("Attempts left: 5"));
    }

    #[test]
    fn game_over_prompt() {
        let dict = Dictionary::embedded();
        let mut app = app(&dict);
        app.input_buffer = "midst".to_string();
        app.submit_guess();

        let text = screen(&app);
        assert!(text.contains("Game over"));
        assert!(text.contains("Game: won"));
        assert!(text.contains("Win Rate: 100%"));
    }
}
