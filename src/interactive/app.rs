//! TUI application state and logic

use crate::config::{GameContext, PlayConfig};
use crate::core::WORD_LEN;
use crate::dictionary::Dictionary;
use crate::game::{GameSession, GameStatus, MAX_ATTEMPTS, Statistics};
use crate::meaning::{MeaningSource, describe};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App<'a> {
    pub session: GameSession<'a, Dictionary>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    /// Explanation of the last secret, once looked up
    pub meaning_text: Option<String>,
    /// A lookup was requested and runs after the next redraw
    pub meaning_pending: bool,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
    ctx: GameContext,
    meaning: Option<&'a dyn MeaningSource>,
    cheat: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a> App<'a> {
    /// Start the first game from `config`
    ///
    /// # Errors
    ///
    /// Returns an error if the configured secret is rejected or the dictionary
    /// has nothing to draw a secret from.
    pub fn new(
        config: &PlayConfig,
        dictionary: &'a Dictionary,
        meaning: Option<&'a dyn MeaningSource>,
    ) -> Result<Self> {
        let mut ctx = config.context();
        let session = GameSession::create(config.secret.as_deref(), dictionary, ctx.rng())?;

        let mut app = Self {
            session,
            input_buffer: String::new(),
            messages: Vec::new(),
            meaning_text: None,
            meaning_pending: false,
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Guessing,
            ctx,
            meaning: if config.meaning { meaning } else { None },
            cheat: config.cheat,
        };
        app.greet();
        Ok(app)
    }

    fn greet(&mut self) {
        self.add_message(
            "Type a five letter word, then press [ENTER]",
            MessageStyle::Info,
        );
        if self.cheat {
            let text = format!("The secret word is {}", self.session.secret());
            self.add_message(&text, MessageStyle::Info);
        }
    }

    /// Dispatch one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::Guessing => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char(c) => {
                    if c.is_ascii_alphabetic() && self.input_buffer.len() < WORD_LEN {
                        self.input_buffer.push(c.to_ascii_lowercase());
                    }
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => self.submit_guess(),
                _ => {}
            },
            InputMode::GameOver => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') | KeyCode::Enter => self.new_game(),
                KeyCode::Char('m') => self.request_meaning(),
                _ => {}
            },
        }
    }

    /// Submit the input buffer as a guess
    ///
    /// A rejected guess stays in the buffer so it can be corrected.
    pub fn submit_guess(&mut self) {
        match self.session.submit_guess(&self.input_buffer) {
            Ok(outcome) => {
                self.input_buffer.clear();
                if outcome.status.is_terminal() {
                    self.finish_game();
                } else {
                    let left = self.session.remaining_attempts();
                    self.add_message(
                        &format!("{left} of {MAX_ATTEMPTS} attempts left"),
                        MessageStyle::Info,
                    );
                }
            }
            Err(err) => self.add_message(&format!("{err}, try again"), MessageStyle::Error),
        }
    }

    fn finish_game(&mut self) {
        self.stats.record(&self.session);
        self.input_mode = InputMode::GameOver;
        tracing::info!(
            status = %self.session.status(),
            attempts = self.session.attempts(),
            secret = %self.session.secret(),
            "game finished"
        );

        let secret = self.session.secret().text().to_string();
        if self.session.status() == GameStatus::Won {
            let text = format!(
                "You win in {}/{MAX_ATTEMPTS}! The secret word is {secret}.",
                self.session.attempts()
            );
            self.add_message(&text, MessageStyle::Success);
        } else {
            let text =
                format!("You lose by using up all the chances! The secret word is {secret}.");
            self.add_message(&text, MessageStyle::Error);
        }

        let hint = if self.meaning.is_some() {
            "Press 'n' for a new game, 'm' for the meaning, 'q' to quit."
        } else {
            "Press 'n' for a new game or 'q' to quit."
        };
        self.add_message(hint, MessageStyle::Info);
    }

    /// Ask for the secret's meaning; only available once the game is over
    ///
    /// The lookup blocks, so it is deferred to [`App::resolve_meaning`] and the
    /// screen gets redrawn with a progress message first.
    pub fn request_meaning(&mut self) {
        if self.input_mode != InputMode::GameOver {
            return;
        }
        if self.meaning.is_none() {
            self.add_message(
                "Meaning lookup is off, run with --meaning",
                MessageStyle::Error,
            );
            return;
        }
        self.meaning_pending = true;
        let text = format!("Looking up {}...", self.session.secret());
        self.add_message(&text, MessageStyle::Info);
    }

    /// Run a requested lookup
    pub fn resolve_meaning(&mut self) {
        if !std::mem::take(&mut self.meaning_pending) {
            return;
        }
        if let Some(source) = self.meaning {
            self.meaning_text = Some(describe(source, self.session.secret().text()));
        }
    }

    /// Start over against a random secret
    pub fn new_game(&mut self) {
        match self.session.reset_random(self.ctx.rng()) {
            Ok(()) => {
                self.input_buffer.clear();
                self.messages.clear();
                self.meaning_text = None;
                self.meaning_pending = false;
                self.input_mode = InputMode::Guessing;
                self.add_message("New game started!", MessageStyle::Info);
                self.greet();
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application until the player quits
///
/// Returns the statistics of the games finished in this run.
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<Statistics> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        tracing::error!(error = %err, "tui stopped");
    }
    res
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> Result<Statistics> {
    while !app.should_quit {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if app.meaning_pending {
            app.resolve_meaning();
            continue;
        }

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind == KeyEventKind::Press {
                app.handle_key(key);
            }
        }
    }
    Ok(app.stats)
}
