//! Wordle - CLI
//!
//! Terminal Wordle with a full-screen TUI, a line-based mode and a one-shot
//! feedback checker.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use wordle_game::{
    commands::{check_guess, run_play},
    config::{OutputStyle, PlayConfig},
    logging::init_tracing,
    meaning::{MeaningClient, MeaningSource},
    output::{print_check_result, write_statistics},
};

#[derive(Parser)]
#[command(
    name = "wordle",
    about = "Guess the five letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary file, one word per line (default: embedded list)
    #[arg(short, long, global = true, env = "WORDLE_DICT")]
    dict: Option<PathBuf>,

    /// Explicit secret instead of a random one
    #[arg(short, long, global = true)]
    secret: Option<String>,

    /// Seed for secret selection
    #[arg(long, global = true, env = "WORDLE_SEED")]
    seed: Option<u64>,

    /// Print the secret before playing
    #[arg(long, global = true)]
    cheat: bool,

    /// Keep playing new games until quit
    #[arg(long = "loop", global = true)]
    replay: bool,

    /// Look up the secret's meaning after each game
    #[arg(long, global = true)]
    meaning: bool,

    /// Plain output without ANSI colors
    #[arg(long, global = true)]
    no_color: bool,

    /// Write tracing logs to a file
    #[arg(long, global = true, env = "WORDLE_LOG_FILE")]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Full-screen TUI game (default)
    Play,

    /// Line-based game in the current terminal
    Simple,

    /// Print the feedback for one guess against a secret
    Check {
        #[arg(value_name = "SECRET")]
        answer: String,
        guess: String,
    },
}

impl Cli {
    fn play_config(&self) -> PlayConfig {
        let style = if self.no_color {
            OutputStyle {
                color: false,
                ..OutputStyle::default()
            }
        } else {
            OutputStyle::default()
        };
        PlayConfig {
            dict_path: self.dict.clone(),
            secret: self.secret.clone(),
            seed: self.seed,
            cheat: self.cheat,
            replay: self.replay,
            meaning: self.meaning,
            style,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.play_config();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);
    init_tracing(
        cli.log_file.as_deref(),
        !matches!(command, Commands::Play),
    )?;

    match command {
        Commands::Play => run_play_command(&config),
        Commands::Simple => run_simple_command(&config),
        Commands::Check { answer, guess } => {
            let result = check_guess(&answer, &guess).context("Cannot check guess")?;
            print_check_result(&result, &config.style);
            Ok(())
        }
    }
}

fn meaning_client(config: &PlayConfig) -> Result<Option<MeaningClient>> {
    if !config.meaning {
        return Ok(None);
    }
    let client = MeaningClient::new().context("Failed to build HTTP client")?;
    Ok(Some(client))
}

fn run_simple_command(config: &PlayConfig) -> Result<()> {
    let dictionary = config.load_dictionary()?;
    let client = meaning_client(config)?;
    let mut ctx = config.context();

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout().lock();
    let stats = run_play(
        &mut input,
        &mut out,
        config,
        &dictionary,
        &mut ctx,
        client.as_ref().map(|c| c as &dyn MeaningSource),
    )?;
    tracing::info!(
        played = stats.total_games,
        won = stats.games_won,
        "simple mode finished"
    );
    Ok(())
}

fn run_play_command(config: &PlayConfig) -> Result<()> {
    use wordle_game::interactive::{App, run_tui};

    let dictionary = config.load_dictionary()?;
    let client = meaning_client(config)?;
    let app = App::new(
        config,
        &dictionary,
        client.as_ref().map(|c| c as &dyn MeaningSource),
    )?;
    let stats = run_tui(app)?;

    if stats.total_games > 0 {
        write_statistics(&mut io::stdout(), &stats, &config.style)?;
    }
    Ok(())
}
