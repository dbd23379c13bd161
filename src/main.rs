//! Lettergrid terminal runner (default binary).
//!
//! Parses the command line, loads configuration and dictionary, then runs
//! the chosen game with crossterm input and the framebuffer renderer.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use tracing_subscriber::EnvFilter;

use lettergrid::core::{GameConfig, WordList};
use lettergrid::input::should_quit;
use lettergrid::term::{TerminalRenderer, Viewport};
use lettergrid::types::TICK_MS;
use lettergrid::{build_session, GameKind, Session};

/// Config file looked up in the working directory when `--config` is absent.
const DEFAULT_CONFIG: &str = "lettergrid.json";

#[derive(Parser, Debug)]
#[command(name = "lettergrid", version, about = "Word games on a letter grid")]
struct Cli {
    /// Game to play
    #[arg(value_enum)]
    game: GameKind,

    /// JSON config file (defaults to ./lettergrid.json if present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Word list, one word per line (defaults to the built-in list)
    #[arg(long)]
    dictionary: Option<PathBuf>,

    /// RNG seed (defaults to the clock)
    #[arg(long)]
    seed: Option<u32>,

    /// Write logs to this file; logging is off otherwise
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let config = match &cli.config {
        Some(path) => GameConfig::load(path),
        None => GameConfig::load_or_default(Path::new(DEFAULT_CONFIG)),
    }
    .context("failed to load configuration")?;

    let dict = match &cli.dictionary {
        Some(path) => WordList::load(path).context("failed to load dictionary")?,
        None => WordList::builtin(),
    };

    let seed = cli.seed.unwrap_or_else(clock_seed);
    let mut session = build_session(cli.game, &config, dict, seed)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, session.as_mut());

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, session: &mut dyn Session) -> Result<()> {
    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        term.present(session.render(Viewport::new(w, h)))?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        tracing::info!(game = session.kind().as_str(), "quit");
                        return Ok(());
                    }
                    session.handle_key(key);
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            session.tick(TICK_MS);
        }
    }
}
