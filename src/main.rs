//! Terminal memory game runner (default binary).
//!
//! Uses crossterm for input and the framebuffer renderer from `term`.
//! Logging is off unless `--log-file` is given, since the game owns the screen.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing_subscriber::EnvFilter;

use tui_memory::core::{GameSession, SessionConfig};
use tui_memory::input::{handle_key_event, should_quit, GridCursor, UiAction};
use tui_memory::term::{BoardFrame, BoardView, FrameBuffer, TerminalRenderer, Viewport};
use tui_memory::types::{
    DEFAULT_CARD_COUNT, DEFAULT_COLUMNS, PALETTE, RESOLVE_DELAY_MS, REVEAL_DELAY_MS, TICK_MS,
};

#[derive(Debug, Parser)]
#[command(name = "tui-memory", version, about = "Terminal memory-matching card game")]
struct Cli {
    /// Number of cards on the board (even)
    #[arg(long, default_value_t = DEFAULT_CARD_COUNT)]
    cards: usize,

    /// Cards per row
    #[arg(long, default_value_t = DEFAULT_COLUMNS)]
    columns: usize,

    /// Seed for the first deal; each new board uses the next seed
    #[arg(long)]
    seed: Option<u64>,

    /// How long all cards are shown at the start (ms)
    #[arg(long, default_value_t = REVEAL_DELAY_MS)]
    reveal_ms: u32,

    /// How long a selected pair stays visible (ms)
    #[arg(long, default_value_t = RESOLVE_DELAY_MS)]
    resolve_ms: u32,

    /// Append logs to this file, filtered by RUST_LOG (default `info`)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn session_config(&self) -> SessionConfig {
        SessionConfig {
            card_count: self.cards,
            columns: self.columns,
            reveal_delay_ms: self.reveal_ms,
            resolve_delay_ms: self.resolve_ms,
            seed: self.seed,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    // Fail on a bad board before touching the terminal.
    let config = cli.session_config();
    let session = GameSession::deal(config, &PALETTE).context("cannot deal board")?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, config, session);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::options()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("cannot open log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: SessionConfig, mut session: GameSession) -> Result<()> {
    let view = BoardView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut cursor = GridCursor::new(config.columns, config.card_count);
    let mut deals: u64 = 0;

    session.start();
    tracing::info!(cards = config.card_count, seed = ?config.seed, "session started");

    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let frame = BoardFrame {
            state: session.state(),
            columns: config.columns,
            cursor: Some(cursor.index()),
            phase: session.phase(),
        };
        view.render_into(&frame, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        session.teardown();
                        return Ok(());
                    }
                    match handle_key_event(key) {
                        Some(UiAction::Move(dir)) => cursor.step(dir),
                        Some(UiAction::Flip) => session.flip(cursor.index()),
                        Some(UiAction::Restart) => {
                            session.teardown();
                            deals += 1;
                            let next = SessionConfig {
                                seed: config.seed.map(|s| s.wrapping_add(deals)),
                                ..config
                            };
                            session = GameSession::deal(next, &PALETTE)?;
                            session.start();
                            cursor = GridCursor::new(config.columns, config.card_count);
                            tracing::info!(deal = deals, "new board");
                        }
                        None => {}
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick with real elapsed time so delays match the wall clock.
        let elapsed = last_tick.elapsed();
        if elapsed >= tick_duration {
            last_tick = Instant::now();
            session.tick(u32::try_from(elapsed.as_millis()).unwrap_or(u32::MAX));
        }
    }
}
