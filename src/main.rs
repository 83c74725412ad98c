//! Terminal 2048 runner (default binary).
//!
//! It uses crossterm for input and a framebuffer-based renderer.
//! The loop blocks on key events; there is no tick since tiles never move on
//! their own.

use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use env_logger::{Env, Target};
use log::info;

use tui_2048::input::{handle_key_event, should_quit, KEY_LEGEND};
use tui_2048::term::{GameView, TerminalRenderer, Viewport};
use tui_2048::types::{GRID_HEIGHT, GRID_WIDTH};
use tui_2048::Session;

#[derive(Debug, Parser)]
#[command(author, version, about = "Play 2048 in the terminal")]
struct Cli {
    /// Seed for reproducible tile spawns (random when omitted)
    #[arg(long, env = "TUI_2048_SEED", value_name = "N")]
    seed: Option<u64>,

    /// Write logs to this file (the screen is taken by the game)
    #[arg(long, env = "TUI_2048_LOG_PATH", value_name = "FILE")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_ref())?;

    let mut session = Session::new(GRID_WIDTH, GRID_HEIGHT, cli.seed)?;
    info!("starting {}x{} game, seed {:?}", GRID_WIDTH, GRID_HEIGHT, cli.seed);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut session);

    // Always try to restore terminal state.
    let _ = term.exit();
    if result.is_ok() {
        info!(
            "session ended: {} after {} restart(s)",
            session.outcome().as_str(),
            session.episode()
        );
    }
    result
}

fn init_logging(path: Option<&PathBuf>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, session: &mut Session) -> Result<()> {
    let view = GameView::default().with_legend(&KEY_LEGEND);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render(&session.snapshot(), session.outcome(), Viewport::new(w, h));
        term.draw(&fb)?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                if let Some(action) = handle_key_event(key) {
                    session.apply_action(action)?;
                }
            }
            Event::Resize(_, _) => term.invalidate(),
            // Key repeats and releases are ignored: one press, one move.
            _ => {}
        }
    }
}
