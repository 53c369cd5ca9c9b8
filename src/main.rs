//! Terminal memory game runner (default binary).
//!
//! Drives the deterministic core from a fixed-timestep loop: crossterm
//! supplies keys and mouse clicks, the core advances by the real time that
//! passed, and the framebuffer renderer redraws whatever changed.
//!
//! Logs go to the file named by `MEMORY_LOG_PATH` (nothing is logged when it
//! is unset, since stdout belongs to the game). `RUST_LOG` filters as usual.

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use tui_memory::core::{GameConfig, GameEvent, GameSnapshot, GameState};
use tui_memory::input::{handle_key_event, should_quit, Cursor};
use tui_memory::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_memory::types::{GameAction, GRID_COLUMNS, TICK_MS};

fn main() -> Result<()> {
    init_logging()?;

    let mut config = GameConfig::from_env();
    if config.seed.is_none() {
        config.seed = Some(rand::random());
    }
    info!(?config, "starting memory");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn init_logging() -> Result<()> {
    let Ok(path) = std::env::var("MEMORY_LOG_PATH") else {
        return Ok(());
    };
    let log_file =
        std::fs::File::create(&path).with_context(|| format!("creating log file {path}"))?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: GameConfig) -> Result<()> {
    let mut game = GameState::new(config);
    let mut cursor = Cursor::new(game.board().len(), GRID_COLUMNS);

    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        game.snapshot_into(&mut snap);
        view.render_into(&snap, Some(cursor.index()), viewport, &mut fb);
        term.present(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key).and_then(|intent| cursor.apply(intent)) {
                        game.apply_action(action);
                        cursor.resize(game.board().len());
                    }
                }
                Event::Mouse(MouseEvent {
                    kind: MouseEventKind::Down(MouseButton::Left),
                    column,
                    row,
                    ..
                }) => {
                    if let Some(index) = view.tile_at(&snap, viewport, column, row) {
                        cursor.set(index);
                        game.apply_action(GameAction::FlipTile(index));
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick by the whole milliseconds that passed; the remainder carries over.
        let elapsed = last_tick.elapsed();
        if elapsed >= tick_duration {
            let elapsed_ms = u32::try_from(elapsed.as_millis()).unwrap_or(u32::MAX);
            last_tick += Duration::from_millis(elapsed_ms as u64);
            game.tick(elapsed_ms);
        }

        for event in game.take_events() {
            log_event(&event);
        }
    }
}

fn log_event(event: &GameEvent) {
    match event {
        GameEvent::Completed(completion) => {
            info!(moves = completion.moves, elapsed = %completion.elapsed, "game won")
        }
        GameEvent::Congratulations { message } => info!(%message, "congratulated"),
        GameEvent::Timer { .. } => {}
        other => debug!(event = ?other, "game event"),
    }
}
