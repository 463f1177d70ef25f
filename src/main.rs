//! Terminal 2048 runner (default binary).
//!
//! `tui-2048` plays interactively; `tui-2048 replay --seed N --moves LRUD...`
//! plays a scripted game headless and prints JSON lines.

use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};

use tui_2048::cli::{Cli, Command};
use tui_2048::core::{AnimationFrame, GameSnapshot};
use tui_2048::engine::{Clock, GameConfig, GameDriver, MonotonicClock, TickOutcome};
use tui_2048::input::{should_quit, InputHandler};
use tui_2048::logging;
use tui_2048::replay::run_replay;
use tui_2048::term::{FrameBuffer, GameView, RenderThrottle, TerminalRenderer, Viewport};
use tui_2048::types::TICK_MS;

fn main() -> Result<()> {
    let cli = Cli::parse();
    // Install before reading config; config logs its fallbacks.
    logging::init(logging::log_path_from_env().as_deref())?;

    if let Some(Command::Replay(args)) = cli.command {
        let mut out = io::stdout().lock();
        run_replay(&args, &mut out)?;
        return Ok(());
    }

    let config = GameConfig::from_env();

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, config: &GameConfig) -> Result<()> {
    let clock = MonotonicClock::new();
    let mut driver = GameDriver::new(config);
    let mut input = InputHandler::with_key_release_ms(config.key_release_ms);

    let view = GameView::default();
    let mut throttle = RenderThrottle::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();
    let mut frame = AnimationFrame::default();

    let tick = Duration::from_millis(TICK_MS as u64);
    let mut next_tick = Instant::now();

    loop {
        // Input until the next tick is due.
        let timeout = next_tick.saturating_duration_since(Instant::now());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match key.kind {
                    KeyEventKind::Press | KeyEventKind::Repeat => {
                        if should_quit(key) {
                            log::info!("quit (score {})", driver.session().score());
                            return Ok(());
                        }
                        input.handle_key_press(key, clock.now_ms());
                    }
                    KeyEventKind::Release => input.handle_key_release(key),
                },
                Event::Resize(..) => {
                    term.invalidate();
                    throttle.invalidate();
                }
                _ => {}
            }
        }
        if Instant::now() < next_tick {
            continue;
        }
        next_tick = (next_tick + tick).max(Instant::now());

        // Tick.
        let now = clock.now_ms();
        let outcome = driver.tick(now, &input.buttons(now));
        if outcome == TickOutcome::NewGame {
            input.reset();
        }
        let loading = match outcome {
            TickOutcome::Loading { progress } => Some(progress),
            _ => None,
        };

        // Render.
        let animating = driver.frame_into(now, &mut frame);
        driver.snapshot_into(&mut snap);
        if throttle.should_render(now, snap.fingerprint(), animating || loading.is_some()) {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            let sample = animating.then_some(&frame);
            view.render_into(&snap, sample, loading, Viewport::new(w, h), &mut fb);
            term.present(&mut fb)?;
        }
    }
}
