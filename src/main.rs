//! Terminal maze runner (default binary).
//!
//! Drives the 60 Hz tick loop, forwards key presses to the actor's direction
//! queue, and redraws through the framebuffer renderer at the configured rate.

mod cli;

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use crossterm::style::Stylize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tui_pacman::core::{GameSnapshot, GameState};
use tui_pacman::engine::{GameClock, GameConfig, TickLoop, TickSchedule};
use tui_pacman::input::{intent_for_event, InputIntent};
use tui_pacman::term::{detect_color_support, FrameBuffer, GameView, TerminalRenderer, Viewport};

use crate::cli::Args;

/// How long the final frame stays up after the last point is eaten.
const WIN_HOLD: Duration = Duration::from_secs(1);

enum Exit {
    Won { score: u32 },
    Quit,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_file.as_deref())?;

    let config = args.config(detect_color_support);
    let state = GameState::classic().context("loading built-in maze")?;
    info!(fps = config.fps, color = config.color_enabled, "starting");

    let mut term = TerminalRenderer::new(config.color_enabled);
    term.enter()?;

    let result = run(&mut term, state, config);

    // Always try to restore terminal state.
    let _ = term.exit();

    match result? {
        Exit::Won { score } => {
            info!(score, "won");
            print_score(score, config.color_enabled);
        }
        Exit::Quit => info!("quit"),
    }
    Ok(())
}

fn init_logging(path: Option<&Path>) -> Result<()> {
    // The game owns the screen, so logs only go to a file when asked for.
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("creating log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn print_score(score: u32, color: bool) {
    if color {
        println!("{} {}", "score:".bold(), score.to_string().yellow());
    } else {
        println!("score: {score}");
    }
}

fn run(term: &mut TerminalRenderer, state: GameState, config: GameConfig) -> Result<Exit> {
    let clock = GameClock::start();
    let mut schedule = TickSchedule::starting_at(clock.origin());
    let mut game = TickLoop::new(state, config);

    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        // Input with timeout until next tick.
        if event::poll(schedule.timeout(Instant::now()))? {
            let ev = event::read()?;
            if matches!(ev, Event::Resize(..)) {
                term.invalidate();
            }
            match intent_for_event(&ev, clock.now_ms()) {
                Some(InputIntent::Quit) => return Ok(Exit::Quit),
                Some(InputIntent::Turn(request)) => game.enqueue(request),
                None => {}
            }
        }

        if !schedule.poll_due(Instant::now()) {
            continue;
        }

        let report = game.step(clock.now_ms());

        if report.redraw {
            game.state().snapshot_into(&mut snap);
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            view.render_into(&snap, Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb)?;
        }

        if let Some(score) = report.final_score() {
            std::thread::sleep(WIN_HOLD);
            return Ok(Exit::Won { score });
        }
    }
}
