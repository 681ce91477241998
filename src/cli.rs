//! Command-line flags.

use std::path::PathBuf;

use clap::Parser;

use tui_pacman::engine::GameConfig;
use tui_pacman::types::{DEFAULT_FPS, MAX_FPS};

#[derive(Parser, Debug)]
#[command(name = "tui-pacman")]
#[command(about = "Eat every dot in the maze", version)]
pub struct Args {
    /// Enable or disable color output (default: detected from the terminal).
    /// A bare `--color` means `true`.
    #[arg(short, long, num_args = 0..=1, default_missing_value = "true")]
    pub color: Option<bool>,

    /// Redraw rate in frames per second
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_FPS,
        value_parser = clap::value_parser!(u32).range(1..=MAX_FPS as i64)
    )]
    pub fps: u32,

    /// Write logs to this file (filter with RUST_LOG, default "info")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Args {
    /// Resolve flags into a config; `detect_color` is only consulted when
    /// `--color` was not given.
    pub fn config(&self, detect_color: impl FnOnce() -> bool) -> GameConfig {
        let color_enabled = self.color.unwrap_or_else(detect_color);
        GameConfig::new(color_enabled, self.fps)
    }
}
