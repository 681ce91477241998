use crate::types::{DEFAULT_FPS, MAX_FPS};

/// Startup configuration handed to the runner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub color_enabled: bool,
    pub fps: u32,
}

impl GameConfig {
    pub fn new(color_enabled: bool, fps: u32) -> Self {
        Self {
            color_enabled,
            fps: fps.clamp(1, MAX_FPS),
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            color_enabled: true,
            fps: DEFAULT_FPS,
        }
    }
}
