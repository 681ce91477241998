//! Fixed-cadence driver: advances the game every tick and decides when the
//! screen should be redrawn.

use tracing::debug;

use crate::config::GameConfig;
use crate::core::{GameEvent, GameState, TickEvents};
use crate::render_throttle::RenderThrottle;
use crate::types::{DirectionRequest, TICK_MS};

/// What happened during one [`TickLoop::step`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickReport {
    pub events: TickEvents,
    /// Redraw the frame after this tick.
    pub redraw: bool,
    /// The game reached its terminal state on this tick.
    pub finished: bool,
}

impl TickReport {
    pub fn final_score(&self) -> Option<u32> {
        self.events.iter().find_map(|e| match *e {
            GameEvent::Won { score } => Some(score),
            _ => None,
        })
    }
}

#[derive(Debug, Clone)]
pub struct TickLoop {
    state: GameState,
    throttle: RenderThrottle,
    ticks: u64,
}

impl TickLoop {
    pub fn new(state: GameState, config: GameConfig) -> Self {
        Self {
            state,
            throttle: RenderThrottle::new(config.fps),
            ticks: 0,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Input path: queue a direction change for a later tick.
    pub fn enqueue(&mut self, request: DirectionRequest) {
        self.state.enqueue(request);
    }

    /// Run one logical tick at game-clock time `now_ms`.
    pub fn step(&mut self, now_ms: u64) -> TickReport {
        self.ticks += 1;

        let events = self.state.tick(now_ms);
        let finished = events.iter().any(|e| matches!(e, GameEvent::Won { .. }));
        // The final frame is always shown.
        let redraw = self.throttle.should_render(TICK_MS) || finished;

        if finished {
            debug!(tick = self.ticks, score = self.state.score(), "game finished");
        }

        TickReport {
            events,
            redraw,
            finished,
        }
    }
}
