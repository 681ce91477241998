//! Game state - grid, actor and win tracking behind a single owner
//!
//! [`GameState::tick`] is the only place where the actor moves and points are
//! consumed. Input only appends requests via [`GameState::enqueue`].

use arrayvec::ArrayVec;
use tracing::{debug, info};

use crate::actor::{Actor, MoveOutcome};
use crate::grid::{Grid, LayoutError};
use crate::snapshot::{GameSnapshot, SnapshotCell};
use crate::types::{Direction, DirectionRequest, Tile};

/// Facing the actor starts with.
pub const START_FACING: Direction = Direction::Right;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameStatus {
    #[default]
    Playing,
    /// Every collectible has been eaten. Terminal.
    Won,
}

/// Something that happened during a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Turned(Direction),
    Moved { to: (i32, i32) },
    Blocked { at: (i32, i32) },
    Ate { tile: Tile, at: (i32, i32), points: u32 },
    Won { score: u32 },
}

/// Events produced by one tick (at most turn + move + eat + win).
pub type TickEvents = ArrayVec<GameEvent, 4>;

#[derive(Debug, Clone)]
pub struct GameState {
    grid: Grid,
    actor: Actor,
    points_left: usize,
    status: GameStatus,
}

impl GameState {
    /// New game on `grid` with the actor on the grid's spawn cell.
    pub fn new(grid: Grid) -> Self {
        let actor = Actor::new(grid.spawn(), START_FACING);
        Self::with_actor(grid, actor)
    }

    /// New game on the built-in maze.
    pub fn classic() -> Result<Self, LayoutError> {
        Ok(Self::new(Grid::classic()?))
    }

    /// New game with an explicitly placed actor.
    pub fn with_actor(grid: Grid, actor: Actor) -> Self {
        let points_left = grid.point_count();
        let status = if points_left == 0 {
            GameStatus::Won
        } else {
            GameStatus::Playing
        };
        Self {
            grid,
            actor,
            points_left,
            status,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn actor(&self) -> &Actor {
        &self.actor
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_won(&self) -> bool {
        self.status == GameStatus::Won
    }

    pub fn score(&self) -> u32 {
        self.actor.score()
    }

    pub fn lives(&self) -> u32 {
        self.actor.lives()
    }

    pub fn points_left(&self) -> usize {
        self.points_left
    }

    /// Queue a direction change for a future tick.
    pub fn enqueue(&mut self, request: DirectionRequest) {
        if self.is_won() {
            return;
        }
        self.actor.enqueue(request);
    }

    /// Advance the simulation to `now_ms`.
    ///
    /// Safe to call more often than the movement cadence: calls inside the
    /// cadence window return no events.
    pub fn tick(&mut self, now_ms: u64) -> TickEvents {
        let mut events = TickEvents::new();
        if self.is_won() {
            return events;
        }

        let outcome = self.actor.advance(&self.grid, now_ms);
        if let Some(dir) = outcome.turned() {
            events.push(GameEvent::Turned(dir));
        }

        match outcome {
            MoveOutcome::Idle => {}
            MoveOutcome::Blocked { .. } => {
                events.push(GameEvent::Blocked {
                    at: self.actor.position(),
                });
            }
            MoveOutcome::Moved { to, .. } => {
                events.push(GameEvent::Moved { to });
                if let Some(tile) = self.grid.take_point(to.0, to.1) {
                    let points = tile.score();
                    self.actor.add_score(points);
                    self.points_left = self.points_left.saturating_sub(1);
                    events.push(GameEvent::Ate {
                        tile,
                        at: to,
                        points,
                    });
                    debug!(points, left = self.points_left, "point eaten");
                }
            }
        }

        if self.points_left == 0 {
            self.status = GameStatus::Won;
            info!(score = self.score(), "all points collected");
            events.push(GameEvent::Won {
                score: self.score(),
            });
        }

        events
    }

    /// Build a fresh frame matrix.
    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    /// Fill `snap` with the current grid, actor overlay and counters,
    /// reusing its allocation.
    pub fn snapshot_into(&self, snap: &mut GameSnapshot) {
        snap.width = self.grid.width();
        snap.height = self.grid.height();
        snap.cells.clear();
        snap.cells
            .extend(self.grid.tiles().iter().copied().map(SnapshotCell::Tile));

        let (ax, ay) = self.actor.position();
        if let Some(idx) = snap.index(ax, ay) {
            snap.cells[idx] = SnapshotCell::Actor;
        }

        snap.actor = (ax, ay);
        snap.facing = self.actor.facing();
        snap.score = self.actor.score();
        snap.lives = self.actor.lives();
        snap.points_left = self.points_left;
        snap.status = self.status;
    }
}
