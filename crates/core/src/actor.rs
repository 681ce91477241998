//! Actor module - the player-controlled entity
//!
//! The actor moves one cell per cadence window (see [`MOVE_INTERVAL_MS`]) in
//! its facing direction. Direction changes arrive as timestamped
//! [`DirectionRequest`]s in a FIFO deque; a request that cannot be honored yet
//! because a wall is in the way stays at the front of the deque until it
//! either fits or goes stale.

use std::collections::VecDeque;

use tracing::{debug, trace};

use crate::cadence::CadenceGate;
use crate::collision::{collides, Shape};
use crate::grid::Grid;
use crate::types::{Direction, DirectionRequest, MAX_QUEUED_REQUESTS, MOVE_INTERVAL_MS, START_LIVES};

/// Result of a single [`Actor::advance`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The cadence window has not elapsed; nothing changed.
    Idle,
    /// A move was attempted but the next cell is solid.
    Blocked { turned: Option<Direction> },
    Moved {
        from: (i32, i32),
        to: (i32, i32),
        turned: Option<Direction>,
    },
}

impl MoveOutcome {
    /// The new facing adopted during this attempt, if it changed.
    pub fn turned(&self) -> Option<Direction> {
        match *self {
            MoveOutcome::Idle => None,
            MoveOutcome::Blocked { turned } | MoveOutcome::Moved { turned, .. } => turned,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Actor {
    x: i32,
    y: i32,
    facing: Direction,
    queue: VecDeque<DirectionRequest>,
    shape: Shape,
    score: u32,
    lives: u32,
    gate: CadenceGate,
}

impl Actor {
    pub fn new(position: (i32, i32), facing: Direction) -> Self {
        Self {
            x: position.0,
            y: position.1,
            facing,
            queue: VecDeque::with_capacity(MAX_QUEUED_REQUESTS),
            shape: Shape::single(),
            score: 0,
            lives: START_LIVES,
            gate: CadenceGate::new(MOVE_INTERVAL_MS),
        }
    }

    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    pub fn facing(&self) -> Direction {
        self.facing
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Time of the last movement attempt.
    pub fn last_move_ms(&self) -> u64 {
        self.gate.last_ms()
    }

    pub fn pending(&self) -> impl Iterator<Item = &DirectionRequest> {
        self.queue.iter()
    }

    pub fn pending_len(&self) -> usize {
        self.queue.len()
    }

    pub fn add_score(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    /// Append a direction request. When the deque is full the oldest entry
    /// is dropped to make room.
    pub fn enqueue(&mut self, request: DirectionRequest) {
        if self.queue.len() >= MAX_QUEUED_REQUESTS {
            self.queue.pop_front();
        }
        self.queue.push_back(request);
    }

    /// Attempt one step at `now_ms`.
    pub fn advance(&mut self, grid: &Grid, now_ms: u64) -> MoveOutcome {
        if !self.gate.try_pass(now_ms) {
            return MoveOutcome::Idle;
        }

        let turned = self.apply_pending(grid, now_ms);

        let (dx, dy) = self.facing.delta();
        let from = (self.x, self.y);
        let to = (grid.wrap_x(self.x + dx), self.y + dy);

        if collides(grid, &self.shape, to) {
            trace!(x = from.0, y = from.1, facing = self.facing.as_str(), "move blocked");
            return MoveOutcome::Blocked { turned };
        }

        self.x = to.0;
        self.y = to.1;
        trace!(x = to.0, y = to.1, "moved");
        MoveOutcome::Moved { from, to, turned }
    }

    /// Pop at most one request and adopt it if the cell it points at is free.
    fn apply_pending(&mut self, grid: &Grid, now_ms: u64) -> Option<Direction> {
        let request = self.queue.pop_front()?;

        if request.is_stale(now_ms) {
            debug!(
                dir = request.dir.as_str(),
                age_ms = now_ms.saturating_sub(request.issued_ms),
                "dropping stale direction request"
            );
            return None;
        }

        let (dx, dy) = request.dir.delta();
        let probe = (grid.wrap_x(self.x + dx), self.y + dy);
        if collides(grid, &self.shape, probe) {
            self.queue.push_front(request);
            return None;
        }

        if request.dir == self.facing {
            return None;
        }
        self.facing = request.dir;
        Some(request.dir)
    }
}
