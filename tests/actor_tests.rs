//! Actor tests - cadence, turning, staleness, walls and wraparound

use tui_pacman::core::{Actor, Grid, MoveOutcome};
use tui_pacman::types::{
    Direction, DirectionRequest, MAX_QUEUED_REQUESTS, MOVE_INTERVAL_MS, START_LIVES,
};

/// First time at which a move is allowed after one at `last`.
fn next_move(last: u64) -> u64 {
    last + MOVE_INTERVAL_MS + 1
}

/// An all-open grid of the given size with the spawn marker at (0, 0).
fn open_grid(width: usize, height: usize) -> Grid {
    let mut layout = String::new();
    for y in 0..height {
        for x in 0..width {
            layout.push(if x == 0 && y == 0 { 'P' } else { ' ' });
        }
        layout.push('\n');
    }
    Grid::parse(&layout).unwrap()
}

#[test]
fn test_new_actor_defaults() {
    let actor = Actor::new((13, 23), Direction::Right);
    assert_eq!(actor.position(), (13, 23));
    assert_eq!(actor.facing(), Direction::Right);
    assert_eq!(actor.score(), 0);
    assert_eq!(actor.lives(), START_LIVES);
    assert_eq!(actor.pending_len(), 0);
    assert_eq!(actor.last_move_ms(), 0);
}

#[test]
fn test_turn_up_on_open_grid() {
    let grid = open_grid(28, 31);
    let mut actor = Actor::new((13, 23), Direction::Right);
    actor.enqueue(DirectionRequest::new(Direction::Up, 0));

    let outcome = actor.advance(&grid, next_move(0));

    assert_eq!(
        outcome,
        MoveOutcome::Moved {
            from: (13, 23),
            to: (13, 22),
            turned: Some(Direction::Up)
        }
    );
    assert_eq!(actor.facing(), Direction::Up);
    assert_eq!(actor.position(), (13, 22));
    assert_eq!(actor.pending_len(), 0);
}

#[test]
fn test_cadence_gates_movement() {
    let grid = open_grid(10, 10);
    let mut actor = Actor::new((2, 2), Direction::Right);
    actor.enqueue(DirectionRequest::new(Direction::Down, 0));

    // Below the cadence: no move, no turn, request untouched.
    assert_eq!(actor.advance(&grid, 16), MoveOutcome::Idle);
    assert_eq!(actor.advance(&grid, MOVE_INTERVAL_MS), MoveOutcome::Idle);
    assert_eq!(actor.position(), (2, 2));
    assert_eq!(actor.facing(), Direction::Right);
    assert_eq!(actor.pending_len(), 1);

    let t1 = next_move(0);
    assert!(matches!(actor.advance(&grid, t1), MoveOutcome::Moved { .. }));
    assert_eq!(actor.position(), (2, 3));

    // Within the next window: idle again.
    assert_eq!(actor.advance(&grid, t1 + 17), MoveOutcome::Idle);
    assert_eq!(actor.advance(&grid, t1 + MOVE_INTERVAL_MS), MoveOutcome::Idle);
    assert_eq!(actor.position(), (2, 3));

    assert!(matches!(actor.advance(&grid, next_move(t1)), MoveOutcome::Moved { .. }));
    assert_eq!(actor.position(), (2, 4));
}

#[test]
fn test_walls_never_let_the_actor_through() {
    let grid = Grid::classic().unwrap();

    for y in 0..grid.height() {
        for x in 0..grid.width() {
            if grid.is_solid(x, y) {
                continue;
            }
            for dir in Direction::ALL {
                let (dx, dy) = dir.delta();
                let (nx, ny) = (grid.wrap_x(x + dx), y + dy);
                if !grid.is_solid(nx, ny) {
                    continue;
                }

                let mut actor = Actor::new((x, y), dir);
                let outcome = actor.advance(&grid, next_move(0));
                assert_eq!(outcome, MoveOutcome::Blocked { turned: None });
                assert_eq!(actor.position(), (x, y), "({}, {}) {:?}", x, y, dir);
            }
        }
    }
}

#[test]
fn test_blocked_move_still_consumes_the_window() {
    let grid = Grid::parse("###\n#P#\n###").unwrap();
    let mut actor = Actor::new((1, 1), Direction::Right);

    let t = next_move(0);
    assert_eq!(actor.advance(&grid, t), MoveOutcome::Blocked { turned: None });
    assert_eq!(actor.last_move_ms(), t);
    assert_eq!(actor.advance(&grid, t + 10), MoveOutcome::Idle);
}

#[test]
fn test_wraparound_left_edge() {
    let grid = Grid::classic().unwrap();
    let mut actor = Actor::new((0, 14), Direction::Left);

    actor.advance(&grid, next_move(0));

    assert_eq!(actor.position(), (grid.width() - 1, 14));
    assert_eq!(actor.position(), (27, 14));
}

#[test]
fn test_wraparound_right_edge() {
    let grid = Grid::classic().unwrap();
    let mut actor = Actor::new((27, 14), Direction::Right);

    actor.advance(&grid, next_move(0));

    assert_eq!(actor.position(), (0, 14));
}

#[test]
fn test_turn_at_the_edge_wraps_the_probe() {
    let grid = Grid::classic().unwrap();
    let mut actor = Actor::new((0, 14), Direction::Right);
    actor.enqueue(DirectionRequest::new(Direction::Left, 0));

    let outcome = actor.advance(&grid, next_move(0));

    assert_eq!(outcome.turned(), Some(Direction::Left));
    assert_eq!(actor.position(), (27, 14));
}

#[test]
fn test_blocked_turn_stays_queued_until_it_fits() {
    let grid = Grid::parse("######\n###  #\n#P   #\n######").unwrap();
    let mut actor = Actor::new((1, 2), Direction::Right);
    actor.enqueue(DirectionRequest::new(Direction::Up, 0));

    let t1 = next_move(0);
    actor.advance(&grid, t1);
    assert_eq!(actor.position(), (2, 2));
    assert_eq!(actor.facing(), Direction::Right);
    assert_eq!(actor.pending_len(), 1);

    let t2 = next_move(t1);
    actor.advance(&grid, t2);
    assert_eq!(actor.position(), (3, 2));
    assert_eq!(actor.pending_len(), 1);

    let outcome = actor.advance(&grid, next_move(t2));
    assert_eq!(outcome.turned(), Some(Direction::Up));
    assert_eq!(actor.position(), (3, 1));
    assert_eq!(actor.pending_len(), 0);
}

#[test]
fn test_stale_request_is_dropped_without_skipping_the_next() {
    let grid = open_grid(10, 10);
    let mut actor = Actor::new((5, 5), Direction::Right);
    actor.enqueue(DirectionRequest::new(Direction::Up, 0));
    actor.enqueue(DirectionRequest::new(Direction::Down, 1050));

    // Up is 1100ms old: dropped, actor keeps going right.
    let outcome = actor.advance(&grid, 1100);
    assert_eq!(
        outcome,
        MoveOutcome::Moved {
            from: (5, 5),
            to: (6, 5),
            turned: None
        }
    );
    assert_eq!(actor.facing(), Direction::Right);
    assert_eq!(actor.pending_len(), 1);

    // Down is still fresh and gets applied on the next attempt.
    actor.advance(&grid, next_move(1100));
    assert_eq!(actor.facing(), Direction::Down);
    assert_eq!(actor.position(), (6, 6));
    assert_eq!(actor.pending_len(), 0);
}

#[test]
fn test_request_exactly_at_threshold_is_applied() {
    let grid = open_grid(10, 10);
    let mut actor = Actor::new((5, 5), Direction::Right);
    actor.enqueue(DirectionRequest::new(Direction::Up, 0));

    actor.advance(&grid, 1000);

    assert_eq!(actor.facing(), Direction::Up);
    assert_eq!(actor.position(), (5, 4));
}

#[test]
fn test_blocked_request_eventually_goes_stale() {
    let grid = Grid::parse("#####\n#P  #\n#####").unwrap();
    let mut actor = Actor::new((1, 1), Direction::Right);
    actor.enqueue(DirectionRequest::new(Direction::Up, 0));

    actor.advance(&grid, next_move(0));
    assert_eq!(actor.pending_len(), 1);

    actor.advance(&grid, 1500);
    assert_eq!(actor.pending_len(), 0);
    assert_eq!(actor.facing(), Direction::Right);
}

#[test]
fn test_same_direction_request_is_not_a_turn() {
    let grid = open_grid(10, 10);
    let mut actor = Actor::new((5, 5), Direction::Right);
    actor.enqueue(DirectionRequest::new(Direction::Right, 0));

    let outcome = actor.advance(&grid, next_move(0));

    assert_eq!(outcome.turned(), None);
    assert_eq!(actor.position(), (6, 5));
    assert_eq!(actor.pending_len(), 0);
}

#[test]
fn test_queue_drops_oldest_when_full() {
    let mut actor = Actor::new((0, 0), Direction::Right);
    for i in 0..(MAX_QUEUED_REQUESTS as u64 + 4) {
        actor.enqueue(DirectionRequest::new(Direction::Up, i));
    }

    assert_eq!(actor.pending_len(), MAX_QUEUED_REQUESTS);
    assert_eq!(actor.pending().next().map(|r| r.issued_ms), Some(4));
}

#[test]
fn test_add_score_saturates() {
    let mut actor = Actor::new((0, 0), Direction::Right);
    actor.add_score(10);
    actor.add_score(50);
    assert_eq!(actor.score(), 60);
    actor.add_score(u32::MAX);
    assert_eq!(actor.score(), u32::MAX);
}
