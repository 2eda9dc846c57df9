use std::time::Duration;

use super::direction::Direction;

/// A cell on the game grid
///
/// Coordinates are 1-indexed: valid cells lie in `[1, N]` on both axes. The
/// head may briefly hold an out-of-bounds cell after a step; that is what the
/// wall check looks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The adjacent cell one step in the given direction
    pub fn neighbor(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// The snake body
///
/// Head at index 0, tail at the end. Length is at least 1 and the cells are
/// distinct while the snake is alive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    /// Body segments, with head at index 0
    pub body: Vec<Cell>,
}

impl Snake {
    /// Create a single-segment snake at the given cell
    pub fn new(head: Cell) -> Self {
        Self { body: vec![head] }
    }

    /// Get the head cell
    pub fn head(&self) -> Cell {
        self.body[0]
    }

    /// Body segments excluding the head
    pub fn segments(&self) -> &[Cell] {
        &self.body[1..]
    }

    /// Check if a cell overlaps the body (head excluded)
    pub fn hits_body(&self, cell: Cell) -> bool {
        self.segments().contains(&cell)
    }

    /// Check if a cell overlaps any part of the snake, head included
    pub fn contains(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Push a new head to the front; keep the tail in place when growing
    pub fn advance(&mut self, new_head: Cell, grow: bool) {
        self.body.insert(0, new_head);
        if !grow {
            self.body.pop();
        }
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Controller phase: ticking, or waiting for a start signal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Running,
}

/// Tick interval at session start, in milliseconds
pub const START_INTERVAL_MS: u64 = 200;

/// The speed ramp never pushes the interval below this
pub const MIN_INTERVAL_MS: u64 = 25;

/// Complete game session state
///
/// Everything the tick loop and the renderer need: grid contents, active
/// direction, current tick interval, and session-lifetime score bookkeeping.
/// The high score survives resets but not the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    pub grid_size: usize,
    pub snake: Snake,
    pub food: Cell,
    pub direction: Direction,
    pub interval_ms: u64,
    pub phase: Phase,
    pub high_score: u32,
    pub completed_games: u32,
}

impl GameSession {
    /// Current score: body length minus the head
    pub fn score(&self) -> u32 {
        self.snake.len() as u32 - 1
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    /// Idle -> Running. Returns true if the transition happened.
    pub fn start(&mut self) -> bool {
        if self.phase == Phase::Idle {
            self.phase = Phase::Running;
            true
        } else {
            false
        }
    }

    /// Running -> Idle. Safe to call in any phase.
    pub fn stop(&mut self) {
        self.phase = Phase::Idle;
    }

    /// Set the direction used by the next tick
    ///
    /// No reversal filtering: steering straight into the neck is accepted
    /// and self-collides on the following tick.
    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Shrink the tick interval by one ramp step
    ///
    /// The step tapers as the game speeds up: -5 above 150 ms, -3 above
    /// 100 ms, -2 above 50 ms, -1 above 25 ms, then the interval stays put.
    pub fn speed_up(&mut self) {
        self.interval_ms = match self.interval_ms {
            ms if ms > 150 => ms - 5,
            ms if ms > 100 => ms - 3,
            ms if ms > 50 => ms - 2,
            ms if ms > MIN_INTERVAL_MS => ms - 1,
            ms => ms,
        };
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    /// Check if a cell is within the 1-indexed grid bounds
    pub fn in_bounds(&self, cell: Cell) -> bool {
        let n = self.grid_size as i32;
        cell.x >= 1 && cell.x <= n && cell.y >= 1 && cell.y <= n
    }
}
