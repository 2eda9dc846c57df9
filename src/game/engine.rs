use super::{
    config::GameConfig,
    direction::Direction,
    food::FoodSpawner,
    state::{Cell, GameSession, Phase, Snake},
};

/// What a single tick changed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepOutcome {
    /// Whether the snake ate food this tick
    ///
    /// When true, the session interval has already shrunk and the driver
    /// must re-arm its tick timer at the new interval.
    pub ate_food: bool,
}

/// Type of collision that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Head left the grid
    Wall,
    /// Head landed on a body segment
    SelfCollision,
}

/// The game engine: movement, collision detection, and the reset transition
///
/// Owns the food spawner so session state itself stays pure data.
pub struct GameEngine {
    config: GameConfig,
    spawner: FoodSpawner,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            spawner: FoodSpawner::new(),
        }
    }

    /// Engine with deterministic food placement, for tests
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self {
            config,
            spawner: FoodSpawner::with_seed(seed),
        }
    }

    /// Build the initial session: length-1 snake at grid center, fresh food,
    /// heading right, default interval, waiting for a start signal
    pub fn new_session(&mut self) -> GameSession {
        let n = self.config.grid_size;
        GameSession {
            grid_size: n,
            snake: Snake::new(center_cell(n)),
            food: self.spawner.spawn(n),
            direction: Direction::Right,
            interval_ms: self.config.start_interval_ms,
            phase: Phase::Idle,
            high_score: 0,
            completed_games: 0,
        }
    }

    /// Advance the snake one cell in the active direction
    ///
    /// The new head goes to the front of the body. Reaching the food cell
    /// keeps the tail in place (net growth of one), spawns replacement food
    /// and fires the speed ramp; otherwise the tail is dropped and the move
    /// is a pure translation. Collisions are not checked here.
    pub fn step(&mut self, session: &mut GameSession) -> StepOutcome {
        let new_head = session.snake.head().neighbor(session.direction);
        let ate_food = new_head == session.food;

        session.snake.advance(new_head, ate_food);

        if ate_food {
            session.food = self.spawner.spawn(session.grid_size);
            session.speed_up();
        }

        StepOutcome { ate_food }
    }

    /// Check the head after a step: wall first, then self
    pub fn check_collision(&self, session: &GameSession) -> Option<CollisionType> {
        let head = session.snake.head();

        if !session.in_bounds(head) {
            return Some(CollisionType::Wall);
        }

        if session.snake.hits_body(head) {
            return Some(CollisionType::SelfCollision);
        }

        None
    }

    /// Running -> Idle after a collision
    ///
    /// Folds the score at the moment of collision into the high score,
    /// counts the finished game, stops the session and restores the initial
    /// snake, food, direction and interval. High score is the only state
    /// that carries over.
    pub fn reset(&mut self, session: &mut GameSession) {
        let score = session.score();
        if score > session.high_score {
            session.high_score = score;
        }
        session.completed_games += 1;
        session.stop();

        let n = self.config.grid_size;
        session.snake = Snake::new(center_cell(n));
        session.food = self.spawner.spawn(n);
        session.direction = Direction::Right;
        session.interval_ms = self.config.start_interval_ms;
    }
}

/// Center of a 1-indexed square grid
fn center_cell(grid_size: usize) -> Cell {
    let mid = ((grid_size + 1) / 2) as i32;
    Cell::new(mid, mid)
}
