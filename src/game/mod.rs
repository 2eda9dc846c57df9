//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering
//! dependencies, so the whole state machine is testable without a terminal.

pub mod config;
pub mod direction;
pub mod engine;
pub mod food;
pub mod state;

// Re-export commonly used types
pub use config::GameConfig;
pub use direction::Direction;
pub use engine::{CollisionType, GameEngine, StepOutcome};
pub use food::FoodSpawner;
pub use state::{Cell, GameSession, Phase, Snake, MIN_INTERVAL_MS, START_INTERVAL_MS};
