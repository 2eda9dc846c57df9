use serde::{Deserialize, Serialize};

use super::state::START_INTERVAL_MS;

/// Configuration for the game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Side length of the square grid
    pub grid_size: usize,
    /// Tick interval a fresh session starts with, in milliseconds
    pub start_interval_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: 20,
            start_interval_ms: START_INTERVAL_MS,
        }
    }
}

impl GameConfig {
    /// Create a configuration with a custom grid size
    pub fn new(grid_size: usize) -> Self {
        Self {
            grid_size,
            ..Default::default()
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(10)
    }
}
