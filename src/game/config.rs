use serde::{Deserialize, Serialize};

/// Configuration for the game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Width and height of the square game grid, in cells
    pub grid_size: usize,
    /// Initial length of the snake
    pub initial_snake_length: usize,

    // Timing
    /// Snake tick interval at the start of a game, in milliseconds
    pub initial_tick_ms: u64,
    /// Fastest allowed tick interval, in milliseconds
    pub min_tick_ms: u64,
    /// How much the tick interval shrinks per speed-up, in milliseconds
    pub speed_step_ms: u64,
    /// Hard-mode food movement interval, in milliseconds
    pub food_tick_ms: u64,

    /// Probability that the food picks a new random direction on each
    /// of its hard-mode ticks
    pub food_turn_chance: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: 20,
            initial_snake_length: 3,
            initial_tick_ms: 160,
            min_tick_ms: 80,
            speed_step_ms: 1,
            food_tick_ms: 800,
            food_turn_chance: 0.3,
        }
    }
}

impl GameConfig {
    /// Create a configuration with a custom grid size
    pub fn with_grid_size(grid_size: usize) -> Self {
        Self {
            grid_size,
            ..Default::default()
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::with_grid_size(10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.grid_size, 20);
        assert_eq!(config.initial_snake_length, 3);
        assert_eq!(config.initial_tick_ms, 160);
        assert_eq!(config.min_tick_ms, 80);
        assert_eq!(config.food_tick_ms, 800);
    }

    #[test]
    fn test_custom_grid() {
        let config = GameConfig::with_grid_size(15);
        assert_eq!(config.grid_size, 15);
        assert_eq!(config.initial_snake_length, 3);
    }
}
