//! Core game logic module for Snake
//!
//! Everything in here is pure simulation with no I/O or rendering
//! dependencies: the grid types, the per-tick step function, food
//! placement and the hard-mode food drift.

pub mod action;
pub mod config;
pub mod engine;
pub mod state;

// Re-export commonly used types
pub use action::{Action, Direction};
pub use config::GameConfig;
pub use engine::{GameEngine, StepInfo, StepResult};
pub use state::{CollisionType, Difficulty, FoodFlavor, GameState, Position, Snake};
