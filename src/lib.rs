//! Snake Arcade - a terminal Snake game
//!
//! This library provides:
//! - Core simulation logic (game module): the step function, collision
//!   detection, food placement and the hard-mode food drift
//! - Session lifecycle (session module): start/pause/resume/reset, the
//!   reschedulable tick timer and high-score tracking
//! - Peripherals: terminal rendering, keyboard input, sound events and
//!   the JSON save file

pub mod audio;
pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
pub mod score;
pub mod session;
