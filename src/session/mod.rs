pub mod lifecycle;
pub mod timer;

pub use lifecycle::{GamePhase, GameSession};
pub use timer::TickTimer;
