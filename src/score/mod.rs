pub mod save;

pub use save::{SaveData, SaveFile};
