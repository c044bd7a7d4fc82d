// Side-scrolling enemy: configuration, behavior state and the AI controller

pub mod config;
mod controller;
mod state;

pub use config::{EnemyConfig, DEFAULT_ENEMY_CONFIG};
pub use controller::EnemyAIController;
pub use state::{EnemyEvent, EnemyState, SwingResult};
