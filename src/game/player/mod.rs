// Player character: configuration, motion state and the motion controller

pub mod config;
mod controller;
mod state;

pub use config::{PlayerConfig, DEFAULT_PLAYER_CONFIG};
pub use controller::PlayerMotionController;
pub use state::{AbilityFlags, ColliderProfile, MotionState, PlayerTimer};
