// Core utilities shared by engine and game code

pub mod error;
pub mod math;

pub use error::{ConfigError, SceneError};
