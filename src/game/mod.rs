// Game logic: actors, their controllers and the scene that runs them

pub mod animation;
pub mod enemy;
pub mod health;
pub mod player;
pub mod scene;

pub use enemy::{EnemyAIController, EnemyConfig, EnemyEvent, EnemyState};
pub use health::{DamageOutcome, HealthConfig, HealthModel};
pub use player::{MotionState, PlayerConfig, PlayerMotionController};
pub use scene::{EnemyId, Scene, SceneBuilder, TickReport};
