// Physics system using rapier2d
//
// The physics engine owns position integration and geometry; the movement
// controllers only see it through the `CollisionProbe` trait.

pub mod body;
mod collision;
mod probe;
mod world;

pub use body::presets;
pub use collision::CollisionLayer;
pub use probe::{CollisionProbe, RapierProbe, WallContact};
pub use world::{ColliderHandle, PhysicsWorld, RigidBodyHandle};

#[cfg(test)]
pub(crate) use probe::ScriptedProbe;
