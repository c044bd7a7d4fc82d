//! Movement and combat core of a 2D action-platformer
//!
//! - `engine`: timers, fixed-step loop, keyboard input, rapier2d physics and
//!   the `CollisionProbe` queries
//! - `game`: player motion controller, enemy AI, health and the `Scene`
//!   that ties them to a physics world

pub mod core;
pub mod engine;
pub mod game;
