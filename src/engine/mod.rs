// Engine modules: timers, fixed-step loop, input, physics

pub mod game_loop;
pub mod input;
pub mod physics;
pub mod timer;
