// Input handling system
//
// Keyboard input for the local player, reduced each tick to an `InputFrame`
// snapshot that the motion controller consumes.
//
// ## Architecture
//
// - `action`: Defines game actions and default key bindings
// - `player`: Press/hold/release tracking and the `InputFrame` snapshot
// - `manager`: Maps winit keyboard events onto actions
//
// ## Usage Example
//
// ```rust
// use ten_second_dungeon::engine::input::InputManager;
//
// let mut input = InputManager::new();
//
// // In your event loop, process keyboard events
// input.process_keyboard_event(&key_event);
//
// // Once per rendered frame
// let frame = input.frame();
// scene.tick(dt, &frame);
// input.end_frame();
// ```

pub mod action;
pub mod manager;
pub mod player;

// Re-export commonly used types
pub use action::Action;
pub use manager::InputManager;
pub use player::{InputFrame, PlayerInput};
