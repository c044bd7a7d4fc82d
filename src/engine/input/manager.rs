// Input manager - maps winit keyboard events onto player actions

use super::action::{default_bindings, Action};
use super::player::{InputFrame, PlayerInput};
use std::collections::HashMap;
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Owns the key bindings and the local player's input state
pub struct InputManager {
    bindings: HashMap<KeyCode, Action>,
    player: PlayerInput,
}

impl InputManager {
    /// Create an input manager with the default bindings
    pub fn new() -> Self {
        Self::with_bindings(default_bindings())
    }

    /// Create an input manager with custom bindings
    pub fn with_bindings(bindings: Vec<(KeyCode, Action)>) -> Self {
        Self {
            bindings: bindings.into_iter().collect(),
            player: PlayerInput::new(),
        }
    }

    /// Process a keyboard event from winit
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        if let PhysicalKey::Code(key_code) = event.physical_key {
            self.process_key(key_code, event.state, event.repeat);
        }
    }

    /// Apply a key state change
    pub fn process_key(&mut self, key_code: KeyCode, state: ElementState, repeat: bool) {
        let Some(&action) = self.bindings.get(&key_code) else {
            return;
        };

        match state {
            // Key repeats are not new presses
            ElementState::Pressed if !repeat => self.player.press(action),
            ElementState::Pressed => {}
            ElementState::Released => self.player.release(action),
        }
    }

    /// Snapshot of this frame's input
    pub fn frame(&self) -> InputFrame {
        self.player.frame()
    }

    /// Clear per-frame edges; call once per rendered frame after ticking
    pub fn end_frame(&mut self) {
        self.player.end_frame();
    }

    /// Drop all held keys (focus lost)
    pub fn reset(&mut self) {
        self.player.reset();
    }

    pub fn player(&self) -> &PlayerInput {
        &self.player
    }

    /// Rebind a key
    pub fn bind(&mut self, key_code: KeyCode, action: Action) {
        self.bindings.insert(key_code, action);
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bound_key_press() {
        let mut manager = InputManager::new();
        manager.process_key(KeyCode::Space, ElementState::Pressed, false);
        assert!(manager.frame().jump_pressed);
        assert!(manager.frame().jump_held);
    }

    #[test]
    fn test_unbound_key_ignored() {
        let mut manager = InputManager::new();
        manager.process_key(KeyCode::KeyQ, ElementState::Pressed, false);
        assert_eq!(manager.frame(), InputFrame::default());
    }

    #[test]
    fn test_repeat_is_not_an_edge() {
        let mut manager = InputManager::new();
        manager.process_key(KeyCode::ShiftLeft, ElementState::Pressed, false);
        manager.end_frame();
        manager.process_key(KeyCode::ShiftLeft, ElementState::Pressed, true);
        assert!(!manager.frame().dash_pressed);
    }

    #[test]
    fn test_release_produces_jump_released() {
        let mut manager = InputManager::new();
        manager.process_key(KeyCode::Space, ElementState::Pressed, false);
        manager.end_frame();
        manager.process_key(KeyCode::Space, ElementState::Released, false);
        let frame = manager.frame();
        assert!(frame.jump_released);
        assert!(!frame.jump_held);
    }

    #[test]
    fn test_rebind() {
        let mut manager = InputManager::new();
        manager.bind(KeyCode::KeyK, Action::Jump);
        manager.process_key(KeyCode::KeyK, ElementState::Pressed, false);
        assert!(manager.player().is_pressed(Action::Jump));
    }

    #[test]
    fn test_reset_clears_held_keys() {
        let mut manager = InputManager::new();
        manager.process_key(KeyCode::KeyD, ElementState::Pressed, false);
        manager.reset();
        assert_eq!(manager.frame().horizontal, 0.0);
    }
}
