// Per-player input state management

use super::action::Action;
use std::collections::HashSet;

/// Snapshot of the player's input for one simulation tick
///
/// Edge fields (`*_pressed`, `*_released`) are true only on the tick the
/// edge happened; held fields stay true while the key is down.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputFrame {
    /// Horizontal axis in -1.0..=1.0
    pub horizontal: f32,
    pub jump_pressed: bool,
    pub jump_held: bool,
    pub jump_released: bool,
    pub dash_pressed: bool,
    pub crouch_pressed: bool,
    pub crouch_held: bool,
}

impl InputFrame {
    /// Same held state with all edges cleared
    ///
    /// Used when one rendered frame runs several simulation ticks, so a
    /// single key press is only seen once.
    pub fn held_only(&self) -> Self {
        Self {
            horizontal: self.horizontal,
            jump_held: self.jump_held,
            crouch_held: self.crouch_held,
            ..Self::default()
        }
    }
}

/// Press/hold/release tracking for the local player
#[derive(Debug, Default)]
pub struct PlayerInput {
    /// Actions that are currently pressed
    pressed: HashSet<Action>,

    /// Actions that were just pressed this frame
    just_pressed: HashSet<Action>,

    /// Actions that were just released this frame
    just_released: HashSet<Action>,
}

impl PlayerInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if an action is currently pressed
    pub fn is_pressed(&self, action: Action) -> bool {
        self.pressed.contains(&action)
    }

    /// Check if an action was just pressed this frame
    pub fn just_pressed(&self, action: Action) -> bool {
        self.just_pressed.contains(&action)
    }

    /// Check if an action was just released this frame
    pub fn just_released(&self, action: Action) -> bool {
        self.just_released.contains(&action)
    }

    /// Register an action press
    pub(crate) fn press(&mut self, action: Action) {
        if self.pressed.insert(action) {
            self.just_pressed.insert(action);
        }
    }

    /// Register an action release
    pub(crate) fn release(&mut self, action: Action) {
        if self.pressed.remove(&action) {
            self.just_released.insert(action);
        }
    }

    /// Clear per-frame edges, call once per frame after the frame was consumed
    pub(crate) fn end_frame(&mut self) {
        self.just_pressed.clear();
        self.just_released.clear();
    }

    /// Reset all input state (e.g. when the window loses focus)
    pub fn reset(&mut self) {
        self.pressed.clear();
        self.just_pressed.clear();
        self.just_released.clear();
    }

    /// Horizontal axis: -1 for left, 1 for right, 0 for none or both
    pub fn horizontal(&self) -> f32 {
        let mut horizontal = 0.0;
        if self.is_pressed(Action::MoveLeft) {
            horizontal -= 1.0;
        }
        if self.is_pressed(Action::MoveRight) {
            horizontal += 1.0;
        }
        horizontal
    }

    /// Build the snapshot the motion controller consumes
    pub fn frame(&self) -> InputFrame {
        InputFrame {
            horizontal: self.horizontal(),
            jump_pressed: self.just_pressed(Action::Jump),
            jump_held: self.is_pressed(Action::Jump),
            jump_released: self.just_released(Action::Jump),
            dash_pressed: self.just_pressed(Action::Dash),
            crouch_pressed: self.just_pressed(Action::Crouch),
            crouch_held: self.is_pressed(Action::Crouch),
        }
    }
}
