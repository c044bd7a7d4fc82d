// Game action definitions and key bindings

use winit::keyboard::KeyCode;

/// Represents all possible in-game actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Movement
    MoveLeft,
    MoveRight,
    Jump,
    Dash,
    Crouch,

    // Meta
    Quit,
}

/// Default keyboard bindings for the player
pub fn default_bindings() -> Vec<(KeyCode, Action)> {
    vec![
        // Horizontal axis (WASD and arrows)
        (KeyCode::KeyA, Action::MoveLeft),
        (KeyCode::ArrowLeft, Action::MoveLeft),
        (KeyCode::KeyD, Action::MoveRight),
        (KeyCode::ArrowRight, Action::MoveRight),
        // Abilities
        (KeyCode::Space, Action::Jump),
        (KeyCode::ShiftLeft, Action::Dash),
        (KeyCode::KeyS, Action::Crouch),
        (KeyCode::ArrowDown, Action::Crouch),
        (KeyCode::ControlLeft, Action::Crouch),
        // Meta
        (KeyCode::Escape, Action::Quit),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_gameplay_action_is_bound() {
        let bindings = default_bindings();
        for action in [
            Action::MoveLeft,
            Action::MoveRight,
            Action::Jump,
            Action::Dash,
            Action::Crouch,
        ] {
            assert!(
                bindings.iter().any(|(_, a)| *a == action),
                "{:?} has no default binding",
                action
            );
        }
    }

    #[test]
    fn test_dash_on_left_shift() {
        let bindings = default_bindings();
        assert!(bindings.contains(&(KeyCode::ShiftLeft, Action::Dash)));
        assert!(bindings.contains(&(KeyCode::Space, Action::Jump)));
    }

    #[test]
    fn test_no_duplicate_keys() {
        let mut seen = HashSet::new();
        for (key, _) in default_bindings() {
            assert!(seen.insert(key), "Duplicate key {:?} in default bindings", key);
        }
    }
}
