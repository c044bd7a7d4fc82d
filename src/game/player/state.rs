// Player motion state

use glam::Vec2;

/// Exclusive movement ability currently in control of the velocity
///
/// Wall sliding is not a state: it can overlap `Normal` on any tick and is
/// tracked as a derived flag on the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MotionState {
    /// Running, jumping, falling
    #[default]
    Normal,
    /// Fixed-speed horizontal burst; gravity and input are ignored
    Dashing,
    /// Just wall-jumped; horizontal input ignored until the lock expires
    WallJumpLocked,
    /// Crouched slide along the ground
    Sliding,
}

impl MotionState {
    /// Whether horizontal input drives velocity in this state
    pub fn accepts_input(&self) -> bool {
        matches!(self, Self::Normal)
    }

    /// Get the animation name for this state
    pub fn animation_name(&self) -> &'static str {
        match self {
            Self::Normal => "locomotion",
            Self::Dashing => "dash",
            Self::WallJumpLocked => "wall_jump",
            Self::Sliding => "slide",
        }
    }
}

/// Ability bookkeeping that outlives individual states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AbilityFlags {
    /// Set by an airborne dash, cleared only by landing
    pub has_air_dashed: bool,
    /// False while a wall-jump lock or slide holds horizontal control
    pub can_move: bool,
}

impl Default for AbilityFlags {
    fn default() -> Self {
        Self {
            has_air_dashed: false,
            can_move: true,
        }
    }
}

/// Named countdowns owned by the motion controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerTimer {
    Coyote,
    JumpBuffer,
    WallCoyote,
    /// Grace after grabbing a wall; wall jumps are refused while active
    WallJumpLock,
    /// Horizontal control lock after a wall jump
    WallJumpControl,
    Dash,
    DashCooldown,
    Slide,
}

/// Collision box the physics body should currently use
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColliderProfile {
    pub half_extents: Vec2,
    /// Vertical offset from the body origin, keeps the feet in place when crouched
    pub offset_y: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        assert_eq!(MotionState::default(), MotionState::Normal);
        let flags = AbilityFlags::default();
        assert!(flags.can_move);
        assert!(!flags.has_air_dashed);
    }

    #[test]
    fn test_only_normal_accepts_input() {
        assert!(MotionState::Normal.accepts_input());
        assert!(!MotionState::Dashing.accepts_input());
        assert!(!MotionState::WallJumpLocked.accepts_input());
        assert!(!MotionState::Sliding.accepts_input());
    }

    #[test]
    fn test_animation_names() {
        assert_eq!(MotionState::Dashing.animation_name(), "dash");
        assert_eq!(MotionState::Sliding.animation_name(), "slide");
    }
}
