// Player movement tunables

use crate::core::ConfigError;

/// Immutable player movement configuration, fixed at construction
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerConfig {
    // Move
    /// Horizontal run speed (units/second)
    pub move_speed: f32,
    /// Airborne horizontal acceleration toward the input speed (units/second²)
    pub air_acceleration: f32,

    // Jump
    /// Vertical velocity set by a jump
    pub jump_power: f32,
    /// Vertical velocity is multiplied by this when jump is released while rising
    pub jump_cut_multiplier: f32,
    /// Gravity acceleration (negative = down)
    pub gravity: f32,
    /// Extra gravity factor while falling
    pub fall_multiplier: f32,

    // Assist
    /// Grace period after leaving the ground during which a jump still works
    pub coyote_time: f32,
    /// How long an early jump press is remembered
    pub jump_buffer_time: f32,

    // Dash
    pub dash_power: f32,
    pub dash_time: f32,
    pub dash_cooldown: f32,

    // Wall
    /// Wall probe length measured from the body center
    pub wall_check_distance: f32,
    /// Fastest fall speed while sliding down a wall
    pub wall_slide_speed: f32,
    /// Downward speed above which wall contact counts as sliding
    pub wall_slide_threshold: f32,
    /// Grace period after leaving a wall during which a wall jump still works
    pub wall_coyote_time: f32,
    /// Short window after grabbing a wall during which a wall jump is refused
    pub wall_contact_grace: f32,
    pub wall_jump_force_x: f32,
    pub wall_jump_force_y: f32,
    /// Horizontal input is ignored for this long after a wall jump
    pub wall_jump_control_time: f32,

    // Slide
    pub slide_speed: f32,
    pub slide_time: f32,
    /// Minimum run speed for crouch to start a slide
    pub slide_min_speed: f32,
    /// Slide ends once speed drops below this
    pub slide_stop_speed: f32,
    /// Deceleration while sliding (units/second²)
    pub slide_deceleration: f32,

    // Dimensions
    pub half_width: f32,
    pub standing_half_height: f32,
    pub crouch_half_height: f32,
    /// Ground probe length below the feet
    pub ground_check_distance: f32,
}

/// Default player tuning
pub const DEFAULT_PLAYER_CONFIG: PlayerConfig = PlayerConfig {
    move_speed: 8.0,
    air_acceleration: 40.0,

    jump_power: 14.0,
    jump_cut_multiplier: 0.5,
    gravity: -35.0,
    fall_multiplier: 1.7,

    coyote_time: 0.1,
    jump_buffer_time: 0.1,

    dash_power: 20.0,
    dash_time: 0.2,
    dash_cooldown: 0.5,

    wall_check_distance: 0.5,
    wall_slide_speed: 2.5,
    wall_slide_threshold: 0.1,
    wall_coyote_time: 0.1,
    wall_contact_grace: 0.05,
    wall_jump_force_x: 10.0,
    wall_jump_force_y: 14.0,
    wall_jump_control_time: 0.2,

    slide_speed: 14.0,
    slide_time: 0.45,
    slide_min_speed: 4.0,
    slide_stop_speed: 1.5,
    slide_deceleration: 15.0,

    half_width: 0.4,
    standing_half_height: 0.9,
    crouch_half_height: 0.45,
    ground_check_distance: 0.1,
};

impl Default for PlayerConfig {
    fn default() -> Self {
        DEFAULT_PLAYER_CONFIG
    }
}

impl PlayerConfig {
    /// Reject out-of-range values before any controller is built
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("move_speed", self.move_speed),
            ("jump_power", self.jump_power),
            ("fall_multiplier", self.fall_multiplier),
            ("jump_cut_multiplier", self.jump_cut_multiplier),
            ("half_width", self.half_width),
            ("standing_half_height", self.standing_half_height),
            ("crouch_half_height", self.crouch_half_height),
            ("ground_check_distance", self.ground_check_distance),
            ("wall_check_distance", self.wall_check_distance),
        ] {
            ConfigError::ensure_positive(field, value)?;
        }

        for (field, value) in [
            ("air_acceleration", self.air_acceleration),
            ("coyote_time", self.coyote_time),
            ("jump_buffer_time", self.jump_buffer_time),
            ("dash_power", self.dash_power),
            ("dash_time", self.dash_time),
            ("dash_cooldown", self.dash_cooldown),
            ("wall_slide_speed", self.wall_slide_speed),
            ("wall_slide_threshold", self.wall_slide_threshold),
            ("wall_coyote_time", self.wall_coyote_time),
            ("wall_contact_grace", self.wall_contact_grace),
            ("wall_jump_force_x", self.wall_jump_force_x),
            ("wall_jump_force_y", self.wall_jump_force_y),
            ("wall_jump_control_time", self.wall_jump_control_time),
            ("slide_speed", self.slide_speed),
            ("slide_time", self.slide_time),
            ("slide_min_speed", self.slide_min_speed),
            ("slide_stop_speed", self.slide_stop_speed),
            ("slide_deceleration", self.slide_deceleration),
        ] {
            ConfigError::ensure_non_negative(field, value)?;
        }

        if !(self.gravity.is_finite() && self.gravity < 0.0) {
            return Err(ConfigError::GravityNotDownward {
                field: "gravity",
                value: self.gravity,
            });
        }

        // A crouch profile taller than standing would make the headroom probe meaningless
        if self.crouch_half_height > self.standing_half_height {
            return Err(ConfigError::NotPositive {
                field: "standing_half_height - crouch_half_height",
                value: self.standing_half_height - self.crouch_half_height,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(PlayerConfig::default().validate().is_ok());
    }

    #[test]
    fn test_default_matches_tuning() {
        let config = PlayerConfig::default();
        assert_eq!(config.move_speed, 8.0);
        assert_eq!(config.jump_power, 14.0);
        assert_eq!(config.dash_cooldown, 0.5);
    }

    #[test]
    fn test_negative_duration_rejected() {
        let config = PlayerConfig {
            dash_time: -0.2,
            ..PlayerConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::Negative {
                field: "dash_time",
                value: -0.2
            })
        );
    }

    #[test]
    fn test_upward_gravity_rejected() {
        let config = PlayerConfig {
            gravity: 9.8,
            ..PlayerConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::GravityNotDownward { .. })
        ));
    }

    #[test]
    fn test_crouch_taller_than_standing_rejected() {
        let config = PlayerConfig {
            crouch_half_height: 1.2,
            ..PlayerConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
