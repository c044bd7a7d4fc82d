// Enemy behavior tunables

use crate::core::ConfigError;
use glam::Vec2;

/// Immutable enemy configuration, fixed at construction
#[derive(Debug, Clone, PartialEq)]
pub struct EnemyConfig {
    pub patrol_speed: f32,
    pub chase_speed: f32,

    // Detection
    /// How far ahead the player can be seen
    pub detect_range: f32,
    /// Half-angle of the vision cone (radians)
    pub detect_half_angle: f32,
    /// Distance to the player at which chasing turns into attacking
    pub attack_range: f32,

    // Terrain checks
    /// Wall probe origin relative to the body, x mirrored by direction
    pub wall_check_offset: Vec2,
    pub wall_check_distance: f32,
    /// Cliff probe origin relative to the body, x mirrored by direction
    pub ground_check_offset: Vec2,
    pub cliff_check_distance: f32,

    // Attack
    pub attack_damage: u32,
    pub attack_cooldown: f32,
    /// Radius of the hit overlap circle
    pub attack_radius: f32,
    /// Horizontal distance from the body to the hit circle, mirrored by direction
    pub attack_offset: f32,

    pub half_extents: Vec2,
}

/// Default enemy tuning
pub const DEFAULT_ENEMY_CONFIG: EnemyConfig = EnemyConfig {
    patrol_speed: 2.0,
    chase_speed: 3.0,

    detect_range: 5.0,
    detect_half_angle: 0.2,
    attack_range: 1.5,

    wall_check_offset: Vec2::new(0.4, 0.0),
    wall_check_distance: 0.5,
    ground_check_offset: Vec2::new(0.5, -0.4),
    cliff_check_distance: 1.0,

    attack_damage: 10,
    attack_cooldown: 1.0,
    attack_radius: 0.6,
    attack_offset: 0.7,

    half_extents: Vec2::new(0.4, 0.5),
};

impl Default for EnemyConfig {
    fn default() -> Self {
        DEFAULT_ENEMY_CONFIG
    }
}

impl EnemyConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("detect_range", self.detect_range),
            ("attack_range", self.attack_range),
            ("wall_check_distance", self.wall_check_distance),
            ("cliff_check_distance", self.cliff_check_distance),
            ("attack_radius", self.attack_radius),
            ("half_extents.x", self.half_extents.x),
            ("half_extents.y", self.half_extents.y),
        ] {
            ConfigError::ensure_positive(field, value)?;
        }

        for (field, value) in [
            ("patrol_speed", self.patrol_speed),
            ("chase_speed", self.chase_speed),
            ("detect_half_angle", self.detect_half_angle),
            ("attack_cooldown", self.attack_cooldown),
            ("attack_offset", self.attack_offset),
        ] {
            ConfigError::ensure_non_negative(field, value)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(EnemyConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_attack_range_rejected() {
        let config = EnemyConfig {
            attack_range: 0.0,
            ..EnemyConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::NotPositive {
                field: "attack_range",
                value: 0.0
            })
        );
    }

    #[test]
    fn test_nan_speed_rejected() {
        let config = EnemyConfig {
            chase_speed: f32::NAN,
            ..EnemyConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
