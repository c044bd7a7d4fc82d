// Configuration and scene assembly errors

use thiserror::Error;

/// A tunable value was out of range when a controller was configured
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("`{field}` must be a finite value >= 0, got {value}")]
    Negative { field: &'static str, value: f32 },

    #[error("`{field}` must be a finite value > 0, got {value}")]
    NotPositive { field: &'static str, value: f32 },

    #[error("`{field}` must point downward (< 0), got {value}")]
    GravityNotDownward { field: &'static str, value: f32 },

    #[error("max HP must be greater than zero")]
    ZeroMaxHp,
}

impl ConfigError {
    /// Reject negative or NaN values
    pub fn ensure_non_negative(field: &'static str, value: f32) -> Result<(), Self> {
        if value.is_finite() && value >= 0.0 {
            Ok(())
        } else {
            Err(Self::Negative { field, value })
        }
    }

    /// Reject zero, negative or NaN values
    pub fn ensure_positive(field: &'static str, value: f32) -> Result<(), Self> {
        if value.is_finite() && value > 0.0 {
            Ok(())
        } else {
            Err(Self::NotPositive { field, value })
        }
    }
}

/// Scene assembly failed; the affected actor is never created
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("no player spawn was registered; enemies have nothing to target")]
    MissingPlayer,

    #[error("invalid configuration for {actor}: {source}")]
    Config {
        actor: String,
        #[source]
        source: ConfigError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_negative_accepts_zero() {
        assert!(ConfigError::ensure_non_negative("dash_time", 0.0).is_ok());
    }

    #[test]
    fn test_non_negative_rejects_negative_and_nan() {
        assert_eq!(
            ConfigError::ensure_non_negative("dash_time", -0.1),
            Err(ConfigError::Negative {
                field: "dash_time",
                value: -0.1
            })
        );
        assert!(ConfigError::ensure_non_negative("dash_time", f32::NAN).is_err());
    }

    #[test]
    fn test_positive_rejects_zero() {
        assert!(ConfigError::ensure_positive("move_speed", 0.0).is_err());
        assert!(ConfigError::ensure_positive("move_speed", 8.0).is_ok());
    }

    #[test]
    fn test_error_message_names_field() {
        let err = ConfigError::ensure_non_negative("coyote_time", -1.0).unwrap_err();
        assert!(err.to_string().contains("coyote_time"));
    }

    #[test]
    fn test_scene_error_keeps_source() {
        use std::error::Error as _;

        let err = SceneError::Config {
            actor: "enemy 2".to_string(),
            source: ConfigError::ZeroMaxHp,
        };
        assert!(err.to_string().contains("enemy 2"));
        assert_eq!(err.source().map(|e| e.to_string()), Some(ConfigError::ZeroMaxHp.to_string()));
    }
}
