// Hit points, invincibility window and death

use crate::core::ConfigError;
use crate::engine::timer::Timer;
use log::{debug, info};

/// Health tunables
#[derive(Debug, Clone, PartialEq)]
pub struct HealthConfig {
    pub max_hp: u32,
    /// Seconds of damage immunity after a hit (0 disables)
    pub invincibility_time: f32,
}

/// Player health: 100 HP with a short immunity window after each hit
pub const PLAYER_HEALTH: HealthConfig = HealthConfig {
    max_hp: 100,
    invincibility_time: 0.8,
};

/// Enemy health: dies in three hits, no immunity
pub const ENEMY_HEALTH: HealthConfig = HealthConfig {
    max_hp: 3,
    invincibility_time: 0.0,
};

impl HealthConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_hp == 0 {
            return Err(ConfigError::ZeroMaxHp);
        }
        ConfigError::ensure_non_negative("invincibility_time", self.invincibility_time)
    }
}

/// What a call to `take_damage` did, for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageOutcome {
    /// Dead or invincible; nothing changed
    Ignored,
    /// HP went down but the owner survives
    Damaged { remaining: u32 },
    /// This hit brought HP to zero
    Killed,
}

/// Mutable HP counter shared by the player and enemies
///
/// HP stays within `0..=max_hp`. Death is sticky: once dead, no further
/// damage applies. The model never destroys its owner; whoever owns the
/// actor reacts to `is_dead`.
#[derive(Debug, Clone)]
pub struct HealthModel {
    config: HealthConfig,
    current_hp: u32,
    dead: bool,
    invincibility: Timer,
}

impl HealthModel {
    pub fn new(config: HealthConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            current_hp: config.max_hp,
            config,
            dead: false,
            invincibility: Timer::new(),
        })
    }

    /// Apply damage unless dead or invincible
    pub fn take_damage(&mut self, amount: u32) -> DamageOutcome {
        if self.dead || self.invincibility.is_active() {
            return DamageOutcome::Ignored;
        }

        self.current_hp = self.current_hp.saturating_sub(amount);
        debug!("Took {} damage, HP {}/{}", amount, self.current_hp, self.config.max_hp);

        if self.config.invincibility_time > 0.0 {
            self.invincibility.start(self.config.invincibility_time);
        }

        if self.current_hp == 0 {
            self.dead = true;
            info!("Died");
            DamageOutcome::Killed
        } else {
            DamageOutcome::Damaged {
                remaining: self.current_hp,
            }
        }
    }

    /// Advance the invincibility window
    pub fn tick(&mut self, dt: f32) {
        self.invincibility.tick(dt);
    }

    pub fn current_hp(&self) -> u32 {
        self.current_hp
    }

    pub fn max_hp(&self) -> u32 {
        self.config.max_hp
    }

    /// Fill ratio for a health bar, 0.0..=1.0
    pub fn fraction(&self) -> f32 {
        self.current_hp as f32 / self.config.max_hp as f32
    }

    pub fn is_dead(&self) -> bool {
        self.dead
    }

    pub fn is_invincible(&self) -> bool {
        self.invincibility.is_active()
    }
}
