// Enemy behavior state

use crate::game::health::DamageOutcome;

/// Behavior state of a side-scrolling enemy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EnemyState {
    /// Walking back and forth, turning at walls and ledges
    #[default]
    Patrol,
    /// Moving toward a detected player
    Chase,
    /// Standing still, swinging when the cooldown allows
    Attack,
    /// Waiting out the cooldown after a swing finished
    AttackCooldown,
}

/// Something the presentation layer may want to react to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyEvent {
    StateChanged { from: EnemyState, to: EnemyState },
    /// Turned around at a wall or ledge
    Flipped,
    /// Start the attack animation
    AttackTriggered,
    AttackEnded,
}

/// Result of a `deal_damage` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwingResult {
    /// Cooldown still running; nothing was checked
    OnCooldown,
    /// Nothing targetable inside the hit circle
    Missed,
    Hit(DamageOutcome),
}
