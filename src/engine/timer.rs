// Countdown timers for gameplay windows (coyote time, buffers, cooldowns)

use std::collections::HashMap;
use std::hash::Hash;

/// Remaining time below this counts as expired, so float drift over many
/// ticks never keeps a window open for an extra frame
const EXPIRY_EPSILON: f32 = 1e-5;

/// A single countdown timer
///
/// Active while remaining time is above zero. Restarting an active timer
/// resets it to the new duration; durations never stack.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Timer {
    remaining: f32,
}

impl Timer {
    /// Create an expired timer
    pub fn new() -> Self {
        Self { remaining: 0.0 }
    }

    /// (Re)start the timer with the given duration
    pub fn start(&mut self, duration: f32) {
        debug_assert!(duration >= 0.0, "timer duration must be validated upstream");
        self.remaining = duration.max(0.0);
    }

    /// Advance by `dt` seconds, clamping at zero
    pub fn tick(&mut self, dt: f32) {
        if self.remaining > 0.0 {
            self.remaining -= dt;
            if self.remaining <= EXPIRY_EPSILON {
                self.remaining = 0.0;
            }
        }
    }

    /// Expire the timer immediately
    pub fn clear(&mut self) {
        self.remaining = 0.0;
    }

    pub fn is_active(&self) -> bool {
        self.remaining > 0.0
    }

    pub fn remaining(&self) -> f32 {
        self.remaining
    }
}

/// A set of named timers owned by one controller
///
/// Keys are usually a small `Copy` enum declared next to the controller.
/// Unknown keys read as inactive with zero remaining time.
#[derive(Debug, Clone)]
pub struct TimerBank<K> {
    timers: HashMap<K, Timer>,
}

impl<K: Copy + Eq + Hash> TimerBank<K> {
    pub fn new() -> Self {
        Self {
            timers: HashMap::new(),
        }
    }

    /// Start (or restart) the named timer
    pub fn start(&mut self, key: K, duration: f32) {
        self.timers.entry(key).or_default().start(duration);
    }

    /// Advance every timer by `dt` seconds
    pub fn tick(&mut self, dt: f32) {
        for timer in self.timers.values_mut() {
            timer.tick(dt);
        }
    }

    /// Expire the named timer
    pub fn clear(&mut self, key: K) {
        if let Some(timer) = self.timers.get_mut(&key) {
            timer.clear();
        }
    }

    pub fn is_active(&self, key: K) -> bool {
        self.timers.get(&key).is_some_and(Timer::is_active)
    }

    pub fn remaining(&self, key: K) -> f32 {
        self.timers.get(&key).map_or(0.0, Timer::remaining)
    }
}

impl<K: Copy + Eq + Hash> Default for TimerBank<K> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum Key {
        Coyote,
        Dash,
    }

    #[test]
    fn test_timer_starts_expired() {
        let timer = Timer::new();
        assert!(!timer.is_active());
        assert_eq!(timer.remaining(), 0.0);
    }

    #[test]
    fn test_timer_counts_down_and_clamps() {
        let mut timer = Timer::new();
        timer.start(0.25);
        timer.tick(0.125);
        assert!(timer.is_active());
        assert_relative_eq!(timer.remaining(), 0.125);

        timer.tick(1.0);
        assert!(!timer.is_active());
        assert_eq!(timer.remaining(), 0.0, "Timer must never go negative");
    }

    #[test]
    fn test_timer_restart_does_not_stack() {
        let mut timer = Timer::new();
        timer.start(0.5);
        timer.start(0.5);
        assert_relative_eq!(timer.remaining(), 0.5);
    }

    #[test]
    fn test_timer_float_drift_expires_on_time() {
        let mut timer = Timer::new();
        timer.start(0.2);
        for _ in 0..10 {
            timer.tick(0.02);
        }
        assert!(!timer.is_active());
    }

    #[test]
    fn test_bank_unknown_key_is_inactive() {
        let bank: TimerBank<Key> = TimerBank::new();
        assert!(!bank.is_active(Key::Coyote));
        assert_eq!(bank.remaining(Key::Coyote), 0.0);
    }

    #[test]
    fn test_bank_ticks_all_timers() {
        let mut bank = TimerBank::new();
        bank.start(Key::Coyote, 0.125);
        bank.start(Key::Dash, 0.5);
        bank.tick(0.25);

        assert!(!bank.is_active(Key::Coyote));
        assert!(bank.is_active(Key::Dash));
        assert_relative_eq!(bank.remaining(Key::Dash), 0.25);
    }

    #[test]
    fn test_bank_clear() {
        let mut bank = TimerBank::new();
        bank.start(Key::Dash, 0.5);
        bank.clear(Key::Dash);
        assert!(!bank.is_active(Key::Dash));
    }
}
