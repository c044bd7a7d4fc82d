// Enemy AI controller
//
// Patrol -> Chase -> Attack -> AttackCooldown -> (Attack | Chase)
//
// The controller only decides. Damage lands through `deal_damage` and the
// swing finishes through `end_attack`; both are driven from outside, at the
// points of the attack animation where the hit connects and where it ends.

use glam::Vec2;
use log::debug;

use crate::core::math::sign;
use crate::core::ConfigError;
use crate::engine::physics::{CollisionLayer, CollisionProbe};
use crate::engine::timer::Timer;
use crate::game::animation::EnemyAnimation;
use crate::game::health::HealthModel;

use super::config::EnemyConfig;
use super::state::{EnemyEvent, EnemyState, SwingResult};

#[derive(Debug, Clone)]
pub struct EnemyAIController {
    config: EnemyConfig,
    state: EnemyState,
    /// Walking direction and facing, ±1
    direction: f32,
    velocity: Vec2,
    /// An attack animation is playing
    attacking: bool,
    can_move: bool,
    cooldown: Timer,
    /// Speed reported to the animator, frozen while attacking
    anim_speed: f32,
    events: Vec<EnemyEvent>,
}

impl EnemyAIController {
    pub fn new(config: EnemyConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            state: EnemyState::Patrol,
            direction: 1.0,
            velocity: Vec2::ZERO,
            attacking: false,
            can_move: true,
            cooldown: Timer::new(),
            anim_speed: 0.0,
            events: Vec::new(),
        })
    }

    /// Advance one tick and return the velocity the body should move with
    ///
    /// Vertical velocity is passed through untouched; gravity is the
    /// physics engine's business.
    pub fn tick<P: CollisionProbe + ?Sized>(
        &mut self,
        dt: f32,
        probe: &P,
        position: Vec2,
        velocity: Vec2,
        target: Vec2,
    ) -> Vec2 {
        self.velocity = velocity;
        self.cooldown.tick(dt);

        match self.state {
            EnemyState::Patrol => self.patrol(probe, position),
            EnemyState::Chase => self.chase(probe, position, target),
            EnemyState::Attack => self.attack(position, target),
            EnemyState::AttackCooldown => self.wait_for_cooldown(position, target),
        }

        if !self.can_move {
            self.velocity.x = 0.0;
        }
        if !self.attacking {
            self.anim_speed = self.velocity.x.abs();
        }

        self.velocity
    }

    fn patrol<P: CollisionProbe + ?Sized>(&mut self, probe: &P, position: Vec2) {
        if self.is_blocked_ahead(probe, position) {
            self.flip();
            self.velocity.x = self.config.patrol_speed * self.direction;
            return;
        }

        self.velocity.x = self.config.patrol_speed * self.direction;

        if self.sees_player(probe, position) {
            self.change_state(EnemyState::Chase);
        }
    }

    fn chase<P: CollisionProbe + ?Sized>(&mut self, probe: &P, position: Vec2, target: Vec2) {
        self.direction = sign(target.x - position.x);
        self.velocity.x = self.config.chase_speed * self.direction;

        if !self.sees_player(probe, position) {
            self.change_state(EnemyState::Patrol);
        } else if self.in_attack_range(position, target) {
            self.change_state(EnemyState::Attack);
        }
    }

    fn attack(&mut self, position: Vec2, target: Vec2) {
        self.velocity.x = 0.0;

        if !self.in_attack_range(position, target) {
            self.attacking = false;
            self.can_move = true;
            self.change_state(EnemyState::Chase);
            return;
        }

        if !self.attacking && !self.cooldown.is_active() {
            debug!("Enemy attack triggered");
            self.attacking = true;
            self.can_move = false;
            self.events.push(EnemyEvent::AttackTriggered);
        }
    }

    fn wait_for_cooldown(&mut self, position: Vec2, target: Vec2) {
        self.velocity.x = 0.0;

        if self.cooldown.is_active() {
            return;
        }
        if self.in_attack_range(position, target) {
            self.change_state(EnemyState::Attack);
        } else {
            self.change_state(EnemyState::Chase);
        }
    }

    /// Swing at whatever targetable collider is in front
    ///
    /// Gated by the attack cooldown; every swing that gets past the gate
    /// restarts it, hit or miss.
    pub fn deal_damage<P: CollisionProbe + ?Sized>(
        &mut self,
        probe: &P,
        position: Vec2,
        target: &mut HealthModel,
    ) -> SwingResult {
        if self.cooldown.is_active() {
            return SwingResult::OnCooldown;
        }

        let center = position + Vec2::new(self.direction * self.config.attack_offset, 0.0);
        let hit = probe.is_within_radius(center, self.config.attack_radius, CollisionLayer::Player);
        self.cooldown.start(self.config.attack_cooldown);

        if hit {
            let outcome = target.take_damage(self.config.attack_damage);
            debug!("Enemy hit player: {:?}", outcome);
            SwingResult::Hit(outcome)
        } else {
            SwingResult::Missed
        }
    }

    /// The attack animation finished; rest until the cooldown runs out
    pub fn end_attack(&mut self) {
        if self.state != EnemyState::Attack || !self.attacking {
            return;
        }
        self.attacking = false;
        self.can_move = true;
        self.events.push(EnemyEvent::AttackEnded);
        self.change_state(EnemyState::AttackCooldown);
    }

    fn change_state(&mut self, state: EnemyState) {
        if self.state == state {
            return;
        }
        debug!("Enemy state: {:?} -> {:?}", self.state, state);
        self.events.push(EnemyEvent::StateChanged {
            from: self.state,
            to: state,
        });
        self.state = state;
    }

    fn flip(&mut self) {
        self.direction = -self.direction;
        debug!("Enemy turned around, now facing {}", self.direction);
        self.events.push(EnemyEvent::Flipped);
    }

    fn is_blocked_ahead<P: CollisionProbe + ?Sized>(&self, probe: &P, position: Vec2) -> bool {
        let wall_origin = position + self.mirrored(self.config.wall_check_offset);
        let wall = probe.is_wall_in_direction(
            wall_origin,
            self.direction,
            self.config.wall_check_distance,
            CollisionLayer::Ground,
        );
        if wall.touching {
            return true;
        }

        let ledge_origin = position + self.mirrored(self.config.ground_check_offset);
        probe.is_cliff_ahead(
            ledge_origin,
            self.config.cliff_check_distance,
            CollisionLayer::Ground,
        )
    }

    fn sees_player<P: CollisionProbe + ?Sized>(&self, probe: &P, position: Vec2) -> bool {
        probe.detect_actor_in_cone(
            position,
            Vec2::new(self.direction, 0.0),
            self.config.detect_range,
            self.config.detect_half_angle,
            CollisionLayer::Player,
        )
    }

    /// Horizontal reach only; a player jumping overhead stays in range
    fn in_attack_range(&self, position: Vec2, target: Vec2) -> bool {
        (target.x - position.x).abs() < self.config.attack_range
    }

    fn mirrored(&self, offset: Vec2) -> Vec2 {
        Vec2::new(offset.x * self.direction, offset.y)
    }

    /// Take the events raised since the last call
    pub fn drain_events(&mut self) -> Vec<EnemyEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn animation(&self) -> EnemyAnimation {
        EnemyAnimation {
            speed: self.anim_speed,
            facing: self.direction,
            attacking: self.attacking,
        }
    }

    pub fn config(&self) -> &EnemyConfig {
        &self.config
    }

    pub fn state(&self) -> EnemyState {
        self.state
    }

    pub fn direction(&self) -> f32 {
        self.direction
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn is_attacking(&self) -> bool {
        self.attacking
    }

    pub fn can_move(&self) -> bool {
        self.can_move
    }

    pub fn cooldown_remaining(&self) -> f32 {
        self.cooldown.remaining()
    }
}
