// Scene assembly and the per-tick simulation loop
//
// One tick, in order:
// 1. player controller reads its body and the probe, writes a velocity
// 2. each enemy controller does the same, targeting the player's position
// 3. attack clips advance and fire `deal_damage` / `end_attack`
// 4. health timers advance
// 5. physics integrates every body once

use glam::Vec2;
use log::{info, warn};

use crate::core::SceneError;
use crate::engine::input::InputFrame;
use crate::engine::physics::{
    presets, CollisionLayer, ColliderHandle, PhysicsWorld, RapierProbe, RigidBodyHandle,
};
use crate::game::animation::{AttackClip, ClipCue, EnemyAnimation, PlayerAnimation};
use crate::game::enemy::{EnemyAIController, EnemyConfig, EnemyEvent, SwingResult};
use crate::game::health::{DamageOutcome, HealthConfig, HealthModel, ENEMY_HEALTH, PLAYER_HEALTH};
use crate::game::player::{ColliderProfile, MotionState, PlayerConfig, PlayerMotionController};

/// Stable identifier of a spawned enemy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EnemyId(pub usize);

/// What happened during one `Scene::tick`
#[derive(Debug, Clone, Default)]
pub struct TickReport {
    /// Set when the player's motion state changed this tick
    pub player_state_change: Option<(MotionState, MotionState)>,
    pub enemy_events: Vec<(EnemyId, EnemyEvent)>,
    pub swings: Vec<(EnemyId, SwingResult)>,
}

struct Platform {
    center: Vec2,
    size: Vec2,
}

/// Collects level geometry and spawns, then builds a `Scene`
pub struct SceneBuilder {
    gravity: f32,
    platforms: Vec<Platform>,
    player: Option<(Vec2, PlayerConfig)>,
    enemies: Vec<(Vec2, EnemyConfig)>,
    player_health: HealthConfig,
    enemy_health: HealthConfig,
    attack_clip: AttackClip,
}

impl SceneBuilder {
    pub fn new() -> Self {
        Self {
            gravity: PlayerConfig::default().gravity,
            platforms: Vec::new(),
            player: None,
            enemies: Vec::new(),
            player_health: PLAYER_HEALTH,
            enemy_health: ENEMY_HEALTH,
            attack_clip: AttackClip::default(),
        }
    }

    /// World gravity for bodies that do not integrate their own
    pub fn gravity(mut self, gravity: f32) -> Self {
        self.gravity = gravity;
        self
    }

    /// Solid box with its center at `center`
    pub fn platform(mut self, center: Vec2, size: Vec2) -> Self {
        self.platforms.push(Platform { center, size });
        self
    }

    pub fn player(mut self, spawn: Vec2, config: PlayerConfig) -> Self {
        self.player = Some((spawn, config));
        self
    }

    pub fn enemy(mut self, spawn: Vec2, config: EnemyConfig) -> Self {
        self.enemies.push((spawn, config));
        self
    }

    pub fn player_health(mut self, config: HealthConfig) -> Self {
        self.player_health = config;
        self
    }

    pub fn enemy_health(mut self, config: HealthConfig) -> Self {
        self.enemy_health = config;
        self
    }

    /// Attack animation timing shared by every enemy
    pub fn attack_clip(mut self, clip: AttackClip) -> Self {
        self.attack_clip = clip;
        self
    }

    pub fn build(self) -> Result<Scene, SceneError> {
        let (spawn, player_config) = self.player.ok_or(SceneError::MissingPlayer)?;

        let mut physics = PhysicsWorld::with_gravity(self.gravity);

        for platform in &self.platforms {
            let body = physics.add_rigid_body(presets::platform_body(
                platform.center.x,
                platform.center.y,
            ));
            physics.add_collider(
                presets::platform_collider(platform.size.x, platform.size.y),
                body,
            );
        }

        let controller = PlayerMotionController::new(player_config)
            .map_err(|source| config_error("player", source))?;
        let health = HealthModel::new(self.player_health.clone())
            .map_err(|source| config_error("player", source))?;
        let profile = controller.collider_profile();
        // The player's controller integrates gravity itself
        let body = physics.add_rigid_body(presets::actor_body(spawn.x, spawn.y, 0.0));
        let collider = physics.add_collider(
            presets::actor_collider(
                profile.half_extents.x,
                profile.half_extents.y,
                CollisionLayer::Player,
            ),
            body,
        );
        let player = PlayerActor {
            body,
            collider,
            profile,
            controller,
            health,
        };

        let mut enemies = Vec::with_capacity(self.enemies.len());
        for (index, (spawn, config)) in self.enemies.into_iter().enumerate() {
            let actor = format!("enemy {}", index);
            let half_extents = config.half_extents;
            let controller = EnemyAIController::new(config)
                .map_err(|source| config_error(&actor, source))?;
            let health = HealthModel::new(self.enemy_health.clone())
                .map_err(|source| config_error(&actor, source))?;

            let body = physics.add_rigid_body(presets::actor_body(spawn.x, spawn.y, 1.0));
            physics.add_collider(
                presets::actor_collider(half_extents.x, half_extents.y, CollisionLayer::Enemy),
                body,
            );

            enemies.push(EnemyActor {
                id: EnemyId(index),
                body,
                controller,
                health,
                clip: self.attack_clip.clone(),
            });
        }

        physics.refresh_queries();
        info!(
            "Scene built: {} platforms, {} enemies",
            self.platforms.len(),
            enemies.len()
        );

        Ok(Scene {
            physics,
            player,
            enemies,
        })
    }
}

impl Default for SceneBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn config_error(actor: &str, source: crate::core::ConfigError) -> SceneError {
    SceneError::Config {
        actor: actor.to_string(),
        source,
    }
}

struct PlayerActor {
    body: RigidBodyHandle,
    collider: ColliderHandle,
    /// Collider currently installed in the physics world
    profile: ColliderProfile,
    controller: PlayerMotionController,
    health: HealthModel,
}

struct EnemyActor {
    id: EnemyId,
    body: RigidBodyHandle,
    controller: EnemyAIController,
    health: HealthModel,
    clip: AttackClip,
}

/// A running level: physics world, player and enemies
///
/// The caller owns the loop and calls `tick` at a fixed rate.
pub struct Scene {
    physics: PhysicsWorld,
    player: PlayerActor,
    enemies: Vec<EnemyActor>,
}

impl Scene {
    /// Advance the whole scene by `dt` seconds
    pub fn tick(&mut self, dt: f32, input: &InputFrame) -> TickReport {
        let Scene {
            physics,
            player,
            enemies,
        } = self;
        let mut report = TickReport::default();

        let Some((player_position, player_velocity)) = physics.body_state(player.body) else {
            warn!("Player body missing from physics world");
            return report;
        };

        // A dead player stops responding to input
        let input = if player.health.is_dead() {
            InputFrame::default()
        } else {
            *input
        };

        let previous_state = player.controller.state();
        let velocity = {
            let probe = RapierProbe::for_body(physics, player.body);
            player
                .controller
                .tick(dt, &input, &probe, player_position, player_velocity)
        };
        if player.controller.state() != previous_state {
            report.player_state_change = Some((previous_state, player.controller.state()));
        }

        let profile = player.controller.collider_profile();
        if profile != player.profile {
            physics.reshape_box(player.collider, profile.half_extents, profile.offset_y);
            player.profile = profile;
        }
        physics.set_linvel(player.body, velocity);
        player.health.tick(dt);

        for enemy in enemies.iter_mut() {
            let Some((position, velocity)) = physics.body_state(enemy.body) else {
                warn!("Body of {:?} missing from physics world", enemy.id);
                continue;
            };

            let probe = RapierProbe::for_body(physics, enemy.body);
            let velocity = enemy
                .controller
                .tick(dt, &probe, position, velocity, player_position);

            for event in enemy.controller.drain_events() {
                if event == EnemyEvent::AttackTriggered {
                    enemy.clip.play();
                }
                report.enemy_events.push((enemy.id, event));
            }
            // Attack was abandoned (player left range)
            if !enemy.controller.is_attacking() && enemy.clip.is_playing() {
                enemy.clip.stop();
            }

            for cue in enemy.clip.update(dt) {
                match cue {
                    ClipCue::Hit => {
                        let swing =
                            enemy
                                .controller
                                .deal_damage(&probe, position, &mut player.health);
                        report.swings.push((enemy.id, swing));
                    }
                    ClipCue::End => enemy.controller.end_attack(),
                }
            }
            report.enemy_events.extend(
                enemy
                    .controller
                    .drain_events()
                    .into_iter()
                    .map(|event| (enemy.id, event)),
            );

            physics.set_linvel(enemy.body, velocity);
            enemy.health.tick(dt);
        }

        physics.set_timestep(dt);
        physics.step();

        report
    }

    /// Damage an enemy, despawning it when it dies
    ///
    /// Returns `None` for an unknown or already removed enemy.
    pub fn damage_enemy(&mut self, id: EnemyId, amount: u32) -> Option<DamageOutcome> {
        let index = self.enemies.iter().position(|enemy| enemy.id == id)?;
        let outcome = self.enemies[index].health.take_damage(amount);

        if outcome == DamageOutcome::Killed {
            let enemy = self.enemies.remove(index);
            self.physics.remove_rigid_body(enemy.body);
            info!("{:?} destroyed", id);
        }

        Some(outcome)
    }

    pub fn player_position(&self) -> Option<Vec2> {
        self.physics
            .body_state(self.player.body)
            .map(|(position, _)| position)
    }

    pub fn player_controller(&self) -> &PlayerMotionController {
        &self.player.controller
    }

    pub fn player_health(&self) -> &HealthModel {
        &self.player.health
    }

    pub fn player_animation(&self) -> PlayerAnimation {
        self.player.controller.animation()
    }

    pub fn enemy_ids(&self) -> Vec<EnemyId> {
        self.enemies.iter().map(|enemy| enemy.id).collect()
    }

    pub fn enemy_count(&self) -> usize {
        self.enemies.len()
    }

    pub fn enemy_controller(&self, id: EnemyId) -> Option<&EnemyAIController> {
        self.enemy(id).map(|enemy| &enemy.controller)
    }

    pub fn enemy_health(&self, id: EnemyId) -> Option<&HealthModel> {
        self.enemy(id).map(|enemy| &enemy.health)
    }

    pub fn enemy_animation(&self, id: EnemyId) -> Option<EnemyAnimation> {
        self.enemy(id).map(|enemy| enemy.controller.animation())
    }

    pub fn enemy_position(&self, id: EnemyId) -> Option<Vec2> {
        let enemy = self.enemy(id)?;
        self.physics
            .body_state(enemy.body)
            .map(|(position, _)| position)
    }

    fn enemy(&self, id: EnemyId) -> Option<&EnemyActor> {
        self.enemies.iter().find(|enemy| enemy.id == id)
    }

    pub fn physics(&self) -> &PhysicsWorld {
        &self.physics
    }
}
