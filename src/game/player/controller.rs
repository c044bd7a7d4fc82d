// Player motion controller
//
// Every tick runs the abilities in a fixed priority order, each one free to
// overwrite what the lower-priority steps would do with the velocity:
//
// 1. dash trigger / dash in progress (pre-empts everything else)
// 2. ground detection and coyote time
// 3. wall detection and wall coyote time
// 4. wall slide clamp
// 5. jump resolution (buffered ground jump, then wall jump, then jump cut)
// 6. horizontal movement
// 7. gravity
// 8. slide start / slide in progress

use glam::Vec2;
use log::debug;

use crate::core::math::move_towards;
use crate::core::ConfigError;
use crate::engine::input::InputFrame;
use crate::engine::physics::{CollisionLayer, CollisionProbe, WallContact};
use crate::engine::timer::TimerBank;
use crate::game::animation::PlayerAnimation;

use super::config::PlayerConfig;
use super::state::{AbilityFlags, ColliderProfile, MotionState, PlayerTimer};

/// Turns input and probe results into the player's velocity, one tick at a time
#[derive(Debug, Clone)]
pub struct PlayerMotionController {
    config: PlayerConfig,
    timers: TimerBank<PlayerTimer>,
    state: MotionState,
    flags: AbilityFlags,
    velocity: Vec2,
    /// 1.0 = right, -1.0 = left
    facing: f32,
    grounded: bool,
    wall: WallContact,
    /// Side of the wall last gripped, used by wall-coyote jumps
    wall_side: f32,
    /// Touching a wall while airborne and falling, as of last tick
    gripping_wall: bool,
    wall_sliding: bool,
    /// Collider is in the crouch profile
    crouched: bool,
}

impl PlayerMotionController {
    pub fn new(config: PlayerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            timers: TimerBank::new(),
            state: MotionState::Normal,
            flags: AbilityFlags::default(),
            velocity: Vec2::ZERO,
            facing: 1.0,
            grounded: false,
            wall: WallContact::NONE,
            wall_side: 0.0,
            gripping_wall: false,
            wall_sliding: false,
            crouched: false,
        })
    }

    /// Advance one tick and return the velocity the body should move with
    ///
    /// `position` and `velocity` are the body's values after the last
    /// physics step, so collisions (landing, bonking a ceiling) show up here.
    pub fn tick<P: CollisionProbe + ?Sized>(
        &mut self,
        dt: f32,
        input: &InputFrame,
        probe: &P,
        position: Vec2,
        velocity: Vec2,
    ) -> Vec2 {
        self.velocity = velocity;
        let run_speed = velocity.x.abs();
        let horizontal = input.horizontal.clamp(-1.0, 1.0);
        self.timers.tick(dt);

        // 1. Dash
        if input.dash_pressed {
            self.try_start_dash();
        }
        if self.state == MotionState::Dashing {
            if self.timers.is_active(PlayerTimer::Dash) {
                self.velocity = Vec2::new(self.facing * self.config.dash_power, 0.0);
                return self.velocity;
            }
            self.finish_dash();
        }

        if self.state == MotionState::WallJumpLocked
            && !self.timers.is_active(PlayerTimer::WallJumpControl)
        {
            self.set_state(MotionState::Normal);
        }

        // 2. Ground
        self.grounded = probe.is_ground_below(
            self.feet(position),
            self.config.ground_check_distance,
            CollisionLayer::Ground,
        );
        if self.grounded {
            self.timers.start(PlayerTimer::Coyote, self.config.coyote_time);
            self.flags.has_air_dashed = false;
        }

        // 3. Wall
        self.detect_wall(probe, position);

        // 4. Wall slide
        self.wall_sliding = self.wall.touching
            && !self.grounded
            && self.velocity.y < -self.config.wall_slide_threshold;
        if self.wall_sliding {
            self.velocity.y = self.velocity.y.max(-self.config.wall_slide_speed);
        }

        // 5. Jump
        if input.jump_pressed {
            self.timers
                .start(PlayerTimer::JumpBuffer, self.config.jump_buffer_time);
        }
        if self.timers.is_active(PlayerTimer::JumpBuffer) {
            if self.timers.is_active(PlayerTimer::Coyote) {
                self.jump();
            } else if self.timers.is_active(PlayerTimer::WallCoyote)
                && !self.timers.is_active(PlayerTimer::WallJumpLock)
            {
                self.wall_jump();
            }
        }
        if input.jump_released && self.velocity.y > 0.0 {
            self.velocity.y *= self.config.jump_cut_multiplier;
        }

        // 6. Horizontal movement
        if self.state.accepts_input() {
            self.face_input(horizontal);
            if input.crouch_held && self.grounded {
                self.velocity.x = 0.0;
            } else {
                self.apply_run(horizontal, dt);
            }
        }

        // 7. Gravity
        let gravity = if self.velocity.y < 0.0 {
            self.config.gravity * self.config.fall_multiplier
        } else {
            self.config.gravity
        };
        self.velocity.y += gravity * dt;
        if self.wall_sliding {
            self.velocity.y = self.velocity.y.max(-self.config.wall_slide_speed);
        }

        // 8. Slide
        if self.state == MotionState::Sliding {
            self.update_slide(probe, position, dt);
        } else if input.crouch_pressed
            && self.grounded
            && self.state == MotionState::Normal
            && run_speed > self.config.slide_min_speed
        {
            self.start_slide();
        }

        self.velocity
    }

    fn set_state(&mut self, state: MotionState) {
        if self.state == state {
            return;
        }
        debug!("Player motion: {:?} -> {:?}", self.state, state);
        self.state = state;
        self.flags.can_move = !matches!(state, MotionState::WallJumpLocked | MotionState::Sliding);
    }

    fn try_start_dash(&mut self) {
        if self.state == MotionState::Dashing
            || self.timers.is_active(PlayerTimer::DashCooldown)
        {
            return;
        }
        if !self.grounded {
            if self.flags.has_air_dashed {
                return;
            }
            self.flags.has_air_dashed = true;
        }

        self.timers.start(PlayerTimer::Dash, self.config.dash_time);
        self.timers
            .start(PlayerTimer::DashCooldown, self.config.dash_cooldown);
        self.set_state(MotionState::Dashing);
    }

    fn finish_dash(&mut self) {
        // The cooldown runs from the end of the dash
        self.timers
            .start(PlayerTimer::DashCooldown, self.config.dash_cooldown);
        // A dash out of a slide keeps the crouch profile until there is headroom
        self.set_state(if self.crouched {
            MotionState::Sliding
        } else {
            MotionState::Normal
        });
    }

    fn detect_wall<P: CollisionProbe + ?Sized>(&mut self, probe: &P, position: Vec2) {
        let distance = self.config.wall_check_distance;
        let mut contact =
            probe.is_wall_in_direction(position, self.facing, distance, CollisionLayer::Ground);
        if !contact.touching {
            contact = probe.is_wall_in_direction(
                position,
                -self.facing,
                distance,
                CollisionLayer::Ground,
            );
        }
        self.wall = contact;

        let gripping = contact.touching && !self.grounded && self.velocity.y < 0.0;
        if gripping {
            if !self.gripping_wall {
                debug!("Player grabbed wall on side {}", contact.side);
                self.timers
                    .start(PlayerTimer::WallJumpLock, self.config.wall_contact_grace);
            }
            self.timers
                .start(PlayerTimer::WallCoyote, self.config.wall_coyote_time);
            self.wall_side = contact.side;
        }
        self.gripping_wall = gripping;
    }

    fn jump(&mut self) {
        self.velocity.y = self.config.jump_power;
        self.timers.clear(PlayerTimer::JumpBuffer);
        self.timers.clear(PlayerTimer::Coyote);
    }

    fn wall_jump(&mut self) {
        let away = -self.wall_side;
        self.velocity = Vec2::new(
            away * self.config.wall_jump_force_x,
            self.config.wall_jump_force_y,
        );
        self.facing = away;
        self.timers.clear(PlayerTimer::JumpBuffer);
        self.timers.clear(PlayerTimer::WallCoyote);
        self.timers.start(
            PlayerTimer::WallJumpControl,
            self.config.wall_jump_control_time,
        );
        self.set_state(MotionState::WallJumpLocked);
    }

    fn apply_run(&mut self, horizontal: f32, dt: f32) {
        let target = horizontal * self.config.move_speed;
        self.velocity.x = if self.grounded {
            target
        } else {
            move_towards(
                self.velocity.x,
                target,
                self.config.air_acceleration * dt,
            )
        };
    }

    /// Turn toward nonzero input, crouched or not
    fn face_input(&mut self, horizontal: f32) {
        if horizontal > 0.0 {
            self.facing = 1.0;
        } else if horizontal < 0.0 {
            self.facing = -1.0;
        }
    }

    fn start_slide(&mut self) {
        self.velocity.x = self.facing * self.config.slide_speed;
        self.crouched = true;
        self.timers.start(PlayerTimer::Slide, self.config.slide_time);
        self.set_state(MotionState::Sliding);
    }

    fn update_slide<P: CollisionProbe + ?Sized>(&mut self, probe: &P, position: Vec2, dt: f32) {
        self.velocity.x = move_towards(
            self.velocity.x,
            0.0,
            self.config.slide_deceleration * dt,
        );

        let finished = !self.timers.is_active(PlayerTimer::Slide)
            || self.velocity.x.abs() < self.config.slide_stop_speed
            || !self.grounded;

        // Never stand up into a ceiling; hold the slide until there is room
        if finished && self.can_stand_up(probe, position) {
            self.crouched = false;
            self.set_state(MotionState::Normal);
        }
    }

    /// Whether the standing collider would fit at `position`
    pub fn can_stand_up<P: CollisionProbe + ?Sized>(&self, probe: &P, position: Vec2) -> bool {
        let crouch_top = self.feet(position) + Vec2::new(0.0, 2.0 * self.config.crouch_half_height);
        let extra = 2.0 * (self.config.standing_half_height - self.config.crouch_half_height);
        !probe.is_ceiling_above(crouch_top, extra, CollisionLayer::Ground)
    }

    fn feet(&self, position: Vec2) -> Vec2 {
        position - Vec2::new(0.0, self.config.standing_half_height)
    }

    /// Collider the body should use this tick
    pub fn collider_profile(&self) -> ColliderProfile {
        let half_width = self.config.half_width;
        if self.crouched {
            ColliderProfile {
                half_extents: Vec2::new(half_width, self.config.crouch_half_height),
                offset_y: self.config.crouch_half_height - self.config.standing_half_height,
            }
        } else {
            ColliderProfile {
                half_extents: Vec2::new(half_width, self.config.standing_half_height),
                offset_y: 0.0,
            }
        }
    }

    /// Animator parameters for the presentation layer
    pub fn animation(&self) -> PlayerAnimation {
        PlayerAnimation {
            clip: self.state.animation_name(),
            grounded: self.grounded,
            y_velocity: self.velocity.y,
            speed: self.velocity.x.abs(),
            dashing: self.state == MotionState::Dashing,
            wall_sliding: self.wall_sliding,
            sliding: self.state == MotionState::Sliding,
            facing: self.facing,
        }
    }

    pub fn config(&self) -> &PlayerConfig {
        &self.config
    }

    pub fn state(&self) -> MotionState {
        self.state
    }

    pub fn flags(&self) -> AbilityFlags {
        self.flags
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn facing(&self) -> f32 {
        self.facing
    }

    pub fn is_grounded(&self) -> bool {
        self.grounded
    }

    pub fn is_touching_wall(&self) -> bool {
        self.wall.touching
    }

    pub fn is_wall_sliding(&self) -> bool {
        self.wall_sliding
    }

    pub fn is_crouched(&self) -> bool {
        self.crouched
    }

    /// Remaining time on one of the controller's timers
    pub fn timer_remaining(&self, timer: PlayerTimer) -> f32 {
        self.timers.remaining(timer)
    }
}
