// Geometry queries the controllers make against the physics world

use super::collision::CollisionLayer;
use super::world::{PhysicsWorld, RigidBodyHandle};
use glam::Vec2;

/// Number of rays fanned across a detection cone
const CONE_RAYS: usize = 5;

/// Result of a wall check
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallContact {
    pub touching: bool,
    /// Side the wall is on: 1.0 = right, -1.0 = left (meaningless if not touching)
    pub side: f32,
}

impl WallContact {
    pub const NONE: Self = Self {
        touching: false,
        side: 0.0,
    };

    pub fn on_side(side: f32) -> Self {
        Self {
            touching: true,
            side,
        }
    }
}

/// Read-only questions about the world around an actor
///
/// Every query is stateless; controllers decide what the answer means.
pub trait CollisionProbe {
    /// Is there ground on `filter` within `distance` straight below `origin`
    fn is_ground_below(&self, origin: Vec2, distance: f32, filter: CollisionLayer) -> bool;

    /// Is there anything on `filter` within `distance` straight above `origin`
    fn is_ceiling_above(&self, origin: Vec2, distance: f32, filter: CollisionLayer) -> bool;

    /// Wall within `distance` of `origin` in horizontal `direction` (±1)
    fn is_wall_in_direction(
        &self,
        origin: Vec2,
        direction: f32,
        distance: f32,
        filter: CollisionLayer,
    ) -> WallContact;

    /// Any collider on `filter` inside a cone of `half_angle` radians around `direction`
    fn detect_actor_in_cone(
        &self,
        origin: Vec2,
        direction: Vec2,
        distance: f32,
        half_angle: f32,
        filter: CollisionLayer,
    ) -> bool;

    /// Any collider on `filter` overlapping a circle
    fn is_within_radius(&self, origin: Vec2, radius: f32, filter: CollisionLayer) -> bool;

    /// No ground below a look-ahead point means a drop ahead
    fn is_cliff_ahead(&self, origin: Vec2, distance: f32, filter: CollisionLayer) -> bool {
        !self.is_ground_below(origin, distance, filter)
    }
}

/// Probe backed by the rapier query pipeline
///
/// The probing actor's own body is excluded from every query.
pub struct RapierProbe<'a> {
    world: &'a PhysicsWorld,
    exclude: Option<RigidBodyHandle>,
}

impl<'a> RapierProbe<'a> {
    pub fn new(world: &'a PhysicsWorld) -> Self {
        Self {
            world,
            exclude: None,
        }
    }

    /// Probe on behalf of `body`, ignoring its own colliders
    pub fn for_body(world: &'a PhysicsWorld, body: RigidBodyHandle) -> Self {
        Self {
            world,
            exclude: Some(body),
        }
    }

    fn cast(&self, origin: Vec2, direction: Vec2, distance: f32, filter: CollisionLayer) -> bool {
        let mut query = filter.query_filter();
        if let Some(body) = self.exclude {
            query = query.exclude_rigid_body(body);
        }
        self.world
            .raycast(origin, direction, distance, query)
            .is_some()
    }
}

impl CollisionProbe for RapierProbe<'_> {
    fn is_ground_below(&self, origin: Vec2, distance: f32, filter: CollisionLayer) -> bool {
        self.cast(origin, Vec2::NEG_Y, distance, filter)
    }

    fn is_ceiling_above(&self, origin: Vec2, distance: f32, filter: CollisionLayer) -> bool {
        self.cast(origin, Vec2::Y, distance, filter)
    }

    fn is_wall_in_direction(
        &self,
        origin: Vec2,
        direction: f32,
        distance: f32,
        filter: CollisionLayer,
    ) -> WallContact {
        let side = if direction < 0.0 { -1.0 } else { 1.0 };
        if self.cast(origin, Vec2::new(side, 0.0), distance, filter) {
            WallContact::on_side(side)
        } else {
            WallContact::NONE
        }
    }

    fn detect_actor_in_cone(
        &self,
        origin: Vec2,
        direction: Vec2,
        distance: f32,
        half_angle: f32,
        filter: CollisionLayer,
    ) -> bool {
        let forward = direction.normalize_or_zero();
        if forward == Vec2::ZERO {
            return false;
        }

        (0..CONE_RAYS).any(|i| {
            // Spread evenly from -half_angle to +half_angle
            let t = i as f32 / (CONE_RAYS - 1) as f32;
            let angle = -half_angle + 2.0 * half_angle * t;
            let ray = Vec2::from_angle(angle).rotate(forward);
            self.cast(origin, ray, distance, filter)
        })
    }

    fn is_within_radius(&self, origin: Vec2, radius: f32, filter: CollisionLayer) -> bool {
        let mut query = filter.query_filter();
        if let Some(body) = self.exclude {
            query = query.exclude_rigid_body(body);
        }
        self.world.overlap_circle(origin, radius, query).is_some()
    }
}

/// Scripted probe for controller tests: every answer is a plain field
#[cfg(test)]
#[derive(Debug, Clone)]
pub(crate) struct ScriptedProbe {
    pub ground: bool,
    pub ceiling: bool,
    pub wall: WallContact,
    /// Overrides `is_cliff_ahead` independently of `ground`
    pub cliff: Option<bool>,
    pub actor_in_cone: bool,
    pub actor_in_radius: bool,
}

#[cfg(test)]
impl Default for ScriptedProbe {
    fn default() -> Self {
        Self {
            ground: true,
            ceiling: false,
            wall: WallContact::NONE,
            cliff: None,
            actor_in_cone: false,
            actor_in_radius: false,
        }
    }
}

#[cfg(test)]
impl CollisionProbe for ScriptedProbe {
    fn is_ground_below(&self, _origin: Vec2, _distance: f32, _filter: CollisionLayer) -> bool {
        self.ground
    }

    fn is_ceiling_above(&self, _origin: Vec2, _distance: f32, _filter: CollisionLayer) -> bool {
        self.ceiling
    }

    fn is_wall_in_direction(
        &self,
        _origin: Vec2,
        direction: f32,
        _distance: f32,
        _filter: CollisionLayer,
    ) -> WallContact {
        if self.wall.touching && self.wall.side == direction {
            self.wall
        } else {
            WallContact::NONE
        }
    }

    fn detect_actor_in_cone(
        &self,
        _origin: Vec2,
        _direction: Vec2,
        _distance: f32,
        _half_angle: f32,
        _filter: CollisionLayer,
    ) -> bool {
        self.actor_in_cone
    }

    fn is_within_radius(&self, _origin: Vec2, _radius: f32, _filter: CollisionLayer) -> bool {
        self.actor_in_radius
    }

    fn is_cliff_ahead(&self, origin: Vec2, distance: f32, filter: CollisionLayer) -> bool {
        self.cliff
            .unwrap_or_else(|| !self.is_ground_below(origin, distance, filter))
    }
}

#[cfg(test)]
mod tests {
    use super::super::body::presets;
    use super::*;

    /// Floor from x=-5..5 with its top at y=0, a wall at x=3..4 rising to y=4,
    /// and a ceiling slab at y=2..2.5 over x=-5..-3
    fn test_world() -> PhysicsWorld {
        let mut world = PhysicsWorld::with_gravity(-35.0);

        let floor = world.add_rigid_body(presets::platform_body(0.0, -0.5));
        world.add_collider(presets::platform_collider(10.0, 1.0), floor);

        let wall = world.add_rigid_body(presets::platform_body(3.5, 2.0));
        world.add_collider(presets::platform_collider(1.0, 4.0), wall);

        let ceiling = world.add_rigid_body(presets::platform_body(-4.0, 2.25));
        world.add_collider(presets::platform_collider(2.0, 0.5), ceiling);

        world.refresh_queries();
        world
    }

    #[test]
    fn test_ground_below() {
        let world = test_world();
        let probe = RapierProbe::new(&world);
        assert!(probe.is_ground_below(Vec2::new(0.0, 0.05), 0.1, CollisionLayer::Ground));
        assert!(!probe.is_ground_below(Vec2::new(0.0, 1.0), 0.1, CollisionLayer::Ground));
    }

    #[test]
    fn test_cliff_ahead_past_floor_edge() {
        let world = test_world();
        let probe = RapierProbe::new(&world);
        assert!(!probe.is_cliff_ahead(Vec2::new(4.5, 0.5), 1.0, CollisionLayer::Ground));
        assert!(probe.is_cliff_ahead(Vec2::new(6.0, 0.5), 1.0, CollisionLayer::Ground));
    }

    #[test]
    fn test_wall_in_direction() {
        let world = test_world();
        let probe = RapierProbe::new(&world);
        let origin = Vec2::new(2.6, 1.0);

        let right = probe.is_wall_in_direction(origin, 1.0, 0.5, CollisionLayer::Ground);
        assert_eq!(right, WallContact::on_side(1.0));

        let left = probe.is_wall_in_direction(origin, -1.0, 0.5, CollisionLayer::Ground);
        assert!(!left.touching);
    }

    #[test]
    fn test_ceiling_above() {
        let world = test_world();
        let probe = RapierProbe::new(&world);
        assert!(probe.is_ceiling_above(Vec2::new(-4.0, 1.0), 1.5, CollisionLayer::Ground));
        assert!(!probe.is_ceiling_above(Vec2::new(0.0, 1.0), 1.5, CollisionLayer::Ground));
    }

    #[test]
    fn test_cone_and_radius_see_only_target_layer() {
        let mut world = test_world();
        let player = world.add_rigid_body(presets::actor_body(1.0, 0.9, 0.0));
        world.add_collider(
            presets::actor_collider(0.4, 0.9, CollisionLayer::Player),
            player,
        );
        world.refresh_queries();

        let probe = RapierProbe::new(&world);
        let eye = Vec2::new(-2.0, 0.9);
        assert!(probe.detect_actor_in_cone(eye, Vec2::X, 5.0, 0.2, CollisionLayer::Player));
        assert!(!probe.detect_actor_in_cone(eye, Vec2::NEG_X, 5.0, 0.2, CollisionLayer::Player));
        assert!(!probe.detect_actor_in_cone(eye, Vec2::X, 2.0, 0.2, CollisionLayer::Player));

        assert!(probe.is_within_radius(Vec2::new(1.5, 0.9), 0.3, CollisionLayer::Player));
        assert!(!probe.is_within_radius(Vec2::new(-1.0, 0.9), 0.3, CollisionLayer::Player));
    }

    #[test]
    fn test_probe_excludes_own_body() {
        let mut world = test_world();
        let enemy = world.add_rigid_body(presets::actor_body(0.0, 0.5, 1.0));
        world.add_collider(
            presets::actor_collider(0.4, 0.5, CollisionLayer::Enemy),
            enemy,
        );
        world.refresh_queries();

        let probe = RapierProbe::for_body(&world, enemy);
        assert!(!probe.is_within_radius(Vec2::new(0.0, 0.5), 0.2, CollisionLayer::Enemy));
        assert!(RapierProbe::new(&world).is_within_radius(
            Vec2::new(0.0, 0.5),
            0.2,
            CollisionLayer::Enemy
        ));
    }
}
