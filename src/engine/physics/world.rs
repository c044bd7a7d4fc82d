use glam::Vec2;
use rapier2d::prelude::*;

/// Handle to identify rigid bodies
pub type RigidBodyHandle = rapier2d::prelude::RigidBodyHandle;

/// Handle to identify colliders
pub type ColliderHandle = rapier2d::prelude::ColliderHandle;

/// Physics world that integrates positions from the velocities the
/// controllers produce and answers geometry queries
pub struct PhysicsWorld {
    /// Gravity vector, only felt by bodies with a non-zero gravity scale
    gravity: Vector<Real>,

    /// Integration parameters for the physics simulation
    integration_parameters: IntegrationParameters,

    /// Physics pipeline handles collision detection and solving
    physics_pipeline: PhysicsPipeline,

    /// Island manager for sleeping bodies
    island_manager: IslandManager,

    /// Broad phase collision detection
    broad_phase: DefaultBroadPhase,

    /// Narrow phase collision detection
    narrow_phase: NarrowPhase,

    /// Impulse joint set
    impulse_joint_set: ImpulseJointSet,

    /// Multibody joint set
    multibody_joint_set: MultibodyJointSet,

    /// CCD solver for fast-moving objects
    ccd_solver: CCDSolver,

    /// Query pipeline for raycasts and overlap tests
    query_pipeline: QueryPipeline,

    /// Rigid body set
    rigid_body_set: RigidBodySet,

    /// Collider set
    collider_set: ColliderSet,
}

impl PhysicsWorld {
    /// Create a physics world with the given downward gravity (units/s²)
    pub fn with_gravity(gravity_y: Real) -> Self {
        let mut integration_parameters = IntegrationParameters::default();
        // Fixed timestep of 1/60 seconds (60 FPS)
        integration_parameters.dt = 1.0 / 60.0;

        Self {
            gravity: vector![0.0, gravity_y],
            integration_parameters,
            physics_pipeline: PhysicsPipeline::new(),
            island_manager: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            impulse_joint_set: ImpulseJointSet::new(),
            multibody_joint_set: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
            query_pipeline: QueryPipeline::new(),
            rigid_body_set: RigidBodySet::new(),
            collider_set: ColliderSet::new(),
        }
    }

    /// Step the physics simulation forward by one timestep
    pub fn step(&mut self) {
        self.physics_pipeline.step(
            &self.gravity,
            &self.integration_parameters,
            &mut self.island_manager,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.rigid_body_set,
            &mut self.collider_set,
            &mut self.impulse_joint_set,
            &mut self.multibody_joint_set,
            &mut self.ccd_solver,
            Some(&mut self.query_pipeline),
            &(),
            &(),
        );
    }

    /// Rebuild the query acceleration structure without stepping
    ///
    /// Needed after inserting or reshaping colliders so probes see them
    /// before the next step.
    pub fn refresh_queries(&mut self) {
        self.query_pipeline.update(&self.rigid_body_set, &self.collider_set);
    }

    /// Add a rigid body to the physics world
    pub fn add_rigid_body(&mut self, body: RigidBody) -> RigidBodyHandle {
        self.rigid_body_set.insert(body)
    }

    /// Add a collider attached to a rigid body
    pub fn add_collider(
        &mut self,
        collider: Collider,
        parent_handle: RigidBodyHandle,
    ) -> ColliderHandle {
        self.collider_set
            .insert_with_parent(collider, parent_handle, &mut self.rigid_body_set)
    }

    /// Remove a rigid body and all its attached colliders
    pub fn remove_rigid_body(&mut self, handle: RigidBodyHandle) {
        self.rigid_body_set.remove(
            handle,
            &mut self.island_manager,
            &mut self.collider_set,
            &mut self.impulse_joint_set,
            &mut self.multibody_joint_set,
            true, // remove attached colliders
        );
    }

    /// Position and velocity of a body as glam vectors
    pub fn body_state(&self, handle: RigidBodyHandle) -> Option<(Vec2, Vec2)> {
        self.rigid_body_set.get(handle).map(|body| {
            let pos = body.translation();
            let vel = body.linvel();
            (Vec2::new(pos.x, pos.y), Vec2::new(vel.x, vel.y))
        })
    }

    /// Overwrite a body's linear velocity
    pub fn set_linvel(&mut self, handle: RigidBodyHandle, velocity: Vec2) {
        match self.rigid_body_set.get_mut(handle) {
            Some(body) => body.set_linvel(vector![velocity.x, velocity.y], true),
            None => log::warn!("set_linvel on missing body {:?}", handle),
        }
    }

    /// Cast a ray and return the first hit
    pub fn raycast(
        &self,
        origin: Vec2,
        direction: Vec2,
        max_toi: Real,
        filter: QueryFilter,
    ) -> Option<(ColliderHandle, Real)> {
        let ray = Ray::new(point![origin.x, origin.y], vector![direction.x, direction.y]);
        self.query_pipeline.cast_ray(
            &self.rigid_body_set,
            &self.collider_set,
            &ray,
            max_toi,
            true,
            filter,
        )
    }

    /// First collider overlapping a circle
    pub fn overlap_circle(
        &self,
        center: Vec2,
        radius: Real,
        filter: QueryFilter,
    ) -> Option<ColliderHandle> {
        let shape_pos = Isometry::translation(center.x, center.y);
        self.query_pipeline.intersection_with_shape(
            &self.rigid_body_set,
            &self.collider_set,
            &shape_pos,
            &Ball::new(radius),
            filter,
        )
    }

    /// Swap a collider for a box of the given half extents, shifted vertically
    /// relative to its body
    pub fn reshape_box(&mut self, handle: ColliderHandle, half_extents: Vec2, offset_y: Real) {
        match self.collider_set.get_mut(handle) {
            Some(collider) => {
                collider.set_shape(SharedShape::cuboid(half_extents.x, half_extents.y));
                collider.set_translation_wrt_parent(vector![0.0, offset_y]);
            }
            None => log::warn!("reshape_box on missing collider {:?}", handle),
        }
    }

    /// Set the timestep for physics simulation
    pub fn set_timestep(&mut self, dt: Real) {
        self.integration_parameters.dt = dt;
    }
}

#[cfg(test)]
mod tests {
    use super::super::body::presets;
    use super::super::collision::CollisionLayer;
    use super::*;

    fn world_with_floor() -> PhysicsWorld {
        let mut world = PhysicsWorld::with_gravity(-35.0);
        let floor = world.add_rigid_body(presets::platform_body(0.0, -0.5));
        world.add_collider(presets::platform_collider(20.0, 1.0), floor);
        world.refresh_queries();
        world
    }

    #[test]
    fn test_raycast_hits_floor() {
        let world = world_with_floor();
        let hit = world.raycast(
            Vec2::new(0.0, 1.0),
            Vec2::new(0.0, -1.0),
            2.0,
            CollisionLayer::Ground.query_filter(),
        );
        let (_, toi) = hit.expect("ray should hit the floor");
        assert!((toi - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_raycast_misses_past_edge() {
        let world = world_with_floor();
        let hit = world.raycast(
            Vec2::new(15.0, 1.0),
            Vec2::new(0.0, -1.0),
            2.0,
            CollisionLayer::Ground.query_filter(),
        );
        assert!(hit.is_none());
    }

    #[test]
    fn test_overlap_respects_layer() {
        let world = world_with_floor();
        let on_floor = Vec2::new(0.0, 0.0);
        assert!(world
            .overlap_circle(on_floor, 0.2, CollisionLayer::Ground.query_filter())
            .is_some());
        assert!(world
            .overlap_circle(on_floor, 0.2, CollisionLayer::Player.query_filter())
            .is_none());
    }

    #[test]
    fn test_body_state_and_linvel() {
        let mut world = PhysicsWorld::with_gravity(0.0);
        let body = world.add_rigid_body(presets::actor_body(1.0, 2.0, 0.0));
        world.set_linvel(body, Vec2::new(3.0, -1.0));

        let (pos, vel) = world.body_state(body).unwrap();
        assert_eq!(pos, Vec2::new(1.0, 2.0));
        assert_eq!(vel, Vec2::new(3.0, -1.0));
    }

    #[test]
    fn test_step_integrates_velocity() {
        let mut world = PhysicsWorld::with_gravity(0.0);
        let body = world.add_rigid_body(presets::actor_body(0.0, 10.0, 0.0));
        world.set_linvel(body, Vec2::new(6.0, 0.0));
        world.step();

        let (pos, _) = world.body_state(body).unwrap();
        assert!((pos.x - 0.1).abs() < 1e-3);
    }

    #[test]
    fn test_reshape_box_moves_collider() {
        let mut world = PhysicsWorld::with_gravity(0.0);
        let body = world.add_rigid_body(presets::actor_body(0.0, 0.9, 0.0));
        let collider = world.add_collider(
            presets::actor_collider(0.4, 0.9, CollisionLayer::Player),
            body,
        );

        world.reshape_box(collider, Vec2::new(0.4, 0.45), -0.45);
        world.refresh_queries();

        // The top half of the standing box is empty now
        let player = CollisionLayer::Player;
        assert!(world
            .overlap_circle(Vec2::new(0.0, 1.5), 0.1, player.query_filter())
            .is_none());
        assert!(world
            .overlap_circle(Vec2::new(0.0, 0.4), 0.1, player.query_filter())
            .is_some());
    }
}
