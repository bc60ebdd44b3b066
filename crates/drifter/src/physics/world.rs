use glam::{Quat, Vec3};
use rapier3d::control::{
    CharacterCollision, EffectiveCharacterMovement, KinematicCharacterController,
};
use rapier3d::prelude::*;

use crate::surface::SurfaceTag;

use super::RayHit;

pub struct PhysicsWorld {
    pipeline: PhysicsPipeline,
    integration_parameters: IntegrationParameters,
    islands: IslandManager,
    broad_phase: DefaultBroadPhase,
    narrow_phase: NarrowPhase,
    pub bodies: RigidBodySet,
    pub colliders: ColliderSet,
    impulse_joints: ImpulseJointSet,
    multibody_joints: MultibodyJointSet,
    ccd_solver: CCDSolver,
    gravity: Vector,
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl PhysicsWorld {
    const TICK_RATE: Real = 1.0 / 50.0;
    const MAX_RAY_DISTANCE: Real = 10_000.0;

    pub fn new() -> Self {
        let mut integration_parameters = IntegrationParameters::default();
        integration_parameters.dt = Self::TICK_RATE;
        integration_parameters.min_ccd_dt = Self::TICK_RATE / 100.0;

        Self {
            pipeline: PhysicsPipeline::new(),
            integration_parameters,
            islands: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            bodies: RigidBodySet::new(),
            colliders: ColliderSet::new(),
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
            gravity: Vector::new(0.0, -9.81, 0.0),
        }
    }

    pub fn set_timestep(&mut self, dt: Real) {
        self.integration_parameters.dt = dt;
        self.integration_parameters.min_ccd_dt = dt / 100.0;
    }

    /// Advances the pipeline. Newly inserted or moved colliders only become
    /// visible to queries after a step.
    pub fn step(&mut self) {
        self.pipeline.step(
            self.gravity,
            &self.integration_parameters,
            &mut self.islands,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.bodies,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            &mut self.ccd_solver,
            &(),
            &(),
        );
    }

    pub fn add_character(&mut self, position: Vec3, radius: Real, height: Real) -> RigidBodyHandle {
        let body = RigidBodyBuilder::kinematic_position_based()
            .translation(Vector::new(position.x, position.y, position.z))
            .lock_rotations()
            .build();

        let handle = self.bodies.insert(body);

        let collider = ColliderBuilder::capsule_y(capsule_half_segment(height, radius), radius)
            .friction(0.0)
            .build();

        self.colliders
            .insert_with_parent(collider, handle, &mut self.bodies);

        handle
    }

    pub fn add_ground(&mut self, y: Real, half_size: Real, tag: SurfaceTag) -> ColliderHandle {
        let collider = ColliderBuilder::cuboid(half_size, 0.1, half_size)
            .translation(Vector::new(0.0, y - 0.1, 0.0))
            .user_data(tag as u128)
            .build();
        self.colliders.insert(collider)
    }

    pub fn add_static_box(
        &mut self,
        position: Vec3,
        half_extents: Vec3,
        rotation: Quat,
        tag: SurfaceTag,
    ) -> ColliderHandle {
        let rot = Rotation::from_xyzw(rotation.x, rotation.y, rotation.z, rotation.w);
        let rot = rot.normalize();
        let pose = Pose::from_parts(Vector::new(position.x, position.y, position.z), rot);
        let collider = ColliderBuilder::cuboid(half_extents.x, half_extents.y, half_extents.z)
            .position(pose)
            .user_data(tag as u128)
            .build();
        self.colliders.insert(collider)
    }

    pub fn body_position(&self, handle: RigidBodyHandle) -> Option<Vec3> {
        self.bodies.get(handle).map(|b| {
            let t = b.translation();
            Vec3::new(t.x, t.y, t.z)
        })
    }

    pub fn set_body_position(&mut self, handle: RigidBodyHandle, position: Vec3) {
        if let Some(body) = self.bodies.get_mut(handle) {
            let current_rot = *body.rotation();
            let new_pose =
                Pose::from_parts(Vector::new(position.x, position.y, position.z), current_rot);
            body.set_position(new_pose, true);
        }
    }

    pub fn move_character(
        &self,
        controller: &KinematicCharacterController,
        handle: RigidBodyHandle,
        shape: &SharedShape,
        desired_translation: Vec3,
        mut on_collision: impl FnMut(CharacterCollision),
    ) -> Option<EffectiveCharacterMovement> {
        let position = *self.bodies.get(handle)?.position();
        let filter = QueryFilter::default().exclude_rigid_body(handle);
        let query_pipeline = self.broad_phase.as_query_pipeline(
            self.narrow_phase.query_dispatcher(),
            &self.bodies,
            &self.colliders,
            filter,
        );

        Some(controller.move_shape(
            self.integration_parameters.dt,
            &query_pipeline,
            shape.as_ref(),
            &position,
            Vector::new(
                desired_translation.x,
                desired_translation.y,
                desired_translation.z,
            ),
            |collision| on_collision(collision),
        ))
    }

    /// Ray query returning the hit normal and the collider's surface tag.
    pub fn raycast(
        &self,
        origin: Vec3,
        direction: Vec3,
        max_distance: Real,
        exclude: Option<RigidBodyHandle>,
    ) -> Option<RayHit> {
        let direction = direction.try_normalize()?;
        let filter = match exclude {
            Some(handle) => QueryFilter::default().exclude_rigid_body(handle),
            None => QueryFilter::default(),
        };
        let query = self.broad_phase.as_query_pipeline(
            self.narrow_phase.query_dispatcher(),
            &self.bodies,
            &self.colliders,
            filter,
        );
        let ray = Ray::new(
            Vector::new(origin.x, origin.y, origin.z),
            Vector::new(direction.x, direction.y, direction.z),
        );

        let max_distance = max_distance.min(Self::MAX_RAY_DISTANCE);
        let (collider, intersection) = query.cast_ray_and_get_normal(&ray, max_distance, true)?;
        let tag = self
            .colliders
            .get(collider)
            .map(|c| SurfaceTag::from(c.user_data as u8))
            .unwrap_or_default();
        let normal = intersection.normal;
        let distance = intersection.time_of_impact;

        Some(RayHit {
            point: origin + direction * distance,
            normal: Vec3::new(normal.x, normal.y, normal.z),
            distance,
            tag,
        })
    }
}

pub(crate) fn capsule_half_segment(height: Real, radius: Real) -> Real {
    (height * 0.5 - radius).max(0.0)
}
