use glam::Vec3;
use rapier3d::control::{CharacterAutostep, CharacterLength, KinematicCharacterController};
use rapier3d::prelude::*;

use crate::player::CharacterDimensions;

use super::world::capsule_half_segment;
use super::{CharacterPhysics, CollisionFlags, MoveOutcome, PhysicsWorld, RayHit};

/// Normals steeper than this (cosine against up) count as side contacts.
const FLOOR_COS: f32 = 0.1;

/// The actor's capsule inside a rapier world, moved with rapier's kinematic
/// character controller.
pub struct RapierCharacter {
    physics: PhysicsWorld,
    handle: RigidBodyHandle,
    shape: SharedShape,
    controller: KinematicCharacterController,
    dimensions: CharacterDimensions,
}

impl RapierCharacter {
    pub fn new(mut physics: PhysicsWorld, spawn: Vec3, dimensions: CharacterDimensions) -> Self {
        let handle = physics.add_character(spawn, dimensions.radius, dimensions.height);
        let shape = SharedShape::capsule_y(
            capsule_half_segment(dimensions.height, dimensions.radius),
            dimensions.radius,
        );

        let mut controller = KinematicCharacterController::default();
        controller.offset = CharacterLength::Absolute(0.02);
        controller.up = Vector::Y;
        controller.max_slope_climb_angle = dimensions.slope_limit.to_radians();
        // Sliding is decided by the drifter, never by rapier.
        controller.min_slope_slide_angle = std::f32::consts::FRAC_PI_2;
        controller.snap_to_ground = None;
        controller.autostep = (dimensions.step_offset > 0.0).then_some(CharacterAutostep {
            max_height: CharacterLength::Absolute(dimensions.step_offset),
            min_width: CharacterLength::Absolute(0.1),
            include_dynamic_bodies: false,
        });

        physics.step();

        Self {
            physics,
            handle,
            shape,
            controller,
            dimensions,
        }
    }

    fn contact_point(&self, center: Vec3, normal: Vec3) -> Vec3 {
        let half_segment = capsule_half_segment(self.dimensions.height, self.dimensions.radius);
        let segment_offset = if normal.y > FLOOR_COS {
            -half_segment
        } else if normal.y < -FLOOR_COS {
            half_segment
        } else {
            0.0
        };
        center + Vec3::Y * segment_offset - normal * self.dimensions.radius
    }
}

impl CharacterPhysics for RapierCharacter {
    fn position(&self) -> Vec3 {
        self.physics.body_position(self.handle).unwrap_or(Vec3::ZERO)
    }

    fn dimensions(&self) -> CharacterDimensions {
        self.dimensions
    }

    fn move_and_slide(&mut self, displacement: Vec3) -> MoveOutcome {
        let mut flags = CollisionFlags::empty();
        let mut last_hit: Option<(Vec3, Vec3)> = None;

        let movement = self.physics.move_character(
            &self.controller,
            self.handle,
            &self.shape,
            displacement,
            |collision| {
                let n = collision.hit.normal1;
                let normal = Vec3::new(n.x, n.y, n.z);
                let c = collision.character_pos.translation;
                let center = Vec3::new(c.x, c.y, c.z);

                flags |= if normal.y > FLOOR_COS {
                    CollisionFlags::BELOW
                } else if normal.y < -FLOOR_COS {
                    CollisionFlags::ABOVE
                } else {
                    CollisionFlags::SIDES
                };
                last_hit = Some((center, normal));
            },
        );

        let Some(movement) = movement else {
            return MoveOutcome::default();
        };

        // Rapier reports grounded from its own probe as well as from hits.
        if movement.grounded {
            flags |= CollisionFlags::BELOW;
        } else if displacement.y > 0.0 {
            flags.remove(CollisionFlags::BELOW);
        }

        let t = movement.translation;
        let applied = Vec3::new(t.x, t.y, t.z);
        let new_position = self.position() + applied;
        self.physics.set_body_position(self.handle, new_position);

        MoveOutcome {
            flags,
            applied,
            contact: last_hit.map(|(center, normal)| self.contact_point(center, normal)),
        }
    }

    fn cast_ray(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> Option<RayHit> {
        self.physics
            .raycast(origin, direction, max_distance, Some(self.handle))
    }

    fn end_step(&mut self) {
        self.physics.step();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::SurfaceTag;

    fn character_on_ground(spawn: Vec3) -> RapierCharacter {
        let mut physics = PhysicsWorld::new();
        physics.add_ground(0.0, 50.0, SurfaceTag::Untagged);
        RapierCharacter::new(physics, spawn, CharacterDimensions::default())
    }

    #[test]
    fn falling_actor_lands_on_ground() {
        let mut character = character_on_ground(Vec3::new(0.0, 1.5, 0.0));

        let mut grounded = false;
        for _ in 0..60 {
            grounded = character.move_and_slide(Vec3::new(0.0, -0.2, 0.0)).grounded();
            character.end_step();
        }

        assert!(grounded);
        let y = character.position().y;
        assert!(y > 0.9 && y < 1.1, "resting height {y}");
    }

    #[test]
    fn horizontal_move_is_applied_in_open_space() {
        let mut character = character_on_ground(Vec3::new(0.0, 1.05, 0.0));
        let start = character.position();

        character.move_and_slide(Vec3::new(0.0, 0.0, 0.5));

        let moved = character.position() - start;
        assert!((moved.z - 0.5).abs() < 0.05, "moved {moved:?}");
    }

    #[test]
    fn cast_ray_skips_own_capsule() {
        let character = character_on_ground(Vec3::new(0.0, 1.05, 0.0));
        let hit = character
            .cast_ray(character.position(), -Vec3::Y, 1.5)
            .expect("ground below the capsule");
        assert!(hit.normal.y > 0.99);
    }
}
