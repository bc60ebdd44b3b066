use glam::Vec3;
use log::debug;

use crate::physics::PhysicsWorld;
use crate::surface::{SurfaceId, SurfaceRegistry, SurfaceTag, TriggerVolume};

use super::{CourseObject, CourseObjectKind};

/// Demo course: flat ground, a stair run, a tagged slide ramp, a ramp past
/// the slope limit, a climbable wall and a handful of pickups.
pub struct Course {
    objects: Vec<CourseObject>,
}

impl Default for Course {
    fn default() -> Self {
        Self::new()
    }
}

impl Course {
    pub const GROUND_SIZE: f32 = 60.0;
    pub const GROUND_Y: f32 = 0.0;

    pub fn new() -> Self {
        let mut objects = vec![CourseObject::ground(Self::GROUND_Y, Self::GROUND_SIZE)];

        Self::add_stairs(&mut objects);
        Self::add_ramps(&mut objects);
        Self::add_climb_wall(&mut objects);
        Self::add_collectables(&mut objects);

        Self { objects }
    }

    /// Empty course with just the ground.
    pub fn flat() -> Self {
        Self {
            objects: vec![CourseObject::ground(Self::GROUND_Y, Self::GROUND_SIZE)],
        }
    }

    pub fn push(&mut self, object: CourseObject) {
        self.objects.push(object);
    }

    pub fn spawn_point(&self) -> Vec3 {
        Vec3::new(0.0, Self::GROUND_Y + 1.1, 0.0)
    }

    fn add_stairs(objects: &mut Vec<CourseObject>) {
        let stair_start = Vec3::new(-6.0, 0.0, 4.0);
        let step_height = 0.25;
        let step_depth = 0.5;

        for i in 0..8 {
            let y = step_height * (i as f32 + 0.5);
            let z = stair_start.z + step_depth * i as f32;
            objects.push(CourseObject::static_box(
                Vec3::new(stair_start.x, y, z),
                Vec3::new(1.5, step_height * 0.5, step_depth * 0.5),
            ));
        }
    }

    fn add_ramps(objects: &mut Vec<CourseObject>) {
        objects.push(
            CourseObject::ramp(Vec3::new(8.0, 0.5, 0.0), Vec3::new(2.0, 0.25, 4.0), 25.0)
                .with_tag(SurfaceTag::Slide),
        );
        objects.push(CourseObject::ramp(
            Vec3::new(14.0, 1.0, 0.0),
            Vec3::new(2.0, 0.25, 4.0),
            55.0,
        ));
    }

    fn add_climb_wall(objects: &mut Vec<CourseObject>) {
        objects.push(CourseObject::static_box(
            Vec3::new(0.0, 3.0, 6.8),
            Vec3::new(2.0, 3.0, 0.4),
        ));
        objects.push(CourseObject::climb_wall(
            Vec3::new(0.0, 3.0, 6.1),
            Vec3::new(2.0, 3.0, 0.3),
        ));
    }

    fn add_collectables(objects: &mut Vec<CourseObject>) {
        for position in [
            Vec3::new(3.0, 1.0, 3.0),
            Vec3::new(-6.0, 2.5, 7.0),
            Vec3::new(0.0, 6.5, 5.8),
        ] {
            objects.push(CourseObject::collectable(position));
        }
    }

    pub fn objects(&self) -> &[CourseObject] {
        &self.objects
    }

    /// Inserts solid geometry into the physics world and trigger volumes into
    /// the registry. Returns the ids of the registered triggers.
    pub fn spawn(
        &self,
        physics: &mut PhysicsWorld,
        surfaces: &mut SurfaceRegistry,
    ) -> Vec<SurfaceId> {
        for object in self.objects.iter().filter(|o| !o.is_trigger()) {
            match object.kind {
                CourseObjectKind::Ground => {
                    physics.add_ground(object.position.y, object.half_extents.x, object.tag);
                }
                _ => {
                    physics.add_static_box(
                        object.position,
                        object.half_extents,
                        object.rotation,
                        object.tag,
                    );
                }
            }
        }

        self.spawn_triggers(surfaces)
    }

    /// Registers only the trigger volumes, for worlds that bring their own
    /// collision geometry.
    pub fn spawn_triggers(&self, surfaces: &mut SurfaceRegistry) -> Vec<SurfaceId> {
        let ids: Vec<SurfaceId> = self
            .objects
            .iter()
            .filter(|o| o.is_trigger())
            .map(|object| {
                surfaces.insert(
                    TriggerVolume::new(object.position, object.half_extents)
                        .with_rotation(object.rotation)
                        .with_tag(object.tag),
                )
            })
            .collect();
        debug!("registered {} trigger volumes", ids.len());
        ids
    }
}
