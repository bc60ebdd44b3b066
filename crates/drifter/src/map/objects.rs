use glam::{Quat, Vec3};

use crate::surface::SurfaceTag;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CourseObjectKind {
    Ground,
    StaticBox,
    /// Climbable wall: a trigger volume the actor can pass into.
    ClimbWall,
    Collectable,
}

#[derive(Debug, Clone)]
pub struct CourseObject {
    pub kind: CourseObjectKind,
    pub position: Vec3,
    pub half_extents: Vec3,
    pub rotation: Quat,
    pub tag: SurfaceTag,
}

impl CourseObject {
    pub fn ground(height: f32, half_size: f32) -> Self {
        Self {
            kind: CourseObjectKind::Ground,
            position: Vec3::new(0.0, height, 0.0),
            half_extents: Vec3::new(half_size, 0.1, half_size),
            rotation: Quat::IDENTITY,
            tag: SurfaceTag::Untagged,
        }
    }

    pub fn static_box(position: Vec3, half_extents: Vec3) -> Self {
        Self {
            kind: CourseObjectKind::StaticBox,
            position,
            half_extents,
            rotation: Quat::IDENTITY,
            tag: SurfaceTag::Untagged,
        }
    }

    /// Box tilted about the X axis so its top face rises towards -Z.
    pub fn ramp(position: Vec3, half_extents: Vec3, degrees: f32) -> Self {
        Self {
            rotation: Quat::from_rotation_x(degrees.to_radians()),
            ..Self::static_box(position, half_extents)
        }
    }

    pub fn climb_wall(position: Vec3, half_extents: Vec3) -> Self {
        Self {
            kind: CourseObjectKind::ClimbWall,
            ..Self::static_box(position, half_extents)
        }
    }

    pub fn collectable(position: Vec3) -> Self {
        Self {
            kind: CourseObjectKind::Collectable,
            position,
            half_extents: Vec3::splat(0.25),
            rotation: Quat::IDENTITY,
            tag: SurfaceTag::Collectable,
        }
    }

    pub fn with_tag(mut self, tag: SurfaceTag) -> Self {
        self.tag = tag;
        self
    }

    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    /// Trigger volumes go to the surface registry; everything else is solid.
    pub fn is_trigger(&self) -> bool {
        matches!(
            self.kind,
            CourseObjectKind::ClimbWall | CourseObjectKind::Collectable
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_walls_and_pickups_are_triggers() {
        assert!(CourseObject::climb_wall(Vec3::ZERO, Vec3::ONE).is_trigger());
        assert!(CourseObject::collectable(Vec3::ZERO).is_trigger());
        assert!(!CourseObject::ground(0.0, 10.0).is_trigger());
        let ramp = CourseObject::ramp(Vec3::ZERO, Vec3::ONE, 30.0);
        assert!(!ramp.is_trigger());
    }

    #[test]
    fn collectables_carry_their_tag() {
        assert_eq!(
            CourseObject::collectable(Vec3::ONE).tag,
            SurfaceTag::Collectable
        );
    }
}
