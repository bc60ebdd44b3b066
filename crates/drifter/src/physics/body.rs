use bitflags::bitflags;
use glam::Vec3;

use crate::player::CharacterDimensions;
use crate::surface::SurfaceTag;

bitflags! {
    /// Which sides of the actor touched something during a move.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct CollisionFlags: u8 {
        const SIDES = 1 << 0;
        const ABOVE = 1 << 1;
        const BELOW = 1 << 2;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MoveOutcome {
    pub flags: CollisionFlags,
    /// Displacement actually applied after collide-and-slide.
    pub applied: Vec3,
    /// Last contact point touched during the move, if any.
    pub contact: Option<Vec3>,
}

impl MoveOutcome {
    pub fn grounded(&self) -> bool {
        self.flags.contains(CollisionFlags::BELOW)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    pub point: Vec3,
    pub normal: Vec3,
    pub distance: f32,
    pub tag: SurfaceTag,
}

impl RayHit {
    /// Angle between the hit normal and world up, in degrees.
    pub fn slope_angle(&self) -> f32 {
        let normal = self.normal.normalize_or_zero();
        if normal == Vec3::ZERO {
            return 0.0;
        }
        normal.angle_between(Vec3::Y).to_degrees()
    }
}

/// Physics collaborator of the drifter: owns the actor pose and resolves
/// collide-and-slide moves and ray queries against its world.
pub trait CharacterPhysics {
    fn position(&self) -> Vec3;

    fn dimensions(&self) -> CharacterDimensions;

    fn move_and_slide(&mut self, displacement: Vec3) -> MoveOutcome;

    /// Nearest hit along `direction`, ignoring the actor itself.
    fn cast_ray(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> Option<RayHit>;

    /// Called once after every fixed step.
    fn end_step(&mut self) {}
}
