use glam::Vec3;

use crate::player::CharacterDimensions;
use crate::surface::SurfaceTag;

use super::{CharacterPhysics, CollisionFlags, MoveOutcome, RayHit};

const CONTACT_EPSILON: f32 = 1e-4;

/// Infinite ground plane through `point`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    pub point: Vec3,
    pub normal: Vec3,
    pub tag: SurfaceTag,
}

impl Plane {
    pub fn flat(height: f32) -> Self {
        Self {
            point: Vec3::new(0.0, height, 0.0),
            normal: Vec3::Y,
            tag: SurfaceTag::Untagged,
        }
    }

    /// Plane through `point` tilted `degrees` from horizontal, descending
    /// towards `downhill`.
    pub fn inclined(point: Vec3, degrees: f32, downhill: Vec3) -> Self {
        let downhill = Vec3::new(downhill.x, 0.0, downhill.z).normalize_or_zero();
        let (sin, cos) = degrees.to_radians().sin_cos();
        Self {
            point,
            normal: (downhill * sin + Vec3::Y * cos).normalize(),
            tag: SurfaceTag::Untagged,
        }
    }

    pub fn with_tag(mut self, tag: SurfaceTag) -> Self {
        self.tag = tag;
        self
    }

    pub fn height_at(&self, x: f32, z: f32) -> f32 {
        let n = self.normal;
        self.point.y - (n.x * (x - self.point.x) + n.z * (z - self.point.z)) / n.y
    }
}

/// Analytic backend: one actor standing on (at most) one infinite plane.
///
/// Moves are never blocked sideways; the only collision is the plane pushing
/// the bottom of the actor back onto its surface. Every applied displacement
/// is kept in a journal for inspection.
#[derive(Debug, Clone)]
pub struct PlaneWorld {
    position: Vec3,
    dimensions: CharacterDimensions,
    surface: Option<Plane>,
    journal: Vec<Vec3>,
}

impl PlaneWorld {
    pub fn new(dimensions: CharacterDimensions, surface: Option<Plane>) -> Self {
        Self {
            position: Vec3::ZERO,
            dimensions,
            surface,
            journal: Vec::new(),
        }
    }

    /// Flat ground at y = 0 with the actor standing on it at the origin.
    pub fn flat(dimensions: CharacterDimensions) -> Self {
        let mut world = Self::new(dimensions, Some(Plane::flat(0.0)));
        world.position = Vec3::new(0.0, dimensions.half_height(), 0.0);
        world
    }

    /// Places the actor so its bottom rests on the surface below `xz`.
    pub fn standing_at(mut self, x: f32, z: f32) -> Self {
        let floor = self.surface.map(|plane| plane.height_at(x, z)).unwrap_or(0.0);
        self.position = Vec3::new(x, floor + self.dimensions.half_height(), z);
        self
    }

    pub fn set_surface(&mut self, surface: Option<Plane>) {
        self.surface = surface;
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    pub fn journal(&self) -> &[Vec3] {
        &self.journal
    }
}

impl CharacterPhysics for PlaneWorld {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn dimensions(&self) -> CharacterDimensions {
        self.dimensions
    }

    fn move_and_slide(&mut self, displacement: Vec3) -> MoveOutcome {
        let mut target = self.position + displacement;
        let mut flags = CollisionFlags::empty();
        let mut contact = None;

        if let Some(plane) = &self.surface {
            let floor = plane.height_at(target.x, target.z);
            let bottom = target.y - self.dimensions.half_height();
            if bottom <= floor + CONTACT_EPSILON {
                target.y = floor + self.dimensions.half_height();
                flags |= CollisionFlags::BELOW;
                contact = Some(Vec3::new(target.x, floor, target.z));
            }
        }

        let applied = target - self.position;
        self.position = target;
        self.journal.push(applied);

        MoveOutcome {
            flags,
            applied,
            contact,
        }
    }

    fn cast_ray(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> Option<RayHit> {
        let plane = self.surface.as_ref()?;
        let direction = direction.try_normalize()?;

        let facing = direction.dot(plane.normal);
        if facing >= 0.0 {
            return None;
        }

        let distance = (plane.point - origin).dot(plane.normal) / facing;
        if !(0.0..=max_distance).contains(&distance) {
            return None;
        }

        Some(RayHit {
            point: origin + direction * distance,
            normal: plane.normal,
            distance,
            tag: plane.tag,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falling_onto_flat_ground_reports_below() {
        let mut world = PlaneWorld::flat(CharacterDimensions::default());
        world.set_position(Vec3::new(0.0, 3.0, 0.0));

        let outcome = world.move_and_slide(Vec3::new(0.0, -5.0, 0.0));

        assert!(outcome.grounded());
        assert_eq!(world.position().y, 1.0);
        assert_eq!(outcome.contact, Some(Vec3::new(0.0, 0.0, 0.0)));
        assert_eq!(world.journal(), &[Vec3::new(0.0, -2.0, 0.0)]);
    }

    #[test]
    fn rising_move_leaves_ground() {
        let mut world = PlaneWorld::flat(CharacterDimensions::default());
        let outcome = world.move_and_slide(Vec3::new(0.0, 0.1, 0.0));
        assert!(!outcome.grounded());
        assert!(outcome.contact.is_none());
    }

    #[test]
    fn inclined_plane_height_drops_downhill() {
        let plane = Plane::inclined(Vec3::ZERO, 45.0, Vec3::X);
        assert!((plane.height_at(1.0, 0.0) + 1.0).abs() < 1e-5);
        assert!((plane.height_at(0.0, 3.0)).abs() < 1e-5);
    }

    #[test]
    fn ray_misses_beyond_max_distance() {
        let world = PlaneWorld::flat(CharacterDimensions::default());
        let above = Vec3::new(0.0, 5.0, 0.0);
        assert!(world.cast_ray(above, -Vec3::Y, 1.5).is_none());

        let hit = world.cast_ray(Vec3::new(0.0, 1.0, 0.0), -Vec3::Y, 1.5).unwrap();
        assert_eq!(hit.distance, 1.0);
        assert_eq!(hit.normal, Vec3::Y);
    }

    #[test]
    fn ray_from_below_does_not_hit() {
        let world = PlaneWorld::flat(CharacterDimensions::default());
        let below = Vec3::new(0.0, -1.0, 0.0);
        assert!(world.cast_ray(below, -Vec3::Y, 10.0).is_none());
    }

    #[test]
    fn void_world_never_grounds() {
        let mut world = PlaneWorld::new(CharacterDimensions::default(), None);
        let fall = Vec3::new(0.0, -100.0, 0.0);
        assert!(!world.move_and_slide(fall).grounded());
        let hit = world.cast_ray(Vec3::ZERO, -Vec3::Y, f32::INFINITY);
        assert!(hit.is_none());
    }
}
