use std::collections::BTreeMap;

use glam::{Quat, Vec3};

use crate::player::CharacterDimensions;

use super::SurfaceTag;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SurfaceId(pub u32);

impl SurfaceId {
    pub fn id(self) -> u32 {
        self.0
    }
}

/// Oriented box volume. Climbable walls are trigger volumes whose local
/// right/up axes span the climbing plane.
#[derive(Debug, Clone, PartialEq)]
pub struct TriggerVolume {
    pub center: Vec3,
    pub half_extents: Vec3,
    pub rotation: Quat,
    pub tag: SurfaceTag,
    pub is_trigger: bool,
}

impl TriggerVolume {
    pub fn new(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            center,
            half_extents,
            rotation: Quat::IDENTITY,
            tag: SurfaceTag::Untagged,
            is_trigger: true,
        }
    }

    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_tag(mut self, tag: SurfaceTag) -> Self {
        self.tag = tag;
        self
    }

    pub fn right(&self) -> Vec3 {
        self.rotation * Vec3::X
    }

    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }

    /// Whether an actor capsule centered at `position` touches the volume,
    /// approximating the capsule by its bounding box in volume space.
    pub fn overlaps_actor(&self, position: Vec3, dimensions: &CharacterDimensions) -> bool {
        let local = self.rotation.inverse() * (position - self.center);
        let reach = self.half_extents
            + Vec3::new(
                dimensions.radius,
                dimensions.half_height(),
                dimensions.radius,
            );
        local.abs().cmple(reach).all()
    }
}

#[derive(Debug, Default)]
pub struct SurfaceRegistry {
    volumes: BTreeMap<SurfaceId, TriggerVolume>,
    next_id: u32,
}

impl SurfaceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, volume: TriggerVolume) -> SurfaceId {
        let id = SurfaceId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.volumes.insert(id, volume);
        id
    }

    pub fn remove(&mut self, id: SurfaceId) -> Option<TriggerVolume> {
        self.volumes.remove(&id)
    }

    pub fn get(&self, id: SurfaceId) -> Option<&TriggerVolume> {
        self.volumes.get(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (SurfaceId, &TriggerVolume)> {
        self.volumes.iter().map(|(id, volume)| (*id, volume))
    }

    pub fn count_tagged(&self, tag: SurfaceTag) -> usize {
        self.volumes.values().filter(|v| v.tag == tag).count()
    }

    pub fn len(&self) -> usize {
        self.volumes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.volumes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_not_reused_after_removal() {
        let mut registry = SurfaceRegistry::new();
        let a = registry.insert(TriggerVolume::new(Vec3::ZERO, Vec3::ONE));
        registry.remove(a);
        let b = registry.insert(TriggerVolume::new(Vec3::ZERO, Vec3::ONE));

        assert_ne!(a, b);
        assert!(registry.get(a).is_none());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn rotated_volume_axes() {
        let volume = TriggerVolume::new(Vec3::ZERO, Vec3::ONE)
            .with_rotation(Quat::from_rotation_y(std::f32::consts::FRAC_PI_2));

        assert!((volume.right() - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-6);
        assert!((volume.up() - Vec3::Y).length() < 1e-6);
    }

    #[test]
    fn overlap_accounts_for_actor_size() {
        let dims = CharacterDimensions::default();
        let wall = TriggerVolume::new(Vec3::new(0.0, 2.0, 3.0), Vec3::new(2.0, 2.0, 0.25));

        assert!(wall.overlaps_actor(Vec3::new(0.0, 1.0, 2.5), &dims));
        assert!(!wall.overlaps_actor(Vec3::new(0.0, 1.0, 1.5), &dims));
    }

    #[test]
    fn counts_by_tag() {
        let mut registry = SurfaceRegistry::new();
        registry.insert(
            TriggerVolume::new(Vec3::ZERO, Vec3::ONE).with_tag(SurfaceTag::Collectable),
        );
        registry.insert(TriggerVolume::new(Vec3::ZERO, Vec3::ONE));

        assert_eq!(registry.count_tagged(SurfaceTag::Collectable), 1);
    }
}
