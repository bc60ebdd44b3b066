use glam::{Vec2, Vec3};

use crate::surface::TriggerVolume;

/// Trigger volumes start climbing unless they are pickups.
pub fn can_climb(volume: &TriggerVolume) -> bool {
    volume.is_trigger && !volume.tag.is_collectable()
}

/// Climbing velocity in the plane of the wall. The combined input is capped
/// at unit length so diagonal climbing is no faster than straight climbing.
pub fn climb_velocity(surface: &TriggerVolume, axes: Vec2, climb_speed: f32) -> Vec3 {
    let mut direction = surface.right() * axes.x + surface.up() * axes.y;
    if direction.length() > 1.0 {
        direction = direction.normalize();
    }
    direction * climb_speed
}
