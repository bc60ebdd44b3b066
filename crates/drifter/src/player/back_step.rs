use glam::Vec3;

use crate::physics::{CharacterPhysics, MoveOutcome};

/// The timed retreat off a wall after a climbing jump.
///
/// Advanced once per rendered frame by its owner. Each tick moves the actor
/// horizontally towards the interpolated waypoint and leaves the vertical
/// coordinate to the locomotion core, so gravity and the jump impulse keep
/// acting during the maneuver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackStep {
    start: Vec3,
    target: Vec3,
    duration: f32,
    elapsed: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackStepTick {
    pub displacement: Vec3,
    pub outcome: MoveOutcome,
    /// This tick was the final snap onto the target.
    pub finished: bool,
}

impl BackStep {
    pub fn new(start: Vec3, distance: f32, duration: f32) -> Self {
        Self {
            start,
            target: start + Vec3::NEG_Z * distance,
            duration,
            elapsed: 0.0,
        }
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Point the next tick moves to, given the actor's live position.
    pub fn waypoint(&self, live: Vec3) -> Vec3 {
        let point = if self.elapsed < self.duration {
            self.start.lerp(self.target, self.elapsed / self.duration)
        } else {
            self.target
        };
        Vec3::new(point.x, live.y, point.z)
    }

    pub fn tick(&mut self, physics: &mut impl CharacterPhysics, frame_dt: f32) -> BackStepTick {
        let finished = self.elapsed >= self.duration;
        let live = physics.position();
        let displacement = self.waypoint(live) - live;
        let outcome = physics.move_and_slide(displacement);

        if !finished {
            self.elapsed += frame_dt;
        }

        BackStepTick {
            displacement,
            outcome,
            finished,
        }
    }
}
