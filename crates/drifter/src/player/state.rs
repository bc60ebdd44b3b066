use glam::Vec3;

use crate::physics::RayHit;
use crate::surface::SurfaceId;

use super::{BackStep, DrifterConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionState {
    Grounded,
    Airborne,
    /// Attached to a climbable trigger volume.
    Climbing { surface: SurfaceId },
    /// Back step maneuver in progress after jumping off a wall.
    ExitingClimb,
}

impl MotionState {
    pub fn from_grounded(grounded: bool) -> Self {
        if grounded { Self::Grounded } else { Self::Airborne }
    }

    pub fn climb_surface(self) -> Option<SurfaceId> {
        match self {
            Self::Climbing { surface } => Some(surface),
            _ => None,
        }
    }

    pub fn is_climbing(self) -> bool {
        matches!(self, Self::Climbing { .. })
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Grounded => "grounded",
            Self::Airborne => "airborne",
            Self::Climbing { .. } => "climbing",
            Self::ExitingClimb => "exiting-climb",
        }
    }
}

#[derive(Debug, Clone)]
pub struct DrifterState {
    pub motion: MotionState,
    /// Velocity-like accumulator; scaled by the step duration on every move.
    pub move_direction: Vec3,
    /// Result of the previous move: something was touched below.
    pub grounded: bool,

    pub contact_point: Option<Vec3>,
    /// Fixed steps since `contact_point` was recorded; 0 means the last step.
    pub contact_age: u32,
    /// Latest ground ray hit. Kept when both ground rays miss.
    pub ground: Option<RayHit>,
    pub sliding: bool,

    pub falling: bool,
    pub fall_start_level: f32,

    pub speed: f32,
    pub player_control: bool,
    pub jump_timer: u32,

    pub back_step: Option<BackStep>,
}

impl DrifterState {
    pub fn new(config: &DrifterConfig) -> Self {
        Self {
            motion: MotionState::Airborne,
            move_direction: Vec3::ZERO,
            grounded: false,

            contact_point: None,
            contact_age: 0,
            ground: None,
            sliding: false,

            falling: false,
            fall_start_level: 0.0,

            speed: config.walk_speed,
            player_control: false,
            jump_timer: config.anti_bunny_hop_factor,

            back_step: None,
        }
    }

    pub fn record_contact(&mut self, point: Vec3) {
        self.contact_point = Some(point);
        self.contact_age = 0;
    }
}
