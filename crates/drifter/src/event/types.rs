use glam::Vec3;

use crate::surface::SurfaceId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClimbExit {
    /// The actor left the bound trigger volume.
    LeftVolume,
    /// Jump was pressed; the back step maneuver follows.
    Jumped,
    /// The bound surface no longer exists in the registry.
    SurfaceLost,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrifterEvent {
    /// Landed after falling further than the configured threshold.
    FallDamage {
        distance: f32,
    },
    Jumped {
        position: Vec3,
    },
    Landed {
        position: Vec3,
    },
    ClimbEntered {
        surface: SurfaceId,
    },
    ClimbExited {
        surface: SurfaceId,
        reason: ClimbExit,
    },
    BackStepStarted {
        start: Vec3,
        target: Vec3,
    },
    BackStepFinished {
        position: Vec3,
    },
    Collected {
        surface: SurfaceId,
        collected: u32,
        total: u32,
    },
}

impl DrifterEvent {
    /// Transient events are the first to go when the queue overflows.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Jumped { .. } | Self::Landed { .. })
    }
}
