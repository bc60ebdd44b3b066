use std::collections::BTreeSet;

use glam::Vec3;

use crate::player::CharacterDimensions;

use super::{SurfaceId, SurfaceRegistry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerEvent {
    Entered(SurfaceId),
    Exited(SurfaceId),
}

/// Turns per-step overlap tests into enter/exit notifications.
#[derive(Debug, Default)]
pub struct TriggerTracker {
    overlapping: BTreeSet<SurfaceId>,
}

impl TriggerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_inside(&self, id: SurfaceId) -> bool {
        self.overlapping.contains(&id)
    }

    /// Exits are reported before enters. A volume removed from the registry
    /// while overlapped reports an exit.
    pub fn update(
        &mut self,
        position: Vec3,
        dimensions: &CharacterDimensions,
        registry: &SurfaceRegistry,
    ) -> Vec<TriggerEvent> {
        let current: BTreeSet<SurfaceId> = registry
            .iter()
            .filter(|(_, volume)| {
                volume.is_trigger && volume.overlaps_actor(position, dimensions)
            })
            .map(|(id, _)| id)
            .collect();

        let mut events: Vec<TriggerEvent> = self
            .overlapping
            .difference(&current)
            .map(|id| TriggerEvent::Exited(*id))
            .collect();
        events.extend(
            current
                .difference(&self.overlapping)
                .map(|id| TriggerEvent::Entered(*id)),
        );

        self.overlapping = current;
        events
    }

    /// Drops a volume without reporting an exit.
    pub fn forget(&mut self, id: SurfaceId) {
        self.overlapping.remove(&id);
    }
}
