use serde::{Deserialize, Serialize};

/// Authoring tag attached to colliders and trigger volumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[repr(u8)]
pub enum SurfaceTag {
    #[default]
    Untagged = 0,
    /// Ground the actor slides down regardless of its angle.
    Slide = 1,
    /// Pickup volume; never starts climbing.
    Collectable = 2,
}

impl From<u8> for SurfaceTag {
    fn from(value: u8) -> Self {
        match value {
            1 => Self::Slide,
            2 => Self::Collectable,
            _ => Self::Untagged,
        }
    }
}

impl SurfaceTag {
    pub fn is_slide(self) -> bool {
        matches!(self, Self::Slide)
    }

    pub fn is_collectable(self) -> bool {
        matches!(self, Self::Collectable)
    }
}
