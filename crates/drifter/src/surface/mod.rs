mod registry;
mod tag;
mod trigger;

pub use registry::{SurfaceId, SurfaceRegistry, TriggerVolume};
pub use tag::SurfaceTag;
pub use trigger::{TriggerEvent, TriggerTracker};
