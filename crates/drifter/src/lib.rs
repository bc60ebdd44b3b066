pub mod error;
pub mod event;
pub mod map;
pub mod physics;
pub mod player;
pub mod simulation;
pub mod surface;

pub use error::ConfigError;
pub use event::{ClimbExit, DrifterEvent, EventQueue, PendingEvent};
pub use map::{Course, CourseObject, CourseObjectKind};
pub use physics::{
    CharacterPhysics, CollisionFlags, MoveOutcome, PhysicsWorld, Plane, PlaneWorld,
    RapierCharacter, RayHit,
};
pub use player::{
    BackStep, CharacterDimensions, ContactFallback, Drifter, DrifterConfig, DrifterState,
    FrameInput, InputSampler, MotionState, MoveInput,
};
pub use simulation::{CollectableTally, FixedTimestep, Session};
pub use surface::{
    SurfaceId, SurfaceRegistry, SurfaceTag, TriggerEvent, TriggerTracker, TriggerVolume,
};
