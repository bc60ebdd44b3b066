mod back_step;
mod climb;
mod config;
mod controller;
mod input;
mod state;

pub use back_step::{BackStep, BackStepTick};
pub use climb::{can_climb, climb_velocity};
pub use config::{CharacterDimensions, ContactFallback, DrifterConfig};
pub use controller::Drifter;
pub use input::{FrameInput, InputSampler, MoveInput};
pub use state::{DrifterState, MotionState};
