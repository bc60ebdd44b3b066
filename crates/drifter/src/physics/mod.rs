mod body;
mod character;
mod plane;
mod world;

pub use body::{CharacterPhysics, CollisionFlags, MoveOutcome, RayHit};
pub use character::RapierCharacter;
pub use plane::{Plane, PlaneWorld};
pub use world::PhysicsWorld;
