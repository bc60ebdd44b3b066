mod collectables;
mod session;
mod tick;

pub use collectables::CollectableTally;
pub use session::Session;
pub use tick::FixedTimestep;
