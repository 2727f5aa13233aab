mod simulation;
mod viewport;

pub use simulation::{FrameInput, Simulation};
pub use viewport::Viewport;
