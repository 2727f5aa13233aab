// Domain layer - particles, grid, automaton rules
pub mod domain;

// Application layer - simulation state and coordination
pub mod application;
pub mod config;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{paint, step, Brush, Grid, GridError, ParticleKind, Scene};
pub use application::{FrameInput, Simulation, Viewport};
pub use config::SimConfig;
