mod particle;
mod grid;
mod brush;
mod scenes;
pub mod rules;
pub mod step;

pub use particle::{ParticleKind, ParticleError};
pub use grid::{Cell, Grid, GridError, Population};
pub use brush::{paint, Brush, DEFAULT_BRUSH_RADIUS, MAX_BRUSH_RADIUS};
pub use scenes::Scene;
pub use step::{step, step_many};
