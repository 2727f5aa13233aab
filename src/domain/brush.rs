use super::{Grid, ParticleKind};

/// Brush radius used when nothing else is configured
pub const DEFAULT_BRUSH_RADIUS: usize = 5;

/// Largest radius the harness lets the user pick
pub const MAX_BRUSH_RADIUS: usize = 40;

/// Stamp `kind` onto every cell within Chebyshev distance `< radius` of the
/// cursor. Existing particles are overwritten, walls included. Positions of
/// the square that fall off the grid are skipped, and the cursor itself may
/// be off the grid.
pub fn paint(grid: &Grid, cursor_col: i64, cursor_row: i64, kind: ParticleKind, radius: usize) -> Grid {
    let mut painted = grid.clone();
    if radius == 0 {
        return painted;
    }

    let (width, height) = grid.dimensions();
    // Radii past i64::MAX cover every grid anyway
    let reach = i64::try_from(radius - 1).unwrap_or(i64::MAX);
    let span = |center: i64, len: usize| {
        let clamp = |value: i64| value.clamp(0, len as i64) as usize;
        clamp(center.saturating_sub(reach))..clamp(center.saturating_add(reach).saturating_add(1))
    };

    let cols = span(cursor_col, width);
    for row in span(cursor_row, height) {
        for col in cols.clone() {
            if let Err(err) = painted.set(col, row, kind) {
                unreachable!("brush span escaped the grid: {err}");
            }
        }
    }
    painted
}

/// The particle kind and size the harness paints with
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Brush {
    pub kind: ParticleKind,
    pub radius: usize,
}

impl Brush {
    pub const fn new(kind: ParticleKind, radius: usize) -> Self {
        Self { kind, radius }
    }

    pub const fn with_kind(self, kind: ParticleKind) -> Self {
        Self { kind, ..self }
    }

    pub const fn with_radius(self, radius: usize) -> Self {
        Self { radius, ..self }
    }

    /// Apply the brush at the cursor
    pub fn stamp(&self, grid: &Grid, cursor_col: i64, cursor_row: i64) -> Grid {
        paint(grid, cursor_col, cursor_row, self.kind, self.radius)
    }
}

impl Default for Brush {
    fn default() -> Self {
        Self::new(ParticleKind::Sand, DEFAULT_BRUSH_RADIUS)
    }
}
