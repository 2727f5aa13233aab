use super::ParticleKind;
use rayon::prelude::*;
use thiserror::Error;

/// A grid cell holds exactly one particle kind and nothing else
pub type Cell = ParticleKind;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("cell ({col}, {row}) is outside the {width}x{height} grid")]
    OutOfBounds {
        col: usize,
        row: usize,
        width: usize,
        height: usize,
    },
    #[error("expected {expected} cells for the grid, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
    #[error("unknown cell symbol {0:?}")]
    UnknownSymbol(char),
}

/// Per-kind cell counts
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Population {
    pub empty: usize,
    pub wall: usize,
    pub sand: usize,
    pub water: usize,
}

impl Population {
    pub const fn of(&self, kind: ParticleKind) -> usize {
        match kind {
            ParticleKind::Empty => self.empty,
            ParticleKind::Wall => self.wall,
            ParticleKind::Sand => self.sand,
            ParticleKind::Water => self.water,
        }
    }

    fn with(mut self, kind: ParticleKind) -> Self {
        match kind {
            ParticleKind::Empty => self.empty += 1,
            ParticleKind::Wall => self.wall += 1,
            ParticleKind::Sand => self.sand += 1,
            ParticleKind::Water => self.water += 1,
        }
        self
    }

    fn merge(self, other: Self) -> Self {
        Self {
            empty: self.empty + other.empty,
            wall: self.wall + other.wall,
            sand: self.sand + other.sand,
            water: self.water + other.water,
        }
    }
}

/// Grid is the particle buffer for one frame.
/// Row-major, row 0 is the bottom of the screen: gravity points towards
/// decreasing row index.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with every cell empty
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![ParticleKind::Empty; width * height],
        }
    }

    /// Empty grid with a wall band along the bottom edge
    pub fn with_floor(width: usize, height: usize, thickness: usize) -> Self {
        let mut grid = Self::new(width, height);
        let rows = thickness.min(height);
        grid.cells[..rows * width].fill(ParticleKind::Wall);
        grid
    }

    /// Build a grid from a row-major cell vector (row 0 first)
    pub fn from_cells(width: usize, height: usize, cells: Vec<Cell>) -> Result<Self, GridError> {
        if cells.len() != width * height {
            return Err(GridError::DimensionMismatch {
                expected: width * height,
                actual: cells.len(),
            });
        }
        Ok(Self { width, height, cells })
    }

    /// Parse a picture of the grid, top row first as it appears on screen.
    /// `.` empty, `W` wall, `S` sand, `~` water.
    pub fn from_ascii(rows: &[&str]) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.chars().count());
        let mut cells = Vec::with_capacity(width * height);

        for line in rows.iter().rev() {
            let before = cells.len();
            for symbol in line.chars() {
                cells.push(match symbol {
                    '.' => ParticleKind::Empty,
                    'W' => ParticleKind::Wall,
                    'S' => ParticleKind::Sand,
                    '~' => ParticleKind::Water,
                    other => return Err(GridError::UnknownSymbol(other)),
                });
            }
            if cells.len() - before != width {
                return Err(GridError::DimensionMismatch {
                    expected: width * height,
                    actual: cells.len(),
                });
            }
        }

        Self::from_cells(width, height, cells)
    }

    /// Inverse of `from_ascii`, handy for assertion messages
    pub fn to_ascii(&self) -> Vec<String> {
        self.cells
            .chunks(self.width.max(1))
            .rev()
            .map(|row| {
                row.iter()
                    .map(|cell| match cell {
                        ParticleKind::Empty => '.',
                        ParticleKind::Wall => 'W',
                        ParticleKind::Sand => 'S',
                        ParticleKind::Water => '~',
                    })
                    .collect()
            })
            .collect()
    }

    /// Get grid dimensions
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    /// Convert 2D coordinates to 1D index
    pub(crate) const fn index(&self, col: usize, row: usize) -> usize {
        row * self.width + col
    }

    pub const fn contains(&self, col: usize, row: usize) -> bool {
        col < self.width && row < self.height
    }

    fn check(&self, col: usize, row: usize) -> Result<usize, GridError> {
        if self.contains(col, row) {
            Ok(self.index(col, row))
        } else {
            Err(GridError::OutOfBounds {
                col,
                row,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Get cell at position
    pub fn get(&self, col: usize, row: usize) -> Result<Cell, GridError> {
        self.check(col, row).map(|idx| self.cells[idx])
    }

    /// Set cell at position
    pub fn set(&mut self, col: usize, row: usize, cell: Cell) -> Result<(), GridError> {
        let idx = self.check(col, row)?;
        self.cells[idx] = cell;
        Ok(())
    }

    /// Position offset by (dx, dy), or None when it falls off the grid
    pub fn offset(&self, col: usize, row: usize, dx: isize, dy: isize) -> Option<(usize, usize)> {
        let c = col.checked_add_signed(dx)?;
        let r = row.checked_add_signed(dy)?;
        self.contains(c, r).then_some((c, r))
    }

    /// Neighbor at (dx, dy). Off-grid reads give None, never Empty.
    pub fn neighbor(&self, col: usize, row: usize, dx: isize, dy: isize) -> Option<Cell> {
        self.offset(col, row, dx, dy)
            .map(|(c, r)| self.cells[self.index(c, r)])
    }

    /// Raw row-major cells, row 0 first
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate over all cells with their positions, in scan order
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        let width = self.width.max(1);
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, &cell)| (idx % width, idx / width, cell))
    }

    pub fn count(&self, kind: ParticleKind) -> usize {
        self.cells.par_iter().filter(|&&cell| cell == kind).count()
    }

    /// Count every kind in a single pass
    pub fn population(&self) -> Population {
        self.cells
            .par_iter()
            .fold(Population::default, |acc, &cell| acc.with(cell))
            .reduce(Population::default, Population::merge)
    }

    /// Display colors as floats in [0, 1], 4 per cell, row 0 first
    pub fn color_buffer(&self) -> Vec<f32> {
        let mut buffer = vec![0.0; self.cells.len() * 4];
        buffer
            .par_chunks_mut(4)
            .zip(self.cells.par_iter())
            .for_each(|(pixel, cell)| pixel.copy_from_slice(&cell.to_rgba_f32()));
        buffer
    }

    /// Display colors as bytes, 4 per cell, row 0 first
    pub fn rgba8_buffer(&self) -> Vec<u8> {
        let mut buffer = vec![0; self.cells.len() * 4];
        buffer
            .par_chunks_mut(4)
            .zip(self.cells.par_iter())
            .for_each(|(pixel, cell)| pixel.copy_from_slice(&cell.to_rgba()));
        buffer
    }
}
