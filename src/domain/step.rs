//! One automaton step.
//!
//! Cells are visited once each in scan order (rows ascending, then columns
//! ascending). Results go into a fresh buffer; a destination written by an
//! earlier source is claimed and no later source may move into it.

use super::rules::{self, Neighborhood, Offset, Transition};
use super::{Cell, Grid, ParticleKind};

/// The next grid under construction plus its claim markers
struct StepBuffer<'a> {
    current: &'a Grid,
    next: Vec<Cell>,
    claimed: Vec<bool>,
    /// Index of the source being processed; everything before it is resolved
    cursor: usize,
}

impl<'a> StepBuffer<'a> {
    fn new(current: &'a Grid) -> Self {
        let len = current.cells().len();
        Self {
            current,
            next: vec![ParticleKind::Empty; len],
            claimed: vec![false; len],
            cursor: 0,
        }
    }

    /// Cell state as this step currently sees it. Processed or claimed
    /// positions read the next buffer, where an unclaimed processed cell has
    /// been vacated. Anything else still reads the current grid.
    fn resolved(&self, idx: usize) -> Cell {
        if self.claimed[idx] || idx < self.cursor {
            self.next[idx]
        } else {
            self.current.cells()[idx]
        }
    }

    fn target(&self, col: usize, row: usize, offset: Offset) -> Option<usize> {
        self.current
            .offset(col, row, offset.dx, offset.dy)
            .map(|(c, r)| self.current.index(c, r))
    }

    fn claim(&mut self, idx: usize, cell: Cell) {
        assert!(
            !self.claimed[idx],
            "cell {idx} written twice in one step (first-writer-wins violated)"
        );
        self.next[idx] = cell;
        self.claimed[idx] = true;
    }

    fn apply(&mut self, col: usize, row: usize, kind: ParticleKind, transition: Transition) {
        let source = self.cursor;
        match transition {
            Transition::Rest => self.claim(source, kind),
            Transition::Move(offset) => {
                let Some(dest) = self.target(col, row, offset) else {
                    unreachable!("{kind:?} at ({col}, {row}) moved off the grid");
                };
                self.claim(dest, kind);
            }
            Transition::Swap(offset) => {
                let Some(dest) = self.target(col, row, offset) else {
                    unreachable!("{kind:?} at ({col}, {row}) swapped off the grid");
                };
                // The displaced particle has already settled into `dest` this
                // step; it is relocated to the source cell, not overwritten.
                assert!(
                    dest < source && self.claimed[dest],
                    "swap target {dest} not yet resolved"
                );
                let displaced = self.next[dest];
                self.next[dest] = kind;
                self.claim(source, displaced);
            }
        }
    }
}

/// Neighborhood of one source cell, seen through the step buffer
struct Around<'b, 'a> {
    buffer: &'b StepBuffer<'a>,
    col: usize,
    row: usize,
}

impl Neighborhood for Around<'_, '_> {
    fn look(&self, offset: Offset) -> Option<Cell> {
        self.buffer
            .target(self.col, self.row, offset)
            .map(|idx| self.buffer.resolved(idx))
    }
}

/// Compute the next grid from the current one.
/// Deterministic: the same input always yields the same output.
pub fn step(current: &Grid) -> Grid {
    let (width, height) = current.dimensions();
    let mut buffer = StepBuffer::new(current);

    for row in 0..height {
        for col in 0..width {
            let kind = current.cells()[buffer.cursor];
            if !kind.is_empty() {
                let transition = rules::transition(kind, &Around { buffer: &buffer, col, row });
                buffer.apply(col, row, kind, transition);
            }
            buffer.cursor += 1;
        }
    }

    // Every cell is written exactly once or left as the empty default,
    // so the length always matches.
    Grid::from_cells(width, height, buffer.next)
        .unwrap_or_else(|err| unreachable!("step produced a malformed grid: {err}"))
}

/// Run `generations` steps in sequence
pub fn step_many(grid: Grid, generations: usize) -> Grid {
    (0..generations).fold(grid, |grid, _| step(&grid))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &[&str]) -> Grid {
        Grid::from_ascii(rows).unwrap()
    }

    fn assert_steps_to(before: &[&str], after: &[&str]) {
        let next = step(&grid(before));
        assert_eq!(next.to_ascii(), after, "\nbefore: {before:#?}");
    }

    #[test]
    fn test_empty_grid_stays_empty() {
        assert_steps_to(&["...", "..."], &["...", "..."]);
    }

    #[test]
    fn test_sand_falls_one_row() {
        assert_steps_to(
            &[".S.", "...", "...", "WWW"],
            &["...", ".S.", "...", "WWW"],
        );
    }

    #[test]
    fn test_column_of_sand_falls_together() {
        // The lower grain moves first and vacates the cell above it
        assert_steps_to(
            &[".S.", ".S.", "...", "WWW"],
            &["...", ".S.", ".S.", "WWW"],
        );
    }

    #[test]
    fn test_sand_slides_down_right_off_a_grain() {
        assert_steps_to(
            &[".S.", ".S.", "WWW"],
            &["...", ".SS", "WWW"],
        );
    }

    #[test]
    fn test_sand_swaps_with_water_below() {
        assert_steps_to(&["S", "~", "W"], &["~", "S", "W"]);
    }

    #[test]
    fn test_sand_swaps_with_diagonal_water() {
        assert_steps_to(
            &[".S.", "~SW", "WWW"],
            &[".~.", "SSW", "WWW"],
        );
    }

    #[test]
    fn test_water_spreads_sideways() {
        assert_steps_to(
            &["...", ".~.", "WWW"],
            &["...", "..~", "WWW"],
        );
    }

    #[test]
    fn test_water_lateral_priority_is_right_then_left() {
        assert_steps_to(&["W~.W", "WWWW"], &["W.~W", "WWWW"]);
        assert_steps_to(&["W.~W", "WWWW"], &["W~.W", "WWWW"]);
    }

    #[test]
    fn test_first_writer_wins_on_contested_cell() {
        // Both waters want (1, 1). The left one is scanned first and takes it;
        // the right one finds it claimed and stays put.
        assert_steps_to(
            &["~.~", "WWW"],
            &[".~~", "WWW"],
        );
    }

    #[test]
    fn test_earlier_column_claims_shared_destination() {
        // Both top grains can only slide into (1, 1); column 0 wins
        assert_steps_to(
            &["SS.", "S.W", "WWW"],
            &[".S.", "SSW", "WWW"],
        );
    }

    #[test]
    fn test_sand_displaces_water_that_moved_this_step() {
        // The water slides left first, then the grain above sinks through it
        assert_steps_to(
            &["S..", ".~W", "WWW"],
            &["~..", "S.W", "WWW"],
        );
    }

    #[test]
    fn test_particles_do_not_leak_past_edges() {
        assert_steps_to(&["~"], &["~"]);
        assert_steps_to(&["S", "."], &[".", "S"]);
        // Sand on the bottom row with no floor still stays on the grid
        assert_steps_to(&["..", "S."], &["..", "S."]);
    }

    #[test]
    fn test_walls_are_copied() {
        assert_steps_to(&["W.W", ".W."], &["W.W", ".W."]);
    }

    #[test]
    fn test_step_many_settles_sand() {
        let settled = step_many(grid(&["S", ".", ".", ".", "W"]), 10);
        assert_eq!(settled.to_ascii(), [".", ".", ".", "S", "W"]);
    }
}
