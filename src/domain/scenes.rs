//! Starting layouts for the sandbox.

use super::{Grid, ParticleKind};
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Seed for the scattered scene so that it looks the same on every load
const RAIN_SEED: u64 = 0x5A4D;
const RAIN_SAND_CHANCE: f64 = 0.10;
const RAIN_WATER_CHANCE: f64 = 0.05;

/// Half width of the opening at the bottom of the hourglass funnel
const HOURGLASS_GAP: usize = 2;

/// Named initial layouts
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Scene {
    /// Wall band along the bottom, everything else empty
    #[default]
    Floor,
    /// Floor plus walls on both sides
    Basin,
    /// Floor plus a funnel that drains into the middle
    Hourglass,
    /// Floor with sand and water scattered over the top half
    Rain,
}

impl Scene {
    /// Get all available scenes
    pub fn all() -> Vec<Scene> {
        vec![Scene::Floor, Scene::Basin, Scene::Hourglass, Scene::Rain]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Scene::Floor => "Floor",
            Scene::Basin => "Basin",
            Scene::Hourglass => "Hourglass",
            Scene::Rain => "Rain",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Scene::Floor => "Empty sandbox with a wall floor",
            Scene::Basin => "Walled container, good for water",
            Scene::Hourglass => "Funnel draining into the middle",
            Scene::Rain => "Scattered sand and water falling",
        }
    }

    /// Build a fresh grid for this scene
    pub fn build(&self, width: usize, height: usize, floor_thickness: usize) -> Grid {
        let mut grid = Grid::with_floor(width, height, floor_thickness);
        match self {
            Scene::Floor => {}
            Scene::Basin => {
                for row in 0..height {
                    stamp_wall(&mut grid, 0, row);
                    stamp_wall(&mut grid, width.saturating_sub(1), row);
                }
            }
            Scene::Hourglass => {
                let arm = (width / 2).saturating_sub(HOURGLASS_GAP);
                let base = height / 3;
                for k in 0..arm {
                    let row = base + (arm - 1 - k);
                    stamp_wall(&mut grid, k, row);
                    stamp_wall(&mut grid, width - 1 - k, row);
                }
            }
            Scene::Rain => {
                let mut rng = StdRng::seed_from_u64(RAIN_SEED);
                for row in height / 2..height {
                    for col in 0..width {
                        let roll: f64 = rng.random();
                        let kind = if roll < RAIN_SAND_CHANCE {
                            ParticleKind::Sand
                        } else if roll < RAIN_SAND_CHANCE + RAIN_WATER_CHANCE {
                            ParticleKind::Water
                        } else {
                            continue;
                        };
                        place(&mut grid, col, row, kind);
                    }
                }
            }
        }
        grid
    }
}

fn stamp_wall(grid: &mut Grid, col: usize, row: usize) {
    place(grid, col, row, ParticleKind::Wall);
}

/// Scene shapes are clipped to the grid, so small grids just lose pieces
fn place(grid: &mut Grid, col: usize, row: usize, kind: ParticleKind) {
    if let Err(err) = grid.set(col, row, kind) {
        log::trace!("scene piece clipped: {err}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scene_is_floor() {
        assert_eq!(Scene::default(), Scene::Floor);
        let grid = Scene::Floor.build(10, 8, 2);
        assert_eq!(grid.count(ParticleKind::Wall), 20);
        assert_eq!(grid.count(ParticleKind::Empty), 60);
    }

    #[test]
    fn test_basin_has_side_walls() {
        let grid = Scene::Basin.build(6, 5, 1);
        for row in 0..5 {
            assert_eq!(grid.get(0, row), Ok(ParticleKind::Wall));
            assert_eq!(grid.get(5, row), Ok(ParticleKind::Wall));
        }
        assert_eq!(grid.get(2, 3), Ok(ParticleKind::Empty));
    }

    #[test]
    fn test_hourglass_leaves_an_opening() {
        let grid = Scene::Hourglass.build(20, 30, 1);
        let base = 30 / 3;
        // The arms end short of the middle columns
        for col in 8..12 {
            assert_eq!(grid.get(col, base), Ok(ParticleKind::Empty));
        }
        assert_eq!(grid.get(7, base), Ok(ParticleKind::Wall));
        assert_eq!(grid.get(12, base), Ok(ParticleKind::Wall));
        assert_eq!(grid.get(0, base + 7), Ok(ParticleKind::Wall));
    }

    #[test]
    fn test_rain_is_reproducible_and_only_in_the_top_half() {
        let first = Scene::Rain.build(40, 40, 1);
        let second = Scene::Rain.build(40, 40, 1);
        assert_eq!(first, second);

        assert!(first.count(ParticleKind::Sand) > 0);
        assert!(first.count(ParticleKind::Water) > 0);
        assert!(first
            .iter_cells()
            .filter(|(_, _, cell)| cell.is_movable())
            .all(|(_, row, _)| row >= 20));
    }

    #[test]
    fn test_scenes_survive_tiny_grids() {
        for scene in Scene::all() {
            let grid = scene.build(1, 1, 3);
            assert_eq!(grid.dimensions(), (1, 1));
        }
    }

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<_> = Scene::all().iter().map(|s| s.name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), Scene::all().len());
    }

    #[test]
    fn test_every_scene_has_a_description() {
        for scene in Scene::all() {
            assert!(!scene.description().is_empty(), "{} has no description", scene.name());
        }
    }
}
