use rand::{Rng, SeedableRng, rngs::StdRng};
use sandy::domain::{paint, step, step_many, Grid, ParticleKind, Scene};

/// Random mix of all four kinds
fn random_grid(seed: u64, width: usize, height: usize) -> Grid {
    let mut rng = StdRng::seed_from_u64(seed);
    let cells = (0..width * height)
        .map(|_| ParticleKind::ALL[rng.random_range(0..ParticleKind::ALL.len())])
        .collect();
    Grid::from_cells(width, height, cells).unwrap()
}

fn grid(rows: &[&str]) -> Grid {
    Grid::from_ascii(rows).unwrap()
}

#[test]
fn color_round_trip_for_every_kind() {
    for kind in ParticleKind::ALL {
        assert_eq!(ParticleKind::from_rgba(kind.to_rgba()), kind);
    }
    assert_eq!(ParticleKind::from_rgba([12, 34, 56, 255]), ParticleKind::Empty);
}

#[test]
fn walls_never_change_under_step() {
    for seed in 0..20 {
        let before = random_grid(seed, 17, 13);
        let after = step(&before);
        for ((_, _, old), (col, row, new)) in before.iter_cells().zip(after.iter_cells()) {
            assert_eq!(
                old == ParticleKind::Wall,
                new == ParticleKind::Wall,
                "seed {seed}: wall changed at ({col}, {row})"
            );
        }
    }
}

#[test]
fn steps_conserve_every_kind() {
    for seed in 0..20 {
        let mut grid = random_grid(seed, 23, 19);
        let population = grid.population();
        for _ in 0..30 {
            grid = step(&grid);
            assert_eq!(grid.population(), population, "seed {seed}");
        }
    }
}

#[test]
fn single_grain_keeps_its_count_while_falling_and_after_landing() {
    let mut grid = Scene::Floor.build(9, 12, 1);
    grid.set(4, 11, ParticleKind::Sand).unwrap();
    for _ in 0..20 {
        grid = step(&grid);
        assert_eq!(grid.count(ParticleKind::Sand), 1);
    }
    assert_eq!(grid.get(4, 1), Ok(ParticleKind::Sand));
}

#[test]
fn sand_falls_one_row_per_step_then_rests_on_the_floor() {
    // Floor at row 0, grain n rows above it
    let n = 7;
    let mut grid = Grid::with_floor(3, n + 1, 1);
    grid.set(1, n, ParticleKind::Sand).unwrap();

    for expected_row in (1..n).rev() {
        grid = step(&grid);
        assert_eq!(grid.get(1, expected_row), Ok(ParticleKind::Sand));
    }

    let settled = grid.clone();
    assert_eq!(step_many(grid, 5), settled);
}

#[test]
fn blocked_sand_prefers_down_right() {
    let after = step(&grid(&[
        "...",
        ".S.",
        ".S.",
        "WWW",
    ]));
    assert_eq!(after.get(2, 1), Ok(ParticleKind::Sand));
    assert_eq!(after.get(0, 1), Ok(ParticleKind::Empty));
}

#[test]
fn sand_and_water_trade_places_in_one_step() {
    let after = step(&grid(&["WSW", "W~W", "WWW"]));
    assert_eq!(after.to_ascii(), ["W~W", "WSW", "WWW"]);
}

#[test]
fn brush_paints_the_square_and_nothing_else() {
    let before = Scene::Basin.build(24, 24, 2);
    let after = paint(&before, 10, 10, ParticleKind::Sand, 5);

    for (col, row, cell) in after.iter_cells() {
        let inside = col.abs_diff(10) < 5 && row.abs_diff(10) < 5;
        let expected = if inside { ParticleKind::Sand } else { before.get(col, row).unwrap() };
        assert_eq!(cell, expected, "({col}, {row})");
    }
}

#[test]
fn step_is_deterministic() {
    for seed in 0..10 {
        let input = random_grid(seed, 31, 29);
        assert_eq!(step(&input), step(&input.clone()));
    }
}

#[test]
fn water_fills_a_basin_floor_instead_of_stacking() {
    let mut grid = Scene::Basin.build(10, 10, 1);
    for col in 1..9 {
        grid.set(col, 8, ParticleKind::Water).unwrap();
    }
    let settled = step_many(grid, 40);
    // Eight drops spread across the eight interior cells of row 1
    for col in 1..9 {
        assert_eq!(settled.get(col, 1), Ok(ParticleKind::Water));
    }
}
