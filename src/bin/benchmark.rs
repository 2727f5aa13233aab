//! Step throughput benchmark across grid sizes

use std::time::Instant;
use sandy::domain::{step, Grid, Scene};

/// Average milliseconds per step over `iterations` steps of `scene`
fn benchmark_scene(scene: Scene, size: usize, iterations: u32) -> f64 {
    let mut grid = scene.build(size, size, 2);

    let start = Instant::now();
    for _ in 0..iterations {
        grid = step(&grid);
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn benchmark_color_buffer(size: usize, iterations: u32) -> f64 {
    let grid = Scene::Rain.build(size, size, 2);

    let start = Instant::now();
    for _ in 0..iterations {
        std::hint::black_box(grid.color_buffer());
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn throughput(size: usize, ms: f64) -> f64 {
    (size * size) as f64 / (ms / 1000.0) / 1_000_000.0
}

fn main() {
    println!("=== Sandy Step Benchmark ===\n");

    let sizes = [64, 128, 256, 512, 1024];
    let iterations = 20;

    println!("{:>10} {:>12} {:>12} {:>12} {:>14}",
        "Size", "Floor", "Rain", "Colors", "Rain Mcells/s");
    println!("{:-<64}", "");

    for size in sizes {
        let floor_ms = benchmark_scene(Scene::Floor, size, iterations);
        let rain_ms = benchmark_scene(Scene::Rain, size, iterations);
        let colors_ms = benchmark_color_buffer(size, iterations);

        println!(
            "{:>10} {:>12.3} {:>12.3} {:>12.3} {:>14.1}",
            format!("{}x{}", size, size),
            floor_ms,
            rain_ms,
            colors_ms,
            throughput(size, rain_ms)
        );
    }

    let settled = Grid::with_floor(512, 512, 2);
    println!("\nMemory per 512x512 grid: {} bytes", std::mem::size_of_val(settled.cells()));
}
