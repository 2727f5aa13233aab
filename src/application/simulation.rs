use crate::config::SimConfig;
use crate::domain::{step, Brush, Grid, ParticleKind, Scene, MAX_BRUSH_RADIUS};

const MIN_UPDATES_PER_SECOND: f32 = 1.0;
const MAX_UPDATES_PER_SECOND: f32 = 240.0;

/// How often step timings are written to the debug log, in seconds
const TIMING_LOG_INTERVAL: f32 = 1.0;

/// What the host sampled from its input devices this frame
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameInput {
    /// Grid cell under the pointer; may lie outside the grid
    pub cursor: Option<(i64, i64)>,
    /// Particle kind to paint, if a paint button is held
    pub brush_kind: Option<ParticleKind>,
}

impl FrameInput {
    pub const fn idle() -> Self {
        Self { cursor: None, brush_kind: None }
    }

    pub const fn painting(col: i64, row: i64, kind: ParticleKind) -> Self {
        Self { cursor: Some((col, row)), brush_kind: Some(kind) }
    }
}

/// Simulation orchestrates the sandbox.
/// It owns the current grid and is the only place where it gets replaced.
pub struct Simulation {
    pub grid: Grid,
    pub config: SimConfig,
    pub scene: Scene,
    pub is_running: bool,
    /// Ticks seen so far, including paused ones. The step itself is a pure
    /// function of the grid, so the counter stays here until a rule needs it.
    pub frame: u64,
    /// Automaton steps applied since the scene was loaded
    pub generation: u64,
    pub update_timer: f32,
    pub updates_per_second: f32,
    /// Last painted kind and the current radius
    pub brush: Brush,
    pub last_step_time_ms: f32,
    pub last_render_time_ms: f32,
    timing_log_timer: f32,
}

impl Simulation {
    /// Create a running simulation with the configured scene loaded
    pub fn new(config: SimConfig) -> Self {
        log::info!(
            "Starting {}x{} sandbox with scene {}",
            config.width,
            config.height,
            config.scene.name()
        );
        Self {
            grid: config.scene.build(config.width, config.height, config.floor_thickness),
            config,
            scene: config.scene,
            is_running: true,
            frame: 0,
            generation: 0,
            update_timer: 0.0,
            updates_per_second: config.updates_per_second,
            brush: Brush::default().with_radius(config.brush_radius.clamp(1, MAX_BRUSH_RADIUS)),
            last_step_time_ms: 0.0,
            last_render_time_ms: 0.0,
            timing_log_timer: 0.0,
        }
    }

    /// Set running state (builder pattern)
    pub fn with_running(mut self, running: bool) -> Self {
        self.is_running = running;
        self
    }

    /// Toggle play/pause state
    pub fn toggle_running(mut self) -> Self {
        self.is_running = !self.is_running;
        log::debug!("Simulation {}", if self.is_running { "resumed" } else { "paused" });
        self
    }

    /// Replace the grid with a fresh copy of `scene`
    pub fn load_scene(mut self, scene: Scene) -> Self {
        log::info!("Loading scene {}", scene.name());
        self.scene = scene;
        self.grid = scene.build(self.config.width, self.config.height, self.config.floor_thickness);
        self.generation = 0;
        self
    }

    /// Rebuild the current scene
    pub fn clear(self) -> Self {
        let scene = self.scene;
        self.load_scene(scene)
    }

    /// Adjust simulation speed
    pub fn adjust_speed(mut self, delta: f32) -> Self {
        self.updates_per_second = (self.updates_per_second + delta)
            .clamp(MIN_UPDATES_PER_SECOND, MAX_UPDATES_PER_SECOND);
        log::debug!("Speed set to {:.0} steps/s", self.updates_per_second);
        self
    }

    /// Grow or shrink the brush
    pub fn adjust_brush_radius(mut self, delta: i64) -> Self {
        let radius = (self.brush.radius as i64 + delta).clamp(1, MAX_BRUSH_RADIUS as i64);
        self.brush = self.brush.with_radius(radius as usize);
        log::debug!("Brush radius set to {}", self.brush.radius);
        self
    }

    /// Stamp the brush if the input carries both a cursor and a kind
    pub fn paint(mut self, input: &FrameInput) -> Self {
        if let (Some((col, row)), Some(kind)) = (input.cursor, input.brush_kind) {
            self.brush = self.brush.with_kind(kind);
            self.grid = self.brush.stamp(&self.grid, col, row);
        }
        self
    }

    /// Apply one automaton step regardless of pacing or pause state
    pub fn single_step(mut self) -> Self {
        let start = std::time::Instant::now();
        self.grid = step(&self.grid);
        self.last_step_time_ms = start.elapsed().as_secs_f32() * 1000.0;
        self.generation += 1;
        self
    }

    /// One unpaced tick: paint, step when running, count the frame
    pub fn advance(mut self, input: FrameInput) -> Self {
        self = self.paint(&input);
        if self.is_running {
            self = self.single_step();
        }
        self.frame += 1;
        self
    }

    /// Update simulation by one host frame.
    /// Painting follows the pointer every frame; steps are paced at
    /// `updates_per_second`.
    pub fn tick(mut self, input: FrameInput, delta_time: f32) -> Self {
        self = self.paint(&input);

        if self.is_running {
            self.update_timer += delta_time;
            let update_interval = 1.0 / self.updates_per_second;

            if self.update_timer >= update_interval {
                self = self.single_step();
                self.update_timer = 0.0;
            }

            self.timing_log_timer += delta_time;
            if self.timing_log_timer >= TIMING_LOG_INTERVAL {
                log::debug!(
                    "generation {} step {:.2}ms render {:.2}ms",
                    self.generation,
                    self.last_step_time_ms,
                    self.last_render_time_ms
                );
                self.timing_log_timer = 0.0;
            }
        }

        self.frame += 1;
        self
    }
}
