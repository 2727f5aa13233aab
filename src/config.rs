use macroquad::prelude::Conf;
use crate::domain::{Scene, DEFAULT_BRUSH_RADIUS};

pub const WINDOW_TITLE: &str = "Sandy";
pub const WINDOW_WIDTH: i32 = 1000;
pub const WINDOW_HEIGHT: i32 = 700;

pub const GRID_WIDTH: usize = 256;
pub const GRID_HEIGHT: usize = 192;
pub const FLOOR_THICKNESS: usize = 2;
pub const UPDATES_PER_SECOND: f32 = 60.0;

/// Startup settings for a simulation run
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimConfig {
    pub width: usize,
    pub height: usize,
    pub floor_thickness: usize,
    pub brush_radius: usize,
    pub updates_per_second: f32,
    pub scene: Scene,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: GRID_WIDTH,
            height: GRID_HEIGHT,
            floor_thickness: FLOOR_THICKNESS,
            brush_radius: DEFAULT_BRUSH_RADIUS,
            updates_per_second: UPDATES_PER_SECOND,
            scene: Scene::default(),
        }
    }
}

impl SimConfig {
    pub fn with_size(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_floor_thickness(mut self, thickness: usize) -> Self {
        self.floor_thickness = thickness;
        self
    }

    pub fn with_brush_radius(mut self, radius: usize) -> Self {
        self.brush_radius = radius;
        self
    }

    pub fn with_updates_per_second(mut self, rate: f32) -> Self {
        self.updates_per_second = rate;
        self
    }

    pub fn with_scene(mut self, scene: Scene) -> Self {
        self.scene = scene;
        self
    }
}

/// Window settings for macroquad
pub fn window_conf() -> Conf {
    Conf {
        window_title: WINDOW_TITLE.to_owned(),
        window_width: WINDOW_WIDTH,
        window_height: WINDOW_HEIGHT,
        window_resizable: true,
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SimConfig::default();
        assert_eq!((config.width, config.height), (GRID_WIDTH, GRID_HEIGHT));
        assert_eq!(config.brush_radius, 5);
        assert_eq!(config.scene, Scene::Floor);
    }

    #[test]
    fn test_builder_overrides() {
        let config = SimConfig::default()
            .with_size(32, 16)
            .with_floor_thickness(1)
            .with_brush_radius(3)
            .with_updates_per_second(10.0)
            .with_scene(Scene::Basin);
        assert_eq!((config.width, config.height), (32, 16));
        assert_eq!(config.floor_thickness, 1);
        assert_eq!(config.brush_radius, 3);
        assert_eq!(config.updates_per_second, 10.0);
        assert_eq!(config.scene, Scene::Basin);
    }
}
