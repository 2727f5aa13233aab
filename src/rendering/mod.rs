use macroquad::prelude::*;
use crate::application::{Simulation, Viewport};
use crate::domain::{Brush, Grid, ParticleKind};
use crate::ui::{panel_x, Button, Dropdown, PANEL_MARGIN, PANEL_WIDTH};

const BACKDROP: Color = Color::new(0.2, 0.3, 0.3, 1.0);
const BRUSH_OUTLINE_ALPHA: f32 = 0.6;
const SCENE_NOTE: Color = Color::new(0.7, 0.7, 0.7, 1.0);

/// Format large numbers with K/M suffixes
fn format_number(n: usize) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        format!("{}", n)
    }
}

/// GPU copy of the grid's color encoding, refreshed once per frame
pub struct GridTexture {
    image: Image,
    texture: Texture2D,
}

impl GridTexture {
    pub fn new(grid: &Grid) -> Self {
        let (width, height) = grid.dimensions();
        let image = Image {
            bytes: grid.rgba8_buffer(),
            width: width as u16,
            height: height as u16,
        };
        let texture = Texture2D::from_image(&image);
        texture.set_filter(FilterMode::Nearest);
        Self { image, texture }
    }

    /// Upload the grid's colors. The grid must keep the size it was created with.
    pub fn upload(&mut self, grid: &Grid) {
        self.image.bytes = grid.rgba8_buffer();
        self.texture.update(&self.image);
    }

    /// Draw the grid. Row 0 is stored first but belongs at the bottom,
    /// hence the vertical flip.
    pub fn draw(&self, viewport: &Viewport) {
        let (x, y, width, height) = viewport.grid_rect();
        draw_texture_ex(
            &self.texture,
            x,
            y,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(width, height)),
                flip_y: true,
                ..Default::default()
            },
        );
    }
}

/// Clear the frame behind the grid
pub fn clear_frame() {
    clear_background(BACKDROP);
}

/// Screen rectangle (x, y, side) of the square the brush would paint
fn brush_square(viewport: &Viewport, cursor: (i64, i64), radius: usize) -> (f32, f32, f32) {
    let reach = i64::try_from(radius.saturating_sub(1)).unwrap_or(i64::MAX);
    let (left, top) = viewport.grid_to_screen(
        cursor.0.saturating_sub(reach),
        cursor.1.saturating_add(reach),
    );
    let side = (2.0 * reach as f32 + 1.0) * viewport.cell_size;
    (left, top, side)
}

/// Outline the square the brush would paint, tinted with its last kind
pub fn draw_brush_outline(viewport: &Viewport, cursor: (i64, i64), brush: &Brush) {
    let (left, top, side) = brush_square(viewport, cursor, brush.radius);
    let color = Color { a: BRUSH_OUTLINE_ALPHA, ..particle_color(brush.kind) };
    draw_rectangle_lines(left, top, side, side, 1.0, color);
}

fn particle_color(kind: ParticleKind) -> Color {
    let [r, g, b, a] = kind.to_rgba();
    Color::from_rgba(r, g, b, a)
}

/// Draw the control panel with buttons, the scene selector and stats
pub fn draw_controls(
    state: &Simulation,
    buttons: &[Button],
    scene_dropdown: &Dropdown,
    mouse_pos: (f32, f32),
) {
    let px = panel_x();
    let x = px + PANEL_MARGIN;
    draw_rectangle(px, 0.0, PANEL_WIDTH, screen_height(), Color::from_rgba(30, 30, 30, 255));

    buttons.iter().for_each(|btn| btn.draw(mouse_pos));
    draw_text(state.scene.description(), x, 228.0, 12.0, SCENE_NOTE);

    let (status, status_color) = if state.is_running {
        ("Running", Color::from_rgba(0, 255, 0, 255))
    } else {
        ("Paused", Color::from_rgba(255, 165, 0, 255))
    };

    let (gw, gh) = state.grid.dimensions();
    let labels = [
        (format!("Status: {}", status), 240.0, 16.0, status_color),
        (format!("Generation: {}", state.generation), 260.0, 14.0, WHITE),
        (format!("Frame: {}", state.frame), 276.0, 14.0, GRAY),
        (format!("Speed: {:.0} steps/s", state.updates_per_second), 292.0, 14.0, GRAY),
        (format!("Brush: {} r{}", state.brush.kind.name(), state.brush.radius), 308.0, 14.0, GRAY),
        (format!("Grid: {}x{} ({})", gw, gh, format_number(gw * gh)), 324.0, 12.0, GRAY),
        (format!("Step: {:.2}ms", state.last_step_time_ms), 340.0, 12.0, GRAY),
        (format!("Render: {:.2}ms  FPS: {}", state.last_render_time_ms, get_fps()), 354.0, 12.0, GRAY),
    ];
    labels.iter().for_each(|(text, y, size, color)| {
        draw_text(text, x, *y, *size, *color);
    });

    // Particle counts with a swatch of each kind's color
    let population = state.grid.population();
    for (i, kind) in [ParticleKind::Sand, ParticleKind::Water, ParticleKind::Wall].into_iter().enumerate() {
        let y = 380.0 + i as f32 * 18.0;
        draw_rectangle(x, y - 10.0, 10.0, 10.0, particle_color(kind));
        draw_text(
            &format!("{}: {}", kind.name(), format_number(population.of(kind))),
            x + 16.0,
            y,
            14.0,
            WHITE,
        );
    }

    let help = [
        "Controls:",
        "LMB: Sand  RMB: Water",
        "Space: Play  N: Step",
        "C: Clear  1-4: Scene",
        "Up/Down: Speed",
        "[ / ]: Brush size",
        "Esc: Quit",
    ];
    help.iter().enumerate().for_each(|(i, line)| {
        let (size, color) = if i == 0 { (14.0, WHITE) } else { (12.0, GRAY) };
        draw_text(line, x, 450.0 + i as f32 * 14.0, size, color);
    });

    // Dropdown last so its menu draws over everything else
    scene_dropdown.draw(mouse_pos);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(49_152), "49.2K");
        assert_eq!(format_number(2_500_000), "2.5M");
    }

    #[test]
    fn test_brush_square_covers_painted_cells() {
        let viewport = Viewport::fit(10, 10, 100.0, 100.0);
        // Radius 2 around (3, 5) spans cols 2..=4 and rows 4..=6
        assert_eq!(brush_square(&viewport, (3, 5), 2), (20.0, 30.0, 30.0));
        assert_eq!(brush_square(&viewport, (0, 0), 1), (0.0, 90.0, 10.0));
    }

    #[test]
    fn test_particle_color_matches_encoding() {
        let sand = particle_color(ParticleKind::Sand);
        assert_eq!(sand, Color::from_rgba(244, 228, 101, 255));
    }
}
