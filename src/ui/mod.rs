mod button;
mod dropdown;

pub use button::Button;
pub use dropdown::Dropdown;

use macroquad::prelude::{screen_height, screen_width};

pub const PANEL_WIDTH: f32 = 180.0;
pub const PANEL_MARGIN: f32 = 10.0;
pub const BUTTON_HEIGHT: f32 = 36.0;

/// Index of each control panel button, matching `create_buttons`
pub const PLAY_BUTTON: usize = 0;
pub const STEP_BUTTON: usize = 1;
pub const CLEAR_BUTTON: usize = 2;

/// Get the X position where the panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Width of the area the grid is drawn into
pub fn grid_area_width() -> f32 {
    screen_width() - PANEL_WIDTH
}

pub fn grid_area_height() -> f32 {
    screen_height()
}

/// Create control panel buttons with the standard layout
pub fn create_buttons() -> Vec<Button> {
    let x = panel_x() + PANEL_MARGIN;
    let width = PANEL_WIDTH - 2.0 * PANEL_MARGIN;
    vec![
        Button::new(x, 90.0, width, BUTTON_HEIGHT, "Play/Pause"),
        Button::new(x, 135.0, width, BUTTON_HEIGHT, "Step"),
        Button::new(x, 180.0, width, BUTTON_HEIGHT, "Clear"),
    ]
}
