use macroquad::prelude::*;
use crate::application::{FrameInput, Simulation, Viewport};
use crate::domain::{ParticleKind, Scene};
use crate::ui::{self, grid_area_width};

/// Which particle the held mouse buttons paint. Left wins if both are held.
pub const fn brush_kind_for(left: bool, right: bool) -> Option<ParticleKind> {
    match (left, right) {
        (true, _) => Some(ParticleKind::Sand),
        (false, true) => Some(ParticleKind::Water),
        (false, false) => None,
    }
}

/// Sample pointer state into the input the simulation consumes
pub fn sample_frame_input(viewport: &Viewport, mouse_pos: (f32, f32), ui_captured: bool) -> FrameInput {
    if ui_captured || mouse_pos.0 >= grid_area_width() {
        return FrameInput::idle();
    }

    FrameInput {
        cursor: Some(viewport.screen_to_grid(mouse_pos.0, mouse_pos.1)),
        brush_kind: brush_kind_for(
            is_mouse_button_down(MouseButton::Left),
            is_mouse_button_down(MouseButton::Right),
        ),
    }
}

/// Process keyboard input functionally
pub fn process_keyboard_input(state: Simulation) -> Simulation {
    type KeyAction = (KeyCode, fn(Simulation) -> Simulation);

    let actions: [KeyAction; 11] = [
        (KeyCode::Space, Simulation::toggle_running),
        (KeyCode::N, Simulation::single_step),
        (KeyCode::C, Simulation::clear),
        (KeyCode::Key1, |s| s.load_scene(Scene::Floor)),
        (KeyCode::Key2, |s| s.load_scene(Scene::Basin)),
        (KeyCode::Key3, |s| s.load_scene(Scene::Hourglass)),
        (KeyCode::Key4, |s| s.load_scene(Scene::Rain)),
        (KeyCode::Up, |s| s.adjust_speed(10.0)),
        (KeyCode::Down, |s| s.adjust_speed(-10.0)),
        (KeyCode::RightBracket, |s| s.adjust_brush_radius(1)),
        (KeyCode::LeftBracket, |s| s.adjust_brush_radius(-1)),
    ];

    actions.iter().fold(state, |s, (key, action)| {
        if is_key_pressed(*key) { action(s) } else { s }
    })
}

/// Process button clicks functionally
pub fn process_button_clicks(
    state: Simulation,
    buttons: &[ui::Button],
    mouse_pos: (f32, f32),
) -> Simulation {
    buttons
        .iter()
        .enumerate()
        .fold(state, |s, (idx, btn)| {
            if !btn.is_clicked(mouse_pos) {
                return s;
            }
            match idx {
                ui::PLAY_BUTTON => s.toggle_running(),
                ui::STEP_BUTTON => s.single_step(),
                ui::CLEAR_BUTTON => s.clear(),
                _ => s,
            }
        })
}

pub fn quit_requested() -> bool {
    is_key_pressed(KeyCode::Escape)
}
