use macroquad::prelude::*;
use sandy::{
    config::window_conf,
    input, rendering,
    rendering::GridTexture,
    ui::{self, Dropdown},
    Scene, SimConfig, Simulation, Viewport,
};

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut state = Simulation::new(SimConfig::default());
    let mut texture = GridTexture::new(&state.grid);

    let scenes = Scene::all();
    let scene_items: Vec<String> = scenes.iter().map(|s| s.name().to_string()).collect();
    let mut scene_dropdown = Dropdown::new(
        ui::panel_x() + ui::PANEL_MARGIN,
        40.0,
        ui::PANEL_WIDTH - 2.0 * ui::PANEL_MARGIN,
        "Scene",
        scene_items,
    );

    loop {
        if input::quit_requested() {
            log::info!("Quit requested after {} frames", state.frame);
            break;
        }

        let mouse_pos = mouse_position();
        let (grid_width, grid_height) = state.grid.dimensions();
        let viewport = Viewport::fit(grid_width, grid_height, ui::grid_area_width(), ui::grid_area_height());

        // Panel widgets follow the window edge
        scene_dropdown.set_position(ui::panel_x() + ui::PANEL_MARGIN, 40.0);
        let buttons = ui::create_buttons();

        if scene_dropdown.update(mouse_pos) {
            state = state.load_scene(scenes[scene_dropdown.selected()]);
        }
        if let Some(idx) = scenes.iter().position(|&s| s == state.scene) {
            scene_dropdown.set_selected(idx);
        }

        state = input::process_button_clicks(state, &buttons, mouse_pos);
        state = input::process_keyboard_input(state);

        let frame_input = input::sample_frame_input(&viewport, mouse_pos, scene_dropdown.is_open());
        state = state.tick(frame_input, get_frame_time());

        let render_start = std::time::Instant::now();
        texture.upload(&state.grid);
        rendering::clear_frame();
        texture.draw(&viewport);
        if let Some(cursor) = frame_input.cursor {
            rendering::draw_brush_outline(&viewport, cursor, &state.brush);
        }
        rendering::draw_controls(&state, &buttons, &scene_dropdown, mouse_pos);
        state.last_render_time_ms = render_start.elapsed().as_secs_f32() * 1000.0;

        next_frame().await;
    }
}
