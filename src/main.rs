use macroquad::prelude::*;
use sparse_life::{
    GameState, Settings, Viewport, presets,
    input::{self, InputState},
    rendering,
};

fn window_conf() -> Conf {
    let settings = Settings::default();
    let (width, height) = settings.view_size();
    Conf {
        window_title: settings.title.to_owned(),
        window_width: width as i32,
        window_height: height as i32,
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let settings = Settings::default();
    let mut state = GameState::new(&settings);
    let mut viewport =
        Viewport::new(screen_width() as i64, screen_height() as i64, settings.cell_size);
    let mut pointer = InputState::default();
    let patterns = presets::all_patterns();

    log::info!(
        "starting: {} px cells, {} ms per generation, {} presets on keys 1-{}",
        viewport.cell_size(),
        state.step_interval_ms,
        patterns.len(),
        patterns.len(),
    );

    loop {
        viewport.resize(screen_width() as i64, screen_height() as i64);
        let mouse_pos = mouse_position();

        // Input
        input::handle_zoom(&mut viewport, mouse_pos);
        input::handle_mouse(&mut state, &mut viewport, &mut pointer, mouse_pos);
        state = input::process_keyboard_input(state, &mut viewport, &patterns, mouse_pos);

        // Scheduler
        state = state.tick(get_frame_time());

        // Render
        clear_background(WHITE);
        rendering::draw_universe(&state.life, &viewport);
        rendering::draw_info_bar(&state, &viewport);

        next_frame().await;
    }
}
