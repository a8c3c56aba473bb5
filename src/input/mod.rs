use macroquad::prelude::*;
use crate::application::{GameState, Viewport};
use crate::domain::Pattern;

/// Pointer state carried between frames
#[derive(Default)]
pub struct InputState {
    last_mouse: Option<(f32, f32)>,
}

/// Keys that place a preset at the cursor, in `all_patterns()` order
const PATTERN_KEYS: [KeyCode; 9] = [
    KeyCode::Key1,
    KeyCode::Key2,
    KeyCode::Key3,
    KeyCode::Key4,
    KeyCode::Key5,
    KeyCode::Key6,
    KeyCode::Key7,
    KeyCode::Key8,
    KeyCode::Key9,
];

fn ctrl_down() -> bool {
    is_key_down(KeyCode::LeftControl) || is_key_down(KeyCode::RightControl)
}

/// Zoom about the cursor with the mouse wheel
pub fn handle_zoom(viewport: &mut Viewport, mouse_pos: (f32, f32)) {
    let wheel = mouse_wheel().1;
    let (cx, cy) = (mouse_pos.0 as i64, mouse_pos.1 as i64);
    if wheel > 0.0 {
        viewport.zoom_in_at(cx, cy);
    } else if wheel < 0.0 {
        viewport.zoom_out_at(cx, cy);
    }
}

/// Paint/erase in draw mode, drag to pan otherwise
pub fn handle_mouse(
    state: &mut GameState,
    viewport: &mut Viewport,
    input: &mut InputState,
    mouse_pos: (f32, f32),
) {
    let cell = viewport.screen_to_cell(mouse_pos.0, mouse_pos.1);

    if state.controls.is_draw_mode() {
        if is_mouse_button_down(MouseButton::Left) {
            state.paint(cell);
        } else if is_mouse_button_down(MouseButton::Right) {
            state.erase(cell);
        }
    } else if is_mouse_button_down(MouseButton::Left) {
        if let Some(last) = input.last_mouse {
            let dx = mouse_pos.0 as i64 - last.0 as i64;
            let dy = mouse_pos.1 as i64 - last.1 as i64;
            viewport.pan(dx, dy);
        }
    }

    input.last_mouse = Some(mouse_pos);
}

/// Process keyboard input functionally
pub fn process_keyboard_input(
    state: GameState,
    viewport: &mut Viewport,
    patterns: &[Pattern],
    mouse_pos: (f32, f32),
) -> GameState {
    type KeyAction = (KeyCode, fn(GameState) -> GameState);

    let actions: [KeyAction; 5] = [
        (KeyCode::P, GameState::toggle_pause),
        (KeyCode::Pause, GameState::toggle_pause),
        (KeyCode::Space, GameState::toggle_draw_mode),
        (KeyCode::Delete, GameState::clear),
        (KeyCode::N, GameState::step),
    ];

    let mut state = actions.iter().fold(state, |s, (key, action)| {
        if is_key_pressed(*key) { action(s) } else { s }
    });

    let plus = [KeyCode::Equal, KeyCode::KpAdd].into_iter().any(is_key_pressed);
    let minus = [KeyCode::Minus, KeyCode::KpSubtract].into_iter().any(is_key_pressed);
    if plus {
        if ctrl_down() {
            state = state.speed_up();
        } else {
            viewport.zoom_in();
        }
    }
    if minus {
        if ctrl_down() {
            state = state.speed_down();
        } else {
            viewport.zoom_out();
        }
    }

    if is_key_pressed(KeyCode::R) {
        let (min, max) = viewport.visible_cells();
        state = state.randomize(min, max);
    }

    let cursor = viewport.screen_to_cell(mouse_pos.0, mouse_pos.1);
    for (key, pattern) in PATTERN_KEYS.iter().zip(patterns) {
        if is_key_pressed(*key) {
            state.place_pattern(pattern, cursor);
        }
    }

    state
}
