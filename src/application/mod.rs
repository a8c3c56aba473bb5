mod controls;
mod game_state;
mod settings;
mod viewport;

pub use controls::Controls;
pub use game_state::{
    GameState, MAX_STEP_INTERVAL_MS, MIN_STEP_INTERVAL_MS, SOUP_DENSITY, STEP_INTERVAL_DELTA_MS,
};
pub use settings::Settings;
pub use viewport::{MAX_CELL_SIZE, Viewport};
