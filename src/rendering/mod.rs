use macroquad::prelude::*;
use crate::application::{GameState, Viewport};
use crate::domain::Life;

pub const INFO_BAR_HEIGHT: f32 = 20.0;
const INFO_FONT_SIZE: u16 = 16;

const BACKGROUND_COLOR: Color = WHITE;
const CELL_COLOR: Color = BLACK;
const MARGIN_COLOR: Color = GRAY;
const INFO_BACKGROUND_COLOR: Color = BLACK;
const INFO_TEXT_COLOR: Color = WHITE;
const ORIGIN_COLOR: Color = RED;

/// Info bar texts: left, centre, right
pub fn info_texts(state: &GameState) -> (String, &'static str, String) {
    (
        format!("GENERATION {}", state.life.generation()),
        state.controls.mode_label(),
        format!("LIVING CELLS {}", state.life.living_count()),
    )
}

/// Draw grid lines, living cells and the origin marker
pub fn draw_universe(life: &Life, viewport: &Viewport) {
    let (width, height) = viewport.size();
    let (width, height) = (width as f32, height as f32);
    let size = viewport.cell_size();
    let margin = viewport.margin() as f32;

    draw_rectangle(0.0, 0.0, width, height, BACKGROUND_COLOR);

    if margin > 0.0 {
        // First line sits where the origin's column/row boundary falls on screen
        let (origin_x, origin_y) = viewport.origin();
        let step = size as f32;
        let mut x = origin_x.rem_euclid(size) as f32;
        while x < width {
            draw_rectangle(x, 0.0, margin, height, MARGIN_COLOR);
            x += step;
        }
        let mut y = origin_y.rem_euclid(size) as f32;
        while y < height {
            draw_rectangle(0.0, y, width, margin, MARGIN_COLOR);
            y += step;
        }
    }

    let (min, max) = viewport.visible_cells();
    let side = (size as f32 - margin).max(1.0);
    life.cells()
        .filter(|c| (min.x()..=max.x()).contains(&c.x()) && (min.y()..=max.y()).contains(&c.y()))
        .for_each(|c| {
            let (sx, sy) = viewport.cell_to_screen(c);
            draw_rectangle(sx + margin, sy + margin, side, side, CELL_COLOR);
        });

    let (origin_x, origin_y) = viewport.origin();
    draw_rectangle(origin_x as f32 - 1.0, origin_y as f32 - 1.0, 3.0, 3.0, ORIGIN_COLOR);
}

/// Draw the black bar with generation, mode and population
pub fn draw_info_bar(state: &GameState, viewport: &Viewport) {
    let width = viewport.size().0 as f32;
    let (generation, mode, living) = info_texts(state);
    let baseline = 14.0;
    let font_size = INFO_FONT_SIZE as f32;

    draw_rectangle(0.0, 0.0, width, INFO_BAR_HEIGHT, INFO_BACKGROUND_COLOR);

    draw_text(&generation, 3.0, baseline, font_size, INFO_TEXT_COLOR);

    let mode_width = measure_text(mode, None, INFO_FONT_SIZE, 1.0).width;
    draw_text(mode, (width - mode_width) / 2.0, baseline, font_size, INFO_TEXT_COLOR);

    let living_width = measure_text(&living, None, INFO_FONT_SIZE, 1.0).width;
    draw_text(&living, width - 3.0 - living_width, baseline, font_size, INFO_TEXT_COLOR);
}
