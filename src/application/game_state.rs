use crate::domain::{Coord, Life, Pattern, random_soup};
use super::{Controls, Settings};

/// Bounds for the step interval, in milliseconds
pub const MIN_STEP_INTERVAL_MS: u32 = 50;
pub const MAX_STEP_INTERVAL_MS: u32 = 2000;
/// How much one speed-up/speed-down press changes the interval
pub const STEP_INTERVAL_DELTA_MS: u32 = 50;
/// Chance of a cell being alive in random soup
pub const SOUP_DENSITY: f64 = 0.3;

/// GameState orchestrates the simulation.
/// It is the scheduler that decides when the universe advances,
/// and the gate through which user edits reach it.
pub struct GameState {
    pub life: Life,
    pub controls: Controls,
    pub step_interval_ms: u32,
    pub update_timer: f32,
}

impl GameState {
    pub fn new(settings: &Settings) -> Self {
        Self {
            life: Life::new(),
            controls: Controls::new(settings.start_paused, settings.start_in_draw_mode),
            step_interval_ms: settings
                .step_interval_ms
                .clamp(MIN_STEP_INTERVAL_MS, MAX_STEP_INTERVAL_MS),
            update_timer: 0.0,
        }
    }

    /// Pause or resume the scheduler
    pub fn toggle_pause(mut self) -> Self {
        self.controls.toggle_pause();
        self.update_timer = 0.0;
        log::info!(
            "{} at generation {}",
            if self.controls.is_paused() { "paused" } else { "running" },
            self.life.generation()
        );
        self
    }

    /// Switch the pointer between editing cells and panning
    pub fn toggle_draw_mode(mut self) -> Self {
        self.controls.toggle_draw_mode();
        log::info!("draw mode {}", if self.controls.is_draw_mode() { "on" } else { "off" });
        self
    }

    /// Wipe the universe. Only honoured in draw mode.
    pub fn clear(mut self) -> Self {
        if !self.controls.is_draw_mode() {
            log::debug!("clear ignored outside draw mode");
            return self;
        }
        self.life.clear();
        self.update_timer = 0.0;
        log::info!("cleared");
        self
    }

    /// Shorten the step interval while running
    pub fn speed_up(mut self) -> Self {
        if !self.controls.is_paused() {
            self.step_interval_ms = self
                .step_interval_ms
                .saturating_sub(STEP_INTERVAL_DELTA_MS)
                .max(MIN_STEP_INTERVAL_MS);
            log::debug!("step interval {} ms", self.step_interval_ms);
        }
        self
    }

    /// Lengthen the step interval while running
    pub fn speed_down(mut self) -> Self {
        if !self.controls.is_paused() {
            self.step_interval_ms = (self.step_interval_ms + STEP_INTERVAL_DELTA_MS)
                .min(MAX_STEP_INTERVAL_MS);
            log::debug!("step interval {} ms", self.step_interval_ms);
        }
        self
    }

    /// Advance exactly one generation, paused or not
    pub fn step(mut self) -> Self {
        self.life.update();
        self
    }

    /// Scatter random soup over the inclusive rectangle (draw mode only)
    pub fn randomize(mut self, min: Coord, max: Coord) -> Self {
        if self.controls.is_draw_mode() {
            random_soup(&mut self.life, min, max, SOUP_DENSITY, &mut rand::rng());
            log::info!("random soup over {min}..={max}, {} alive", self.life.living_count());
        }
        self
    }

    /// Stamp a preset centred on `at` (draw mode only)
    pub fn place_pattern(&mut self, pattern: &Pattern, at: Coord) {
        if self.controls.is_draw_mode() {
            pattern.place_centered(&mut self.life, at);
            log::info!("placed {} at {at}", pattern.name);
        }
    }

    /// Bring a cell to life from the pointer (draw mode only)
    pub fn paint(&mut self, at: Coord) {
        if self.controls.is_draw_mode() {
            self.life.live(at.x(), at.y());
        }
    }

    /// Kill a cell from the pointer (draw mode only)
    pub fn erase(&mut self, at: Coord) {
        if self.controls.is_draw_mode() {
            self.life.die(at.x(), at.y());
        }
    }

    /// Update simulation by one frame.
    /// Runs at most one generation per call once the step interval has elapsed.
    pub fn tick(mut self, delta_time: f32) -> Self {
        if self.controls.is_paused() {
            return self;
        }

        self.update_timer += delta_time;
        let interval = self.step_interval_ms as f32 / 1000.0;

        if self.update_timer >= interval {
            self.life.update();
            self.update_timer = 0.0;
        }

        self
    }
}
