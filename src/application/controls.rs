/// Controls holds the two user-facing mode flags.
/// Owned by `GameState`; the input handler flips them, the scheduler and
/// renderer read them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Controls {
    paused: bool,
    draw_mode: bool,
}

impl Controls {
    pub const fn new(paused: bool, draw_mode: bool) -> Self {
        Self { paused, draw_mode }
    }

    pub const fn is_paused(&self) -> bool {
        self.paused
    }

    /// In draw mode the pointer edits cells; otherwise it pans the view.
    pub const fn is_draw_mode(&self) -> bool {
        self.draw_mode
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    pub fn toggle_draw_mode(&mut self) {
        self.draw_mode = !self.draw_mode;
    }

    /// Text for the centre of the info bar
    pub const fn mode_label(&self) -> &'static str {
        match (self.paused, self.draw_mode) {
            (true, true) => "PAUSED / DRAW MODE",
            (true, false) => "PAUSED",
            (false, true) => "DRAW MODE",
            (false, false) => "",
        }
    }
}

impl Default for Controls {
    fn default() -> Self {
        Self::new(true, true)
    }
}
