/// Start-up configuration for the interactive front end.
/// Defaults give a 40×40 cell view at 16 px per cell, stepping twice a second.
#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub title: &'static str,
    /// Pixel size of one cell before any zoom
    pub cell_size: i64,
    /// Visible cells across and down at start
    pub columns: i64,
    pub rows: i64,
    /// Milliseconds between generations while running
    pub step_interval_ms: u32,
    pub start_paused: bool,
    pub start_in_draw_mode: bool,
}

impl Settings {
    /// Initial window size in pixels
    pub const fn view_size(&self) -> (i64, i64) {
        (self.columns * self.cell_size, self.rows * self.cell_size)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            title: "Life",
            cell_size: 16,
            columns: 40,
            rows: 40,
            step_interval_ms: 500,
            start_paused: true,
            start_in_draw_mode: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_view_size() {
        assert_eq!(Settings::default().view_size(), (640, 640));
    }
}
