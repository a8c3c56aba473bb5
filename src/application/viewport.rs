use crate::domain::Coord;

/// Largest cell size zoom-in will reach, in pixels
pub const MAX_CELL_SIZE: i64 = 512;

/// Viewport maps cells on the plane to pixels in the window.
/// All math is integer: `origin` is the pixel where cell (0, 0)'s
/// top-left corner sits, and may lie outside the window.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Viewport {
    width: i64,
    height: i64,
    cell_size: i64,
    margin: i64, // Grid line thickness, 0 when zoomed far out
    origin_x: i64,
    origin_y: i64,
}

impl Viewport {
    /// Window of `width`×`height` pixels with cell (0, 0) at its centre
    pub fn new(width: i64, height: i64, cell_size: i64) -> Self {
        Self {
            width,
            height,
            cell_size: cell_size.clamp(1, MAX_CELL_SIZE),
            margin: 1,
            origin_x: width / 2,
            origin_y: height / 2,
        }
    }

    pub const fn cell_size(&self) -> i64 {
        self.cell_size
    }

    pub const fn margin(&self) -> i64 {
        self.margin
    }

    pub const fn origin(&self) -> (i64, i64) {
        (self.origin_x, self.origin_y)
    }

    pub const fn size(&self) -> (i64, i64) {
        (self.width, self.height)
    }

    /// Track the window size. The origin stays where it is.
    pub fn resize(&mut self, width: i64, height: i64) {
        self.width = width;
        self.height = height;
    }

    /// Cell under a pixel, rounding down so negative cells map correctly
    pub fn pixel_to_cell(&self, px: i64, py: i64) -> Coord {
        Coord::new(
            (px - self.origin_x).div_euclid(self.cell_size),
            (py - self.origin_y).div_euclid(self.cell_size),
        )
    }

    /// Cell under a mouse position
    pub fn screen_to_cell(&self, screen_x: f32, screen_y: f32) -> Coord {
        self.pixel_to_cell(screen_x.floor() as i64, screen_y.floor() as i64)
    }

    /// Top-left pixel of a cell
    pub fn cell_to_screen(&self, cell: Coord) -> (f32, f32) {
        let x = self.origin_x.saturating_add(cell.x().saturating_mul(self.cell_size));
        let y = self.origin_y.saturating_add(cell.y().saturating_mul(self.cell_size));
        (x as f32, y as f32)
    }

    /// Inclusive range of cells touching the window
    pub fn visible_cells(&self) -> (Coord, Coord) {
        (
            self.pixel_to_cell(0, 0),
            self.pixel_to_cell(self.width - 1, self.height - 1),
        )
    }

    pub fn pan(&mut self, dx: i64, dy: i64) {
        self.origin_x = self.origin_x.saturating_add(dx);
        self.origin_y = self.origin_y.saturating_add(dy);
    }

    pub fn zoom_in(&mut self) {
        self.zoom_in_at(self.width / 2, self.height / 2);
    }

    pub fn zoom_out(&mut self) {
        self.zoom_out_at(self.width / 2, self.height / 2);
    }

    /// Grow cells by a third, keeping the cell under (cx, cy) in place
    pub fn zoom_in_at(&mut self, cx: i64, cy: i64) {
        if self.cell_size >= MAX_CELL_SIZE {
            return;
        }

        // Small sizes don't grow under integer scaling
        let new_size = scale_up(self.cell_size)
            .max(self.cell_size + 1)
            .min(MAX_CELL_SIZE);
        self.rescale(cx, cy, new_size);

        if self.cell_size > 2 {
            self.margin = 1;
        }
        log::debug!("zoom in: cell size {}", self.cell_size);
    }

    /// Shrink cells by a quarter, keeping the cell under (cx, cy) in place.
    /// Ignored once a cell is a single pixel.
    pub fn zoom_out_at(&mut self, cx: i64, cy: i64) {
        let new_size = scale_down(self.cell_size);
        if new_size <= 0 {
            return;
        }

        self.rescale(cx, cy, new_size);

        if self.cell_size < 3 {
            self.margin = 0;
        }
        log::debug!("zoom out: cell size {}", self.cell_size);
    }

    /// Switch to `new_size`, moving the origin so (cx, cy) stays over the same cell
    fn rescale(&mut self, cx: i64, cy: i64, new_size: i64) {
        let old_size = self.cell_size;
        let scale = |c: i64, origin: i64| {
            let offset = i128::from(c.saturating_sub(origin)) * i128::from(new_size);
            c.saturating_sub(offset.div_euclid(i128::from(old_size)) as i64)
        };
        self.origin_x = scale(cx, self.origin_x);
        self.origin_y = scale(cy, self.origin_y);
        self.cell_size = new_size;
    }
}

const fn scale_up(n: i64) -> i64 {
    n * 4 / 3
}

const fn scale_down(n: i64) -> i64 {
    n * 3 / 4
}
