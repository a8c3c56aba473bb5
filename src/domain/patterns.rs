use rand::Rng;

use super::{Coord, Life};

/// A named shape that can be stamped into a universe
#[derive(Clone, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub width: i64,
    pub height: i64,
    pub cells: Vec<Coord>, // Offsets from the top-left corner
}

impl Pattern {
    /// Build a pattern from plaintext rows: `O` is alive, anything else dead.
    pub fn from_rows(name: &'static str, description: &'static str, rows: &[&str]) -> Self {
        let cells: Vec<Coord> = rows
            .iter()
            .zip(0i64..)
            .flat_map(|(row, y)| {
                row.chars()
                    .zip(0i64..)
                    .filter(|&(ch, _)| ch == 'O')
                    .map(move |(_, x)| Coord::new(x, y))
            })
            .collect();

        let width = cells.iter().map(|c| c.x()).max().map_or(0, |x| x + 1);
        let height = cells.iter().map(|c| c.y()).max().map_or(0, |y| y + 1);
        Self { name, description, width, height, cells }
    }

    /// Stamp with the top-left corner at `at`. Existing cells are kept.
    pub fn place_on(&self, life: &mut Life, at: Coord) {
        for offset in &self.cells {
            let cell = at.offset(offset.x(), offset.y());
            life.live(cell.x(), cell.y());
        }
    }

    /// Stamp with the bounding box centred on `at`
    pub fn place_centered(&self, life: &mut Life, at: Coord) {
        self.place_on(life, at.offset(-self.width / 2, -self.height / 2));
    }
}

/// Fill the inclusive rectangle `min..=max` with random soup.
/// Each cell comes alive with probability `density`; live cells are never killed.
pub fn random_soup<R: Rng + ?Sized>(
    life: &mut Life,
    min: Coord,
    max: Coord,
    density: f64,
    rng: &mut R,
) {
    let density = if density.is_nan() { 0.0 } else { density.clamp(0.0, 1.0) };
    for y in min.y()..=max.y() {
        for x in min.x()..=max.x() {
            if rng.random_bool(density) {
                life.live(x, y);
            }
        }
    }
}

/// Classic patterns
pub mod presets {
    use super::Pattern;

    /// Glider - moves one cell diagonally every 4 generations
    pub fn glider() -> Pattern {
        Pattern::from_rows("Glider", "Spaceship (period 4)", &[
            ".O.",
            "..O",
            "OOO",
        ])
    }

    pub fn blinker() -> Pattern {
        Pattern::from_rows("Blinker", "Oscillator (period 2)", &["OOO"])
    }

    pub fn toad() -> Pattern {
        Pattern::from_rows("Toad", "Oscillator (period 2)", &[
            ".OOO",
            "OOO.",
        ])
    }

    pub fn beacon() -> Pattern {
        Pattern::from_rows("Beacon", "Oscillator (period 2)", &[
            "OO..",
            "O...",
            "...O",
            "..OO",
        ])
    }

    /// Lightweight spaceship, travels left
    pub fn lwss() -> Pattern {
        Pattern::from_rows("LWSS", "Lightweight spaceship (period 4)", &[
            ".O..O",
            "O....",
            "O...O",
            "OOOO.",
        ])
    }

    /// R-pentomino - settles after 1103 generations
    pub fn r_pentomino() -> Pattern {
        Pattern::from_rows("R-pentomino", "Methuselah (1103 generations)", &[
            ".OO",
            "OO.",
            ".O.",
        ])
    }

    /// Acorn - settles after 5206 generations
    pub fn acorn() -> Pattern {
        Pattern::from_rows("Acorn", "Methuselah (5206 generations)", &[
            ".O.....",
            "...O...",
            "OO..OOO",
        ])
    }

    pub fn block() -> Pattern {
        Pattern::from_rows("Block", "Still life", &[
            "OO",
            "OO",
        ])
    }

    /// Gosper glider gun - emits a glider every 30 generations.
    /// Only survives on an unbounded plane; its gliders never come back.
    pub fn glider_gun() -> Pattern {
        Pattern::from_rows("Gosper Glider Gun", "Gun (period 30)", &[
            "........................O...........",
            "......................O.O...........",
            "............OO......OO............OO",
            "...........O...O....OO............OO",
            "OO........O.....O...OO..............",
            "OO........O...O.OO....O.O...........",
            "..........O.....O.......O...........",
            "...........O...O....................",
            "............OO......................",
        ])
    }

    /// Every preset, in the order of the number keys that place them
    pub fn all_patterns() -> Vec<Pattern> {
        vec![
            glider(),
            blinker(),
            toad(),
            beacon(),
            lwss(),
            r_pentomino(),
            acorn(),
            block(),
            glider_gun(),
        ]
    }
}
