use std::collections::{HashMap, HashSet};

use super::{Coord, rules};

/// Life is an unbounded Game of Life universe stored sparsely:
/// only living coordinates are kept, so a step costs time proportional
/// to the population rather than to any area of the plane.
///
/// Reads take `&self` and edits take `&mut self`, so an iterator from
/// [`Life::cells`] can never observe a half-applied `update` or edit.
#[derive(Clone, Debug, Default)]
pub struct Life {
    cells: HashSet<Coord>,
    generation: u64,
}

impl Life {
    /// Empty universe at generation 0
    pub fn new() -> Self {
        Self::default()
    }

    /// Is the cell at (x, y) alive?
    pub fn alive(&self, x: i64, y: i64) -> bool {
        self.contains(Coord::new(x, y))
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.cells.contains(&coord)
    }

    /// Bring the cell at (x, y) to life. No-op if already alive.
    pub fn live(&mut self, x: i64, y: i64) {
        self.cells.insert(Coord::new(x, y));
    }

    /// Kill the cell at (x, y). No-op if already dead.
    pub fn die(&mut self, x: i64, y: i64) {
        self.cells.remove(&Coord::new(x, y));
    }

    /// Every living coordinate, in no particular order
    pub fn cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells.iter().copied()
    }

    /// Owned copy of the living set, detached from later edits
    pub fn snapshot(&self) -> Vec<Coord> {
        self.cells().collect()
    }

    pub const fn generation(&self) -> u64 {
        self.generation
    }

    pub fn living_count(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Kill everything and go back to generation 0
    pub fn clear(&mut self) {
        self.cells.clear();
        self.generation = 0;
    }

    /// Advance one generation.
    ///
    /// Every living cell tallies its living neighbors, and every dead
    /// neighbor it touches gets +1 in a candidate map keyed by coordinate.
    /// Classification only happens after the whole population has been
    /// scanned, because a dead cell's tally accumulates contributions from
    /// all of its living neighbors. The next set is built separately and
    /// swapped in at the end.
    pub fn update(&mut self) {
        let mut candidates: HashMap<Coord, u8> = HashMap::new();
        let mut next = HashSet::with_capacity(self.cells.len());

        for &cell in &self.cells {
            let mut neighbors = 0u8;

            for n in cell.neighbors() {
                if self.cells.contains(&n) {
                    neighbors += 1;
                } else {
                    *candidates.entry(n).or_insert(0) += 1;
                }
            }

            if rules::survives(neighbors) {
                next.insert(cell);
            }
        }

        let survivors = next.len();
        next.extend(
            candidates
                .into_iter()
                .filter(|&(_, tally)| rules::is_born(tally))
                .map(|(coord, _)| coord),
        );
        let births = next.len() - survivors;

        log::trace!(
            "generation {} -> {}: {} alive ({} survived, {} born, {} died)",
            self.generation,
            self.generation + 1,
            next.len(),
            survivors,
            births,
            self.cells.len() - survivors,
        );

        self.cells = next;
        self.generation += 1;
    }
}

impl FromIterator<Coord> for Life {
    fn from_iter<I: IntoIterator<Item = Coord>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
            generation: 0,
        }
    }
}

impl Extend<Coord> for Life {
    fn extend<I: IntoIterator<Item = Coord>>(&mut self, iter: I) {
        self.cells.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn life_of(cells: &[(i64, i64)]) -> Life {
        cells.iter().copied().map(Coord::from).collect()
    }

    fn set_of(cells: &[(i64, i64)]) -> HashSet<Coord> {
        cells.iter().copied().map(Coord::from).collect()
    }

    fn living(life: &Life) -> HashSet<Coord> {
        life.cells().collect()
    }

    #[test]
    fn test_new_is_empty_generation_zero() {
        let life = Life::new();
        assert_eq!(life.generation(), 0);
        assert_eq!(life.living_count(), 0);
        assert!(life.is_empty());
        assert!(!life.alive(0, 0));
    }

    #[test]
    fn test_live_and_die_are_idempotent() {
        let mut life = Life::new();
        life.live(2, -3);
        life.live(2, -3);
        assert!(life.alive(2, -3));
        assert_eq!(life.living_count(), 1);

        life.die(2, -3);
        life.die(2, -3);
        life.die(100, 100);
        assert!(!life.alive(2, -3));
        assert_eq!(life.living_count(), 0);
    }

    #[test]
    fn test_edits_do_not_touch_generation() {
        let mut life = Life::new();
        life.update();
        life.live(0, 0);
        life.die(0, 0);
        assert_eq!(life.generation(), 1);
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut life = life_of(&[(0, 0), (1, 0), (2, 0), (-7, 9)]);
        life.update();
        life.update();
        life.clear();

        assert_eq!(life.generation(), 0);
        assert_eq!(life.living_count(), 0);
        assert!(!life.alive(-7, 9));
        assert!(!life.alive(1, 0));
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut life = life_of(&[(0, 0), (4, 4)]);
        let before = life.snapshot();
        life.die(0, 0);
        life.live(9, 9);

        assert_eq!(before.len(), 2);
        assert!(before.contains(&Coord::new(0, 0)));
        assert!(!before.contains(&Coord::new(9, 9)));
    }

    #[test]
    fn test_empty_universe_stays_empty() {
        let mut life = Life::new();
        life.update();
        assert!(life.is_empty());
        assert_eq!(life.generation(), 1);
    }

    #[test]
    fn test_single_cell_dies() {
        let mut life = life_of(&[(5, 5)]);
        life.update();
        assert!(life.is_empty());
    }

    #[test]
    fn test_blinker_oscillates() {
        let vertical = [(1, 0), (1, 1), (1, 2)];
        let horizontal = [(0, 1), (1, 1), (2, 1)];
        let mut life = life_of(&vertical);

        life.update();
        assert_eq!(living(&life), set_of(&horizontal));

        life.update();
        assert_eq!(living(&life), set_of(&vertical));
        assert_eq!(life.generation(), 2);
    }

    #[test]
    fn test_block_is_still() {
        let block = [(0, 0), (1, 0), (0, 1), (1, 1)];
        let mut life = life_of(&block);

        for _ in 0..10 {
            life.update();
            assert_eq!(living(&life), set_of(&block));
        }
        assert_eq!(life.generation(), 10);
    }

    #[test]
    fn test_glider_translates_diagonally() {
        let glider = [(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)];
        let mut life = life_of(&glider);

        for _ in 0..4 {
            life.update();
        }

        let moved: HashSet<Coord> = set_of(&glider).into_iter().map(|c| c.offset(1, 1)).collect();
        assert_eq!(living(&life), moved);
    }

    #[test]
    fn test_overcrowded_centre_dies() {
        // Plus sign: centre has 4 neighbors
        let mut life = life_of(&[(0, 0), (0, -1), (0, 1), (-1, 0), (1, 0)]);
        life.update();
        assert!(!life.alive(0, 0));
    }

    #[test]
    fn test_birth_accumulates_across_scanners() {
        // (1, 1) is dead and only reachable through three different living cells
        let mut life = life_of(&[(0, 0), (2, 0), (1, 2)]);
        life.update();
        assert!(life.alive(1, 1));
        assert_eq!(life.living_count(), 1);
    }

    #[test]
    fn test_dead_cell_with_two_or_four_neighbors_stays_dead() {
        let mut two = life_of(&[(0, 0), (2, 0)]);
        two.update();
        assert!(!two.alive(1, 0));

        let mut four = life_of(&[(0, 0), (2, 0), (0, 2), (2, 2)]);
        four.update();
        assert!(!four.alive(1, 1));
    }

    #[test]
    fn test_far_away_coordinates() {
        let mut life = life_of(&[(i64::MIN, 0), (i64::MIN, 1), (i64::MIN, 2)]);
        life.update();
        assert!(life.alive(i64::MAX, 1));
        assert!(life.alive(i64::MIN, 1));
        assert!(life.alive(i64::MIN + 1, 1));
        assert_eq!(life.living_count(), 3);
    }

    /// Live cell at the origin surrounded by `n` of its neighbors.
    fn centre_with_neighbors(n: usize) -> Life {
        let mut life: Life = Coord::new(0, 0).neighbors().take(n).collect();
        life.live(0, 0);
        life
    }

    proptest! {
        #[test]
        fn prop_live_then_alive(x in any::<i64>(), y in any::<i64>()) {
            let mut life = Life::new();
            life.live(x, y);
            prop_assert!(life.alive(x, y));
            life.die(x, y);
            prop_assert!(!life.alive(x, y));
        }

        #[test]
        fn prop_count_matches_cells(
            cells in prop::collection::vec((-8i64..8, -8i64..8), 0..60),
            steps in 0usize..4,
        ) {
            let mut life = life_of(&cells);
            for _ in 0..steps {
                life.update();
            }
            prop_assert_eq!(life.living_count(), living(&life).len());
            prop_assert_eq!(life.living_count(), life.cells().count());
            prop_assert_eq!(life.generation(), steps as u64);
        }

        #[test]
        fn prop_survival_follows_neighbor_count(n in 0usize..=8) {
            let mut life = centre_with_neighbors(n);
            life.update();
            prop_assert_eq!(life.alive(0, 0), n == 2 || n == 3);
        }

        #[test]
        fn prop_birth_follows_neighbor_count(n in 0usize..=8) {
            let mut life: Life = Coord::new(0, 0).neighbors().take(n).collect();
            life.update();
            prop_assert_eq!(life.alive(0, 0), n == 3);
        }

        #[test]
        fn prop_translation_invariant(
            cells in prop::collection::vec((-6i64..6, -6i64..6), 0..30),
            dx in any::<i64>(),
            dy in any::<i64>(),
        ) {
            let mut here = life_of(&cells);
            let mut there: Life = here.cells().map(|c| c.offset(dx, dy)).collect();
            here.update();
            there.update();

            let shifted: HashSet<Coord> = here.cells().map(|c| c.offset(dx, dy)).collect();
            prop_assert_eq!(shifted, living(&there));
        }
    }
}
