//! Generation stepping.
//!
//! The engine owns the transition rule and sweeps every interior cell of a
//! [`Grid`], reading the current generation and writing the next one, then
//! swaps the two. Border cells are never written and stay dead.

use rayon::prelude::*;

use super::{Grid, Rule};

/// AutomatonEngine advances a grid one generation at a time.
pub struct AutomatonEngine {
    rule: Box<dyn Rule>,
}

impl AutomatonEngine {
    pub fn new(rule: Box<dyn Rule>) -> Self {
        Self { rule }
    }

    pub fn rule(&self) -> &dyn Rule {
        self.rule.as_ref()
    }

    /// Advance `grid` by one generation (serial sweep)
    pub fn step(&self, grid: &mut Grid) {
        let (cols, rows) = grid.dimensions();
        let stride = rows + 2;
        let rule = self.rule.as_ref();

        let (current, next) = grid.generations_mut();
        for x in 1..=cols {
            for y in 1..=rows {
                next[x * stride + y] =
                    rule.evolve(current.cell(x, y), current.count_live_neighbors(x, y));
            }
        }

        grid.swap_generations();
    }

    /// Advance `grid` by one generation, one rayon task per column.
    /// Produces exactly the same board as [`AutomatonEngine::step`].
    pub fn step_parallel(&self, grid: &mut Grid) {
        let (cols, rows) = grid.dimensions();
        let stride = rows + 2;
        let rule = self.rule.as_ref();

        let (current, next) = grid.generations_mut();
        next.par_chunks_mut(stride)
            .enumerate()
            .skip(1)
            .take(cols)
            .for_each(|(x, column)| {
                for y in 1..=rows {
                    column[y] = rule.evolve(current.cell(x, y), current.count_live_neighbors(x, y));
                }
            });

        grid.swap_generations();
    }
}

impl Default for AutomatonEngine {
    fn default() -> Self {
        Self::new(super::RuleKind::default().build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ConwayRule, InvertedLifeRule};

    fn alive_cells(grid: &Grid) -> Vec<(usize, usize)> {
        grid.iter_interior()
            .filter(|(_, _, cell)| cell.is_alive())
            .map(|(x, y, _)| (x, y))
            .collect()
    }

    fn block(grid: &mut Grid) {
        grid.set_alive(4, 4, true);
        grid.set_alive(5, 4, true);
        grid.set_alive(4, 5, true);
        grid.set_alive(5, 5, true);
    }

    #[test]
    fn test_border_stays_dead_after_step() {
        for (cols, rows) in [(1, 1), (1, 5), (4, 1), (3, 3), (12, 7)] {
            let mut grid = Grid::new(cols, rows);
            grid.randomize(1.0);
            assert!(grid.border_is_dead());

            for engine in [
                AutomatonEngine::new(Box::new(InvertedLifeRule)),
                AutomatonEngine::new(Box::new(ConwayRule)),
            ] {
                let mut g = grid.clone();
                for _ in 0..3 {
                    engine.step(&mut g);
                    assert!(g.border_is_dead(), "border came alive on {cols}x{rows}");
                }
            }
        }
    }

    #[test]
    fn test_single_cell_survives_inverted_rule() {
        let engine = AutomatonEngine::new(Box::new(InvertedLifeRule));
        let mut grid = Grid::new(9, 9);
        grid.set_alive(5, 5, true);

        engine.step(&mut grid);

        // n = 0 is not 3, and every neighbor only sees 1
        assert_eq!(alive_cells(&grid), vec![(5, 5)]);
    }

    #[test]
    fn test_single_cell_dies_conway() {
        let engine = AutomatonEngine::new(Box::new(ConwayRule));
        let mut grid = Grid::new(9, 9);
        grid.set_alive(5, 5, true);

        engine.step(&mut grid);

        assert_eq!(grid.count_alive(), 0);
    }

    #[test]
    fn test_block_becomes_ring_inverted_rule() {
        let engine = AutomatonEngine::new(Box::new(InvertedLifeRule));
        let mut grid = Grid::new(10, 10);
        block(&mut grid);

        engine.step(&mut grid);

        // Each block cell has 3 neighbors and dies; each edge-adjacent
        // cell sees 2 and is born; diagonal corners see 1 and stay dead.
        let mut expected = vec![
            (3, 4), (3, 5),
            (4, 3), (4, 6),
            (5, 3), (5, 6),
            (6, 4), (6, 5),
        ];
        expected.sort();
        assert_eq!(alive_cells(&grid), expected);
    }

    #[test]
    fn test_block_still_life_conway() {
        let engine = AutomatonEngine::new(Box::new(ConwayRule));
        let mut grid = Grid::new(10, 10);
        block(&mut grid);

        engine.step(&mut grid);

        assert_eq!(alive_cells(&grid), vec![(4, 4), (4, 5), (5, 4), (5, 5)]);
    }

    #[test]
    fn test_blinker_conway() {
        let engine = AutomatonEngine::new(Box::new(ConwayRule));
        let mut grid = Grid::new(10, 10);
        grid.set_alive(4, 5, true);
        grid.set_alive(5, 5, true);
        grid.set_alive(6, 5, true);

        engine.step(&mut grid);
        assert_eq!(alive_cells(&grid), vec![(5, 4), (5, 5), (5, 6)]);

        engine.step(&mut grid);
        assert_eq!(alive_cells(&grid), vec![(4, 5), (5, 5), (6, 5)]);
    }

    #[test]
    fn test_counts_use_previous_generation() {
        // Under the inverted rule a horizontal pair makes the cells above
        // and below come alive (n = 2). If writes leaked into the sweep,
        // cells further along the column would see those births.
        let engine = AutomatonEngine::new(Box::new(InvertedLifeRule));
        let mut grid = Grid::new(6, 6);
        grid.set_alive(3, 3, true);
        grid.set_alive(4, 3, true);

        engine.step(&mut grid);

        let mut expected = vec![(3, 2), (3, 3), (3, 4), (4, 2), (4, 3), (4, 4)];
        expected.sort();
        assert_eq!(alive_cells(&grid), expected);
    }

    #[test]
    fn test_parallel_matches_serial() {
        for engine in [
            AutomatonEngine::new(Box::new(InvertedLifeRule)),
            AutomatonEngine::new(Box::new(ConwayRule)),
        ] {
            let mut serial = Grid::new(64, 48);
            serial.randomize(0.3);
            let mut parallel = serial.clone();

            for _ in 0..5 {
                engine.step(&mut serial);
                engine.step_parallel(&mut parallel);
                assert_eq!(serial, parallel);
            }
        }
    }
}
