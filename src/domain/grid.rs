use super::Cell;

/// Moore neighborhood offsets, walked once per cell.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, 1), (1, 1), (1, 0),
    (1, -1), (0, -1),
];

/// Grid owns the board: `cols × rows` interior cells wrapped in a one-cell
/// dead border, stored column-major as `(cols + 2) × (rows + 2)`.
///
/// Two arrays are kept: `current` is what every read sees, `next` is where
/// a generation sweep writes. They are swapped only after the full sweep,
/// so no cell ever observes a half-updated neighbor.
#[derive(Clone, Debug)]
pub struct Grid {
    cols: usize,
    rows: usize,
    current: Vec<Cell>,
    next: Vec<Cell>,
}

/// Boards are equal when their current generations match; the scratch
/// array is ignored.
impl PartialEq for Grid {
    fn eq(&self, other: &Self) -> bool {
        self.cols == other.cols && self.rows == other.rows && self.current == other.current
    }
}

/// Read-only view of one generation, used to count neighbors while the
/// next generation is being written.
#[derive(Clone, Copy)]
pub struct Neighborhood<'a> {
    stride: usize,
    cells: &'a [Cell],
}

impl<'a> Neighborhood<'a> {
    #[inline]
    pub fn cell(&self, x: usize, y: usize) -> Cell {
        self.cells[x * self.stride + y]
    }

    /// Sum of the 8 surrounding alive flags. `(x, y)` must be interior, so
    /// every neighbor lies inside the bordered array.
    #[inline]
    pub fn count_live_neighbors(&self, x: usize, y: usize) -> u8 {
        NEIGHBOR_OFFSETS
            .iter()
            .map(|&(dx, dy)| {
                let nx = x.wrapping_add_signed(dx);
                let ny = y.wrapping_add_signed(dy);
                self.cell(nx, ny).weight()
            })
            .sum()
    }
}

impl Grid {
    /// Create a grid of `cols × rows` interior cells, all dead
    pub fn new(cols: usize, rows: usize) -> Self {
        debug_assert!(cols >= 1 && rows >= 1, "grid needs at least one interior cell");
        let len = (cols + 2) * (rows + 2);
        Self {
            cols,
            rows,
            current: vec![Cell::Dead; len],
            next: vec![Cell::Dead; len],
        }
    }

    /// Interior dimensions `(cols, rows)`
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.cols, self.rows)
    }

    /// Number of interior cells
    pub const fn interior_len(&self) -> usize {
        self.cols * self.rows
    }

    const fn stride(&self) -> usize {
        self.rows + 2
    }

    const fn index(&self, x: usize, y: usize) -> usize {
        x * self.stride() + y
    }

    pub const fn is_interior(&self, x: usize, y: usize) -> bool {
        x >= 1 && x <= self.cols && y >= 1 && y <= self.rows
    }

    /// Alive flag at `(x, y)`, border included.
    ///
    /// `x` must be in `[0, cols + 1]` and `y` in `[0, rows + 1]`.
    pub fn get(&self, x: usize, y: usize) -> bool {
        debug_assert!(x <= self.cols + 1 && y <= self.rows + 1, "({x}, {y}) is off the board");
        self.current[self.index(x, y)].is_alive()
    }

    /// Set an interior cell alive or dead. Border cells never change.
    pub fn set_alive(&mut self, x: usize, y: usize, alive: bool) {
        debug_assert!(self.is_interior(x, y), "({x}, {y}) is not an interior cell");
        if self.is_interior(x, y) {
            let idx = self.index(x, y);
            self.current[idx] = Cell::from_alive(alive);
        }
    }

    /// Live neighbors of an interior cell; border cells count as dead
    pub fn count_live_neighbors(&self, x: usize, y: usize) -> u8 {
        debug_assert!(self.is_interior(x, y), "({x}, {y}) is not an interior cell");
        self.neighborhood().count_live_neighbors(x, y)
    }

    /// Kill every cell in both generations
    pub fn reset_all(&mut self) {
        self.current.fill(Cell::Dead);
        self.next.fill(Cell::Dead);
    }

    /// Count live cells on the board
    pub fn count_alive(&self) -> usize {
        self.current.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Fill the interior at random, each cell alive with probability `density`
    pub fn randomize(&mut self, density: f64) {
        use rand::Rng;

        let density = density.clamp(0.0, 1.0);
        let mut rng = rand::rng();
        for x in 1..=self.cols {
            for y in 1..=self.rows {
                let idx = self.index(x, y);
                self.current[idx] = Cell::from_alive(rng.random_bool(density));
            }
        }
    }

    /// Iterate interior cells in storage order: columns left to right,
    /// each column bottom to top
    pub fn iter_interior(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        (1..=self.cols)
            .flat_map(move |x| (1..=self.rows).map(move |y| (x, y)))
            .map(|(x, y)| (x, y, self.current[self.index(x, y)]))
    }

    /// View of the current generation
    pub fn neighborhood(&self) -> Neighborhood<'_> {
        Neighborhood {
            stride: self.stride(),
            cells: &self.current,
        }
    }

    /// Split the board into the generation being read and the one being
    /// written. The slice is laid out like the board, border included.
    pub(crate) fn generations_mut(&mut self) -> (Neighborhood<'_>, &mut [Cell]) {
        let stride = self.stride();
        (
            Neighborhood {
                stride,
                cells: &self.current,
            },
            &mut self.next,
        )
    }

    /// Make the freshly written generation current
    pub(crate) fn swap_generations(&mut self) {
        std::mem::swap(&mut self.current, &mut self.next);
    }

    #[cfg(test)]
    pub(crate) fn border_is_dead(&self) -> bool {
        let (cols, rows) = (self.cols, self.rows);
        let columns = [0, cols + 1];
        let rows_edge = [0, rows + 1];
        columns
            .iter()
            .all(|&x| (0..=rows + 1).all(|y| !self.get(x, y)))
            && rows_edge
                .iter()
                .all(|&y| (0..=cols + 1).all(|x| !self.get(x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions_include_border_storage() {
        let grid = Grid::new(4, 3);
        assert_eq!(grid.dimensions(), (4, 3));
        assert_eq!(grid.interior_len(), 12);
        // Border is addressable
        assert!(!grid.get(0, 0));
        assert!(!grid.get(5, 4));
    }

    #[test]
    fn test_set_and_get() {
        let mut grid = Grid::new(5, 5);
        grid.set_alive(2, 3, true);
        assert!(grid.get(2, 3));
        assert!(!grid.get(3, 2));

        grid.set_alive(2, 3, false);
        assert!(!grid.get(2, 3));
    }

    #[test]
    fn test_count_neighbors() {
        let mut grid = Grid::new(5, 5);
        grid.set_alive(2, 2, true);
        grid.set_alive(3, 2, true);
        grid.set_alive(2, 3, true);

        assert_eq!(grid.count_live_neighbors(3, 3), 3);
        // The cell itself is not counted
        assert_eq!(grid.count_live_neighbors(2, 2), 2);
        assert_eq!(grid.count_live_neighbors(5, 5), 0);
    }

    #[test]
    fn test_corner_cell_sees_border_as_dead() {
        let mut grid = Grid::new(3, 3);
        grid.set_alive(2, 1, true);
        grid.set_alive(1, 2, true);
        grid.set_alive(2, 2, true);

        // No wrapping: the opposite edge stays out of the count
        assert_eq!(grid.count_live_neighbors(1, 1), 3);
        grid.set_alive(3, 3, true);
        assert_eq!(grid.count_live_neighbors(1, 1), 3);
    }

    #[test]
    fn test_reset_all_zeroes_every_count() {
        let mut grid = Grid::new(6, 4);
        grid.randomize(0.5);
        grid.reset_all();

        for x in 1..=6 {
            for y in 1..=4 {
                assert_eq!(grid.count_live_neighbors(x, y), 0);
            }
        }
        assert_eq!(grid.count_alive(), 0);
    }

    #[test]
    fn test_reset_all_is_idempotent() {
        let mut grid = Grid::new(7, 7);
        grid.randomize(0.4);

        grid.reset_all();
        let once = grid.clone();
        grid.reset_all();
        assert_eq!(grid, once);
    }

    #[test]
    fn test_equality_ignores_scratch_generation() {
        let mut stepped = Grid::new(4, 4);
        stepped.set_alive(2, 2, true);
        {
            let (_, next) = stepped.generations_mut();
            next.fill(Cell::Alive);
        }

        let mut fresh = Grid::new(4, 4);
        fresh.set_alive(2, 2, true);
        assert_eq!(stepped, fresh);

        fresh.set_alive(3, 3, true);
        assert_ne!(stepped, fresh);
    }

    #[test]
    fn test_randomize_leaves_border_dead() {
        let mut grid = Grid::new(10, 8);
        grid.randomize(1.0);
        assert_eq!(grid.count_alive(), 80);
        assert!(grid.border_is_dead());
    }

    #[test]
    fn test_iter_interior_is_column_major() {
        let grid = Grid::new(2, 3);
        let coords: Vec<_> = grid.iter_interior().map(|(x, y, _)| (x, y)).collect();
        assert_eq!(coords, vec![(1, 1), (1, 2), (1, 3), (2, 1), (2, 2), (2, 3)]);
    }
}
