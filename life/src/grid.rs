// grid.rs - double-buffered toroidal grid for Conway's Game of Life

use rand::Rng;

/// A fixed-size field of cells, double-buffered between the current
/// generation and a scratch buffer the next generation is written into.
///
/// Dimensions are immutable after creation. Both buffers always have
/// exactly `columns * rows` cells.
pub struct Grid {
    columns: usize,
    rows: usize,
    pub(crate) current: Vec<bool>,
    pub(crate) next: Vec<bool>,
}

impl Grid {
    /// Allocates both buffers with every cell dead.
    ///
    /// Panics if either dimension is zero.
    pub fn new(columns: usize, rows: usize) -> Self {
        assert!(columns > 0, "grid needs at least one column");
        assert!(rows > 0, "grid needs at least one row");
        Self {
            columns,
            rows,
            current: vec![false; columns * rows],
            next: vec![false; columns * rows],
        }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    // Row-major layout
    #[inline]
    pub(crate) fn index(&self, column: usize, row: usize) -> usize {
        row * self.columns + column
    }

    fn check_bounds(&self, column: usize, row: usize) {
        assert!(
            column < self.columns && row < self.rows,
            "cell ({column}, {row}) out of range for a {}x{} grid",
            self.columns,
            self.rows
        );
    }

    /// Current-generation value of one cell.
    ///
    /// Panics on out-of-range coordinates. Wraparound is the internal
    /// neighbor-lookup semantics of [`Grid::step`], never of external
    /// queries; a coordinate past the edge is a caller bug.
    pub fn cell(&self, column: usize, row: usize) -> bool {
        self.check_bounds(column, row);
        self.current[self.index(column, row)]
    }

    /// Writes one cell of the current generation. Same bounds policy as
    /// [`Grid::cell`].
    pub fn set(&mut self, column: usize, row: usize, alive: bool) {
        self.check_bounds(column, row);
        let index = self.index(column, row);
        self.current[index] = alive;
    }

    /// Reseeds the board: every cell independently alive with probability
    /// one half.
    pub fn randomize(&mut self) {
        let mut rng = rand::rng();
        for cell in &mut self.current {
            *cell = rng.random_bool(0.5);
        }
    }

    /// Number of alive cells in the current generation.
    pub fn live_count(&self) -> usize {
        self.current.iter().filter(|&&alive| alive).count()
    }
}
