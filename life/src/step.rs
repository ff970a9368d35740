// step.rs - one generation transition (B3/S23 on a torus)

use crate::Grid;

impl Grid {
    /// Advances the board by one generation.
    ///
    /// Every cell has exactly eight neighbors: coordinates wrap around the
    /// grid edges, so the board topologically forms a torus (on a 1x1 grid
    /// all eight reads hit the cell itself). The whole pass reads one
    /// snapshot of the current generation and writes into the scratch
    /// buffer, then the buffers swap roles without copying; no cell ever
    /// sees a half-updated neighborhood.
    pub fn step(&mut self) {
        let columns = self.columns();
        let rows = self.rows();

        for row in 0..rows {
            let above = (row + rows - 1) % rows;
            let below = (row + 1) % rows;

            for column in 0..columns {
                let left = (column + columns - 1) % columns;
                let right = (column + 1) % columns;

                let neighbours = self.current[self.index(left, above)] as u8
                    + self.current[self.index(column, above)] as u8
                    + self.current[self.index(right, above)] as u8
                    + self.current[self.index(left, row)] as u8
                    + self.current[self.index(right, row)] as u8
                    + self.current[self.index(left, below)] as u8
                    + self.current[self.index(column, below)] as u8
                    + self.current[self.index(right, below)] as u8;

                let here = self.index(column, row);
                self.next[here] = match neighbours {
                    3 => true,               // birth, or survival at three
                    2 => self.current[here], // survives if alive, stays dead if dead
                    _ => false,              // under- or overpopulation
                };
            }
        }

        std::mem::swap(&mut self.current, &mut self.next);
    }
}
