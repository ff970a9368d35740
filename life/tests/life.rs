use life::Grid;

fn set_cells(grid: &mut Grid, cells: &[(usize, usize)]) {
    for &(column, row) in cells {
        grid.set(column, row, true);
    }
}

fn live_cells(grid: &Grid) -> Vec<(usize, usize)> {
    let mut out = Vec::new();
    for row in 0..grid.rows() {
        for column in 0..grid.columns() {
            if grid.cell(column, row) {
                out.push((column, row));
            }
        }
    }
    out
}

fn assert_alive(grid: &Grid, cells: &[(usize, usize)]) {
    for &(column, row) in cells {
        assert!(grid.cell(column, row), "expected alive at ({column}, {row})");
    }
}

#[test]
fn block_is_a_still_life() {
    // Each block cell has exactly three live neighbors, so the block
    // survives indefinitely and nothing around it is born.
    let mut grid = Grid::new(6, 6);
    let block = [(2, 2), (3, 2), (2, 3), (3, 3)];
    set_cells(&mut grid, &block);

    for _ in 0..25 {
        grid.step();
    }

    assert_alive(&grid, &block);
    assert_eq!(grid.live_count(), 4);
}

#[test]
fn blinker_oscillates_with_period_two() {
    let mut grid = Grid::new(5, 5);
    set_cells(&mut grid, &[(1, 2), (2, 2), (3, 2)]);

    grid.step();
    assert_eq!(live_cells(&grid), vec![(2, 1), (2, 2), (2, 3)]);

    grid.step();
    assert_eq!(live_cells(&grid), vec![(1, 2), (2, 2), (3, 2)]);
}

#[test]
fn blinker_oscillates_across_the_seam() {
    // A horizontal blinker centered on column 0 spans the left/right edge;
    // on a torus it behaves exactly like an interior one.
    let mut grid = Grid::new(5, 5);
    set_cells(&mut grid, &[(4, 2), (0, 2), (1, 2)]);

    grid.step();
    assert_eq!(live_cells(&grid), vec![(0, 1), (0, 2), (0, 3)]);

    grid.step();
    assert_eq!(live_cells(&grid), vec![(0, 2), (1, 2), (4, 2)]);
}

#[test]
fn step_is_deterministic() {
    let mut original = Grid::new(16, 12);
    original.randomize();

    // Same current buffer, stepped independently, must agree cell for cell.
    let mut copy = Grid::new(16, 12);
    for row in 0..original.rows() {
        for column in 0..original.columns() {
            copy.set(column, row, original.cell(column, row));
        }
    }

    for _ in 0..10 {
        original.step();
        copy.step();
        assert_eq!(live_cells(&original), live_cells(&copy));
    }
}

#[test]
fn dimensions_survive_any_activity() {
    let mut grid = Grid::new(13, 9);
    for _ in 0..5 {
        grid.randomize();
        grid.step();
        grid.step();
        assert_eq!(grid.columns(), 13);
        assert_eq!(grid.rows(), 9);
    }
}

#[test]
fn randomize_only_touches_cell_values() {
    let mut grid = Grid::new(10, 10);
    grid.randomize();
    for &(column, row) in &live_cells(&grid) {
        assert!(column < 10 && row < 10);
    }
}
