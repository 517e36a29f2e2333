//! Match resolver tests

use chicken_sort::core::{find_matches, resolve, Grid};

#[test]
fn test_no_runs_no_change() {
    let mut grid = Grid::from_rows(&["001122", "110033", "------"]);
    let before = grid.clone();
    let res = resolve(&mut grid);
    assert!(res.is_empty());
    assert_eq!(res.total, 0);
    assert_eq!(res.passes, 0);
    assert_eq!(grid, before);
}

#[test]
fn test_horizontal_run_of_three() {
    let mut grid = Grid::from_rows(&["222---"]);
    let res = resolve(&mut grid);
    assert_eq!(res.total, 3);
    assert_eq!(res.cleared.as_slice(), &[(0, 0), (1, 0), (2, 0)]);
    assert_eq!(grid.occupied(), 0);
}

#[test]
fn test_vertical_run_at_bottom_edge() {
    let mut grid = Grid::from_rows(&["------", "------", "------", "-----3", "-----3", "-----3"]);
    let res = resolve(&mut grid);
    assert_eq!(res.total, 3);
    assert_eq!(res.cleared.as_slice(), &[(5, 3), (5, 4), (5, 5)]);
}

#[test]
fn test_full_row_counts_six() {
    let mut grid = Grid::from_rows(&["111111"]);
    assert_eq!(resolve(&mut grid).total, 6);
}

#[test]
fn test_crossing_runs_count_shared_cell_once() {
    // Plus shape: the centre belongs to both runs.
    let mut grid = Grid::from_rows(&["-0----", "000---", "-0----"]);
    let matches = find_matches(&grid);
    assert_eq!(matches.len(), 5);
    assert!(matches.contains(1, 1));

    let res = resolve(&mut grid);
    assert_eq!(res.total, 5);
    assert_eq!(res.cleared.len(), 5);
    assert_eq!(grid.occupied(), 0);
}

#[test]
fn test_l_shape_counts_corner_once() {
    let mut grid = Grid::from_rows(&["2-----", "2-----", "222---"]);
    let res = resolve(&mut grid);
    assert_eq!(res.total, 5);
    // Row-major order.
    assert_eq!(
        res.cleared.as_slice(),
        &[(0, 0), (0, 1), (0, 2), (1, 2), (2, 2)]
    );
}

#[test]
fn test_mixed_kinds_break_runs() {
    let mut grid = Grid::from_rows(&["001000", "0-----", "1-----"]);
    let res = resolve(&mut grid);
    // Only the trailing 000 in row 0 is a run.
    assert_eq!(res.cleared.as_slice(), &[(3, 0), (4, 0), (5, 0)]);
    assert_eq!(grid.row_string(0), "001---");
}

#[test]
fn test_empty_cells_never_match() {
    let grid = Grid::new();
    assert!(find_matches(&grid).is_empty());
}

#[test]
fn test_resolve_leaves_stable_grid() {
    let mut grid = Grid::from_rows(&["333---", "3-----", "3-----"]);
    resolve(&mut grid);
    assert!(find_matches(&grid).is_empty());
    assert!(resolve(&mut grid).is_empty());
}
