use super::*;

#[test]
fn from_levels_and_shape() {
    let grid = Grid::from_levels(&[vec![0, 1, 2], vec![3, 0, 0]]);
    assert_eq!(grid.shape(), GridShape { weeks: 2, days: 3 });
    assert_eq!(grid.level(0, 1), 1);
    assert_eq!(grid.level(1, 0), 3);
}

#[test]
fn level_out_of_bounds_is_zero() {
    let grid = Grid::from_levels(&[vec![4]]);
    assert_eq!(grid.level(0, 5), 0);
    assert_eq!(grid.level(9, 0), 0);
}

#[test]
fn validate_accepts_matching_shape() {
    let grid = Grid::from_levels(&[vec![0, 0], vec![1, 2]]);
    assert!(grid.validate(GridShape { weeks: 2, days: 2 }).is_ok());
}

#[test]
fn validate_rejects_wrong_week_count() {
    let grid = Grid::from_levels(&[vec![0, 0]]);
    let err = grid
        .validate(GridShape { weeks: 2, days: 2 })
        .unwrap_err()
        .to_string();
    assert!(err.contains("1 weeks"), "{err}");
}

#[test]
fn validate_rejects_ragged_weeks() {
    let grid = Grid::from_levels(&[vec![0, 0], vec![0]]);
    let err = grid
        .validate(GridShape { weeks: 2, days: 2 })
        .unwrap_err()
        .to_string();
    assert!(err.contains("week 1"), "{err}");
}

#[test]
fn populated_cells_skips_empties() {
    let grid = Grid::from_levels(&[vec![0, 2], vec![0, 0], vec![1, 0]]);
    assert_eq!(grid.populated_cells(), vec![(0, 1, 2), (2, 0, 1)]);
}

#[test]
fn json_round_trip_matches_upstream_shape() {
    let json = r#"{"weeks":[{"days":[{"level":0},{"level":3}]}]}"#;
    let grid: Grid = serde_json::from_str(json).unwrap();
    assert_eq!(grid, Grid::from_levels(&[vec![0, 3]]));
    let back = serde_json::to_string(&grid).unwrap();
    assert_eq!(back, json);
}
