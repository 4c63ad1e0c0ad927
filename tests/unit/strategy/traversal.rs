use super::*;
use std::collections::BTreeSet;

fn sample_grid() -> Grid {
    Grid::from_levels(&[vec![0, 2, 0], vec![1, 0, 3], vec![0, 0, 0], vec![4, 1, 0]])
}

fn shot_targets(actions: &[Action]) -> Vec<(usize, usize)> {
    actions
        .iter()
        .filter(|a| a.shoot)
        .map(|a| (a.week, a.day))
        .collect()
}

#[test]
fn column_visits_each_populated_cell_once_in_week_major_order() {
    let actions = Strategy::Column.generate_actions(&sample_grid());
    assert_eq!(
        shot_targets(&actions),
        vec![(0, 1), (1, 0), (1, 2), (3, 0), (3, 1)]
    );
}

#[test]
fn row_visits_each_populated_cell_once_in_day_major_order() {
    let actions = Strategy::Row.generate_actions(&sample_grid());
    assert_eq!(
        shot_targets(&actions),
        vec![(1, 0), (3, 0), (0, 1), (3, 1), (1, 2)]
    );
}

#[test]
fn random_targets_exactly_the_populated_cells() {
    let grid = sample_grid();
    let expected: BTreeSet<(usize, usize)> = grid
        .populated_cells()
        .into_iter()
        .map(|(w, d, _)| (w, d))
        .collect();

    for seed in 0..8 {
        let actions = Strategy::Random { seed: Some(seed) }.generate_actions(&grid);
        let targets = shot_targets(&actions);
        assert_eq!(targets.len(), expected.len(), "no duplicates or omissions");
        let set: BTreeSet<(usize, usize)> = targets.into_iter().collect();
        assert_eq!(set, expected);
    }
}

#[test]
fn random_produces_distinct_orderings_across_seeds() {
    let grid = sample_grid();
    let orderings: BTreeSet<Vec<(usize, usize)>> = (0..32)
        .map(|seed| shot_targets(&Strategy::Random { seed: Some(seed) }.generate_actions(&grid)))
        .collect();
    assert!(orderings.len() >= 2, "expected at least two distinct orders");
}

#[test]
fn random_with_fixed_seed_is_reproducible() {
    let grid = sample_grid();
    let a = Strategy::Random { seed: Some(7) }.generate_actions(&grid);
    let b = Strategy::Random { seed: Some(7) }.generate_actions(&grid);
    assert_eq!(a, b);
}

#[test]
fn unseeded_random_still_covers_all_targets() {
    let grid = sample_grid();
    let expected: BTreeSet<(usize, usize)> = grid
        .populated_cells()
        .into_iter()
        .map(|(w, d, _)| (w, d))
        .collect();
    let set: BTreeSet<(usize, usize)> =
        shot_targets(&Strategy::Random { seed: None }.generate_actions(&grid))
            .into_iter()
            .collect();
    assert_eq!(set, expected);
}

#[test]
fn empty_grid_yields_no_actions() {
    let grid = Grid::from_levels(&[vec![0, 0], vec![0, 0]]);
    assert!(Strategy::Column.generate_actions(&grid).is_empty());
    assert!(Strategy::Row.generate_actions(&grid).is_empty());
    assert!(
        Strategy::Random { seed: Some(1) }
            .generate_actions(&grid)
            .is_empty()
    );
}

#[test]
fn from_name_is_lenient() {
    assert_eq!(Strategy::from_name("column"), Strategy::Column);
    assert_eq!(Strategy::from_name("row"), Strategy::Row);
    assert_eq!(
        Strategy::from_name("random"),
        Strategy::Random { seed: None }
    );
    assert_eq!(
        Strategy::from_name("zigzag"),
        Strategy::Random { seed: None }
    );
}
