use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::grid::model::Grid;

/// One planning instruction: move the ship to `week`, and optionally fire at
/// `(week, day)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Action {
    pub week: usize,
    pub day: usize,
    pub shoot: bool,
}

/// Traversal order for clearing the grid.
///
/// Every variant emits exactly one shoot action per populated cell; they differ
/// only in ordering. `Random` shuffles with a ChaCha stream so callers that
/// need reproducible output can pin a seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// Weeks ascending, days ascending within each week.
    Column,
    /// Days ascending, weeks ascending within each day.
    Row,
    /// Uniformly random permutation of the populated cells.
    Random { seed: Option<u64> },
}

impl Default for Strategy {
    fn default() -> Self {
        Self::Random { seed: None }
    }
}

impl Strategy {
    /// Resolve a caller-facing selector name.
    ///
    /// Unknown names fall back to the (unseeded) random strategy rather than
    /// failing.
    pub fn from_name(name: &str) -> Self {
        match name {
            "column" => Self::Column,
            "row" => Self::Row,
            _ => Self::Random { seed: None },
        }
    }

    /// Plan the full action list for `grid`.
    ///
    /// Pure with respect to the grid; consumes the whole grid up front and has
    /// no side effects on it.
    pub fn generate_actions(&self, grid: &Grid) -> Vec<Action> {
        let shape = grid.shape();
        match self {
            Self::Column => {
                let mut actions = Vec::new();
                for week in 0..shape.weeks {
                    for day in 0..shape.days {
                        if grid.level(week, day) > 0 {
                            actions.push(Action {
                                week,
                                day,
                                shoot: true,
                            });
                        }
                    }
                }
                actions
            }
            Self::Row => {
                let mut actions = Vec::new();
                for day in 0..shape.days {
                    for week in 0..shape.weeks {
                        if grid.level(week, day) > 0 {
                            actions.push(Action {
                                week,
                                day,
                                shoot: true,
                            });
                        }
                    }
                }
                actions
            }
            Self::Random { seed } => {
                let mut actions: Vec<Action> = grid
                    .populated_cells()
                    .into_iter()
                    .map(|(week, day, _)| Action {
                        week,
                        day,
                        shoot: true,
                    })
                    .collect();
                let mut rng = match seed {
                    Some(s) => ChaCha8Rng::seed_from_u64(*s),
                    None => ChaCha8Rng::from_entropy(),
                };
                actions.shuffle(&mut rng);
                actions
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/strategy/traversal.rs"]
mod tests;
