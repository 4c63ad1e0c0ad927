use crate::foundation::error::{GridshotError, GridshotResult};

/// Expected grid dimensions.
///
/// The animation pipeline treats week and day counts as configuration; a grid
/// whose shape disagrees with the configured shape is rejected up front rather
/// than discovered mid-render.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GridShape {
    pub weeks: usize,
    pub days: usize,
}

impl GridShape {
    /// The standard GitHub contribution calendar: 52 weeks of 7 days.
    pub const DEFAULT: GridShape = GridShape { weeks: 52, days: 7 };
}

impl Default for GridShape {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// One grid position's contribution intensity.
///
/// `level == 0` means the cell is empty; `level > 0` spawns an enemy with that
/// many hit points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Cell {
    pub level: u8,
}

/// One column of the calendar, top day first.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Week {
    pub days: Vec<Cell>,
}

/// The immutable W×D matrix of contribution levels driving the animation.
///
/// The JSON shape mirrors the upstream contribution data:
/// `{"weeks": [{"days": [{"level": 0}, ...]}, ...]}`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Grid {
    pub weeks: Vec<Week>,
}

impl Grid {
    /// Build a grid from raw levels, one inner vec per week.
    pub fn from_levels(levels: &[Vec<u8>]) -> Self {
        Self {
            weeks: levels
                .iter()
                .map(|week| Week {
                    days: week.iter().map(|&level| Cell { level }).collect(),
                })
                .collect(),
        }
    }

    /// Observed shape, taking the first week's length as the day count.
    ///
    /// Ragged weeks are caught by [`Grid::validate`], not here.
    pub fn shape(&self) -> GridShape {
        GridShape {
            weeks: self.weeks.len(),
            days: self.weeks.first().map_or(0, |w| w.days.len()),
        }
    }

    /// Check the grid against an expected shape.
    pub fn validate(&self, expected: GridShape) -> GridshotResult<()> {
        if self.weeks.len() != expected.weeks {
            return Err(GridshotError::validation(format!(
                "grid has {} weeks, expected {}",
                self.weeks.len(),
                expected.weeks
            )));
        }
        for (week_idx, week) in self.weeks.iter().enumerate() {
            if week.days.len() != expected.days {
                return Err(GridshotError::validation(format!(
                    "week {} has {} days, expected {}",
                    week_idx,
                    week.days.len(),
                    expected.days
                )));
            }
        }
        Ok(())
    }

    /// Level at `(week, day)`, or 0 when out of bounds.
    pub fn level(&self, week: usize, day: usize) -> u8 {
        self.weeks
            .get(week)
            .and_then(|w| w.days.get(day))
            .map_or(0, |cell| cell.level)
    }

    /// All `(week, day, level)` triples with `level > 0`, in column-major order.
    pub fn populated_cells(&self) -> Vec<(usize, usize, u8)> {
        let mut cells = Vec::new();
        for (week_idx, week) in self.weeks.iter().enumerate() {
            for (day_idx, cell) in week.days.iter().enumerate() {
                if cell.level > 0 {
                    cells.push((week_idx, day_idx, cell.level));
                }
            }
        }
        cells
    }
}

#[cfg(test)]
#[path = "../../tests/unit/grid/model.rs"]
mod tests;
