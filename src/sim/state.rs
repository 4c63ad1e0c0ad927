use crate::grid::model::{Grid, GridShape};

/// The player's ship, pinned to a fixed row below the grid.
///
/// `week == None` is the off-grid starting position; the renderer draws the
/// ship left of the playing field until the first move.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Ship {
    pub week: Option<usize>,
}

impl Ship {
    pub fn move_to(&mut self, week: usize) {
        self.week = Some(week);
    }
}

/// An enemy spawned from one populated grid cell.
///
/// Enemies are never removed from the owning collection; death is the derived
/// liveness flag `health > 0` flipping off.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Enemy {
    pub week: usize,
    pub day: usize,
    /// Remaining hit points; drives the rendered color.
    pub health: u8,
    /// Hit points at spawn (the cell's contribution level).
    pub max_health: u8,
}

impl Enemy {
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Apply one point of damage. Returns true only for the hit that destroyed
    /// the enemy. Saturating, so stray hits after death stay observably at
    /// zero.
    pub fn take_damage(&mut self) -> bool {
        let was_alive = self.is_alive();
        self.health = self.health.saturating_sub(1);
        was_alive && self.health == 0
    }
}

/// A bullet in flight from the ship row to its target cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bullet {
    /// Target column; fixed for the bullet's lifetime.
    pub week: usize,
    /// Target row.
    pub target_day: usize,
    /// Flight interpolation factor: 0.0 at the ship row, 1.0 at the target.
    pub progress: f32,
}

/// Aggregate simulation state: ship, enemy arena, and the current shot's
/// bullets.
///
/// At most one shot episode is in flight at a time; the sequencer clears
/// bullets after each episode's hit resolves. All operations are total over
/// valid inputs and never panic.
#[derive(Clone, Debug)]
pub struct GameState {
    shape: GridShape,
    pub ship: Ship,
    pub enemies: Vec<Enemy>,
    pub bullets: Vec<Bullet>,
}

impl GameState {
    /// Spawn one enemy per populated cell of `grid`.
    pub fn new(grid: &Grid) -> Self {
        let enemies = grid
            .populated_cells()
            .into_iter()
            .map(|(week, day, level)| Enemy {
                week,
                day,
                health: level,
                max_health: level,
            })
            .collect();

        Self {
            shape: grid.shape(),
            ship: Ship::default(),
            enemies,
            bullets: Vec::new(),
        }
    }

    /// Grid dimensions this state was built from.
    pub fn shape(&self) -> GridShape {
        self.shape
    }

    /// Reposition the ship to a column.
    pub fn move_ship(&mut self, week: usize) {
        self.ship.move_to(week);
    }

    /// Start a shot episode: append a bullet at progress 0 targeting
    /// `(week, day)`. Does not apply damage.
    pub fn fire_at(&mut self, week: usize, day: usize) {
        self.bullets.push(Bullet {
            week,
            target_day: day,
            progress: 0.0,
        });
    }

    /// Advance every in-flight bullet to `progress`.
    ///
    /// The sequencer owns the step counter; only one episode's bullets are
    /// ever live, so a single factor covers them all.
    pub fn set_bullet_progress(&mut self, progress: f32) {
        for bullet in &mut self.bullets {
            bullet.progress = progress;
        }
    }

    /// Apply one point of damage to the live enemy at `(week, day)`.
    ///
    /// Silent no-op when no live enemy occupies that cell; out-of-sync hits
    /// must not crash the pipeline.
    pub fn resolve_hit(&mut self, week: usize, day: usize) {
        if let Some(enemy) = self
            .enemies
            .iter_mut()
            .find(|e| e.week == week && e.day == day && e.is_alive())
        {
            enemy.take_damage();
        }
    }

    /// End the current shot episode.
    pub fn clear_bullets(&mut self) {
        self.bullets.clear();
    }

    /// Enemies still standing. Linear filter over the arena; grids are small
    /// and bounded, so this is not worth indexing.
    pub fn alive_enemies(&self) -> impl Iterator<Item = &Enemy> {
        self.enemies.iter().filter(|e| e.is_alive())
    }

    /// True once every enemy has been destroyed.
    pub fn is_complete(&self) -> bool {
        self.alive_enemies().next().is_none()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sim/state.rs"]
mod tests;
