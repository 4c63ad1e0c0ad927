use crate::foundation::color::Rgb8;
use crate::grid::model::GridShape;
use crate::render::raster::FrameRgba;
use crate::sim::state::GameState;

/// Visual tunables: pixel geometry and palette.
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    /// Cell edge length in pixels.
    pub cell_size: u32,
    /// Gap between adjacent cells.
    pub cell_spacing: u32,
    /// Symmetric canvas padding; also leaves room for the ship row.
    pub padding: u32,
    pub background: Rgb8,
    pub empty_cell: Rgb8,
    pub ship: Rgb8,
    pub bullet: Rgb8,
    /// Enemy colors keyed by current health: index 0 is health 1. Health above
    /// the highest entry clamps down to index 0.
    pub enemy_levels: Vec<Rgb8>,
    /// Bullet disc radius.
    pub bullet_radius: u32,
}

impl Theme {
    /// The GitHub dark contribution-calendar palette.
    pub fn github_dark() -> Self {
        Self {
            cell_size: 12,
            cell_spacing: 2,
            padding: 40,
            background: Rgb8::new(13, 17, 23),
            empty_cell: Rgb8::new(22, 27, 34),
            ship: Rgb8::new(88, 166, 255),
            bullet: Rgb8::new(255, 223, 0),
            enemy_levels: vec![
                Rgb8::new(0, 109, 50),
                Rgb8::new(38, 166, 65),
                Rgb8::new(57, 211, 83),
                Rgb8::new(87, 242, 135),
            ],
            bullet_radius: 3,
        }
    }

    /// Color for an enemy with `health` remaining hit points.
    ///
    /// Health beyond the palette clamps down to the health-1 entry; an empty
    /// palette falls back to the empty-cell color.
    pub fn enemy_color(&self, health: u8) -> Rgb8 {
        let idx = (health as usize).saturating_sub(1);
        self.enemy_levels
            .get(idx)
            .or_else(|| self.enemy_levels.first())
            .copied()
            .unwrap_or(self.empty_cell)
    }

    fn cell_pitch(&self) -> u32 {
        self.cell_size + self.cell_spacing
    }

    /// Pixel origin of cell `(week, day)`.
    pub fn cell_origin(&self, week: usize, day: usize) -> (i32, i32) {
        let x = self.padding + week as u32 * self.cell_pitch();
        let y = self.padding + day as u32 * self.cell_pitch();
        (x as i32, y as i32)
    }

    /// Top edge of the ship row, just below the grid.
    pub fn ship_row_y(&self, shape: GridShape) -> i32 {
        (self.padding + shape.days as u32 * self.cell_pitch()) as i32 + 10
    }

    /// Left edge of the ship for a column, or the off-grid resting spot.
    fn ship_x(&self, week: Option<usize>) -> i32 {
        match week {
            Some(week) => self.cell_origin(week, 0).0,
            None => self.padding as i32 - 20,
        }
    }
}

/// Canvas dimensions for a grid shape under a theme.
pub fn canvas_size(shape: GridShape, theme: &Theme) -> (u32, u32) {
    let pitch = theme.cell_size + theme.cell_spacing;
    let width = shape.weeks as u32 * pitch + 2 * theme.padding;
    let height = shape.days as u32 * pitch + 2 * theme.padding;
    (width, height)
}

/// Rasterize one snapshot of the simulation.
///
/// Pure with respect to `state` and deterministic. Paint order is back to
/// front and load-bearing: background, empty cells, alive enemies, bullets,
/// ship on top.
pub fn render_frame(state: &GameState, theme: &Theme) -> FrameRgba {
    let shape = state.shape();
    let (width, height) = canvas_size(shape, theme);
    let mut frame = FrameRgba::new(width, height, theme.background);

    // Playing field: every cell, occupied or not.
    for week in 0..shape.weeks {
        for day in 0..shape.days {
            let (x, y) = theme.cell_origin(week, day);
            frame.fill_rect(x, y, theme.cell_size, theme.cell_size, theme.empty_cell);
        }
    }

    for enemy in state.alive_enemies() {
        let (x, y) = theme.cell_origin(enemy.week, enemy.day);
        frame.fill_rect(
            x,
            y,
            theme.cell_size,
            theme.cell_size,
            theme.enemy_color(enemy.health),
        );
    }

    let ship_y = theme.ship_row_y(shape);
    let half_cell = (theme.cell_size / 2) as i32;

    for bullet in &state.bullets {
        let (cell_x, _) = theme.cell_origin(bullet.week, 0);
        let x = cell_x + half_cell;
        let (_, cell_y) = theme.cell_origin(bullet.week, bullet.target_day);
        let target_y = cell_y + half_cell;
        let y = ship_y as f32 + (target_y - ship_y) as f32 * bullet.progress;
        frame.fill_disc(x, y.round() as i32, theme.bullet_radius, theme.bullet);
    }

    // Ship last, always on top. Off-grid it still draws, left of the field.
    let ship_x = theme.ship_x(state.ship.week);
    let cell = theme.cell_size as i32;
    frame.fill_triangle(
        (ship_x + half_cell, ship_y),
        (ship_x, ship_y + cell),
        (ship_x + cell, ship_y + cell),
        theme.ship,
    );

    frame
}

#[cfg(test)]
#[path = "../../tests/unit/render/scene.rs"]
mod tests;
