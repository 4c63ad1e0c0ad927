use crate::foundation::color::Rgb8;

/// A rendered frame as straight-alpha RGBA8 pixels, tightly packed, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRgba {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl FrameRgba {
    /// Allocate a frame filled with `background`.
    pub fn new(width: u32, height: u32, background: Rgb8) -> Self {
        let px = background.to_rgba();
        let mut data = vec![0u8; width as usize * height as usize * 4];
        for chunk in data.chunks_exact_mut(4) {
            chunk.copy_from_slice(&px);
        }
        Self {
            width,
            height,
            data,
        }
    }

    /// RGBA value at `(x, y)`, or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        Some([
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
            self.data[idx + 3],
        ])
    }

    fn put_pixel(&mut self, x: i64, y: i64, px: [u8; 4]) {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return;
        }
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        self.data[idx..idx + 4].copy_from_slice(&px);
    }

    /// Fill an axis-aligned rectangle, clipped to the canvas.
    ///
    /// Coordinates are signed so geometry that hangs off the canvas (the
    /// off-grid ship) clips instead of wrapping.
    pub fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Rgb8) {
        let px = color.to_rgba();
        let x0 = i64::from(x).max(0);
        let y0 = i64::from(y).max(0);
        let x1 = (i64::from(x) + i64::from(w)).min(i64::from(self.width));
        let y1 = (i64::from(y) + i64::from(h)).min(i64::from(self.height));
        for yy in y0..y1 {
            for xx in x0..x1 {
                self.put_pixel(xx, yy, px);
            }
        }
    }

    /// Fill a disc of radius `r` centered at `(cx, cy)`, clipped to the canvas.
    pub fn fill_disc(&mut self, cx: i32, cy: i32, r: u32, color: Rgb8) {
        let px = color.to_rgba();
        let r = i64::from(r);
        let (cx, cy) = (i64::from(cx), i64::from(cy));
        for dy in -r..=r {
            for dx in -r..=r {
                if dx * dx + dy * dy <= r * r {
                    self.put_pixel(cx + dx, cy + dy, px);
                }
            }
        }
    }

    /// Fill a triangle given by three vertices, clipped to the canvas.
    ///
    /// Winding-insensitive: a point is inside when it sits on the same side of
    /// all three edges.
    pub fn fill_triangle(&mut self, a: (i32, i32), b: (i32, i32), c: (i32, i32), color: Rgb8) {
        fn edge(a: (i64, i64), b: (i64, i64), p: (i64, i64)) -> i64 {
            (b.0 - a.0) * (p.1 - a.1) - (b.1 - a.1) * (p.0 - a.0)
        }

        let px = color.to_rgba();
        let a = (i64::from(a.0), i64::from(a.1));
        let b = (i64::from(b.0), i64::from(b.1));
        let c = (i64::from(c.0), i64::from(c.1));

        let min_x = a.0.min(b.0).min(c.0).max(0);
        let max_x = a.0.max(b.0).max(c.0).min(i64::from(self.width) - 1);
        let min_y = a.1.min(b.1).min(c.1).max(0);
        let max_y = a.1.max(b.1).max(c.1).min(i64::from(self.height) - 1);

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let p = (x, y);
                let e0 = edge(a, b, p);
                let e1 = edge(b, c, p);
                let e2 = edge(c, a, p);
                if (e0 >= 0 && e1 >= 0 && e2 >= 0) || (e0 <= 0 && e1 <= 0 && e2 <= 0) {
                    self.put_pixel(x, y, px);
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
