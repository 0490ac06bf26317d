//! Integer scan conversion of line segments and circles.

use crate::foundation::core::{PixelPoint, Rgba8};
use crate::raster::canvas::Canvas;

/// Closed set of drawable primitives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    /// One-pixel Bresenham segment, both endpoints included.
    Line {
        /// Start point.
        from: PixelPoint,
        /// End point.
        to: PixelPoint,
    },
    /// Midpoint circle outline.
    Circle {
        /// Centre.
        center: PixelPoint,
        /// Radius in pixels.
        radius: i32,
    },
    /// Solid midpoint disk.
    Disk {
        /// Centre.
        center: PixelPoint,
        /// Radius in pixels.
        radius: i32,
    },
}

impl Canvas {
    /// Rasterize `shape` in `color`. Pixels outside the canvas are dropped.
    pub fn draw(&mut self, shape: &Shape, color: Rgba8) {
        match *shape {
            Shape::Line { from, to } => self.draw_line(from, to, color),
            Shape::Circle { center, radius } => self.draw_circle(center, radius, false, color),
            Shape::Disk { center, radius } => self.draw_circle(center, radius, true, color),
        }
    }

    /// Bresenham segment from `from` to `to`, one pixel per step of the major axis.
    ///
    /// Identical endpoints draw nothing. Only the steps whose major coordinate lands on the
    /// canvas are visited; the error term is seeded for the first of them.
    pub fn draw_line(&mut self, from: PixelPoint, to: PixelPoint, color: Rgba8) {
        let (mut x1, mut y1) = (i64::from(from.x), i64::from(from.y));
        let (mut x2, mut y2) = (i64::from(to.x), i64::from(to.y));
        let mut dx = (x2 - x1).abs();
        let mut dy = (y2 - y1).abs();

        let steep = dy > dx;
        if steep {
            std::mem::swap(&mut x1, &mut y1);
            std::mem::swap(&mut x2, &mut y2);
            std::mem::swap(&mut dx, &mut dy);
        }
        if dx == 0 {
            return;
        }

        let major_len = i64::from(if steep { self.height() } else { self.width() });
        let ix = (x2 - x1).signum();
        let iy = if y2 > y1 { 1 } else { -1 };

        let (k_lo, k_hi) = if ix > 0 {
            (-x1, major_len - 1 - x1)
        } else {
            (x1 - (major_len - 1), x1)
        };
        let (k_lo, k_hi) = (k_lo.max(0), k_hi.min(dx));
        if k_lo > k_hi {
            return;
        }

        // Before step k the minor axis has advanced round_half_up(k * dy / dx) times.
        let (wdx, wdy, wk) = (i128::from(dx), i128::from(dy), i128::from(k_lo));
        let advanced = (2 * wdy * wk + wdx).div_euclid(2 * wdx);
        let mut d = (2 * wdy * (wk + 1) - wdx - 2 * wdx * advanced) as i64;
        let mut x = x1 + ix * k_lo;
        let mut y = y1 + iy * advanced as i64;

        let n2dy = 2 * dy;
        let n2dydx = 2 * (dy - dx);
        for _ in k_lo..=k_hi {
            if steep {
                self.plot(y, x, color);
            } else {
                self.plot(x, y, color);
            }
            if d < 0 {
                d += n2dy;
            } else {
                y += iy;
                d += n2dydx;
            }
            x += ix;
        }
    }

    /// Midpoint circle with 8-way symmetry. With `fill`, every octant step sweeps the band
    /// `[x, y]`, producing a solid disk.
    ///
    /// Each octant row is solved directly from the midpoint decision rule, so only the
    /// clipped bounding box is scanned whatever the radius.
    pub fn draw_circle(&mut self, center: PixelPoint, radius: i32, fill: bool, color: Rgba8) {
        if radius < 0 {
            return;
        }
        let (xc, yc, r) = (i64::from(center.x), i64::from(center.y), i64::from(radius));
        let (w, h) = (i64::from(self.width()), i64::from(self.height()));
        let (x0, x1) = ((xc - r).max(0), (xc + r).min(w - 1));
        let (y0, y1) = ((yc - r).max(0), (yc + r).min(h - 1));
        if x0 > x1 || y0 > y1 {
            return;
        }

        // Octant column p is min(|dx|, |dy|), so it is always one of the two offsets.
        let column_edges: Vec<Option<i64>> =
            (x0..=x1).map(|px| octant_edge(r, (px - xc).abs())).collect();

        for py in y0..=y1 {
            let b = (py - yc).abs();
            let row_edge = octant_edge(r, b);
            for px in x0..=x1 {
                let a = (px - xc).abs();
                let (p, q, edge) = if a <= b {
                    (a, b, column_edges[(px - x0) as usize])
                } else {
                    (b, a, row_edge)
                };
                let Some(edge) = edge else {
                    continue;
                };
                if p > edge {
                    continue;
                }
                let hit = if fill { q <= edge } else { q == edge };
                if hit {
                    self.plot(px, py, color);
                }
            }
        }
    }

    fn plot(&mut self, x: i64, y: i64, color: Rgba8) {
        if let (Ok(x), Ok(y)) = (i32::try_from(x), i32::try_from(y)) {
            self.set(x, y, color);
        }
    }
}

/// Row the midpoint algorithm plots at column `p` of the first octant: the largest `y`
/// with `y^2 - y < r^2 - p^2`. `None` once the column lies past the circle.
fn octant_edge(r: i64, p: i64) -> Option<i64> {
    if p == 0 {
        return Some(r);
    }
    let t = i128::from(r) * i128::from(r) - i128::from(p) * i128::from(p);
    if t <= 0 {
        return None;
    }
    let below = |y: i128| y * y - y < t;
    let mut y = (1 + (4 * t + 1).isqrt()) / 2;
    while !below(y) {
        y -= 1;
    }
    while below(y + 1) {
        y += 1;
    }
    Some(y as i64)
}

#[cfg(test)]
#[path = "../../tests/unit/raster/shapes.rs"]
mod tests;
