//! Bilinear sampling with edge clamping.
//!
//! Two coordinate conventions meet here:
//!
//! - *surface* coordinates treat the canvas as the continuous rectangle `[0, w) x [0, h)`
//!   with the centre of pixel `(i, j)` at `(i + 0.5, j + 0.5)`. Geometric transforms work in
//!   this space.
//! - *pixel* coordinates put the centre of pixel `(i, j)` at `(i, j)`, so `resample(c, 1.0,
//!   0.0)` is exactly pixel `(1, 0)`.

use crate::foundation::core::Rgba8;
use crate::raster::canvas::Canvas;

/// The four contributing source pixels and their weights.
///
/// Weight suffixes follow `<row><column>`: `0` is top/left, `1` is bottom/right. Weights are
/// non-negative and sum to `1.0` up to rounding.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResampleWeights {
    /// Top-left sample (column, row).
    pub low: (i32, i32),
    /// Bottom-right sample (column, row).
    pub high: (i32, i32),
    /// Weight of `(low.0, low.1)`.
    pub frac00: f64,
    /// Weight of `(high.0, low.1)`.
    pub frac01: f64,
    /// Weight of `(low.0, high.1)`.
    pub frac10: f64,
    /// Weight of `(high.0, high.1)`.
    pub frac11: f64,
}

impl ResampleWeights {
    /// Locate the taps for surface point `(sx, sy)` on a `width x height` source.
    pub fn locate(width: u32, height: u32, sx: f64, sy: f64) -> Self {
        let (min_x, min_y) = (0.0, 0.0);
        let (max_x, max_y) = (f64::from(width), f64::from(height));

        let low_x = (sx - 0.5).floor().max(min_x);
        let low_y = (sy - 0.5).floor().max(min_y);
        let high_x = (sx - 0.5).ceil().min(max_x - 1.0);
        let high_y = (sy - 0.5).ceil().min(max_y - 1.0);
        // Far outside the rectangle floor/ceil can cross the clamps; keep low <= high.
        let low_x = low_x.min(high_x.max(min_x));
        let low_y = low_y.min(high_y.max(min_y));
        let high_x = high_x.max(low_x);
        let high_y = high_y.max(low_y);

        // Centres of the four taps.
        let (x00, y00) = (low_x + 0.5, low_y + 0.5);
        let (x01, y01) = (high_x + 0.5, low_y + 0.5);
        let (x10, y10) = (low_x + 0.5, high_y + 0.5);
        let (x11, y11) = (high_x + 0.5, high_y + 0.5);

        let mut w = Self {
            low: (low_x as i32, low_y as i32),
            high: (high_x as i32, high_y as i32),
            frac00: 0.0,
            frac01: 0.0,
            frac10: 0.0,
            frac11: 0.0,
        };

        if low_x == high_x && low_y == high_y {
            w.frac00 = 1.0;
        } else if sy - min_y <= 0.5 && sx - min_x <= 0.5 {
            w.frac00 = 1.0;
        } else if max_y - sy <= 0.5 && max_x - sx <= 0.5 {
            w.frac11 = 1.0;
        } else if sy - min_y <= 0.5 || low_y == high_y {
            w.frac00 = x01 - sx;
            w.frac01 = sx - x00;
        } else if sx - min_x <= 0.5 || low_x == high_x {
            w.frac00 = y10 - sy;
            w.frac10 = sy - y00;
        } else if max_y - sy <= 0.5 {
            w.frac10 = x11 - sx;
            w.frac11 = sx - x10;
        } else if max_x - sx <= 0.5 {
            w.frac01 = y11 - sy;
            w.frac11 = sy - y01;
        } else {
            w.frac00 = (x01 - sx) * (y10 - sy);
            w.frac01 = (sx - x00) * (y11 - sy);
            w.frac10 = (x11 - sx) * (sy - y00);
            w.frac11 = (sx - x10) * (sy - y01);
        }

        w
    }

    /// Sum of the four weights.
    pub fn total(&self) -> f64 {
        self.frac00 + self.frac01 + self.frac10 + self.frac11
    }
}

/// Sample `src` at surface coordinates (pixel centres at `+0.5`).
pub fn sample_surface(src: &Canvas, sx: f64, sy: f64) -> Rgba8 {
    let w = ResampleWeights::locate(src.width(), src.height(), sx, sy);
    let data = src.data();

    let taps = [
        (w.low.0, w.low.1, w.frac00),
        (w.high.0, w.low.1, w.frac01),
        (w.low.0, w.high.1, w.frac10),
        (w.high.0, w.high.1, w.frac11),
    ];

    let mut acc = [0.0f64; 4];
    for (x, y, frac) in taps {
        if frac == 0.0 {
            continue;
        }
        let off = src.byte_index(x as u32, y as u32);
        for c in 0..4 {
            acc[c] += f64::from(data[off + c]) * frac;
        }
    }

    let q = |v: f64| (v + 0.5).clamp(0.0, 255.0) as u8;
    Rgba8::new(q(acc[0]), q(acc[1]), q(acc[2]), q(acc[3]))
}

/// Sample `src` at pixel coordinates: `(i, j)` is the centre of pixel `(i, j)`.
pub fn resample(src: &Canvas, x: f64, y: f64) -> Rgba8 {
    sample_surface(src, x + 0.5, y + 0.5)
}

#[cfg(test)]
#[path = "../../tests/unit/raster/resample.rs"]
mod tests;
