//! Sinusoidal wave distortion.

use crate::foundation::error::{PixgenError, PixgenResult};
use crate::raster::canvas::Canvas;

/// Wave distortion parameters.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Warp {
    /// Peak displacement in pixels.
    pub amplitude: f64,
    /// Wavelength control in pixels; one full wave spans `period / 0.7` pixels.
    pub period: f64,
}

impl Warp {
    /// Validate parameters: finite amplitude, finite positive period.
    pub fn new(amplitude: f64, period: f64) -> PixgenResult<Self> {
        if !amplitude.is_finite() {
            return Err(PixgenError::validation("warp amplitude must be finite"));
        }
        if !period.is_finite() || period <= 0.0 {
            return Err(PixgenError::validation("warp period must be > 0"));
        }
        Ok(Self { amplitude, period })
    }

    fn omega(&self) -> f64 {
        1.4 * std::f64::consts::PI / self.period
    }

    /// Displacement applied to destination pixel `(x, y)`.
    pub fn offset(&self, x: u32, y: u32) -> (i32, i32) {
        let k = self.omega();
        (self.x_offset(k, y), self.y_offset(k, x))
    }

    fn x_offset(&self, k: f64, y: u32) -> i32 {
        (self.amplitude * (f64::from(y) * k).sin()).round() as i32
    }

    fn y_offset(&self, k: f64, x: u32) -> i32 {
        (self.amplitude * (f64::from(x) * k).cos()).round() as i32
    }

    /// Distort `canvas` in place.
    ///
    /// Every destination pixel reads from a snapshot taken before the pass, so the result
    /// does not depend on traversal order. Off-canvas or fully transparent samples leave the
    /// destination pixel untouched.
    #[tracing::instrument(skip(canvas), fields(w = canvas.width(), h = canvas.height()))]
    pub fn apply(&self, canvas: &mut Canvas) {
        let (w, h) = (canvas.width(), canvas.height());
        let k = self.omega();
        let x_off: Vec<i32> = (0..h).map(|y| self.x_offset(k, y)).collect();
        let y_off: Vec<i32> = (0..w).map(|x| self.y_offset(k, x)).collect();

        let snapshot = canvas.clone();
        for y in 0..h {
            for x in 0..w {
                let sx = i64::from(x) + i64::from(x_off[y as usize]);
                let sy = i64::from(y) + i64::from(y_off[x as usize]);
                let (Ok(sx), Ok(sy)) = (i32::try_from(sx), i32::try_from(sy)) else {
                    continue;
                };
                match snapshot.get(sx, sy) {
                    Some(c) if c.a > 0 => {
                        canvas.set(x as i32, y as i32, c);
                    }
                    _ => {}
                }
            }
        }
    }
}

/// Validate the parameters and distort `canvas` in place.
pub fn warp(canvas: &mut Canvas, amplitude: f64, period: f64) -> PixgenResult<()> {
    Warp::new(amplitude, period)?.apply(canvas);
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/raster/warp.rs"]
mod tests;
