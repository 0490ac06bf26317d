//! Rotation by inverse mapping through the bilinear sampler.

use crate::foundation::core::{Affine, Point, Rect};
use crate::foundation::error::{PixgenError, PixgenResult};
use crate::raster::canvas::Canvas;
use crate::raster::resample::sample_surface;

/// Geometry of one rotation: output size plus the destination-to-source mapping.
#[derive(Clone, Copy, Debug)]
pub struct Rotation {
    src_width: u32,
    src_height: u32,
    dst_width: u32,
    dst_height: u32,
    inverse: Affine,
}

impl Rotation {
    /// Plan a rotation of a `src_width x src_height` canvas by `angle_deg` degrees
    /// (counter-clockwise on screen; any magnitude).
    pub fn new(src_width: u32, src_height: u32, angle_deg: f64) -> PixgenResult<Self> {
        if !angle_deg.is_finite() {
            return Err(PixgenError::validation(format!(
                "rotation angle must be finite, got {angle_deg}"
            )));
        }
        let rad = angle_deg.rem_euclid(360.0).to_radians();

        let (sw, sh) = (f64::from(src_width), f64::from(src_height));
        let corners = Rect::new(-0.5 * sw, -0.5 * sh, 0.5 * sw, 0.5 * sh);
        let bbox = Affine::rotate(-rad).transform_rect_bbox(corners);

        let extent = |v: f64| (v + 0.5).floor().max(1.0) as i64;
        let (dw, dh) = (extent(bbox.width()), extent(bbox.height()));
        if dw > crate::raster::canvas::MAX_DIM || dh > crate::raster::canvas::MAX_DIM {
            return Err(PixgenError::invalid_dimension(dw, dh));
        }
        let (dst_width, dst_height) = (dw as u32, dh as u32);

        let dst_center = Point::new(0.5 * f64::from(dst_width), 0.5 * f64::from(dst_height));
        let src_center = Point::new(0.5 * sw, 0.5 * sh);
        let inverse = Affine::translate(src_center.to_vec2())
            * Affine::rotate(rad)
            * Affine::translate(-dst_center.to_vec2());

        Ok(Self {
            src_width,
            src_height,
            dst_width,
            dst_height,
            inverse,
        })
    }

    /// Size of the canvas that holds the whole rotated source.
    pub fn output_size(&self) -> (u32, u32) {
        (self.dst_width, self.dst_height)
    }

    /// Source surface point seen by the centre of destination pixel `(x, y)`.
    pub fn source_point(&self, x: u32, y: u32) -> Point {
        self.inverse * Point::new(f64::from(x) + 0.5, f64::from(y) + 0.5)
    }

    fn in_source(&self, p: Point) -> bool {
        p.x >= 0.0
            && p.y >= 0.0
            && p.x < f64::from(self.src_width)
            && p.y < f64::from(self.src_height)
    }

    /// Render `src` into a fresh canvas. Destination pixels with no source coverage stay
    /// transparent.
    pub fn apply(&self, src: &Canvas) -> PixgenResult<Canvas> {
        if (src.width(), src.height()) != (self.src_width, self.src_height) {
            return Err(PixgenError::validation(format!(
                "rotation planned for {}x{} but source is {}x{}",
                self.src_width,
                self.src_height,
                src.width(),
                src.height()
            )));
        }

        let mut dst = Canvas::new(i64::from(self.dst_width), i64::from(self.dst_height))?;
        for y in 0..self.dst_height {
            for x in 0..self.dst_width {
                let p = self.source_point(x, y);
                if !self.in_source(p) {
                    continue;
                }
                let c = sample_surface(src, p.x, p.y);
                dst.set(x as i32, y as i32, c);
            }
        }
        Ok(dst)
    }
}

/// Rotate `src` by `angle_deg` degrees into a new, fully containing canvas.
#[tracing::instrument(skip(src), fields(w = src.width(), h = src.height()))]
pub fn rotate(src: &Canvas, angle_deg: f64) -> PixgenResult<Canvas> {
    let plan = Rotation::new(src.width(), src.height(), angle_deg)?;
    let (w, h) = plan.output_size();
    tracing::debug!(w, h, "rotated canvas size");
    plan.apply(src)
}

impl Canvas {
    /// Consume this canvas and return its rotation by `angle_deg` degrees.
    pub fn into_rotated(self, angle_deg: f64) -> PixgenResult<Canvas> {
        rotate(&self, angle_deg)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/rotate.rs"]
mod tests;
