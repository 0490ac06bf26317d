//! Owned RGBA8 pixel buffer.

use crate::foundation::core::Rgba8;
use crate::foundation::error::{PixgenError, PixgenResult};
use crate::raster::composite::over_straight;

/// Largest accepted extent on either axis.
pub const MAX_DIM: i64 = 16_384;

/// A `width x height` grid of straight-alpha RGBA8 pixels, row-major, stride `width * 4`.
///
/// Every pixel access is bounds-checked: reads outside the rectangle yield `None`, writes
/// outside it are dropped.
#[derive(Clone, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl std::fmt::Debug for Canvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Canvas")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("data_len", &self.data.len())
            .finish()
    }
}

impl Canvas {
    /// Allocate a transparent canvas. Fails with `InvalidDimension` unless both extents are
    /// in `1..=MAX_DIM`.
    pub fn new(width: i64, height: i64) -> PixgenResult<Self> {
        if width <= 0 || height <= 0 || width > MAX_DIM || height > MAX_DIM {
            return Err(PixgenError::invalid_dimension(width, height));
        }
        let (width, height) = (width as u32, height as u32);
        Ok(Self {
            width,
            height,
            data: vec![0u8; (width as usize) * (height as usize) * 4],
        })
    }

    /// Wrap an existing straight-alpha RGBA8 buffer.
    pub fn from_rgba8(width: u32, height: u32, data: Vec<u8>) -> PixgenResult<Self> {
        let canvas = Self::new(i64::from(width), i64::from(height))?;
        if data.len() != canvas.data.len() {
            return Err(PixgenError::validation(format!(
                "rgba8 buffer has {} bytes, expected {} for {width}x{height}",
                data.len(),
                canvas.data.len()
            )));
        }
        Ok(Self { data, ..canvas })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw row-major RGBA8 bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consume the canvas, returning its RGBA8 bytes.
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Return `true` when `(x, y)` addresses a pixel of this canvas.
    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    #[inline]
    fn offset(&self, x: i32, y: i32) -> Option<usize> {
        self.contains(x, y)
            .then(|| ((y as usize) * (self.width as usize) + (x as usize)) * 4)
    }

    /// Byte offset of an in-bounds pixel, for hot loops that already clamped.
    #[inline]
    pub(crate) fn byte_index(&self, x: u32, y: u32) -> usize {
        debug_assert!(x < self.width && y < self.height);
        ((y as usize) * (self.width as usize) + (x as usize)) * 4
    }

    /// Read a pixel; `None` outside the canvas.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<Rgba8> {
        let off = self.offset(x, y)?;
        Some(Rgba8::new(
            self.data[off],
            self.data[off + 1],
            self.data[off + 2],
            self.data[off + 3],
        ))
    }

    /// Write a pixel. Returns `false` (and writes nothing) outside the canvas.
    #[inline]
    pub fn set(&mut self, x: i32, y: i32, color: Rgba8) -> bool {
        match self.offset(x, y) {
            Some(off) => {
                self.data[off..off + 4].copy_from_slice(&color.to_array());
                true
            }
            None => false,
        }
    }

    /// Read a pixel, reporting `OutOfRange` outside the canvas.
    pub fn try_get(&self, x: i32, y: i32) -> PixgenResult<Rgba8> {
        self.get(x, y).ok_or_else(|| self.out_of_range(x, y))
    }

    /// Write a pixel, reporting `OutOfRange` outside the canvas.
    pub fn try_set(&mut self, x: i32, y: i32, color: Rgba8) -> PixgenResult<()> {
        if self.set(x, y, color) {
            Ok(())
        } else {
            Err(self.out_of_range(x, y))
        }
    }

    fn out_of_range(&self, x: i32, y: i32) -> PixgenError {
        PixgenError::OutOfRange {
            x,
            y,
            width: self.width,
            height: self.height,
        }
    }

    /// Overwrite every pixel with `color`.
    pub fn fill(&mut self, color: Rgba8) {
        let px = color.to_array();
        for d in self.data.chunks_exact_mut(4) {
            d.copy_from_slice(&px);
        }
    }

    /// Blend `source` over this canvas, both anchored at the origin.
    pub fn composite_over(&mut self, source: &Canvas) {
        self.composite_over_at(source, 0, 0);
    }

    /// Blend `source` over this canvas with its top-left corner at `(dx, dy)`.
    ///
    /// Only the overlap of the two rectangles is touched.
    pub fn composite_over_at(&mut self, source: &Canvas, dx: i32, dy: i32) {
        let x0 = dx.max(0);
        let y0 = dy.max(0);
        let x1 = (i64::from(dx) + i64::from(source.width)).min(i64::from(self.width));
        let y1 = (i64::from(dy) + i64::from(source.height)).min(i64::from(self.height));
        if i64::from(x0) >= x1 || i64::from(y0) >= y1 {
            return;
        }

        for y in y0..y1 as i32 {
            for x in x0..x1 as i32 {
                let s_off = source.byte_index((x - dx) as u32, (y - dy) as u32);
                let d_off = self.byte_index(x as u32, y as u32);
                let s = [
                    source.data[s_off],
                    source.data[s_off + 1],
                    source.data[s_off + 2],
                    source.data[s_off + 3],
                ];
                let d = [
                    self.data[d_off],
                    self.data[d_off + 1],
                    self.data[d_off + 2],
                    self.data[d_off + 3],
                ];
                self.data[d_off..d_off + 4].copy_from_slice(&over_straight(d, s));
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/canvas.rs"]
mod tests;
