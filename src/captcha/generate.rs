//! CAPTCHA composition: background, noise, jittered glyph tiles, wave distortion.

use crate::captcha::opts::CaptchaOpts;
use crate::foundation::core::{PixelPoint, Point, Rgba8};
use crate::foundation::error::PixgenResult;
use crate::foundation::math::Rng64;
use crate::raster::canvas::{Canvas, MAX_DIM};
use crate::raster::rotate::rotate;
use crate::raster::shapes::Shape;
use crate::raster::warp::Warp;
use crate::text::glyph::{GlyphRasterizer, TextAnchor, TextRun};

/// Largest tilt applied to a single glyph, in degrees.
const MAX_TILT_DEG: f64 = 30.0;

/// Glyph tile edge relative to the font size.
const TILE_SCALE: f64 = 1.4;

/// A rendered CAPTCHA and the code it shows.
#[derive(Clone, Debug)]
pub struct Captcha {
    /// The characters drawn on the image.
    pub code: String,
    /// Straight-alpha RGBA8 image.
    pub canvas: Canvas,
}

/// Render a CAPTCHA according to `opts`, drawing characters through `glyphs`.
///
/// The same seed, options and rasterizer always produce the same image.
#[tracing::instrument(skip(opts, glyphs), fields(w = opts.width, h = opts.height))]
pub fn generate_captcha(opts: &CaptchaOpts, glyphs: &dyn GlyphRasterizer) -> PixgenResult<Captcha> {
    opts.validate()?;
    let mut canvas = Canvas::new(opts.width, opts.height)?;

    let seed = opts.seed.unwrap_or_else(clock_seed);
    let mut rng = Rng64::new(seed);

    let code = if opts.code.is_empty() {
        random_code(&mut rng, &opts.charset, opts.length)
    } else {
        opts.code.clone()
    };
    tracing::debug!(seed, len = code.chars().count(), "captcha code chosen");

    let background = opts.background.unwrap_or_else(|| light_color(&mut rng));
    canvas.fill(background);

    let intensity = opts.disturbance.intensity();
    draw_noise(&mut canvas, &mut rng, intensity);
    draw_code(&mut canvas, &mut rng, &code, &opts.foreground, glyphs)?;

    if opts.warp {
        let h = f64::from(canvas.height());
        let amplitude = (h / 30.0 * f64::from(intensity) / 4.0).clamp(1.0, 6.0);
        let period = (f64::from(canvas.width()) / 2.0).max(1.0);
        Warp::new(amplitude, period)?.apply(&mut canvas);
    }

    Ok(Captcha { code, canvas })
}

fn clock_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0x5EED)
}

pub(crate) fn random_code(rng: &mut Rng64, charset: &str, len: usize) -> String {
    let chars: Vec<char> = charset.chars().collect();
    (0..len)
        .map(|_| chars[(rng.next_u64() % chars.len() as u64) as usize])
        .collect()
}

fn channel(rng: &mut Rng64, lo: i32, hi: i32) -> u8 {
    rng.range_i32(lo, hi).clamp(0, 255) as u8
}

fn light_color(rng: &mut Rng64) -> Rgba8 {
    Rgba8::opaque(
        channel(rng, 200, 255),
        channel(rng, 200, 255),
        channel(rng, 200, 255),
    )
}

fn dark_color(rng: &mut Rng64) -> Rgba8 {
    Rgba8::opaque(channel(rng, 0, 120), channel(rng, 0, 120), channel(rng, 0, 120))
}

fn noise_color(rng: &mut Rng64) -> Rgba8 {
    Rgba8::opaque(
        channel(rng, 80, 220),
        channel(rng, 80, 220),
        channel(rng, 80, 220),
    )
}

fn draw_noise(canvas: &mut Canvas, rng: &mut Rng64, intensity: u32) {
    let (w, h) = (canvas.width() as i32, canvas.height() as i32);
    let max_r = (h / 6).max(1);

    for _ in 0..intensity {
        let center = PixelPoint::new(rng.range_i32(0, w - 1), rng.range_i32(0, h - 1));
        let radius = rng.range_i32(1, max_r);
        let shape = if rng.coin() {
            Shape::Disk { center, radius }
        } else {
            Shape::Circle { center, radius }
        };
        let color = noise_color(rng);
        canvas.draw(&shape, color);
    }

    for _ in 0..intensity / 2 + 1 {
        let from = PixelPoint::new(rng.range_i32(0, w / 4), rng.range_i32(0, h - 1));
        let to = PixelPoint::new(rng.range_i32(w * 3 / 4, w - 1), rng.range_i32(0, h - 1));
        let color = noise_color(rng);
        canvas.draw(&Shape::Line { from, to }, color);
    }
}

fn draw_code(
    canvas: &mut Canvas,
    rng: &mut Rng64,
    code: &str,
    palette: &[Rgba8],
    glyphs: &dyn GlyphRasterizer,
) -> PixgenResult<()> {
    let n = code.chars().count();
    if n == 0 {
        return Ok(());
    }
    let (w, h) = (f64::from(canvas.width()), f64::from(canvas.height()));
    let slot = w / n as f64;
    let size_px = glyph_size(w, h, n);
    let tile = glyph_tile(size_px);
    let jitter = (h / 10.0).floor() as i32;

    let mut buf = [0u8; 4];
    for (i, ch) in code.chars().enumerate() {
        let color = if palette.is_empty() {
            dark_color(rng)
        } else {
            palette[i % palette.len()]
        };

        let mut tile_canvas = Canvas::new(tile, tile)?;
        let half = tile as f64 / 2.0;
        glyphs.draw_text(
            &mut tile_canvas,
            &TextRun {
                text: ch.encode_utf8(&mut buf),
                size_px: size_px as f32,
                origin: Point::new(half, half + size_px * 0.35),
                color,
                anchor: TextAnchor::Middle,
            },
        )?;

        let angle = rng.range_f64(-MAX_TILT_DEG, MAX_TILT_DEG);
        let tilted = rotate(&tile_canvas, angle)?;

        let cx = slot * (i as f64 + 0.5);
        let dx = (cx - f64::from(tilted.width()) / 2.0).round() as i32;
        let dy = ((h - f64::from(tilted.height())) / 2.0).round() as i32
            + rng.range_i32(-jitter, jitter);
        canvas.composite_over_at(&tilted, dx, dy);
    }
    Ok(())
}

/// Glyph size for `n` characters on a `w x h` canvas, capped so the tile still fits
/// [`MAX_DIM`] after the largest tilt.
pub(crate) fn glyph_size(w: f64, h: f64, n: usize) -> f64 {
    let tilt = MAX_TILT_DEG.to_radians();
    let max_tile = ((MAX_DIM - 1) as f64 / (tilt.cos() + tilt.sin())).floor();
    let max_size = ((max_tile - 1.0) / TILE_SCALE).floor();
    (h * 0.7)
        .min(w / n.max(1) as f64 * 1.2)
        .min(max_size)
        .max(4.0)
}

pub(crate) fn glyph_tile(size_px: f64) -> i64 {
    (size_px * TILE_SCALE).ceil() as i64
}

#[cfg(test)]
#[path = "../../tests/unit/captcha/generate.rs"]
mod tests;
