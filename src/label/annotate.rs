//! Two-line annotated image: a main line plus a highlighted tip line, centred.

use crate::foundation::core::{Point, Rgba8};
use crate::foundation::error::PixgenResult;
use crate::raster::canvas::Canvas;
use crate::text::glyph::{GlyphRasterizer, TextAnchor, TextRun};

/// Vertical gap between the two lines, in pixels.
const LINE_GAP_PX: f64 = 10.0;

/// Label rendering options.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LabelOpts {
    /// Image width in pixels.
    pub width: i64,
    /// Image height in pixels.
    pub height: i64,
    /// Main line.
    pub text: String,
    /// Secondary line drawn below the main one.
    pub tip: String,
    /// Background colour.
    pub background: Rgba8,
    /// Main line colour.
    pub text_color: Rgba8,
    /// Tip line colour.
    pub tip_color: Rgba8,
}

impl Default for LabelOpts {
    fn default() -> Self {
        Self {
            width: 500,
            height: 100,
            text: "null".to_string(),
            tip: "Check the image against the copied address before transferring".to_string(),
            background: Rgba8::WHITE,
            text_color: Rgba8::BLACK,
            tip_color: Rgba8::RED,
        }
    }
}

impl LabelOpts {
    /// Font size scaled with the image area.
    pub fn font_size(&self) -> f64 {
        ((self.width as f64) * (self.height as f64) / 100.0).sqrt()
    }
}

/// Render the label image.
///
/// Both lines are centred horizontally. Vertically, the block made of the two ink boxes
/// plus the gap is centred. When the rasterizer cannot measure text, each line is assumed
/// to be one font size tall with its baseline at 0.8 em.
#[tracing::instrument(skip(opts, glyphs), fields(w = opts.width, h = opts.height))]
pub fn render_label(opts: &LabelOpts, glyphs: &dyn GlyphRasterizer) -> PixgenResult<Canvas> {
    let mut canvas = Canvas::new(opts.width, opts.height)?;
    canvas.fill(opts.background);

    let size = opts.font_size();
    let (w, h) = (f64::from(canvas.width()), f64::from(canvas.height()));
    let run = |text, color, baseline| TextRun {
        text,
        size_px: size as f32,
        origin: Point::new(w / 2.0, baseline),
        color,
        anchor: TextAnchor::Middle,
    };

    let main = run(opts.text.as_str(), opts.text_color, 0.0);
    let tip = run(opts.tip.as_str(), opts.tip_color, 0.0);
    let (main_ascent, main_height) = line_extent(glyphs, &main, size)?;
    let (tip_ascent, tip_height) = line_extent(glyphs, &tip, size)?;

    let top = (h - (main_height + LINE_GAP_PX + tip_height)) / 2.0;
    let main_baseline = top + main_ascent;
    let tip_baseline = top + main_height + LINE_GAP_PX + tip_ascent;
    tracing::debug!(main_baseline, tip_baseline, "label layout");

    glyphs.draw_text(&mut canvas, &run(main.text, main.color, main_baseline))?;
    glyphs.draw_text(&mut canvas, &run(tip.text, tip.color, tip_baseline))?;
    Ok(canvas)
}

/// Height above the baseline and total height of a line laid out at baseline 0.
fn line_extent(
    glyphs: &dyn GlyphRasterizer,
    run: &TextRun<'_>,
    size: f64,
) -> PixgenResult<(f64, f64)> {
    Ok(match glyphs.measure(run)? {
        Some(ink) => (-ink.y0, ink.height().ceil()),
        None => (size * 0.8, size),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/label/annotate.rs"]
mod tests;
