//! Glyph rasterization through a one-node SVG document rendered by `resvg`.

use anyhow::Context as _;

use crate::foundation::core::Rect;
use crate::foundation::error::{PixgenError, PixgenResult};
use crate::foundation::math::unpremultiply;
use crate::raster::canvas::Canvas;
use crate::text::fonts::FontBook;
use crate::text::glyph::{GlyphRasterizer, TextRun};

/// [`GlyphRasterizer`] backed by `usvg` text layout and `resvg` rasterization.
#[derive(Clone, Debug)]
pub struct SvgTextRasterizer {
    fonts: FontBook,
}

impl SvgTextRasterizer {
    /// Rasterize with faces from `fonts`.
    pub fn new(fonts: FontBook) -> Self {
        Self { fonts }
    }

    /// The shared font book.
    pub fn fonts(&self) -> &FontBook {
        &self.fonts
    }

    fn svg_document(&self, width: u32, height: u32, run: &TextRun<'_>) -> String {
        let c = run.color;
        let family = self
            .fonts
            .family()
            .map(|f| format!(r#" font-family="'{}'""#, xml_escape(f)))
            .unwrap_or_default();
        format!(
            concat!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#,
                r##"<text x="{x}" y="{y}" font-size="{size}" fill="#{r:02x}{g:02x}{b:02x}" fill-opacity="{alpha}" text-anchor="{anchor}"{family}"##,
                r#" xml:space="preserve">{text}</text></svg>"#,
            ),
            width = width,
            height = height,
            x = run.origin.x,
            y = run.origin.y,
            size = run.size_px,
            r = c.r,
            g = c.g,
            b = c.b,
            alpha = f32::from(c.a) / 255.0,
            anchor = run.anchor.as_svg(),
            family = family,
            text = xml_escape(run.text),
        )
    }

    /// Lay `run` out in a `width x height` viewport.
    fn layout(&self, width: u32, height: u32, run: &TextRun<'_>) -> PixgenResult<usvg::Tree> {
        if self.fonts.face_count() == 0 {
            return Err(PixgenError::font("no font faces loaded"));
        }
        if !run.size_px.is_finite() || run.size_px <= 0.0 {
            return Err(PixgenError::validation("text size must be > 0"));
        }

        let svg = self.svg_document(width, height, run);
        let mut opts = usvg::Options {
            fontdb: self.fonts.database(),
            font_resolver: make_font_resolver(),
            ..Default::default()
        };
        if let Some(family) = self.fonts.family() {
            opts.font_family = family.to_string();
        }

        usvg::Tree::from_str(&svg, &opts)
            .context("parse text svg")
            .map_err(|e| PixgenError::font(format!("{e:#}")))
    }
}

impl GlyphRasterizer for SvgTextRasterizer {
    #[tracing::instrument(skip(self, canvas), fields(text = run.text, size = run.size_px))]
    fn draw_text(&self, canvas: &mut Canvas, run: &TextRun<'_>) -> PixgenResult<()> {
        if run.text.is_empty() {
            return Ok(());
        }
        let (w, h) = (canvas.width(), canvas.height());
        let tree = self.layout(w, h, run)?;

        let mut pixmap = resvg::tiny_skia::Pixmap::new(w, h)
            .ok_or_else(|| PixgenError::font("failed to allocate text pixmap"))?;
        resvg::render(
            &tree,
            resvg::tiny_skia::Transform::default(),
            &mut pixmap.as_mut(),
        );

        let mut layer = pixmap.take();
        for px in layer.chunks_exact_mut(4) {
            let straight = unpremultiply([px[0], px[1], px[2], px[3]]);
            px.copy_from_slice(&straight);
        }
        let layer = Canvas::from_rgba8(w, h, layer)?;
        canvas.composite_over(&layer);
        Ok(())
    }

    fn measure(&self, run: &TextRun<'_>) -> PixgenResult<Option<Rect>> {
        if run.text.is_empty() {
            return Ok(None);
        }
        // A unit viewport keeps user space equal to canvas space.
        let tree = self.layout(1, 1, run)?;
        if !tree.root().has_children() {
            return Ok(None);
        }
        let b = tree.root().abs_bounding_box();
        if b.width() <= 0.0 || b.height() <= 0.0 {
            return Ok(None);
        }
        tracing::debug!(text = run.text, w = b.width(), h = b.height(), "measured text");
        Ok(Some(Rect::new(
            f64::from(b.left()),
            f64::from(b.top()),
            f64::from(b.right()),
            f64::from(b.bottom()),
        )))
    }
}

fn xml_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Prefer the requested families, then generic ones, then any loaded face.
fn make_font_resolver() -> usvg::FontResolver<'static> {
    use usvg::FontResolver;

    FontResolver {
        select_font: Box::new(|font, fontdb| {
            let mut families = Vec::<usvg::fontdb::Family<'_>>::new();
            for family in font.families() {
                families.push(match family {
                    usvg::FontFamily::Serif => usvg::fontdb::Family::Serif,
                    usvg::FontFamily::SansSerif => usvg::fontdb::Family::SansSerif,
                    usvg::FontFamily::Cursive => usvg::fontdb::Family::Cursive,
                    usvg::FontFamily::Fantasy => usvg::fontdb::Family::Fantasy,
                    usvg::FontFamily::Monospace => usvg::fontdb::Family::Monospace,
                    usvg::FontFamily::Named(s) => usvg::fontdb::Family::Name(s),
                });
            }
            families.push(usvg::fontdb::Family::SansSerif);
            families.push(usvg::fontdb::Family::Serif);

            let style = match font.style() {
                usvg::FontStyle::Normal => usvg::fontdb::Style::Normal,
                usvg::FontStyle::Italic => usvg::fontdb::Style::Italic,
                usvg::FontStyle::Oblique => usvg::fontdb::Style::Oblique,
            };

            let query = usvg::fontdb::Query {
                families: &families,
                weight: usvg::fontdb::Weight(font.weight()),
                stretch: usvg::fontdb::Stretch::Normal,
                style,
            };

            if let Some(id) = fontdb.query(&query) {
                return Some(id);
            }
            fontdb.faces().next().map(|f| f.id)
        }),
        select_fallback: FontResolver::default_fallback_selector(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/svg_text.rs"]
mod tests;
