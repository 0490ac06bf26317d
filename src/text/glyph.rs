use crate::foundation::core::{Point, Rect, Rgba8};
use crate::foundation::error::PixgenResult;
use crate::raster::canvas::Canvas;

/// Horizontal alignment of a run relative to its origin.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAnchor {
    /// Origin is the left edge of the run.
    #[default]
    Start,
    /// Origin is the horizontal centre of the run.
    Middle,
    /// Origin is the right edge of the run.
    End,
}

impl TextAnchor {
    pub(crate) fn as_svg(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
            Self::End => "end",
        }
    }
}

/// One line of text to draw.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextRun<'a> {
    /// The string to draw.
    pub text: &'a str,
    /// Font size in pixels.
    pub size_px: f32,
    /// Baseline origin in canvas pixels.
    pub origin: Point,
    /// Fill colour.
    pub color: Rgba8,
    /// Horizontal alignment around `origin`.
    pub anchor: TextAnchor,
}

/// Draws shaped text onto a canvas.
///
/// Implementations hold only read-only font data, so one instance can serve many threads.
pub trait GlyphRasterizer: Send + Sync {
    /// Composite `run` over `canvas`. Parts falling outside the canvas are clipped.
    fn draw_text(&self, canvas: &mut Canvas, run: &TextRun<'_>) -> PixgenResult<()>;

    /// Ink bounds of `run` in canvas coordinates, or `None` when nothing would be drawn or
    /// the rasterizer cannot measure text.
    fn measure(&self, run: &TextRun<'_>) -> PixgenResult<Option<Rect>> {
        let _ = run;
        Ok(None)
    }
}
