//! QR code images: the symbol matrix comes from `qrcode`, scaled onto a square canvas.

use std::str::FromStr;

use qrcode::{Color, EcLevel, QrCode};

use crate::foundation::core::Rgba8;
use crate::foundation::error::{PixgenError, PixgenResult};
use crate::raster::canvas::Canvas;

/// Error correction level of the symbol.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum QrLevel {
    /// About 7% of codewords recoverable.
    L,
    /// About 15%.
    M,
    /// About 25%.
    Q,
    /// About 30%.
    #[default]
    H,
}

impl QrLevel {
    fn ec_level(self) -> EcLevel {
        match self {
            Self::L => EcLevel::L,
            Self::M => EcLevel::M,
            Self::Q => EcLevel::Q,
            Self::H => EcLevel::H,
        }
    }
}

impl FromStr for QrLevel {
    type Err = PixgenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "L" => Ok(Self::L),
            "M" => Ok(Self::M),
            "Q" => Ok(Self::Q),
            "H" => Ok(Self::H),
            other => Err(PixgenError::validation(format!(
                "invalid QR code level '{other}', expected one of L, M, Q, H"
            ))),
        }
    }
}

/// QR rendering options. Every field has a default, so partial JSON is accepted.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct QrOpts {
    /// Payload, encoded as bytes.
    pub text: String,
    /// Error correction level.
    pub level: QrLevel,
    /// Side of the square image in pixels.
    pub size: i64,
    /// Blank border around the symbol, in pixels.
    pub margin: i64,
    /// Dark module colour. Accepts names such as `purple` as well as hex.
    pub foreground: Rgba8,
    /// Light module and border colour.
    pub background: Rgba8,
}

impl Default for QrOpts {
    fn default() -> Self {
        Self {
            text: "null".to_string(),
            level: QrLevel::H,
            size: 300,
            margin: 0,
            foreground: Rgba8::BLACK,
            background: Rgba8::WHITE,
        }
    }
}

impl QrOpts {
    /// Check the margin against the size. The size itself is checked when the canvas is created.
    pub fn validate(&self) -> PixgenResult<()> {
        if self.margin < 0 {
            return Err(PixgenError::validation(format!(
                "margin must be non-negative, got {}",
                self.margin
            )));
        }
        if self.margin > self.size / 4 {
            return Err(PixgenError::validation(format!(
                "margin {} cannot be greater than one quarter of the size {}",
                self.margin, self.size
            )));
        }
        Ok(())
    }
}

/// Render `opts.text` as a QR code.
///
/// The symbol is drawn without its quiet zone into the `size - 2 * margin` square at
/// `(margin, margin)`, each pixel taking the colour of the module it falls in. The area
/// must hold at least one pixel per module.
#[tracing::instrument(skip(opts), fields(size = opts.size, level = ?opts.level))]
pub fn render_qr(opts: &QrOpts) -> PixgenResult<Canvas> {
    opts.validate()?;
    let mut canvas = Canvas::new(opts.size, opts.size)?;
    canvas.fill(opts.background);

    let code = QrCode::with_error_correction_level(opts.text.as_bytes(), opts.level.ec_level())
        .map_err(|e| PixgenError::validation(format!("cannot encode QR payload: {e}")))?;
    let modules = code.width();
    let colors = code.to_colors();

    let inner = opts.size - 2 * opts.margin;
    let inner_px = usize::try_from(inner).unwrap_or(0);
    if inner_px < modules {
        return Err(PixgenError::validation(format!(
            "size {} with margin {} leaves {inner}px for {modules} modules",
            opts.size, opts.margin
        )));
    }
    tracing::debug!(modules, inner, "qr symbol");

    let mut symbol = Canvas::new(inner, inner)?;
    for py in 0..inner_px {
        let row = py * modules / inner_px;
        for px in 0..inner_px {
            let col = px * modules / inner_px;
            let color = match colors[row * modules + col] {
                Color::Dark => opts.foreground,
                Color::Light => opts.background,
            };
            symbol.set(px as i32, py as i32, color);
        }
    }

    let offset = i32::try_from(opts.margin)
        .map_err(|_| PixgenError::validation(format!("margin {} is too large", opts.margin)))?;
    canvas.composite_over_at(&symbol, offset, offset);
    Ok(canvas)
}

#[cfg(test)]
#[path = "../../tests/unit/qr/symbol.rs"]
mod tests;
