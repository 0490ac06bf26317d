use std::{io::Cursor, path::Path};

use anyhow::Context as _;

use crate::foundation::error::{PixgenError, PixgenResult};
use crate::raster::canvas::Canvas;

/// Encode a canvas as PNG bytes (`image/png`).
pub fn encode_png(canvas: &Canvas) -> PixgenResult<Vec<u8>> {
    let mut out = Cursor::new(Vec::new());
    image::write_buffer_with_format(
        &mut out,
        canvas.data(),
        canvas.width(),
        canvas.height(),
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .map_err(|e| PixgenError::encode(format!("png encode: {e}")))?;
    Ok(out.into_inner())
}

/// Decode PNG bytes into a straight-alpha canvas.
pub fn decode_png(bytes: &[u8]) -> PixgenResult<Canvas> {
    let img = image::load_from_memory_with_format(bytes, image::ImageFormat::Png)
        .map_err(|e| PixgenError::encode(format!("png decode: {e}")))?;
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    Canvas::from_rgba8(width, height, rgba.into_raw())
}

/// Create `path`'s parent directory when missing.
pub fn ensure_parent_dir(path: &Path) -> PixgenResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create output dir '{}'", parent.display()))?;
        }
    }
    Ok(())
}

/// Write `canvas` to `path` as PNG.
pub fn save_png(canvas: &Canvas, path: &Path) -> PixgenResult<()> {
    ensure_parent_dir(path)?;
    let bytes = encode_png(canvas)?;
    std::fs::write(path, bytes).with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png.rs"]
mod tests;
