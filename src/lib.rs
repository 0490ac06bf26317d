//! Pixgen is a small 2-D raster engine for rendering CAPTCHA and label images.
//!
//! Everything operates on a straight-alpha RGBA8 [`Canvas`]:
//!
//! - **Draw**: Bresenham lines, midpoint circles and disks ([`Shape`])
//! - **Resample**: bilinear sampling with edge clamping ([`resample`], [`sample_surface`])
//! - **Transform**: rotation about the centre into an enlarged canvas ([`rotate`])
//! - **Distort**: sinusoidal wave displacement ([`warp`])
//! - **Compose**: glyph tiles and noise into a CAPTCHA ([`generate_captcha`]) or a two-line
//!   label ([`render_label`])
//! - **QR**: a QR symbol scaled into a square with a margin ([`render_qr`])
//! - **Encode**: PNG bytes or files ([`encode_png`], [`save_png`])
//!
//! Text goes through the [`GlyphRasterizer`] seam. [`SvgTextRasterizer`] is the built-in
//! implementation backed by `usvg`/`resvg` and a [`FontBook`].
//!
//! All randomness flows from an explicit seed, so a given set of options always yields the
//! same pixels.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod captcha;
mod encode;
mod foundation;
mod label;
mod qr;
mod raster;
mod text;

pub use crate::foundation::core::{Affine, PixelPoint, Point, Rect, Rgba8, Vec2};
pub use crate::foundation::error::{PixgenError, PixgenResult};
pub use crate::foundation::math::Rng64;

pub use crate::raster::canvas::{Canvas, MAX_DIM};
pub use crate::raster::resample::{ResampleWeights, resample, sample_surface};
pub use crate::raster::rotate::{Rotation, rotate};
pub use crate::raster::shapes::Shape;
pub use crate::raster::warp::{Warp, warp};

pub use crate::text::fonts::FontBook;
pub use crate::text::glyph::{GlyphRasterizer, TextAnchor, TextRun};
pub use crate::text::svg_text::SvgTextRasterizer;

pub use crate::captcha::generate::{Captcha, generate_captcha};
pub use crate::captcha::opts::{CaptchaOpts, DEFAULT_CHARSET, Disturbance, MAX_CODE_LEN};
pub use crate::label::annotate::{LabelOpts, render_label};
pub use crate::qr::symbol::{QrLevel, QrOpts, render_qr};

pub use crate::encode::png::{decode_png, encode_png, ensure_parent_dir, save_png};
