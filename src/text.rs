pub(crate) mod fonts;
pub(crate) mod glyph;
pub(crate) mod svg_text;
