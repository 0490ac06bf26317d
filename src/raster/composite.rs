use crate::foundation::math::{mul_div255, premultiply, unpremultiply};

type PremulRgba8 = [u8; 4];

/// Porter-Duff "over" on premultiplied pixels.
pub(crate) fn over(dst: PremulRgba8, src: PremulRgba8) -> PremulRgba8 {
    if src[3] == 0 {
        return dst;
    }
    if src[3] == 255 {
        return src;
    }

    let inv = 255u16 - u16::from(src[3]);
    let mut out = [0u8; 4];
    for i in 0..4 {
        out[i] = src[i].saturating_add(mul_div255(u16::from(dst[i]), inv));
    }
    out
}

/// "Over" for straight-alpha pixels: premultiply, blend, un-premultiply.
pub(crate) fn over_straight(dst: [u8; 4], src: [u8; 4]) -> [u8; 4] {
    match src[3] {
        0 => dst,
        255 => src,
        _ => unpremultiply(over(premultiply(dst), premultiply(src))),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/composite.rs"]
mod tests;
