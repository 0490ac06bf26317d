use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        PixgenError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(PixgenError::font("x").to_string().contains("font error:"));
    assert!(
        PixgenError::encode("x")
            .to_string()
            .contains("encode error:")
    );
}

#[test]
fn invalid_dimension_reports_both_extents() {
    let msg = PixgenError::invalid_dimension(0, -3).to_string();
    assert_eq!(msg, "invalid dimension: 0x-3");
}

#[test]
fn out_of_range_mentions_pixel_and_bounds() {
    let err = PixgenError::OutOfRange {
        x: 10,
        y: -1,
        width: 4,
        height: 4,
    };
    assert_eq!(
        err.to_string(),
        "pixel (10, -1) out of range for 4x4 canvas"
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = PixgenError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
