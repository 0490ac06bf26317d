use super::*;
use crate::foundation::core::Rgba8;

#[test]
fn png_bytes_carry_signature_and_pixels() {
    let mut c = Canvas::new(3, 2).unwrap();
    c.set(0, 0, Rgba8::RED);
    c.set(2, 1, Rgba8::new(10, 20, 30, 40));

    let bytes = encode_png(&c).unwrap();
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");

    let back = decode_png(&bytes).unwrap();
    assert_eq!(back, c);
}

#[test]
fn garbage_is_an_encode_error() {
    let err = decode_png(b"not a png").unwrap_err();
    assert!(matches!(err, PixgenError::Encode(_)), "{err}");
}

#[test]
fn save_png_creates_parent_dirs() {
    let dir = std::env::temp_dir().join(format!("pixgen-png-{}", std::process::id()));
    let path = dir.join("nested").join("out.png");
    let _ = std::fs::remove_dir_all(&dir);

    save_png(&Canvas::new(1, 1).unwrap(), &path).unwrap();
    assert!(path.exists());
    let _ = std::fs::remove_dir_all(&dir);
}
