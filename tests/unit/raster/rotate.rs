use super::*;
use crate::foundation::core::Rgba8;

fn pattern(w: i64, h: i64) -> Canvas {
    let mut c = Canvas::new(w, h).unwrap();
    for y in 0..h as i32 {
        for x in 0..w as i32 {
            c.set(
                x,
                y,
                Rgba8::new((x * 37) as u8, (y * 53) as u8, ((x + y) * 11) as u8, 255),
            );
        }
    }
    c
}

#[test]
fn zero_degrees_reproduces_the_source() {
    let src = pattern(7, 4);
    let out = rotate(&src, 0.0).unwrap();
    assert_eq!(out, src);
}

#[test]
fn full_turns_match_zero() {
    let src = pattern(6, 5);
    for angle in [360.0, 720.0, -360.0] {
        let out = rotate(&src, angle).unwrap();
        assert_eq!(out, src, "angle {angle}");
    }
}

#[test]
fn quarter_turn_swaps_extents_and_moves_pixels() {
    let src = pattern(3, 2);
    let out = rotate(&src, 90.0).unwrap();
    assert_eq!((out.width(), out.height()), (2, 3));
    for y in 0..3 {
        for x in 0..2 {
            assert_eq!(out.get(x, y), src.get(2 - y, x), "dst ({x}, {y})");
        }
    }
}

#[test]
fn diagonal_rotation_grows_canvas_and_leaves_corners_transparent() {
    let mut src = Canvas::new(10, 10).unwrap();
    src.fill(Rgba8::WHITE);
    let plan = Rotation::new(10, 10, 45.0).unwrap();
    assert_eq!(plan.output_size(), (14, 14));

    let out = plan.apply(&src).unwrap();
    for (x, y) in [(0, 0), (13, 0), (0, 13), (13, 13)] {
        assert_eq!(out.get(x, y), Some(Rgba8::TRANSPARENT), "({x}, {y})");
    }
    assert_eq!(out.get(7, 7), Some(Rgba8::WHITE));
}

#[test]
fn non_square_rotation_stays_centred() {
    let mut src = Canvas::new(20, 6).unwrap();
    src.fill(Rgba8::BLACK);
    let out = rotate(&src, 30.0).unwrap();
    let (cx, cy) = (out.width() as i32 / 2, out.height() as i32 / 2);
    assert_eq!(out.get(cx, cy), Some(Rgba8::BLACK));
    assert_eq!(out.get(0, 0), Some(Rgba8::TRANSPARENT));
    assert_eq!(
        out.get(out.width() as i32 - 1, out.height() as i32 - 1),
        Some(Rgba8::TRANSPARENT)
    );
}

#[test]
fn rotate_then_unrotate_restores_content_approximately() {
    let mut src = Canvas::new(20, 20).unwrap();
    for y in 0..20 {
        for x in 0..20 {
            let c = if x < 10 { Rgba8::RED } else { Rgba8::opaque(0, 0, 255) };
            src.set(x, y, c);
        }
    }

    let back = rotate(&rotate(&src, 30.0).unwrap(), -30.0).unwrap();
    let (cx, cy) = (back.width() as i32 / 2, back.height() as i32 / 2);

    let left = back.get(cx - 6, cy).unwrap();
    assert!(left.r > 200 && left.b < 55 && left.a > 200, "{left:?}");
    let right = back.get(cx + 5, cy).unwrap();
    assert!(right.b > 200 && right.r < 55 && right.a > 200, "{right:?}");
}

#[test]
fn mismatched_source_is_rejected() {
    let plan = Rotation::new(4, 4, 10.0).unwrap();
    assert!(plan.apply(&Canvas::new(5, 4).unwrap()).is_err());
}

#[test]
fn non_finite_angle_is_rejected() {
    let src = pattern(2, 2);
    assert!(rotate(&src, f64::NAN).is_err());
    assert!(rotate(&src, f64::INFINITY).is_err());
}

#[test]
fn into_rotated_consumes_and_replaces() {
    let src = pattern(4, 2);
    let out = src.into_rotated(180.0).unwrap();
    assert_eq!((out.width(), out.height()), (4, 2));
}
