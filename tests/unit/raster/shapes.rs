use super::*;

fn painted(c: &Canvas, color: Rgba8) -> Vec<(i32, i32)> {
    let mut out = Vec::new();
    for y in 0..c.height() as i32 {
        for x in 0..c.width() as i32 {
            if c.get(x, y) == Some(color) {
                out.push((x, y));
            }
        }
    }
    out
}

#[test]
fn diagonal_line_paints_exactly_the_diagonal() {
    let mut c = Canvas::new(10, 10).unwrap();
    c.draw_line(PixelPoint::new(1, 1), PixelPoint::new(8, 8), Rgba8::RED);
    let expected: Vec<_> = (1..=8).map(|i| (i, i)).collect();
    assert_eq!(painted(&c, Rgba8::RED), expected);
}

#[test]
fn identical_endpoints_draw_nothing() {
    let mut c = Canvas::new(10, 10).unwrap();
    c.draw_line(PixelPoint::new(4, 4), PixelPoint::new(4, 4), Rgba8::RED);
    assert!(painted(&c, Rgba8::RED).is_empty());
}

#[test]
fn steep_and_reversed_lines_plot_one_pixel_per_row() {
    let mut c = Canvas::new(10, 10).unwrap();
    c.draw_line(PixelPoint::new(6, 9), PixelPoint::new(3, 0), Rgba8::RED);
    let px = painted(&c, Rgba8::RED);
    assert_eq!(px.len(), 10);
    for y in 0..10 {
        assert_eq!(px.iter().filter(|p| p.1 == y).count(), 1, "row {y}");
    }
    assert!(px.contains(&(6, 9)));
    assert!(px.contains(&(3, 0)));
}

#[test]
fn horizontal_line_covers_span() {
    let mut c = Canvas::new(10, 3).unwrap();
    c.draw_line(PixelPoint::new(7, 1), PixelPoint::new(2, 1), Rgba8::RED);
    let expected: Vec<_> = (2..=7).map(|x| (x, 1)).collect();
    assert_eq!(painted(&c, Rgba8::RED), expected);
}

#[test]
fn off_canvas_line_is_clipped_silently() {
    let mut c = Canvas::new(5, 5).unwrap();
    c.draw_line(PixelPoint::new(-10, 2), PixelPoint::new(20, 2), Rgba8::RED);
    assert_eq!(painted(&c, Rgba8::RED).len(), 5);
}

#[test]
fn circle_outline_hits_extrema_and_skips_interior() {
    let mut c = Canvas::new(20, 20).unwrap();
    c.draw_circle(PixelPoint::new(10, 10), 5, false, Rgba8::RED);
    for p in [(10, 5), (10, 15), (5, 10), (15, 10)] {
        assert_eq!(c.get(p.0, p.1), Some(Rgba8::RED), "{p:?}");
    }
    for dy in -3..=3 {
        for dx in -3..=3 {
            if dx * dx + dy * dy <= 9 {
                assert_eq!(c.get(10 + dx, 10 + dy), Some(Rgba8::TRANSPARENT));
            }
        }
    }
}

#[test]
fn filled_circle_covers_the_disk() {
    let mut c = Canvas::new(20, 20).unwrap();
    c.draw(
        &Shape::Disk {
            center: PixelPoint::new(10, 10),
            radius: 5,
        },
        Rgba8::RED,
    );
    for dy in -5..=5 {
        for dx in -5..=5 {
            if dx * dx + dy * dy <= 25 {
                assert_eq!(c.get(10 + dx, 10 + dy), Some(Rgba8::RED), "({dx},{dy})");
            }
        }
    }
    assert_eq!(c.get(10 + 5, 10 + 5), Some(Rgba8::TRANSPARENT));
}

#[test]
fn circle_outside_canvas_touches_nothing() {
    let mut c = Canvas::new(8, 8).unwrap();
    c.draw_circle(PixelPoint::new(-20, 4), 5, true, Rgba8::RED);
    c.draw_circle(PixelPoint::new(4, 30), 5, false, Rgba8::RED);
    c.draw_circle(PixelPoint::new(4, 4), -1, true, Rgba8::RED);
    assert!(painted(&c, Rgba8::RED).is_empty());
}

#[test]
fn partially_visible_circle_draws_visible_part() {
    let mut c = Canvas::new(8, 8).unwrap();
    c.draw_circle(PixelPoint::new(0, 0), 3, false, Rgba8::RED);
    assert_eq!(c.get(3, 0), Some(Rgba8::RED));
    assert_eq!(c.get(0, 3), Some(Rgba8::RED));
}

#[test]
fn extreme_endpoints_are_clipped_without_overflow() {
    let mut c = Canvas::new(8, 8).unwrap();
    c.draw_line(
        PixelPoint::new(i32::MIN, 0),
        PixelPoint::new(i32::MAX, 0),
        Rgba8::RED,
    );
    c.draw_line(
        PixelPoint::new(3, i32::MAX),
        PixelPoint::new(3, i32::MIN),
        Rgba8::RED,
    );
    let mut expected: Vec<_> = (0..8).map(|x| (x, 0)).collect();
    expected.extend((1..8).map(|y| (3, y)));
    expected.sort_by_key(|&(x, y)| (y, x));
    assert_eq!(painted(&c, Rgba8::RED), expected);

    let mut d = Canvas::new(8, 8).unwrap();
    d.draw_line(
        PixelPoint::new(-1_000_000_000, -1_000_000_000),
        PixelPoint::new(1_000_000_000, 1_000_000_000),
        Rgba8::RED,
    );
    let diagonal: Vec<_> = (0..8).map(|i| (i, i)).collect();
    assert_eq!(painted(&d, Rgba8::RED), diagonal);
}

#[test]
fn clipped_line_keeps_the_unclipped_pixels() {
    let mut small = Canvas::new(10, 10).unwrap();
    small.draw_line(PixelPoint::new(-30, -7), PixelPoint::new(40, 20), Rgba8::RED);
    small.draw_line(PixelPoint::new(12, -25), PixelPoint::new(-3, 31), Rgba8::BLACK);

    let mut big = Canvas::new(100, 100).unwrap();
    big.draw_line(PixelPoint::new(10, 33), PixelPoint::new(80, 60), Rgba8::RED);
    big.draw_line(PixelPoint::new(52, 15), PixelPoint::new(37, 71), Rgba8::BLACK);

    for y in 0..10 {
        for x in 0..10 {
            assert_eq!(small.get(x, y), big.get(x + 40, y + 40), "({x}, {y})");
        }
    }
    assert!(!painted(&small, Rgba8::RED).is_empty());
    assert!(!painted(&small, Rgba8::BLACK).is_empty());
}

#[test]
fn huge_radius_is_bounded_by_the_canvas() {
    let mut ring = Canvas::new(8, 8).unwrap();
    ring.draw_circle(PixelPoint::new(4, 4), i32::MAX, false, Rgba8::RED);
    assert!(painted(&ring, Rgba8::RED).is_empty());

    let mut disk = Canvas::new(8, 8).unwrap();
    disk.draw_circle(PixelPoint::new(4, 4), i32::MAX, true, Rgba8::RED);
    assert_eq!(painted(&disk, Rgba8::RED).len(), 64);

    let mut edge = Canvas::new(8, 8).unwrap();
    edge.draw_circle(PixelPoint::new(4, 1_000_003), 1_000_000, false, Rgba8::RED);
    assert_eq!(edge.get(4, 3), Some(Rgba8::RED));
    assert_eq!(edge.get(4, 2), Some(Rgba8::TRANSPARENT));
    assert_eq!(edge.get(4, 4), Some(Rgba8::TRANSPARENT));

    let mut far = Canvas::new(8, 8).unwrap();
    far.draw_circle(PixelPoint::new(i32::MIN, i32::MAX), i32::MAX, true, Rgba8::RED);
    far.draw_circle(PixelPoint::new(i32::MAX, i32::MIN), i32::MAX, false, Rgba8::RED);
}

#[test]
fn shape_serializes_with_kind_tag() {
    let s = Shape::Line {
        from: PixelPoint::new(0, 0),
        to: PixelPoint::new(3, 4),
    };
    let json = serde_json::to_value(s).unwrap();
    assert_eq!(json["kind"], "line");
    let back: Shape = serde_json::from_value(json).unwrap();
    assert_eq!(back, s);
}
