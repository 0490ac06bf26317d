use super::*;

#[test]
fn mul_div255_endpoints() {
    assert_eq!(mul_div255(255, 255), 255);
    assert_eq!(mul_div255(0, 255), 0);
    assert_eq!(mul_div255(128, 255), 128);
}

#[test]
fn premultiply_transparent_clears_colour() {
    assert_eq!(premultiply([200, 10, 30, 0]), [0, 0, 0, 0]);
    assert_eq!(unpremultiply([0, 0, 0, 0]), [0, 0, 0, 0]);
}

#[test]
fn premul_roundtrip_is_close_for_half_alpha() {
    let px = [200, 100, 50, 128];
    let back = unpremultiply(premultiply(px));
    for i in 0..4 {
        assert!((i32::from(back[i]) - i32::from(px[i])).abs() <= 2, "{back:?}");
    }
}

#[test]
fn rng_is_deterministic_per_seed() {
    let mut a = Rng64::new(42);
    let mut b = Rng64::new(42);
    for _ in 0..16 {
        assert_eq!(a.next_u64(), b.next_u64());
    }
    assert_ne!(Rng64::new(1).next_u64(), Rng64::new(2).next_u64());
}

#[test]
fn rng_ranges_stay_inside_bounds() {
    let mut rng = Rng64::new(7);
    for _ in 0..1000 {
        let v = rng.range_i32(-3, 5);
        assert!((-3..=5).contains(&v));
        let f = rng.range_f64(-30.0, 30.0);
        assert!((-30.0..30.0).contains(&f));
    }
    assert_eq!(rng.range_i32(9, 2), 9);
}
