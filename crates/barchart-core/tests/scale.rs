// File: crates/barchart-core/tests/scale.rs
// Purpose: Validate the linear scale mapping, inversion, and degenerate domains.

use barchart_core::LinearScale;

#[test]
fn vertical_scale_endpoints() {
    let s = LinearScale::vertical(42.0, 500.0);
    assert_eq!(s.apply(0.0), 500.0);
    assert_eq!(s.apply(42.0), 0.0);
}

#[test]
fn vertical_scale_interior_value() {
    let s = LinearScale::vertical(42.0, 500.0);
    // 500 - (4/42)*500, roughly 452.38
    let y = s.apply(4.0);
    assert!((y - 452.38).abs() < 0.01, "got {y}");
    assert!((500.0 - y - 47.62).abs() < 0.01);
}

#[test]
fn invert_round_trips() {
    let s = LinearScale::vertical(42.0, 500.0);
    for v in [0.0, 4.0, 15.0, 23.0, 42.0] {
        let back = s.invert(s.apply(v));
        assert!((back - v).abs() < 1e-9, "value {v} came back as {back}");
    }
}

#[test]
fn arbitrary_domain_and_range() {
    let s = LinearScale::new((10.0, 20.0), (0.0, 100.0));
    assert_eq!(s.apply(10.0), 0.0);
    assert_eq!(s.apply(20.0), 100.0);
    assert_eq!(s.apply(15.0), 50.0);
}

#[test]
fn degenerate_domain_collapses_to_baseline() {
    let s = LinearScale::vertical(0.0, 500.0);
    assert!(s.is_degenerate());
    let y = s.apply(0.0);
    assert!(y.is_finite());
    assert_eq!(y, 500.0);
}
