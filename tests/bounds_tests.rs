use glam::Vec3;
use vecviz_viewport::{estimate_bounds, SceneBounds};

fn sample_set(n: usize, scale: f32) -> Vec<Vec3> {
    // deterministic spread of points on a wobbly spiral
    (0..n)
        .map(|i| {
            let t = i as f32 * 0.7;
            Vec3::new(t.cos() * scale, (t * 0.5).sin() * scale * 0.6, t.sin() * scale)
        })
        .collect()
}

#[test]
fn empty_set_returns_default_bounds() {
    let b = estimate_bounds(&[]);
    assert_eq!(b.min, Vec3::splat(-1.0));
    assert_eq!(b.max, Vec3::splat(1.0));
    assert_eq!(b.sphere_radius, 2.0);
    assert_eq!(b.max_magnitude, 1.0);
    assert_eq!(b, SceneBounds::default());
}

#[test]
fn origin_is_always_included() {
    let b = estimate_bounds(&[Vec3::new(5.0, 5.0, 5.0)]);
    assert_eq!(b.min, Vec3::ZERO, "box must reach back to the origin");
    assert_eq!(b.max, Vec3::splat(5.0));
}

#[test]
fn sphere_contains_origin_and_every_tip() {
    for n in [1usize, 2, 3, 8, 40] {
        for scale in [0.05_f32, 0.5, 3.0, 80.0] {
            let points = sample_set(n, scale);
            let b = estimate_bounds(&points);
            assert!(
                b.sphere_center.length() <= b.sphere_radius + 1e-4,
                "origin escaped sphere for n={n} scale={scale}"
            );
            for p in &points {
                let d = (*p - b.sphere_center).length();
                assert!(
                    d <= b.sphere_radius + 1e-4,
                    "tip {p:?} escaped sphere (d={d}, r={}) for n={n} scale={scale}",
                    b.sphere_radius
                );
            }
        }
    }
}

#[test]
fn near_zero_set_gets_radius_floor() {
    let b = estimate_bounds(&[Vec3::new(0.01, 0.02, 0.01)]);
    // natural radius is tiny, so the floor of max(1.2 * max_magnitude, 2) wins
    assert_eq!(b.sphere_radius, 2.0);
    assert!(b.max_magnitude < 0.1);
    assert!(b.avg_magnitude >= 0.1, "average magnitude floors at 0.1");
}

#[test]
fn large_sets_get_thirty_percent_padding() {
    let points = [Vec3::new(3.0, 0.0, 0.0), Vec3::new(0.0, 4.0, 0.0)];
    let b = estimate_bounds(&points);
    let natural = b.sphere_radius / 1.3;
    assert!(
        (2.3..2.7).contains(&natural),
        "natural radius {natural} out of expected range"
    );
    assert!((b.max_magnitude - 4.0).abs() < 1e-5);
}

#[test]
fn magnitude_statistics() {
    let points = [Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 3.0, 0.0)];
    let b = estimate_bounds(&points);
    assert!((b.max_magnitude - 3.0).abs() < 1e-5);
    assert!((b.avg_magnitude - 2.0).abs() < 1e-5);
    assert!((b.magnitude_range - 2.0).abs() < 1e-5);
}

#[test]
fn non_finite_points_are_discarded() {
    let b = estimate_bounds(&[Vec3::new(f32::NAN, 0.0, 0.0)]);
    assert_eq!(b, SceneBounds::default());

    let mixed = [
        Vec3::new(2.0, 0.0, 0.0),
        Vec3::new(f32::INFINITY, 1.0, 0.0),
    ];
    let clean = estimate_bounds(&[Vec3::new(2.0, 0.0, 0.0)]);
    assert_eq!(estimate_bounds(&mixed), clean);
}

#[test]
fn outputs_are_always_finite() {
    for n in [0usize, 1, 5] {
        for scale in [0.0_f32, 1e-6, 1e6] {
            let b = estimate_bounds(&sample_set(n, scale));
            assert!(b.min.is_finite() && b.max.is_finite());
            assert!(b.sphere_radius.is_finite() && b.sphere_radius > 0.0);
            assert!(b.avg_magnitude.is_finite() && b.avg_magnitude > 0.0);
        }
    }
}
