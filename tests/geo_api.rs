use geo::{ease_vec, perlin, perlin_octave, Ease, Rect, Shaker, Vec2, VecGen};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_every_curve_starts_and_ends_in_place() {
    let start = Vec2::new(100.0, 30.0);
    let end = Vec2::new(300.0, 30.0);
    for curve in Ease::ALL {
        assert!(ease_vec(start, end, 0.0, curve.as_fn()).approx_eq(start, 1e-9), "{}", curve.name());
        assert!(ease_vec(start, end, 1.0, curve.as_fn()).approx_eq(end, 1e-9), "{}", curve.name());
    }
}

#[test]
fn test_shaker_from_json() {
    let mut shaker: Shaker = serde_json::from_str(
        r#"{ "amplitude": 20.0, "frequency": 20.0, "duration": 2.0, "falloff": "out_quad" }"#,
    )
    .unwrap();
    assert_eq!(shaker.falloff, Some(Ease::OutQuad));
    assert!(!shaker.is_shaking(0.0));

    shaker.start(10.0);
    assert!(shaker.is_shaking(11.0));
    assert!(shaker.shake(11.0).len() <= 20.0 * std::f64::consts::SQRT_2);
    assert_eq!(shaker.shake(12.5), Vec2::ZERO);
}

#[test]
fn test_generated_points_land_in_rects() {
    let frame = vec![
        Rect::xywh(0.0, 0.0, 100.0, 10.0),
        Rect::xywh(0.0, 90.0, 100.0, 10.0),
    ];
    let generator = VecGen::rects(frame.clone());
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..500 {
        let p = generator.generate(&mut rng);
        assert!(frame.iter().any(|r| r.contains_point(p.x, p.y)));
    }
}

#[test]
fn test_noise_fields_agree() {
    for i in 0..20 {
        let x = i as f64 * 0.37;
        assert_eq!(perlin_octave(x, 1.5, 0.25, 1, 0.5), perlin(x, 1.5, 0.25));
    }
}
