use approx::assert_abs_diff_eq;
use tween_curve::{
    evaluate, evaluate_constant_speed, polyline_length, walk, ControlQuad, CurveKind, CurveSegment,
};
use tween_math::DVec3;

fn dvec3(x: f64, y: f64, z: f64) -> DVec3 {
    DVec3::new(x, y, z)
}

#[test]
fn test_every_kind_interpolates_its_endpoints() {
    // With the two-point quad (tangent slots duplicated), every kind must
    // pass through p1 at t=0 and p2 at t=1.
    let p1 = dvec3(1.0, -2.0, 0.5);
    let p2 = dvec3(-3.0, 4.0, 2.0);
    let quad = ControlQuad::endpoints(p1, p2);

    for kind in CurveKind::ALL {
        let start = evaluate(kind, &quad, 0.0);
        let end = evaluate(kind, &quad, 1.0);
        assert!(
            (start - p1).length() < 1e-12,
            "kind {} misses p1: {:?}",
            kind,
            start
        );
        assert!(
            (end - p2).length() < 1e-12,
            "kind {} misses p2: {:?}",
            kind,
            end
        );
    }
}

#[test]
fn test_constant_speed_linear_is_a_no_op() {
    let quad = ControlQuad::endpoints(dvec3(0.0, 0.0, 0.0), dvec3(6.0, 8.0, 0.0));
    for i in 0..=32 {
        let t = i as f64 / 32.0;
        let reparameterized = evaluate_constant_speed(CurveKind::Linear, &quad, t);
        let raw = evaluate(CurveKind::Linear, &quad, t);
        assert!(
            (reparameterized - raw).length() < 1e-9,
            "t={}: {:?} vs {:?}",
            t,
            reparameterized,
            raw
        );
    }
}

#[test]
fn test_constant_speed_spacing_is_uniform() {
    // A gently bending Catmull-Rom arc: distances travelled between
    // consecutive constant-speed samples should be nearly equal. The
    // first and last table segments are excluded: there the wrapped-in
    // tangent neighbour distorts the local curve, which is the accepted
    // boundary trade-off of the sample-table wrap.
    let quad = ControlQuad::new(
        dvec3(-2.0, -0.5, 0.0),
        dvec3(0.0, 0.0, 0.0),
        dvec3(8.0, 2.0, 0.0),
        dvec3(10.0, 2.5, 0.0),
    );

    const STEPS: usize = 20;
    // t = 0.10 .. 0.90, clear of the boundary segments.
    let samples: Vec<DVec3> = (2..=STEPS - 2)
        .map(|i| evaluate_constant_speed(CurveKind::CatmullRom, &quad, i as f64 / STEPS as f64))
        .collect();

    let gaps: Vec<f64> = samples.windows(2).map(|w| w[0].distance(w[1])).collect();
    let mean = gaps.iter().sum::<f64>() / gaps.len() as f64;
    assert!(mean > 0.0);

    for (i, gap) in gaps.iter().enumerate() {
        assert!(
            (gap - mean).abs() < 0.10 * mean,
            "gap {} of {} deviates from mean {}",
            i,
            gap,
            mean
        );
    }
}

#[test]
fn test_constant_speed_outpaces_raw_easing_uniformity() {
    // The point of reparameterization: on an eased curve the raw spacing
    // is uneven, the reparameterized spacing markedly less so. The
    // eleven-sample table keeps this approximate, hence a ratio bound
    // rather than exact uniformity.
    let quad = ControlQuad::endpoints(dvec3(0.0, 0.0, 0.0), dvec3(10.0, 0.0, 0.0));

    let spread = |points: &[DVec3]| {
        let gaps: Vec<f64> = points.windows(2).map(|w| w[0].distance(w[1])).collect();
        let max = gaps.iter().cloned().fold(0.0, f64::max);
        let min = gaps.iter().cloned().fold(f64::INFINITY, f64::min);
        max - min
    };

    const STEPS: usize = 10;
    let raw: Vec<DVec3> = (0..=STEPS)
        .map(|i| evaluate(CurveKind::EaseIn1, &quad, i as f64 / STEPS as f64))
        .collect();
    let constant: Vec<DVec3> = (0..=STEPS)
        .map(|i| evaluate_constant_speed(CurveKind::EaseIn1, &quad, i as f64 / STEPS as f64))
        .collect();

    assert!(
        spread(&constant) < 0.7 * spread(&raw),
        "reparameterization did not even out the spacing: {} vs {}",
        spread(&constant),
        spread(&raw)
    );
}

#[test]
fn test_walker_quarter_points() {
    let points = [
        dvec3(0.0, 0.0, 0.0),
        dvec3(10.0, 0.0, 0.0),
        dvec3(10.0, 10.0, 0.0),
    ];
    assert_abs_diff_eq!(polyline_length(&points), 20.0);

    assert!((walk(&points, 0.0) - dvec3(0.0, 0.0, 0.0)).length() < 1e-12);
    assert!((walk(&points, 0.25) - dvec3(5.0, 0.0, 0.0)).length() < 1e-12);
    assert!((walk(&points, 0.5) - dvec3(10.0, 0.0, 0.0)).length() < 1e-12);
    assert!((walk(&points, 0.75) - dvec3(10.0, 5.0, 0.0)).length() < 1e-12);
    assert!((walk(&points, 1.0) - dvec3(10.0, 10.0, 0.0)).length() < 1e-12);
}

#[test]
fn test_segment_wrapper_matches_free_functions() {
    let quad = ControlQuad::new(
        dvec3(0.0, 3.0, 0.0),
        dvec3(0.0, 0.0, 0.0),
        dvec3(5.0, 0.0, 0.0),
        dvec3(5.0, 3.0, 0.0),
    );
    let segment = CurveSegment::new(CurveKind::Bezier, quad);

    for i in 0..=10 {
        let t = i as f64 / 10.0;
        assert!((segment.point_at(t) - evaluate(CurveKind::Bezier, &quad, t)).length() < 1e-12);
        assert!(
            (segment.point_at_distance(t) - evaluate_constant_speed(CurveKind::Bezier, &quad, t))
                .length()
                < 1e-12
        );
    }
}

#[test]
fn test_kind_parses_from_config_names() {
    // The names a host config file would carry.
    assert_eq!("catmull_rom".parse::<CurveKind>().unwrap(), CurveKind::CatmullRom);
    assert_eq!(
        "ease_in_out_bounce2".parse::<CurveKind>().unwrap(),
        CurveKind::EaseInOutBounce2
    );
    assert!("easeInOutBounce2".parse::<CurveKind>().is_err());
}
