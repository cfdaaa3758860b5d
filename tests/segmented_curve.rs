//! End-to-end editing and resampling scenarios through the public API.

use wavecurve::{CubicBezier, CurveError, SampleBuffer, SegmentedCurve, Vec2};

const EPSILON: f32 = 1e-4;

fn wave() -> SegmentedCurve {
    SegmentedCurve::new(CubicBezier::new(
        Vec2::new(0.0, 0.0),
        Vec2::new(0.33, -1.0),
        Vec2::new(0.66, 1.0),
        Vec2::new(1.0, 0.0),
    ))
}

#[test]
fn split_chain_partitions_the_domain() {
    let mut curve = wave();
    curve.split_at(0.3).unwrap();
    curve.split_at(0.6).unwrap();

    let fragments = curve.fragments();
    assert_eq!(fragments.len(), 3);
    assert_eq!(fragments[0].tmin(), 0.0);
    assert_eq!(fragments[0].tmax(), fragments[1].tmin());
    assert_eq!(fragments[1].tmax(), fragments[2].tmin());
    assert_eq!(fragments[2].tmax(), 1.0);

    assert_eq!(curve.coefficient_blocks().len(), 3);
    assert_eq!(curve.control_points().len(), 12);
}

#[test]
fn moved_knot_keeps_the_join_continuous() {
    let mut curve = wave();
    curve.split_at(0.3).unwrap();
    curve.split_at(0.6).unwrap();

    let target = Vec2::new(0.3, 0.5);
    curve.move_knot(1, target).unwrap();

    let boundary = curve.fragments()[1].tmin();
    assert!((curve.evaluate(boundary).unwrap() - target).length() < EPSILON);
    // Approaching the boundary from below lands on the same point.
    assert!((curve.evaluate(boundary - 1e-4).unwrap() - target).length() < 1e-2);
}

#[test]
fn out_of_domain_split_is_rejected_without_side_effects() {
    let mut curve = wave();
    curve.split_at(0.3).unwrap();

    for t in [-0.1, 1.5] {
        assert!(matches!(
            curve.split_at(t),
            Err(CurveError::UncoveredParameter { .. })
        ));
        assert_eq!(curve.fragment_count(), 2);
    }
}

#[test]
fn knot_slots_cannot_be_moved_as_control_points() {
    let mut curve = wave();
    curve.split_at(0.5).unwrap();
    let before_points: Vec<Vec2> = curve.control_points().to_vec();

    for flat_index in [0, 3, 4, 7] {
        assert!(matches!(
            curve.move_control_point(flat_index, Vec2::new(9.0, 9.0)),
            Err(CurveError::KnotSlot { .. })
        ));
    }
    assert_eq!(curve.control_points(), &before_points[..]);
}

#[test]
fn diagonal_curve_fills_a_linear_ramp() {
    let curve = SegmentedCurve::new(CubicBezier::new(
        Vec2::new(0.0, 0.0),
        Vec2::new(1.0 / 3.0, 1.0 / 3.0),
        Vec2::new(2.0 / 3.0, 2.0 / 3.0),
        Vec2::new(1.0, 1.0),
    ));

    let mut buffer = SampleBuffer::new();
    buffer.allocate(2, 100);
    buffer.fill(&curve, 32).unwrap();

    for i in 0..100 {
        let expected = i as f32 / 100.0;
        assert!((buffer.samples()[2 * i] - expected).abs() < 1e-3);
        assert!((buffer.samples()[2 * i + 1] - expected).abs() < 1e-3);
    }
}

#[test]
fn editing_frame_loop_stays_consistent() {
    // The shape of a render-loop frame: idempotent allocate, a couple of
    // control point edits, refill, snapshot for the audio consumer.
    let mut curve = wave();
    for t in [0.15, 0.35, 0.7, 0.6] {
        curve.split_at(t).unwrap();
    }

    let mut buffer = SampleBuffer::new();
    let mut audio = Vec::new();
    for frame in 0..8 {
        buffer.allocate(2, 128);

        let phase = frame as f32 * 0.005;
        let lifted = Vec2::new(curve.control_point(6).x, phase.sin());
        curve.move_control_point(6, lifted).unwrap();
        let wobbled = Vec2::new(curve.control_point(10).x, 1.3 * (5.0 * phase).sin());
        curve.move_control_point(10, wobbled).unwrap();

        buffer.fill(&curve, 32).unwrap();
        buffer.snapshot_into(&mut audio);
        assert_eq!(audio.len(), 256);
    }
    assert_eq!(curve.fragment_count(), 5);
    assert_eq!(curve.control_points().len(), 20);
}
