use groutline::{
    BorderOccluder, BorderTrace, Direction, Error, OccluderKind, OccluderSynthesizer, Ordinal,
    ordinal_corner,
};

/// Corner snapshot of an axis-aligned square tile spanning [x0,x1] x [y0,y1].
fn square(x0: f64, y0: f64, x1: f64, y1: f64) -> [[f64; 3]; 4] {
    [
        [x0, y0, 0.0],
        [x1, y0, 0.0],
        [x1, y1, 0.0],
        [x0, y1, 0.0],
    ]
}

/// Twice the signed area of the quad footprint; positive means
/// anti-clockwise winding.
fn shoelace(points: &[[f64; 3]; 4]) -> f64 {
    let mut sum = 0.0;
    for i in 0..4 {
        let a = points[i];
        let b = points[(i + 1) % 4];
        sum += a[0] * b[1] - b[0] * a[1];
    }
    sum
}

fn assert_points(quad: &[[f64; 3]; 4], expected: [[f64; 3]; 4]) {
    for (got, want) in quad.iter().zip(expected.iter()) {
        for axis in 0..3 {
            assert!(
                (got[axis] - want[axis]).abs() < 1e-9,
                "expected {:?}, got {:?}",
                expected,
                quad
            );
        }
    }
}

#[test]
fn test_closed_ring_margins() {
    // Four corner tiles of a square border ring, registered anti-clockwise
    // from the north-west corner.
    let mut session = BorderOccluder::new(4.0, 2.0);
    session.register(Direction::Start, square(0.0, 8.0, 4.0, 12.0));
    session.register(Direction::South, square(0.0, 0.0, 4.0, 4.0));
    session.register(Direction::East, square(8.0, 0.0, 12.0, 4.0));
    session.register(Direction::North, square(8.0, 8.0, 12.0, 12.0));

    let quads = session.analyze().expect("clean ring should analyze");
    assert_eq!(quads.len(), 4, "one margin quad per record");

    for (i, quad) in quads.iter().enumerate() {
        assert_eq!(quad.kind, OccluderKind::Margin { index: i });
        assert_eq!(quad.name(), format!("margin_{i}"));
        assert!(shoelace(&quad.points) > 0.0, "quad {i} must wind ccw");
        for p in &quad.points {
            assert!((p[2] - 2.0).abs() < 1e-9, "all points share the z offset");
        }
    }

    // Hand-derived from the ordinal and stake tables: South, East, North,
    // then the wrap segment whose Start tag resolves to West.
    assert_points(
        &quads[0].points,
        [
            [4.0, 16.0, 2.0],
            [0.0, 16.0, 2.0],
            [0.0, 0.0, 2.0],
            [4.0, 0.0, 2.0],
        ],
    );
    assert_points(
        &quads[1].points,
        [
            [-4.0, 4.0, 2.0],
            [-4.0, 0.0, 2.0],
            [12.0, 0.0, 2.0],
            [12.0, 4.0, 2.0],
        ],
    );
    assert_points(
        &quads[2].points,
        [
            [8.0, -4.0, 2.0],
            [12.0, -4.0, 2.0],
            [12.0, 12.0, 2.0],
            [8.0, 12.0, 2.0],
        ],
    );
    assert_points(
        &quads[3].points,
        [
            [16.0, 8.0, 2.0],
            [16.0, 12.0, 2.0],
            [0.0, 12.0, 2.0],
            [0.0, 8.0, 2.0],
        ],
    );
}

#[test]
fn test_start_trace_margin_example() {
    // Trace [(Start, T0), (West, T1), (South, T2)]: the first margin segment
    // takes its direction from the West record and anchors at T0's
    // south-east corner, extended outward by the margin width.
    let mut trace = BorderTrace::new();
    trace.register(Direction::Start, square(0.0, 0.0, 2.0, 2.0));
    trace.register(Direction::West, square(-2.0, 0.0, 0.0, 2.0));
    trace.register(Direction::South, square(-2.0, -4.0, 0.0, -2.0));

    let synth = OccluderSynthesizer::new(4.0, 2.0);
    let quad = synth.margin_occluder(&trace, 0, false).unwrap();
    assert_points(
        &quad.points,
        [
            [6.0, 0.0, 2.0],
            [6.0, 4.0, 2.0],
            [-2.0, 4.0, 2.0],
            [-2.0, 0.0, 2.0],
        ],
    );
}

#[test]
fn test_no_tail_suppresses_wing() {
    let mut trace = BorderTrace::new();
    trace.register(Direction::Start, square(0.0, 0.0, 2.0, 2.0));
    trace.register(Direction::West, square(-2.0, 0.0, 0.0, 2.0));

    let synth = OccluderSynthesizer::new(4.0, 2.0);
    let quad = synth.margin_occluder(&trace, 0, true).unwrap();
    // Tail wing collapses onto the start corner; the lateral width stays.
    assert_points(
        &quad.points,
        [
            [2.0, 0.0, 2.0],
            [2.0, 4.0, 2.0],
            [-2.0, 4.0, 2.0],
            [-2.0, 0.0, 2.0],
        ],
    );
}

#[test]
fn test_remove_resolves_anticlockwise() {
    // Departing South, arriving at a Remove record: the notional direction
    // becomes East, keeping the progression anti-clockwise.
    let mut trace = BorderTrace::new();
    trace.register(Direction::South, square(0.0, 4.0, 2.0, 6.0));
    trace.register(Direction::Remove, square(0.0, 0.0, 2.0, 2.0));

    let synth = OccluderSynthesizer::new(4.0, 2.0);
    let quad = synth.margin_occluder(&trace, 0, false).unwrap();
    assert_points(
        &quad.points,
        [
            [-4.0, 6.0, 2.0],
            [-4.0, 2.0, 2.0],
            [2.0, -2.0, 2.0],
            [2.0, 2.0, 2.0],
        ],
    );
}

#[test]
fn test_tip_guard_direction_is_rejected() {
    let mut trace = BorderTrace::new();
    trace.register(Direction::Start, square(0.0, 0.0, 2.0, 2.0));
    trace.register(Direction::EastPoint, square(2.0, 0.0, 4.0, 2.0));

    let synth = OccluderSynthesizer::default();
    let err = synth.margin_occluder(&trace, 0, false).unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidDirection {
            direction: Direction::EastPoint,
            ..
        }
    ));
}

#[test]
fn test_remove_after_remove_is_rejected() {
    // Remove resolution needs a cardinal departing direction.
    let mut trace = BorderTrace::new();
    trace.register(Direction::Remove, square(0.0, 0.0, 2.0, 2.0));
    trace.register(Direction::Remove, square(2.0, 0.0, 4.0, 2.0));

    let synth = OccluderSynthesizer::default();
    let err = synth.margin_occluder(&trace, 0, false).unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidDirection {
            direction: Direction::Remove,
            ..
        }
    ));
}

#[test]
fn test_ordinal_corner_ignores_input_order() {
    let base = square(1.0, -3.0, 5.0, 7.0);
    let shuffled: [[f64; 3]; 4] = [base[2], base[0], base[3], base[1]];

    for ordinal in [
        Ordinal::NorthWest,
        Ordinal::NorthEast,
        Ordinal::SouthWest,
        Ordinal::SouthEast,
    ] {
        assert_eq!(
            ordinal_corner(&base, ordinal, 2.0),
            ordinal_corner(&shuffled, ordinal, 2.0)
        );
    }
    assert_eq!(
        ordinal_corner(&base, Ordinal::NorthWest, 2.0),
        [1.0, 7.0, 2.0]
    );
    assert_eq!(
        ordinal_corner(&base, Ordinal::SouthEast, 2.0),
        [5.0, -3.0, 2.0]
    );
}

#[test]
fn test_empty_trace_yields_no_quads() {
    let session = BorderOccluder::default();
    assert!(session.analyze().unwrap().is_empty());
}
