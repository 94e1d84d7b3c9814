use groutline::{BorderOccluder, Direction};
use serde::{Deserialize, Serialize};

/// External storage shape for one trace record: the direction wire code plus
/// the corner snapshot. The crate does not own a serialization format; this
/// mirrors what a placement driver would persist between sessions.
#[derive(Serialize, Deserialize)]
struct StoredRecord {
    direction: u8,
    corners: [[f64; 3]; 4],
}

fn square(x0: f64, y0: f64, x1: f64, y1: f64) -> [[f64; 3]; 4] {
    [
        [x0, y0, 0.0],
        [x1, y0, 0.0],
        [x1, y1, 0.0],
        [x0, y1, 0.0],
    ]
}

#[test]
fn test_reloaded_trace_analyzes_identically() {
    let mut session = BorderOccluder::new(4.0, 2.0);
    session.register(Direction::Start, square(0.0, 0.0, 2.0, 2.0));
    session.register(Direction::East, square(10.0, 0.0, 12.0, 2.0));
    session.register(Direction::North, square(10.0, 4.0, 12.0, 6.0));
    session.register(Direction::East, square(14.0, 4.0, 16.0, 6.0));
    session.register(Direction::North, square(14.0, 0.0, 16.0, 2.0));
    session.register(Direction::West, square(8.0, 0.0, 10.0, 2.0));

    let original = session.analyze().unwrap();

    let stored: Vec<StoredRecord> = session
        .trace()
        .records()
        .iter()
        .map(|rec| StoredRecord {
            direction: rec.direction.code(),
            corners: rec.corners,
        })
        .collect();
    let json = serde_json::to_string(&stored).unwrap();

    let reloaded: Vec<StoredRecord> = serde_json::from_str(&json).unwrap();
    let mut restored = BorderOccluder::new(4.0, 2.0);
    for rec in &reloaded {
        let direction = Direction::from_code(rec.direction).expect("stored code is valid");
        restored.register(direction, rec.corners);
    }

    assert_eq!(restored.trace(), session.trace());
    assert_eq!(restored.analyze().unwrap(), original);
}

#[test]
fn test_direction_codes_round_trip() {
    for code in 1..=10u8 {
        let direction = Direction::from_code(code).unwrap();
        assert_eq!(direction.code(), code);
    }
    assert_eq!(Direction::from_code(0), None);
    assert_eq!(Direction::from_code(11), None);
}
