/// Directional tag attached to a border placement event.
///
/// The four cardinals mark a change of laying direction while traversing the
/// border anti-clockwise. `Remove` marks a tile retracted after settling and
/// `Start` opens the trace. The `*Point` tags guard the tip of a diagonally
/// laid tile; they carry corner geometry but take no part in intrusion or
/// margin logic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    East,
    North,
    West,
    South,
    Remove,
    Start,
    EastPoint,
    NorthPoint,
    WestPoint,
    SouthPoint,
}

impl Direction {
    /// True for the four cardinal laying directions.
    pub fn is_cardinal(self) -> bool {
        matches!(
            self,
            Direction::East | Direction::North | Direction::West | Direction::South
        )
    }

    /// The direction 90 degrees anti-clockwise from a cardinal.
    ///
    /// This single table drives both the resolution of a `Remove`
    /// pseudo-direction into the notional follow-on direction and the
    /// two-step completion sequences of the intrusion matcher: the sequence
    /// completing direction `d` is `[d.turn_ccw(), d]`.
    pub fn turn_ccw(self) -> Option<Direction> {
        match self {
            Direction::East => Some(Direction::North),
            Direction::North => Some(Direction::West),
            Direction::West => Some(Direction::South),
            Direction::South => Some(Direction::East),
            _ => None,
        }
    }

    /// Stable wire code, used by the WASM layer and external persistence.
    pub fn code(self) -> u8 {
        match self {
            Direction::East => 1,
            Direction::North => 2,
            Direction::West => 3,
            Direction::South => 4,
            Direction::Remove => 5,
            Direction::Start => 6,
            Direction::EastPoint => 7,
            Direction::NorthPoint => 8,
            Direction::WestPoint => 9,
            Direction::SouthPoint => 10,
        }
    }

    /// Inverse of [`Direction::code`].
    pub fn from_code(code: u8) -> Option<Direction> {
        match code {
            1 => Some(Direction::East),
            2 => Some(Direction::North),
            3 => Some(Direction::West),
            4 => Some(Direction::South),
            5 => Some(Direction::Remove),
            6 => Some(Direction::Start),
            7 => Some(Direction::EastPoint),
            8 => Some(Direction::NorthPoint),
            9 => Some(Direction::WestPoint),
            10 => Some(Direction::SouthPoint),
            _ => None,
        }
    }
}
