use crate::direction::Direction;
use crate::error::Error;
use crate::trace::BorderTrace;

/// Default occluder margin width, in tile units.
pub const DEFAULT_MARGIN_WIDTH: f64 = 4.0;
/// Default height of occluder quads above the tile surface.
pub const DEFAULT_Z_OFFSET: f64 = 2.0;

/// One of a tile footprint's four extremal corners.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ordinal {
    NorthWest,
    NorthEast,
    SouthWest,
    SouthEast,
}

/// Selects an extremal corner of a rectilinear tile footprint.
///
/// The corner is derived by extremum, not by stored identity, so the result
/// is invariant under any consistent ordering of the input corners. The
/// returned point floats at `z_offset` so the occluder sits above the tiles
/// instead of intersecting them.
pub fn ordinal_corner(corners: &[[f64; 3]; 4], ordinal: Ordinal, z_offset: f64) -> [f64; 3] {
    let fold = |select: fn(f64, f64) -> f64, axis: usize| {
        corners[1..]
            .iter()
            .fold(corners[0][axis], |acc, c| select(acc, c[axis]))
    };
    let x = match ordinal {
        Ordinal::NorthWest | Ordinal::SouthWest => fold(f64::min, 0),
        Ordinal::NorthEast | Ordinal::SouthEast => fold(f64::max, 0),
    };
    let y = match ordinal {
        Ordinal::SouthWest | Ordinal::SouthEast => fold(f64::min, 1),
        Ordinal::NorthWest | Ordinal::NorthEast => fold(f64::max, 1),
    };
    [x, y, z_offset]
}

/// What a synthesized quad occludes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OccluderKind {
    /// Seam along a straight run, anchored at trace index `index`.
    Margin { index: usize },
    /// Notch spanning trace indices `start..start + 3`.
    Intrusion { start: usize },
}

/// A flat occlusion polygon: four points in anti-clockwise winding, all at
/// the same small z-offset above the tile surface. Hand-off geometry for the
/// rendering collaborator; nothing here mutates it after synthesis.
#[derive(Clone, Debug, PartialEq)]
pub struct OccluderQuad {
    pub points: [[f64; 3]; 4],
    pub kind: OccluderKind,
}

impl OccluderQuad {
    /// Node name used when the quad is realized in the scene graph, matching
    /// the trace indices it covers.
    pub fn name(&self) -> String {
        match self.kind {
            OccluderKind::Margin { index } => format!("margin_{index}"),
            OccluderKind::Intrusion { start } => format!("intrusion_{}_{}", start, start + 3),
        }
    }
}

/// Builds margin and intrusion occluder quads from border trace segments.
pub struct OccluderSynthesizer {
    pub margin_width: f64,
    pub z_offset: f64,
}

impl Default for OccluderSynthesizer {
    fn default() -> Self {
        Self {
            margin_width: DEFAULT_MARGIN_WIDTH,
            z_offset: DEFAULT_Z_OFFSET,
        }
    }
}

impl OccluderSynthesizer {
    pub fn new(margin_width: f64, z_offset: f64) -> Self {
        Self {
            margin_width,
            z_offset,
        }
    }

    /// Resolves the effective travel direction of the segment leaving
    /// `from_dir` towards a record tagged `to_dir`.
    ///
    /// `Remove` is replaced by the direction 90 degrees anti-clockwise from
    /// the departing direction, keeping the notional progression
    /// anti-clockwise. `Start` is fixed to West: traversal begins at the
    /// north-west corner heading anti-clockwise.
    fn resolve_to_dir(from_dir: Direction, to_dir: Direction) -> Result<Direction, Error> {
        match to_dir {
            Direction::Remove => from_dir.turn_ccw().ok_or(Error::InvalidDirection {
                direction: from_dir,
                table: "remove resolution",
            }),
            Direction::Start => Ok(Direction::West),
            other => Ok(other),
        }
    }

    /// Ordinal pair (tail, head) so the margin occluder skirts the inner
    /// edge of the border ring while traveling anti-clockwise. The tail wing
    /// extends the occluder backwards by the margin width to butt up to the
    /// head of the previous occluder, while the head stops at the corner of
    /// its own tile.
    fn margin_ordinals(to_dir: Direction) -> Result<(Ordinal, Ordinal), Error> {
        match to_dir {
            Direction::East => Ok((Ordinal::NorthWest, Ordinal::NorthEast)),
            Direction::North => Ok((Ordinal::SouthWest, Ordinal::NorthWest)),
            Direction::West => Ok((Ordinal::SouthEast, Ordinal::SouthWest)),
            Direction::South => Ok((Ordinal::NorthEast, Ordinal::SouthEast)),
            other => Err(Error::InvalidDirection {
                direction: other,
                table: "margin ordinal",
            }),
        }
    }

    /// Entry/exit ordinal pair for an intrusion, skirting the outer edge of
    /// the notch. Opposite convention from margin occluders so a visible
    /// grout line is kept along the notch.
    fn intrusion_ordinals(matched_dir: Direction) -> Result<(Ordinal, Ordinal), Error> {
        match matched_dir {
            Direction::East => Ok((Ordinal::NorthWest, Ordinal::NorthEast)),
            Direction::North => Ok((Ordinal::SouthWest, Ordinal::NorthWest)),
            Direction::West => Ok((Ordinal::SouthEast, Ordinal::SouthWest)),
            Direction::South => Ok((Ordinal::NorthEast, Ordinal::SouthEast)),
            other => Err(Error::InvalidDirection {
                direction: other,
                table: "intrusion ordinal",
            }),
        }
    }

    /// Builds the margin quad for the segment from record `i0` to its cyclic
    /// successor.
    ///
    /// `no_tail` suppresses the backward tail-wing extension; it is set when
    /// the preceding trace index was consumed by an intrusion, whose occluder
    /// already covers the gap.
    pub fn margin_occluder(
        &self,
        trace: &BorderTrace,
        i0: usize,
        no_tail: bool,
    ) -> Result<OccluderQuad, Error> {
        let i1 = trace.successor(i0);
        let from_rec = trace.cyclic(i0);
        let to_rec = trace.cyclic(i1);

        let to_dir = Self::resolve_to_dir(from_rec.direction, to_rec.direction)?;
        let (tail, head) = Self::margin_ordinals(to_dir)?;
        let start = ordinal_corner(&from_rec.corners, tail, self.z_offset);
        let end = ordinal_corner(&to_rec.corners, head, self.z_offset);

        let m = self.margin_width;
        let points = match to_dir {
            Direction::East => {
                let x = if no_tail { 0.0 } else { -m };
                let y = -m;
                [
                    offset(start, x, 0.0),
                    offset(start, x, y),
                    offset(end, 0.0, y),
                    end,
                ]
            }
            Direction::North => {
                let x = m;
                let y = if no_tail { 0.0 } else { -m };
                [
                    offset(start, 0.0, y),
                    offset(start, x, y),
                    offset(end, x, 0.0),
                    end,
                ]
            }
            Direction::West => {
                let x = if no_tail { 0.0 } else { m };
                let y = m;
                [
                    offset(start, x, 0.0),
                    offset(start, x, y),
                    offset(end, 0.0, y),
                    end,
                ]
            }
            Direction::South => {
                let x = -m;
                let y = if no_tail { 0.0 } else { m };
                [
                    offset(start, 0.0, y),
                    offset(start, x, y),
                    offset(end, x, 0.0),
                    end,
                ]
            }
            // resolve_to_dir and margin_ordinals already rejected the rest
            other => {
                return Err(Error::InvalidDirection {
                    direction: other,
                    table: "margin stake",
                });
            }
        };

        Ok(OccluderQuad {
            points,
            kind: OccluderKind::Margin { index: i0 },
        })
    }

    /// Builds the occluder for an intrusion starting at trace index `i0`.
    ///
    /// Consumes the four corner sets at `i0..=i0 + 3` (cyclically indexed):
    /// positions 0-1 take the entry ordinal, positions 2-3 the exit ordinal.
    /// The opening is widened by the margin width along the axis
    /// perpendicular to `matched_dir`, and the quad is returned reversed
    /// because intrusions are entered and exited clockwise while the
    /// occlusion-polygon convention is anti-clockwise.
    pub fn intrusion_occluder(
        &self,
        trace: &BorderTrace,
        i0: usize,
        matched_dir: Direction,
    ) -> Result<OccluderQuad, Error> {
        let (entry, exit) = Self::intrusion_ordinals(matched_dir)?;

        let mut pts = [[0.0; 3]; 4];
        for (k, pt) in pts.iter_mut().enumerate() {
            let rec = trace.cyclic(i0 + k);
            let ordinal = if k / 2 == 1 { exit } else { entry };
            *pt = ordinal_corner(&rec.corners, ordinal, self.z_offset);
        }

        // Widen the opening so the occluder overhangs the mouth of the
        // notch on the outward side.
        let m = self.margin_width;
        match matched_dir {
            Direction::East => {
                let y = pts[0][1].min(pts[3][1]) - m;
                pts[0][1] = y;
                pts[3][1] = y;
            }
            Direction::North => {
                let x = pts[0][0].max(pts[3][0]) + m;
                pts[0][0] = x;
                pts[3][0] = x;
            }
            Direction::West => {
                let y = pts[0][1].max(pts[3][1]) + m;
                pts[0][1] = y;
                pts[3][1] = y;
            }
            Direction::South => {
                let x = pts[0][0].min(pts[3][0]) - m;
                pts[0][0] = x;
                pts[3][0] = x;
            }
            other => {
                return Err(Error::InvalidDirection {
                    direction: other,
                    table: "intrusion stake",
                });
            }
        }

        Ok(OccluderQuad {
            points: [pts[3], pts[2], pts[1], pts[0]],
            kind: OccluderKind::Intrusion { start: i0 },
        })
    }
}

fn offset(p: [f64; 3], dx: f64, dy: f64) -> [f64; 3] {
    [p[0] + dx, p[1] + dy, p[2]]
}
