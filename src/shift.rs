use rayon::prelude::*;

use crate::direction::Direction;
use crate::error::Error;

/// Default geometric matching tolerance, in tile units.
pub const DEFAULT_TOLERANCE: f64 = 1e-2;

/// Infers the lattice translation that reproduces a tile group's spacing
/// pattern in a requested cardinal direction.
///
/// Works both for groups aligned in the shift direction, like
///
/// ```text
/// [ ][ ][ ]
/// [ ][ ][ ]
/// ```
///
/// and for non-aligned diamond / zig-zag layouts, like
///
/// ```text
/// X  X  X  X
///  X  X  X  X
/// ```
///
/// The tolerance decides when two coordinates count as the same grid rank or
/// the same row; it is scale-specific, so it is configurable rather than
/// baked in.
pub struct ShiftInference {
    pub tolerance: f64,
}

impl Default for ShiftInference {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl ShiftInference {
    pub fn new(tolerance: f64) -> Self {
        Self { tolerance }
    }

    /// Infers the shift vector for duplicating `positions` towards
    /// `direction`.
    ///
    /// The group is borrowed read-only and never mutated. Fails with
    /// [`Error::InsufficientData`] when fewer than two positions are given
    /// or when neither termination rule (close-grouped run, rank match) is
    /// reachable.
    pub fn infer(&self, direction: Direction, positions: &[[f64; 3]]) -> Result<[f64; 3], Error> {
        if !direction.is_cardinal() {
            return Err(Error::InvalidDirection {
                direction,
                table: "shift axis",
            });
        }
        if positions.len() < 2 {
            return Err(Error::InsufficientData(positions.len()));
        }

        let tol = self.tolerance;
        let reverse = matches!(direction, Direction::North | Direction::East);

        // Linearize the 2D group along the axis perpendicular to the shift.
        let mut ordered: Vec<[f64; 3]> = positions.to_vec();
        sort_by_key(&mut ordered, reverse, |p| sort_coord(p, direction));

        // Two searches run over the same walk. A close-grouped run at the
        // head (tiles aligned in the shift direction) takes priority and
        // stops the walk when the alignment ceases. Failing that, the walk
        // stops at the first tile whose grid rank matches an earlier tile's.
        let mut ranks: Vec<f64> = Vec::new();
        let mut matched_rank: Option<usize> = None;
        let mut terminal: Option<usize> = None;
        let mut last_sort: Option<f64> = None;
        let mut close_run: Option<usize> = None;

        for (i, p) in ordered.iter().enumerate() {
            let s = sort_coord(p, direction);
            if let Some(last) = last_sort {
                if (s - last).abs() <= tol {
                    close_run = Some(i);
                } else if close_run.is_some() {
                    break;
                }
            }
            last_sort = Some(s);

            let r = rank_coord(p, direction);
            matched_rank = ranks.iter().position(|seen| (r - seen).abs() <= tol);
            ranks.push(r);
            if matched_rank.is_some() {
                terminal = Some(i);
                break;
            }
        }

        if let Some(run) = close_run {
            // The in-line run pre-empts any matching grid rank.
            terminal = Some(run + 1);
            matched_rank = Some(0);
        }

        let (Some(terminal), Some(matched)) = (terminal, matched_rank) else {
            return Err(Error::InsufficientData(positions.len()));
        };

        // Re-sort the prefix by rank in the opposite order, forming a chain
        // of consecutive vectors whose head-to-toe sum is last minus first.
        let mut chain: Vec<[f64; 3]> = ordered[..terminal].to_vec();
        sort_by_key(&mut chain, !reverse, |p| rank_coord(p, direction));
        if chain.len() < 2 || matched + 1 >= chain.len() {
            return Err(Error::InsufficientData(positions.len()));
        }

        let forward = sub(chain[chain.len() - 1], chain[0]);
        let origin = if sort_coord(&forward, direction).abs() <= tol {
            // Rectilinear pattern or in-line diagonals: the matched tile
            // within the rearmost chain anchors the residual step.
            chain[matched]
        } else {
            // Zig-zag: anchor on the terminating tile of the original walk.
            // A close-grouped run that consumed the whole group has no such
            // tile left.
            ordered
                .get(terminal)
                .copied()
                .ok_or(Error::InsufficientData(positions.len()))?
        };
        let delta = sub(chain[matched + 1], origin);

        Ok(add(forward, delta))
    }

    /// Stamps `times` copies of every position at `p + shift * k`,
    /// `k = 1..=times`, using the inferred shift. Copies are grouped per
    /// source position, matching the duplication driver's placement order.
    pub fn repeat(
        &self,
        direction: Direction,
        positions: &[[f64; 3]],
        times: usize,
    ) -> Result<Vec<[f64; 3]>, Error> {
        let shift = self.infer(direction, positions)?;
        Ok(positions
            .par_iter()
            .flat_map_iter(|p| {
                (1..=times).map(move |k| {
                    let f = k as f64;
                    [
                        p[0] + shift[0] * f,
                        p[1] + shift[1] * f,
                        p[2] + shift[2] * f,
                    ]
                })
            })
            .collect())
    }
}

/// Coordinate parallel to the shift axis: the tile's grid rank.
fn rank_coord(p: &[f64; 3], direction: Direction) -> f64 {
    match direction {
        Direction::South | Direction::North => p[1],
        _ => p[0],
    }
}

/// Coordinate perpendicular to the shift axis: the walk order.
fn sort_coord(p: &[f64; 3], direction: Direction) -> f64 {
    match direction {
        Direction::South | Direction::North => p[0],
        _ => p[1],
    }
}

/// Stable sort by a float key; equal keys keep their input order in both
/// ascending and descending passes.
fn sort_by_key(points: &mut [[f64; 3]], reverse: bool, key: impl Fn(&[f64; 3]) -> f64) {
    points.sort_by(|a, b| {
        let (ka, kb) = (key(a), key(b));
        if reverse {
            kb.total_cmp(&ka)
        } else {
            ka.total_cmp(&kb)
        }
    });
}

fn sub(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

fn add(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
}
