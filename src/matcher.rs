use std::collections::BTreeSet;

use crate::direction::Direction;
use crate::error::Error;
use crate::trace::BorderTrace;

/// An in-progress two-step match towards an intrusion completion.
///
/// A candidate opens when a cardinal event with direction `target` is seen;
/// it then expects `[target.turn_ccw(), target]` over the next two events.
#[derive(Clone, Copy, Debug)]
struct Candidate {
    target: Direction,
    progress: usize,
}

impl Candidate {
    fn expected(&self) -> Direction {
        if self.progress == 0 {
            // turn_ccw is defined for every candidate target: only
            // cardinals open a slot.
            self.target.turn_ccw().unwrap_or(self.target)
        } else {
            self.target
        }
    }
}

/// A detected rectangular notch in the border outline.
///
/// The intrusion spans trace indices `start`, `start + 1` and `start + 2`
/// (entry, mid and exit corners); `direction` is the cardinal that completed
/// the match.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IntrusionMatch {
    pub start: usize,
    pub direction: Direction,
}

/// Result of one full scan over a border trace.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScanOutcome {
    /// Intrusions in detection order.
    pub intrusions: Vec<IntrusionMatch>,
    /// Trace indices not consumed by any intrusion, ascending.
    pub unoccluded: Vec<usize>,
}

/// Detects 2-step anti-clockwise turn-back patterns in a border trace.
///
/// Two candidate slots suffice: the event that completes a sequence frees
/// its slot and never simultaneously opens a new one, so at most two
/// sequences can be in progress at any step. The fixed-size array makes
/// that bound structural.
#[derive(Debug, Default)]
pub struct IntrusionMatcher {
    slots: [Option<Candidate>; 2],
}

impl IntrusionMatcher {
    /// Scans the full trace once, returning detected intrusions and the
    /// surviving (unoccluded) indices.
    ///
    /// Tip-guard `*Point` events neither open nor advance candidates; they
    /// abort any in-progress candidate like every other mismatch.
    pub fn scan(trace: &BorderTrace) -> Result<ScanOutcome, Error> {
        let mut matcher = IntrusionMatcher::default();
        let mut intrusions = Vec::new();
        let mut unoccluded: BTreeSet<usize> = (0..trace.len()).collect();

        for (i, record) in trace.records().iter().enumerate() {
            if let Some(found) = matcher.step(i, record.direction)? {
                for consumed in found.start..found.start + 3 {
                    if !unoccluded.remove(&consumed) {
                        return Err(Error::OverlappingIntrusion(consumed));
                    }
                }
                intrusions.push(found);
            }
        }

        Ok(ScanOutcome {
            intrusions,
            unoccluded: unoccluded.into_iter().collect(),
        })
    }

    /// Feeds one trace record into the slots. Returns the intrusion
    /// completed by this record, if any.
    fn step(&mut self, index: usize, direction: Direction) -> Result<Option<IntrusionMatch>, Error> {
        let mut completed: Option<Direction> = None;

        for slot in self.slots.iter_mut() {
            let Some(candidate) = slot else { continue };
            if direction == candidate.expected() {
                candidate.progress += 1;
                if candidate.progress == 2 {
                    if completed.is_some() {
                        return Err(Error::DoubleCompletion(index));
                    }
                    completed = Some(candidate.target);
                    *slot = None;
                }
            } else {
                *slot = None;
            }
        }

        if let Some(matched) = completed {
            // The completing event never opens a new candidate. The match
            // began two events back.
            return Ok(Some(IntrusionMatch {
                start: index - 2,
                direction: matched,
            }));
        }

        if direction.is_cardinal() {
            if let Some(free) = self.slots.iter_mut().find(|slot| slot.is_none()) {
                *free = Some(Candidate {
                    target: direction,
                    progress: 0,
                });
            }
        }

        Ok(None)
    }
}
