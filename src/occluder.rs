use crate::direction::Direction;
use crate::error::Error;
use crate::matcher::IntrusionMatcher;
use crate::synthesis::{OccluderQuad, OccluderSynthesizer};
use crate::trace::BorderTrace;

/// One border-layout session: records placement events as tiles settle, then
/// analyzes the completed trace into occlusion quads.
///
/// The external placement driver calls [`BorderOccluder::register`] in
/// spatial anti-clockwise order; once placement completes,
/// [`BorderOccluder::analyze`] performs a single scan and hands back the
/// quads for realization under a shared border transform.
pub struct BorderOccluder {
    trace: BorderTrace,
    synthesizer: OccluderSynthesizer,
}

impl Default for BorderOccluder {
    fn default() -> Self {
        Self {
            trace: BorderTrace::new(),
            synthesizer: OccluderSynthesizer::default(),
        }
    }
}

impl BorderOccluder {
    pub fn new(margin_width: f64, z_offset: f64) -> Self {
        Self {
            trace: BorderTrace::new(),
            synthesizer: OccluderSynthesizer::new(margin_width, z_offset),
        }
    }

    /// Appends a placement event to the session trace.
    pub fn register(&mut self, direction: Direction, corners: [[f64; 3]; 4]) {
        self.trace.register(direction, corners);
    }

    pub fn trace(&self) -> &BorderTrace {
        &self.trace
    }

    /// Scans the trace once and synthesizes all occluder quads: intrusion
    /// occluders in detection order, then margin occluders for every
    /// surviving index in ascending order.
    ///
    /// A margin occluder loses its tail wing when the surviving index is not
    /// the immediate successor of the previously processed one; the gap was
    /// consumed by an intrusion whose occluder already covers it.
    pub fn analyze(&self) -> Result<Vec<OccluderQuad>, Error> {
        let outcome = IntrusionMatcher::scan(&self.trace)?;
        let mut quads = Vec::with_capacity(outcome.intrusions.len() + outcome.unoccluded.len());

        for intrusion in &outcome.intrusions {
            quads.push(self.synthesizer.intrusion_occluder(
                &self.trace,
                intrusion.start,
                intrusion.direction,
            )?);
        }

        let mut last_ix: Option<usize> = None;
        for &ix in &outcome.unoccluded {
            let no_tail = last_ix.is_some_and(|last| last + 1 < ix);
            last_ix = Some(ix);
            quads.push(self.synthesizer.margin_occluder(&self.trace, ix, no_tail)?);
        }

        Ok(quads)
    }
}
