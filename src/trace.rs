use crate::direction::Direction;

/// One border placement event: the direction tag of the event and a snapshot
/// of the settled tile's four corner positions in the border frame.
#[derive(Clone, Debug, PartialEq)]
pub struct TraceRecord {
    pub direction: Direction,
    pub corners: [[f64; 3]; 4],
}

/// Append-only ordered log of border placement events.
///
/// Record order equals the spatial anti-clockwise traversal order around the
/// border loop, and the successor of the last record wraps to the first.
/// One trace belongs to exactly one border-layout session: it is built once
/// by the placement driver and then analyzed once, immutable.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BorderTrace {
    records: Vec<TraceRecord>,
}

impl BorderTrace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a placement event. There is no removal.
    pub fn register(&mut self, direction: Direction, corners: [[f64; 3]; 4]) {
        self.records.push(TraceRecord { direction, corners });
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&TraceRecord> {
        self.records.get(index)
    }

    pub fn records(&self) -> &[TraceRecord] {
        &self.records
    }

    /// Cyclic successor index; the closed border loop wraps the last record
    /// back to index 0.
    pub fn successor(&self, index: usize) -> usize {
        (index + 1) % self.records.len()
    }

    /// Cyclic index into the trace.
    pub fn cyclic(&self, index: usize) -> &TraceRecord {
        &self.records[index % self.records.len()]
    }
}
