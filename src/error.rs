use thiserror::Error;

use crate::direction::Direction;

/// Failure conditions raised by trace analysis and shift inference.
///
/// All of these are local and fail-fast: inputs are deterministic geometry,
/// so the caller either aborts or resupplies corrected input. There is no
/// retry path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A direction without an entry reached a lookup table, e.g. a tip-guard
    /// tag presented to margin synthesis.
    #[error("direction {direction:?} has no entry in the {table} table")]
    InvalidDirection {
        direction: Direction,
        table: &'static str,
    },

    /// More than one intrusion candidate completed on the same trace record.
    /// The slot design makes this unreachable for well-formed traces.
    #[error("multiple intrusion candidates completed at trace index {0}")]
    DoubleCompletion(usize),

    /// A detected intrusion tried to consume a trace index that an earlier
    /// intrusion already removed from the unoccluded set.
    #[error("intrusion consumed trace index {0} twice")]
    OverlappingIntrusion(usize),

    /// The tile group is too small or never reaches a termination rule, so
    /// no repeating spacing pattern can be established.
    #[error("no repeating spacing pattern in a group of {0} tile positions")]
    InsufficientData(usize),
}
