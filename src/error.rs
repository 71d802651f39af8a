use thiserror::Error;

/// Why a sequence of ranges cannot form an interval set.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RangeError {
    /// A range has its start after its end.
    #[error("range {index} has its start after its end")]
    Inverted {
        /// Position of the offending range in the input.
        index: usize,
    },
    /// A range overlaps, or begins before, the range preceding it.
    #[error("range {index} overlaps or precedes the range before it")]
    Unordered {
        /// Position of the offending range in the input.
        index: usize,
    },
    /// A range begins directly after the preceding one ends, so the two
    /// should have been a single range.
    #[error("range {index} begins directly after the range before it and must be coalesced")]
    Touching {
        /// Position of the offending range in the input.
        index: usize,
    },
}
