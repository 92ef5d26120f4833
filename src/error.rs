//! Errors surfaced by the decomposition.
//!
//! Decomposition is all-or-nothing: every variant aborts the computation and
//! no partial result is returned.

/// Errors that can occur while building or decomposing a matrix.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BirkhoffError {
    /// The input is not square: row `row` has `len` entries, expected `rows`.
    #[error("input matrix must be square: row {row} has {len} entries, expected {rows}")]
    NotSquare {
        /// Number of rows in the input.
        rows: usize,
        /// Index of the first offending row.
        row: usize,
        /// Length of that row.
        len: usize,
    },

    /// No perfect matching exists in the support graph of a non-zero residual.
    ///
    /// Either the input is not a non-negative multiple of a doubly stochastic
    /// matrix, or the tolerance does not fit the floating-point noise.
    #[error(
        "no perfect matching at iteration {iteration}: row {row} has no augmenting path \
         (rows before it were matched)"
    )]
    InfeasibleResidual {
        /// Zero-based reduction step at which matching failed.
        iteration: usize,
        /// First row for which no augmenting path was found.
        row: usize,
    },

    /// The reduction loop ran past its iteration bound without exhausting the residual.
    #[error("reduction did not terminate within {bound} iterations")]
    IterationBoundExceeded {
        /// The bound that was exceeded.
        bound: usize,
    },

    /// Zero tolerance is negative, NaN or infinite.
    #[error("invalid zero tolerance {0}: must be finite and non-negative")]
    InvalidTolerance(f64),

    /// A restored snapshot does not describe a valid decomposition.
    #[error("invalid snapshot: {0}")]
    InvalidSnapshot(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_display_names_offending_row() {
        let e = BirkhoffError::NotSquare { rows: 3, row: 1, len: 2 };
        let msg = e.to_string();
        assert!(msg.contains("row 1"), "message: {msg}");
        assert!(msg.contains("expected 3"), "message: {msg}");
    }

    #[test]
    fn test_display_infeasible() {
        let e = BirkhoffError::InfeasibleResidual { iteration: 2, row: 0 };
        assert!(e.to_string().starts_with("no perfect matching at iteration 2"));
    }
}
