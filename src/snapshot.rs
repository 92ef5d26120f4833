//! Portable record of a decomposition for persistence and transport.
//!
//! Permutations are stored as row → column index vectors rather than full
//! 0/1 matrices, so a record of k terms over n×n costs O(k·n).
//!
//! ```text
//! {
//!   "version": 1,
//!   "size": 3,
//!   "terms": [ { "coefficient": 0.5, "columns": [2, 0, 1] }, ... ]
//! }
//! ```
//!
//! Requires the `serde` feature.

use alloc::vec::Vec;

use crate::decomposition::{Decomposition, Term};
use crate::error::BirkhoffError;
use crate::permutation::Permutation;

/// Current snapshot format version.
pub const SNAPSHOT_VERSION: u16 = 1;

/// A serialisable snapshot of a [`Decomposition`].
///
/// # Example
///
/// ```rust,ignore
/// use birkhoff_core::snapshot::DecompositionSnapshot;
///
/// let snapshot = DecompositionSnapshot::from_decomposition(&decomposition);
/// let json = serde_json::to_string(&snapshot).unwrap();
/// let restored: DecompositionSnapshot = serde_json::from_str(&json).unwrap();
/// let decomposition = restored.into_decomposition()?;
/// ```
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
pub struct DecompositionSnapshot {
    /// Format version — always [`SNAPSHOT_VERSION`] for newly created snapshots.
    pub version: u16,
    /// Dimension n of the decomposed matrix.
    pub size: usize,
    /// Terms in extraction order.
    pub terms: Vec<TermRecord>,
}

/// Serialisable representation of a single [`Term`].
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
pub struct TermRecord {
    /// Term weight.
    pub coefficient: f64,
    /// Column of the 1 in each row of the permutation matrix.
    pub columns: Vec<usize>,
}

impl From<&Term> for TermRecord {
    fn from(t: &Term) -> Self {
        Self {
            coefficient: t.coefficient,
            columns: t.permutation.columns().to_vec(),
        }
    }
}

impl DecompositionSnapshot {
    /// Capture a decomposition.
    pub fn from_decomposition(d: &Decomposition) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            size: d.size(),
            terms: d.iter().map(TermRecord::from).collect(),
        }
    }

    /// Number of terms in this snapshot.
    pub fn term_count(&self) -> usize {
        self.terms.len()
    }

    /// Restore the decomposition.
    ///
    /// # Errors
    /// [`BirkhoffError::InvalidSnapshot`] if the version is unknown, a
    /// coefficient is not positive and finite, or a column vector is not a
    /// permutation of `0..size`.
    pub fn into_decomposition(self) -> Result<Decomposition, BirkhoffError> {
        if self.version != SNAPSHOT_VERSION {
            return Err(BirkhoffError::InvalidSnapshot("unsupported version"));
        }
        let size = self.size;
        let terms = self
            .terms
            .into_iter()
            .map(|r| {
                if !(r.coefficient.is_finite() && r.coefficient > 0.0) {
                    return Err(BirkhoffError::InvalidSnapshot("coefficient must be positive"));
                }
                if r.columns.len() != size {
                    return Err(BirkhoffError::InvalidSnapshot("permutation size mismatch"));
                }
                let permutation = Permutation::from_columns(r.columns)
                    .ok_or(BirkhoffError::InvalidSnapshot("columns are not a permutation"))?;
                Ok(Term { coefficient: r.coefficient, permutation })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Decomposition::from_terms(size, terms))
    }
}
