//! Birkhoff–von Neumann decomposition by iterative matching reduction.
//!
//! Given a non-negative square matrix whose row and column sums all equal
//! some constant c, repeatedly peels off a weighted permutation matrix until
//! nothing is left:
//!
//! 1. Build the support graph of the residual.
//! 2. Find a perfect matching in it.
//! 3. Take the smallest residual entry on the matching as the coefficient.
//! 4. Subtract the coefficient at the n matched positions.
//!
//! Step 4 zeroes at least one entry, so the loop ends after at most n²
//! steps. By König's theorem a perfect matching exists at every step while
//! the residual is a positive multiple of a doubly stochastic matrix.
//!
//! # Invariants
//! - Coefficients are positive and sum to c.
//! - Σ coefficient × permutation equals the input within tolerance.
//! - At most n² terms; no permutation appears twice.
//! - The caller's matrix is never mutated.

use alloc::vec::Vec;

use hashbrown::HashSet;

use crate::error::BirkhoffError;
use crate::matching::perfect_matching;
use crate::matrix::SquareMatrix;
use crate::permutation::Permutation;
use crate::support::SupportGraph;
use crate::tolerance::{is_valid_tolerance, DEFAULT_TOLERANCE};

/// One weighted permutation of a decomposition.
#[derive(Clone, Debug, PartialEq)]
pub struct Term {
    /// Weight of this permutation, > tolerance.
    pub coefficient: f64,
    /// The permutation matrix.
    pub permutation: Permutation,
}

/// Ordered list of (coefficient, permutation) terms.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Decomposition {
    size: usize,
    terms: Vec<Term>,
}

impl Decomposition {
    pub(crate) fn from_terms(size: usize, terms: Vec<Term>) -> Self {
        Self { size, terms }
    }

    /// Dimension n of the decomposed matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// True if the input was the zero matrix.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Terms in extraction order.
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Iterate over terms.
    pub fn iter(&self) -> core::slice::Iter<'_, Term> {
        self.terms.iter()
    }

    /// Consume into `(coefficient, permutation)` pairs.
    pub fn into_pairs(self) -> Vec<(f64, Permutation)> {
        self.terms
            .into_iter()
            .map(|t| (t.coefficient, t.permutation))
            .collect()
    }

    /// Sum of all coefficients: the row/column sum constant of the input.
    pub fn coefficient_sum(&self) -> f64 {
        self.terms.iter().map(|t| t.coefficient).sum()
    }

    /// Σ coefficient × permutation.
    pub fn reconstruct(&self) -> SquareMatrix {
        let mut m = SquareMatrix::zeros(self.size);
        for t in &self.terms {
            for (i, j) in t.permutation.positions() {
                m.add_at(i, j, t.coefficient);
            }
        }
        m
    }

    /// Largest entry-wise error of [`Self::reconstruct`] against `original`.
    pub fn max_deviation(&self, original: &SquareMatrix) -> f64 {
        self.reconstruct().max_abs_diff(original)
    }

    /// True if no permutation occurs in more than one term.
    pub fn has_distinct_permutations(&self) -> bool {
        let mut seen = HashSet::with_capacity(self.terms.len());
        self.terms.iter().all(|t| seen.insert(t.permutation.columns()))
    }
}

impl<'a> IntoIterator for &'a Decomposition {
    type Item = &'a Term;
    type IntoIter = core::slice::Iter<'a, Term>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter()
    }
}

/// Reduction loop state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Reduction {
    /// The residual still has a non-zero entry.
    Running,
    /// The residual is zero within tolerance.
    Done,
}

/// Birkhoff–von Neumann decomposer.
#[derive(Clone, Debug)]
pub struct BirkhoffDecomposer {
    /// Zero tolerance applied to every residual entry (default: 1e-7).
    pub tolerance: f64,
    /// Iteration cap. `None` uses n², the theoretical maximum.
    pub max_iterations: Option<usize>,
}

impl Default for BirkhoffDecomposer {
    fn default() -> Self {
        Self { tolerance: DEFAULT_TOLERANCE, max_iterations: None }
    }
}

impl BirkhoffDecomposer {
    /// Create a decomposer with the given zero tolerance and the n² iteration cap.
    pub fn new(tolerance: f64) -> Self {
        Self { tolerance, max_iterations: None }
    }

    /// Override the iteration cap.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = Some(max_iterations);
        self
    }

    /// Decompose `m` into weighted permutation matrices.
    ///
    /// `m` is copied into a private residual; it is never modified. Input is
    /// assumed to be a non-negative multiple of a doubly stochastic matrix and
    /// is not otherwise validated.
    ///
    /// # Errors
    /// - [`BirkhoffError::InvalidTolerance`] if the tolerance is negative or not finite.
    /// - [`BirkhoffError::InfeasibleResidual`] if some residual has no perfect matching.
    /// - [`BirkhoffError::IterationBoundExceeded`] if the residual is not exhausted in time.
    pub fn decompose(&self, m: &SquareMatrix) -> Result<Decomposition, BirkhoffError> {
        let eps = self.tolerance;
        if !is_valid_tolerance(eps) {
            return Err(BirkhoffError::InvalidTolerance(eps));
        }

        let n = m.size();
        let bound = self.max_iterations.unwrap_or(n * n);
        let mut residual = m.clone();
        let mut terms = Vec::new();

        let mut state = if residual.is_zero(eps) { Reduction::Done } else { Reduction::Running };
        while state == Reduction::Running {
            let iteration = terms.len();
            if iteration >= bound {
                tracing::warn!(size = n, bound, "reduction exceeded iteration bound");
                return Err(BirkhoffError::IterationBoundExceeded { bound });
            }

            let graph = SupportGraph::from_matrix(&residual, eps);
            let matching = perfect_matching(&graph).map_err(|f| {
                tracing::warn!(
                    iteration,
                    row = f.row,
                    "residual support has no perfect matching"
                );
                BirkhoffError::InfeasibleResidual { iteration, row: f.row }
            })?;
            let permutation = Permutation::from_matching(matching);

            // Every matched entry is an edge, hence > eps, so the minimum is positive.
            let coefficient = permutation
                .positions()
                .map(|(i, j)| residual.get(i, j))
                .fold(f64::INFINITY, f64::min);

            tracing::trace!(
                iteration,
                coefficient,
                edges = graph.edge_count(),
                "extracted permutation"
            );

            for (i, j) in permutation.positions() {
                residual.sub_at(i, j, coefficient);
            }
            terms.push(Term { coefficient, permutation });

            if residual.is_zero(eps) {
                state = Reduction::Done;
            }
        }

        tracing::debug!(size = n, terms = terms.len(), "decomposition complete");
        Ok(Decomposition::from_terms(n, terms))
    }

    /// Validate `rows` as a square matrix and decompose it.
    pub fn decompose_rows<R: AsRef<[f64]>>(&self, rows: &[R]) -> Result<Decomposition, BirkhoffError> {
        self.decompose(&SquareMatrix::from_rows(rows)?)
    }
}

/// Decompose `rows` with the default tolerance.
///
/// Shorthand for `BirkhoffDecomposer::default().decompose_rows(rows)`.
pub fn birkhoff_decomposition<R: AsRef<[f64]>>(rows: &[R]) -> Result<Decomposition, BirkhoffError> {
    BirkhoffDecomposer::default().decompose_rows(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn decompose<const N: usize>(m: [[f64; N]; N]) -> Decomposition {
        BirkhoffDecomposer::default()
            .decompose(&SquareMatrix::from_array(&m))
            .unwrap()
    }

    #[test]
    fn test_identity_is_single_term() {
        let d = decompose([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
        assert_eq!(d.len(), 1);
        assert_eq!(d.terms()[0].coefficient, 1.0);
        assert!(d.terms()[0].permutation.is_identity());
    }

    #[test]
    fn test_uniform_2x2() {
        let d = decompose([[0.5, 0.5], [0.5, 0.5]]);
        let pairs = d.into_pairs();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0], (0.5, Permutation::from_columns(vec![1, 0]).unwrap()));
        assert_eq!(pairs[1], (0.5, Permutation::identity(2)));
    }

    #[test]
    fn test_zero_matrix_is_empty() {
        let d = decompose([[0.0; 3]; 3]);
        assert!(d.is_empty());
        assert_eq!(d.size(), 3);
        assert_eq!(d.coefficient_sum(), 0.0);
    }

    #[test]
    fn test_input_not_mutated() {
        let m = SquareMatrix::from_array(&[[0.3, 0.7], [0.7, 0.3]]);
        let before = m.clone();
        BirkhoffDecomposer::default().decompose(&m).unwrap();
        assert_eq!(m, before);
    }

    #[test]
    fn test_invalid_tolerance_rejected() {
        let m = SquareMatrix::identity(2);
        let err = BirkhoffDecomposer::new(-1.0).decompose(&m).unwrap_err();
        assert_eq!(err, BirkhoffError::InvalidTolerance(-1.0));
        assert!(matches!(
            BirkhoffDecomposer::new(f64::NAN).decompose(&m),
            Err(BirkhoffError::InvalidTolerance(_))
        ));
    }

    #[test]
    fn test_unbalanced_input_is_infeasible() {
        // Row sums 1 and 1, column sums 2 and 0: no perfect matching.
        let err = BirkhoffDecomposer::default()
            .decompose(&SquareMatrix::from_array(&[[1.0, 0.0], [1.0, 0.0]]))
            .unwrap_err();
        assert_eq!(err, BirkhoffError::InfeasibleResidual { iteration: 0, row: 1 });
    }

    #[test]
    fn test_infeasible_after_first_step() {
        // First step removes the identity with weight 0.5; the residual
        // [[0, 0.5], [0, 0.5]] has both rows competing for column 1.
        let err = BirkhoffDecomposer::default()
            .decompose(&SquareMatrix::from_array(&[[0.5, 0.5], [0.0, 1.0]]))
            .unwrap_err();
        assert_eq!(err, BirkhoffError::InfeasibleResidual { iteration: 1, row: 1 });
    }

    #[test]
    fn test_iteration_cap() {
        let m = SquareMatrix::from_array(&[[0.5, 0.5], [0.5, 0.5]]);
        let err = BirkhoffDecomposer::default()
            .with_max_iterations(1)
            .decompose(&m)
            .unwrap_err();
        assert_eq!(err, BirkhoffError::IterationBoundExceeded { bound: 1 });
    }

    #[test]
    fn test_reconstruct_and_distinct() {
        let m = SquareMatrix::from_array(&[[0.2, 0.3, 0.5], [0.5, 0.2, 0.3], [0.3, 0.5, 0.2]]);
        let d = BirkhoffDecomposer::default().decompose(&m).unwrap();
        assert!(d.max_deviation(&m) < 1e-9, "deviation {}", d.max_deviation(&m));
        assert!((d.coefficient_sum() - 1.0).abs() < 1e-9);
        assert!(d.has_distinct_permutations());
        assert!(d.len() <= 9);
    }

    #[test]
    fn test_distinct_check_detects_repeats() {
        let t = Term { coefficient: 0.5, permutation: Permutation::identity(2) };
        let d = Decomposition::from_terms(2, vec![t.clone(), t]);
        assert!(!d.has_distinct_permutations());
    }
}
