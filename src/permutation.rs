//! Permutation matrices.
//!
//! A [`Permutation`] stores the column of the single 1 in each row. The
//! explicit 0/1 matrix is materialised on demand.

use alloc::vec;
use alloc::vec::Vec;

use crate::matching::Matching;
use crate::matrix::SquareMatrix;

/// An n×n permutation matrix, stored as row → column.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Permutation {
    columns: Vec<usize>,
}

impl Permutation {
    /// The identity permutation of size n.
    pub fn identity(size: usize) -> Self {
        Self { columns: (0..size).collect() }
    }

    /// Build from a row → column map.
    ///
    /// Returns `None` unless `columns` is a bijection on `0..columns.len()`.
    pub fn from_columns(columns: Vec<usize>) -> Option<Self> {
        let n = columns.len();
        let mut seen = vec![false; n];
        for &c in &columns {
            if c >= n || seen[c] {
                return None;
            }
            seen[c] = true;
        }
        Some(Self { columns })
    }

    /// Extract the permutation of a perfect matching.
    pub fn from_matching(matching: Matching) -> Self {
        Self { columns: matching.into_columns() }
    }

    /// Dimension n.
    pub fn size(&self) -> usize {
        self.columns.len()
    }

    /// Column holding the 1 in `row`.
    ///
    /// # Panics
    /// If `row` is out of bounds.
    pub fn column_of(&self, row: usize) -> usize {
        self.columns[row]
    }

    /// Row → column map.
    pub fn columns(&self) -> &[usize] {
        &self.columns
    }

    /// The `(row, col)` positions of the ones, in row order.
    pub fn positions(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.columns.iter().copied().enumerate()
    }

    /// True for the identity permutation.
    pub fn is_identity(&self) -> bool {
        self.positions().all(|(i, j)| i == j)
    }

    /// Entry (row, col) of the 0/1 matrix.
    ///
    /// # Panics
    /// If `row` is out of bounds.
    pub fn entry(&self, row: usize, col: usize) -> f64 {
        if self.columns[row] == col { 1.0 } else { 0.0 }
    }

    /// The explicit 0/1 matrix.
    pub fn to_matrix(&self) -> SquareMatrix {
        let mut m = SquareMatrix::zeros(self.size());
        for (i, j) in self.positions() {
            m.set(i, j, 1.0);
        }
        m
    }

    /// The explicit 0/1 matrix as nested rows.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        let n = self.size();
        self.columns
            .iter()
            .map(|&j| {
                let mut row = vec![0.0; n];
                row[j] = 1.0;
                row
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_permutation_matrix(m: &SquareMatrix) {
        for s in m.row_sums().into_iter().chain(m.column_sums()) {
            assert_eq!(s, 1.0);
        }
        for r in m.rows() {
            assert!(r.iter().all(|&x| x == 0.0 || x == 1.0));
        }
    }

    #[test]
    fn test_from_columns_validates_bijection() {
        assert!(Permutation::from_columns(vec![2, 0, 1]).is_some());
        assert!(Permutation::from_columns(vec![0, 0, 1]).is_none());
        assert!(Permutation::from_columns(vec![0, 3, 1]).is_none());
        assert!(Permutation::from_columns(vec![]).is_some());
    }

    #[test]
    fn test_to_matrix_places_ones() {
        let p = Permutation::from_columns(vec![1, 2, 0]).unwrap();
        let m = p.to_matrix();
        assert_permutation_matrix(&m);
        assert_eq!(m.get(0, 1), 1.0);
        assert_eq!(m.get(1, 2), 1.0);
        assert_eq!(m.get(2, 0), 1.0);
        assert_eq!(m.get(0, 0), 0.0);
        assert_eq!(p.entry(2, 0), 1.0);
        assert_eq!(p.to_rows(), m.to_rows());
    }

    #[test]
    fn test_identity() {
        let p = Permutation::identity(4);
        assert!(p.is_identity());
        assert_eq!(p.to_matrix(), SquareMatrix::identity(4));
        assert!(!Permutation::from_columns(vec![1, 0]).unwrap().is_identity());
    }
}
