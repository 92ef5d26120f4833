//! Dense square matrices of non-negative reals.
//!
//! [`SquareMatrix`] is the input to the decomposition and the type of the
//! residual the reduction loop mutates. Storage is a single row-major buffer;
//! the only shape check is squareness, performed once at construction.
//!
//! Row and column sums are exposed for callers that want to inspect the
//! doubly stochastic structure, but nothing here enforces it.

use alloc::vec;
use alloc::vec::Vec;

use crate::error::BirkhoffError;
use crate::tolerance::is_zero;

/// An n×n matrix stored row-major.
#[derive(Clone, Debug, PartialEq)]
pub struct SquareMatrix {
    size: usize,
    data: Vec<f64>,
}

impl SquareMatrix {
    /// An n×n matrix of zeros.
    pub fn zeros(size: usize) -> Self {
        Self { size, data: vec![0.0; size * size] }
    }

    /// The n×n identity matrix.
    pub fn identity(size: usize) -> Self {
        let mut m = Self::zeros(size);
        for i in 0..size {
            m.set(i, i, 1.0);
        }
        m
    }

    /// Build from a slice of rows.
    ///
    /// Fails with [`BirkhoffError::NotSquare`] on the first row whose length
    /// differs from the number of rows.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self, BirkhoffError> {
        let size = rows.len();
        // Validate every row before reserving n² entries.
        for (row, r) in rows.iter().enumerate() {
            let len = r.as_ref().len();
            if len != size {
                return Err(BirkhoffError::NotSquare { rows: size, row, len });
            }
        }
        let mut data = Vec::with_capacity(size * size);
        for r in rows {
            data.extend_from_slice(r.as_ref());
        }
        Ok(Self { size, data })
    }

    /// Build from a fixed-size array. Square by construction.
    pub fn from_array<const N: usize>(m: &[[f64; N]; N]) -> Self {
        let mut data = Vec::with_capacity(N * N);
        for row in m {
            data.extend_from_slice(row);
        }
        Self { size: N, data }
    }

    /// Dimension n.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Entry at (row, col).
    ///
    /// # Panics
    /// If either index is out of bounds.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        assert!(row < self.size && col < self.size, "index ({row}, {col}) out of bounds");
        self.data[row * self.size + col]
    }

    /// Overwrite the entry at (row, col).
    ///
    /// # Panics
    /// If either index is out of bounds.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        assert!(row < self.size && col < self.size, "index ({row}, {col}) out of bounds");
        self.data[row * self.size + col] = value;
    }

    /// Subtract `amount` from the entry at (row, col).
    #[inline]
    pub(crate) fn sub_at(&mut self, row: usize, col: usize, amount: f64) {
        self.data[row * self.size + col] -= amount;
    }

    /// Add `amount` to the entry at (row, col).
    #[inline]
    pub(crate) fn add_at(&mut self, row: usize, col: usize, amount: f64) {
        self.data[row * self.size + col] += amount;
    }

    /// Borrow row `i` as a slice.
    ///
    /// # Panics
    /// If `i` is out of bounds.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.size..(i + 1) * self.size]
    }

    /// Iterate over rows.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        (0..self.size).map(move |i| self.row(i))
    }

    /// Copy out as nested row vectors.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.rows().map(|r| r.to_vec()).collect()
    }

    /// True if every entry is zero within `eps`.
    pub fn is_zero(&self, eps: f64) -> bool {
        self.data.iter().all(|&x| is_zero(x, eps))
    }

    /// Sum of each row.
    pub fn row_sums(&self) -> Vec<f64> {
        self.rows().map(|r| r.iter().sum()).collect()
    }

    /// Sum of each column.
    pub fn column_sums(&self) -> Vec<f64> {
        let mut sums = vec![0.0; self.size];
        for r in self.rows() {
            for (s, &x) in sums.iter_mut().zip(r) {
                *s += x;
            }
        }
        sums
    }

    /// A copy with every entry multiplied by `factor`.
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            size: self.size,
            data: self.data.iter().map(|&x| x * factor).collect(),
        }
    }

    /// Largest absolute entry-wise difference to `other`.
    ///
    /// Returns `f64::INFINITY` if the sizes differ.
    pub fn max_abs_diff(&self, other: &SquareMatrix) -> f64 {
        if self.size != other.size {
            return f64::INFINITY;
        }
        self.data
            .iter()
            .zip(&other.data)
            .map(|(a, b)| (a - b).abs())
            .fold(0.0_f64, f64::max)
    }
}
