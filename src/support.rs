//! Bipartite support graph of a residual matrix.
//!
//! Rows `0..n` form the left partition, columns `0..n` the right. Edge
//! `(i, j)` exists iff `residual[i][j]` is not zero within the tolerance.
//! The graph is rebuilt from scratch at every reduction step.
//!
//! # Invariants
//! - Each row's neighbour list is sorted by ascending column index; the
//!   matching solver relies on this for deterministic tie-breaking.
//! - An all-zero residual yields a graph with no edges.

use alloc::vec::Vec;

use crate::matrix::SquareMatrix;
use crate::tolerance::is_zero;

/// Row → columns adjacency of the support of a square matrix.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SupportGraph {
    adjacency: Vec<Vec<usize>>,
    edge_count: usize,
}

impl SupportGraph {
    /// Build the support graph of `m`, treating entries with `|x| ≤ eps` as absent.
    pub fn from_matrix(m: &SquareMatrix, eps: f64) -> Self {
        let mut edge_count = 0;
        let adjacency = m
            .rows()
            .map(|row| {
                let cols: Vec<usize> = row
                    .iter()
                    .enumerate()
                    .filter(|&(_, &x)| !is_zero(x, eps))
                    .map(|(j, _)| j)
                    .collect();
                edge_count += cols.len();
                cols
            })
            .collect();
        Self { adjacency, edge_count }
    }

    /// Number of vertices in each partition.
    pub fn size(&self) -> usize {
        self.adjacency.len()
    }

    /// Total number of edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// True if the graph has no edges.
    pub fn is_empty(&self) -> bool {
        self.edge_count == 0
    }

    /// Columns adjacent to `row`, ascending.
    ///
    /// # Panics
    /// If `row` is out of bounds.
    pub fn neighbours(&self, row: usize) -> &[usize] {
        &self.adjacency[row]
    }

    /// True if `(row, col)` is an edge.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.adjacency
            .get(row)
            .is_some_and(|cols| cols.binary_search(&col).is_ok())
    }

    /// 0/1 matrix with a 1 exactly at each edge.
    pub fn pattern_matrix(&self) -> SquareMatrix {
        let mut p = SquareMatrix::zeros(self.size());
        for (i, cols) in self.adjacency.iter().enumerate() {
            for &j in cols {
                p.set(i, j, 1.0);
            }
        }
        p
    }

    /// Adjacency matrix of the full bipartite graph on 2n vertices.
    ///
    /// Vertex `i < n` is row `i`, vertex `n + j` is column `j`; the result is
    /// the block matrix `[[0, W], [Wᵀ, 0]]` where `W` is [`Self::pattern_matrix`].
    pub fn bipartite_adjacency(&self) -> SquareMatrix {
        let n = self.size();
        let mut a = SquareMatrix::zeros(2 * n);
        for (i, cols) in self.adjacency.iter().enumerate() {
            for &j in cols {
                a.set(i, n + j, 1.0);
                a.set(n + j, i, 1.0);
            }
        }
        a
    }
}
