//! Perfect bipartite matching by augmenting paths (Kuhn's algorithm).
//!
//! For each row in ascending order, a depth-first search looks for an
//! alternating path that starts at the row, alternates non-matching and
//! matching edges, and ends at a free column. Flipping the edges along such
//! a path grows the matching by one.
//!
//! # Algorithm
//!
//! Each search visits every column at most once, so one augmentation costs
//! O(E) and the full matching O(n·E). The search keeps an explicit stack
//! rather than recursing, so deep alternating paths on large matrices cannot
//! overflow the call stack.
//!
//! # Tie-breaking
//!
//! Rows are processed in ascending index order and each row's neighbours are
//! tried in ascending column order. The result is a deterministic function of
//! the graph.

use alloc::vec;
use alloc::vec::Vec;

use crate::support::SupportGraph;

/// A perfect matching: row `i` is matched to column `row_to_col[i]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Matching {
    row_to_col: Vec<usize>,
}

impl Matching {
    /// Number of matched pairs (equals the graph size).
    pub fn len(&self) -> usize {
        self.row_to_col.len()
    }

    /// True for the matching of an empty graph.
    pub fn is_empty(&self) -> bool {
        self.row_to_col.is_empty()
    }

    /// Column matched to `row`.
    ///
    /// # Panics
    /// If `row` is out of bounds.
    pub fn column_of(&self, row: usize) -> usize {
        self.row_to_col[row]
    }

    /// Matched `(row, col)` pairs in row order.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.row_to_col.iter().copied().enumerate()
    }

    /// Consume into the row → column vector.
    pub fn into_columns(self) -> Vec<usize> {
        self.row_to_col
    }
}

/// Why no perfect matching was found.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatchingFailure {
    /// First row for which no augmenting path exists.
    ///
    /// Rows are augmented in order, so rows `0..row` were matched when the
    /// search gave up.
    pub row: usize,
}

/// Find a perfect matching of `graph`, or report the first row that cannot be matched.
///
/// Stops at the first failing row: once a row has no augmenting path, no
/// later augmentation can create one, so the matching cannot be perfect.
pub fn perfect_matching(graph: &SupportGraph) -> Result<Matching, MatchingFailure> {
    let mut solver = Kuhn::new(graph);
    for row in 0..graph.size() {
        if !solver.augment(row) {
            return Err(MatchingFailure { row });
        }
    }
    Ok(Matching { row_to_col: solver.finish() })
}

/// Working state for one matching computation.
struct Kuhn<'g> {
    graph: &'g SupportGraph,
    row_to_col: Vec<Option<usize>>,
    col_to_row: Vec<Option<usize>>,
    visited: Vec<bool>,
    /// DFS frames: (row, index of the next neighbour to try).
    stack: Vec<(usize, usize)>,
    /// `path[k]` is the column taken out of `stack[k]`.
    path: Vec<usize>,
}

impl<'g> Kuhn<'g> {
    fn new(graph: &'g SupportGraph) -> Self {
        let n = graph.size();
        Self {
            graph,
            row_to_col: vec![None; n],
            col_to_row: vec![None; n],
            visited: vec![false; n],
            stack: Vec::with_capacity(n),
            path: Vec::with_capacity(n),
        }
    }

    /// Search for an augmenting path from the free row `root` and flip it.
    ///
    /// Returns `false` if none exists; the matching is then unchanged.
    fn augment(&mut self, root: usize) -> bool {
        self.visited.iter_mut().for_each(|v| *v = false);
        self.stack.clear();
        self.path.clear();
        self.stack.push((root, 0));

        while let Some(frame) = self.stack.last_mut() {
            let edges = self.graph.neighbours(frame.0);

            let mut next = None;
            while frame.1 < edges.len() {
                let col = edges[frame.1];
                frame.1 += 1;
                if !self.visited[col] {
                    self.visited[col] = true;
                    next = Some(col);
                    break;
                }
            }

            match next {
                // Dead end: backtrack to the row that led here.
                None => {
                    self.stack.pop();
                    self.path.pop();
                }
                Some(col) => {
                    self.path.push(col);
                    match self.col_to_row[col] {
                        Some(owner) => self.stack.push((owner, 0)),
                        None => {
                            self.flip();
                            return true;
                        }
                    }
                }
            }
        }
        false
    }

    /// Match every row on the stack to the column it stepped through.
    fn flip(&mut self) {
        debug_assert_eq!(self.stack.len(), self.path.len());
        for (&(row, _), &col) in self.stack.iter().zip(&self.path) {
            self.row_to_col[row] = Some(col);
            self.col_to_row[col] = Some(row);
        }
    }

    fn finish(self) -> Vec<usize> {
        // Every row was augmented successfully, so every entry is Some.
        self.row_to_col.into_iter().flatten().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::SquareMatrix;

    fn graph<const N: usize>(pattern: [[u8; N]; N]) -> SupportGraph {
        let mut m = SquareMatrix::zeros(N);
        for (i, row) in pattern.iter().enumerate() {
            for (j, &b) in row.iter().enumerate() {
                m.set(i, j, b as f64);
            }
        }
        SupportGraph::from_matrix(&m, 0.5)
    }

    fn assert_valid(g: &SupportGraph, m: &Matching) {
        let n = g.size();
        assert_eq!(m.len(), n);
        let mut seen = vec![false; n];
        for (i, j) in m.pairs() {
            assert!(g.contains(i, j), "({i}, {j}) is not an edge");
            assert!(!seen[j], "column {j} matched twice");
            seen[j] = true;
        }
    }

    #[test]
    fn test_identity_pattern() {
        let g = graph([[1, 0, 0], [0, 1, 0], [0, 0, 1]]);
        let m = perfect_matching(&g).unwrap();
        assert_eq!(m.into_columns(), vec![0, 1, 2]);
    }

    #[test]
    fn test_augmenting_path_reassigns_earlier_row() {
        // Row 0 grabs column 0 first; row 1 can only use column 0,
        // so row 0 must be pushed to column 1.
        let g = graph([[1, 1], [1, 0]]);
        let m = perfect_matching(&g).unwrap();
        assert_valid(&g, &m);
        assert_eq!(m.column_of(0), 1);
        assert_eq!(m.column_of(1), 0);
    }

    #[test]
    fn test_long_alternating_path() {
        // Greedy assignment matches row i to column i, leaving the last row
        // stuck on column 0; the fix shifts every row one column right.
        let g = graph([
            [1, 1, 0, 0, 0],
            [0, 1, 1, 0, 0],
            [0, 0, 1, 1, 0],
            [0, 0, 0, 1, 1],
            [1, 0, 0, 0, 0],
        ]);
        let m = perfect_matching(&g).unwrap();
        assert_valid(&g, &m);
        assert_eq!(m.into_columns(), vec![1, 2, 3, 4, 0]);
    }

    #[test]
    fn test_full_pattern_picks_lowest_columns() {
        let g = graph([[1; 4]; 4]);
        let m = perfect_matching(&g).unwrap();
        assert_eq!(m.into_columns(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_hall_violation_is_reported() {
        // Rows 0 and 1 both only reach column 0.
        let g = graph([[1, 0, 0], [1, 0, 0], [1, 1, 1]]);
        let err = perfect_matching(&g).unwrap_err();
        assert_eq!(err, MatchingFailure { row: 1 });
    }

    #[test]
    fn test_empty_row_fails_immediately() {
        let g = graph([[0, 0], [1, 1]]);
        assert_eq!(perfect_matching(&g).unwrap_err(), MatchingFailure { row: 0 });
    }

    #[test]
    fn test_empty_graph_has_empty_matching() {
        let g = SupportGraph::from_matrix(&SquareMatrix::zeros(0), 1e-7);
        assert!(perfect_matching(&g).unwrap().is_empty());
    }
}
