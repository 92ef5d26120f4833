//! Python FFI bindings via PyO3.
//!
//! Exposes the decomposition as a single function operating on nested lists,
//! so it drops in wherever a list of `(coefficient, permutation_matrix)` pairs
//! is expected.
//!
//! # Building the Python extension
//!
//! ```bash
//! pip install maturin
//! maturin develop --features python-ffi
//! ```
//!
//! # Usage
//!
//! ```python
//! from birkhoff_core import birkhoff_decomposition
//!
//! D = [[0.5, 0.5], [0.5, 0.5]]
//! for coefficient, permutation in birkhoff_decomposition(D):
//!     print(coefficient, permutation)   # 0.5 [[0.0, 1.0], [1.0, 0.0]] ...
//! ```

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::decomposition::BirkhoffDecomposer;
use crate::error::BirkhoffError;
use crate::tolerance::DEFAULT_TOLERANCE;

fn to_py_err(e: BirkhoffError) -> PyErr {
    PyValueError::new_err(e.to_string())
}

/// Compute the Birkhoff decomposition of a doubly stochastic matrix.
///
/// Args:
///     matrix:    square list of lists of non-negative floats
///     tolerance: entries with absolute value at most this are treated as zero
///
/// Returns:
///     list of (coefficient, permutation_matrix) pairs
///
/// Raises:
///     ValueError: if the matrix is not square or cannot be decomposed
#[pyfunction]
#[pyo3(signature = (matrix, tolerance=DEFAULT_TOLERANCE))]
pub fn birkhoff_decomposition(
    matrix: Vec<Vec<f64>>,
    tolerance: f64,
) -> PyResult<Vec<(f64, Vec<Vec<f64>>)>> {
    let d = BirkhoffDecomposer::new(tolerance)
        .decompose_rows(&matrix)
        .map_err(to_py_err)?;
    Ok(d
        .iter()
        .map(|t| (t.coefficient, t.permutation.to_rows()))
        .collect())
}

// ── Module entry point ────────────────────────────────────────────────────────

/// Birkhoff–von Neumann decomposition Python bindings.
#[pymodule]
pub fn birkhoff_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(birkhoff_decomposition, m)?)?;
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    m.add("DEFAULT_TOLERANCE", DEFAULT_TOLERANCE)?;
    Ok(())
}
