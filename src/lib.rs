//! # birkhoff-core
//!
//! Birkhoff–von Neumann decomposition of doubly stochastic matrices.
//!
//! Every doubly stochastic matrix (non-negative, all row and column sums 1)
//! is a convex combination of permutation matrices: the permutation matrices
//! are exactly the extreme points of the Birkhoff polytope. This crate finds
//! such a combination with at most n² terms. Positive multiples c·D are
//! accepted too; the coefficients then sum to c.
//!
//! ## The pipeline
//!
//! ```text
//! residual ─→ SupportGraph ─→ perfect_matching ─→ Permutation ─→ Term
//!    ↑                                                             │
//!    └──────────── subtract coefficient at matched positions ──────┘
//! ```
//!
//! ## Module overview
//!
//! | Module | Key types | What it does |
//! |--------|-----------|--------------|
//! | [`tolerance`] | [`is_zero`], [`DEFAULT_TOLERANCE`] | Single zero test used everywhere |
//! | [`matrix`] | [`SquareMatrix`] | Dense n×n storage; rejects non-square input |
//! | [`support`] | [`SupportGraph`] | Bipartite row/column graph of non-zero entries |
//! | [`matching`] | [`Matching`], [`perfect_matching`] | Augmenting-path perfect matching, O(n·E) |
//! | [`permutation`] | [`Permutation`] | Permutation matrix extracted from a matching |
//! | [`decomposition`] | [`BirkhoffDecomposer`], [`Decomposition`] | The reduction loop |
//! | [`error`] | [`BirkhoffError`] | Shape, feasibility and iteration-bound failures |
//! | `snapshot` | `DecompositionSnapshot` | Serialisable record (requires `serde` feature) |
//!
//! ## Example
//!
//! ```rust
//! use birkhoff_core::birkhoff_decomposition;
//!
//! let d = birkhoff_decomposition(&[[0.5, 0.5], [0.5, 0.5]]).unwrap();
//! assert_eq!(d.len(), 2);
//! assert!((d.coefficient_sum() - 1.0).abs() < 1e-12);
//! ```
//!
//! ## Logging
//!
//! The reduction loop emits [`tracing`] events: one `trace` per extracted
//! permutation, a `debug` on completion and a `warn` before any fatal error.
//! No subscriber is installed by this crate.
//!
//! ## `no_std`
//!
//! This crate is `#![no_std]` by default and needs only `alloc`. Enable the
//! `std` feature to route `thiserror` and `tracing` through `std`. Enable the
//! `serde` feature for the `snapshot` module, and `python-ffi` for the
//! PyO3 bindings.

#![cfg_attr(not(any(feature = "std", feature = "python-ffi")), no_std)]
#![deny(unsafe_code)]
#![deny(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

pub mod tolerance;
pub mod matrix;
pub mod support;
pub mod matching;
pub mod permutation;
pub mod decomposition;
pub mod error;
#[cfg(feature = "serde")]
pub mod snapshot;

#[cfg(feature = "python-ffi")]
pub mod ffi;

pub use decomposition::{birkhoff_decomposition, BirkhoffDecomposer, Decomposition, Term};
pub use error::BirkhoffError;
pub use matching::{perfect_matching, Matching, MatchingFailure};
pub use matrix::SquareMatrix;
pub use permutation::Permutation;
pub use support::SupportGraph;
pub use tolerance::{is_zero, DEFAULT_TOLERANCE};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
