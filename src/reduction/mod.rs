//! Reduction Module: The Standard Persistence Algorithm
//!
//! Column operations bring a boundary matrix ∂ into reduced form R = ∂V,
//! where no two non-empty columns of R share a pivot (lowest nonzero row).
//!
//! ## Algorithm
//!
//! For each column i in filtration order:
//!
//!   while some earlier non-empty column j has pivot(j) = pivot(i):
//!       R[i] ← R[i] - (R[i][pivot] / R[j][pivot]) · R[j]
//!
//! Every merge removes the current pivot and only touches rows below it, so
//! pivot(i) strictly decreases and the loop terminates. The worst case is
//! cubic in the number of columns.
//!
//! ## Pairing
//!
//! - pivot(i) = r  ⇒ the class created by row r dies at column i
//! - R[i] = 0      ⇒ column i creates a class in the next dimension
//!
//! ## Reference
//!
//! Edelsbrunner, Letscher, Zomorodian (2002). "Topological Persistence
//! and Simplification". Discrete & Computational Geometry.

mod engine;
mod generators;

pub use engine::{reduce, reduce_with, ReductionStats, ReductionStrategy};
pub use generators::{Generator, GeneratorList, GeneratorTracker};
