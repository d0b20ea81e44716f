//! Matrix Module: Sparse Boundary Matrices
//!
//! A boundary matrix ∂ stores, for every simplex of the filtration, the
//! signed sum of its codimension-one faces:
//!
//!   ∂[v₀, v₁] = v₁ - v₀
//!   ∂[v₀, v₁, v₂] = [v₁, v₂] - [v₀, v₂] + [v₀, v₁]
//!
//! Columns are sparse ordered maps row → coefficient, so the only queries
//! the reduction needs (insert, remove, largest key) are O(log n).
//!
//! ## Row List
//!
//! Besides its columns each matrix keeps a row list: the rows that create a
//! homology class and may never be killed. A row-list entry that is not the
//! pivot of any reduced column yields an essential (infinite) interval.

mod boundary;
mod column;

pub use boundary::BoundaryMatrix;
pub use column::Column;
pub(crate) use column::add_scaled;
