//! Filtration Module: Vietoris-Rips Edges and Boundary Matrices
//!
//! For a finite metric space (X, d) the Vietoris-Rips complex VR_ε(X)
//! contains a simplex [v₀, ..., vₖ] iff d(vᵢ, vⱼ) ≤ ε for all i, j. It is a
//! flag complex: every simplex enters the filtration together with its
//! longest edge. Ordering the edges by length is therefore enough to order
//! the whole filtration:
//!
//! - vertices enter at ε = 0
//! - an edge [u, v] enters at ε = d(u, v)
//! - a triangle enters with the edge that closes it (its longest edge)
//!
//! ## Boundary Matrices
//!
//! - **∂₁** (rows: vertices, columns: edges) yields H₀ intervals and marks
//!   the cycle-creating edges (columns that reduce to zero).
//! - **∂₂** (rows: edges, columns: triangles) yields H₁ intervals; its
//!   row list holds the cycle-creating edges.

mod complex;
mod edge;
mod vietoris_rips;

pub use complex::{edge_boundary_matrix, triangle_boundary_matrix, triangles, Triangle};
pub use edge::{Edge, Filtration};
pub use vietoris_rips::VietorisRips;
