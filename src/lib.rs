//! # rips-persistence
//!
//! Persistent Homology of Vietoris-Rips Filtrations via Sparse
//! Boundary-Matrix Reduction over Z2 or Zp
//!
//! ## Pipeline
//!
//! 1. **Filtration**: a point cloud (or distance matrix) becomes an ordered
//!    list of edges; the flag complex adds a triangle with its longest edge.
//!
//! 2. **Boundary matrices**: ∂₁ (edges → vertices) and ∂₂ (triangles →
//!    edges), stored as sparse columns of field coefficients.
//!
//! 3. **Reduction**: the standard algorithm adds earlier columns into later
//!    ones until all pivots are distinct. One engine serves every field
//!    through the `Field` trait; Z2 is its trivial instance.
//!
//! 4. **Extraction**: each surviving pivot pairs a birth with a death;
//!    unpaired birth rows become essential intervals.
//!
//! ## Example
//!
//! ```
//! use ndarray::array;
//! use rips_persistence::{compute_persistence_from_points, PersistenceConfig};
//!
//! let square = array![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];
//! let config = PersistenceConfig::default().with_modulus(3);
//! let diagram = compute_persistence_from_points(&square, f64::INFINITY, &config).unwrap();
//!
//! let loops = diagram.finite_intervals(1);
//! assert_eq!(loops.len(), 1);
//! assert_eq!(loops[0].birth, 1.0);
//! assert!((loops[0].death - 2.0_f64.sqrt()).abs() < 1e-12);
//! ```
//!
//! ## References
//!
//! - Edelsbrunner & Harer, "Computational Topology" (2010)
//! - Zomorodian & Carlsson, "Computing Persistent Homology" (2005)

pub mod config;
pub mod error;
pub mod field;
pub mod filtration;
pub mod matrix;
pub mod persistence;
pub mod reduction;

pub use config::{PersistenceConfig, MAX_DIMENSION};
pub use error::{PersistenceError, Result};

// Re-exports from field
pub use field::{Field, FieldSelector, Zp, Z2};

// Re-exports from filtration
pub use filtration::{
    edge_boundary_matrix,
    triangle_boundary_matrix,
    Edge,
    Filtration,
    VietorisRips,
};

// Re-exports from matrix
pub use matrix::{BoundaryMatrix, Column};

// Re-exports from reduction
pub use reduction::{
    reduce,
    reduce_with,
    Generator,
    GeneratorList,
    GeneratorTracker,
    ReductionStats,
    ReductionStrategy,
};

// Re-exports from persistence
pub use persistence::{
    compute_persistence,
    compute_persistence_from_points,
    extract_intervals,
    Interval,
    PersistenceDiagram,
    NO_DEATH,
};
