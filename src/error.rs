//! Error types for filtration construction and boundary-matrix reduction.
//!
//! Configuration errors are raised before any reduction starts. Structural
//! errors identify the offending column or edge; reduction itself has no
//! failure path once a matrix has been accepted.

use thiserror::Error;

/// Errors raised while configuring or building a persistence computation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PersistenceError {
    /// Coefficient modulus is neither 0 (Z2) nor a prime
    #[error("invalid coefficient modulus {modulus}: expected 0 for Z2 or a prime")]
    InvalidModulus { modulus: u32 },

    /// Requested homological dimension has no boundary matrix
    #[error("unsupported homological dimension {dimension}: at most {max} is computed")]
    UnsupportedDimension { dimension: usize, max: usize },

    /// A column references a row outside the matrix domain
    #[error("column {column} references row {row}, but the matrix has {rows} rows")]
    RowOutOfRange { column: usize, row: usize, rows: usize },

    /// Columns must be appended in filtration order
    #[error("column {column} is tagged with edge {edge}, which precedes edge {previous} of the previous column")]
    EdgeOutOfOrder { column: usize, edge: usize, previous: usize },

    /// Edge-boundary columns are tagged with their own filtration position
    #[error("column {column} of the edge boundary matrix is tagged with edge {edge}")]
    EdgeMismatch { column: usize, edge: usize },

    /// A column is tagged with an edge the filtration does not contain
    #[error("column {column} is tagged with edge {edge}, but the filtration has {edges} edges")]
    UnknownEdge { column: usize, edge: usize, edges: usize },

    /// Distance matrix is not square, not symmetric, or holds invalid values
    #[error("invalid distance matrix: {message}")]
    InvalidDistanceMatrix { message: String },

    /// A point coordinate is not finite
    #[error("point {point} has a non-finite coordinate")]
    InvalidPoint { point: usize },

    /// An explicit edge is a loop or has an invalid length
    #[error("edge ({source_vertex}, {target}) is invalid: {message}")]
    InvalidEdge {
        source_vertex: usize,
        target: usize,
        message: String,
    },
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, PersistenceError>;

impl PersistenceError {
    /// Create a distance-matrix error
    pub fn distance_matrix(message: impl Into<String>) -> Self {
        Self::InvalidDistanceMatrix {
            message: message.into(),
        }
    }

    /// Create an invalid-edge error
    pub fn edge(source_vertex: usize, target: usize, message: impl Into<String>) -> Self {
        Self::InvalidEdge {
            source_vertex,
            target,
            message: message.into(),
        }
    }

    /// Whether the error comes from configuration rather than input data
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::InvalidModulus { .. } | Self::UnsupportedDimension { .. }
        )
    }
}
