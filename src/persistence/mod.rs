//! Persistence Module: Intervals from Reduced Boundary Matrices
//!
//! After reduction every non-empty column of R pairs two simplices:
//!
//! - the row simplex at its pivot, which created a class (birth)
//! - the column simplex itself, which kills that class (death)
//!
//! Row-list entries that are never a pivot create essential classes,
//! reported with death = ∞.
//!
//! ## Output
//!
//! A `PersistenceDiagram` holds intervals of every computed dimension and
//! renders them as text (`birth\tdeath`, with `-1` for ∞) or as a numeric
//! table for array-oriented callers.

mod extract;
mod interval;
mod pipeline;
mod report;

pub use extract::extract_intervals;
pub use interval::{Interval, PersistenceDiagram};
pub use pipeline::{compute_persistence, compute_persistence_from_points};
pub use report::NO_DEATH;
