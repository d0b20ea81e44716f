//! Vietoris-Rips Filtration Construction
//!
//! Builds the edge filtration of VR(X) from a point cloud or a precomputed
//! distance matrix. Only edges with d(u, v) ≤ max_distance are kept; pass
//! `f64::INFINITY` for the unrestricted filtration.

use ndarray::Array2;
use std::collections::HashSet;

use super::Filtration;
use crate::error::{PersistenceError, Result};

/// Vietoris-Rips filtration builder
#[derive(Debug, Clone)]
pub struct VietorisRips {
    /// Distance matrix (precomputed)
    distances: Array2<f64>,
    /// Maximum filtration value
    max_distance: f64,
}

impl VietorisRips {
    /// Create a new VR filtration from a distance matrix
    ///
    /// The matrix must be square, symmetric, with a zero diagonal and
    /// finite non-negative entries.
    pub fn new(distances: Array2<f64>, max_distance: f64) -> Result<Self> {
        Self::validate(&distances)?;
        if max_distance.is_nan() || max_distance < 0.0 {
            return Err(PersistenceError::distance_matrix(format!(
                "maximum distance {max_distance} is not a valid bound"
            )));
        }
        Ok(Self {
            distances,
            max_distance,
        })
    }

    /// Create from a borrowed distance matrix
    pub fn from_distance_matrix(distances: &Array2<f64>, max_distance: f64) -> Result<Self> {
        Self::new(distances.clone(), max_distance)
    }

    /// Create from point cloud (rows are points, Euclidean metric)
    pub fn from_points(points: &Array2<f64>, max_distance: f64) -> Result<Self> {
        if let Some(point) = points
            .rows()
            .into_iter()
            .position(|row| row.iter().any(|x| !x.is_finite()))
        {
            return Err(PersistenceError::InvalidPoint { point });
        }
        Self::new(Self::compute_distance_matrix(points), max_distance)
    }

    /// Compute Euclidean distance matrix
    fn compute_distance_matrix(points: &Array2<f64>) -> Array2<f64> {
        let n = points.nrows();
        let dim = points.ncols();

        let mut dm = Array2::<f64>::zeros((n, n));

        for i in 0..n {
            for j in i + 1..n {
                let mut dist_sq = 0.0;
                for d in 0..dim {
                    let diff = points[[i, d]] - points[[j, d]];
                    dist_sq += diff * diff;
                }
                let dist = dist_sq.sqrt();
                dm[[i, j]] = dist;
                dm[[j, i]] = dist;
            }
        }

        dm
    }

    fn validate(distances: &Array2<f64>) -> Result<()> {
        let (rows, cols) = distances.dim();
        if rows != cols {
            return Err(PersistenceError::distance_matrix(format!(
                "{rows}x{cols} is not square"
            )));
        }
        for i in 0..rows {
            if distances[[i, i]] != 0.0 {
                return Err(PersistenceError::distance_matrix(format!(
                    "diagonal entry {i} is {}",
                    distances[[i, i]]
                )));
            }
            for j in i + 1..rows {
                let d = distances[[i, j]];
                if !d.is_finite() || d < 0.0 {
                    return Err(PersistenceError::distance_matrix(format!(
                        "entry ({i}, {j}) is {d}"
                    )));
                }
                if d != distances[[j, i]] {
                    return Err(PersistenceError::distance_matrix(format!(
                        "entries ({i}, {j}) and ({j}, {i}) differ"
                    )));
                }
            }
        }
        Ok(())
    }

    /// All edges within the distance bound, in filtration order
    pub fn filtration(&self) -> Result<Filtration> {
        let n = self.n_points();
        let mut edges = Vec::new();

        for i in 0..n {
            for j in i + 1..n {
                let d = self.distances[[i, j]];
                if d <= self.max_distance {
                    edges.push((i, j, d));
                }
            }
        }

        Filtration::from_edges(n, edges)
    }

    /// Count connected components of VR_ε using Union-Find
    pub fn count_components_at(&self, epsilon: f64) -> usize {
        let n = self.n_points();
        let mut parent: Vec<usize> = (0..n).collect();
        let mut rank = vec![0usize; n];

        fn find(parent: &mut [usize], i: usize) -> usize {
            if parent[i] != i {
                parent[i] = find(parent, parent[i]);
            }
            parent[i]
        }

        fn union(parent: &mut [usize], rank: &mut [usize], x: usize, y: usize) {
            let rx = find(parent, x);
            let ry = find(parent, y);
            if rx != ry {
                if rank[rx] < rank[ry] {
                    parent[rx] = ry;
                } else if rank[rx] > rank[ry] {
                    parent[ry] = rx;
                } else {
                    parent[ry] = rx;
                    rank[rx] += 1;
                }
            }
        }

        let bound = epsilon.min(self.max_distance);
        for i in 0..n {
            for j in i + 1..n {
                if self.distances[[i, j]] <= bound {
                    union(&mut parent, &mut rank, i, j);
                }
            }
        }

        let mut roots = HashSet::new();
        for i in 0..n {
            roots.insert(find(&mut parent, i));
        }
        roots.len()
    }

    /// Distance between points i and j
    pub fn distance(&self, i: usize, j: usize) -> f64 {
        self.distances[[i, j]]
    }

    /// Number of points
    pub fn n_points(&self) -> usize {
        self.distances.nrows()
    }

    /// Maximum filtration value
    pub fn max_distance(&self) -> f64 {
        self.max_distance
    }
}
