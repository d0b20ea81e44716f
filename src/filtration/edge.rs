//! Filtration edges in increasing order of length.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::{PersistenceError, Result};

/// An edge [source, target] of the filtration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Smaller endpoint
    pub source: usize,
    /// Larger endpoint
    pub target: usize,
    /// Filtration value (distance between the endpoints)
    pub length: f64,
    /// Index in filtration order
    pub position: usize,
}

impl Edge {
    pub fn endpoints(&self) -> (usize, usize) {
        (self.source, self.target)
    }
}

/// Edges of a flag filtration, sorted by (length, source, target)
///
/// Deserialized filtrations are rebuilt through `from_edges` and must list
/// their edges in filtration order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawFiltration")]
pub struct Filtration {
    edges: Vec<Edge>,
    vertex_count: usize,
}

/// Serialized form of a `Filtration`, before validation
#[derive(Deserialize)]
struct RawFiltration {
    edges: Vec<Edge>,
    vertex_count: usize,
}

impl TryFrom<RawFiltration> for Filtration {
    type Error = PersistenceError;

    fn try_from(raw: RawFiltration) -> Result<Self> {
        let filtration = Self::from_edges(
            raw.vertex_count,
            raw.edges.iter().map(|e| (e.source, e.target, e.length)),
        )?;
        for (given, built) in raw.edges.iter().zip(filtration.edges()) {
            if given != built {
                return Err(PersistenceError::edge(
                    given.source,
                    given.target,
                    format!("listed at position {}, out of filtration order", given.position),
                ));
            }
        }
        Ok(filtration)
    }
}

impl Filtration {
    /// Build a filtration from unordered weighted edges
    ///
    /// Endpoints are normalized so that `source < target`; loops, repeated
    /// edges, endpoints outside `0..vertex_count` and negative or non-finite
    /// lengths are rejected.
    pub fn from_edges(
        vertex_count: usize,
        edges: impl IntoIterator<Item = (usize, usize, f64)>,
    ) -> Result<Self> {
        let mut seen = HashSet::new();
        let mut sorted = Vec::new();

        for (a, b, length) in edges {
            let (source, target) = if a < b { (a, b) } else { (b, a) };
            if source == target {
                return Err(PersistenceError::edge(a, b, "loops are not simplices"));
            }
            if target >= vertex_count {
                return Err(PersistenceError::edge(
                    a,
                    b,
                    format!("endpoint outside {vertex_count} vertices"),
                ));
            }
            if !length.is_finite() || length < 0.0 {
                return Err(PersistenceError::edge(a, b, format!("length {length}")));
            }
            if !seen.insert((source, target)) {
                return Err(PersistenceError::edge(a, b, "repeated edge"));
            }
            sorted.push(Edge {
                source,
                target,
                length,
                position: 0,
            });
        }

        sorted.sort_by(|x, y| {
            x.length
                .total_cmp(&y.length)
                .then(x.source.cmp(&y.source))
                .then(x.target.cmp(&y.target))
        });
        for (position, edge) in sorted.iter_mut().enumerate() {
            edge.position = position;
        }

        Ok(Self {
            edges: sorted,
            vertex_count,
        })
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn edge(&self, position: usize) -> Option<&Edge> {
        self.edges.get(position)
    }

    /// Number of edges
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Length of the last edge, if any
    pub fn max_length(&self) -> Option<f64> {
        self.edges.last().map(|e| e.length)
    }
}
