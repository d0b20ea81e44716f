//! Persistence intervals and the diagram collecting them.

use serde::{Deserialize, Serialize};

use crate::field::FieldSelector;
use crate::reduction::ReductionStats;

/// A persistence interval [birth, death)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    /// Homological dimension of the class
    pub dimension: usize,
    pub birth: f64,
    /// `f64::INFINITY` for essential classes
    pub death: f64,
    /// Filtration edge the interval is attached to: the killing edge of a
    /// finite interval, the creating edge of an essential 1-cycle
    pub edge: Option<usize>,
    /// Endpoints of the edge that created the class (none for vertices)
    pub birth_edge: Option<(usize, usize)>,
    /// Endpoints of the edge whose entry killed the class
    pub death_edge: Option<(usize, usize)>,
    /// Filtration edges representing the class, when tracked: the edges
    /// combined into the killing column for H₀, the killed cycle for H₁
    pub generator: Option<Vec<usize>>,
}

impl Interval {
    /// Lifetime of the feature
    pub fn persistence(&self) -> f64 {
        if self.death.is_infinite() {
            f64::INFINITY
        } else {
            self.death - self.birth
        }
    }

    /// Is this an essential feature (infinite persistence)?
    pub fn is_essential(&self) -> bool {
        self.death.is_infinite()
    }

    /// Is the class alive at filtration value `scale`?
    pub fn contains(&self, scale: f64) -> bool {
        self.birth <= scale && scale < self.death
    }
}

/// Result of a persistence computation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistenceDiagram {
    /// Coefficient field the intervals were computed over
    pub field: FieldSelector,
    pub intervals: Vec<Interval>,
    /// One entry per reduced boundary matrix, lowest dimension first
    pub stats: Vec<ReductionStats>,
}

impl PersistenceDiagram {
    pub fn new(field: FieldSelector) -> Self {
        Self {
            field,
            intervals: Vec::new(),
            stats: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Get intervals for dimension d
    pub fn dim(&self, d: usize) -> Vec<&Interval> {
        self.intervals.iter().filter(|i| i.dimension == d).collect()
    }

    /// Get finite intervals for dimension d
    pub fn finite_intervals(&self, d: usize) -> Vec<&Interval> {
        self.intervals
            .iter()
            .filter(|i| i.dimension == d && !i.is_essential())
            .collect()
    }

    /// Get essential intervals for dimension d
    pub fn essential_intervals(&self, d: usize) -> Vec<&Interval> {
        self.intervals
            .iter()
            .filter(|i| i.dimension == d && i.is_essential())
            .collect()
    }

    /// Number of finite intervals in dimension d
    pub fn count(&self, d: usize) -> usize {
        self.finite_intervals(d).len()
    }

    /// Betti number β_d of the complex at filtration value `scale`
    pub fn betti_at(&self, d: usize, scale: f64) -> usize {
        self.intervals
            .iter()
            .filter(|i| i.dimension == d && i.contains(scale))
            .count()
    }

    /// Total persistence for dimension d
    pub fn total_persistence(&self, d: usize) -> f64 {
        self.intervals
            .iter()
            .filter(|i| i.dimension == d && !i.is_essential())
            .map(Interval::persistence)
            .sum()
    }

    /// Persistence entropy of the finite intervals in dimension d
    ///
    /// H = -Σᵢ pᵢ ln pᵢ with pᵢ = lᵢ / Σⱼ lⱼ
    pub fn persistence_entropy(&self, d: usize) -> f64 {
        let lifetimes: Vec<f64> = self
            .finite_intervals(d)
            .into_iter()
            .map(Interval::persistence)
            .filter(|&p| p > 0.0)
            .collect();

        let total: f64 = lifetimes.iter().sum();
        if total <= 0.0 {
            return 0.0;
        }

        let mut entropy = 0.0;
        for p in lifetimes {
            let prob = p / total;
            entropy -= prob * prob.ln();
        }
        entropy
    }
}
