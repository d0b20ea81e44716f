//! Generator tracking: which filtration edges make up each surviving class.
//!
//! Alongside R = ∂V the tracker maintains the columns of V. Column i of V
//! starts as the unit chain {i} and receives `factor · V[j]` whenever R[i]
//! receives `factor · R[j]`, so its support is the set of original columns
//! whose combination produced R[i]. Over Z2 this is the symmetric difference
//! of index sets; over Zp coefficients are carried so cancellations are
//! exact rather than parity-based.
//!
//! Generators are always reported as filtration edge indices:
//!
//! - ∂₁ (columns are edges): the support of V[i], mapped through each
//!   column's edge
//! - ∂₂ (rows are edges): the rows of the reduced column R[i], which is the
//!   cycle the triangle kills

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::field::Field;
use crate::matrix::{add_scaled, BoundaryMatrix};

/// Companion chains of a reduction, one per column
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratorTracker {
    chains: Vec<BTreeMap<usize, u32>>,
}

impl GeneratorTracker {
    /// One unit chain per column
    pub fn seeded(columns: usize) -> Self {
        let mut tracker = Self::default();
        tracker.ensure_columns(columns);
        tracker
    }

    /// Append unit chains until there is one per column
    pub fn ensure_columns(&mut self, columns: usize) {
        for i in self.chains.len()..columns {
            self.chains.push(BTreeMap::from([(i, 1)]));
        }
    }

    pub fn len(&self) -> usize {
        self.chains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chains.is_empty()
    }

    /// V[target] ← V[target] + factor · V[source]
    pub(crate) fn record<F: Field>(&mut self, field: &F, target: usize, source: usize, factor: u32) {
        debug_assert!(source < target, "column {target} merged with later column {source}");
        let (earlier, rest) = self.chains.split_at_mut(target);
        add_scaled(field, &mut rest[0], &earlier[source], factor);
    }

    /// Coefficients of V[column]
    pub fn chain(&self, column: usize) -> Option<impl Iterator<Item = (usize, u32)> + '_> {
        self.chains
            .get(column)
            .map(|chain| chain.iter().map(|(&i, &c)| (i, c)))
    }

    /// Original columns contributing to `column`, increasing
    pub fn support(&self, column: usize) -> Vec<usize> {
        self.chains
            .get(column)
            .map(|chain| chain.keys().copied().collect())
            .unwrap_or_default()
    }

    /// Generators of the columns that survived reduction
    ///
    /// For ∂₁ these are the edges of each chain; for higher matrices the
    /// chain indexes triangles, so the reduced cycle is reported instead.
    pub fn into_list<F: Field>(self, matrix: &BoundaryMatrix<F>) -> GeneratorList {
        if matrix.dimension() > 0 {
            return GeneratorList::from_reduced(matrix);
        }

        let generators = self
            .chains
            .into_iter()
            .enumerate()
            .filter_map(|(index, chain)| {
                let column = matrix.column(index).filter(|c| !c.is_empty())?;
                let mut edges: Vec<usize> = chain
                    .into_keys()
                    .filter_map(|j| matrix.column(j).map(|c| c.edge()))
                    .collect();
                edges.sort_unstable();
                Some((index, Generator { edge: column.edge(), edges }))
            })
            .collect();
        GeneratorList { generators }
    }
}

/// Edges representing the class paired with one reduced column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Generator {
    /// Associated edge of the column (the edge that kills the class)
    pub edge: usize,
    /// Filtration edge indices, increasing
    pub edges: Vec<usize>,
}

/// Final generators, keyed by the column of the reduced matrix
///
/// Several ∂₂ columns can share a closing edge, so the column index is the
/// key; `for_edge` looks generators up by associated edge.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorList {
    generators: BTreeMap<usize, Generator>,
}

impl GeneratorList {
    /// Cycle representatives read off a reduced matrix whose rows are edges
    pub fn from_reduced<F: Field>(matrix: &BoundaryMatrix<F>) -> Self {
        let generators = matrix
            .columns()
            .iter()
            .enumerate()
            .filter(|(_, column)| !column.is_empty())
            .map(|(index, column)| {
                let generator = Generator {
                    edge: column.edge(),
                    edges: column.rows().collect(),
                };
                (index, generator)
            })
            .collect();
        Self { generators }
    }

    /// Edges of the generator paired with `column`
    pub fn get(&self, column: usize) -> Option<&[usize]> {
        self.generators.get(&column).map(|g| g.edges.as_slice())
    }

    /// Generators whose column is associated with `edge`
    pub fn for_edge(&self, edge: usize) -> impl Iterator<Item = &Generator> + '_ {
        self.generators.values().filter(move |g| g.edge == edge)
    }

    pub fn len(&self) -> usize {
        self.generators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.generators.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &Generator)> + '_ {
        self.generators.iter().map(|(&column, g)| (column, g))
    }
}
