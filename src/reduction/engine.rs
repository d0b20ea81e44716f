//! In-place boundary reduction, generic over the coefficient field.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, instrument, trace};

use super::GeneratorTracker;
use crate::field::Field;
use crate::matrix::{BoundaryMatrix, Column};

/// How the engine finds the earlier column that collides with column i
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReductionStrategy {
    /// Scan earlier columns left to right, restarting at 0 after each merge
    #[default]
    Scan,
    /// Look the colliding column up in a pivot → column index
    PivotLookup,
}

/// Counters collected during one `reduce` call
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReductionStats {
    /// Columns in the matrix
    pub columns: usize,
    /// Pivot comparisons (scan) or pivot lookups (index)
    pub comparisons: usize,
    /// Column merges performed
    pub merges: usize,
    /// Columns that are zero after reduction
    pub zero_columns: usize,
    /// Stored entries before reduction
    pub initial_entries: usize,
    /// Stored entries after reduction
    pub final_entries: usize,
    /// Largest stored-entry count seen at any point
    pub peak_entries: usize,
    /// Merges after which the total entry count was larger than before
    pub growing_merges: usize,
}

impl ReductionStats {
    fn start(columns: usize, entries: usize) -> Self {
        Self {
            columns,
            initial_entries: entries,
            final_entries: entries,
            peak_entries: entries,
            ..Self::default()
        }
    }

    fn record_merge(&mut self, before: usize, after: usize) {
        self.merges += 1;
        self.final_entries = self.final_entries + after - before;
        self.peak_entries = self.peak_entries.max(self.final_entries);
        if after > before {
            self.growing_merges += 1;
        }
    }
}

/// Reduce `matrix` with the restart scan and no generator tracking
pub fn reduce<F: Field>(matrix: &mut BoundaryMatrix<F>) -> ReductionStats {
    reduce_with(matrix, ReductionStrategy::Scan, None)
}

/// Reduce `matrix` in place
///
/// When a tracker is given, it is extended to one chain per column and its
/// chains follow every column operation, so the contributing original
/// columns can be read back afterwards.
#[instrument(
    level = "debug",
    skip_all,
    fields(
        dimension = matrix.dimension(),
        columns = matrix.len(),
        characteristic = matrix.field().characteristic(),
        strategy = ?strategy,
    )
)]
pub fn reduce_with<F: Field>(
    matrix: &mut BoundaryMatrix<F>,
    strategy: ReductionStrategy,
    mut generators: Option<&mut GeneratorTracker>,
) -> ReductionStats {
    let field = matrix.field().clone();
    if let Some(tracker) = generators.as_deref_mut() {
        tracker.ensure_columns(matrix.len());
    }
    let mut stats = ReductionStats::start(matrix.len(), matrix.entry_count());
    let columns = matrix.columns_mut();

    match strategy {
        ReductionStrategy::Scan => {
            reduce_by_scan(&field, columns, &mut stats, generators.as_deref_mut())
        }
        ReductionStrategy::PivotLookup => {
            reduce_by_lookup(&field, columns, &mut stats, generators.as_deref_mut())
        }
    }

    stats.zero_columns = columns.iter().filter(|c| c.is_empty()).count();
    debug!(
        merges = stats.merges,
        comparisons = stats.comparisons,
        zero_columns = stats.zero_columns,
        initial_entries = stats.initial_entries,
        final_entries = stats.final_entries,
        "boundary matrix reduced"
    );
    stats
}

/// Two-level loop: outer over columns, inner over earlier candidates
///
/// The inner scan restarts from j = 0 after every merge, because the new
/// pivot may collide with a column that was already passed.
fn reduce_by_scan<F: Field>(
    field: &F,
    columns: &mut [Column],
    stats: &mut ReductionStats,
    mut generators: Option<&mut GeneratorTracker>,
) {
    for i in 1..columns.len() {
        let (earlier, rest) = columns.split_at_mut(i);
        let target = &mut rest[0];

        let mut j = 0;
        while j < i && !target.is_empty() {
            let source = &earlier[j];
            if source.is_empty() {
                j += 1;
                continue;
            }

            stats.comparisons += 1;
            if source.pivot() == target.pivot() {
                merge(field, target, i, source, j, stats, generators.as_deref_mut());
                j = 0;
            } else {
                j += 1;
            }
        }
    }
}

/// Pivot-indexed variant: earlier columns have distinct pivots, so at most
/// one of them can collide with the current pivot.
fn reduce_by_lookup<F: Field>(
    field: &F,
    columns: &mut [Column],
    stats: &mut ReductionStats,
    mut generators: Option<&mut GeneratorTracker>,
) {
    let mut pivot_to_column: HashMap<usize, usize> = HashMap::new();

    for i in 0..columns.len() {
        let (earlier, rest) = columns.split_at_mut(i);
        let target = &mut rest[0];

        while let Some(pivot) = target.pivot() {
            stats.comparisons += 1;
            match pivot_to_column.get(&pivot) {
                Some(&j) => {
                    merge(field, target, i, &earlier[j], j, stats, generators.as_deref_mut());
                }
                None => {
                    pivot_to_column.insert(pivot, i);
                    break;
                }
            }
        }
    }
}

fn merge<F: Field>(
    field: &F,
    target: &mut Column,
    target_index: usize,
    source: &Column,
    source_index: usize,
    stats: &mut ReductionStats,
    generators: Option<&mut GeneratorTracker>,
) {
    let before = target.len();
    let pivot = target.pivot();
    let Some(factor) = target.cancel_pivot(field, source) else {
        return;
    };
    stats.record_merge(before, target.len());

    if let Some(tracker) = generators {
        tracker.record(field, target_index, source_index, factor);
    }
    trace!(
        target_column = target_index,
        source_column = source_index,
        ?pivot,
        factor,
        "merged columns"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{Zp, Z2};

    fn chain_matrix() -> BoundaryMatrix<Z2> {
        // Column 3 collides with 2, then 1, then 0: each merge exposes a
        // pivot owned by a column the scan has already passed.
        let mut m = BoundaryMatrix::new(Z2, 1, 5);
        m.add_column(0, [(0, 1), (1, 1)]).unwrap();
        m.add_column(1, [(1, 1), (3, 1)]).unwrap();
        m.add_column(2, [(3, 1), (4, 1)]).unwrap();
        m.add_column(3, [(4, 1)]).unwrap();
        m
    }

    #[test]
    fn test_restart_after_merge() {
        let mut m = chain_matrix();
        let stats = reduce(&mut m);

        assert_eq!(stats.merges, 3);
        assert_eq!(m.column(3).unwrap().rows().collect::<Vec<_>>(), vec![0]);
        assert!(m.is_reduced());
    }

    #[test]
    fn test_strategies_agree() {
        let mut scanned = chain_matrix();
        let mut indexed = chain_matrix();
        let a = reduce_with(&mut scanned, ReductionStrategy::Scan, None);
        let b = reduce_with(&mut indexed, ReductionStrategy::PivotLookup, None);

        assert_eq!(scanned.columns(), indexed.columns());
        assert_eq!(a.merges, b.merges);
    }

    #[test]
    fn test_already_zero_column() {
        let mut m = BoundaryMatrix::new(Z2, 0, 3);
        m.add_column(0, [(0, 1), (1, 1)]).unwrap();
        m.add_column(1, []).unwrap();
        m.add_column(2, [(0, 1), (1, 1)]).unwrap();

        let stats = reduce(&mut m);
        assert_eq!(stats.merges, 1);
        assert_eq!(stats.zero_columns, 2);
        // The zero column is never compared
        assert_eq!(stats.comparisons, 1);
    }

    #[test]
    fn test_idempotent() {
        let mut m = chain_matrix();
        reduce(&mut m);
        let reduced = m.clone();

        let again = reduce(&mut m);
        assert_eq!(again.merges, 0);
        assert_eq!(m.columns(), reduced.columns());
    }

    #[test]
    fn test_mod_three_pivot_cancellation() {
        let f = Zp::new(3).unwrap();
        let mut m = BoundaryMatrix::new(f, 1, 6);
        m.add_column(0, [(2, 1), (5, 1)]).unwrap();
        m.add_column(1, [(3, 1), (5, 2)]).unwrap();

        let stats = reduce(&mut m);
        assert_eq!(stats.merges, 1);
        // factor = -1⁻¹ · 2 = 1: row 5 cancels, row 2 picks up 1 · 1
        let merged: Vec<_> = m.column(1).unwrap().entries().collect();
        assert_eq!(merged, vec![(2, 1), (3, 1)]);
    }

    #[test]
    fn test_entry_accounting() {
        let mut m = chain_matrix();
        let stats = reduce(&mut m);
        assert_eq!(stats.initial_entries, 7);
        assert_eq!(stats.final_entries, m.entry_count());
        assert_eq!(stats.growing_merges, 0);
        assert!(stats.peak_entries >= stats.final_entries);
    }
}
