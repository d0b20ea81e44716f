//! Boundary matrix: ordered columns plus the row list.

use std::collections::BTreeSet;

use super::Column;
use crate::error::{PersistenceError, Result};
use crate::field::Field;

/// Sparse boundary matrix over the field `F`
///
/// Columns are appended in filtration order and never removed. The matrix
/// is built once, reduced once in place, then read by the interval
/// extractor.
#[derive(Debug, Clone)]
pub struct BoundaryMatrix<F: Field> {
    field: F,
    /// Homological dimension of the rows (0: vertices, 1: edges)
    dimension: usize,
    /// Size of the row domain; every row index is below it
    rows: usize,
    columns: Vec<Column>,
    row_list: BTreeSet<usize>,
}

impl<F: Field> BoundaryMatrix<F> {
    /// Empty matrix whose rows are `dimension`-simplices indexed `0..rows`
    pub fn new(field: F, dimension: usize, rows: usize) -> Self {
        Self {
            field,
            dimension,
            rows,
            columns: Vec::new(),
            row_list: BTreeSet::new(),
        }
    }

    pub fn field(&self) -> &F {
        &self.field
    }

    /// Homological dimension of the row simplices
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Size of the row domain
    pub fn row_count(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, index: usize) -> Option<&Column> {
        self.columns.get(index)
    }

    pub(crate) fn columns_mut(&mut self) -> &mut [Column] {
        &mut self.columns
    }

    /// Append the column created by `edge`
    ///
    /// Coefficients are signed integers mapped into the field; entries that
    /// vanish are not stored. Fails fast if a row lies outside the domain,
    /// or if `edge` breaks filtration order (in the vertex-row matrix column
    /// i must be tagged with edge i). Returns the new column's index.
    pub fn add_column(
        &mut self,
        edge: usize,
        entries: impl IntoIterator<Item = (usize, i64)>,
    ) -> Result<usize> {
        let index = self.columns.len();

        if self.dimension == 0 && edge != index {
            return Err(PersistenceError::EdgeMismatch { column: index, edge });
        }
        if let Some(previous) = self.columns.last().map(Column::edge) {
            if edge < previous {
                return Err(PersistenceError::EdgeOutOfOrder {
                    column: index,
                    edge,
                    previous,
                });
            }
        }

        let entries: Vec<(usize, i64)> = entries.into_iter().collect();
        if let Some(&(row, _)) = entries.iter().find(|(row, _)| *row >= self.rows) {
            return Err(PersistenceError::RowOutOfRange {
                column: index,
                row,
                rows: self.rows,
            });
        }

        self.columns
            .push(Column::from_entries(&self.field, edge, entries));
        Ok(index)
    }

    /// Record that `row` creates a class that may never die
    pub fn add_row_entry(&mut self, row: usize) -> Result<()> {
        if row >= self.rows {
            return Err(PersistenceError::RowOutOfRange {
                column: self.columns.len(),
                row,
                rows: self.rows,
            });
        }
        self.row_list.insert(row);
        Ok(())
    }

    /// Row-list entries in increasing order
    pub fn row_list(&self) -> impl Iterator<Item = usize> + '_ {
        self.row_list.iter().copied()
    }

    /// Total number of stored entries
    pub fn entry_count(&self) -> usize {
        self.columns.iter().map(Column::len).sum()
    }

    /// Pivot of every column, in column order
    pub fn pivots(&self) -> Vec<Option<usize>> {
        self.columns.iter().map(Column::pivot).collect()
    }

    /// Whether all non-empty columns have pairwise distinct pivots
    pub fn is_reduced(&self) -> bool {
        let mut seen = BTreeSet::new();
        self.columns
            .iter()
            .filter_map(Column::pivot)
            .all(|pivot| seen.insert(pivot))
    }

    /// Indices of columns that are (or were reduced to) zero
    pub fn zero_columns(&self) -> impl Iterator<Item = usize> + '_ {
        self.columns
            .iter()
            .enumerate()
            .filter(|(_, column)| column.is_empty())
            .map(|(index, _)| index)
    }
}
