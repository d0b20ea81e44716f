//! Sparse column with canonical field coefficients.

use std::collections::BTreeMap;

use crate::field::Field;

/// One column of a boundary matrix
///
/// Maps row index → nonzero coefficient. Zeroed entries are removed, never
/// stored, so an empty map is exactly the zero column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Filtration edge that created this column
    edge: usize,
    entries: BTreeMap<usize, u32>,
}

impl Column {
    /// Zero column tagged with `edge`
    pub fn new(edge: usize) -> Self {
        Self {
            edge,
            entries: BTreeMap::new(),
        }
    }

    /// Build a column from signed coefficients, summing repeated rows
    pub fn from_entries<F: Field>(
        field: &F,
        edge: usize,
        entries: impl IntoIterator<Item = (usize, i64)>,
    ) -> Self {
        let mut column = Self::new(edge);
        for (row, value) in entries {
            column.add_to(field, row, field.reduce(value));
        }
        column
    }

    /// Filtration edge that created this column
    pub fn edge(&self) -> usize {
        self.edge
    }

    /// Largest row with a nonzero entry
    pub fn pivot(&self) -> Option<usize> {
        self.entries.keys().next_back().copied()
    }

    /// Pivot row together with its coefficient
    pub fn pivot_entry(&self) -> Option<(usize, u32)> {
        self.entries.iter().next_back().map(|(&row, &value)| (row, value))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of stored (nonzero) entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Coefficient at `row`, if nonzero
    pub fn get(&self, row: usize) -> Option<u32> {
        self.entries.get(&row).copied()
    }

    /// Entries in increasing row order
    pub fn entries(&self) -> impl Iterator<Item = (usize, u32)> + '_ {
        self.entries.iter().map(|(&row, &value)| (row, value))
    }

    /// Rows with nonzero entries, increasing
    pub fn rows(&self) -> impl Iterator<Item = usize> + '_ {
        self.entries.keys().copied()
    }

    /// Add `value` to the coefficient at `row`
    fn add_to<F: Field>(&mut self, field: &F, row: usize, value: u32) {
        add_entry(field, &mut self.entries, row, value);
    }

    /// Cancel this column's pivot against `source`, which must share it
    ///
    /// Computes `self ← self + factor · source` with
    /// `factor = -source[pivot]⁻¹ · self[pivot]` and returns the factor. The
    /// shared pivot is dropped up front instead of being summed to zero.
    /// Returns `None` without touching `self` if the pivots differ.
    pub fn cancel_pivot<F: Field>(&mut self, field: &F, source: &Column) -> Option<u32> {
        let (pivot, target_value) = self.pivot_entry()?;
        let (source_pivot, source_value) = source.pivot_entry()?;
        if pivot != source_pivot {
            return None;
        }

        let factor = field.cancellation_factor(target_value, source_value);
        self.entries.remove(&pivot);
        for (&row, &value) in source.entries.range(..pivot) {
            self.add_to(field, row, field.multiply(value, factor));
        }
        Some(factor)
    }
}

/// `target[row] += value`, dropping the entry when it becomes zero
fn add_entry<F: Field>(field: &F, target: &mut BTreeMap<usize, u32>, row: usize, value: u32) {
    if value == 0 {
        return;
    }
    let sum = match target.get(&row) {
        Some(&current) => field.add(current, value),
        None => value,
    };
    if sum == 0 {
        target.remove(&row);
    } else {
        target.insert(row, sum);
    }
}

/// `target ← target + factor · source` on raw sparse maps
pub(crate) fn add_scaled<F: Field>(
    field: &F,
    target: &mut BTreeMap<usize, u32>,
    source: &BTreeMap<usize, u32>,
    factor: u32,
) {
    for (&row, &value) in source {
        add_entry(field, target, row, field.multiply(value, factor));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{Zp, Z2};

    #[test]
    fn test_pivot_is_largest_row() {
        let c = Column::from_entries(&Z2, 0, [(3, 1), (7, 1), (1, 1)]);
        assert_eq!(c.pivot(), Some(7));
        assert_eq!(c.len(), 3);
        assert_eq!(c.rows().collect::<Vec<_>>(), vec![1, 3, 7]);
        assert_eq!(Column::new(4).pivot(), None);
    }

    #[test]
    fn test_zero_coefficients_are_dropped() {
        let f = Zp::new(3).unwrap();
        let c = Column::from_entries(&f, 2, [(0, 3), (1, -1), (2, 1), (2, 2)]);
        // 3 ≡ 0 and 1 + 2 ≡ 0 mod 3
        assert_eq!(c.entries().collect::<Vec<_>>(), vec![(1, 2)]);
        assert!(Column::from_entries(&Z2, 0, [(5, 2)]).is_empty());
    }

    #[test]
    fn test_binary_merge_is_symmetric_difference() {
        let mut target = Column::from_entries(&Z2, 3, [(1, 1), (2, 1), (5, 1)]);
        let source = Column::from_entries(&Z2, 1, [(0, 1), (2, 1), (5, 1)]);

        assert_eq!(target.cancel_pivot(&Z2, &source), Some(1));
        assert_eq!(target.rows().collect::<Vec<_>>(), vec![0, 1]);
        assert_eq!(target.edge(), 3);
    }

    #[test]
    fn test_mod_three_merge() {
        // Pivot row 5: source coefficient 1, target coefficient 2
        let f = Zp::new(3).unwrap();
        let source = Column::from_entries(&f, 0, [(1, 1), (5, 1)]);
        let mut target = Column::from_entries(&f, 1, [(1, 1), (2, 1), (5, 2)]);

        let factor = target.cancel_pivot(&f, &source);
        assert_eq!(factor, Some(1));
        assert_eq!(target.get(5), None);
        // row 1: 1 + 1·1 = 2, row 2 untouched
        assert_eq!(target.entries().collect::<Vec<_>>(), vec![(1, 2), (2, 1)]);
    }

    #[test]
    fn test_mismatched_pivots_untouched() {
        let mut target = Column::from_entries(&Z2, 1, [(1, 1), (4, 1)]);
        let before = target.clone();
        let source = Column::from_entries(&Z2, 0, [(1, 1), (3, 1)]);

        assert_eq!(target.cancel_pivot(&Z2, &source), None);
        assert_eq!(target, before);
        assert_eq!(Column::new(2).cancel_pivot(&Z2, &source), None);
    }
}
