//! Read persistence pairs off a reduced boundary matrix.

use std::collections::BTreeSet;

use super::Interval;
use crate::error::{PersistenceError, Result};
use crate::field::Field;
use crate::filtration::Filtration;
use crate::matrix::BoundaryMatrix;
use crate::reduction::GeneratorList;

/// Birth value and creating edge of a row simplex
struct RowBirth {
    value: f64,
    edge: Option<usize>,
    endpoints: Option<(usize, usize)>,
}

fn row_birth<F: Field>(
    matrix: &BoundaryMatrix<F>,
    filtration: &Filtration,
    row: usize,
    column: usize,
) -> Result<RowBirth> {
    match matrix.dimension() {
        // Every vertex is present from scale 0
        0 => Ok(RowBirth {
            value: 0.0,
            edge: None,
            endpoints: None,
        }),
        1 => filtration
            .edge(row)
            .map(|e| RowBirth {
                value: e.length,
                edge: Some(e.position),
                endpoints: Some(e.endpoints()),
            })
            .ok_or(PersistenceError::RowOutOfRange {
                column,
                row,
                rows: filtration.len(),
            }),
        dimension => Err(PersistenceError::UnsupportedDimension { dimension, max: 1 }),
    }
}

/// Convert a reduced matrix into intervals of dimension `matrix.dimension()`
///
/// Finite intervals come first, in column order, then essential ones in row
/// order; the same matrix always yields the same sequence. Intervals with
/// zero persistence are skipped unless `keep_zero_persistence` is set.
pub fn extract_intervals<F: Field>(
    matrix: &BoundaryMatrix<F>,
    filtration: &Filtration,
    generators: Option<&GeneratorList>,
    keep_zero_persistence: bool,
) -> Result<Vec<Interval>> {
    let mut intervals = Vec::new();
    let mut pivots = BTreeSet::new();

    for (index, column) in matrix.columns().iter().enumerate() {
        let Some(pivot) = column.pivot() else {
            continue;
        };
        pivots.insert(pivot);

        let killer = filtration
            .edge(column.edge())
            .ok_or(PersistenceError::UnknownEdge {
                column: index,
                edge: column.edge(),
                edges: filtration.len(),
            })?;
        let birth = row_birth(matrix, filtration, pivot, index)?;

        if keep_zero_persistence || killer.length > birth.value {
            intervals.push(Interval {
                dimension: matrix.dimension(),
                birth: birth.value,
                death: killer.length,
                edge: Some(killer.position),
                birth_edge: birth.endpoints,
                death_edge: Some(killer.endpoints()),
                generator: generators.and_then(|g| g.get(index)).map(<[usize]>::to_vec),
            });
        }
    }

    for row in matrix.row_list().filter(|row| !pivots.contains(row)) {
        let birth = row_birth(matrix, filtration, row, matrix.len())?;
        intervals.push(Interval {
            dimension: matrix.dimension(),
            birth: birth.value,
            death: f64::INFINITY,
            edge: birth.edge,
            birth_edge: birth.endpoints,
            death_edge: None,
            generator: None,
        });
    }

    Ok(intervals)
}
