//! End-to-end computation: filtration → boundary matrices → intervals.

use ndarray::Array2;
use tracing::{debug, info, instrument};

use super::{extract_intervals, PersistenceDiagram};
use crate::config::PersistenceConfig;
use crate::error::Result;
use crate::field::{Field, FieldSelector, Zp, Z2};
use crate::filtration::{edge_boundary_matrix, triangle_boundary_matrix, Filtration, VietorisRips};
use crate::matrix::BoundaryMatrix;
use crate::reduction::{reduce_with, GeneratorList, GeneratorTracker, ReductionStats};

/// Compute persistent homology of a filtration
///
/// The configuration is validated before any matrix is built. H₀ comes
/// from ∂₁; when `max_dimension` is 1, H₁ comes from ∂₂ with the edges
/// whose ∂₁ column vanished as birth candidates.
#[instrument(skip_all, fields(edges = filtration.len(), vertices = filtration.vertex_count()))]
pub fn compute_persistence(
    filtration: &Filtration,
    config: &PersistenceConfig,
) -> Result<PersistenceDiagram> {
    let selector = config.validate()?;
    let diagram = match selector {
        FieldSelector::Binary => compute_over(filtration, config, selector, Z2)?,
        FieldSelector::Prime(p) => compute_over(filtration, config, selector, Zp::new(p)?)?,
    };

    info!(
        field = %diagram.field,
        intervals = diagram.len(),
        "persistence computed"
    );
    Ok(diagram)
}

/// Compute persistence of the Vietoris-Rips filtration of a point cloud
pub fn compute_persistence_from_points(
    points: &Array2<f64>,
    max_distance: f64,
    config: &PersistenceConfig,
) -> Result<PersistenceDiagram> {
    let filtration = VietorisRips::from_points(points, max_distance)?.filtration()?;
    compute_persistence(&filtration, config)
}

fn compute_over<F: Field>(
    filtration: &Filtration,
    config: &PersistenceConfig,
    selector: FieldSelector,
    field: F,
) -> Result<PersistenceDiagram> {
    let mut diagram = PersistenceDiagram::new(selector);

    let mut edges = edge_boundary_matrix(filtration, field.clone())?;
    let stats = reduce_and_extract(&mut edges, filtration, config, &mut diagram)?;
    diagram.stats.push(stats);

    if config.max_dimension >= 1 {
        let cycle_edges: Vec<usize> = edges.zero_columns().collect();
        debug!(cycle_edges = cycle_edges.len(), "building triangle boundary matrix");

        let mut triangles = triangle_boundary_matrix(filtration, field, cycle_edges)?;
        let stats = reduce_and_extract(&mut triangles, filtration, config, &mut diagram)?;
        diagram.stats.push(stats);
    }

    Ok(diagram)
}

fn reduce_and_extract<F: Field>(
    matrix: &mut BoundaryMatrix<F>,
    filtration: &Filtration,
    config: &PersistenceConfig,
    diagram: &mut PersistenceDiagram,
) -> Result<ReductionStats> {
    // Chains are only needed where columns are edges; ∂₂ generators are
    // the reduced cycles themselves.
    let mut tracker = (config.track_generators && matrix.dimension() == 0)
        .then(|| GeneratorTracker::seeded(matrix.len()));
    let stats = reduce_with(matrix, config.strategy, tracker.as_mut());
    let generators = match tracker {
        Some(tracker) => Some(tracker.into_list(matrix)),
        None if config.track_generators => Some(GeneratorList::from_reduced(matrix)),
        None => None,
    };

    diagram.intervals.extend(extract_intervals(
        matrix,
        filtration,
        generators.as_ref(),
        config.keep_zero_persistence,
    )?);
    Ok(stats)
}
