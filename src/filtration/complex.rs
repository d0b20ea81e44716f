//! Boundary matrices of the flag complex of a filtration.

use std::collections::BTreeMap;

use super::Filtration;
use crate::error::Result;
use crate::field::Field;
use crate::matrix::BoundaryMatrix;

/// A 2-simplex [a, b, c] of the flag complex, a < b < c
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Triangle {
    pub vertices: [usize; 3],
    /// Filtration positions of the faces [b, c], [a, c], [a, b]
    pub faces: [usize; 3],
    /// Position of the longest face, which closes the triangle
    pub closing_edge: usize,
}

impl Triangle {
    /// ∂[a, b, c] = [b, c] - [a, c] + [a, b]
    pub fn boundary(&self) -> [(usize, i64); 3] {
        [(self.faces[0], 1), (self.faces[1], -1), (self.faces[2], 1)]
    }
}

/// All triangles whose three edges are in the filtration
///
/// Ordered by closing edge, then by vertices, which is the order in which
/// they enter the filtration.
pub fn triangles(filtration: &Filtration) -> Vec<Triangle> {
    let n = filtration.vertex_count();
    // neighbours[v][w] = position of edge [v, w]
    let mut neighbours: Vec<BTreeMap<usize, usize>> = vec![BTreeMap::new(); n];
    let mut found = Vec::new();

    for edge in filtration.edges() {
        let (u, v) = edge.endpoints();
        let mut closed: Vec<Triangle> = neighbours[u]
            .iter()
            .filter_map(|(&w, &uw)| neighbours[v].get(&w).map(|&vw| (w, uw, vw)))
            .map(|(w, uw, vw)| {
                let mut vertices = [u, v, w];
                vertices.sort_unstable();
                let [a, b, c] = vertices;
                let position = |x: usize, y: usize| {
                    if x != w && y != w {
                        edge.position
                    } else if x == u || y == u {
                        uw
                    } else {
                        vw
                    }
                };
                Triangle {
                    vertices,
                    faces: [position(b, c), position(a, c), position(a, b)],
                    closing_edge: edge.position,
                }
            })
            .collect();
        closed.sort_by_key(|t| t.vertices);
        found.extend(closed);

        neighbours[u].insert(v, edge.position);
        neighbours[v].insert(u, edge.position);
    }

    found
}

/// ∂₁ over `field`: one column per edge, rows are vertices
///
/// Every vertex enters the row list, since each one creates a component.
pub fn edge_boundary_matrix<F: Field>(filtration: &Filtration, field: F) -> Result<BoundaryMatrix<F>> {
    let mut matrix = BoundaryMatrix::new(field, 0, filtration.vertex_count());
    for vertex in 0..filtration.vertex_count() {
        matrix.add_row_entry(vertex)?;
    }
    for edge in filtration.edges() {
        matrix.add_column(edge.position, [(edge.source, -1), (edge.target, 1)])?;
    }
    Ok(matrix)
}

/// ∂₂ over `field`: one column per triangle, rows are edges
///
/// `cycle_edges` are the edges whose ∂₁ column reduced to zero; they form
/// the row list, since only they create 1-cycles.
pub fn triangle_boundary_matrix<F: Field>(
    filtration: &Filtration,
    field: F,
    cycle_edges: impl IntoIterator<Item = usize>,
) -> Result<BoundaryMatrix<F>> {
    let mut matrix = BoundaryMatrix::new(field, 1, filtration.len());
    for edge in cycle_edges {
        matrix.add_row_entry(edge)?;
    }
    for triangle in triangles(filtration) {
        matrix.add_column(triangle.closing_edge, triangle.boundary())?;
    }
    Ok(matrix)
}
