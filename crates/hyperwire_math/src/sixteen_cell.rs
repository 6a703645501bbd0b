//! 16-cell (hyperoctahedron) generator
//!
//! The 4D analog of the octahedron: 8 vertices at ±size along each axis,
//! 24 edges joining every pair except the antipodal ones.

use crate::{Edge, GeometryError, Polytope, Vec4};

/// Generate a 16-cell centered at the origin.
///
/// `size` is the vertex distance from the origin. Vertices are ordered
/// +x, -x, +y, -y, +z, -z, +w, -w, so the antipode of vertex `i` is
/// `i ^ 1`. Edges are enumerated from that index pattern rather than from
/// coordinate comparisons, so floating-point rounding can never
/// misclassify a near-antipodal pair. Every vertex connects to the 6
/// vertices on the other axes.
pub fn sixteen_cell(size: f32) -> Result<Polytope, GeometryError> {
    if !size.is_finite() || size <= 0.0 {
        return Err(GeometryError::invalid_parameter("size", size));
    }

    let mut vertices = Vec::with_capacity(8);
    for axis in [Vec4::X, Vec4::Y, Vec4::Z, Vec4::W] {
        vertices.push(axis * size);
        vertices.push(-axis * size);
    }

    let mut edges = Vec::with_capacity(24);
    for i in 0usize..8 {
        for j in (i + 1)..8 {
            // j == i ^ 1 is the antipode on the same axis
            if j != (i ^ 1) {
                edges.push(Edge::new(i, j));
            }
        }
    }

    Polytope::new(vertices, edges)
}
