//! 4-simplex (5-cell) generator
//!
//! The simplest regular 4D polytope: 5 mutually equidistant vertices and an
//! edge between every pair (the complete graph on 5 vertices, 10 edges).

use crate::{Edge, GeometryError, Polytope, Vec4};

/// Generate a regular 4-simplex centered at the origin.
///
/// `size` is a linear scale factor. The vertex coordinates place four
/// vertices at (±1, ±1, ±1, -1/√5) with an even number of minus signs in
/// xyz, and the fifth at (0, 0, 0, 4/√5); all pairwise distances come out
/// equal (2√2 · size) and the centroid sits at the origin.
pub fn simplex(size: f32) -> Result<Polytope, GeometryError> {
    if !size.is_finite() || size <= 0.0 {
        return Err(GeometryError::invalid_parameter("size", size));
    }
    let inv_sqrt5 = 1.0 / 5.0f32.sqrt();

    let vertices: Vec<Vec4> = [
        Vec4::new(1.0, 1.0, 1.0, -inv_sqrt5),
        Vec4::new(1.0, -1.0, -1.0, -inv_sqrt5),
        Vec4::new(-1.0, 1.0, -1.0, -inv_sqrt5),
        Vec4::new(-1.0, -1.0, 1.0, -inv_sqrt5),
        Vec4::new(0.0, 0.0, 0.0, 4.0 * inv_sqrt5),
    ]
    .iter()
    .map(|&v| v * size)
    .collect();

    let mut edges = Vec::with_capacity(10);
    for i in 0..5 {
        for j in (i + 1)..5 {
            edges.push(Edge::new(i, j));
        }
    }

    Polytope::new(vertices, edges)
}
