//! Hypercube (tesseract) generator
//!
//! A hypercube has 16 vertices (all combinations of ±size/2 for x,y,z,w)
//! and 32 edges connecting vertex pairs that differ in exactly one
//! coordinate's sign.

use crate::{Edge, GeometryError, Polytope, Vec4};

/// Generate a hypercube centered at the origin.
///
/// `size` is the full edge length. Vertex `i` takes its coordinates from the
/// bits of `i`: bit 0 picks the sign of x, bit 1 of y, bit 2 of z, bit 3 of
/// w. Edges join vertices whose index bit patterns are at Hamming distance 1,
/// giving every vertex exactly 4 incident edges.
pub fn hypercube(size: f32) -> Result<Polytope, GeometryError> {
    if !size.is_finite() || size <= 0.0 {
        return Err(GeometryError::invalid_parameter("size", size));
    }
    let h = size * 0.5;

    let vertices: Vec<Vec4> = (0u16..16)
        .map(|i| {
            let coord = |bit: u16| if i & (1 << bit) != 0 { h } else { -h };
            Vec4::new(coord(0), coord(1), coord(2), coord(3))
        })
        .collect();

    let mut edges = Vec::with_capacity(32);
    for i in 0usize..16 {
        for bit in 0..4 {
            let j = i ^ (1 << bit);
            if j > i {
                edges.push(Edge::new(i, j));
            }
        }
    }

    Polytope::new(vertices, edges)
}
