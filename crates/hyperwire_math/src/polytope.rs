//! Polytope data model
//!
//! A polytope is an immutable vertex sequence plus a deduplicated set of
//! undirected edges indexing into it. Base vertices never move after
//! construction; world-space vertices are derived per frame by applying an
//! object transform, so edge indices stay valid for the object's lifetime.

use std::collections::HashSet;

use crate::{GeometryError, Vec4};

/// An undirected edge defined by two vertex indices
///
/// The pair is stored in canonical (sorted) order, so two edges joining the
/// same vertices always compare equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
    /// Indices into the parent polytope's vertex array, smaller index first
    pub indices: [usize; 2],
}

impl Edge {
    /// Create a new edge between two vertices
    #[inline]
    pub fn new(a: usize, b: usize) -> Self {
        if a <= b {
            Self { indices: [a, b] }
        } else {
            Self { indices: [b, a] }
        }
    }

    /// First (smaller) vertex index
    #[inline]
    pub fn start(&self) -> usize {
        self.indices[0]
    }

    /// Second (larger) vertex index
    #[inline]
    pub fn end(&self) -> usize {
        self.indices[1]
    }

    /// True when this edge touches the given vertex
    #[inline]
    pub fn touches(&self, vertex: usize) -> bool {
        self.indices[0] == vertex || self.indices[1] == vertex
    }
}

/// A 4D polytope as a wireframe: vertices plus undirected edges
///
/// Constructed once by a generator and immutable thereafter.
#[derive(Clone, Debug)]
pub struct Polytope {
    vertices: Vec<Vec4>,
    edges: Vec<Edge>,
}

impl Polytope {
    /// Build a polytope from vertices and edges.
    ///
    /// Edges are deduplicated (first occurrence wins) and every edge index
    /// is validated against the vertex list.
    pub fn new(vertices: Vec<Vec4>, edges: Vec<Edge>) -> Result<Self, GeometryError> {
        let vertex_count = vertices.len();
        let mut seen: HashSet<[usize; 2]> = HashSet::with_capacity(edges.len());
        let mut deduped = Vec::with_capacity(edges.len());

        for edge in edges {
            for &index in &edge.indices {
                if index >= vertex_count {
                    return Err(GeometryError::EdgeOutOfRange { index, vertex_count });
                }
            }
            if seen.insert(edge.indices) {
                deduped.push(edge);
            }
        }

        Ok(Self { vertices, edges: deduped })
    }

    /// The base (untransformed) vertices
    #[inline]
    pub fn vertices(&self) -> &[Vec4] {
        &self.vertices
    }

    /// The undirected edge list
    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Number of vertices
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Number of edges incident to the given vertex
    pub fn incident_edge_count(&self, vertex: usize) -> usize {
        self.edges.iter().filter(|e| e.touches(vertex)).count()
    }
}
