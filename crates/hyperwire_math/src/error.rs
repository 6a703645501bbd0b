//! Geometry error types
//!
//! Construction-time failures for polytope generators, transforms, and
//! projection parameters. Transient per-frame projection degeneracy is not
//! an error; it is handled locally by skipping the affected vertex.

use std::fmt;

/// Error type for geometry construction and parameter validation
#[derive(Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// A caller-supplied scalar was unusable (non-positive size, non-finite
    /// angle or camera distance)
    InvalidParameter {
        /// Name of the offending parameter
        name: &'static str,
        /// The rejected value
        value: f32,
    },
    /// An edge referenced a vertex index outside the polytope's vertex list
    EdgeOutOfRange {
        /// The offending vertex index
        index: usize,
        /// Number of vertices in the polytope
        vertex_count: usize,
    },
}

impl GeometryError {
    /// Reject a scalar parameter
    pub fn invalid_parameter(name: &'static str, value: f32) -> Self {
        GeometryError::InvalidParameter { name, value }
    }
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::InvalidParameter { name, value } => {
                write!(f, "Invalid parameter {}: {}", name, value)
            }
            GeometryError::EdgeOutOfRange { index, vertex_count } => {
                write!(
                    f,
                    "Edge references vertex {} but the polytope has {} vertices",
                    index, vertex_count
                )
            }
        }
    }
}

impl std::error::Error for GeometryError {}
