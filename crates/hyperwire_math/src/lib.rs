//! 4D Wireframe Mathematics Library
//!
//! This crate provides the geometric foundation for the Hyperwire viewer:
//! 4D vectors, plane rotations, and the polytope data model.
//!
//! ## Core Types
//!
//! - [`Vec4`] - 4D vector with x, y, z, w components
//! - [`Mat4`] - 4x4 column-major matrix (see [`mat4`] for operations)
//! - [`RotationPlane`] - the six independent rotation planes of 4D space
//! - [`PlaneAngles`] - per-plane rotation increments
//!
//! ## Polytopes
//!
//! - [`Polytope`] - immutable vertex/edge wireframe data
//! - [`hypercube`] - 16 vertices, 32 edges
//! - [`simplex`] - 5 vertices, 10 edges (complete graph)
//! - [`sixteen_cell`] - 8 vertices, 24 edges

mod vec4;
pub mod mat4;
mod error;
mod polytope;
mod hypercube;
mod simplex;
mod sixteen_cell;

pub use vec4::Vec4;
pub use mat4::{Mat4, PlaneAngles, RotationPlane};
pub use error::GeometryError;
pub use polytope::{Edge, Polytope};
pub use hypercube::hypercube;
pub use simplex::simplex;
pub use sixteen_cell::sixteen_cell;
