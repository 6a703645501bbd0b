//! Core types for the Hyperwire viewer
//!
//! This crate provides the stateful side of the system:
//!
//! - [`ObjectTransform`] - Accumulated position and orientation in 4D space
//! - [`Scene`] - Container for polytope instances
//! - [`SceneObject`] - One polytope plus its transform
//! - [`ObjectKey`] - Generational key to an object in the scene

mod transform;
mod scene;

pub use transform::ObjectTransform;
pub use scene::{ObjectKey, Scene, SceneObject};

// Re-export commonly used types from hyperwire_math for convenience
pub use hyperwire_math::{Edge, GeometryError, Polytope, Vec4};
pub use hyperwire_math::{Mat4, PlaneAngles, RotationPlane};
pub use hyperwire_math::{hypercube, simplex, sixteen_cell};
