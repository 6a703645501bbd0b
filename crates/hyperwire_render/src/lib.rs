//! Projection pipeline for 4D wireframes
//!
//! This crate turns world-space 4D geometry into 2D line segments for an
//! external renderer. It is backend-blind: the output is plain point and
//! segment data, and whichever consumer draws it owns all pixel, window,
//! and frame-pacing concerns.
//!
//! ## Key Components
//!
//! - [`ProjectionConfig`] - the two camera distances (4D→3D and 3D→2D)
//! - [`project`] - project one polytope instance to a [`Wireframe2D`]
//! - [`project_to_3d`] - stage-1-only variant for consumers running their
//!   own final camera stage
//! - [`SceneWireframes`] - per-frame collection over a whole scene

mod projection;
mod wireframe;
mod renderable;

pub use projection::{ProjectedVertex, ProjectionConfig, DEGENERATE_EPSILON};
pub use wireframe::{project, project_to_3d, Segment2D, Segment3D, Wireframe2D, Wireframe3D};
pub use renderable::SceneWireframes;

// Re-export core types for convenience
pub use hyperwire_core::{ObjectKey, ObjectTransform, Scene, SceneObject};
pub use hyperwire_core::{Edge, GeometryError, Polytope, Vec4};
pub use hyperwire_core::{hypercube, simplex, sixteen_cell};
pub use hyperwire_core::{PlaneAngles, RotationPlane};
