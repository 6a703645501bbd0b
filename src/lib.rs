//! Hyperwire - interactive 4D polytope wireframes
//!
//! Facade crate tying the workspace together:
//!
//! - [`hyperwire_math`] - vectors, plane rotations, polytope generators
//! - [`hyperwire_core`] - transform state and the scene container
//! - [`hyperwire_render`] - two-stage projection and the renderer boundary
//! - [`config`] - layered application configuration
//!
//! The binary in this crate is a reference consumer: a terminal wireframe
//! viewer that spins a configured polytope and draws its projected edges
//! as characters. Any other rendering backend plugs in the same way, by
//! consuming [`hyperwire_render::project`] output once per frame.

pub mod config;

pub use config::{AppConfig, ConfigError};

pub use hyperwire_core::{ObjectKey, ObjectTransform, Scene, SceneObject};
pub use hyperwire_math::{hypercube, simplex, sixteen_cell};
pub use hyperwire_math::{Edge, GeometryError, Mat4, PlaneAngles, Polytope, RotationPlane, Vec4};
pub use hyperwire_render::{
    project, project_to_3d, ProjectedVertex, ProjectionConfig, SceneWireframes, Segment2D,
    Segment3D, Wireframe2D, Wireframe3D,
};
