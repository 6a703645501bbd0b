//! Two-stage perspective projection (4D -> 3D -> 2D)
//!
//! Stage 1 divides x, y, z by the 4D camera's distance to the vertex's
//! w-hyperplane; stage 2 divides the resulting x, y by the 3D camera's
//! distance to the point's z-plane. Vertices whose perspective denominator
//! falls within [`DEGENERATE_EPSILON`] of zero are skipped for the frame
//! rather than producing Inf/NaN: objects rotating through the camera
//! hyperplane momentarily lose an edge, then recover.

use hyperwire_math::{GeometryError, Vec4};

/// Absolute threshold below which a perspective denominator counts as
/// degenerate
pub const DEGENERATE_EPSILON: f32 = 1e-6;

/// A vertex projected to screen space
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectedVertex {
    /// 2D position after both perspective divides
    pub position: [f32; 2],
    /// Pre-divide z depth from stage 1, retained for depth-based styling
    pub depth: f32,
}

/// The two session-wide camera distances
///
/// Read by the projection pipeline; not owned by any polytope. Both
/// distances are validated at construction and immutable afterwards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectionConfig {
    camera_4d_distance: f32,
    camera_3d_distance: f32,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            camera_4d_distance: 5.0,
            camera_3d_distance: 5.0,
        }
    }
}

impl ProjectionConfig {
    /// Create a projection configuration.
    ///
    /// Both distances must be finite and positive; anything else is
    /// rejected here rather than surfacing later as a bad frame.
    pub fn new(camera_4d_distance: f32, camera_3d_distance: f32) -> Result<Self, GeometryError> {
        if !camera_4d_distance.is_finite() || camera_4d_distance <= 0.0 {
            return Err(GeometryError::invalid_parameter(
                "camera_4d_distance",
                camera_4d_distance,
            ));
        }
        if !camera_3d_distance.is_finite() || camera_3d_distance <= 0.0 {
            return Err(GeometryError::invalid_parameter(
                "camera_3d_distance",
                camera_3d_distance,
            ));
        }
        Ok(Self {
            camera_4d_distance,
            camera_3d_distance,
        })
    }

    /// Distance from the 4D viewer to the projection hyperplane
    #[inline]
    pub fn camera_4d_distance(&self) -> f32 {
        self.camera_4d_distance
    }

    /// Distance from the 3D viewer to the screen plane
    #[inline]
    pub fn camera_3d_distance(&self) -> f32 {
        self.camera_3d_distance
    }

    /// Stage 1: project a world-space 4D vertex onto the 3D hyperplane.
    ///
    /// Returns `None` when the vertex sits at or near the projection
    /// singularity (w within epsilon of the camera distance), or when the
    /// input carries non-finite components.
    pub fn project_to_hyperplane(&self, v: Vec4) -> Option<[f32; 3]> {
        let denom = self.camera_4d_distance - v.w;
        if denom.abs() < DEGENERATE_EPSILON {
            return None;
        }
        let factor = self.camera_4d_distance / denom;
        let p = [v.x * factor, v.y * factor, v.z * factor];
        if p.iter().all(|c| c.is_finite()) {
            Some(p)
        } else {
            None
        }
    }

    /// Stage 2: project a 3D point onto the 2D screen plane.
    ///
    /// The returned vertex keeps the pre-divide z as its depth. Same
    /// degeneracy handling as stage 1.
    pub fn project_to_screen(&self, p: [f32; 3]) -> Option<ProjectedVertex> {
        let denom = self.camera_3d_distance - p[2];
        if denom.abs() < DEGENERATE_EPSILON {
            return None;
        }
        let factor = self.camera_3d_distance / denom;
        let position = [p[0] * factor, p[1] * factor];
        if position.iter().all(|c| c.is_finite()) {
            Some(ProjectedVertex { position, depth: p[2] })
        } else {
            None
        }
    }

    /// Both stages: world-space 4D vertex to screen-space 2D point
    pub fn project_vertex(&self, v: Vec4) -> Option<ProjectedVertex> {
        self.project_to_hyperplane(v)
            .and_then(|p| self.project_to_screen(p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.0001;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_new_validates_distances() {
        assert!(ProjectionConfig::new(5.0, 5.0).is_ok());

        for bad in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            let err = ProjectionConfig::new(bad, 5.0).unwrap_err();
            assert!(
                matches!(err, GeometryError::InvalidParameter { name: "camera_4d_distance", .. }),
                "camera_4d_distance {} should be rejected",
                bad
            );
            let err = ProjectionConfig::new(5.0, bad).unwrap_err();
            assert!(
                matches!(err, GeometryError::InvalidParameter { name: "camera_3d_distance", .. }),
                "camera_3d_distance {} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_stage_one_values() {
        // v = (1, 2, 3, 1), d4 = 5: factor = 5 / (5 - 1) = 1.25
        let config = ProjectionConfig::new(5.0, 5.0).unwrap();
        let p = config.project_to_hyperplane(Vec4::new(1.0, 2.0, 3.0, 1.0)).unwrap();
        assert!(approx_eq(p[0], 1.25));
        assert!(approx_eq(p[1], 2.5));
        assert!(approx_eq(p[2], 3.75));
    }

    #[test]
    fn test_stage_two_values() {
        // p = (1.25, 2.5, 3.75), d3 = 5: factor = 5 / 1.25 = 4
        let config = ProjectionConfig::new(5.0, 5.0).unwrap();
        let v = config.project_to_screen([1.25, 2.5, 3.75]).unwrap();
        assert!(approx_eq(v.position[0], 5.0));
        assert!(approx_eq(v.position[1], 10.0));
        assert!(approx_eq(v.depth, 3.75));
    }

    #[test]
    fn test_both_stages() {
        let config = ProjectionConfig::new(5.0, 5.0).unwrap();
        let v = config.project_vertex(Vec4::new(1.0, 2.0, 3.0, 1.0)).unwrap();
        assert!(approx_eq(v.position[0], 5.0));
        assert!(approx_eq(v.position[1], 10.0));
        assert!(approx_eq(v.depth, 3.75));
    }

    #[test]
    fn test_w_at_camera_distance_is_skipped() {
        let config = ProjectionConfig::new(5.0, 5.0).unwrap();
        assert!(config.project_to_hyperplane(Vec4::new(1.0, 1.0, 1.0, 5.0)).is_none());
        // Just inside the epsilon band
        assert!(config
            .project_to_hyperplane(Vec4::new(1.0, 1.0, 1.0, 5.0 - 1e-7))
            .is_none());
        // Clearly outside the band projects fine
        assert!(config
            .project_to_hyperplane(Vec4::new(1.0, 1.0, 1.0, 4.9))
            .is_some());
    }

    #[test]
    fn test_z_at_camera_distance_is_skipped() {
        let config = ProjectionConfig::new(5.0, 5.0).unwrap();
        assert!(config.project_to_screen([1.0, 1.0, 5.0]).is_none());
        assert!(config.project_to_screen([1.0, 1.0, 4.5]).is_some());
    }

    #[test]
    fn test_behind_camera_still_projects() {
        // A vertex past the camera hyperplane has a negative factor; it is
        // not degenerate, just inverted, and stays finite
        let config = ProjectionConfig::new(5.0, 5.0).unwrap();
        let p = config.project_to_hyperplane(Vec4::new(1.0, 0.0, 0.0, 10.0)).unwrap();
        assert!(approx_eq(p[0], -1.0));
    }

    #[test]
    fn test_non_finite_input_is_skipped() {
        let config = ProjectionConfig::new(5.0, 5.0).unwrap();
        assert!(config.project_vertex(Vec4::new(f32::NAN, 0.0, 0.0, 0.0)).is_none());
        assert!(config.project_vertex(Vec4::new(0.0, 0.0, 0.0, f32::NAN)).is_none());
    }

    #[test]
    fn test_distant_camera_approximates_orthographic() {
        let config = ProjectionConfig::new(1e6, 1e6).unwrap();
        let v = Vec4::new(1.0, 2.0, 3.0, 1.0);
        let projected = config.project_vertex(v).unwrap();
        assert!((projected.position[0] - v.x).abs() < 1e-2);
        assert!((projected.position[1] - v.y).abs() < 1e-2);
        assert!((projected.depth - v.z).abs() < 1e-2);
    }

    #[test]
    fn test_default_config() {
        let config = ProjectionConfig::default();
        assert_eq!(config.camera_4d_distance(), 5.0);
        assert_eq!(config.camera_3d_distance(), 5.0);
    }
}
