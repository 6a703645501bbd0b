//! Projected wireframe output - the renderer-facing boundary
//!
//! For a given polytope, transform, and projection configuration, one call
//! yields the per-frame output: an ordered sequence of projected-or-skipped
//! points indexed exactly like the polytope's vertex sequence, plus the
//! edge list unchanged. The consumer draws a line for every edge whose two
//! endpoints both projected; an edge with a skipped endpoint is omitted for
//! that frame only, never removed from the polytope.

use hyperwire_core::ObjectTransform;
use hyperwire_math::{Edge, Polytope};

use crate::projection::{ProjectedVertex, ProjectionConfig};

/// A drawable 2D line segment with per-endpoint depth
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment2D {
    pub start: [f32; 2],
    pub end: [f32; 2],
    pub start_depth: f32,
    pub end_depth: f32,
}

impl Segment2D {
    /// Average of the two endpoint depths, for whole-segment styling
    #[inline]
    pub fn mean_depth(&self) -> f32 {
        (self.start_depth + self.end_depth) * 0.5
    }
}

/// A 3D line segment for consumers that run their own final camera stage
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment3D {
    pub start: [f32; 3],
    pub end: [f32; 3],
}

/// One frame's 2D projection of a polytope instance
#[derive(Clone, Debug)]
pub struct Wireframe2D {
    points: Vec<Option<ProjectedVertex>>,
    edges: Vec<Edge>,
}

impl Wireframe2D {
    /// Projected points, indexed like the source polytope's vertices;
    /// `None` marks a vertex skipped as degenerate this frame
    #[inline]
    pub fn points(&self) -> &[Option<ProjectedVertex>] {
        &self.points
    }

    /// The polytope's edge list, unchanged
    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Number of source vertices
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.points.len()
    }

    /// Number of vertices skipped this frame
    pub fn skipped_vertex_count(&self) -> usize {
        self.points.iter().filter(|p| p.is_none()).count()
    }

    /// True when every vertex projected this frame
    pub fn is_fully_visible(&self) -> bool {
        self.points.iter().all(|p| p.is_some())
    }

    /// Iterate the segments whose endpoints both projected this frame
    pub fn visible_segments(&self) -> impl Iterator<Item = Segment2D> + '_ {
        self.edges.iter().filter_map(move |edge| {
            let a = self.points[edge.start()]?;
            let b = self.points[edge.end()]?;
            Some(Segment2D {
                start: a.position,
                end: b.position,
                start_depth: a.depth,
                end_depth: b.depth,
            })
        })
    }

    /// Number of drawable segments this frame
    pub fn visible_segment_count(&self) -> usize {
        self.visible_segments().count()
    }
}

/// One frame's 3D (stage-1-only) projection of a polytope instance
#[derive(Clone, Debug)]
pub struct Wireframe3D {
    points: Vec<Option<[f32; 3]>>,
    edges: Vec<Edge>,
}

impl Wireframe3D {
    /// Projected 3D points, indexed like the source polytope's vertices
    #[inline]
    pub fn points(&self) -> &[Option<[f32; 3]>] {
        &self.points
    }

    /// The polytope's edge list, unchanged
    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Number of vertices skipped this frame
    pub fn skipped_vertex_count(&self) -> usize {
        self.points.iter().filter(|p| p.is_none()).count()
    }

    /// Iterate the segments whose endpoints both projected this frame
    pub fn visible_segments(&self) -> impl Iterator<Item = Segment3D> + '_ {
        self.edges.iter().filter_map(move |edge| {
            let start = self.points[edge.start()]?;
            let end = self.points[edge.end()]?;
            Some(Segment3D { start, end })
        })
    }
}

/// Project one polytope instance to screen space for this frame.
///
/// World vertices are derived on the fly (base vertex through the current
/// transform) and never stored back into the polytope.
pub fn project(
    polytope: &Polytope,
    transform: &ObjectTransform,
    config: &ProjectionConfig,
) -> Wireframe2D {
    let points: Vec<Option<ProjectedVertex>> = polytope
        .vertices()
        .iter()
        .map(|&v| config.project_vertex(transform.transform_point(v)))
        .collect();

    let skipped = points.iter().filter(|p| p.is_none()).count();
    if skipped > 0 {
        log::debug!(
            "projection skipped {} of {} vertices this frame",
            skipped,
            points.len()
        );
    }

    Wireframe2D {
        points,
        edges: polytope.edges().to_vec(),
    }
}

/// Stage-1-only projection: world-space 4D vertices onto the 3D hyperplane.
///
/// For consumers that apply their own 3D camera afterwards.
pub fn project_to_3d(
    polytope: &Polytope,
    transform: &ObjectTransform,
    config: &ProjectionConfig,
) -> Wireframe3D {
    let points: Vec<Option<[f32; 3]>> = polytope
        .vertices()
        .iter()
        .map(|&v| config.project_to_hyperplane(transform.transform_point(v)))
        .collect();

    Wireframe3D {
        points,
        edges: polytope.edges().to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyperwire_core::Vec4;
    use hyperwire_math::{hypercube, sixteen_cell};

    #[test]
    fn test_points_indexed_like_vertices() {
        let cube = hypercube(2.0).unwrap();
        let transform = ObjectTransform::identity();
        let config = ProjectionConfig::default();

        let frame = project(&cube, &transform, &config);
        assert_eq!(frame.vertex_count(), cube.vertex_count());
        assert_eq!(frame.edges().len(), cube.edge_count());
        assert!(frame.is_fully_visible());
        assert_eq!(frame.visible_segment_count(), 32);
    }

    #[test]
    fn test_skipped_endpoint_drops_edge_for_frame() {
        // Place a 16-cell so its +w vertex lands exactly on the camera
        // hyperplane: that vertex is skipped, its 6 edges drop out, the
        // other 18 stay
        let cell = sixteen_cell(1.0).unwrap();
        let mut transform = ObjectTransform::identity();
        transform.set_position(Vec4::new(0.0, 0.0, 0.0, 4.0));
        let config = ProjectionConfig::new(5.0, 5.0).unwrap();

        let frame = project(&cell, &transform, &config);
        assert_eq!(frame.skipped_vertex_count(), 1);
        assert!(frame.points()[6].is_none(), "+w vertex should be degenerate");
        assert_eq!(frame.visible_segment_count(), 18);
        // The edge list itself is untouched
        assert_eq!(frame.edges().len(), 24);
    }

    #[test]
    fn test_edge_recovers_next_frame() {
        let cell = sixteen_cell(1.0).unwrap();
        let mut transform = ObjectTransform::identity();
        transform.set_position(Vec4::new(0.0, 0.0, 0.0, 4.0));
        let config = ProjectionConfig::new(5.0, 5.0).unwrap();

        assert_eq!(project(&cell, &transform, &config).visible_segment_count(), 18);

        // Move off the singularity; the full wireframe returns
        transform.translate(Vec4::new(0.0, 0.0, 0.0, -1.0));
        let frame = project(&cell, &transform, &config);
        assert!(frame.is_fully_visible());
        assert_eq!(frame.visible_segment_count(), 24);
    }

    #[test]
    fn test_segment_depths() {
        let cube = hypercube(2.0).unwrap();
        let transform = ObjectTransform::identity();
        let config = ProjectionConfig::default();

        let frame = project(&cube, &transform, &config);
        for segment in frame.visible_segments() {
            assert!(segment.start_depth.is_finite());
            assert!(segment.end_depth.is_finite());
            assert!(segment.mean_depth().is_finite());
        }
    }

    #[test]
    fn test_project_to_3d() {
        let cube = hypercube(2.0).unwrap();
        let transform = ObjectTransform::identity();
        let config = ProjectionConfig::default();

        let frame = project_to_3d(&cube, &transform, &config);
        assert_eq!(frame.points().len(), 16);
        assert_eq!(frame.skipped_vertex_count(), 0);
        assert_eq!(frame.visible_segments().count(), 32);

        // w = -1 vertices shrink (factor 5/6), w = +1 vertices grow (5/4)
        let near = frame.points()[0].unwrap();
        assert!((near[0] - (-1.0 * 5.0 / 6.0)).abs() < 1e-4);
        let far = frame.points()[8].unwrap();
        assert!((far[0] - (-1.0 * 5.0 / 4.0)).abs() < 1e-4);
    }
}
