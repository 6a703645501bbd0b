//! Scene-level projection - one wireframe per object, once per frame

use hyperwire_core::{ObjectKey, Scene};

use crate::projection::ProjectionConfig;
use crate::wireframe::{project, Segment2D, Wireframe2D};

/// The per-frame projection of every object in a scene
///
/// Built once per frame after the driver has applied that frame's
/// transform mutations. The consumer may iterate per object (to style
/// objects differently) or flattened across the whole scene.
pub struct SceneWireframes {
    objects: Vec<(ObjectKey, Wireframe2D)>,
}

impl SceneWireframes {
    /// Project every object in the scene with the given configuration
    pub fn from_scene(scene: &Scene, config: &ProjectionConfig) -> Self {
        let objects = scene
            .iter_with_keys()
            .map(|(key, obj)| (key, project(&obj.polytope, &obj.transform, config)))
            .collect();
        Self { objects }
    }

    /// Iterate (key, wireframe) pairs
    pub fn iter(&self) -> impl Iterator<Item = (ObjectKey, &Wireframe2D)> {
        self.objects.iter().map(|(key, frame)| (*key, frame))
    }

    /// The wireframe for one object, if it was in the scene at projection time
    pub fn get(&self, key: ObjectKey) -> Option<&Wireframe2D> {
        self.objects
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, frame)| frame)
    }

    /// Number of projected objects
    #[inline]
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Iterate every drawable segment across the whole scene
    pub fn segments(&self) -> impl Iterator<Item = Segment2D> + '_ {
        self.objects
            .iter()
            .flat_map(|(_, frame)| frame.visible_segments())
    }

    /// Total drawable segments this frame
    pub fn total_visible_segments(&self) -> usize {
        self.segments().count()
    }

    /// Total vertices skipped as degenerate this frame
    pub fn total_skipped_vertices(&self) -> usize {
        self.objects
            .iter()
            .map(|(_, frame)| frame.skipped_vertex_count())
            .sum()
    }
}
