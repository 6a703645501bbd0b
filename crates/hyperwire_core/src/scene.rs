//! Scene container for polytope instances
//!
//! The Scene owns every object being displayed: one polytope plus its own
//! transform per object. Objects are addressed by generational keys, so
//! removing one object never invalidates handles to the others.

use hyperwire_math::Polytope;
use slotmap::SlotMap;

use crate::ObjectTransform;

slotmap::new_key_type! {
    /// Generational key to an object in a [`Scene`]
    pub struct ObjectKey;
}

/// One polytope instance in the scene
///
/// Owns its transform exclusively; two objects never share transform state.
pub struct SceneObject {
    /// Optional name for lookup and diagnostics
    pub name: Option<String>,
    /// The immutable wireframe geometry
    pub polytope: Polytope,
    /// This instance's position and orientation
    pub transform: ObjectTransform,
}

impl SceneObject {
    /// Create an object at the origin with no rotation
    pub fn new(polytope: Polytope) -> Self {
        Self {
            name: None,
            polytope,
            transform: ObjectTransform::identity(),
        }
    }

    /// Builder-style: attach a name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Builder-style: start from a given transform
    pub fn with_transform(mut self, transform: ObjectTransform) -> Self {
        self.transform = transform;
        self
    }
}

/// Container for all polytope instances in one view
///
/// Objects are independent: the per-frame driver may advance their
/// transforms in any order before projecting.
pub struct Scene {
    objects: SlotMap<ObjectKey, SceneObject>,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    /// Create a new empty scene
    pub fn new() -> Self {
        Self {
            objects: SlotMap::with_key(),
        }
    }

    /// Add an object to the scene, returning its key
    pub fn add_object(&mut self, object: SceneObject) -> ObjectKey {
        let key = self.objects.insert(object);
        log::debug!(
            "scene: added object {:?} ({} vertices)",
            key,
            self.objects[key].polytope.vertex_count()
        );
        key
    }

    /// Remove an object, returning it if the key was live
    pub fn remove_object(&mut self, key: ObjectKey) -> Option<SceneObject> {
        let removed = self.objects.remove(key);
        if removed.is_some() {
            log::debug!("scene: removed object {:?}", key);
        }
        removed
    }

    /// Get a reference to an object by key
    pub fn get_object(&self, key: ObjectKey) -> Option<&SceneObject> {
        self.objects.get(key)
    }

    /// Get a mutable reference to an object by key
    pub fn get_object_mut(&mut self, key: ObjectKey) -> Option<&mut SceneObject> {
        self.objects.get_mut(key)
    }

    /// Find an object by name
    pub fn find_by_name(&self, name: &str) -> Option<(ObjectKey, &SceneObject)> {
        self.objects
            .iter()
            .find(|(_, obj)| obj.name.as_deref() == Some(name))
    }

    /// Number of objects in the scene
    #[inline]
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Check if the scene is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Iterate over all objects
    pub fn iter(&self) -> impl Iterator<Item = &SceneObject> {
        self.objects.values()
    }

    /// Iterate over all objects mutably
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut SceneObject> {
        self.objects.values_mut()
    }

    /// Iterate over keys and objects
    pub fn iter_with_keys(&self) -> impl Iterator<Item = (ObjectKey, &SceneObject)> {
        self.objects.iter()
    }

    /// Remove all objects from the scene
    pub fn clear(&mut self) {
        self.objects.clear();
    }
}
