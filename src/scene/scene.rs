//! Scene container
//!
//! The scene owns every object in a flat arena; everything else refers to
//! objects through [`ObjectHandle`] indices. Handles stay valid for the
//! scene's whole life since objects are only removed at teardown.

use super::object::SceneObject;

/// Index of one object within a [`Scene`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectHandle(pub(crate) usize);

/// All objects in draw order.
///
/// Insertion order defines draw order and has no other meaning.
#[derive(Debug, Default)]
pub struct Scene {
    objects: Vec<SceneObject>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an object and returns its handle.
    pub fn add(&mut self, object: SceneObject) -> ObjectHandle {
        self.objects.push(object);
        ObjectHandle(self.objects.len() - 1)
    }

    pub fn get(&self, handle: ObjectHandle) -> &SceneObject {
        &self.objects[handle.0]
    }

    pub fn get_mut(&mut self, handle: ObjectHandle) -> &mut SceneObject {
        &mut self.objects[handle.0]
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// All objects in draw order.
    pub fn iter(&self) -> impl Iterator<Item = &SceneObject> {
        self.objects.iter()
    }

    /// The objects a renderer should draw, in draw order.
    pub fn visible(&self) -> impl Iterator<Item = &SceneObject> {
        self.objects.iter().filter(|obj| !obj.hidden)
    }

    /// Derives a name not yet used by any object in the scene.
    pub fn ensure_unique_name(&self, desired_name: &str) -> String {
        let mut counter = 0;
        let mut test_name = desired_name.to_string();

        while self.objects.iter().any(|obj| obj.name == test_name) {
            counter += 1;
            test_name = format!("{} ({})", desired_name, counter);
        }

        test_name
    }
}
