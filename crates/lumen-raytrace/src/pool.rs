//! Ownership of scene objects, addressed by [`ObjectId`].

use log::debug;
use lumen_math::Float;

use crate::error::{Result, TraceError};
use crate::{Object, ObjectId};

/// Owns every object in a scene.
///
/// Ids are assigned sequentially from 0 on insertion and stay valid for the
/// lifetime of the pool; there is no removal. Intersections refer to objects
/// only through these ids.
#[derive(Debug, Clone)]
pub struct ObjectPool<S> {
    objects: Vec<Object<S>>,
}

impl<S: Float> ObjectPool<S> {
    /// An empty pool.
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
        }
    }

    /// Take ownership of `object`, assign it the next id, and return it for
    /// further configuration.
    pub fn add(&mut self, mut object: Object<S>) -> &mut Object<S> {
        let index = self.objects.len();
        debug_assert!(index < u32::MAX as usize, "object pool exhausted");
        object.id = ObjectId(index as u32);
        debug!("pool: added {:?} as object {}", object.shape(), object.id);
        self.objects.push(object);
        &mut self.objects[index]
    }

    /// Add a default unit sphere.
    pub fn add_sphere(&mut self) -> &mut Object<S> {
        self.add(Object::sphere())
    }

    /// Object with the given id.
    #[inline]
    pub fn get(&self, id: ObjectId) -> Option<&Object<S>> {
        self.objects.get(id.index())
    }

    /// Mutable access to the object with the given id.
    #[inline]
    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut Object<S>> {
        self.objects.get_mut(id.index())
    }

    /// Like [`ObjectPool::get`], reporting a missing id as an error.
    pub fn try_get(&self, id: ObjectId) -> Result<&Object<S>> {
        self.get(id).ok_or(TraceError::UnknownObject(id))
    }

    /// Number of objects.
    #[inline]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// True if no object has been added.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Objects in id order.
    pub fn iter(&self) -> std::slice::Iter<'_, Object<S>> {
        self.objects.iter()
    }
}

impl<S: Float> Default for ObjectPool<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, S: Float> IntoIterator for &'a ObjectPool<S> {
    type Item = &'a Object<S>;
    type IntoIter = std::slice::Iter<'a, Object<S>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
