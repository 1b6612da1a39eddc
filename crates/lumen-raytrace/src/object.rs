//! Scene objects: a shape placed in the world by a transform.

use log::debug;
use lumen_math::{Float, Mat4, Vec3};

use crate::error::{Result, TraceError};
use crate::intersect::Shape;
use crate::{Intersection, Material, ObjectId, Ray};

/// A shape with a transform, its cached inverse, and a material.
///
/// The inverse is only ever written together with the transform, by
/// [`Object::set_transform`].
#[derive(Debug, Clone, PartialEq)]
pub struct Object<S> {
    pub(crate) id: ObjectId,
    shape: Shape,
    transform: Mat4<S>,
    inverse: Mat4<S>,
    /// Surface material.
    pub material: Material<S>,
}

impl<S: Float> Object<S> {
    /// An untransformed object of the given shape with the default material.
    ///
    /// Its id is [`ObjectId::NONE`] until it is added to a pool.
    pub fn new(shape: Shape) -> Self {
        Self {
            id: ObjectId::NONE,
            shape,
            transform: Mat4::identity(),
            inverse: Mat4::identity(),
            material: Material::default(),
        }
    }

    /// A unit sphere at the origin.
    pub fn sphere() -> Self {
        Self::new(Shape::Sphere)
    }

    /// Builder form of [`Object::set_transform`].
    pub fn with_transform(mut self, transform: Mat4<S>) -> Result<Self> {
        self.set_transform(transform)?;
        Ok(self)
    }

    /// Builder form of setting [`Object::material`].
    pub fn with_material(mut self, material: Material<S>) -> Self {
        self.material = material;
        self
    }

    /// Pool id, or [`ObjectId::NONE`] for a detached object.
    #[inline]
    pub fn id(&self) -> ObjectId {
        self.id
    }

    /// Shape kind.
    #[inline]
    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Object-to-world transform.
    #[inline]
    pub fn transform(&self) -> &Mat4<S> {
        &self.transform
    }

    /// World-to-object transform.
    #[inline]
    pub fn inverse_transform(&self) -> &Mat4<S> {
        &self.inverse
    }

    /// Replace the transform and recompute its inverse.
    ///
    /// A matrix without a finite inverse is rejected with
    /// [`TraceError::SingularTransform`] and the object is left unchanged.
    pub fn set_transform(&mut self, transform: Mat4<S>) -> Result<()> {
        match transform.try_inverse().filter(Mat4::is_finite) {
            Some(inverse) => {
                self.transform = transform;
                self.inverse = inverse;
                Ok(())
            }
            None => {
                debug!("object {}: rejected singular transform", self.id);
                Err(TraceError::SingularTransform)
            }
        }
    }

    /// All intersections of a world-space ray with this object, tagged with
    /// its id. Includes roots behind the ray origin.
    pub fn intersect(&self, ray: &Ray<S>) -> Vec<Intersection<S>> {
        let mut out = Vec::with_capacity(2);
        self.intersect_into(ray, &mut out);
        out
    }

    /// Like [`Object::intersect`], appending to `out`.
    pub fn intersect_into(&self, ray: &Ray<S>, out: &mut Vec<Intersection<S>>) {
        let local = ray.transform(&self.inverse);
        out.extend(
            self.shape
                .local_intersect(&local)
                .map(|t| Intersection::new(t, self.id)),
        );
    }

    /// Unit world-space normal at a world-space point on the surface.
    ///
    /// Normals go back to world space through the transposed inverse, which
    /// keeps them perpendicular under non-uniform scaling. The `w` picked up
    /// from translation is discarded before normalizing.
    pub fn normal_at(&self, world_point: Vec3<S>) -> Vec3<S> {
        let object_point = self.inverse * world_point.to_point();
        let object_normal = self.shape.local_normal_at(object_point);
        let mut world_normal = self.inverse.transpose() * object_normal;
        world_normal.w = S::ZERO;
        world_normal.xyz().normalize()
    }
}

impl<S: Float> Default for Object<S> {
    fn default() -> Self {
        Self::sphere()
    }
}
