//! A set of objects lit by one point light.

use lumen_math::{Float, Vec3};

use crate::error::Result;
use crate::intersection::{hit, sort_intersections};
use crate::shading::lighting;
use crate::{Intersection, ObjectPool, PointLight, Ray};

/// Objects plus the light that shades them.
#[derive(Debug, Clone)]
pub struct Scene<S> {
    /// Every object in the scene.
    pub objects: ObjectPool<S>,
    /// The single light source.
    pub light: PointLight<S>,
}

impl<S: Float> Scene<S> {
    /// An empty scene lit by `light`.
    pub fn new(light: PointLight<S>) -> Self {
        Self {
            objects: ObjectPool::new(),
            light,
        }
    }

    /// Intersections of `ray` with every object, sorted by `t`.
    pub fn intersect(&self, ray: &Ray<S>) -> Vec<Intersection<S>> {
        let mut xs = Vec::with_capacity(2 * self.objects.len());
        for object in &self.objects {
            object.intersect_into(ray, &mut xs);
        }
        sort_intersections(&mut xs);
        xs
    }

    /// Phong color of the surface seen at `hit` along `ray`.
    ///
    /// The eye vector is the normalized reverse of the ray direction, so the
    /// result does not depend on the direction's length.
    pub fn shade_hit(&self, ray: &Ray<S>, hit: &Intersection<S>) -> Result<Vec3<S>> {
        let object = self.objects.try_get(hit.object)?;
        let point = ray.at(hit.t);
        let normal = object.normal_at(point);
        let eye = (-ray.direction).normalize();
        Ok(lighting(&object.material, &self.light, point, eye, normal))
    }

    /// Color seen along `ray`, or `None` if it hits nothing.
    pub fn color_at(&self, ray: &Ray<S>) -> Result<Option<Vec3<S>>> {
        match hit(&self.intersect(ray)) {
            Some(h) => self.shade_hit(ray, &h).map(Some),
            None => Ok(None),
        }
    }
}
