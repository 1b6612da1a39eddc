//! Rays and their transformation between coordinate spaces.

use lumen_math::{Float, Mat4, Vec3};
use serde::{Deserialize, Serialize};

/// A ray with an origin point and a direction.
///
/// The direction is not required to be unit length: transforming a ray by
/// a scaling matrix changes its length, and `t` values stay comparable
/// between world and object space because of it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ray<S> {
    /// Origin point.
    pub origin: Vec3<S>,
    /// Direction vector.
    pub direction: Vec3<S>,
}

impl<S: Float> Ray<S> {
    /// Create a ray. `direction` is used as given.
    #[inline]
    pub fn new(origin: Vec3<S>, direction: Vec3<S>) -> Self {
        Self { origin, direction }
    }

    /// Point at parameter `t`: `origin + direction * t`.
    #[inline]
    pub fn at(&self, t: S) -> Vec3<S> {
        self.origin + self.direction * t
    }

    /// Apply `m` to the ray: the origin as a point (`w = 1`) and the
    /// direction as a vector (`w = 0`). The direction is not renormalized.
    #[inline]
    pub fn transform(&self, m: &Mat4<S>) -> Self {
        Self {
            origin: (*m * self.origin.to_point()).xyz(),
            direction: (*m * self.direction.to_vector()).xyz(),
        }
    }
}

/// `m * ray` is [`Ray::transform`].
impl<S: Float> std::ops::Mul<Ray<S>> for Mat4<S> {
    type Output = Ray<S>;

    #[inline]
    fn mul(self, ray: Ray<S>) -> Ray<S> {
        ray.transform(&self)
    }
}
