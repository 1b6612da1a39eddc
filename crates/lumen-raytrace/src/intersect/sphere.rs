//! Ray-sphere intersection (quadratic equation).

use lumen_math::{Float, Vec3, Vec4};

use crate::Ray;

/// Intersect an object-space ray with the unit sphere at the origin.
///
/// Returns both roots `[t1, t2]` with `t1 <= t2`, or `None` if the ray
/// misses. A tangent ray yields two equal roots. Negative roots are kept.
pub fn intersect_sphere<S: Float>(ray: &Ray<S>) -> Option<[S; 2]> {
    let sphere_to_ray = ray.origin - Vec3::zero();
    let d = ray.direction;

    // |o + t*d|^2 = 1
    let two = S::ONE + S::ONE;
    let a = d.dot(&d);
    let b = two * d.dot(&sphere_to_ray);
    let c = sphere_to_ray.dot(&sphere_to_ray) - S::ONE;

    let discriminant = b * b - two * two * a * c;
    if discriminant < S::ZERO {
        return None;
    }

    let sqrt_disc = discriminant.sqrt();
    let t1 = (-b - sqrt_disc) / (two * a);
    let t2 = (-b + sqrt_disc) / (two * a);
    Some([t1, t2])
}

/// Normal of the unit sphere at `point`: the vector from the center.
#[inline]
pub fn sphere_normal<S: Float>(point: Vec4<S>) -> Vec4<S> {
    point - Vec4::point(S::ZERO, S::ZERO, S::ZERO)
}
