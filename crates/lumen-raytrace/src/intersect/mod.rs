//! Object-space ray intersection for each shape kind.
//!
//! Every shape is canonical in its own space (the sphere is the unit sphere
//! at the origin); placement in the world comes from the owning object's
//! transform, so these routines never see world coordinates.

mod sphere;

pub use sphere::{intersect_sphere, sphere_normal};

use lumen_math::{Float, Vec4};
use serde::{Deserialize, Serialize};

use crate::Ray;

/// The geometric kind of an object.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shape {
    /// Unit sphere centered at the origin.
    #[default]
    Sphere,
}

impl Shape {
    /// Ray parameters where an object-space ray meets the shape, in
    /// ascending order. Roots behind the origin are included.
    pub fn local_intersect<S: Float>(&self, ray: &Ray<S>) -> impl Iterator<Item = S> {
        match self {
            Shape::Sphere => intersect_sphere(ray).into_iter().flatten(),
        }
    }

    /// Unnormalized surface normal at an object-space point (`w = 1`).
    pub fn local_normal_at<S: Float>(&self, point: Vec4<S>) -> Vec4<S> {
        match self {
            Shape::Sphere => sphere_normal(point),
        }
    }
}
