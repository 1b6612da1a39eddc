#![warn(missing_docs)]

//! Math kernel for the lumen ray tracer.
//!
//! Small generic vectors ([`Vec2`], [`Vec3`], [`Vec4`]), a column-major
//! [`Mat4`] for homogeneous transforms, and two flavours of approximate
//! float comparison: an absolute tolerance ([`Scalar::approx_eq`]) and a
//! bit-level ULP distance ([`almost_equals`]).

mod error;
mod mat4;
mod scalar;
mod ulps;
pub mod vec;

pub use error::MathError;
pub use mat4::Mat4;
pub use scalar::{Float, Number, Scalar, Signed, APPROX_EPSILON};
pub use ulps::{almost_equals, ulps_distance_f32, ulps_distance_f64, Ulps, DEFAULT_MAX_ULPS};
pub use vec::{Vec2, Vec3, Vec4};

/// `f32` 2-vector.
pub type Vec2f = Vec2<f32>;
/// `f64` 2-vector.
pub type Vec2d = Vec2<f64>;
/// `i32` 2-vector.
pub type Vec2i = Vec2<i32>;
/// `u32` 2-vector.
pub type Vec2u = Vec2<u32>;
/// Boolean 2-vector mask.
pub type Vec2b = Vec2<bool>;

/// `f32` 3-vector.
pub type Vec3f = Vec3<f32>;
/// `f64` 3-vector.
pub type Vec3d = Vec3<f64>;
/// `i32` 3-vector.
pub type Vec3i = Vec3<i32>;
/// `u32` 3-vector.
pub type Vec3u = Vec3<u32>;
/// Boolean 3-vector mask.
pub type Vec3b = Vec3<bool>;

/// `f32` 4-vector.
pub type Vec4f = Vec4<f32>;
/// `f64` 4-vector.
pub type Vec4d = Vec4<f64>;
/// `i32` 4-vector.
pub type Vec4i = Vec4<i32>;
/// `u32` 4-vector.
pub type Vec4u = Vec4<u32>;
/// Boolean 4-vector mask.
pub type Vec4b = Vec4<bool>;

/// `f32` 4x4 matrix.
pub type Mat4f = Mat4<f32>;
/// `f64` 4x4 matrix.
pub type Mat4d = Mat4<f64>;
