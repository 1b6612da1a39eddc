#![warn(missing_docs)]

//! Ray-sphere tracing kernel for lumen.
//!
//! Objects are canonical shapes placed by a 4x4 transform. A ray is moved
//! into each object's space through the cached inverse transform, intersected
//! there, and the visible hit is shaded with the Phong model.
//!
//! # Architecture
//!
//! - [`Ray`]: origin and direction, transformable by a [`Mat4`](lumen_math::Mat4)
//! - [`intersect`]: object-space intersection for each [`Shape`]
//! - [`Object`] / [`ObjectPool`]: transformed, shaded shapes owned by id
//! - [`Intersection`] / [`hit`]: intersection records and hit selection
//! - [`lighting`]: Phong shading for a [`Material`] under a [`PointLight`]
//! - [`Scene`], [`Canvas`], [`render`]: a minimal pipeline from scene to pixels
//!
//! # Example
//!
//! ```
//! use lumen_math::{Mat4, Vec3};
//! use lumen_raytrace::{render, PointLight, RenderSettings, Scene};
//!
//! let mut scene = Scene::new(PointLight::white(Vec3::new(-10.0, 10.0, -10.0)));
//! let sphere = scene.objects.add_sphere();
//! sphere.set_transform(Mat4::scale(1.0, 0.5, 1.0))?;
//! sphere.material.color = Vec3::new(1.0, 0.2, 1.0);
//!
//! let settings = RenderSettings { canvas_size: 16, ..Default::default() };
//! let canvas = render::<f32>(&scene, &settings)?;
//! assert_eq!(canvas.to_rgb8().len(), 16 * 16 * 3);
//! # Ok::<(), lumen_raytrace::TraceError>(())
//! ```

mod canvas;
mod error;
pub mod intersect;
mod intersection;
mod object;
mod pool;
mod ray;
mod render;
mod scene;
mod settings;
mod shading;

pub use canvas::Canvas;
pub use error::{Result, TraceError};
pub use intersect::Shape;
pub use intersection::{hit, sort_intersections, Intersection, ObjectId};
pub use object::Object;
pub use pool::ObjectPool;
pub use ray::Ray;
pub use render::render;
pub use scene::Scene;
pub use settings::{RenderSettings, MAX_CANVAS_SIZE};
pub use shading::{lighting, Material, PointLight};
