//! Surface materials, point lights and Phong shading.

use lumen_math::{Float, Vec3};
use serde::{Deserialize, Serialize};

/// Surface appearance under the Phong model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Material<S> {
    /// Base color.
    pub color: Vec3<S>,
    /// Ambient reflection coefficient.
    pub ambient: S,
    /// Diffuse reflection coefficient.
    pub diffuse: S,
    /// Specular reflection coefficient.
    pub specular: S,
    /// Specular exponent; larger is a smaller, sharper highlight.
    pub shininess: S,
}

impl<S: Float> Material<S> {
    /// Default material with a different base color.
    pub fn with_color(color: Vec3<S>) -> Self {
        Self {
            color,
            ..Self::default()
        }
    }
}

impl<S: Float> Default for Material<S> {
    fn default() -> Self {
        Self {
            color: Vec3::one(),
            ambient: S::from_f64(0.1),
            diffuse: S::from_f64(0.9),
            specular: S::from_f64(0.9),
            shininess: S::from_f64(200.0),
        }
    }
}

/// A light source with no size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointLight<S> {
    /// Position in world space.
    pub position: Vec3<S>,
    /// Color and brightness.
    pub intensity: Vec3<S>,
}

impl<S: Float> PointLight<S> {
    /// Create a point light.
    #[inline]
    pub fn new(position: Vec3<S>, intensity: Vec3<S>) -> Self {
        Self {
            position,
            intensity,
        }
    }

    /// A white light of unit intensity at `position`.
    #[inline]
    pub fn white(position: Vec3<S>) -> Self {
        Self::new(position, Vec3::one())
    }
}

/// Phong color at `point`.
///
/// `eye` points from the surface towards the viewer and `normal` is the
/// unit surface normal. The result is not clamped and may exceed 1.
pub fn lighting<S: Float>(
    material: &Material<S>,
    light: &PointLight<S>,
    point: Vec3<S>,
    eye: Vec3<S>,
    normal: Vec3<S>,
) -> Vec3<S> {
    let effective_color = material.color * light.intensity;
    let light_dir = (light.position - point).normalize();
    let ambient = effective_color * material.ambient;

    let light_dot_normal = light_dir.dot(&normal);
    if light_dot_normal < S::ZERO {
        // Light is on the other side of the surface.
        return ambient;
    }

    let diffuse = effective_color * material.diffuse * light_dot_normal;

    let reflect_dir = (-light_dir).reflect(normal);
    let reflect_dot_eye = reflect_dir.dot(&eye);
    let specular = if reflect_dot_eye <= S::ZERO {
        Vec3::zero()
    } else {
        light.intensity * material.specular * reflect_dot_eye.powf(material.shininess)
    };

    ambient + diffuse + specular
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn assert_gray(c: Vec3<f64>, v: f64) {
        assert_relative_eq!(c.x, v, epsilon = 1e-4);
        assert_relative_eq!(c.y, v, epsilon = 1e-4);
        assert_relative_eq!(c.z, v, epsilon = 1e-4);
    }

    fn setup() -> (Material<f64>, Vec3<f64>) {
        (Material::default(), Vec3::zero())
    }

    #[test]
    fn test_default_material() {
        let m = Material::<f32>::default();
        assert_eq!(m.color, Vec3::new(1.0, 1.0, 1.0));
        assert_eq!(m.ambient, 0.1);
        assert_eq!(m.diffuse, 0.9);
        assert_eq!(m.specular, 0.9);
        assert_eq!(m.shininess, 200.0);
        assert_eq!(m, Material::with_color(Vec3::one()));
        assert_ne!(m, Material::with_color(Vec3::new(1.0, 0.2, 1.0)));
    }

    #[test]
    fn test_eye_between_light_and_surface() {
        let (m, p) = setup();
        let eye = Vec3::new(0.0, 0.0, -1.0);
        let normal = Vec3::new(0.0, 0.0, -1.0);
        let light = PointLight::white(Vec3::new(0.0, 0.0, -10.0));
        assert_gray(lighting(&m, &light, p, eye, normal), 1.9);
    }

    #[test]
    fn test_eye_offset_45() {
        let (m, p) = setup();
        let s = 2f64.sqrt() / 2.0;
        let eye = Vec3::new(0.0, s, -s);
        let normal = Vec3::new(0.0, 0.0, -1.0);
        let light = PointLight::white(Vec3::new(0.0, 0.0, -10.0));
        assert_gray(lighting(&m, &light, p, eye, normal), 1.0);
    }

    #[test]
    fn test_light_offset_45() {
        // Ambient plus diffuse only; the eye is outside the highlight.
        let (m, p) = setup();
        let eye = Vec3::new(0.0, 0.0, -1.0);
        let normal = Vec3::new(0.0, 0.0, -1.0);
        let light = PointLight::white(Vec3::new(0.0, 10.0, -10.0));
        let expected = 0.1 + 0.9 * 2f64.sqrt() / 2.0;
        assert_gray(lighting(&m, &light, p, eye, normal), expected);
    }

    #[test]
    fn test_eye_in_reflection_path() {
        let (m, p) = setup();
        let s = 2f64.sqrt() / 2.0;
        let eye = Vec3::new(0.0, -s, -s);
        let normal = Vec3::new(0.0, 0.0, -1.0);
        let light = PointLight::white(Vec3::new(0.0, 10.0, -10.0));
        assert_gray(lighting(&m, &light, p, eye, normal), 1.6364);
    }

    #[test]
    fn test_light_behind_surface() {
        let (m, p) = setup();
        let eye = Vec3::new(0.0, 0.0, -1.0);
        let normal = Vec3::new(0.0, 0.0, -1.0);
        let light = PointLight::white(Vec3::new(0.0, 0.0, 10.0));
        assert_gray(lighting(&m, &light, p, eye, normal), 0.1);
    }

    #[test]
    fn test_colored_light_and_material() {
        let m = Material::with_color(Vec3::new(1.0f32, 0.5, 0.0));
        let light = PointLight::new(Vec3::new(0.0, 0.0, 10.0), Vec3::new(0.5, 1.0, 1.0));
        let c = lighting(
            &m,
            &light,
            Vec3::zero(),
            Vec3::new(0.0, 0.0, -1.0),
            Vec3::new(0.0, 0.0, -1.0),
        );
        // Only the ambient term survives.
        assert!(c.approx_eq(&Vec3::new(0.05, 0.05, 0.0)));
    }
}
