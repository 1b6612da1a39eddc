//! Render configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TraceError};

/// Largest accepted `canvas_size`.
pub const MAX_CANVAS_SIZE: u32 = 16_384;

/// Parameters of the wall-projection camera used by [`crate::render`].
///
/// Rays start at `ray_origin` and pass through a square wall of side
/// `wall_size` centered on the z axis at `z = wall_z`; the wall is divided
/// into `canvas_size x canvas_size` pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Width and height of the output canvas in pixels.
    pub canvas_size: u32,
    /// Side length of the projection wall in world units.
    pub wall_size: f64,
    /// Z coordinate of the projection wall.
    pub wall_z: f64,
    /// Shared origin of every primary ray.
    pub ray_origin: [f64; 3],
    /// Color of pixels whose ray hits nothing.
    pub background: [f64; 3],
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            canvas_size: 512,
            wall_size: 7.0,
            wall_z: 10.0,
            ray_origin: [0.0, 0.0, -5.0],
            background: [0.0, 0.0, 0.0],
        }
    }
}

impl RenderSettings {
    /// Parse settings from TOML, filling missing keys from
    /// [`RenderSettings::default`], and validate them.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let settings: Self = toml::from_str(s)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Serialize to TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| TraceError::InvalidSettings(e.to_string()))
    }

    /// World-space width of one pixel on the wall.
    #[inline]
    pub fn pixel_size(&self) -> f64 {
        self.wall_size / f64::from(self.canvas_size)
    }

    /// Validate settings.
    pub fn validate(&self) -> Result<()> {
        if self.canvas_size == 0 {
            return Err(TraceError::InvalidSettings(
                "canvas_size must be positive".into(),
            ));
        }
        if self.canvas_size > MAX_CANVAS_SIZE {
            return Err(TraceError::InvalidSettings(format!(
                "canvas_size must be at most {MAX_CANVAS_SIZE}, got {}",
                self.canvas_size
            )));
        }
        if !(self.wall_size.is_finite() && self.wall_size > 0.0) {
            return Err(TraceError::InvalidSettings(
                "wall_size must be positive".into(),
            ));
        }
        if !self.wall_z.is_finite() || self.ray_origin.iter().any(|v| !v.is_finite()) {
            return Err(TraceError::InvalidSettings(
                "wall_z and ray_origin must be finite".into(),
            ));
        }
        if self.wall_z <= self.ray_origin[2] {
            return Err(TraceError::InvalidSettings(
                "wall must lie in front of the ray origin (wall_z > ray_origin z)".into(),
            ));
        }
        Ok(())
    }
}
