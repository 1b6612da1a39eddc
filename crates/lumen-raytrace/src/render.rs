//! Primary-ray rendering onto a flat projection wall.

use log::info;
use lumen_math::{Float, Vec3};

use crate::error::Result;
use crate::{Canvas, Ray, RenderSettings, Scene};

/// Render `scene` into a new canvas.
///
/// One ray per pixel leaves `settings.ray_origin` towards the pixel's
/// position on the wall: column `i` maps to `x = -half + pixel_size * i` and
/// row `j` to `y = half - pixel_size * j`, so row 0 is the top of the
/// image. Pixels whose ray misses every object keep the background color.
pub fn render<S: Float>(scene: &Scene<S>, settings: &RenderSettings) -> Result<Canvas<S>> {
    settings.validate()?;

    let size = settings.canvas_size as usize;
    let to_vec = |a: [f64; 3]| Vec3::from(a).map(S::from_f64);
    let origin = to_vec(settings.ray_origin);
    let background = to_vec(settings.background);
    let half = S::from_f64(settings.wall_size / 2.0);
    let pixel_size = S::from_f64(settings.pixel_size());
    let wall_z = S::from_f64(settings.wall_z);

    info!(
        "render: {size}x{size} pixels, {} objects",
        scene.objects.len()
    );

    let mut canvas = Canvas::filled(size, size, background);
    let mut hits = 0usize;
    for row in 0..size {
        let world_y = half - pixel_size * S::from_f64(row as f64);
        for col in 0..size {
            let world_x = -half + pixel_size * S::from_f64(col as f64);
            let target = Vec3::new(world_x, world_y, wall_z);
            let ray = Ray::new(origin, (target - origin).normalize());
            if let Some(color) = scene.color_at(&ray)? {
                canvas.set(col, row, color);
                hits += 1;
            }
        }
    }

    info!("render: done, {hits} of {} pixels hit", size * size);
    Ok(canvas)
}
