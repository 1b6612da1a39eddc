//! A rectangular buffer of linear RGB colors.

use lumen_math::{Float, Vec3};

/// Row-major grid of colors, addressed by `(column, row)` with the origin at
/// the top left.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas<S> {
    width: usize,
    height: usize,
    pixels: Vec<Vec3<S>>,
}

impl<S: Float> Canvas<S> {
    /// A black canvas.
    pub fn new(width: usize, height: usize) -> Self {
        Self::filled(width, height, Vec3::zero())
    }

    /// A canvas with every pixel set to `color`.
    pub fn filled(width: usize, height: usize, color: Vec3<S>) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; width * height],
        }
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    fn offset(&self, col: impl TryInto<usize>, row: impl TryInto<usize>) -> Option<usize> {
        let col = col.try_into().ok()?;
        let row = row.try_into().ok()?;
        (col < self.width && row < self.height).then(|| row * self.width + col)
    }

    /// Color at `(col, row)`, or `None` outside the canvas.
    pub fn get(&self, col: impl TryInto<usize>, row: impl TryInto<usize>) -> Option<Vec3<S>> {
        self.offset(col, row).map(|i| self.pixels[i])
    }

    /// Write `color` at `(col, row)`. Writes outside the canvas, including
    /// negative coordinates, are dropped.
    pub fn set(&mut self, col: impl TryInto<usize>, row: impl TryInto<usize>, color: Vec3<S>) {
        if let Some(i) = self.offset(col, row) {
            self.pixels[i] = color;
        }
    }

    /// Set every pixel to `color`.
    pub fn fill(&mut self, color: Vec3<S>) {
        self.pixels.fill(color);
    }

    /// All pixels, row by row.
    #[inline]
    pub fn pixels(&self) -> &[Vec3<S>] {
        &self.pixels
    }

    /// Mutable view of all pixels, row by row.
    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [Vec3<S>] {
        &mut self.pixels
    }

    /// Iterate over rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Vec3<S>]> {
        // `chunks` rejects a zero size; a zero-width canvas has no rows.
        self.pixels.chunks(self.width.max(1))
    }

    /// Clamped 8-bit `r, g, b` triples, row by row.
    pub fn to_rgb8(&self) -> Vec<u8> {
        self.pixels
            .iter()
            .flat_map(|p| [to_u8(p.r()), to_u8(p.g()), to_u8(p.b())])
            .collect()
    }
}

impl<S> Canvas<S>
where
    S: Float + bytemuck::Pod,
    Vec3<S>: bytemuck::Pod,
{
    /// Pixels as a flat `r, g, b, r, g, b, ...` scalar slice.
    pub fn as_scalars(&self) -> &[S] {
        bytemuck::cast_slice(&self.pixels)
    }
}

/// Quantize a channel: `<= 0` is 0, `>= 1` is 255, otherwise rounded.
fn to_u8<S: Float>(x: S) -> u8 {
    let x = x.to_f64();
    if x <= 0.0 {
        0
    } else if x >= 1.0 {
        255
    } else {
        (x * 255.0 + 0.5) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_canvas_is_black() {
        let c = Canvas::<f32>::new(10, 20);
        assert_eq!(c.width(), 10);
        assert_eq!(c.height(), 20);
        assert_eq!(c.pixels().len(), 200);
        assert!(c.pixels().iter().all(|p| *p == Vec3::zero()));
    }

    #[test]
    fn test_set_and_get() {
        let mut c = Canvas::<f32>::new(10, 20);
        let red = Vec3::new(1.0, 0.0, 0.0);
        c.set(2, 3, red);
        assert_eq!(c.get(2, 3), Some(red));
        assert_eq!(c.pixels()[3 * 10 + 2], red);
        assert_eq!(c.get(3, 2), Some(Vec3::zero()));
    }

    #[test]
    fn test_out_of_range_writes_are_dropped() {
        let mut c = Canvas::<f64>::new(4, 4);
        let before = c.clone();
        c.set(-1, 0, Vec3::one());
        c.set(0, -1, Vec3::one());
        c.set(4, 0, Vec3::one());
        c.set(0, 4usize, Vec3::one());
        c.set(i64::MAX, i64::MIN, Vec3::one());
        assert_eq!(c, before);
        assert_eq!(c.get(4, 0), None);
        assert_eq!(c.get(-1, 2), None);
    }

    #[test]
    fn test_rows() {
        let mut c = Canvas::<f32>::new(3, 2);
        c.set(1, 1, Vec3::one());
        let rows: Vec<_> = c.rows().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1][1], Vec3::one());
        assert_eq!(Canvas::<f32>::new(0, 0).rows().count(), 0);
    }

    #[test]
    fn test_to_rgb8() {
        let mut c = Canvas::<f32>::new(2, 1);
        c.set(0, 0, Vec3::new(1.5, 0.0, -0.5));
        c.set(1, 0, Vec3::new(0.5, 0.2, 1.0));
        assert_eq!(c.to_rgb8(), vec![255, 0, 0, 128, 51, 255]);
    }

    #[test]
    fn test_as_scalars() {
        let mut c = Canvas::<f64>::filled(2, 1, Vec3::new(0.1, 0.2, 0.3));
        c.fill(Vec3::new(0.25, 0.5, 0.75));
        assert_eq!(c.as_scalars(), &[0.25, 0.5, 0.75, 0.25, 0.5, 0.75]);
    }
}
