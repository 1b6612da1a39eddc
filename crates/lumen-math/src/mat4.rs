//! 4x4 matrices over homogeneous coordinates.
//!
//! Storage is column-major (four [`Vec4`] columns) and vectors are columns:
//! a transform is applied as `m * v`, and "apply A, then B, then C" is the
//! product `c * b * a`.

use std::fmt;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Sub, SubAssign,
};

use serde::{Deserialize, Serialize};

use crate::{Float, MathError, Number, Scalar, Vec4};

/// A 4x4 matrix stored as four column vectors.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Mat4<T> {
    /// First column.
    pub x: Vec4<T>,
    /// Second column.
    pub y: Vec4<T>,
    /// Third column.
    pub z: Vec4<T>,
    /// Fourth column (translation for affine transforms).
    pub w: Vec4<T>,
}

impl<T: Scalar> Mat4<T> {
    /// Build from 16 entries given row by row.
    #[allow(clippy::too_many_arguments)]
    #[rustfmt::skip]
    pub const fn new(
        m00: T, m01: T, m02: T, m03: T,
        m10: T, m11: T, m12: T, m13: T,
        m20: T, m21: T, m22: T, m23: T,
        m30: T, m31: T, m32: T, m33: T,
    ) -> Self {
        Self {
            x: Vec4::new(m00, m10, m20, m30),
            y: Vec4::new(m01, m11, m21, m31),
            z: Vec4::new(m02, m12, m22, m32),
            w: Vec4::new(m03, m13, m23, m33),
        }
    }

    /// Build from four column vectors.
    #[inline]
    pub const fn from_cols(x: Vec4<T>, y: Vec4<T>, z: Vec4<T>, w: Vec4<T>) -> Self {
        Self { x, y, z, w }
    }

    /// Build from four rows.
    pub fn from_rows(rows: [[T; 4]; 4]) -> Self {
        let [r0, r1, r2, r3] = rows;
        Self::new(
            r0[0], r0[1], r0[2], r0[3], //
            r1[0], r1[1], r1[2], r1[3], //
            r2[0], r2[1], r2[2], r2[3], //
            r3[0], r3[1], r3[2], r3[3],
        )
    }

    /// Diagonal matrix with `s` on the diagonal (a uniform scale when `s`
    /// applies to the homogeneous coordinate as well).
    pub fn from_diagonal(s: T) -> Self {
        let z = T::ZERO;
        Self::new(
            s, z, z, z, //
            z, s, z, z, //
            z, z, s, z, //
            z, z, z, s,
        )
    }

    /// The identity matrix.
    #[inline]
    pub fn identity() -> Self {
        Self::from_diagonal(T::ONE)
    }

    /// The all-zero matrix.
    #[inline]
    pub fn zero() -> Self {
        Self::splat(T::ZERO)
    }

    /// The all-one matrix.
    #[inline]
    pub fn one() -> Self {
        Self::splat(T::ONE)
    }

    fn splat(s: T) -> Self {
        let c = Vec4::splat(s);
        Self::from_cols(c, c, c, c)
    }

    /// Column `i` (0..4).
    #[inline]
    pub fn col(&self, i: usize) -> Vec4<T> {
        self[i]
    }

    /// Row `i` (0..4).
    #[inline]
    pub fn row(&self, i: usize) -> Vec4<T> {
        Vec4::new(self.x[i], self.y[i], self.z[i], self.w[i])
    }

    /// Entry at `(row, col)`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> T {
        self[col][row]
    }

    /// Entries row by row.
    pub fn to_rows(&self) -> [[T; 4]; 4] {
        [
            self.row(0).to_array(),
            self.row(1).to_array(),
            self.row(2).to_array(),
            self.row(3).to_array(),
        ]
    }

    /// Rows and columns exchanged.
    pub fn transpose(&self) -> Self {
        Self::from_cols(self.row(0), self.row(1), self.row(2), self.row(3))
    }

    /// Componentwise [`Scalar::approx_eq`].
    pub fn approx_eq(&self, other: &Self) -> bool {
        self.x.approx_eq(&other.x)
            && self.y.approx_eq(&other.y)
            && self.z.approx_eq(&other.z)
            && self.w.approx_eq(&other.w)
    }

    fn map_cols(self, mut f: impl FnMut(Vec4<T>) -> Vec4<T>) -> Self {
        Self::from_cols(f(self.x), f(self.y), f(self.z), f(self.w))
    }

    fn zip_cols(self, other: Self, mut f: impl FnMut(Vec4<T>, Vec4<T>) -> Vec4<T>) -> Self {
        Self::from_cols(
            f(self.x, other.x),
            f(self.y, other.y),
            f(self.z, other.z),
            f(self.w, other.w),
        )
    }
}

impl<T: Number> Mat4<T> {
    /// Translation by `(x, y, z)`. Directions (`w = 0`) are unaffected.
    pub fn translate(x: T, y: T, z: T) -> Self {
        let (o, l) = (T::ZERO, T::ONE);
        Self::new(
            l, o, o, x, //
            o, l, o, y, //
            o, o, l, z, //
            o, o, o, l,
        )
    }

    /// Non-uniform scale by `(x, y, z)`.
    pub fn scale(x: T, y: T, z: T) -> Self {
        let (o, l) = (T::ZERO, T::ONE);
        Self::new(
            x, o, o, o, //
            o, y, o, o, //
            o, o, z, o, //
            o, o, o, l,
        )
    }

    /// Determinant by cofactor expansion along the first row.
    ///
    /// The six 2x2 minors of the lower two rows are computed once and
    /// shared between the four 3x3 cofactors.
    pub fn determinant(&self) -> T {
        let (x, y, z, w) = (&self.x, &self.y, &self.z, &self.w);
        let d0 = z.z * w.w - w.z * z.w;
        let d1 = y.z * w.w - w.z * y.w;
        let d2 = y.z * z.w - z.z * y.w;
        let d3 = x.z * w.w - w.z * x.w;
        let d4 = x.z * z.w - z.z * x.w;
        let d5 = x.z * y.w - y.z * x.w;
        x.x * (y.y * d0 - z.y * d1 + w.y * d2)
            - y.x * (x.y * d0 - z.y * d3 + w.y * d4)
            + z.x * (x.y * d1 - y.y * d3 + w.y * d5)
            - w.x * (x.y * d2 - y.y * d4 + z.y * d5)
    }

    /// Transpose of the cofactor matrix.
    pub fn adjugate(&self) -> Self {
        let (x, y, z, w) = (&self.x, &self.y, &self.z, &self.w);

        let d00 = z.z * w.w - w.z * z.w;
        let d01 = y.z * w.w - w.z * y.w;
        let d02 = y.z * z.w - z.z * y.w;
        let d03 = x.z * w.w - w.z * x.w;
        let d04 = x.z * z.w - z.z * x.w;
        let d05 = x.z * y.w - y.z * x.w;

        let d06 = z.x * w.y - w.x * z.y;
        let d07 = y.x * w.y - w.x * y.y;
        let d08 = y.x * z.y - z.x * y.y;
        let d09 = x.x * w.y - w.x * x.y;
        let d10 = x.x * z.y - z.x * x.y;
        let d11 = x.x * y.y - y.x * x.y;

        Self::from_cols(
            Vec4::new(
                y.y * d00 - z.y * d01 + w.y * d02,
                z.y * d03 - x.y * d00 - w.y * d04,
                x.y * d01 - y.y * d03 + w.y * d05,
                y.y * d04 - x.y * d02 - z.y * d05,
            ),
            Vec4::new(
                z.x * d01 - y.x * d00 - w.x * d02,
                x.x * d00 - z.x * d03 + w.x * d04,
                y.x * d03 - x.x * d01 - w.x * d05,
                x.x * d02 - y.x * d04 + z.x * d05,
            ),
            Vec4::new(
                y.w * d06 - z.w * d07 + w.w * d08,
                z.w * d09 - x.w * d06 - w.w * d10,
                x.w * d07 - y.w * d09 + w.w * d11,
                y.w * d10 - x.w * d08 - z.w * d11,
            ),
            Vec4::new(
                z.z * d07 - y.z * d06 - w.z * d08,
                x.z * d06 - z.z * d09 + w.z * d10,
                y.z * d09 - x.z * d07 - w.z * d11,
                x.z * d08 - y.z * d10 + z.z * d11,
            ),
        )
    }

    /// Inverse via `adjugate / determinant`.
    ///
    /// Not guarded: a singular matrix divides by zero and the result is
    /// full of infinities/NaN (or panics for integer scalars). Use
    /// [`Mat4::try_inverse`] when the input may be degenerate.
    pub fn inverse(&self) -> Self {
        self.adjugate() / self.determinant()
    }

    /// Inverse, or `None` if the determinant is exactly zero.
    pub fn try_inverse(&self) -> Option<Self> {
        let d = self.determinant();
        if d == T::ZERO {
            None
        } else {
            Some(self.adjugate() / d)
        }
    }

    /// Like [`Mat4::try_inverse`], reporting a singular matrix as an error.
    pub fn checked_inverse(&self) -> Result<Self, MathError> {
        self.try_inverse().ok_or(MathError::SingularMatrix)
    }
}

impl<T: Float> Mat4<T> {
    /// True if no entry is infinite or NaN.
    pub fn is_finite(&self) -> bool {
        [self.x, self.y, self.z, self.w]
            .iter()
            .all(|c| c.iter().all(Float::is_finite))
    }

    /// Rotation about the X axis by `angle` radians.
    pub fn rotate_x(angle: T) -> Self {
        let (s, c) = angle.sin_cos();
        let (o, l) = (T::ZERO, T::ONE);
        Self::new(
            l, o, o, o, //
            o, c, -s, o, //
            o, s, c, o, //
            o, o, o, l,
        )
    }

    /// Rotation about the Y axis by `angle` radians.
    pub fn rotate_y(angle: T) -> Self {
        let (s, c) = angle.sin_cos();
        let (o, l) = (T::ZERO, T::ONE);
        Self::new(
            c, o, s, o, //
            o, l, o, o, //
            -s, o, c, o, //
            o, o, o, l,
        )
    }

    /// Rotation about the Z axis by `angle` radians.
    pub fn rotate_z(angle: T) -> Self {
        let (s, c) = angle.sin_cos();
        let (o, l) = (T::ZERO, T::ONE);
        Self::new(
            c, -s, o, o, //
            s, c, o, o, //
            o, o, l, o, //
            o, o, o, l,
        )
    }
}

impl<T: Scalar> Default for Mat4<T> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T> Index<usize> for Mat4<T> {
    type Output = Vec4<T>;

    fn index(&self, i: usize) -> &Vec4<T> {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            3 => &self.w,
            _ => panic!("Mat4 column index out of range: {i}"),
        }
    }
}

impl<T> IndexMut<usize> for Mat4<T> {
    fn index_mut(&mut self, i: usize) -> &mut Vec4<T> {
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            3 => &mut self.w,
            _ => panic!("Mat4 column index out of range: {i}"),
        }
    }
}

// Matrix-matrix

impl<T: Number> Add for Mat4<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.zip_cols(rhs, |a, b| a + b)
    }
}

impl<T: Number> Sub for Mat4<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.zip_cols(rhs, |a, b| a - b)
    }
}

impl<T: Number> Mul for Mat4<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::from_cols(self * rhs.x, self * rhs.y, self * rhs.z, self * rhs.w)
    }
}

/// `a / b` is `a * b.inverse()`.
impl<T: Number> Div for Mat4<T> {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        self * rhs.inverse()
    }
}

impl<T: Number> AddAssign for Mat4<T> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Number> SubAssign for Mat4<T> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Number> MulAssign for Mat4<T> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<T: Number> DivAssign for Mat4<T> {
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

// Matrix-vector

/// Column vector on the right: `m * v`.
impl<T: Number> Mul<Vec4<T>> for Mat4<T> {
    type Output = Vec4<T>;

    fn mul(self, v: Vec4<T>) -> Vec4<T> {
        Vec4::new(
            self.x.x * v.x + self.y.x * v.y + self.z.x * v.z + self.w.x * v.w,
            self.x.y * v.x + self.y.y * v.y + self.z.y * v.z + self.w.y * v.w,
            self.x.z * v.x + self.y.z * v.y + self.z.z * v.z + self.w.z * v.w,
            self.x.w * v.x + self.y.w * v.y + self.z.w * v.z + self.w.w * v.w,
        )
    }
}

/// Row vector on the left: `v * m`, equal to `m.transpose() * v`.
impl<T: Number> Mul<Mat4<T>> for Vec4<T> {
    type Output = Vec4<T>;

    fn mul(self, m: Mat4<T>) -> Vec4<T> {
        Vec4::new(self.dot(&m.x), self.dot(&m.y), self.dot(&m.z), self.dot(&m.w))
    }
}

// Matrix-scalar

macro_rules! impl_mat_scalar_op {
    ($Op:ident, $op_fn:ident, $OpAssign:ident, $op_assign_fn:ident, $op:tt) => {
        impl<T: Number> $Op<T> for Mat4<T> {
            type Output = Self;

            fn $op_fn(self, s: T) -> Self {
                self.map_cols(|c| c $op s)
            }
        }

        impl<T: Number> $OpAssign<T> for Mat4<T> {
            fn $op_assign_fn(&mut self, s: T) {
                *self = *self $op s;
            }
        }
    };
}

impl_mat_scalar_op!(Add, add, AddAssign, add_assign, +);
impl_mat_scalar_op!(Sub, sub, SubAssign, sub_assign, -);
impl_mat_scalar_op!(Mul, mul, MulAssign, mul_assign, *);
impl_mat_scalar_op!(Div, div, DivAssign, div_assign, /);

macro_rules! impl_scalar_lhs_mat {
    ($($s:ty),+) => {$(
        impl Add<Mat4<$s>> for $s {
            type Output = Mat4<$s>;

            fn add(self, m: Mat4<$s>) -> Mat4<$s> {
                m + self
            }
        }

        impl Sub<Mat4<$s>> for $s {
            type Output = Mat4<$s>;

            fn sub(self, m: Mat4<$s>) -> Mat4<$s> {
                m.map_cols(|c| self - c)
            }
        }

        impl Mul<Mat4<$s>> for $s {
            type Output = Mat4<$s>;

            fn mul(self, m: Mat4<$s>) -> Mat4<$s> {
                m * self
            }
        }

        /// `s / m` is `m.inverse() * s`.
        impl Div<Mat4<$s>> for $s {
            type Output = Mat4<$s>;

            fn div(self, m: Mat4<$s>) -> Mat4<$s> {
                m.inverse() * self
            }
        }
    )+};
}

impl_scalar_lhs_mat!(f32, f64, i32, u32);

/// Rows on separate lines, columns padded to a common width.
impl<T: Scalar> fmt::Display for Mat4<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells: Vec<[String; 4]> = (0..4)
            .map(|r| self.row(r).to_array().map(|v| v.to_string()))
            .collect();
        let widths: Vec<usize> = (0..4)
            .map(|c| cells.iter().map(|row| row[c].len()).max().unwrap_or(0))
            .collect();
        for (r, row) in cells.iter().enumerate() {
            let open = if r == 0 { "[[" } else { " [" };
            let close = if r == 3 { "]]" } else { "]\n" };
            write!(f, "{open}")?;
            for (c, cell) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{cell:>width$}", width = widths[c])?;
            }
            write!(f, "{close}")?;
        }
        Ok(())
    }
}

// SAFETY: `#[repr(C)]` struct of four `#[repr(C)]` float vectors; no padding.
unsafe impl bytemuck::Zeroable for Mat4<f32> {}
unsafe impl bytemuck::Pod for Mat4<f32> {}
unsafe impl bytemuck::Zeroable for Mat4<f64> {}
unsafe impl bytemuck::Pod for Mat4<f64> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::almost_equals;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[rustfmt::skip]
    fn sample() -> Mat4<f64> {
        Mat4::new(
            -5.0, 2.0, 6.0, -8.0,
            1.0, -5.0, 1.0, 8.0,
            7.0, 7.0, -6.0, -7.0,
            1.0, -3.0, 7.0, 4.0,
        )
    }

    #[test]
    fn test_default_is_identity() {
        let m: Mat4<f32> = Mat4::default();
        assert_eq!(m, Mat4::identity());
        assert_eq!(m.row(0), Vec4::new(1.0, 0.0, 0.0, 0.0));
        assert_eq!(m.row(3), Vec4::new(0.0, 0.0, 0.0, 1.0));
    }

    #[test]
    #[rustfmt::skip]
    fn test_row_major_literal() {
        let m = Mat4::new(
            1, 2, 3, 4,
            5, 6, 7, 8,
            9, 10, 11, 12,
            13, 14, 15, 16,
        );
        assert_eq!(m.get(0, 1), 2);
        assert_eq!(m.get(1, 0), 5);
        assert_eq!(m.col(0), Vec4::new(1, 5, 9, 13));
        assert_eq!(m.row(2), Vec4::new(9, 10, 11, 12));
        assert_eq!(Mat4::from_rows(m.to_rows()), m);
    }

    #[test]
    #[rustfmt::skip]
    fn test_multiply() {
        let a = Mat4::new(
            1.0f32, 2.0, 3.0, 4.0,
            5.0, 6.0, 7.0, 8.0,
            9.0, 8.0, 7.0, 6.0,
            5.0, 4.0, 3.0, 2.0,
        );
        let b = Mat4::new(
            -2.0f32, 1.0, 2.0, 3.0,
            3.0, 2.0, 1.0, -1.0,
            4.0, 3.0, 6.0, 5.0,
            1.0, 2.0, 7.0, 8.0,
        );
        let expected = Mat4::new(
            20.0, 22.0, 50.0, 48.0,
            44.0, 54.0, 114.0, 108.0,
            40.0, 58.0, 110.0, 102.0,
            16.0, 26.0, 46.0, 42.0,
        );
        assert_eq!(a * b, expected);
        assert_eq!(a * Mat4::identity(), a);
        assert_eq!(Mat4::identity() * a, a);
    }

    #[test]
    #[rustfmt::skip]
    fn test_multiply_vector() {
        let a = Mat4::new(
            1.0f32, 2.0, 3.0, 4.0,
            2.0, 4.0, 4.0, 2.0,
            8.0, 6.0, 4.0, 1.0,
            0.0, 0.0, 0.0, 1.0,
        );
        let b = Vec4::new(1.0f32, 2.0, 3.0, 1.0);
        assert_eq!(a * b, Vec4::new(18.0, 24.0, 33.0, 1.0));
        assert_eq!(b * a.transpose(), a * b);
    }

    #[test]
    #[rustfmt::skip]
    fn test_transpose() {
        let a = Mat4::new(
            0, 9, 3, 0,
            9, 8, 0, 8,
            1, 8, 5, 3,
            0, 0, 5, 8,
        );
        let expected = Mat4::new(
            0, 9, 1, 0,
            9, 8, 8, 0,
            3, 0, 5, 5,
            0, 8, 3, 8,
        );
        assert_eq!(a.transpose(), expected);
        assert_eq!(Mat4::<i32>::identity().transpose(), Mat4::identity());
    }

    #[test]
    #[rustfmt::skip]
    fn test_determinant() {
        let a = Mat4::new(
            -2.0f32, -8.0, 3.0, 5.0,
            -3.0, 1.0, 7.0, 3.0,
            1.0, 2.0, -9.0, 6.0,
            -6.0, 7.0, 7.0, -9.0,
        );
        assert_eq!(a.determinant(), -4071.0);
        assert_eq!(a.transpose().determinant(), -4071.0);
        // Integer matrices share the same code path.
        let ai = a.to_rows().map(|r| r.map(|v| v as i32));
        assert_eq!(Mat4::from_rows(ai).determinant(), -4071);
    }

    #[test]
    fn test_determinant_matches_nalgebra() {
        let m = sample();
        let na = nalgebra::Matrix4::from_fn(|r, c| m.get(r, c));
        assert_relative_eq!(m.determinant(), na.determinant(), max_relative = 1e-12);
    }

    #[test]
    fn test_inverse_matches_nalgebra() {
        let m = sample();
        let inv = m.inverse();
        let na = nalgebra::Matrix4::from_fn(|r, c| m.get(r, c))
            .try_inverse()
            .unwrap();
        for r in 0..4 {
            for c in 0..4 {
                assert_relative_eq!(inv.get(r, c), na[(r, c)], epsilon = 1e-12);
            }
        }
    }

    #[test]
    #[rustfmt::skip]
    fn test_inverse_known_values() {
        let a = Mat4::new(
            8.0f64, -5.0, 9.0, 2.0,
            7.0, 5.0, 6.0, 1.0,
            -6.0, 0.0, 9.0, 6.0,
            -3.0, 0.0, -9.0, -4.0,
        );
        let expected = Mat4::new(
            -0.15385, -0.15385, -0.28205, -0.53846,
            -0.07692, 0.12308, 0.02564, 0.03077,
            0.35897, 0.35897, 0.43590, 0.92308,
            -0.69231, -0.69231, -0.76923, -1.92308,
        );
        assert!(a.inverse().approx_eq(&expected));

        let b = Mat4::new(
            9.0f64, 3.0, 0.0, 9.0,
            -5.0, -2.0, -6.0, -3.0,
            -4.0, 9.0, 6.0, 4.0,
            -7.0, 6.0, 6.0, 2.0,
        );
        let expected = Mat4::new(
            -0.04074, -0.07778, 0.14444, -0.22222,
            -0.07778, 0.03333, 0.36667, -0.33333,
            -0.02901, -0.14630, -0.10926, 0.12963,
            0.17778, 0.06667, -0.26667, 0.33333,
        );
        assert!(b.inverse().approx_eq(&expected));
    }

    #[test]
    #[rustfmt::skip]
    fn test_product_times_inverse() {
        let a = Mat4::new(
            3.0f64, -9.0, 7.0, 3.0,
            3.0, -8.0, 2.0, -9.0,
            -4.0, 4.0, 4.0, 1.0,
            -6.0, 5.0, -1.0, 1.0,
        );
        let b = Mat4::new(
            8.0f64, 2.0, 2.0, 2.0,
            3.0, -1.0, 7.0, 0.0,
            7.0, 0.0, 5.0, 4.0,
            6.0, -2.0, 0.0, 5.0,
        );
        let c = a * b;
        assert!((c * b.inverse()).approx_eq(&a));
        assert!((c / b).approx_eq(&a));
    }

    #[test]
    fn test_inverse_round_trip() {
        let m = sample();
        assert!(m.inverse().inverse().approx_eq(&m));
        assert!((m * m.inverse()).approx_eq(&Mat4::identity()));
        // Exactly representable inverses survive to the last bit.
        let t = Mat4::translate(0.5f64, -2.0, 8.0);
        assert!(almost_equals(t.inverse().inverse(), t));
        assert!(almost_equals(t * t.inverse(), Mat4::identity()));
        let s = Mat4::scale(2.0f64, 4.0, 0.5);
        assert!(almost_equals(s.inverse().inverse(), s));
        assert!(almost_equals(s * s.inverse(), Mat4::identity()));
    }

    #[test]
    fn test_singular_inverse() {
        let m = Mat4::scale(1.0f64, 0.0, 1.0);
        assert_eq!(m.determinant(), 0.0);
        assert!(m.try_inverse().is_none());
        assert_eq!(m.checked_inverse(), Err(MathError::SingularMatrix));

        let inv = m.inverse();
        assert!(!inv.is_finite());
        for c in 0..4 {
            for v in inv[c] {
                assert!(!v.is_finite());
            }
        }
        assert!(Mat4::<f64>::identity().is_finite());
    }

    #[test]
    fn test_translate() {
        let t = Mat4::translate(5.0f32, -3.0, 2.0);
        let p = Vec4::point(-3.0, 4.0, 5.0);
        assert_eq!(t * p, Vec4::point(2.0, 1.0, 7.0));
        assert_eq!(t.inverse() * p, Vec4::point(-8.0, 7.0, 3.0));

        let v = Vec4::vector(-3.0, 4.0, 5.0);
        assert_eq!(t * v, v);
    }

    #[test]
    fn test_scale() {
        let s = Mat4::scale(2.0f32, 3.0, 4.0);
        let p = Vec4::point(-4.0, 6.0, 8.0);
        assert_eq!(s * p, Vec4::point(-8.0, 18.0, 32.0));
        assert_eq!(s.inverse() * (s * p), Vec4::point(-4.0, 6.0, 8.0));
        assert_eq!(s.inverse() * p, Vec4::point(-2.0, 2.0, 2.0));
        assert_eq!(s * Vec4::vector(-4.0, 6.0, 8.0), Vec4::vector(-8.0, 18.0, 32.0));
        // Reflection is scaling by a negative value.
        assert_eq!(
            Mat4::scale(-1.0f32, 1.0, 1.0) * Vec4::point(2.0, 3.0, 4.0),
            Vec4::point(-2.0, 3.0, 4.0)
        );
    }

    #[test]
    fn test_rotate_x() {
        let p = Vec4::point(0.0f64, 1.0, 0.0);
        let h = 2f64.sqrt() / 2.0;
        let half_quarter = Mat4::rotate_x(PI / 4.0);
        let full_quarter = Mat4::rotate_x(PI / 2.0);
        assert!((half_quarter * p).approx_eq(&Vec4::point(0.0, h, h)));
        assert!((full_quarter * p).approx_eq(&Vec4::point(0.0, 0.0, 1.0)));
        assert!((half_quarter.inverse() * p).approx_eq(&Vec4::point(0.0, h, -h)));
    }

    #[test]
    fn test_rotate_y() {
        let p = Vec4::point(0.0f64, 0.0, 1.0);
        let h = 2f64.sqrt() / 2.0;
        assert!((Mat4::rotate_y(PI / 4.0) * p).approx_eq(&Vec4::point(h, 0.0, h)));
        assert!((Mat4::rotate_y(PI / 2.0) * p).approx_eq(&Vec4::point(1.0, 0.0, 0.0)));
    }

    #[test]
    fn test_rotate_z() {
        let p = Vec4::point(0.0f64, 1.0, 0.0);
        let h = 2f64.sqrt() / 2.0;
        assert!((Mat4::rotate_z(PI / 4.0) * p).approx_eq(&Vec4::point(-h, h, 0.0)));
        assert!((Mat4::rotate_z(PI / 2.0) * p).approx_eq(&Vec4::point(-1.0, 0.0, 0.0)));
    }

    #[test]
    fn test_chained_transforms() {
        let p = Vec4::point(1.0f64, 0.0, 1.0);
        let a = Mat4::rotate_x(PI / 2.0);
        let b = Mat4::scale(5.0, 5.0, 5.0);
        let c = Mat4::translate(10.0, 5.0, 7.0);

        let p2 = a * p;
        assert!(p2.approx_eq(&Vec4::point(1.0, -1.0, 0.0)));
        let p3 = b * p2;
        assert!(p3.approx_eq(&Vec4::point(5.0, -5.0, 0.0)));
        let p4 = c * p3;
        assert!(p4.approx_eq(&Vec4::point(15.0, 0.0, 7.0)));

        // Applied in reverse order.
        assert!((c * b * a * p).approx_eq(&Vec4::point(15.0, 0.0, 7.0)));
    }

    #[test]
    fn test_scalar_arithmetic() {
        let m = Mat4::<i32>::identity();
        assert_eq!((m * 3).get(1, 1), 3);
        assert_eq!((m + 1).get(0, 1), 1);
        assert_eq!((1 - m).get(2, 2), 0);
        assert_eq!((1 - m).get(2, 1), 1);
        assert_eq!(2 * m, m + m);

        let mut f = Mat4::<f64>::identity();
        f *= 4.0;
        f -= Mat4::identity();
        assert_eq!(f, Mat4::from_diagonal(3.0));
        assert!((1.0 / Mat4::<f64>::from_diagonal(2.0)).approx_eq(&Mat4::from_diagonal(0.5)));
    }

    #[test]
    fn test_display() {
        let s = Mat4::<i32>::scale(10, 2, 3).to_string();
        assert_eq!(
            s,
            "[[10 0 0 0]\n [ 0 2 0 0]\n [ 0 0 3 0]\n [ 0 0 0 1]]"
        );
    }
}
