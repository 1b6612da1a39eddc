use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use super::{Vec2, Vec3};
use crate::Scalar;

/// A 4-component vector: a homogeneous point/direction or an `r, g, b, a` color.
#[repr(C)]
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Vec4<T> {
    /// First component (red).
    pub x: T,
    /// Second component (green).
    pub y: T,
    /// Third component (blue).
    pub z: T,
    /// Fourth component (alpha); 1 for points, 0 for directions.
    pub w: T,
}

impl_vector!(Vec4, 4, x, y, z, w);

impl<T> Vec4<T> {
    /// Create a vector from its components.
    #[inline]
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self { x, y, z, w }
    }
}

impl<T: Copy> Vec4<T> {
    /// Red channel.
    #[inline]
    pub fn r(&self) -> T {
        self.x
    }

    /// Green channel.
    #[inline]
    pub fn g(&self) -> T {
        self.y
    }

    /// Blue channel.
    #[inline]
    pub fn b(&self) -> T {
        self.z
    }

    /// Alpha channel.
    #[inline]
    pub fn a(&self) -> T {
        self.w
    }

    /// The `x, y, z` prefix.
    #[inline]
    pub fn xyz(&self) -> Vec3<T> {
        Vec3::new(self.x, self.y, self.z)
    }

    /// The `r, g, b` prefix.
    #[inline]
    pub fn rgb(&self) -> Vec3<T> {
        self.xyz()
    }

    /// The `x, y` prefix.
    #[inline]
    pub fn xy(&self) -> Vec2<T> {
        Vec2::new(self.x, self.y)
    }

    /// The `z, w` suffix.
    #[inline]
    pub fn zw(&self) -> Vec2<T> {
        Vec2::new(self.z, self.w)
    }

    /// Overwrite the `x, y, z` prefix, keeping `w`.
    #[inline]
    pub fn set_xyz(&mut self, xyz: Vec3<T>) {
        self.x = xyz.x;
        self.y = xyz.y;
        self.z = xyz.z;
    }

    /// Drop `w`.
    #[inline]
    pub fn truncate(self) -> Vec3<T> {
        self.xyz()
    }

    /// Concatenate two 2-component halves.
    #[inline]
    pub fn from_halves(xy: Vec2<T>, zw: Vec2<T>) -> Self {
        Self::new(xy.x, xy.y, zw.x, zw.y)
    }
}

impl<T: Scalar> Vec4<T> {
    /// Homogeneous point `(x, y, z, 1)`.
    #[inline]
    pub fn point(x: T, y: T, z: T) -> Self {
        Self::new(x, y, z, T::ONE)
    }

    /// Homogeneous direction `(x, y, z, 0)`.
    #[inline]
    pub fn vector(x: T, y: T, z: T) -> Self {
        Self::new(x, y, z, T::ZERO)
    }

    /// `(1, 0, 0, 0)`.
    #[inline]
    pub fn unit_x() -> Self {
        Self::new(T::ONE, T::ZERO, T::ZERO, T::ZERO)
    }

    /// `(0, 1, 0, 0)`.
    #[inline]
    pub fn unit_y() -> Self {
        Self::new(T::ZERO, T::ONE, T::ZERO, T::ZERO)
    }

    /// `(0, 0, 1, 0)`.
    #[inline]
    pub fn unit_z() -> Self {
        Self::new(T::ZERO, T::ZERO, T::ONE, T::ZERO)
    }

    /// `(0, 0, 0, 1)`.
    #[inline]
    pub fn unit_w() -> Self {
        Self::new(T::ZERO, T::ZERO, T::ZERO, T::ONE)
    }
}

/// Widens to a direction (`w = 0`).
impl<T: Scalar> From<Vec3<T>> for Vec4<T> {
    #[inline]
    fn from(v: Vec3<T>) -> Self {
        v.to_vector()
    }
}

impl<T> Index<usize> for Vec4<T> {
    type Output = T;

    fn index(&self, i: usize) -> &T {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            3 => &self.w,
            _ => panic!("Vec4 index out of range: {i}"),
        }
    }
}

impl<T> IndexMut<usize> for Vec4<T> {
    fn index_mut(&mut self, i: usize) -> &mut T {
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            3 => &mut self.w,
            _ => panic!("Vec4 index out of range: {i}"),
        }
    }
}
