use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use super::{Vec2, Vec4};
use crate::{Number, Scalar};

/// A 3-component vector: a point, a direction, or an `r, g, b` color.
#[repr(C)]
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Vec3<T> {
    /// First component (red).
    pub x: T,
    /// Second component (green).
    pub y: T,
    /// Third component (blue).
    pub z: T,
}

impl_vector!(Vec3, 3, x, y, z);

impl<T> Vec3<T> {
    /// Create a vector from its components.
    #[inline]
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }
}

impl<T: Copy> Vec3<T> {
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

    /// Leading two components.
    #[inline]
    pub fn xy(&self) -> Vec2<T> {
        Vec2::new(self.x, self.y)
    }

    /// Build from a 2-component prefix and a trailing `z`.
    #[inline]
    pub fn from_xy(xy: Vec2<T>, z: T) -> Self {
        Self::new(xy.x, xy.y, z)
    }

    /// Append a fourth component.
    #[inline]
    pub fn extend(self, w: T) -> Vec4<T> {
        Vec4::new(self.x, self.y, self.z, w)
    }
}

impl<T: Scalar> Vec3<T> {
    /// `(1, 0, 0)`.
    #[inline]
    pub fn unit_x() -> Self {
        Self::new(T::ONE, T::ZERO, T::ZERO)
    }

    /// `(0, 1, 0)`.
    #[inline]
    pub fn unit_y() -> Self {
        Self::new(T::ZERO, T::ONE, T::ZERO)
    }

    /// `(0, 0, 1)`.
    #[inline]
    pub fn unit_z() -> Self {
        Self::new(T::ZERO, T::ZERO, T::ONE)
    }

    /// Homogeneous point (`w = 1`).
    #[inline]
    pub fn to_point(self) -> Vec4<T> {
        self.extend(T::ONE)
    }

    /// Homogeneous direction (`w = 0`), unaffected by translation.
    #[inline]
    pub fn to_vector(self) -> Vec4<T> {
        self.extend(T::ZERO)
    }
}

impl<T: Number> Vec3<T> {
    /// Cross product.
    #[inline]
    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }
}

/// Drops `w`.
impl<T> From<Vec4<T>> for Vec3<T> {
    #[inline]
    fn from(v: Vec4<T>) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl<T> Index<usize> for Vec3<T> {
    type Output = T;

    fn index(&self, i: usize) -> &T {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vec3 index out of range: {i}"),
        }
    }
}

impl<T> IndexMut<usize> for Vec3<T> {
    fn index_mut(&mut self, i: usize) -> &mut T {
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("Vec3 index out of range: {i}"),
        }
    }
}
