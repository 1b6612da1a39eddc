use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use super::Vec3;

/// A 2-component vector. Also viewed as a size (`w`, `h`).
#[repr(C)]
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Vec2<T> {
    /// First component.
    pub x: T,
    /// Second component.
    pub y: T,
}

impl_vector!(Vec2, 2, x, y);

impl<T> Vec2<T> {
    /// Create a vector from its components.
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T: Copy> Vec2<T> {
    /// Width view of `x`.
    #[inline]
    pub fn w(&self) -> T {
        self.x
    }

    /// Height view of `y`.
    #[inline]
    pub fn h(&self) -> T {
        self.y
    }

    /// The vector with its components exchanged (`yx`).
    #[inline]
    pub fn swap(self) -> Self {
        Self::new(self.y, self.x)
    }

    /// Append a third component.
    #[inline]
    pub fn extend(self, z: T) -> Vec3<T> {
        Vec3::new(self.x, self.y, z)
    }
}

impl<T: crate::Scalar> Vec2<T> {
    /// `(1, 0)`.
    #[inline]
    pub fn unit_x() -> Self {
        Self::new(T::ONE, T::ZERO)
    }

    /// `(0, 1)`.
    #[inline]
    pub fn unit_y() -> Self {
        Self::new(T::ZERO, T::ONE)
    }
}

impl<T> Index<usize> for Vec2<T> {
    type Output = T;

    fn index(&self, i: usize) -> &T {
        match i {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("Vec2 index out of range: {i}"),
        }
    }
}

impl<T> IndexMut<usize> for Vec2<T> {
    fn index_mut(&mut self, i: usize) -> &mut T {
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            _ => panic!("Vec2 index out of range: {i}"),
        }
    }
}
