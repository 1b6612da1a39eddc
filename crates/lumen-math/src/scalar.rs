//! Scalar traits the vector and matrix types are generic over.
//!
//! Four levels:
//!
//! - [`Scalar`]: anything that can live in a vector (including `bool`
//!   masks): constants and approximate equality.
//! - [`Number`]: scalars with the four arithmetic operators.
//! - [`Signed`]: numbers with negation and `abs`.
//! - [`Float`]: `f32`/`f64`: square roots, powers and trigonometry.

use std::cmp::Ordering;
use std::fmt::{Debug, Display};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// Absolute tolerance used by [`Scalar::approx_eq`] for floating point scalars.
pub const APPROX_EPSILON: f64 = 1e-5;

/// A value that can be stored in a vector or matrix.
pub trait Scalar:
    Copy + PartialEq + PartialOrd + Debug + Display + Default + Send + Sync + 'static
{
    /// Additive identity (`false` for booleans).
    const ZERO: Self;
    /// Multiplicative identity (`true` for booleans).
    const ONE: Self;
    /// Machine epsilon for floats, zero for exact types.
    const EPSILON: Self;

    /// Approximate equality.
    ///
    /// Exact for integers and booleans; floats compare equal when their
    /// absolute difference is strictly below [`APPROX_EPSILON`].
    #[inline]
    fn approx_eq(self, other: Self) -> bool {
        self == other
    }
}

/// A scalar supporting `+ - * /`.
pub trait Number:
    Scalar
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
{
}

/// A number with a sign.
pub trait Signed: Number + Neg<Output = Self> {
    /// Absolute value.
    fn abs(self) -> Self;
}

/// IEEE-754 floating point scalar.
pub trait Float: Signed {
    /// Archimedes' constant.
    const PI: Self;
    /// Positive infinity.
    const INFINITY: Self;

    /// Square root.
    fn sqrt(self) -> Self;
    /// `self` raised to a floating point power.
    fn powf(self, n: Self) -> Self;
    /// Simultaneous sine and cosine.
    fn sin_cos(self) -> (Self, Self);
    /// True if this value is NaN.
    fn is_nan(self) -> bool;
    /// True if this value is neither infinite nor NaN.
    fn is_finite(self) -> bool;
    /// IEEE total ordering (`-NaN < -inf < ... < -0 < +0 < ... < inf < NaN`).
    fn total_cmp(&self, other: &Self) -> Ordering;
    /// Lossy conversion from `f64`.
    fn from_f64(v: f64) -> Self;
    /// Widening conversion to `f64`.
    fn to_f64(self) -> f64;
}

macro_rules! impl_float {
    ($($t:ident),+) => {$(
        impl Scalar for $t {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;
            const EPSILON: Self = $t::EPSILON;

            #[inline]
            fn approx_eq(self, other: Self) -> bool {
                (self - other).abs() < APPROX_EPSILON as $t
            }
        }

        impl Number for $t {}

        impl Signed for $t {
            #[inline]
            fn abs(self) -> Self {
                $t::abs(self)
            }
        }

        impl Float for $t {
            const PI: Self = std::$t::consts::PI;
            const INFINITY: Self = $t::INFINITY;

            #[inline]
            fn sqrt(self) -> Self {
                $t::sqrt(self)
            }

            #[inline]
            fn powf(self, n: Self) -> Self {
                $t::powf(self, n)
            }

            #[inline]
            fn sin_cos(self) -> (Self, Self) {
                $t::sin_cos(self)
            }

            #[inline]
            fn is_nan(self) -> bool {
                $t::is_nan(self)
            }

            #[inline]
            fn is_finite(self) -> bool {
                $t::is_finite(self)
            }

            #[inline]
            fn total_cmp(&self, other: &Self) -> Ordering {
                $t::total_cmp(self, other)
            }

            #[inline]
            fn from_f64(v: f64) -> Self {
                v as $t
            }

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }
        }
    )+};
}

impl_float!(f32, f64);

impl Scalar for i32 {
    const ZERO: Self = 0;
    const ONE: Self = 1;
    const EPSILON: Self = 0;
}

impl Number for i32 {}

impl Signed for i32 {
    #[inline]
    fn abs(self) -> Self {
        i32::abs(self)
    }
}

impl Scalar for u32 {
    const ZERO: Self = 0;
    const ONE: Self = 1;
    const EPSILON: Self = 0;
}

impl Number for u32 {}

impl Scalar for bool {
    const ZERO: Self = false;
    const ONE: Self = true;
    const EPSILON: Self = false;
}
