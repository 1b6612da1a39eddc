//! Float comparison by distance in units in the last place (ULPs).
//!
//! Two finite floats are "almost equal" when at most `max_ulps`
//! representable values lie between them. The comparison works on the raw
//! bit patterns, mapped from sign-and-magnitude to a biased unsigned form so
//! that the ordering of the integers matches the ordering of the floats and
//! `+0.0`/`-0.0` land on the same value.

use crate::{Mat4, Vec2, Vec3, Vec4};

/// Default tolerance for [`almost_equals`].
pub const DEFAULT_MAX_ULPS: u32 = 4;

/// Types that can be compared by ULP distance.
pub trait Ulps: Copy {
    /// True if every float in `self` is within `max_ulps` of its counterpart
    /// in `other`. Any NaN compares unequal.
    fn ulps_eq(self, other: Self, max_ulps: u32) -> bool;
}

/// [`Ulps::ulps_eq`] with [`DEFAULT_MAX_ULPS`].
#[inline]
pub fn almost_equals<T: Ulps>(a: T, b: T) -> bool {
    a.ulps_eq(b, DEFAULT_MAX_ULPS)
}

macro_rules! impl_ulps_float {
    ($f:ty, $bits:ty, $name:ident) => {
        /// Number of representable values between `a` and `b`, or `None` if
        /// either is NaN.
        pub fn $name(a: $f, b: $f) -> Option<$bits> {
            if a.is_nan() || b.is_nan() {
                return None;
            }
            const SIGN: $bits = 1 << (<$bits>::BITS - 1);
            let biased = |sam: $bits| {
                if sam & SIGN != 0 {
                    (!sam).wrapping_add(1)
                } else {
                    SIGN | sam
                }
            };
            Some(biased(a.to_bits()).abs_diff(biased(b.to_bits())))
        }

        impl Ulps for $f {
            #[inline]
            fn ulps_eq(self, other: Self, max_ulps: u32) -> bool {
                $name(self, other).is_some_and(|d| d <= <$bits>::from(max_ulps))
            }
        }
    };
}

impl_ulps_float!(f32, u32, ulps_distance_f32);
impl_ulps_float!(f64, u64, ulps_distance_f64);

macro_rules! impl_ulps_composite {
    ($T:ident, $($f:ident),+) => {
        impl<F: Ulps> Ulps for $T<F> {
            #[inline]
            fn ulps_eq(self, other: Self, max_ulps: u32) -> bool {
                $(self.$f.ulps_eq(other.$f, max_ulps))&&+
            }
        }
    };
}

impl_ulps_composite!(Vec2, x, y);
impl_ulps_composite!(Vec3, x, y, z);
impl_ulps_composite!(Vec4, x, y, z, w);
impl_ulps_composite!(Mat4, x, y, z, w);
