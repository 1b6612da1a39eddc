//! Fixed-size 2, 3 and 4 component vectors.
//!
//! All three types share one generic definition (generated by
//! [`impl_vector!`]) and differ only in arity and in their named views
//! (`xy`, `rgb`, `xyz`, ...), which are plain accessor methods over the
//! `x, y, z, w` fields.
//!
//! Which operations are available depends on the scalar:
//!
//! | scalar            | available                                      |
//! |-------------------|------------------------------------------------|
//! | any [`Scalar`]    | construction, masks, `clamp`, `approx_eq`      |
//! | [`Number`]        | `+ - * /`, `dot`, `length_squared`             |
//! | [`Signed`]        | negation, `abs`                                |
//! | [`Float`]         | `length`, `normalize`, `reflect`, `total_cmp`  |
//! | `bool`            | `any`, `all`, `not`                            |
//!
//! [`Scalar`]: crate::Scalar
//! [`Number`]: crate::Number
//! [`Signed`]: crate::Signed
//! [`Float`]: crate::Float

/// Clamp for partially ordered scalars (NaN passes through unchanged).
#[inline]
pub(crate) fn clamp_scalar<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo {
        lo
    } else if v > hi {
        hi
    } else {
        v
    }
}

/// Componentwise binary operator between two vectors and between a vector
/// and a scalar, plus the compound-assignment forms.
macro_rules! impl_vector_binop {
    ($V:ident, $Op:ident, $op_fn:ident, $OpAssign:ident, $op_assign_fn:ident, $op:tt, $($f:ident),+) => {
        impl<T: $crate::Number> ::std::ops::$Op for $V<T> {
            type Output = Self;

            #[inline]
            fn $op_fn(self, rhs: Self) -> Self {
                $V { $($f: self.$f $op rhs.$f),+ }
            }
        }

        impl<T: $crate::Number> ::std::ops::$Op<T> for $V<T> {
            type Output = Self;

            #[inline]
            fn $op_fn(self, rhs: T) -> Self {
                $V { $($f: self.$f $op rhs),+ }
            }
        }

        impl<T: $crate::Number> ::std::ops::$OpAssign for $V<T> {
            #[inline]
            fn $op_assign_fn(&mut self, rhs: Self) {
                $(self.$f = self.$f $op rhs.$f;)+
            }
        }

        impl<T: $crate::Number> ::std::ops::$OpAssign<T> for $V<T> {
            #[inline]
            fn $op_assign_fn(&mut self, rhs: T) {
                $(self.$f = self.$f $op rhs;)+
            }
        }
    };
}

/// `scalar op vector` for the concrete numeric scalars.
macro_rules! impl_vector_scalar_lhs {
    ($V:ident, [$($s:ty),+], $($f:ident),+) => {
        impl_vector_scalar_lhs!(@each $V, [$($f),+], $($s),+);
    };
    (@each $V:ident, $fs:tt, $($s:ty),+) => {
        $(impl_vector_scalar_lhs!(@one $V, $s, $fs);)+
    };
    (@one $V:ident, $s:ty, [$($f:ident),+]) => {
        impl ::std::ops::Add<$V<$s>> for $s {
            type Output = $V<$s>;

            #[inline]
            fn add(self, rhs: $V<$s>) -> $V<$s> {
                $V { $($f: self + rhs.$f),+ }
            }
        }

        impl ::std::ops::Sub<$V<$s>> for $s {
            type Output = $V<$s>;

            #[inline]
            fn sub(self, rhs: $V<$s>) -> $V<$s> {
                $V { $($f: self - rhs.$f),+ }
            }
        }

        impl ::std::ops::Mul<$V<$s>> for $s {
            type Output = $V<$s>;

            #[inline]
            fn mul(self, rhs: $V<$s>) -> $V<$s> {
                $V { $($f: self * rhs.$f),+ }
            }
        }

        impl ::std::ops::Div<$V<$s>> for $s {
            type Output = $V<$s>;

            #[inline]
            fn div(self, rhs: $V<$s>) -> $V<$s> {
                $V { $($f: self / rhs.$f),+ }
            }
        }
    };
}

/// Everything a vector type shares, independent of its arity.
macro_rules! impl_vector {
    ($V:ident, $n:literal, $first:ident $(, $rest:ident)*) => {
        impl<T> $V<T> {
            /// Apply `f` to every component.
            #[inline]
            pub fn map<U, F: FnMut(T) -> U>(self, mut f: F) -> $V<U> {
                $V { $first: f(self.$first) $(, $rest: f(self.$rest))* }
            }

            /// Components as an array, in `x, y, z, w` order.
            #[inline]
            pub fn to_array(self) -> [T; $n] {
                [self.$first $(, self.$rest)*]
            }
        }

        impl<T: $crate::Scalar> $V<T> {
            /// Vector with every component set to `s`.
            #[inline]
            pub fn splat(s: T) -> Self {
                $V { $first: s $(, $rest: s)* }
            }

            /// Iterate over the components by value.
            #[inline]
            pub fn iter(&self) -> ::std::array::IntoIter<T, $n> {
                self.to_array().into_iter()
            }

            /// The all-zero vector.
            #[inline]
            pub fn zero() -> Self {
                Self::splat(T::ZERO)
            }

            /// The all-one vector.
            #[inline]
            pub fn one() -> Self {
                Self::splat(T::ONE)
            }

            /// Componentwise [`Scalar::approx_eq`](crate::Scalar::approx_eq).
            #[inline]
            pub fn approx_eq(&self, other: &Self) -> bool {
                self.$first.approx_eq(other.$first) $(&& self.$rest.approx_eq(other.$rest))*
            }

            /// Componentwise `<`.
            #[inline]
            pub fn less_than(&self, other: &Self) -> $V<bool> {
                $V { $first: self.$first < other.$first $(, $rest: self.$rest < other.$rest)* }
            }

            /// Componentwise `<=`.
            #[inline]
            pub fn less_than_equal(&self, other: &Self) -> $V<bool> {
                $V { $first: self.$first <= other.$first $(, $rest: self.$rest <= other.$rest)* }
            }

            /// Componentwise `>`.
            #[inline]
            pub fn greater_than(&self, other: &Self) -> $V<bool> {
                $V { $first: self.$first > other.$first $(, $rest: self.$rest > other.$rest)* }
            }

            /// Componentwise `>=`.
            #[inline]
            pub fn greater_than_equal(&self, other: &Self) -> $V<bool> {
                $V { $first: self.$first >= other.$first $(, $rest: self.$rest >= other.$rest)* }
            }

            /// Componentwise `==`.
            #[inline]
            pub fn equal(&self, other: &Self) -> $V<bool> {
                $V { $first: self.$first == other.$first $(, $rest: self.$rest == other.$rest)* }
            }

            /// Componentwise `!=`.
            #[inline]
            pub fn not_equal(&self, other: &Self) -> $V<bool> {
                $V { $first: self.$first != other.$first $(, $rest: self.$rest != other.$rest)* }
            }

            /// Clamp every component into `[lo, hi]`.
            #[inline]
            pub fn clamp(self, lo: T, hi: T) -> Self {
                self.map(|c| $crate::vec::clamp_scalar(c, lo, hi))
            }
        }

        impl<T: $crate::Number> $V<T> {
            /// Dot product.
            #[inline]
            pub fn dot(&self, other: &Self) -> T {
                self.$first * other.$first $(+ self.$rest * other.$rest)*
            }

            /// Squared Euclidean length.
            #[inline]
            pub fn length_squared(&self) -> T {
                self.dot(self)
            }

            /// Squared distance between two points.
            #[inline]
            pub fn distance_squared(&self, other: &Self) -> T {
                (*self - *other).length_squared()
            }
        }

        impl<T: $crate::Signed> $V<T> {
            /// Componentwise absolute value.
            #[inline]
            pub fn abs(self) -> Self {
                self.map($crate::Signed::abs)
            }
        }

        impl<T: $crate::Float> $V<T> {
            /// Euclidean length.
            #[inline]
            pub fn length(&self) -> T {
                self.length_squared().sqrt()
            }

            /// Unit vector in the same direction.
            ///
            /// A zero-length input yields non-finite components.
            #[inline]
            pub fn normalize(self) -> Self {
                self / self.length()
            }

            /// Distance between two points.
            #[inline]
            pub fn distance(&self, other: &Self) -> T {
                self.distance_squared(other).sqrt()
            }

            /// Reflect `self` about `normal`: `v - n * 2 * dot(v, n)`.
            #[inline]
            pub fn reflect(self, normal: Self) -> Self {
                let two = T::ONE + T::ONE;
                self - normal * two * self.dot(&normal)
            }

            /// Lexicographic IEEE total ordering, usable for sorting float vectors.
            #[inline]
            pub fn total_cmp(&self, other: &Self) -> ::std::cmp::Ordering {
                self.$first.total_cmp(&other.$first)
                    $(.then_with(|| self.$rest.total_cmp(&other.$rest)))*
            }
        }

        impl $V<bool> {
            /// True if any component is set.
            #[inline]
            pub fn any(self) -> bool {
                self.$first $(|| self.$rest)*
            }

            /// True if every component is set.
            #[inline]
            pub fn all(self) -> bool {
                self.$first $(&& self.$rest)*
            }

            /// Componentwise logical negation.
            #[inline]
            pub fn not(self) -> Self {
                self.map(|b| !b)
            }
        }

        impl<T: $crate::Signed> ::std::ops::Neg for $V<T> {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self {
                $V { $first: -self.$first $(, $rest: -self.$rest)* }
            }
        }

        impl_vector_binop!($V, Add, add, AddAssign, add_assign, +, $first $(, $rest)*);
        impl_vector_binop!($V, Sub, sub, SubAssign, sub_assign, -, $first $(, $rest)*);
        impl_vector_binop!($V, Mul, mul, MulAssign, mul_assign, *, $first $(, $rest)*);
        impl_vector_binop!($V, Div, div, DivAssign, div_assign, /, $first $(, $rest)*);
        impl_vector_scalar_lhs!($V, [f32, f64, i32, u32], $first $(, $rest)*);

        impl<T> From<[T; $n]> for $V<T> {
            #[inline]
            fn from(a: [T; $n]) -> Self {
                let [$first $(, $rest)*] = a;
                $V { $first $(, $rest)* }
            }
        }

        impl<T> From<$V<T>> for [T; $n] {
            #[inline]
            fn from(v: $V<T>) -> Self {
                v.to_array()
            }
        }

        impl<T> IntoIterator for $V<T> {
            type Item = T;
            type IntoIter = ::std::array::IntoIter<T, $n>;

            #[inline]
            fn into_iter(self) -> Self::IntoIter {
                self.to_array().into_iter()
            }
        }

        impl<T: ::std::fmt::Display> ::std::fmt::Display for $V<T> {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "<{}", self.$first)?;
                $(write!(f, " {}", self.$rest)?;)*
                write!(f, ">")
            }
        }

        // SAFETY: `#[repr(C)]` struct whose fields are all the same float type,
        // so there is no padding and every bit pattern is valid.
        unsafe impl ::bytemuck::Zeroable for $V<f32> {}
        unsafe impl ::bytemuck::Pod for $V<f32> {}
        unsafe impl ::bytemuck::Zeroable for $V<f64> {}
        unsafe impl ::bytemuck::Pod for $V<f64> {}
    };
}

mod vec2;
mod vec3;
mod vec4;

pub use vec2::Vec2;
pub use vec3::Vec3;
pub use vec4::Vec4;
