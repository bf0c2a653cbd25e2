//! Scalar types that vectors and matrices can hold.

#![allow(clippy::excessive_precision)]

use crate::packing::{Align1, Align2, Align4, Align8, Align16, Align32, AlignMarker};
use bytemuck::Pod;
use num_traits as nt;
use std::fmt::{Debug, Display};

/// A numeric type usable as the component type of a vector or matrix.
///
/// Implemented for all primitive signed and unsigned integers up to 64 bits
/// and for `f32` and `f64`. The associated `AlignN` types hold the alignment
/// that an `N`-component vector of this scalar gets with the
/// [`Aligned`](crate::Aligned) layout.
pub trait Scalar:
    Copy
    + Debug
    + Display
    + Default
    + PartialEq
    + PartialOrd
    + Pod
    + nt::Num
    + nt::NumCast
    + Send
    + Sync
    + 'static
{
    const ZERO: Self;
    const ONE: Self;

    type Align1: AlignMarker;
    type Align2: AlignMarker;
    type Align3: AlignMarker;
    type Align4: AlignMarker;

    /// Computes the square root. Exact for floating point types. For integer
    /// types, the root is truncated towards zero, and the root of a negative
    /// value is zero.
    fn square_root(self) -> Self;
}

/// Gathers traits useful for working with generic floating point scalars.
pub trait Float: Scalar + nt::Float + approx::RelativeEq<Epsilon = Self> {
    const NEG_ONE: Self;
    const TWO: Self;
    const ONE_HALF: Self;
    const SQRT_2: Self;
    const FRAC_1_SQRT_2: Self;
    const PI: Self;
    const TWO_PI: Self;
    const FRAC_PI_2: Self;
    const FRAC_PI_4: Self;
    const FRAC_1_PI: Self;
    const DEGREES_PER_RADIAN: Self;
    const RADIANS_PER_DEGREE: Self;
}

macro_rules! impl_scalar_int {
    ($t:ty, [$a1:ty, $a2:ty, $a3:ty, $a4:ty], |$val:ident| $root:expr) => {
        impl Scalar for $t {
            const ZERO: Self = 0;
            const ONE: Self = 1;

            type Align1 = $a1;
            type Align2 = $a2;
            type Align3 = $a3;
            type Align4 = $a4;

            #[inline]
            fn square_root(self) -> Self {
                let $val = self;
                $root
            }
        }
    };
}

macro_rules! signed_isqrt {
    ($val:expr) => {
        if $val < 0 {
            0
        } else {
            $val.isqrt()
        }
    };
}

macro_rules! impl_scalar_float {
    ($f:tt, [$a1:ty, $a2:ty, $a3:ty, $a4:ty]) => {
        impl Scalar for $f {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;

            type Align1 = $a1;
            type Align2 = $a2;
            type Align3 = $a3;
            type Align4 = $a4;

            #[inline]
            fn square_root(self) -> Self {
                self.sqrt()
            }
        }

        impl Float for $f {
            const NEG_ONE: Self = -1.0;
            const TWO: Self = 2.0;
            const ONE_HALF: Self = 0.5;
            const SQRT_2: Self = std::$f::consts::SQRT_2;
            const FRAC_1_SQRT_2: Self = std::$f::consts::FRAC_1_SQRT_2;
            const PI: Self = std::$f::consts::PI;
            const TWO_PI: Self = 2.0 * std::$f::consts::PI;
            const FRAC_PI_2: Self = std::$f::consts::FRAC_PI_2;
            const FRAC_PI_4: Self = std::$f::consts::FRAC_PI_4;
            const FRAC_1_PI: Self = std::$f::consts::FRAC_1_PI;
            const DEGREES_PER_RADIAN: Self = 57.2957795130823208767981548141051703;
            const RADIANS_PER_DEGREE: Self = 0.0174532925199432957692369076848861271;
        }
    };
}

// A vector of three components is padded to the width of four.
impl_scalar_int!(i8, [Align1, Align2, Align4, Align4], |val| signed_isqrt!(val));
impl_scalar_int!(u8, [Align1, Align2, Align4, Align4], |val| val.isqrt());
impl_scalar_int!(i16, [Align2, Align4, Align8, Align8], |val| signed_isqrt!(val));
impl_scalar_int!(u16, [Align2, Align4, Align8, Align8], |val| val.isqrt());
impl_scalar_int!(i32, [Align4, Align8, Align16, Align16], |val| signed_isqrt!(val));
impl_scalar_int!(u32, [Align4, Align8, Align16, Align16], |val| val.isqrt());
impl_scalar_int!(i64, [Align8, Align16, Align32, Align32], |val| signed_isqrt!(val));
impl_scalar_int!(u64, [Align8, Align16, Align32, Align32], |val| val.isqrt());
impl_scalar_float!(f32, [Align4, Align8, Align16, Align16]);
impl_scalar_float!(f64, [Align8, Align16, Align32, Align32]);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn float_square_root_is_exact() {
        assert_eq!(16.0_f32.square_root(), 4.0);
        assert_abs_diff_eq!(2.0_f64.square_root(), std::f64::consts::SQRT_2);
    }

    #[test]
    fn integer_square_root_truncates() {
        assert_eq!(14_i32.square_root(), 3);
        assert_eq!(16_u8.square_root(), 4);
        assert_eq!(99_u64.square_root(), 9);
    }

    #[test]
    fn integer_square_root_of_negative_is_zero() {
        assert_eq!((-4_i16).square_root(), 0);
        assert_eq!(i64::MIN.square_root(), 0);
    }

    #[test]
    fn integer_square_root_truncates_near_64_bit_limits() {
        assert_eq!(u64::MAX.square_root(), 4_294_967_295);
        assert_eq!((67_108_865_u64 * 67_108_865 - 1).square_root(), 67_108_864);
        assert_eq!(i64::MAX.square_root(), 3_037_000_499);
        assert_eq!(u8::MAX.square_root(), 15);
    }

    #[test]
    fn degree_radian_factors_are_reciprocal() {
        assert_abs_diff_eq!(f64::DEGREES_PER_RADIAN * f64::RADIANS_PER_DEGREE, 1.0);
        assert_relative_eq!(f32::DEGREES_PER_RADIAN, 180.0 * f32::FRAC_1_PI);
    }
}
