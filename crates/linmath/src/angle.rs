//! Different units for angles.

use crate::scalar::Float;
use approx::{AbsDiffEq, RelativeEq};
use std::{
    cmp::Ordering,
    ops::{Add, Div, Mul, Neg, Sub},
};

/// Represents an angle.
pub trait Angle<F: Float>: Copy {
    /// Creates a zero angle.
    fn zero() -> Self;

    /// Returns the angle as degrees.
    fn as_degrees(self) -> Degrees<F>;

    /// Returns the angle as radians.
    fn as_radians(self) -> Radians<F>;

    /// Returns the value of the angle in degrees.
    fn degrees(self) -> F;

    /// Returns the value of the angle in radians.
    fn radians(self) -> F;
}

/// An angle in degrees.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Degrees<F: Float>(pub F);

/// An angle in radians.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Radians<F: Float>(pub F);

impl<F: Float> Angle<F> for Degrees<F> {
    fn zero() -> Self {
        Self(F::ZERO)
    }

    fn as_degrees(self) -> Degrees<F> {
        self
    }

    fn as_radians(self) -> Radians<F> {
        Radians::from(self)
    }

    fn degrees(self) -> F {
        self.0
    }

    fn radians(self) -> F {
        degrees_to_radians(self.0)
    }
}

impl<F: Float> Angle<F> for Radians<F> {
    fn zero() -> Self {
        Self(F::ZERO)
    }

    fn as_degrees(self) -> Degrees<F> {
        Degrees::from(self)
    }

    fn as_radians(self) -> Radians<F> {
        self
    }

    fn degrees(self) -> F {
        radians_to_degrees(self.0)
    }

    fn radians(self) -> F {
        self.0
    }
}

impl<F: Float> From<Radians<F>> for Degrees<F> {
    fn from(rad: Radians<F>) -> Self {
        Self(radians_to_degrees(rad.0))
    }
}

impl<F: Float> From<Degrees<F>> for Radians<F> {
    fn from(deg: Degrees<F>) -> Self {
        Self(degrees_to_radians(deg.0))
    }
}

macro_rules! impl_angle_ops {
    ($unit:ident, $other:ident, $in_unit:ident) => {
        impl<F: Float> Add for $unit<F> {
            type Output = Self;
            fn add(self, rhs: Self) -> Self {
                Self(self.0 + rhs.0)
            }
        }

        impl<F: Float> Add<$other<F>> for $unit<F> {
            type Output = Self;
            fn add(self, rhs: $other<F>) -> Self {
                Self(self.0 + rhs.$in_unit())
            }
        }

        impl<F: Float> Sub for $unit<F> {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self {
                Self(self.0 - rhs.0)
            }
        }

        impl<F: Float> Sub<$other<F>> for $unit<F> {
            type Output = Self;
            fn sub(self, rhs: $other<F>) -> Self {
                Self(self.0 - rhs.$in_unit())
            }
        }

        impl<F: Float> Mul<F> for $unit<F> {
            type Output = Self;
            fn mul(self, rhs: F) -> Self {
                Self(self.0 * rhs)
            }
        }

        impl<F: Float> Div<F> for $unit<F> {
            type Output = Self;
            fn div(self, rhs: F) -> Self {
                Self(self.0 / rhs)
            }
        }

        impl<F: Float> Neg for $unit<F> {
            type Output = Self;
            fn neg(self) -> Self {
                Self(-self.0)
            }
        }

        impl<F: Float> PartialEq<$other<F>> for $unit<F> {
            fn eq(&self, rhs: &$other<F>) -> bool {
                self.0 == rhs.$in_unit()
            }
        }

        impl<F: Float> PartialOrd<$other<F>> for $unit<F> {
            fn partial_cmp(&self, rhs: &$other<F>) -> Option<Ordering> {
                self.0.partial_cmp(&rhs.$in_unit())
            }
        }

        impl<F: Float> AbsDiffEq for $unit<F> {
            type Epsilon = F;

            fn default_epsilon() -> F {
                F::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: F) -> bool {
                F::abs_diff_eq(&self.0, &other.0, epsilon)
            }
        }

        impl<F: Float> RelativeEq for $unit<F> {
            fn default_max_relative() -> F {
                F::default_max_relative()
            }

            fn relative_eq(&self, other: &Self, epsilon: F, max_relative: F) -> bool {
                F::relative_eq(&self.0, &other.0, epsilon, max_relative)
            }
        }
    };
}

impl_angle_ops!(Degrees, Radians, degrees);
impl_angle_ops!(Radians, Degrees, radians);

pub fn radians_to_degrees<F: Float>(radians: F) -> F {
    radians * F::DEGREES_PER_RADIAN
}

pub fn degrees_to_radians<F: Float>(degrees: F) -> F {
    degrees * F::RADIANS_PER_DEGREE
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f32::consts::PI;

    const EPSILON: f32 = 1e-6;

    #[test]
    fn degrees_to_radians_for_special_angles_work() {
        assert_abs_diff_eq!(Degrees(0.0_f32).radians(), 0.0);

        assert_abs_diff_eq!(Degrees(90.0_f32).radians(), PI / 2.0, epsilon = EPSILON);
        assert_abs_diff_eq!(Degrees(180.0_f32).radians(), PI, epsilon = EPSILON);
        assert_abs_diff_eq!(Degrees(360.0_f32).radians(), 2.0 * PI, epsilon = EPSILON);
        assert_abs_diff_eq!(
            Degrees(-270.0_f32).radians(),
            -3.0 * PI / 2.0,
            epsilon = EPSILON
        );
        assert_abs_diff_eq!(
            Degrees(45.0_f64).radians(),
            std::f64::consts::FRAC_PI_4,
            epsilon = 1e-15
        );
    }

    #[test]
    fn radians_to_degrees_for_special_angles_work() {
        assert_abs_diff_eq!(Radians(0.0_f32).degrees(), 0.0);

        assert_abs_diff_eq!(Radians(PI / 2.0).degrees(), 90.0, epsilon = 1e-4);
        assert_abs_diff_eq!(Radians(PI).degrees(), 180.0, epsilon = 1e-4);
        assert_abs_diff_eq!(Radians(-2.0 * PI).degrees(), -360.0, epsilon = 1e-4);
    }

    #[test]
    fn degree_ops_work() {
        assert_abs_diff_eq!(Degrees(42.0_f32) + Degrees(30.0), Degrees(72.0));
        assert_abs_diff_eq!(Degrees(42.0_f32) - Degrees(30.0), Degrees(12.0));
        assert_abs_diff_eq!(Degrees(42.0_f32) * 2.5, Degrees(105.0));
        assert_abs_diff_eq!(Degrees(42.0_f32) / 4.0, Degrees(10.5));
        assert_abs_diff_eq!(-Degrees(42.0_f32), Degrees(-42.0));
    }

    #[test]
    fn mixed_degree_radian_ops_work() {
        assert_abs_diff_eq!(
            Degrees(45.0_f32) + Radians(PI / 2.0),
            Degrees(135.0),
            epsilon = 1e-4
        );
        assert_abs_diff_eq!(
            Radians(PI / 2.0) - Degrees(45.0_f32),
            Radians(PI / 4.0),
            epsilon = EPSILON
        );

        assert_eq!(Degrees(0.0_f32), Radians(0.0));
        assert!(Degrees(42.0_f32) > Radians(0.0));
        assert!(Radians(PI) < Degrees(360.0_f32));
    }

    #[test]
    fn converting_between_units_round_trips() {
        let angle = Degrees(123.0_f64);
        assert_abs_diff_eq!(angle.as_radians().as_degrees(), angle, epsilon = 1e-12);
        assert_eq!(Radians::<f64>::zero(), Radians(0.0));
    }
}
