//! Utility macros.
//!
//! The generic parameters of each implementation are given in brackets, e.g.
//! `[T: Scalar, P: Packing]`, and are spliced into every generated `impl`.

macro_rules! impl_binop {
    (
        $op:ident, $method:ident, [$($gen:tt)*], $tl:ty, $tr:ty, $to:ty,
        |$lhs:ident, $rhs:ident| $body:block
    ) => {
        impl<'a, $($gen)*> ::std::ops::$op<&'a $tr> for &'a $tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: &'a $tr) -> Self::Output {
                let $lhs = self;
                let $rhs = rhs;
                $body
            }
        }

        impl<$($gen)*> ::std::ops::$op<$tr> for &$tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: $tr) -> Self::Output {
                ::std::ops::$op::$method(self, &rhs)
            }
        }

        impl<'a, $($gen)*> ::std::ops::$op<&'a $tr> for $tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: &'a $tr) -> Self::Output {
                ::std::ops::$op::$method(&self, rhs)
            }
        }

        impl<$($gen)*> ::std::ops::$op<$tr> for $tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: $tr) -> Self::Output {
                ::std::ops::$op::$method(&self, &rhs)
            }
        }
    };
}

macro_rules! impl_unary_op {
    ($op:ident, $method:ident, [$($gen:tt)*], $t:ty, $to:ty, |$this:ident| $body:block) => {
        impl<$($gen)*> ::std::ops::$op for &$t {
            type Output = $to;

            #[inline]
            fn $method(self) -> Self::Output {
                let $this = self;
                $body
            }
        }

        impl<$($gen)*> ::std::ops::$op for $t {
            type Output = $to;

            #[inline]
            fn $method(self) -> Self::Output {
                ::std::ops::$op::$method(&self)
            }
        }
    };
}

macro_rules! impl_binop_assign {
    ($op:ident, $method:ident, [$($gen:tt)*], $tl:ty, $tr:ty, |$lhs:ident, $rhs:ident| $body:block) => {
        impl<$($gen)*> ::std::ops::$op<&$tr> for $tl {
            #[inline]
            fn $method(&mut self, rhs: &$tr) {
                let $lhs = self;
                let $rhs = rhs;
                $body
            }
        }

        impl<$($gen)*> ::std::ops::$op<$tr> for $tl {
            #[inline]
            fn $method(&mut self, rhs: $tr) {
                ::std::ops::$op::$method(self, &rhs);
            }
        }
    };
}

macro_rules! impl_abs_diff_eq {
    ([$($gen:tt)*], $t:ty, $eps:ty, |$arg1:ident, $arg2:ident, $arg3:ident| $body:block) => {
        impl<$($gen)*> ::approx::AbsDiffEq for $t {
            type Epsilon = $eps;

            fn default_epsilon() -> Self::Epsilon {
                <$eps as ::approx::AbsDiffEq>::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
                let $arg1 = self;
                let $arg2 = other;
                let $arg3 = epsilon;
                $body
            }
        }
    };
}

macro_rules! impl_relative_eq {
    ([$($gen:tt)*], $t:ty, $eps:ty, |$arg1:ident, $arg2:ident, $arg3:ident, $arg4:ident| $body:block) => {
        impl<$($gen)*> ::approx::RelativeEq for $t {
            fn default_max_relative() -> Self::Epsilon {
                <$eps as ::approx::RelativeEq>::default_max_relative()
            }

            fn relative_eq(
                &self,
                other: &Self,
                epsilon: Self::Epsilon,
                max_relative: Self::Epsilon,
            ) -> bool {
                let $arg1 = self;
                let $arg2 = other;
                let $arg3 = epsilon;
                let $arg4 = max_relative;
                $body
            }
        }
    };
}

/// Implements the operators with a primitive scalar on the left-hand side for
/// the given generic type. These cannot be written generically over the
/// scalar, so one set is generated per primitive.
macro_rules! impl_scalar_lhs_ops {
    ($t:ident; $($scalar:ty),* $(,)?) => {
        $(
            impl_binop!(Add, add, [P: $crate::packing::Packing], $scalar, $t<$scalar, P>, $t<$scalar, P>, |a, b| {
                b.mapped(|c| *a + c)
            });

            impl_binop!(Sub, sub, [P: $crate::packing::Packing], $scalar, $t<$scalar, P>, $t<$scalar, P>, |a, b| {
                b.mapped(|c| *a - c)
            });

            impl_binop!(Mul, mul, [P: $crate::packing::Packing], $scalar, $t<$scalar, P>, $t<$scalar, P>, |a, b| {
                b.mapped(|c| *a * c)
            });

            impl_binop!(Div, div, [P: $crate::packing::Packing], $scalar, $t<$scalar, P>, $t<$scalar, P>, |a, b| {
                b.mapped(|c| *a / c)
            });
        )*
    };
}

/// Like [`impl_scalar_lhs_ops`], but only with multiplication, which is the
/// only scalar-on-the-left operation that is defined for matrices.
macro_rules! impl_scalar_lhs_mul {
    ($t:ident; $($scalar:ty),* $(,)?) => {
        $(
            impl_binop!(Mul, mul, [P: $crate::packing::Packing], $scalar, $t<$scalar, P>, $t<$scalar, P>, |a, b| {
                b.mapped(|c| *a * c)
            });
        )*
    };
}
