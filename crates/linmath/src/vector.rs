//! Vectors.

use crate::{
    packing::{Aligned, Packed, Packing, Storage},
    scalar::Scalar,
};
use bytemuck::{Pod, Zeroable};
use num_traits::AsPrimitive;
use std::{
    array, fmt,
    ops::{Index, IndexMut, Neg},
};

/// A 1-dimensional vector.
#[repr(transparent)]
#[derive(Clone, Copy)]
pub struct Vector1<T: Scalar, P: Packing = Packed> {
    storage: P::Storage1<T>,
}

/// A 2-dimensional vector.
#[repr(transparent)]
#[derive(Clone, Copy)]
pub struct Vector2<T: Scalar, P: Packing = Packed> {
    storage: P::Storage2<T>,
}

/// A 3-dimensional vector.
///
/// With the [`Aligned`] layout the vector is padded to the size of four
/// components, e.g. 16 bytes for `f32`.
#[repr(transparent)]
#[derive(Clone, Copy)]
pub struct Vector3<T: Scalar, P: Packing = Packed> {
    storage: P::Storage3<T>,
}

/// A 4-dimensional vector.
#[repr(transparent)]
#[derive(Clone, Copy)]
pub struct Vector4<T: Scalar, P: Packing = Packed> {
    storage: P::Storage4<T>,
}

/// Implements everything the vector types have in common.
macro_rules! impl_vector {
    ($name:ident, $n:literal, $storage:ident) => {
        impl<T: Scalar, P: Packing> $name<T, P> {
            /// The number of components.
            pub const LEN: usize = $n;

            /// Creates a vector with the given components.
            #[inline]
            pub fn from_array(array: [T; $n]) -> Self {
                Self {
                    storage: <P::$storage<T> as Storage<T, $n>>::from_array(array),
                }
            }

            /// Creates a vector with all components set to the given value.
            #[inline]
            pub fn same(value: T) -> Self {
                Self::from_array([value; $n])
            }

            /// Creates a vector with all zeros.
            #[inline]
            pub fn zeros() -> Self {
                Self::same(T::ZERO)
            }

            #[inline]
            pub fn as_array(&self) -> &[T; $n] {
                self.storage.as_array()
            }

            #[inline]
            pub fn as_array_mut(&mut self) -> &mut [T; $n] {
                self.storage.as_array_mut()
            }

            #[inline]
            pub fn to_array(self) -> [T; $n] {
                *self.as_array()
            }

            #[inline]
            pub fn as_slice(&self) -> &[T] {
                self.as_array()
            }

            /// The layout of this vector type.
            #[inline]
            pub fn packing_mode(&self) -> crate::packing::PackingMode {
                P::MODE
            }

            /// Computes the dot product of this vector with another.
            #[inline]
            pub fn dot(&self, other: &Self) -> T {
                self.as_array()
                    .iter()
                    .zip(other.as_array())
                    .fold(T::ZERO, |acc, (&a, &b)| acc + a * b)
            }

            /// Computes the squared length of the vector.
            #[inline]
            pub fn length_squared(&self) -> T {
                self.dot(self)
            }

            /// Computes the length of the vector. For integer scalars the
            /// result is truncated.
            #[inline]
            pub fn length(&self) -> T {
                self.length_squared().square_root()
            }

            /// Divides the vector by its length. A zero vector gives NaN
            /// components for floats and panics for integers.
            #[inline]
            pub fn normalized(&self) -> Self {
                *self / self.length()
            }

            /// Creates a new vector by applying the given closure to each
            /// component.
            #[inline]
            pub fn mapped<U: Scalar>(&self, f: impl FnMut(T) -> U) -> $name<U, P> {
                $name::from_array(self.as_array().map(f))
            }

            #[inline]
            fn zip_map(&self, other: &Self, mut f: impl FnMut(T, T) -> T) -> Self {
                let (a, b) = (self.as_array(), other.as_array());
                Self::from_array(array::from_fn(|i| f(a[i], b[i])))
            }

            /// Converts every component to the scalar type `U` with `as`
            /// semantics and stores the result with layout `Q`. Narrowing
            /// conversions truncate or saturate like `as` does.
            #[inline]
            pub fn cast<U: Scalar, Q: Packing>(&self) -> $name<U, Q>
            where
                T: AsPrimitive<U>,
            {
                $name::from_array(self.as_array().map(AsPrimitive::as_))
            }

            /// Copies the vector into the layout `Q`.
            #[inline]
            pub fn repacked<Q: Packing>(&self) -> $name<T, Q> {
                $name::from_array(*self.as_array())
            }

            #[inline]
            pub fn packed(&self) -> $name<T, Packed> {
                self.repacked()
            }

            #[inline]
            pub fn aligned(&self) -> $name<T, Aligned> {
                self.repacked()
            }

            /// Creates a 1-dimensional vector from the component at the given
            /// index.
            ///
            /// # Panics
            /// If the index is out of range.
            #[inline]
            pub fn swizzle1(&self, i: usize) -> Vector1<T, P> {
                Vector1::from_array([self[i]])
            }

            /// Creates a 2-dimensional vector from the components at the
            /// given indices, which may repeat and come in any order.
            ///
            /// # Panics
            /// If any index is out of range.
            #[inline]
            pub fn swizzle2(&self, i: usize, j: usize) -> Vector2<T, P> {
                Vector2::from_array([self[i], self[j]])
            }

            /// Like [`Self::swizzle2`], for three components.
            #[inline]
            pub fn swizzle3(&self, i: usize, j: usize, k: usize) -> Vector3<T, P> {
                Vector3::from_array([self[i], self[j], self[k]])
            }

            /// Like [`Self::swizzle2`], for four components.
            #[inline]
            pub fn swizzle4(&self, i: usize, j: usize, k: usize, l: usize) -> Vector4<T, P> {
                Vector4::from_array([self[i], self[j], self[k], self[l]])
            }
        }

        impl<T: Scalar, P: Packing> Default for $name<T, P> {
            fn default() -> Self {
                Self::zeros()
            }
        }

        impl<T: Scalar, P: Packing> PartialEq for $name<T, P> {
            #[inline]
            fn eq(&self, other: &Self) -> bool {
                self.as_array() == other.as_array()
            }
        }

        impl<T: Scalar, P: Packing> fmt::Debug for $name<T, P> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let mut tuple = f.debug_tuple(stringify!($name));
                for component in self.as_array() {
                    tuple.field(component);
                }
                tuple.finish()
            }
        }

        impl<T: Scalar, P: Packing> From<[T; $n]> for $name<T, P> {
            #[inline]
            fn from(array: [T; $n]) -> Self {
                Self::from_array(array)
            }
        }

        impl<T: Scalar, P: Packing> From<$name<T, P>> for [T; $n] {
            #[inline]
            fn from(vector: $name<T, P>) -> Self {
                vector.to_array()
            }
        }

        impl<T: Scalar, P: Packing> Index<usize> for $name<T, P> {
            type Output = T;

            #[inline]
            fn index(&self, index: usize) -> &Self::Output {
                &self.as_array()[index]
            }
        }

        impl<T: Scalar, P: Packing> IndexMut<usize> for $name<T, P> {
            #[inline]
            fn index_mut(&mut self, index: usize) -> &mut Self::Output {
                &mut self.as_array_mut()[index]
            }
        }

        // SAFETY: The storage is made of `Pod` scalars and a zero-sized
        // marker, so all zeros is a valid bit pattern.
        unsafe impl<T: Scalar, P: Packing> Zeroable for $name<T, P> {}

        // SAFETY: Packed storage is a plain array of `Pod` scalars with no
        // padding.
        unsafe impl<T: Scalar> Pod for $name<T, Packed> {}

        impl_binop!(Add, add, [T: Scalar, P: Packing], $name<T, P>, $name<T, P>, $name<T, P>, |a, b| {
            a.zip_map(b, |x, y| x + y)
        });

        impl_binop!(Sub, sub, [T: Scalar, P: Packing], $name<T, P>, $name<T, P>, $name<T, P>, |a, b| {
            a.zip_map(b, |x, y| x - y)
        });

        impl_binop!(Mul, mul, [T: Scalar, P: Packing], $name<T, P>, $name<T, P>, $name<T, P>, |a, b| {
            a.zip_map(b, |x, y| x * y)
        });

        impl_binop!(Div, div, [T: Scalar, P: Packing], $name<T, P>, $name<T, P>, $name<T, P>, |a, b| {
            a.zip_map(b, |x, y| x / y)
        });

        impl_binop!(Add, add, [T: Scalar, P: Packing], $name<T, P>, T, $name<T, P>, |a, b| {
            a.mapped(|x| x + *b)
        });

        impl_binop!(Sub, sub, [T: Scalar, P: Packing], $name<T, P>, T, $name<T, P>, |a, b| {
            a.mapped(|x| x - *b)
        });

        impl_binop!(Mul, mul, [T: Scalar, P: Packing], $name<T, P>, T, $name<T, P>, |a, b| {
            a.mapped(|x| x * *b)
        });

        impl_binop!(Div, div, [T: Scalar, P: Packing], $name<T, P>, T, $name<T, P>, |a, b| {
            a.mapped(|x| x / *b)
        });

        impl_binop_assign!(AddAssign, add_assign, [T: Scalar, P: Packing], $name<T, P>, $name<T, P>, |a, b| {
            *a = *a + *b;
        });

        impl_binop_assign!(SubAssign, sub_assign, [T: Scalar, P: Packing], $name<T, P>, $name<T, P>, |a, b| {
            *a = *a - *b;
        });

        impl_binop_assign!(MulAssign, mul_assign, [T: Scalar, P: Packing], $name<T, P>, $name<T, P>, |a, b| {
            *a = *a * *b;
        });

        impl_binop_assign!(DivAssign, div_assign, [T: Scalar, P: Packing], $name<T, P>, $name<T, P>, |a, b| {
            *a = *a / *b;
        });

        impl_binop_assign!(AddAssign, add_assign, [T: Scalar, P: Packing], $name<T, P>, T, |a, b| {
            *a = *a + *b;
        });

        impl_binop_assign!(SubAssign, sub_assign, [T: Scalar, P: Packing], $name<T, P>, T, |a, b| {
            *a = *a - *b;
        });

        impl_binop_assign!(MulAssign, mul_assign, [T: Scalar, P: Packing], $name<T, P>, T, |a, b| {
            *a = *a * *b;
        });

        impl_binop_assign!(DivAssign, div_assign, [T: Scalar, P: Packing], $name<T, P>, T, |a, b| {
            *a = *a / *b;
        });

        impl_unary_op!(Neg, neg, [T: Scalar + Neg<Output = T>, P: Packing], $name<T, P>, $name<T, P>, |val| {
            val.mapped(|x| -x)
        });

        impl_scalar_lhs_ops!($name; i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

        impl_abs_diff_eq!([F: crate::Float, P: Packing], $name<F, P>, F, |a, b, epsilon| {
            a.as_array()
                .iter()
                .zip(b.as_array())
                .all(|(x, y)| ::approx::AbsDiffEq::abs_diff_eq(x, y, epsilon))
        });

        impl_relative_eq!([F: crate::Float, P: Packing], $name<F, P>, F, |a, b, epsilon, max_relative| {
            a.as_array()
                .iter()
                .zip(b.as_array())
                .all(|(x, y)| ::approx::RelativeEq::relative_eq(x, y, epsilon, max_relative))
        });
    };
}

macro_rules! impl_component_accessors {
    ($name:ident; $($idx:literal => $c:ident, $c_mut:ident, $alias:ident, $alias_mut:ident);* $(;)?) => {
        impl<T: Scalar, P: Packing> $name<T, P> {
            $(
                #[inline]
                pub fn $c(&self) -> T {
                    self.as_array()[$idx]
                }

                #[inline]
                pub fn $c_mut(&mut self) -> &mut T {
                    &mut self.as_array_mut()[$idx]
                }

                #[doc = concat!("Colour alias for [`Self::", stringify!($c), "`].")]
                #[inline]
                pub fn $alias(&self) -> T {
                    self.$c()
                }

                #[doc = concat!("Colour alias for [`Self::", stringify!($c_mut), "`].")]
                #[inline]
                pub fn $alias_mut(&mut self) -> &mut T {
                    self.$c_mut()
                }
            )*
        }
    };
}

impl_vector!(Vector1, 1, Storage1);
impl_vector!(Vector2, 2, Storage2);
impl_vector!(Vector3, 3, Storage3);
impl_vector!(Vector4, 4, Storage4);

impl_component_accessors!(Vector1;
    0 => x, x_mut, r, r_mut;
);
impl_component_accessors!(Vector2;
    0 => x, x_mut, r, r_mut;
    1 => y, y_mut, g, g_mut;
);
impl_component_accessors!(Vector3;
    0 => x, x_mut, r, r_mut;
    1 => y, y_mut, g, g_mut;
    2 => z, z_mut, b, b_mut;
);
impl_component_accessors!(Vector4;
    0 => x, x_mut, r, r_mut;
    1 => y, y_mut, g, g_mut;
    2 => z, z_mut, b, b_mut;
    3 => w, w_mut, a, a_mut;
);

impl<T: Scalar, P: Packing> Vector1<T, P> {
    /// Creates a new vector with the given component.
    #[inline]
    pub fn new(x: T) -> Self {
        Self::from_array([x])
    }

    /// Creates a 2-dimensional vector by appending the given component.
    #[inline]
    pub fn extended(&self, y: T) -> Vector2<T, P> {
        Vector2::new(self.x(), y)
    }
}

impl<T: Scalar, P: Packing> Vector2<T, P> {
    /// Creates a new vector with the given components.
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        Self::from_array([x, y])
    }

    #[inline]
    pub fn unit_x() -> Self {
        Self::new(T::ONE, T::ZERO)
    }

    #[inline]
    pub fn unit_y() -> Self {
        Self::new(T::ZERO, T::ONE)
    }

    /// Creates a 3-dimensional vector by appending the given component.
    #[inline]
    pub fn extended(&self, z: T) -> Vector3<T, P> {
        Vector3::from_xy_z(*self, z)
    }
}

impl<T: Scalar, P: Packing> Vector3<T, P> {
    /// Creates a new vector with the given components.
    #[inline]
    pub fn new(x: T, y: T, z: T) -> Self {
        Self::from_array([x, y, z])
    }

    #[inline]
    pub fn unit_x() -> Self {
        Self::new(T::ONE, T::ZERO, T::ZERO)
    }

    #[inline]
    pub fn unit_y() -> Self {
        Self::new(T::ZERO, T::ONE, T::ZERO)
    }

    #[inline]
    pub fn unit_z() -> Self {
        Self::new(T::ZERO, T::ZERO, T::ONE)
    }

    #[inline]
    pub fn from_xy_z(xy: Vector2<T, P>, z: T) -> Self {
        Self::new(xy.x(), xy.y(), z)
    }

    #[inline]
    pub fn from_x_yz(x: T, yz: Vector2<T, P>) -> Self {
        Self::new(x, yz.x(), yz.y())
    }

    /// Returns the first two components.
    #[inline]
    pub fn xy(&self) -> Vector2<T, P> {
        Vector2::new(self.x(), self.y())
    }

    /// Creates a 4-dimensional vector by appending the given component.
    #[inline]
    pub fn extended(&self, w: T) -> Vector4<T, P> {
        Vector4::from_xyz_w(*self, w)
    }

    /// Computes the right-handed cross product of this vector with another.
    #[inline]
    pub fn cross(&self, other: &Self) -> Self {
        let [x, y, z] = *self.as_array();
        let [ox, oy, oz] = *other.as_array();
        Self::new(y * oz - z * oy, z * ox - x * oz, x * oy - y * ox)
    }
}

impl<T: Scalar, P: Packing> Vector4<T, P> {
    /// Creates a new vector with the given components.
    #[inline]
    pub fn new(x: T, y: T, z: T, w: T) -> Self {
        Self::from_array([x, y, z, w])
    }

    #[inline]
    pub fn unit_x() -> Self {
        Self::new(T::ONE, T::ZERO, T::ZERO, T::ZERO)
    }

    #[inline]
    pub fn unit_y() -> Self {
        Self::new(T::ZERO, T::ONE, T::ZERO, T::ZERO)
    }

    #[inline]
    pub fn unit_z() -> Self {
        Self::new(T::ZERO, T::ZERO, T::ONE, T::ZERO)
    }

    #[inline]
    pub fn unit_w() -> Self {
        Self::new(T::ZERO, T::ZERO, T::ZERO, T::ONE)
    }

    #[inline]
    pub fn from_xy_z_w(xy: Vector2<T, P>, z: T, w: T) -> Self {
        Self::new(xy.x(), xy.y(), z, w)
    }

    #[inline]
    pub fn from_x_yz_w(x: T, yz: Vector2<T, P>, w: T) -> Self {
        Self::new(x, yz.x(), yz.y(), w)
    }

    #[inline]
    pub fn from_x_y_zw(x: T, y: T, zw: Vector2<T, P>) -> Self {
        Self::new(x, y, zw.x(), zw.y())
    }

    #[inline]
    pub fn from_xy_zw(xy: Vector2<T, P>, zw: Vector2<T, P>) -> Self {
        Self::new(xy.x(), xy.y(), zw.x(), zw.y())
    }

    #[inline]
    pub fn from_xyz_w(xyz: Vector3<T, P>, w: T) -> Self {
        Self::new(xyz.x(), xyz.y(), xyz.z(), w)
    }

    #[inline]
    pub fn from_x_yzw(x: T, yzw: Vector3<T, P>) -> Self {
        Self::new(x, yzw.x(), yzw.y(), yzw.z())
    }

    /// Returns the first two components.
    #[inline]
    pub fn xy(&self) -> Vector2<T, P> {
        Vector2::new(self.x(), self.y())
    }

    /// Returns the first three components.
    #[inline]
    pub fn xyz(&self) -> Vector3<T, P> {
        Vector3::new(self.x(), self.y(), self.z())
    }
}
