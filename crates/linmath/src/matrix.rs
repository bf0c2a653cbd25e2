//! Square matrices.
//!
//! Matrices are stored as an array of row vectors. Indexing a matrix with `[]`
//! gives a row, so `m[i][j]` is the element in row `i` and column `j`. Columns
//! are synthesized on demand with `column`.

use crate::{
    packing::{Aligned, Packed, Packing},
    scalar::Scalar,
    vector::{Vector2, Vector3, Vector4},
};
use bytemuck::{Pod, Zeroable};
use num_traits::AsPrimitive;
use std::{
    array, fmt,
    ops::{Index, IndexMut, Neg},
};

/// A 2x2 matrix.
#[repr(transparent)]
#[derive(Clone, Copy)]
pub struct Matrix2<T: Scalar, P: Packing = Packed> {
    rows: [Vector2<T, P>; 2],
}

/// A 3x3 matrix.
///
/// With the [`Aligned`] layout every row is padded to four components, so a
/// `Matrix3<f32, Aligned>` occupies 48 bytes.
#[repr(transparent)]
#[derive(Clone, Copy)]
pub struct Matrix3<T: Scalar, P: Packing = Packed> {
    rows: [Vector3<T, P>; 3],
}

/// A 4x4 matrix.
#[repr(transparent)]
#[derive(Clone, Copy)]
pub struct Matrix4<T: Scalar, P: Packing = Packed> {
    rows: [Vector4<T, P>; 4],
}

macro_rules! impl_matrix {
    ($name:ident, $vec:ident, $n:literal, $n2:literal) => {
        impl<T: Scalar, P: Packing> $name<T, P> {
            /// Creates a matrix with the given rows.
            #[inline]
            pub fn from_rows(rows: [$vec<T, P>; $n]) -> Self {
                Self { rows }
            }

            /// Creates a matrix with the given columns.
            #[inline]
            pub fn from_columns(columns: [$vec<T, P>; $n]) -> Self {
                Self::from_rows(columns).transposed()
            }

            /// Creates a matrix from its elements listed row by row.
            #[inline]
            pub fn from_row_major_array(elements: [T; $n2]) -> Self {
                Self::from_rows(array::from_fn(|i| {
                    $vec::from_array(array::from_fn(|j| elements[i * $n + j]))
                }))
            }

            /// Creates a matrix from an array of rows.
            #[inline]
            pub fn from_row_arrays(rows: [[T; $n]; $n]) -> Self {
                Self::from_rows(rows.map($vec::from_array))
            }

            /// Creates a matrix with the given value on the diagonal and
            /// zeros elsewhere.
            #[inline]
            pub fn scaled_identity(scale: T) -> Self {
                Self::from_diagonal(&$vec::same(scale))
            }

            #[inline]
            pub fn identity() -> Self {
                Self::scaled_identity(T::ONE)
            }

            #[inline]
            pub fn zeros() -> Self {
                Self::from_rows([$vec::zeros(); $n])
            }

            /// Creates a diagonal matrix with the given diagonal.
            #[inline]
            pub fn from_diagonal(diagonal: &$vec<T, P>) -> Self {
                let mut matrix = Self::zeros();
                for i in 0..$n {
                    matrix.rows[i][i] = diagonal[i];
                }
                matrix
            }

            #[inline]
            pub fn rows(&self) -> &[$vec<T, P>; $n] {
                &self.rows
            }

            /// Returns a reference to the row with the given index.
            ///
            /// # Panics
            /// If the index is out of range.
            #[inline]
            pub fn row(&self, i: usize) -> &$vec<T, P> {
                &self.rows[i]
            }

            #[inline]
            pub fn row_mut(&mut self, i: usize) -> &mut $vec<T, P> {
                &mut self.rows[i]
            }

            #[inline]
            pub fn set_row(&mut self, i: usize, row: $vec<T, P>) {
                self.rows[i] = row;
            }

            /// Assembles the column with the given index.
            ///
            /// # Panics
            /// If the index is out of range.
            #[inline]
            pub fn column(&self, j: usize) -> $vec<T, P> {
                $vec::from_array(array::from_fn(|i| self.rows[i][j]))
            }

            /// Returns the element in row `i` and column `j`.
            #[inline]
            pub fn element(&self, i: usize, j: usize) -> T {
                self.rows[i][j]
            }

            #[inline]
            pub fn element_mut(&mut self, i: usize, j: usize) -> &mut T {
                &mut self.rows[i][j]
            }

            #[inline]
            pub fn diagonal(&self) -> $vec<T, P> {
                $vec::from_array(array::from_fn(|i| self.rows[i][i]))
            }

            /// Returns the elements listed row by row.
            #[inline]
            pub fn to_row_major_array(&self) -> [T; $n2] {
                array::from_fn(|k| self.rows[k / $n][k % $n])
            }

            #[inline]
            pub fn to_row_arrays(&self) -> [[T; $n]; $n] {
                self.rows.map($vec::to_array)
            }

            #[inline]
            pub fn transposed(&self) -> Self {
                Self::from_rows(array::from_fn(|j| self.column(j)))
            }

            /// Creates a new matrix by applying the given closure to each
            /// element.
            #[inline]
            pub fn mapped<U: Scalar>(&self, mut f: impl FnMut(T) -> U) -> $name<U, P> {
                $name::from_rows(self.rows.map(|row| row.mapped(&mut f)))
            }

            /// Converts every element to the scalar type `U` with `as`
            /// semantics and stores the result with layout `Q`.
            #[inline]
            pub fn cast<U: Scalar, Q: Packing>(&self) -> $name<U, Q>
            where
                T: AsPrimitive<U>,
            {
                $name::from_rows(self.rows.map(|row| row.cast()))
            }

            #[inline]
            pub fn repacked<Q: Packing>(&self) -> $name<T, Q> {
                $name::from_rows(self.rows.map(|row| row.repacked()))
            }

            #[inline]
            pub fn packed(&self) -> $name<T, Packed> {
                self.repacked()
            }

            #[inline]
            pub fn aligned(&self) -> $name<T, Aligned> {
                self.repacked()
            }

            fn zip_map(&self, other: &Self, mut f: impl FnMut(&$vec<T, P>, &$vec<T, P>) -> $vec<T, P>) -> Self {
                Self::from_rows(array::from_fn(|i| f(&self.rows[i], &other.rows[i])))
            }

            fn product(&self, other: &Self) -> Self {
                let columns: [$vec<T, P>; $n] = array::from_fn(|j| other.column(j));
                Self::from_rows(array::from_fn(|i| {
                    $vec::from_array(array::from_fn(|j| self.rows[i].dot(&columns[j])))
                }))
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
                self.rows == other.rows
            }
        }

        impl<T: Scalar, P: Packing> fmt::Debug for $name<T, P> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let mut tuple = f.debug_tuple(stringify!($name));
                for row in &self.rows {
                    tuple.field(row.as_array());
                }
                tuple.finish()
            }
        }

        impl<T: Scalar, P: Packing> From<[T; $n2]> for $name<T, P> {
            #[inline]
            fn from(elements: [T; $n2]) -> Self {
                Self::from_row_major_array(elements)
            }
        }

        impl<T: Scalar, P: Packing> From<[[T; $n]; $n]> for $name<T, P> {
            #[inline]
            fn from(rows: [[T; $n]; $n]) -> Self {
                Self::from_row_arrays(rows)
            }
        }

        impl<T: Scalar, P: Packing> From<$name<T, P>> for [[T; $n]; $n] {
            #[inline]
            fn from(matrix: $name<T, P>) -> Self {
                matrix.to_row_arrays()
            }
        }

        impl<T: Scalar, P: Packing> Index<usize> for $name<T, P> {
            type Output = $vec<T, P>;

            #[inline]
            fn index(&self, i: usize) -> &Self::Output {
                &self.rows[i]
            }
        }

        impl<T: Scalar, P: Packing> IndexMut<usize> for $name<T, P> {
            #[inline]
            fn index_mut(&mut self, i: usize) -> &mut Self::Output {
                &mut self.rows[i]
            }
        }

        // SAFETY: The rows are vectors, which are `Zeroable` for every layout.
        unsafe impl<T: Scalar, P: Packing> Zeroable for $name<T, P> {}

        // SAFETY: Packed rows are `Pod` and have no padding between them.
        unsafe impl<T: Scalar> Pod for $name<T, Packed> {}

        impl_binop!(Add, add, [T: Scalar, P: Packing], $name<T, P>, $name<T, P>, $name<T, P>, |a, b| {
            a.zip_map(b, |r, s| r + s)
        });

        impl_binop!(Sub, sub, [T: Scalar, P: Packing], $name<T, P>, $name<T, P>, $name<T, P>, |a, b| {
            a.zip_map(b, |r, s| r - s)
        });

        impl_binop!(Mul, mul, [T: Scalar, P: Packing], $name<T, P>, $name<T, P>, $name<T, P>, |a, b| {
            a.product(b)
        });

        impl_binop!(Mul, mul, [T: Scalar, P: Packing], $name<T, P>, T, $name<T, P>, |a, b| {
            a.mapped(|x| x * *b)
        });

        impl_binop!(Div, div, [T: Scalar, P: Packing], $name<T, P>, T, $name<T, P>, |a, b| {
            a.mapped(|x| x / *b)
        });

        impl_binop!(Mul, mul, [T: Scalar, P: Packing], $name<T, P>, $vec<T, P>, $vec<T, P>, |m, v| {
            $vec::from_array(array::from_fn(|i| m.rows[i].dot(v)))
        });

        impl_binop!(Mul, mul, [T: Scalar, P: Packing], $vec<T, P>, $name<T, P>, $vec<T, P>, |v, m| {
            $vec::from_array(array::from_fn(|j| v.dot(&m.column(j))))
        });

        impl_binop_assign!(AddAssign, add_assign, [T: Scalar, P: Packing], $name<T, P>, $name<T, P>, |a, b| {
            *a = *a + *b;
        });

        impl_binop_assign!(SubAssign, sub_assign, [T: Scalar, P: Packing], $name<T, P>, $name<T, P>, |a, b| {
            *a = *a - *b;
        });

        impl_binop_assign!(MulAssign, mul_assign, [T: Scalar, P: Packing], $name<T, P>, $name<T, P>, |a, b| {
            let product = a.product(b);
            *a = product;
        });

        impl_binop_assign!(MulAssign, mul_assign, [T: Scalar, P: Packing], $name<T, P>, T, |a, b| {
            *a = *a * *b;
        });

        impl_binop_assign!(DivAssign, div_assign, [T: Scalar, P: Packing], $name<T, P>, T, |a, b| {
            *a = *a / *b;
        });

        impl_binop_assign!(MulAssign, mul_assign, [T: Scalar, P: Packing], $vec<T, P>, $name<T, P>, |v, m| {
            *v = *v * m;
        });

        impl_unary_op!(Neg, neg, [T: Scalar + Neg<Output = T>, P: Packing], $name<T, P>, $name<T, P>, |val| {
            val.mapped(|x| -x)
        });

        impl_scalar_lhs_mul!($name; i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

        impl_abs_diff_eq!([F: crate::Float, P: Packing], $name<F, P>, F, |a, b, epsilon| {
            a.rows
                .iter()
                .zip(&b.rows)
                .all(|(r, s)| ::approx::AbsDiffEq::abs_diff_eq(r, s, epsilon))
        });

        impl_relative_eq!([F: crate::Float, P: Packing], $name<F, P>, F, |a, b, epsilon, max_relative| {
            a.rows
                .iter()
                .zip(&b.rows)
                .all(|(r, s)| ::approx::RelativeEq::relative_eq(r, s, epsilon, max_relative))
        });
    };
}

impl_matrix!(Matrix2, Vector2, 2, 4);
impl_matrix!(Matrix3, Vector3, 3, 9);
impl_matrix!(Matrix4, Vector4, 4, 16);

impl<T: Scalar, P: Packing> Matrix2<T, P> {
    /// Creates a matrix with the given elements, listed row by row.
    #[inline]
    pub fn new(m00: T, m01: T, m10: T, m11: T) -> Self {
        Self::from_row_major_array([m00, m01, m10, m11])
    }

    #[inline]
    pub fn determinant(&self) -> T {
        let [[a, b], [c, d]] = self.to_row_arrays();
        a * d - b * c
    }
}

impl<T: Scalar, P: Packing> Matrix3<T, P> {
    /// Creates a matrix with the given elements, listed row by row.
    #[inline]
    pub fn new(
        m00: T,
        m01: T,
        m02: T,
        m10: T,
        m11: T,
        m12: T,
        m20: T,
        m21: T,
        m22: T,
    ) -> Self {
        Self::from_row_major_array([m00, m01, m02, m10, m11, m12, m20, m21, m22])
    }

    /// Computes the determinant by cofactor expansion along the first row.
    ///
    /// For unsigned scalars an intermediate minor may be negative, which
    /// overflows.
    #[inline]
    pub fn determinant(&self) -> T {
        let [[a, b, c], [d, e, f], [g, h, i]] = self.to_row_arrays();
        a * (e * i - f * h) - b * (d * i - f * g) + c * (d * h - e * g)
    }
}

impl<T: Scalar, P: Packing> Matrix4<T, P> {
    /// Creates a matrix with the given elements, listed row by row.
    #[inline]
    pub fn new(
        m00: T,
        m01: T,
        m02: T,
        m03: T,
        m10: T,
        m11: T,
        m12: T,
        m13: T,
        m20: T,
        m21: T,
        m22: T,
        m23: T,
        m30: T,
        m31: T,
        m32: T,
        m33: T,
    ) -> Self {
        Self::from_row_major_array([
            m00, m01, m02, m03, m10, m11, m12, m13, m20, m21, m22, m23, m30, m31, m32, m33,
        ])
    }

    /// Computes the determinant by cofactor expansion along the first row.
    pub fn determinant(&self) -> T {
        let first_row = self.rows[0];
        (0..4).fold(T::ZERO, |det, j| {
            let term = first_row[j] * self.first_row_minor(j).determinant();
            if j % 2 == 0 { det + term } else { det - term }
        })
    }

    /// The 3x3 matrix left after removing the first row and column `j`.
    fn first_row_minor(&self, j: usize) -> Matrix3<T, P> {
        Matrix3::from_rows(array::from_fn(|i| {
            let row = &self.rows[i + 1];
            Vector3::from_array(array::from_fn(|k| row[if k < j { k } else { k + 1 }]))
        }))
    }
}
