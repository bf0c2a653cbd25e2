//! Textual rendering of vectors and matrices.
//!
//! Vectors are written as `[x, y, z]` and matrices row by row as
//! `[[a, b], [c, d]]`. Format options such as precision are applied to every
//! element.

use crate::{
    matrix::{Matrix2, Matrix3, Matrix4},
    packing::Packing,
    scalar::Scalar,
    vector::{Vector1, Vector2, Vector3, Vector4},
};
use std::fmt;

fn write_elements<T: fmt::Display>(f: &mut fmt::Formatter<'_>, elements: &[T]) -> fmt::Result {
    f.write_str("[")?;
    for (idx, element) in elements.iter().enumerate() {
        if idx > 0 {
            f.write_str(", ")?;
        }
        fmt::Display::fmt(element, f)?;
    }
    f.write_str("]")
}

macro_rules! impl_vector_display {
    ($($name:ident),*) => {
        $(
            impl<T: Scalar, P: Packing> fmt::Display for $name<T, P> {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write_elements(f, self.as_slice())
                }
            }
        )*
    };
}

macro_rules! impl_matrix_display {
    ($($name:ident),*) => {
        $(
            impl<T: Scalar, P: Packing> fmt::Display for $name<T, P> {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write_elements(f, self.rows())
                }
            }
        )*
    };
}

impl_vector_display!(Vector1, Vector2, Vector3, Vector4);
impl_matrix_display!(Matrix2, Matrix3, Matrix4);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Aligned;

    #[test]
    fn vectors_render_as_bracketed_lists() {
        assert_eq!(Vector1::<i32>::new(-4).to_string(), "[-4]");
        assert_eq!(Vector3::<f32>::new(1.0, 2.5, -3.0).to_string(), "[1, 2.5, -3]");
        assert_eq!(Vector4::<u8, Aligned>::new(1, 2, 3, 4).to_string(), "[1, 2, 3, 4]");
    }

    #[test]
    fn matrices_render_row_by_row() {
        let m = Matrix3::<i32>::new(1, 2, 3, 4, 5, 6, 7, 8, 9);
        assert_eq!(m.to_string(), "[[1, 2, 3], [4, 5, 6], [7, 8, 9]]");
        assert_eq!(
            Matrix2::<f64>::identity().to_string(),
            "[[1, 0], [0, 1]]"
        );
    }

    #[test]
    fn precision_applies_to_every_element() {
        let v = Vector2::<f64>::new(1.0, 1.0 / 3.0);
        assert_eq!(format!("{v:.2}"), "[1.00, 0.33]");
        let m = Matrix4::<f32>::scaled_identity(0.5);
        assert!(format!("{m:.1}").starts_with("[[0.5, 0.0, 0.0, 0.0], [0.0, 0.5"));
    }
}
