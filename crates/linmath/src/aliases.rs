//! Type aliases naming the dimension and scalar type, e.g. [`Vector3F32`] for
//! `Vector3<f32>` and [`Matrix4I32`] for `Matrix4<i32>`. Every alias keeps the
//! packing parameter, defaulting to [`Packed`].

use crate::{
    matrix::{Matrix2, Matrix3, Matrix4},
    packing::Packed,
    vector::{Vector1, Vector2, Vector3, Vector4},
};

macro_rules! define_aliases {
    (@scalars $generic:ident [$($scalar:ident),*]) => {
        ::pastey::paste! {
            $(
                #[doc = concat!("`", stringify!($generic), "<", stringify!($scalar), ", P>`.")]
                pub type [<$generic $scalar:upper>]<P = Packed> = $generic<$scalar, P>;
            )*
        }
    };
    ($($generic:ident),* ; $scalars:tt) => {
        $(
            define_aliases!(@scalars $generic $scalars);
        )*
    };
}

define_aliases!(
    Vector1, Vector2, Vector3, Vector4, Matrix2, Matrix3, Matrix4;
    [f32, f64, i8, i16, i32, i64, u8, u16, u32, u64]
);
