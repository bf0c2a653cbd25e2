//! Fixed-size vectors (1 to 4 components) and square matrices (2x2, 3x3 and
//! 4x4), generic over the scalar type and over the memory layout.
//!
//! Every type takes a [`Packing`] parameter. With [`Packed`] (the default) a
//! value occupies exactly the bytes of its components. With [`Aligned`] the
//! size and alignment are rounded up to the matching SIMD register width, so
//! that e.g. a `Vector3<f32, Aligned>` can be loaded into a 128-bit register.
//! The layout never affects results, and operators only combine operands of
//! the same layout.
//!
//! Vectors are treated as row vectors when multiplied from the left
//! (`v * m`) and as column vectors when multiplied from the right (`m * v`).
//! The builders in [`transform`] produce matrices for the row-vector
//! convention.

#[macro_use]
mod macros;

pub mod aliases;
pub mod angle;
#[cfg(feature = "benchmark")]
pub mod benchmark;
pub mod display;
pub mod matrix;
pub mod packing;
pub mod scalar;
pub mod transform;
pub mod vector;

pub use angle::{Angle, Degrees, Radians};
pub use matrix::{Matrix2, Matrix3, Matrix4};
pub use packing::{Aligned, Packed, Packing, PackingMode};
pub use scalar::{Float, Scalar};
pub use vector::{Vector1, Vector2, Vector3, Vector4};
