//! Builders for rotation, scaling, translation and projection matrices.
//!
//! All matrices are built for row vectors multiplied from the left, so a
//! point `p` is transformed as `p * m`, and `m1 * m2` applies `m1` first. The
//! coordinate system is right-handed: a positive angle rotates
//! counter-clockwise when looking down the rotation axis towards the origin.
//! The camera looks along the negative z-axis in view space, and the
//! projections map depth to the range `[0, 1]`.

use crate::{
    angle::Angle,
    matrix::{Matrix2, Matrix3, Matrix4},
    packing::Packing,
    scalar::{Float, Scalar},
    vector::{Vector3, Vector4},
};

/// Creates a matrix rotating 2D row vectors by the given angle.
pub fn rotation_2d<F: Float, P: Packing>(angle: impl Angle<F>) -> Matrix2<F, P> {
    let (s, c) = angle.radians().sin_cos();
    Matrix2::new(c, s, -s, c)
}

/// Creates a matrix rotating 3D row vectors by the given angle about the
/// x-axis.
pub fn rotation_x<F: Float, P: Packing>(angle: impl Angle<F>) -> Matrix3<F, P> {
    let (s, c) = angle.radians().sin_cos();
    Matrix3::new(
        F::ONE, F::ZERO, F::ZERO, //
        F::ZERO, c, s, //
        F::ZERO, -s, c,
    )
}

/// Creates a matrix rotating 3D row vectors by the given angle about the
/// y-axis.
pub fn rotation_y<F: Float, P: Packing>(angle: impl Angle<F>) -> Matrix3<F, P> {
    let (s, c) = angle.radians().sin_cos();
    Matrix3::new(
        c, F::ZERO, -s, //
        F::ZERO, F::ONE, F::ZERO, //
        s, F::ZERO, c,
    )
}

/// Creates a matrix rotating 3D row vectors by the given angle about the
/// z-axis.
pub fn rotation_z<F: Float, P: Packing>(angle: impl Angle<F>) -> Matrix3<F, P> {
    let (s, c) = angle.radians().sin_cos();
    Matrix3::new(
        c, s, F::ZERO, //
        -s, c, F::ZERO, //
        F::ZERO, F::ZERO, F::ONE,
    )
}

/// Creates a matrix rotating 3D row vectors by the given angle about the
/// given axis. The axis does not have to be normalized, but must be nonzero.
pub fn rotation_about_axis<F: Float, P: Packing>(
    axis: &Vector3<F, P>,
    angle: impl Angle<F>,
) -> Matrix3<F, P> {
    let [x, y, z] = axis.normalized().to_array();
    let (s, c) = angle.radians().sin_cos();
    let t = F::ONE - c;
    Matrix3::new(
        c + x * x * t,
        x * y * t + z * s,
        x * z * t - y * s,
        x * y * t - z * s,
        c + y * y * t,
        y * z * t + x * s,
        x * z * t + y * s,
        y * z * t - x * s,
        c + z * z * t,
    )
}

/// Creates a homogeneous matrix scaling each axis by the corresponding
/// component of `scales`.
pub fn scaling<T: Scalar, P: Packing>(scales: &Vector3<T, P>) -> Matrix4<T, P> {
    Matrix4::from_diagonal(&scales.extended(T::ONE))
}

/// Creates a homogeneous matrix translating points by the given offset. The
/// offset is stored in the last row.
pub fn translation<T: Scalar, P: Packing>(offset: &Vector3<T, P>) -> Matrix4<T, P> {
    let mut matrix = Matrix4::identity();
    matrix.set_row(3, offset.extended(T::ONE));
    matrix
}

/// Embeds the given linear map in the upper left block of a homogeneous
/// matrix.
pub fn homogeneous<T: Scalar, P: Packing>(linear: &Matrix3<T, P>) -> Matrix4<T, P> {
    let [r0, r1, r2] = *linear.rows();
    Matrix4::from_rows([
        r0.extended(T::ZERO),
        r1.extended(T::ZERO),
        r2.extended(T::ZERO),
        Vector4::unit_w(),
    ])
}

/// Creates a perspective projection for a camera looking along the negative
/// z-axis.
///
/// `aspect_ratio` is the ratio of width to height of the view plane. Points
/// at distance `near` get depth 0 and points at distance `far` get depth 1
/// after perspective division.
pub fn perspective<F: Float, P: Packing>(
    vertical_fov: impl Angle<F>,
    aspect_ratio: F,
    near: F,
    far: F,
) -> Matrix4<F, P> {
    let focal_length = F::ONE / (vertical_fov.radians() * F::ONE_HALF).tan();
    let depth_scale = far / (near - far);
    Matrix4::new(
        focal_length / aspect_ratio, F::ZERO, F::ZERO, F::ZERO, //
        F::ZERO, focal_length, F::ZERO, F::ZERO, //
        F::ZERO, F::ZERO, depth_scale, F::NEG_ONE, //
        F::ZERO, F::ZERO, near * depth_scale, F::ZERO,
    )
}

/// Creates an orthographic projection mapping the given view box to the range
/// `[-1, 1]` in x and y and `[0, 1]` in depth. `near` and `far` are distances
/// along the negative z-axis.
pub fn orthographic<F: Float, P: Packing>(
    left: F,
    right: F,
    bottom: F,
    top: F,
    near: F,
    far: F,
) -> Matrix4<F, P> {
    let inv_width = F::ONE / (right - left);
    let inv_height = F::ONE / (top - bottom);
    let inv_depth = F::ONE / (near - far);
    Matrix4::new(
        F::TWO * inv_width, F::ZERO, F::ZERO, F::ZERO, //
        F::ZERO, F::TWO * inv_height, F::ZERO, F::ZERO, //
        F::ZERO, F::ZERO, inv_depth, F::ZERO, //
        -(right + left) * inv_width,
        -(top + bottom) * inv_height,
        near * inv_depth,
        F::ONE,
    )
}

/// Creates a view matrix for a camera at `eye` looking at `target`, with
/// `up` giving the approximate upward direction.
pub fn look_at<F: Float, P: Packing>(
    eye: &Vector3<F, P>,
    target: &Vector3<F, P>,
    up: &Vector3<F, P>,
) -> Matrix4<F, P> {
    let forward = (target - eye).normalized();
    let side = forward.cross(up).normalized();
    let camera_up = side.cross(&forward);
    Matrix4::new(
        side.x(), camera_up.x(), -forward.x(), F::ZERO, //
        side.y(), camera_up.y(), -forward.y(), F::ZERO, //
        side.z(), camera_up.z(), -forward.z(), F::ZERO, //
        -side.dot(eye),
        -camera_up.dot(eye),
        forward.dot(eye),
        F::ONE,
    )
}

/// Transforms the given point with a homogeneous matrix, treating it as
/// having a w-component of 1. No perspective division is performed.
pub fn transform_point<T: Scalar, P: Packing>(
    matrix: &Matrix4<T, P>,
    point: &Vector3<T, P>,
) -> Vector3<T, P> {
    (point.extended(T::ONE) * matrix).xyz()
}

/// Transforms the given direction with a homogeneous matrix, treating it as
/// having a w-component of 0, so translation does not apply.
pub fn transform_vector<T: Scalar, P: Packing>(
    matrix: &Matrix4<T, P>,
    vector: &Vector3<T, P>,
) -> Vector3<T, P> {
    (vector.extended(T::ZERO) * matrix).xyz()
}

/// Transforms the given point with a homogeneous matrix and performs
/// perspective division.
pub fn project_point<F: Float, P: Packing>(
    matrix: &Matrix4<F, P>,
    point: &Vector3<F, P>,
) -> Vector3<F, P> {
    let projected = point.extended(F::ONE) * matrix;
    projected.xyz() / projected.w()
}
