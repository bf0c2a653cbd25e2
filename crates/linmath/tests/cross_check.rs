//! Cross-checks against `glam` and `nalgebra`.
//!
//! `glam` uses column vectors and stores matrices column by column, so the
//! column-major array of a `glam` transform equals the row-major array of the
//! corresponding row-vector transform built here.

use approx::assert_abs_diff_eq;
use linmath::{
    Aligned, Degrees, Matrix2, Matrix3, Matrix4, Packed, Radians, Vector3, Vector4, transform,
};
use std::mem::{align_of, size_of};

const EPSILON: f32 = 1e-6;

fn assert_arrays_close<const N: usize>(actual: [f32; N], expected: [f32; N]) {
    for (&a, &e) in actual.iter().zip(&expected) {
        assert_abs_diff_eq!(a, e, epsilon = EPSILON * e.abs().max(1.0));
    }
}

fn to_nalgebra3(m: &Matrix3<f64>) -> nalgebra::Matrix3<f64> {
    nalgebra::Matrix3::from_row_slice(&m.to_row_major_array())
}

fn to_nalgebra4(m: &Matrix4<f64>) -> nalgebra::Matrix4<f64> {
    nalgebra::Matrix4::from_row_slice(&m.to_row_major_array())
}

fn sample_matrix3() -> Matrix3<f64> {
    Matrix3::new(2.0, -1.0, 0.5, 3.0, 4.0, -2.0, 0.0, 1.5, 1.0)
}

fn sample_matrix4() -> Matrix4<f64> {
    Matrix4::new(
        2.0, -1.0, 0.5, 3.0, //
        1.0, 4.0, -2.0, 0.0, //
        0.0, 1.5, 1.0, -1.0, //
        -3.0, 0.0, 2.0, 1.0,
    )
}

#[test]
fn perspective_matches_glam() {
    let ours: Matrix4<f32> = transform::perspective(Degrees(60.0), 16.0 / 9.0, 0.1, 250.0);
    let glam = glam::Mat4::perspective_rh(60.0_f32.to_radians(), 16.0 / 9.0, 0.1, 250.0);
    assert_arrays_close(ours.to_row_major_array(), glam.to_cols_array());
}

#[test]
fn orthographic_matches_glam() {
    let ours: Matrix4<f32, Aligned> = transform::orthographic(-3.0, 5.0, -2.0, 4.0, 0.5, 20.0);
    let glam = glam::Mat4::orthographic_rh(-3.0, 5.0, -2.0, 4.0, 0.5, 20.0);
    assert_arrays_close(ours.to_row_major_array(), glam.to_cols_array());
}

#[test]
fn look_at_matches_glam() {
    let eye = Vector3::<f32>::new(1.0, 5.0, -2.0);
    let target = Vector3::new(-3.0, 0.5, 4.0);
    let up = Vector3::unit_y();
    let ours = transform::look_at(&eye, &target, &up);
    let glam = glam::Mat4::look_at_rh(
        glam::Vec3::from_array(eye.to_array()),
        glam::Vec3::from_array(target.to_array()),
        glam::Vec3::Y,
    );
    assert_arrays_close(ours.to_row_major_array(), glam.to_cols_array());
}

#[test]
fn rotations_match_glam() {
    let angle = Radians(0.7_f32);

    let ours: Matrix2<f32> = transform::rotation_2d(angle);
    assert_arrays_close(
        ours.to_row_major_array(),
        glam::Mat2::from_angle(0.7).to_cols_array(),
    );

    let ours: Matrix3<f32> = transform::rotation_x(angle);
    assert_arrays_close(
        ours.to_row_major_array(),
        glam::Mat3::from_rotation_x(0.7).to_cols_array(),
    );

    let ours: Matrix3<f32> = transform::rotation_y(angle);
    assert_arrays_close(
        ours.to_row_major_array(),
        glam::Mat3::from_rotation_y(0.7).to_cols_array(),
    );

    let ours: Matrix3<f32> = transform::rotation_z(angle);
    assert_arrays_close(
        ours.to_row_major_array(),
        glam::Mat3::from_rotation_z(0.7).to_cols_array(),
    );

    let axis = Vector3::<f32>::new(1.0, -2.0, 0.5);
    let ours = transform::rotation_about_axis(&axis, angle);
    let glam_axis = glam::Vec3::from_array(axis.to_array()).normalize();
    assert_arrays_close(
        ours.to_row_major_array(),
        glam::Mat3::from_axis_angle(glam_axis, 0.7).to_cols_array(),
    );
}

#[test]
fn projected_points_match_glam() {
    let projection: Matrix4<f32> = transform::perspective(Degrees(75.0), 1.5, 1.0, 100.0);
    let point = Vector3::new(3.0, -2.0, -10.0);
    let ours = transform::project_point(&projection, &point);

    let glam = glam::Mat4::perspective_rh(75.0_f32.to_radians(), 1.5, 1.0, 100.0)
        .project_point3(glam::Vec3::from_array(point.to_array()));
    assert_arrays_close(ours.to_array(), glam.to_array());
}

#[test]
fn determinants_match_nalgebra() {
    let m3 = sample_matrix3();
    assert_abs_diff_eq!(m3.determinant(), to_nalgebra3(&m3).determinant(), epsilon = 1e-10);

    let m4 = sample_matrix4();
    assert_abs_diff_eq!(m4.determinant(), to_nalgebra4(&m4).determinant(), epsilon = 1e-10);

    let m2 = Matrix2::<f64>::new(0.5, 3.0, -2.0, 7.0);
    let n2 = nalgebra::Matrix2::new(0.5, 3.0, -2.0, 7.0);
    assert_abs_diff_eq!(m2.determinant(), n2.determinant(), epsilon = 1e-12);
}

#[test]
fn products_match_nalgebra() {
    let a = sample_matrix4();
    let b = a.transposed() * 0.5 + Matrix4::identity();

    let product = a * b;
    let expected = to_nalgebra4(&a) * to_nalgebra4(&b);
    for i in 0..4 {
        for j in 0..4 {
            assert_abs_diff_eq!(product[i][j], expected[(i, j)], epsilon = 1e-12);
        }
    }

    let v = Vector4::new(1.0, -0.5, 2.0, 0.25);
    let column_product = a * v;
    let expected = to_nalgebra4(&a) * nalgebra::Vector4::new(1.0, -0.5, 2.0, 0.25);
    for i in 0..4 {
        assert_abs_diff_eq!(column_product[i], expected[i], epsilon = 1e-12);
    }

    let row_product = v * a;
    let expected = nalgebra::RowVector4::new(1.0, -0.5, 2.0, 0.25) * to_nalgebra4(&a);
    for j in 0..4 {
        assert_abs_diff_eq!(row_product[j], expected[j], epsilon = 1e-12);
    }
}

#[test]
fn vector_operations_match_nalgebra() {
    let a = Vector3::<f64>::new(1.5, -2.0, 0.25);
    let b = Vector3::<f64>::new(-0.5, 4.0, 3.0);
    let na = nalgebra::Vector3::new(1.5, -2.0, 0.25);
    let nb = nalgebra::Vector3::new(-0.5, 4.0, 3.0);

    assert_abs_diff_eq!(a.dot(&b), na.dot(&nb), epsilon = 1e-12);
    assert_abs_diff_eq!(a.length(), na.norm(), epsilon = 1e-12);

    let cross = a.cross(&b);
    let expected = na.cross(&nb);
    assert_abs_diff_eq!(
        cross,
        Vector3::new(expected.x, expected.y, expected.z),
        epsilon = 1e-12
    );
}

#[test]
fn packed_layout_matches_glam_and_plain_arrays() {
    assert_eq!(size_of::<Vector3<f32>>(), size_of::<glam::Vec3>());
    assert_eq!(align_of::<Vector3<f32>>(), align_of::<glam::Vec3>());
    assert_eq!(size_of::<Matrix4<f32, Packed>>(), size_of::<[f32; 16]>());
    assert_eq!(size_of::<Matrix3<f64>>(), 72);

    let v = Vector4::<f32>::new(1.0, 2.0, 3.0, 4.0);
    assert_eq!(bytemuck::bytes_of(&v), bytemuck::bytes_of(&[1.0_f32, 2.0, 3.0, 4.0]));

    let m = Matrix2::<u16>::new(1, 2, 3, 4);
    assert_eq!(bytemuck::cast::<_, [u16; 4]>(m), [1, 2, 3, 4]);
}

#[test]
fn aligned_layout_rounds_up_to_simd_width() {
    assert_eq!(size_of::<Vector3<f32, Aligned>>(), 16);
    assert_eq!(align_of::<Vector3<f32, Aligned>>(), 16);
    assert_eq!(size_of::<Vector4<f32, Aligned>>(), 16);
    assert_eq!(size_of::<Vector3<f64, Aligned>>(), 32);
    assert_eq!(align_of::<Vector3<f64, Aligned>>(), 32);
    assert_eq!(size_of::<Vector3<u8, Aligned>>(), 4);
    assert_eq!(size_of::<Matrix3<f32, Aligned>>(), 48);
    assert_eq!(align_of::<Matrix4<f32, Aligned>>(), 16);
    assert_eq!(size_of::<Matrix2<i64, Aligned>>(), 32);

    let zeroed: Matrix4<f32, Aligned> = bytemuck::Zeroable::zeroed();
    assert_eq!(zeroed, Matrix4::zeros());
}
