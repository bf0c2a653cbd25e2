use crate::{
    matrix::{Matrix3, Matrix4},
    packing::{Aligned, Packed, Packing},
    vector::Vector4,
};
use linmath_profiling::benchmark::Benchmarker;

pub fn align_matrix3(benchmarker: impl Benchmarker) {
    let a = create_matrix3();
    benchmarker.benchmark(&mut || a.aligned());
}

pub fn pack_matrix3(benchmarker: impl Benchmarker) {
    let a = create_matrix3().aligned();
    benchmarker.benchmark(&mut || a.packed());
}

pub fn mul_matrix3_packed(benchmarker: impl Benchmarker) {
    let a = create_matrix3();
    let b = create_matrix3();
    benchmarker.benchmark(&mut || a * b);
}

pub fn mul_matrix3_aligned(benchmarker: impl Benchmarker) {
    let a = create_matrix3().aligned();
    let b = create_matrix3().aligned();
    benchmarker.benchmark(&mut || a * b);
}

pub fn mul_matrix3_both_packed_as_aligned(benchmarker: impl Benchmarker) {
    let a = create_matrix3();
    let b = create_matrix3();
    benchmarker.benchmark(&mut || a.aligned() * b.aligned());
}

pub fn mul_matrix4_packed(benchmarker: impl Benchmarker) {
    let a = create_matrix4::<Packed>();
    let b = create_matrix4::<Packed>();
    benchmarker.benchmark(&mut || a * b);
}

pub fn mul_matrix4_aligned(benchmarker: impl Benchmarker) {
    let a = create_matrix4::<Aligned>();
    let b = create_matrix4::<Aligned>();
    benchmarker.benchmark(&mut || a * b);
}

pub fn mul_matrix4_both_packed_as_aligned_to_packed(benchmarker: impl Benchmarker) {
    let a = create_matrix4::<Packed>();
    let b = create_matrix4::<Packed>();
    benchmarker.benchmark(&mut || (a.aligned() * b.aligned()).packed());
}

pub fn transform_vector4_packed(benchmarker: impl Benchmarker) {
    let m = create_matrix4::<Packed>();
    let v = Vector4::new(1.0, -1.0, 0.5, 1.0);
    benchmarker.benchmark(&mut || v * m);
}

pub fn transform_vector4_aligned(benchmarker: impl Benchmarker) {
    let m = create_matrix4::<Aligned>();
    let v = Vector4::new(1.0, -1.0, 0.5, 1.0);
    benchmarker.benchmark(&mut || v * m);
}

pub fn determinant_matrix4_packed(benchmarker: impl Benchmarker) {
    let a = create_matrix4::<Packed>();
    benchmarker.benchmark(&mut || a.determinant());
}

pub fn transpose_matrix4_aligned(benchmarker: impl Benchmarker) {
    let a = create_matrix4::<Aligned>();
    benchmarker.benchmark(&mut || a.transposed());
}

fn create_matrix3() -> Matrix3<f32> {
    Matrix3::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0)
}

fn create_matrix4<P: Packing>() -> Matrix4<f32, P> {
    Matrix4::new(
        1.0, 2.0, 3.0, 4.0, //
        5.0, 6.0, 7.0, 8.0, //
        9.0, 10.0, 11.0, 12.0, //
        13.0, 14.0, 15.0, 16.0,
    )
}
