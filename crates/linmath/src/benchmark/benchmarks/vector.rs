use crate::{
    packing::{Aligned, Packed},
    vector::{Vector3, Vector4},
};
use linmath_profiling::benchmark::Benchmarker;

pub fn align_vector3(benchmarker: impl Benchmarker) {
    let a = create_vector3();
    benchmarker.benchmark(&mut || a.aligned());
}

pub fn pack_vector3(benchmarker: impl Benchmarker) {
    let a = create_vector3().aligned();
    benchmarker.benchmark(&mut || a.packed());
}

pub fn add_vector3_packed(benchmarker: impl Benchmarker) {
    let a = create_vector3();
    let b = create_vector3();
    benchmarker.benchmark(&mut || a + b);
}

pub fn add_vector3_aligned(benchmarker: impl Benchmarker) {
    let a = create_vector3().aligned();
    let b = create_vector3().aligned();
    benchmarker.benchmark(&mut || a + b);
}

pub fn add_vector3_both_packed_as_aligned(benchmarker: impl Benchmarker) {
    let a = create_vector3();
    let b = create_vector3();
    benchmarker.benchmark(&mut || a.aligned() + b.aligned());
}

pub fn normalize_vector3_packed(benchmarker: impl Benchmarker) {
    let a = create_vector3();
    benchmarker.benchmark(&mut || a.normalized());
}

pub fn normalize_vector3_aligned(benchmarker: impl Benchmarker) {
    let a = create_vector3().aligned();
    benchmarker.benchmark(&mut || a.normalized());
}

pub fn cross_vector3_packed(benchmarker: impl Benchmarker) {
    let a = create_vector3();
    let b = create_vector3().swizzle3(2, 0, 1);
    benchmarker.benchmark(&mut || a.cross(&b));
}

pub fn cross_vector3_aligned(benchmarker: impl Benchmarker) {
    let a = create_vector3().aligned();
    let b = create_vector3().swizzle3(2, 0, 1).aligned();
    benchmarker.benchmark(&mut || a.cross(&b));
}

pub fn add_vector4_packed(benchmarker: impl Benchmarker) {
    let a = create_vector4::<Packed>();
    let b = create_vector4::<Packed>();
    benchmarker.benchmark(&mut || a + b);
}

pub fn add_vector4_aligned(benchmarker: impl Benchmarker) {
    let a = create_vector4::<Aligned>();
    let b = create_vector4::<Aligned>();
    benchmarker.benchmark(&mut || a + b);
}

pub fn cast_vector4_f32_to_f64(benchmarker: impl Benchmarker) {
    let a = create_vector4::<Packed>();
    benchmarker.benchmark(&mut || a.cast::<f64, Packed>());
}

fn create_vector3() -> Vector3<f32> {
    Vector3::new(1.0, 2.0, 3.0)
}

fn create_vector4<P: crate::Packing>() -> Vector4<f32, P> {
    Vector4::new(1.0, 2.0, 3.0, 4.0)
}
