use linmath::benchmark::benchmarks::matrix;
use linmath_profiling::{benchmark::criterion, define_criterion_targets};

define_criterion_targets!(matrix => [
    align_matrix3,
    pack_matrix3,
    mul_matrix3_packed,
    mul_matrix3_aligned,
    mul_matrix3_both_packed_as_aligned,
    mul_matrix4_packed,
    mul_matrix4_aligned,
    mul_matrix4_both_packed_as_aligned_to_packed,
    transform_vector4_packed,
    transform_vector4_aligned,
    determinant_matrix4_packed,
    transpose_matrix4_aligned,
]);

criterion::criterion_group!(
    name = benches;
    config = criterion::config();
    targets =
        align_matrix3,
        pack_matrix3,
        mul_matrix3_packed,
        mul_matrix3_aligned,
        mul_matrix3_both_packed_as_aligned,
        mul_matrix4_packed,
        mul_matrix4_aligned,
        mul_matrix4_both_packed_as_aligned_to_packed,
        transform_vector4_packed,
        transform_vector4_aligned,
        determinant_matrix4_packed,
        transpose_matrix4_aligned,
);
criterion::criterion_main!(benches);
