use linmath::benchmark::benchmarks::vector;
use linmath_profiling::{benchmark::criterion, define_criterion_targets};

define_criterion_targets!(vector => [
    align_vector3,
    pack_vector3,
    add_vector3_packed,
    add_vector3_aligned,
    add_vector3_both_packed_as_aligned,
    normalize_vector3_packed,
    normalize_vector3_aligned,
    cross_vector3_packed,
    cross_vector3_aligned,
    add_vector4_packed,
    add_vector4_aligned,
    cast_vector4_f32_to_f64,
]);

criterion::criterion_group!(
    name = benches;
    config = criterion::config();
    targets =
        align_vector3,
        pack_vector3,
        add_vector3_packed,
        add_vector3_aligned,
        add_vector3_both_packed_as_aligned,
        normalize_vector3_packed,
        normalize_vector3_aligned,
        cross_vector3_packed,
        cross_vector3_aligned,
        add_vector4_packed,
        add_vector4_aligned,
        cast_vector4_f32_to_f64,
);
criterion::criterion_main!(benches);
