//! Benchmark targets comparing the packed and aligned layouts.

pub mod benchmarks;

linmath_profiling::define_target_enum! {
    Target,
    crate::benchmark::benchmarks,
    vector => {
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
    },
    matrix => {
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
    },
}

/// Runs the given target in a loop for `duration` seconds, after waiting until
/// `delay` seconds have passed since the program started.
pub fn benchmark(target: Target, duration: f64, delay: f64) {
    log::info!("Running benchmark target {target:?}");
    linmath_profiling::benchmark::benchmark(
        |benchmarker| target.execute(benchmarker),
        duration,
        delay,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_target_runs() {
        for &target in Target::ALL {
            benchmark(target, 0.0, 0.0);
        }
    }
}
