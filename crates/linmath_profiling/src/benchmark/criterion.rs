//! Running benchmark targets under `criterion`.

pub use criterion::*;

use crate::benchmark::Benchmarker;
use std::time::Duration;

/// Defines one `criterion` benchmark function per listed name, each running
/// the function of the same name in the given benchmark module.
#[macro_export]
macro_rules! define_criterion_targets {
    ($group:ident => [$($name:ident),* $(,)?]) => {
        $(
            pub fn $name(c: &mut $crate::benchmark::criterion::Criterion) {
                $group::$name($crate::benchmark::criterion::CriterionBenchmarker::new(
                    c,
                    stringify!($name),
                ));
            }
        )*
    };
}

/// [`Benchmarker`] that registers the closure as a `criterion` benchmark.
#[allow(missing_debug_implementations)]
pub struct CriterionBenchmarker<'a> {
    c: &'a mut Criterion,
    id: &'static str,
}

impl<'a> CriterionBenchmarker<'a> {
    pub fn new(c: &'a mut Criterion, id: &'static str) -> Self {
        Self { c, id }
    }
}

impl Benchmarker for CriterionBenchmarker<'_> {
    fn benchmark<T>(self, f: &mut impl FnMut() -> T) {
        self.c.bench_function(self.id, |b| b.iter(&mut *f));
    }
}

/// Vector and matrix operations take nanoseconds, so short windows suffice.
pub fn config() -> Criterion {
    Criterion::default()
        .warm_up_time(Duration::from_millis(500))
        .measurement_time(Duration::from_secs(2))
}
