//! Time-budgeted benchmarking.

#[cfg(feature = "criterion")]
pub mod criterion;

use std::{
    hint::black_box,
    thread,
    time::{Duration, Instant},
};

/// Something that can repeatedly run a closure and measure it.
pub trait Benchmarker {
    fn benchmark<T>(self, f: &mut impl FnMut() -> T);
}

/// Runs the benchmarked closure in a loop until its time budget is spent.
/// The closure always runs at least once.
///
/// The loop does not start before `not_before`, which leaves room for
/// attaching an external profiler to the process.
#[derive(Clone, Debug)]
pub struct TimedBenchmarker {
    budget: Duration,
    not_before: Instant,
}

/// Iteration count and wall time of a finished [`TimedBenchmarker`] run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BenchmarkRun {
    pub iterations: u64,
    pub elapsed: Duration,
}

impl TimedBenchmarker {
    pub fn new(budget: Duration, not_before: Instant) -> Self {
        Self { budget, not_before }
    }

    /// Runs the closure and reports how many iterations fit in the budget.
    pub fn run<T>(self, f: &mut impl FnMut() -> T) -> BenchmarkRun {
        let wait = self.not_before.saturating_duration_since(Instant::now());
        if !wait.is_zero() {
            log::debug!("Waiting {:.3} s before benchmarking", wait.as_secs_f64());
            thread::sleep(wait);
        }

        let start = Instant::now();
        let mut iterations = 0;
        loop {
            black_box(f());
            iterations += 1;
            if start.elapsed() >= self.budget {
                break;
            }
        }

        BenchmarkRun {
            iterations,
            elapsed: start.elapsed(),
        }
    }
}

impl Benchmarker for TimedBenchmarker {
    fn benchmark<T>(self, f: &mut impl FnMut() -> T) {
        let run = self.run(f);
        log::info!(
            "{} iterations in {:.3} s ({:.2} ns/iteration)",
            run.iterations,
            run.elapsed.as_secs_f64(),
            run.nanos_per_iteration()
        );
    }
}

impl BenchmarkRun {
    pub fn nanos_per_iteration(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1e9 / self.iterations.max(1) as f64
    }
}

/// Hands `execute` a [`TimedBenchmarker`] with a budget of `duration`
/// seconds that starts once `delay` seconds have passed since this call.
pub fn benchmark(execute: impl FnOnce(TimedBenchmarker), duration: f64, delay: f64) {
    let not_before = Instant::now() + Duration::from_secs_f64(delay);
    execute(TimedBenchmarker::new(
        Duration::from_secs_f64(duration),
        not_before,
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_budget_still_runs_once() {
        let mut count = 0;
        let run = TimedBenchmarker::new(Duration::ZERO, Instant::now()).run(&mut || count += 1);
        assert_eq!(count, 1);
        assert_eq!(run.iterations, 1);
    }

    #[test]
    fn run_waits_for_start_time() {
        let start = Instant::now();
        TimedBenchmarker::new(Duration::ZERO, start + Duration::from_millis(50)).run(&mut || ());
        assert!(start.elapsed() >= Duration::from_millis(50));
    }

    #[test]
    fn benchmark_hands_out_a_benchmarker() {
        let mut ran = false;
        benchmark(
            |benchmarker| benchmarker.benchmark(&mut || ran = true),
            0.0,
            0.0,
        );
        assert!(ran);
    }
}
