//! Shared shape of the tree benchmarks, so each one can be registered with
//! both the criterion and the iai_callgrind runners.

/// A benchmark over trees of a configurable number of nodes.
pub trait SizedBenchmark: Sized {
    /// Name of the benchmark.
    fn name() -> &'static str;

    /// Node counts to benchmark.
    fn sizes() -> &'static [usize] {
        &[1_000, 10_000, 100_000]
    }

    /// Builds the input trees and query lists for `size` nodes.
    fn setup(size: usize) -> Self;

    /// Operation to benchmark.
    ///
    /// The returned value is dropped inside the measurement, so prefer small
    /// summaries over whole trees.
    fn run(&self) -> impl Sized;

    /// Setup with the smallest node count, for callgrind.
    fn small() -> Self {
        Self::setup(Self::sizes().iter().min().copied().unwrap())
    }

    /// Setup with the largest node count, for callgrind.
    fn big() -> Self {
        Self::setup(Self::sizes().iter().max().copied().unwrap())
    }

    /// Registers one criterion benchmark per node count.
    fn criterion(c: &mut criterion::Criterion) {
        let mut g = c.benchmark_group(Self::name());
        g.plot_config(
            criterion::PlotConfiguration::default()
                .summary_scale(criterion::AxisScale::Logarithmic),
        );

        for &size in Self::sizes() {
            let benchmark = Self::setup(size);
            g.bench_function(criterion::BenchmarkId::new(Self::name(), size), |b| {
                b.iter(|| criterion::black_box(benchmark.run()))
            });
        }
        g.finish();
    }
}

/// Defines an iai_callgrind library benchmark named `$namespace` that runs a
/// [`SizedBenchmark`] on its smallest and largest node counts.
///
/// The generated function is meant for the `benchmarks` list of
/// `iai_callgrind::library_benchmark_group!`.
macro_rules! sized_iai_benchmark {
    ($namespace:ident, $sized_benchmark:path) => {
        #[iai_callgrind::library_benchmark]
        #[bench::small($sized_benchmark::small())]
        #[bench::big($sized_benchmark::big())]
        fn $namespace(benchmark: impl crate::helpers::traits::SizedBenchmark) {
            criterion::black_box(benchmark.run());
        }
    };
}
pub(crate) use sized_iai_benchmark;
