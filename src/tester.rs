use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;

use log::{debug, info};

use crate::config::{BASE_SIZE, MIN_SIZE, REPETITIONS, SIZE_STEP, SWAP_COUNT, VALUE_MAX, VALUE_MIN};
use crate::generator::ArrayGenerator;
use crate::report::BenchmarkReport;

/// Benchmarking harness. Builds one base array per input distribution,
/// times a sort routine over prefix slices of growing size and writes the
/// collected series to `<output_dir>/<name>.txt`.
pub struct SortTester {
    generator: ArrayGenerator,
    output_dir: PathBuf,
}

impl SortTester {
    pub fn new(seed: u64, output_dir: impl AsRef<Path>) -> SortTester {
        SortTester {
            generator: ArrayGenerator::new(seed),
            output_dir: output_dir.as_ref().to_path_buf(),
        }
    }

    /// Mean wall-clock duration in milliseconds of `repetitions`
    /// back-to-back calls on the same buffer.
    ///
    /// The buffer is not re-randomized in between: after the first call it
    /// is already sorted, so later repetitions measure sorted-input
    /// performance. Kept that way on purpose so results stay comparable
    /// with earlier measurement series; see DESIGN.md.
    pub fn time<F>(arr: &mut [i32], repetitions: usize, sort_fn: &mut F) -> f64
    where
        F: FnMut(&mut [i32]),
    {
        let mut total_ms = 0.0;
        for _ in 0..repetitions {
            let start = Instant::now();
            sort_fn(arr);
            total_ms += start.elapsed().as_secs_f64() * 1_000.0;
        }
        total_ms / repetitions as f64
    }

    /// Full measurement sweep for one sort routine: sizes from `MIN_SIZE`
    /// to `BASE_SIZE` in `SIZE_STEP` steps, each timed over a fresh prefix
    /// copy of the uniform, reversed and almost-sorted base arrays.
    pub fn run<F>(&mut self, mut sort_fn: F, name: &str) -> io::Result<BenchmarkReport>
    where
        F: FnMut(&mut [i32]),
    {
        info!("benchmarking {name}");
        let uniform = self.generator.from_range(BASE_SIZE, VALUE_MIN, VALUE_MAX);
        let reversed = self.generator.reversed(BASE_SIZE, VALUE_MIN, VALUE_MAX);
        let almost_sorted = self
            .generator
            .almost_sorted(BASE_SIZE, VALUE_MIN, VALUE_MAX, SWAP_COUNT);

        let mut report = BenchmarkReport::new();
        let mut size = MIN_SIZE;
        while size <= BASE_SIZE {
            let mut uniform_prefix = uniform[..size].to_vec();
            let mut reversed_prefix = reversed[..size].to_vec();
            let mut almost_sorted_prefix = almost_sorted[..size].to_vec();

            report.sizes.push(size);
            report
                .uniform_ms
                .push(Self::time(&mut uniform_prefix, REPETITIONS, &mut sort_fn));
            report
                .reversed_ms
                .push(Self::time(&mut reversed_prefix, REPETITIONS, &mut sort_fn));
            report
                .almost_sorted_ms
                .push(Self::time(&mut almost_sorted_prefix, REPETITIONS, &mut sort_fn));

            debug!("{name}: size {size} done");
            size += SIZE_STEP;
        }

        let path = self.output_dir.join(format!("{name}.txt"));
        report.write_to(&path)?;
        info!("wrote {}", path.display());
        Ok(report)
    }
}
