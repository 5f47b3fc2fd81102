use std::fs::{self, File};
use std::io::{self, BufWriter};
use std::path::Path;

use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use sortlab::area::{estimate_intersection_area, BoundingBox, Circle};
use sortlab::config::{DEFAULT_SEED, THRESHOLD_MAX, THRESHOLD_MIN};
use sortlab::report::write_series;
use sortlab::tester::SortTester;
use sortlab::{introsort, merge_insertion_sort, merge_sort, quicksort};

const OUTPUT_DIR: &str = "results";

fn main() -> io::Result<()> {
    env_logger::init();

    fs::create_dir_all(OUTPUT_DIR)?;

    run_sort_benchmarks()?;
    run_area_experiment()?;

    Ok(())
}

fn run_sort_benchmarks() -> io::Result<()> {
    let mut tester = SortTester::new(DEFAULT_SEED, OUTPUT_DIR);

    tester.run(merge_sort, "merge_sort")?;

    let mut threshold = THRESHOLD_MIN;
    while threshold <= THRESHOLD_MAX {
        tester.run(
            |a| merge_insertion_sort(a, threshold),
            &format!("merge_insertion_sort_{threshold}"),
        )?;
        threshold *= 2;
    }

    let mut rng = StdRng::seed_from_u64(DEFAULT_SEED);
    tester.run(|a| quicksort(a, &mut rng), "quicksort")?;

    let mut rng = StdRng::seed_from_u64(DEFAULT_SEED);
    let mut threshold = THRESHOLD_MIN;
    while threshold <= THRESHOLD_MAX {
        tester.run(
            |a| introsort(a, threshold, &mut rng),
            &format!("introsort_{threshold}"),
        )?;
        threshold *= 2;
    }

    Ok(())
}

/// Monte-Carlo sweep over the fixed three-circle intersection whose exact
/// area is known in closed form, recording the estimate and its relative
/// error for growing sample counts.
fn run_area_experiment() -> io::Result<()> {
    let circles = [
        Circle::new(1.0, 1.0, 1.0),
        Circle::new(1.5, 2.0, 5.0_f64.sqrt() / 2.0),
        Circle::new(2.0, 1.5, 5.0_f64.sqrt() / 2.0),
    ];
    let bounds = BoundingBox::around(&circles);
    let exact = 0.25 * std::f64::consts::PI + 1.25 * 0.8_f64.asin() - 1.0;

    let mut rng = StdRng::seed_from_u64(DEFAULT_SEED);
    let mut sample_counts: Vec<usize> = Vec::new();
    let mut estimates: Vec<f64> = Vec::new();
    let mut errors: Vec<f64> = Vec::new();

    let mut samples = 100;
    while samples <= 100_000 {
        let estimate = estimate_intersection_area(&circles, bounds, samples, &mut rng);
        sample_counts.push(samples);
        estimates.push(estimate);
        errors.push((estimate - exact).abs() / exact * 100.0);
        samples += 500;
    }

    let path = Path::new(OUTPUT_DIR).join("intersection_area.txt");
    let file = File::create(&path)?;
    let mut writer = BufWriter::new(file);
    write_series(&mut writer, &sample_counts)?;
    write_series(&mut writer, &estimates)?;
    write_series(&mut writer, &errors)?;
    info!("wrote {}", path.display());

    Ok(())
}
