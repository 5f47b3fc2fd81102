use std::fmt::Display;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Benchmark series collected by one harness run: the swept input sizes
/// and the mean sort duration in milliseconds per input distribution.
/// Never mutated after collection.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct BenchmarkReport {
    pub sizes: Vec<usize>,
    pub uniform_ms: Vec<f64>,
    pub reversed_ms: Vec<f64>,
    pub almost_sorted_ms: Vec<f64>,
}

impl BenchmarkReport {
    pub fn new() -> BenchmarkReport {
        BenchmarkReport::default()
    }

    /// Four lines: sizes, then the duration series in distribution order
    /// uniform, reversed, almost-sorted.
    pub fn write_to(&self, path: &Path) -> io::Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.write_into(&mut writer)?;
        writer.flush()
    }

    fn write_into<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        write_series(writer, &self.sizes)?;
        write_series(writer, &self.uniform_ms)?;
        write_series(writer, &self.reversed_ms)?;
        write_series(writer, &self.almost_sorted_ms)
    }
}

/// One `", "`-separated line, no trailing delimiter, newline-terminated.
pub fn write_series<W: Write, T: Display>(writer: &mut W, values: &[T]) -> io::Result<()> {
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            write!(writer, ", ")?;
        }
        write!(writer, "{}", value)?;
    }
    writeln!(writer)
}
