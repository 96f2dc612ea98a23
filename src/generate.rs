//! Bulk source generation: header, `count` units in index order, footer.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::debug;

use crate::template::UnitTemplate;

const WRITE_BUFFER: usize = 1 << 20;

/// What a finished generation wrote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    /// Number of units emitted.
    pub units: u64,
    /// Bytes handed to the file, boilerplate included.
    pub bytes: u64,
    pub elapsed: Duration,
}

impl Report {
    pub fn megabytes(&self) -> f64 {
        self.bytes as f64 / (1024.0 * 1024.0)
    }
}

/// Write a complete source to `out`: header, units `0..count`, footer.
pub fn write_source<W: Write>(
    out: &mut W,
    template: &dyn UnitTemplate,
    count: u64,
) -> io::Result<()> {
    template.write_header(out)?;
    for i in 0..count {
        template.write_unit(out, i)?;
    }
    template.write_footer(out, count)
}

/// Create (or truncate) `path` and write a complete source into it.
///
/// The file is flushed and closed before this returns, so a successful
/// `Report` means the whole file is on disk.
pub fn generate_file(path: &Path, template: &dyn UnitTemplate, count: u64) -> Result<Report> {
    debug!(path = %path.display(), count, "generating");
    let start = Instant::now();

    let file = File::create(path)
        .with_context(|| format!("failed to create file: {}", path.display()))?;
    let mut out = CountingWriter::new(BufWriter::with_capacity(WRITE_BUFFER, file));

    write_source(&mut out, template, count)
        .and_then(|()| out.flush())
        .with_context(|| format!("failed to write file: {}", path.display()))?;

    let bytes = out.count;
    drop(out);

    let report = Report {
        units: count,
        bytes,
        elapsed: start.elapsed(),
    };
    debug!(
        path = %path.display(),
        bytes = report.bytes,
        elapsed = ?report.elapsed,
        "generated"
    );
    Ok(report)
}

/// Counts bytes accepted by the inner writer.
struct CountingWriter<W> {
    inner: W,
    count: u64,
}

impl<W> CountingWriter<W> {
    fn new(inner: W) -> Self {
        Self { inner, count: 0 }
    }
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.count += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
