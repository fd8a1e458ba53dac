//! CSV export of sampled values
//!
//! One `x,y,z,value` row per sample, every number with six decimals.

use crate::error::Result;
use crate::pipeline::ColoredSample;
use glam::DVec3;
use std::io::Write;

pub const SAMPLE_HEADER: &str = "x,y,z,value";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CsvOptions {
    /// Write `x,y,z,value` before the first row
    pub header: bool,
}

impl CsvOptions {
    pub fn with_header(mut self, header: bool) -> Self {
        self.header = header;
        self
    }
}

/// Writes sample rows to any byte sink
pub struct SampleWriter<W: Write> {
    out: W,
    options: CsvOptions,
    rows: usize,
}

impl<W: Write> SampleWriter<W> {
    pub fn new(out: W, options: CsvOptions) -> Self {
        Self {
            out,
            options,
            rows: 0,
        }
    }

    pub fn write_row(&mut self, position: DVec3, value: f64) -> Result<()> {
        if self.rows == 0 && self.options.header {
            writeln!(self.out, "{SAMPLE_HEADER}")?;
        }
        writeln!(
            self.out,
            "{:.6},{:.6},{:.6},{:.6}",
            position.x, position.y, position.z, value
        )?;
        self.rows += 1;
        Ok(())
    }

    pub fn write_samples(&mut self, samples: &[ColoredSample]) -> Result<()> {
        for s in samples {
            self.write_row(s.position, s.value)?;
        }
        Ok(())
    }

    /// Flush and hand back the sink along with the number of rows written
    pub fn finish(mut self) -> Result<(W, usize)> {
        if self.rows == 0 && self.options.header {
            writeln!(self.out, "{SAMPLE_HEADER}")?;
        }
        self.out.flush()?;
        Ok((self.out, self.rows))
    }
}
