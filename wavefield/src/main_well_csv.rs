//! Boxed Standing Wave Export
//!
//! Samples the boxed standing wave on a unit lattice over [-12, 12]³ and
//! writes one `x,y,z,value` row per point.
//!
//! Usage: square_well_csv [OUTPUT] [--header]
//! (default output: wave_function_results.csv)

use anyhow::Context;
use std::fs::File;
use std::io::BufWriter;
use wavefield::export::{CsvOptions, SampleWriter};
use wavefield::scenario::Scenario;

const DEFAULT_OUTPUT: &str = "wave_function_results.csv";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut output = DEFAULT_OUTPUT.to_string();
    let mut options = CsvOptions::default();
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--header" => options = options.with_header(true),
            _ => output = arg,
        }
    }

    let scenario = Scenario::boxed_standing_wave();
    let points = scenario.points()?;
    let samples = scenario.frame(&points, 0)?;

    let file = File::create(&output).with_context(|| format!("creating {output}"))?;
    let mut writer = SampleWriter::new(BufWriter::new(file), options);
    writer
        .write_samples(&samples)
        .with_context(|| format!("writing {output}"))?;
    let (_, rows) = writer.finish()?;

    log::info!("Wrote {} rows of the {} to {}", rows, scenario.pipeline.field.name(), output);
    Ok(())
}
