//! Voltmeter Logger
//!
//! Reads two-channel ADC frames from the microcontroller's serial device and
//! appends them, converted to volts, to a CSV file. The port itself (baud
//! rate, 8N1) must already be configured, e.g. with `stty`.
//!
//! Usage: adc_logger [DEVICE] [OUTPUT]
//! (defaults: /dev/ttyACM0, voltage_readings.csv)

use anyhow::Context;
use std::fs::File;
use std::io::{BufWriter, ErrorKind, Read};
use std::time::{SystemTime, UNIX_EPOCH};
use wavefield::serial::{AdcFrameDecoder, AdcScale, ReadingLog};

const DEFAULT_DEVICE: &str = "/dev/ttyACM0";
const DEFAULT_OUTPUT: &str = "voltage_readings.csv";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let device = args.next().unwrap_or_else(|| DEFAULT_DEVICE.to_string());
    let output = args.next().unwrap_or_else(|| DEFAULT_OUTPUT.to_string());

    let mut port = File::open(&device).with_context(|| format!("opening {device}"))?;
    let file = File::create(&output).with_context(|| format!("creating {output}"))?;
    let mut log = ReadingLog::new(BufWriter::new(file), AdcScale::default())?;
    let mut decoder = AdcFrameDecoder::new();

    log::info!("Logging {} to {}", device, output);

    let mut buf = [0u8; 64];
    let mut recorded = 0usize;
    loop {
        let n = match port.read(&mut buf) {
            Ok(0) => {
                log::info!("{} closed after {} readings", device, recorded);
                return Ok(());
            }
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e).with_context(|| format!("reading {device}")),
        };

        for reading in decoder.push(&buf[..n]) {
            match reading {
                Ok(reading) => {
                    let timestamp = SystemTime::now()
                        .duration_since(UNIX_EPOCH)
                        .map(|d| d.as_secs_f64())
                        .unwrap_or(0.0);
                    log.record(timestamp, reading)?;
                    recorded += 1;
                    log::debug!("ADC0={} ADC1={}", reading.adc0, reading.adc1);
                }
                Err(e) => log::warn!("Skipping frame: {}", e),
            }
        }
    }
}
