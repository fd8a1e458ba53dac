//! Voltmeter readings from the microcontroller serial link
//!
//! The firmware sends each ADC channel as a big-endian `u16` followed by a
//! newline, channel 0 first:
//!
//! ```text
//! [hi0, lo0, '\n', hi1, lo1, '\n']  once per second
//! ```
//!
//! Opening and configuring the port is left to the operating system; this
//! module only decodes the byte stream and writes the CSV log.

use crate::error::{Error, Result};
use std::io::Write;

const FRAME_LEN: usize = 3;

pub const READING_HEADER: &str = "Timestamp,Voltage on ADC0 (V),Voltage on ADC1 (V)";

/// Raw counts from both channels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoltageReading {
    pub adc0: u16,
    pub adc1: u16,
}

/// Conversion from raw counts to volts
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdcScale {
    pub reference_volts: f64,
    pub full_scale: u16,
}

impl Default for AdcScale {
    fn default() -> Self {
        Self {
            reference_volts: 5.0,
            full_scale: u16::MAX,
        }
    }
}

impl AdcScale {
    pub fn volts(&self, counts: u16) -> f64 {
        counts as f64 / self.full_scale as f64 * self.reference_volts
    }
}

/// Incremental decoder; feed it whatever the port returns
#[derive(Debug, Default)]
pub struct AdcFrameDecoder {
    buf: Vec<u8>,
    pending: Option<u16>,
}

impl AdcFrameDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `bytes` and decode every complete frame.
    ///
    /// A frame whose third byte is not a newline yields `MalformedFrame`; the
    /// decoder then drops everything up to the next newline and starts a new
    /// channel pair.
    pub fn push(&mut self, bytes: &[u8]) -> Vec<Result<VoltageReading>> {
        self.buf.extend_from_slice(bytes);

        let mut out = Vec::new();
        let mut start = 0;
        while self.buf.len() - start >= FRAME_LEN {
            let frame = &self.buf[start..start + FRAME_LEN];
            if frame[2] != b'\n' {
                out.push(Err(Error::MalformedFrame(format!(
                    "expected newline, got {:#04x}",
                    frame[2]
                ))));
                self.pending = None;
                match self.buf[start..].iter().position(|&b| b == b'\n') {
                    Some(i) => start += i + 1,
                    None => start = self.buf.len(),
                }
                continue;
            }

            let value = u16::from_be_bytes([frame[0], frame[1]]);
            start += FRAME_LEN;
            match self.pending.take() {
                Some(adc0) => out.push(Ok(VoltageReading { adc0, adc1: value })),
                None => self.pending = Some(value),
            }
        }

        self.buf.drain(..start);
        out
    }
}

/// CSV log of readings, flushed after every row
pub struct ReadingLog<W: Write> {
    out: W,
    scale: AdcScale,
}

impl<W: Write> ReadingLog<W> {
    /// Write the header and return the log
    pub fn new(mut out: W, scale: AdcScale) -> Result<Self> {
        writeln!(out, "{READING_HEADER}")?;
        out.flush()?;
        Ok(Self { out, scale })
    }

    pub fn record(&mut self, timestamp: f64, reading: VoltageReading) -> Result<()> {
        writeln!(
            self.out,
            "{:.3},{:.4},{:.4}",
            timestamp,
            self.scale.volts(reading.adc0),
            self.scale.volts(reading.adc1)
        )?;
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
