//! Sample → normalize → color, once per tick

use crate::color::{Color, Gradient};
use crate::error::Result;
use crate::field::WaveField;
use crate::normalize::Normalization;
use glam::DVec3;

/// One sample ready for the renderer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColoredSample {
    pub position: DVec3,
    /// Scalar field value before normalization
    pub value: f64,
    /// Value after normalization (equal to `value` when none is applied)
    pub normalized: f64,
    pub color: Color,
}

/// Turns a set of points into colored samples
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pipeline {
    pub field: WaveField,
    /// `None` feeds raw values straight into the gradient (which clamps)
    pub normalization: Option<Normalization>,
    pub gradient: Gradient,
    /// Map a batch with no spread to zeros instead of failing
    pub zero_on_degenerate: bool,
}

impl Pipeline {
    pub fn new(field: WaveField) -> Self {
        Self {
            field,
            normalization: Some(Normalization::MinMax),
            gradient: Gradient::RED_BLUE,
            zero_on_degenerate: true,
        }
    }

    pub fn with_normalization(mut self, normalization: Option<Normalization>) -> Self {
        self.normalization = normalization;
        self
    }

    pub fn with_gradient(mut self, gradient: impl Into<Gradient>) -> Self {
        self.gradient = gradient.into();
        self
    }

    pub fn with_zero_on_degenerate(mut self, enabled: bool) -> Self {
        self.zero_on_degenerate = enabled;
        self
    }

    /// Normalize and color an already-sampled batch
    pub fn colorize(&self, values: &[f64]) -> Result<Vec<(f64, Color)>> {
        let normalized = match self.normalization {
            Some(method) if self.zero_on_degenerate => method.apply_or_zero(values)?,
            Some(method) => method.apply(values)?,
            None => values.to_vec(),
        };

        Ok(normalized
            .into_iter()
            .map(|v| (v, self.gradient.map(v)))
            .collect())
    }

    /// Evaluate the field at every point for time `t` and color the result
    pub fn run(&self, points: &[DVec3], t: f64) -> Result<Vec<ColoredSample>> {
        let values = self.field.sample(points, t);
        let colored = self.colorize(&values)?;

        Ok(points
            .iter()
            .zip(values)
            .zip(colored)
            .map(|((&position, value), (normalized, color))| ColoredSample {
                position,
                value,
                normalized,
                color,
            })
            .collect())
    }
}
