//! Closed-form wave functions
//!
//! Every field is a pure function of position and time: the same inputs
//! always give the same value and nothing is cached between calls.

use crate::complex::Complex;
use crate::constants::{ELECTRON_MASS, HBAR, TIME_SCALE};
use glam::DVec3;
use std::f64::consts::PI;

/// Physical constants for a particle in a cubic box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuantumSystem {
    /// Reduced Planck constant (J·s)
    pub hbar: f64,
    /// Particle mass (kg)
    pub mass: f64,
    /// Side of the box (m)
    pub well_length: f64,
    /// Quantum numbers (n_x, n_y, n_z)
    pub quantum_numbers: [u32; 3],
}

impl Default for QuantumSystem {
    /// An electron in a 10 nm box in the (3, 3, 3) state
    fn default() -> Self {
        Self {
            hbar: HBAR,
            mass: ELECTRON_MASS,
            well_length: 10e-9,
            quantum_numbers: [3, 3, 3],
        }
    }
}

impl QuantumSystem {
    pub fn new(well_length: f64, quantum_numbers: [u32; 3]) -> Self {
        Self {
            well_length,
            quantum_numbers,
            ..Self::default()
        }
    }

    /// Ground-state electron on a 10-unit plate, used by the perturbed
    /// boundary demo
    pub fn plate() -> Self {
        Self::new(10.0, [1, 1, 1])
    }

    /// E = (πħ)² Σn² / (2 m L²)
    pub fn energy(&self) -> f64 {
        let n_sq: u32 = self.quantum_numbers.iter().map(|n| n * n).sum();
        (PI * self.hbar).powi(2) * n_sq as f64 / (2.0 * self.mass * self.well_length.powi(2))
    }

    pub fn inside(&self, pos: DVec3) -> bool {
        pos.to_array()
            .iter()
            .all(|&c| (0.0..=self.well_length).contains(&c))
    }

    /// Stationary amplitude 2·sqrt(8/L³)·Π sin(n_i π x_i / L), zero outside the box
    pub fn amplitude_at(&self, pos: DVec3) -> f64 {
        if !self.inside(pos) {
            return 0.0;
        }

        let l = self.well_length;
        let mut amplitude = 2.0 * (8.0 / l.powi(3)).sqrt();
        for (n, x) in self.quantum_numbers.iter().zip(pos.to_array()) {
            amplitude *= (*n as f64 * PI * x / l).sin();
        }
        amplitude
    }

    /// ψ(r, t) = amplitude · e^(-iEt/ħ), with `t` first multiplied by [`TIME_SCALE`]
    pub fn wavefunction_at(&self, pos: DVec3, t: f64) -> Complex {
        if !self.inside(pos) {
            return Complex::ZERO;
        }

        let t = t * TIME_SCALE;
        let phase = Complex::exp_i(-self.energy() * t / self.hbar);
        phase * self.amplitude_at(pos)
    }
}

/// The wave functions the demos can plot
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WaveField {
    /// Time-dependent infinite square well
    SquareWell(QuantumSystem),
    /// √5·sin(π(x+t)/5)·sin(π(y+t)/10)·sin(π(z+t)/5)/25
    Travelling,
    /// Static √5·sin(πx/5)·sin(πy/10)·sin(πz/5)/25, zero beyond |10| on any axis
    BoxedStanding,
    /// 2D plate wave weighted by x·y, with a phase wobble; z is ignored
    PerturbedBoundary(QuantumSystem),
}

impl WaveField {
    /// Full (possibly complex) value at a point
    pub fn value_at(&self, pos: DVec3, t: f64) -> Complex {
        match *self {
            WaveField::SquareWell(system) => system.wavefunction_at(pos, t),
            WaveField::Travelling => Complex::real(travelling_wave(pos, t)),
            WaveField::BoxedStanding => Complex::real(boxed_standing_wave(pos)),
            WaveField::PerturbedBoundary(system) => perturbed_boundary(&system, pos.x, pos.y, t),
        }
    }

    /// Real scalar used for display: |ψ| for the square well, the real part
    /// for everything else
    pub fn scalar_at(&self, pos: DVec3, t: f64) -> f64 {
        let value = self.value_at(pos, t);
        match self {
            WaveField::SquareWell(_) => value.norm(),
            _ => value.re,
        }
    }

    /// Sample the scalar projection at every point
    pub fn sample(&self, points: &[DVec3], t: f64) -> Vec<f64> {
        points.iter().map(|p| self.scalar_at(*p, t)).collect()
    }

    pub fn name(&self) -> &'static str {
        match self {
            WaveField::SquareWell(_) => "infinite square well",
            WaveField::Travelling => "travelling wave",
            WaveField::BoxedStanding => "boxed standing wave",
            WaveField::PerturbedBoundary(_) => "perturbed boundary",
        }
    }
}

fn travelling_wave(pos: DVec3, t: f64) -> f64 {
    let DVec3 { x, y, z } = pos;
    5.0_f64.sqrt() * (PI * (x + t) / 5.0).sin() * (PI * (y + t) / 10.0).sin() * (PI * (z + t) / 5.0).sin()
        / 25.0
}

fn boxed_standing_wave(pos: DVec3) -> f64 {
    let DVec3 { x, y, z } = pos;
    if x.abs() > 10.0 || y.abs() > 10.0 || z.abs() > 10.0 {
        return 0.0;
    }
    5.0_f64.sqrt() * (PI * x / 5.0).sin() * (PI * y / 10.0).sin() * (PI * z / 5.0).sin() / 25.0
}

fn perturbed_boundary(system: &QuantumSystem, x: f64, y: f64, t: f64) -> Complex {
    let a = system.well_length;
    let [nx, ny, _] = system.quantum_numbers;
    let omega = PI * PI * system.hbar / (system.mass * a * a);

    let plate = if x <= a && y <= a {
        2.0 / a * (nx as f64 * PI * x / a).sin() * (ny as f64 * PI * y / a).sin() * (t * omega).cos()
    } else {
        0.0
    };
    let wobble = -(omega * t).sin();

    Complex::exp_i(wobble) * (x * y * plate)
}
