//! Wave Field Sampling
//!
//! The numeric core behind the wave demos:
//!
//! - **Generation**: regular lattices and seeded point clouds ([`grid`])
//! - **Sampling**: closed-form wave functions, including the infinite square well ([`field`])
//! - **Normalization**: min-max and z-score over a whole batch ([`normalize`])
//! - **Coloring**: two-endpoint gradients ([`color`])
//!
//! [`pipeline`] chains these once per animation tick and [`scenario`] holds
//! the presets for each demo. [`export`] and [`serial`] cover the file and
//! serial-port side.

pub mod error;
pub mod complex;
pub mod grid;
pub mod field;
pub mod normalize;
pub mod color;
pub mod motion;
pub mod pipeline;
pub mod scenario;
pub mod export;
pub mod serial;

pub use error::{Error, Result};

/// Physical constants for the well-based fields
pub mod constants {
    /// Reduced Planck constant (J·s)
    pub const HBAR: f64 = 1.0545718e-34;

    /// Electron mass (kg)
    pub const ELECTRON_MASS: f64 = 9.10938356e-31;

    /// Factor applied to `t` before the square-well phase is computed
    pub const TIME_SCALE: f64 = 1e-9;
}
