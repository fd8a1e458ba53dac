//! Complex field values

/// Complex number in double precision
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

impl Complex {
    pub const ZERO: Complex = Complex { re: 0.0, im: 0.0 };

    pub fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    pub fn real(re: f64) -> Self {
        Self { re, im: 0.0 }
    }

    /// e^(i*x)
    pub fn exp_i(x: f64) -> Self {
        Self {
            re: x.cos(),
            im: x.sin(),
        }
    }

    /// |z|
    pub fn norm(&self) -> f64 {
        self.re.hypot(self.im)
    }

    pub fn arg(&self) -> f64 {
        self.im.atan2(self.re)
    }
}

impl std::ops::Mul for Complex {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Self {
            re: self.re * rhs.re - self.im * rhs.im,
            im: self.re * rhs.im + self.im * rhs.re,
        }
    }
}

impl std::ops::Mul<f64> for Complex {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Self {
            re: self.re * rhs,
            im: self.im * rhs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn unit_phase_has_unit_norm() {
        for &x in &[0.0, 0.3, PI, -2.5, 1e6] {
            assert!((Complex::exp_i(x).norm() - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn multiplication_adds_phases() {
        let z = Complex::exp_i(0.4) * Complex::exp_i(0.5);
        assert!((z.arg() - 0.9).abs() < 1e-12);
        assert!(((Complex::new(3.0, 4.0) * 2.0).norm() - 10.0).abs() < 1e-12);
    }
}
