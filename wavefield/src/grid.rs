//! Sample point generation
//!
//! Points come either from a regular lattice (bounds + step) or from a seeded
//! uniform cloud inside the bounds. All coordinates are in the units of the
//! field being sampled.

use crate::error::{Error, Result};
use glam::DVec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Slack for step ratios that land a hair under a whole number
const STEP_RATIO_EPSILON: f64 = 1e-9;

const AXES: [char; 3] = ['x', 'y', 'z'];

/// Axis-aligned box, per-axis `[min, max]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: DVec3,
    pub max: DVec3,
}

impl Bounds {
    pub fn new(min: DVec3, max: DVec3) -> Self {
        Self { min, max }
    }

    /// Same `[min, max]` on every axis
    pub fn cube(min: f64, max: f64) -> Self {
        Self::new(DVec3::splat(min), DVec3::splat(max))
    }

    pub fn extent(&self) -> DVec3 {
        self.max - self.min
    }

    pub fn contains(&self, p: DVec3) -> bool {
        p.cmpge(self.min).all() && p.cmple(self.max).all()
    }

    /// Reject non-finite bounds and inverted ranges
    pub fn validate(&self) -> Result<()> {
        for (i, axis) in AXES.iter().enumerate() {
            let (min, max) = (self.min[i], self.max[i]);
            if !min.is_finite() || !max.is_finite() {
                return Err(Error::InvalidBounds(format!(
                    "{axis}: bounds must be finite, got [{min}, {max}]"
                )));
            }
            if min > max {
                return Err(Error::InvalidBounds(format!(
                    "{axis}: min {min} > max {max}"
                )));
            }
        }
        Ok(())
    }
}

/// Where a lattice axis stops
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LatticeEnd {
    /// Run one step past the last point at or below `max`, so the final
    /// sample may sit up to `step` beyond the bound
    #[default]
    Overshoot,
    /// Stop at the last point at or below `max`
    Inclusive,
}

/// Regular 3D lattice, iterated x outermost, then y, then z
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lattice {
    pub bounds: Bounds,
    pub step: DVec3,
    pub end: LatticeEnd,
}

impl Lattice {
    pub fn new(bounds: Bounds, step: f64) -> Self {
        Self {
            bounds,
            step: DVec3::splat(step),
            end: LatticeEnd::default(),
        }
    }

    pub fn with_steps(mut self, step: DVec3) -> Self {
        self.step = step;
        self
    }

    pub fn with_end(mut self, end: LatticeEnd) -> Self {
        self.end = end;
        self
    }

    /// Number of samples along each axis
    pub fn axis_counts(&self) -> Result<[usize; 3]> {
        self.bounds.validate()?;

        let mut counts = [0usize; 3];
        for (i, axis) in AXES.iter().enumerate() {
            let step = self.step[i];
            if !step.is_finite() || step <= 0.0 {
                return Err(Error::InvalidBounds(format!(
                    "{axis}: step must be positive, got {step}"
                )));
            }
            let span = self.bounds.max[i] - self.bounds.min[i];
            let ratio = (span / step + STEP_RATIO_EPSILON).floor();
            let extra = match self.end {
                LatticeEnd::Overshoot => 2,
                LatticeEnd::Inclusive => 1,
            };
            counts[i] = if ratio.is_finite() && ratio < usize::MAX as f64 {
                (ratio as usize).checked_add(extra)
            } else {
                None
            }
            .ok_or_else(|| too_large(format!("{axis}: {span} / {step} steps")))?;
        }
        Ok(counts)
    }

    /// Total number of samples; fails if the points would not fit in memory
    pub fn point_count(&self) -> Result<usize> {
        let [nx, ny, nz] = self.axis_counts()?;
        nx.checked_mul(ny)
            .and_then(|n| n.checked_mul(nz))
            .filter(|n| {
                n.checked_mul(std::mem::size_of::<DVec3>())
                    .is_some_and(|bytes| bytes <= isize::MAX as usize)
            })
            .ok_or_else(|| too_large(format!("{nx} x {ny} x {nz} points")))
    }

    pub fn generate(&self) -> Result<Vec<DVec3>> {
        let total = self.point_count()?;
        let [nx, ny, nz] = self.axis_counts()?;
        let min = self.bounds.min;
        let step = self.step;

        let mut points = Vec::with_capacity(total);
        for ix in 0..nx {
            let x = min.x + ix as f64 * step.x;
            for iy in 0..ny {
                let y = min.y + iy as f64 * step.y;
                for iz in 0..nz {
                    let z = min.z + iz as f64 * step.z;
                    points.push(DVec3::new(x, y, z));
                }
            }
        }

        log::debug!("Lattice {}x{}x{} -> {} points", nx, ny, nz, points.len());
        Ok(points)
    }
}

/// Seeded uniform point cloud inside `[min, max)` per axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RandomCloud {
    pub bounds: Bounds,
    pub count: usize,
    pub seed: u64,
}

impl RandomCloud {
    pub fn new(bounds: Bounds, count: usize, seed: u64) -> Self {
        Self { bounds, count, seed }
    }

    pub fn generate(&self) -> Result<Vec<DVec3>> {
        self.bounds.validate()?;

        let mut rng = StdRng::seed_from_u64(self.seed);
        let min = self.bounds.min;
        let extent = self.bounds.extent();

        // x, y, z drawn in order for each point; a zero-width axis stays at min
        let points: Vec<DVec3> = (0..self.count)
            .map(|_| {
                let x = min.x + rng.gen::<f64>() * extent.x;
                let y = min.y + rng.gen::<f64>() * extent.y;
                let z = min.z + rng.gen::<f64>() * extent.z;
                DVec3::new(x, y, z)
            })
            .collect();

        log::debug!("Random cloud (seed {}) -> {} points", self.seed, points.len());
        Ok(points)
    }
}

/// Uniform per-axis velocities in `[min, max)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VelocityRange {
    pub min: f64,
    pub max: f64,
    pub seed: u64,
}

impl VelocityRange {
    pub fn new(min: f64, max: f64, seed: u64) -> Self {
        Self { min, max, seed }
    }

    pub fn generate(&self, count: usize) -> Result<Vec<DVec3>> {
        if !self.min.is_finite() || !self.max.is_finite() || self.min > self.max {
            return Err(Error::InvalidBounds(format!(
                "velocity range [{}, {}]",
                self.min, self.max
            )));
        }

        let mut rng = StdRng::seed_from_u64(self.seed);
        let span = self.max - self.min;
        Ok((0..count)
            .map(|_| {
                DVec3::new(
                    self.min + rng.gen::<f64>() * span,
                    self.min + rng.gen::<f64>() * span,
                    self.min + rng.gen::<f64>() * span,
                )
            })
            .collect())
    }
}

/// How a scenario lays out its sample points
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Layout {
    Lattice(Lattice),
    Random(RandomCloud),
}

impl Layout {
    pub fn generate(&self) -> Result<Vec<DVec3>> {
        match self {
            Layout::Lattice(lattice) => lattice.generate(),
            Layout::Random(cloud) => cloud.generate(),
        }
    }
}

fn too_large(what: String) -> Error {
    Error::InvalidBounds(format!("lattice too large: {what}"))
}

/// Multiply every coordinate by `factor`
pub fn scale_points(points: &[DVec3], factor: f64) -> Vec<DVec3> {
    points.iter().map(|p| *p * factor).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lattice_count_includes_overshoot() {
        let lattice = Lattice::new(Bounds::new(DVec3::ZERO, DVec3::new(2.0, 1.0, 3.0)), 0.5);
        // floor(span/0.5) + 2 per axis: 6, 4, 8
        assert_eq!(lattice.axis_counts().unwrap(), [6, 4, 8]);

        let points = lattice.generate().unwrap();
        assert_eq!(points.len(), 6 * 4 * 8);
        let last = *points.last().unwrap();
        assert_eq!(last, DVec3::new(2.5, 1.5, 3.5));
    }

    #[test]
    fn lattice_points_stay_within_one_step_of_bounds() {
        let bounds = Bounds::new(DVec3::new(-1.0, 0.0, 2.0), DVec3::new(1.3, 0.75, 2.0));
        let step = DVec3::new(0.25, 0.125, 0.5);
        let lattice = Lattice::new(bounds, 1.0).with_steps(step);

        let points = lattice.generate().unwrap();
        let expected: usize = (0..3)
            .map(|i| ((bounds.max[i] - bounds.min[i]) / step[i]).floor() as usize + 2)
            .product();
        assert_eq!(points.len(), expected);

        let upper = bounds.max + step;
        for p in points {
            assert!(p.cmpge(bounds.min).all());
            assert!(p.cmple(upper + DVec3::splat(1e-12)).all());
        }
    }

    #[test]
    fn lattice_order_is_x_outermost() {
        let lattice = Lattice::new(Bounds::cube(0.0, 1.0), 1.0).with_end(LatticeEnd::Inclusive);
        let points = lattice.generate().unwrap();
        assert_eq!(points.len(), 8);
        assert_eq!(points[0], DVec3::new(0.0, 0.0, 0.0));
        assert_eq!(points[1], DVec3::new(0.0, 0.0, 1.0));
        assert_eq!(points[2], DVec3::new(0.0, 1.0, 0.0));
        assert_eq!(points[4], DVec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn inclusive_lattice_stops_at_max() {
        let lattice = Lattice::new(Bounds::cube(-12.0, 12.0), 1.0).with_end(LatticeEnd::Inclusive);
        assert_eq!(lattice.axis_counts().unwrap(), [25, 25, 25]);
        assert!(lattice
            .generate()
            .unwrap()
            .iter()
            .all(|p| lattice.bounds.contains(*p)));
    }

    #[test]
    fn step_ratio_rounding_does_not_drop_a_point() {
        // 10e-9 / (10e-9 / 10) is not exactly 10 in floating point
        let length = 10e-9;
        let lattice = Lattice::new(Bounds::cube(0.0, length), length / 10.0);
        assert_eq!(lattice.axis_counts().unwrap(), [12, 12, 12]);
    }

    #[test]
    fn inverted_bounds_are_rejected() {
        let lattice = Lattice::new(Bounds::new(DVec3::ZERO, DVec3::new(1.0, -1.0, 1.0)), 0.1);
        assert!(matches!(lattice.generate(), Err(Error::InvalidBounds(_))));

        let cloud = RandomCloud::new(Bounds::cube(5.0, 1.0), 10, 38);
        assert!(matches!(cloud.generate(), Err(Error::InvalidBounds(_))));
    }

    #[test]
    fn non_positive_step_is_rejected() {
        for step in [0.0, -0.5, f64::NAN] {
            let lattice = Lattice::new(Bounds::cube(0.0, 1.0), step);
            assert!(matches!(lattice.axis_counts(), Err(Error::InvalidBounds(_))));
        }
    }

    #[test]
    fn oversized_lattice_is_rejected() {
        // 10^7 + 2 per axis cubed does not fit in usize
        let lattice = Lattice::new(Bounds::cube(0.0, 1.0), 1e-7);
        assert!(matches!(lattice.point_count(), Err(Error::InvalidBounds(_))));
        assert!(matches!(lattice.generate(), Err(Error::InvalidBounds(_))));

        // Per-axis count alone overflows
        let lattice = Lattice::new(Bounds::cube(0.0, 1.0), 1e-30);
        assert!(matches!(lattice.axis_counts(), Err(Error::InvalidBounds(_))));
        assert!(matches!(
            lattice.with_end(LatticeEnd::Inclusive).point_count(),
            Err(Error::InvalidBounds(_))
        ));
    }

    #[test]
    fn random_cloud_is_deterministic_per_seed() {
        let bounds = Bounds::cube(0.0, 15.0);
        let a = RandomCloud::new(bounds, 25, 38).generate().unwrap();
        let b = RandomCloud::new(bounds, 25, 38).generate().unwrap();
        assert_eq!(a, b);

        let c = RandomCloud::new(bounds, 25, 39).generate().unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn random_cloud_respects_half_open_bounds() {
        let bounds = Bounds::new(DVec3::ZERO, DVec3::new(12.0, 12.0, 0.0));
        let points = RandomCloud::new(bounds, 1000, 38).generate().unwrap();
        assert_eq!(points.len(), 1000);
        for p in points {
            assert!(p.x >= 0.0 && p.x < 12.0);
            assert!(p.y >= 0.0 && p.y < 12.0);
            assert_eq!(p.z, 0.0);
        }
    }

    #[test]
    fn velocities_are_seeded_and_bounded() {
        let range = VelocityRange::new(-0.2, 0.2, 7);
        let a = range.generate(50).unwrap();
        assert_eq!(a, range.generate(50).unwrap());
        for v in a {
            assert!(v.cmpge(DVec3::splat(-0.2)).all() && v.cmplt(DVec3::splat(0.2)).all());
        }

        assert!(VelocityRange::new(1.0, 0.0, 7).generate(3).is_err());
    }

    #[test]
    fn scaling_maps_nanometres_to_scene_units() {
        let scaled = scale_points(&[DVec3::new(1e-9, 2e-9, 0.0)], 1e9);
        assert!((scaled[0] - DVec3::new(1.0, 2.0, 0.0)).length() < 1e-9);
    }
}
