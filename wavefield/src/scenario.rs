//! Demo configurations
//!
//! A [`Scenario`] bundles everything one demo needs: where to sample, what to
//! sample, how to color it and how time advances. The presets reproduce the
//! reference demos; the `with_*` methods override individual pieces.

use crate::color::Gradient;
use crate::error::Result;
use crate::field::{QuantumSystem, WaveField};
use crate::grid::{scale_points, Bounds, Lattice, LatticeEnd, Layout, RandomCloud, VelocityRange};
use crate::normalize::Normalization;
use crate::pipeline::{ColoredSample, Pipeline};
use glam::{DVec3, Vec3};
use std::time::{SystemTime, UNIX_EPOCH};

/// Seed used by the reference point clouds
pub const REFERENCE_SEED: u64 = 38;

/// Source of the `t` passed to the field each tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Clock {
    /// Whole seconds since the Unix epoch
    WallSeconds,
    /// `start + step * tick`, the same for every point in the frame
    Ticks { start: f64, step: f64 },
}

impl Clock {
    pub fn time(&self, tick: u64) -> f64 {
        match *self {
            Clock::WallSeconds => SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs() as f64)
                .unwrap_or(0.0),
            Clock::Ticks { start, step } => start + step * tick as f64,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scenario {
    pub name: &'static str,
    pub layout: Layout,
    pub pipeline: Pipeline,
    pub clock: Clock,
    /// Per-tick motion for the sample points, if they move
    pub motion: Option<VelocityRange>,
    /// Factor from field units to scene units
    pub position_scale: f64,
    /// Draw each point at a height given by its field value
    pub height_from_value: bool,
    /// Axis lengths in scene units (x, y, z of the sample space)
    pub axis_lengths: DVec3,
    /// Billboard radius in clip units
    pub point_size: f32,
}

impl Scenario {
    /// Electron in a 10 nm box, (3,3,3) state, sampled every tenth of the box
    /// with one extra layer past the far walls
    pub fn square_well_3d() -> Self {
        let system = QuantumSystem::default();
        let length = system.well_length;
        let lattice = Lattice::new(Bounds::cube(0.0, length), length / 10.0);

        Self {
            name: "Infinite Square Well",
            layout: Layout::Lattice(lattice),
            pipeline: Pipeline::new(WaveField::SquareWell(system))
                .with_normalization(Some(Normalization::MinMax))
                .with_gradient(Gradient::RED_BLUE),
            clock: Clock::WallSeconds,
            motion: None,
            position_scale: 1e9,
            height_from_value: false,
            axis_lengths: DVec3::splat(10.0),
            point_size: 0.25,
        }
    }

    /// 25 seeded points drifting through a travelling wave
    pub fn bounce() -> Self {
        let cloud = RandomCloud::new(Bounds::cube(0.0, 15.0), 25, REFERENCE_SEED);

        Self {
            name: "Bouncing Points",
            layout: Layout::Random(cloud),
            pipeline: Pipeline::new(WaveField::Travelling)
                .with_normalization(Some(Normalization::ZScore))
                .with_gradient(Gradient::GREEN_BLUE),
            clock: Clock::WallSeconds,
            motion: Some(VelocityRange::new(-0.05, 0.05, REFERENCE_SEED + 1)),
            position_scale: 1.0,
            height_from_value: false,
            axis_lengths: DVec3::splat(15.0),
            point_size: 0.1,
        }
    }

    /// 10 000 points on a 12×12 plate, lifted by the real part of the field
    pub fn perturbed_boundary() -> Self {
        let count = 10_000;
        let cloud = RandomCloud::new(
            Bounds::new(DVec3::ZERO, DVec3::new(12.0, 12.0, 0.0)),
            count,
            REFERENCE_SEED,
        );

        Self {
            name: "Perturbed Boundary",
            layout: Layout::Random(cloud),
            pipeline: Pipeline::new(WaveField::PerturbedBoundary(QuantumSystem::plate()))
                .with_normalization(None)
                .with_gradient(Gradient::RED_BLUE),
            // One time unit per sample, as when points were drawn one at a
            // time; all points of a frame share the frame's start time
            clock: Clock::Ticks {
                start: 0.0,
                step: count as f64,
            },
            motion: None,
            position_scale: 1.0,
            height_from_value: true,
            axis_lengths: DVec3::new(12.0, 12.0, 1.0),
            point_size: 0.08,
        }
    }

    /// Static boxed wave on a unit lattice over [-12, 12]³, for CSV export
    pub fn boxed_standing_wave() -> Self {
        let lattice = Lattice::new(Bounds::cube(-12.0, 12.0), 1.0).with_end(LatticeEnd::Inclusive);

        Self {
            name: "Boxed Standing Wave",
            layout: Layout::Lattice(lattice),
            pipeline: Pipeline::new(WaveField::BoxedStanding).with_normalization(None),
            clock: Clock::Ticks {
                start: 0.0,
                step: 0.0,
            },
            motion: None,
            position_scale: 1.0,
            height_from_value: false,
            axis_lengths: DVec3::splat(12.0),
            point_size: 0.1,
        }
    }

    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_pipeline(mut self, pipeline: Pipeline) -> Self {
        self.pipeline = pipeline;
        self
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_motion(mut self, motion: Option<VelocityRange>) -> Self {
        self.motion = motion;
        self
    }

    /// Reseed the point cloud; lattices are unaffected
    pub fn with_seed(mut self, seed: u64) -> Self {
        if let Layout::Random(ref mut cloud) = self.layout {
            cloud.seed = seed;
        }
        self
    }

    /// Change how many random points are drawn; lattices are unaffected
    pub fn with_count(mut self, count: usize) -> Self {
        if let Layout::Random(ref mut cloud) = self.layout {
            cloud.count = count;
        }
        self
    }

    pub fn points(&self) -> Result<Vec<DVec3>> {
        self.layout.generate()
    }

    /// Sample, normalize and color `points` for the given tick
    pub fn frame(&self, points: &[DVec3], tick: u64) -> Result<Vec<ColoredSample>> {
        self.pipeline.run(points, self.clock.time(tick))
    }

    /// Where each sample is drawn: scaled, with the sample's z pointing up
    pub fn scene_positions(&self, samples: &[ColoredSample]) -> Vec<Vec3> {
        let positions: Vec<DVec3> = samples.iter().map(|s| s.position).collect();
        scale_points(&positions, self.position_scale)
            .into_iter()
            .zip(samples)
            .map(|(p, sample)| {
                let up = if self.height_from_value {
                    sample.value
                } else {
                    p.z
                };
                Vec3::new(p.x as f32, up as f32, p.y as f32)
            })
            .collect()
    }

    /// Centre of the axes box in scene space
    pub fn scene_center(&self) -> Vec3 {
        let l = self.axis_lengths;
        Vec3::new(l.x as f32, l.z as f32, l.y as f32) * 0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_generate_reference_sizes() {
        assert_eq!(Scenario::square_well_3d().points().unwrap().len(), 12 * 12 * 12);
        assert_eq!(Scenario::bounce().points().unwrap().len(), 25);
        assert_eq!(Scenario::perturbed_boundary().points().unwrap().len(), 10_000);
        assert_eq!(Scenario::boxed_standing_wave().points().unwrap().len(), 25 * 25 * 25);
    }

    #[test]
    fn overrides_apply_to_random_layouts_only() {
        let bounce = Scenario::bounce().with_count(7).with_seed(1);
        match bounce.layout {
            Layout::Random(cloud) => {
                assert_eq!(cloud.count, 7);
                assert_eq!(cloud.seed, 1);
            }
            Layout::Lattice(_) => panic!("bounce should use a random cloud"),
        }

        let well = Scenario::square_well_3d();
        assert_eq!(well.with_count(7).layout, well.layout);
    }

    #[test]
    fn tick_clock_is_linear() {
        let clock = Clock::Ticks { start: 2.0, step: 0.5 };
        assert_eq!(clock.time(0), 2.0);
        assert_eq!(clock.time(4), 4.0);
    }

    #[test]
    fn scene_position_swaps_y_and_z() {
        let scenario = Scenario::bounce();
        let sample = ColoredSample {
            position: DVec3::new(1.0, 2.0, 3.0),
            value: 9.0,
            normalized: 1.0,
            color: Default::default(),
        };
        assert_eq!(scenario.scene_positions(&[sample]), vec![Vec3::new(1.0, 3.0, 2.0)]);

        let plate = Scenario::perturbed_boundary();
        assert_eq!(plate.scene_positions(&[sample]), vec![Vec3::new(1.0, 9.0, 2.0)]);
    }

    #[test]
    fn square_well_positions_are_in_nanometres() {
        let scenario = Scenario::square_well_3d();
        let sample = ColoredSample {
            position: DVec3::new(2.5e-9, 5e-9, 10e-9),
            value: 0.0,
            normalized: 0.0,
            color: Default::default(),
        };
        let drawn = scenario.scene_positions(&[sample])[0];
        assert!((drawn - Vec3::new(2.5, 10.0, 5.0)).length() < 1e-5);
    }

    #[test]
    fn square_well_frame_is_normalized() {
        let scenario = Scenario::square_well_3d().with_clock(Clock::Ticks { start: 0.0, step: 1.0 });
        let points = scenario.points().unwrap();
        let frame = scenario.frame(&points, 3).unwrap();
        assert_eq!(frame.len(), points.len());
        assert!(frame.iter().all(|s| (0.0..=1.0).contains(&s.normalized)));
        assert!(frame.iter().any(|s| s.normalized == 1.0));
        // Faces of the box are nodes of the wave function
        assert_eq!(frame[0].value, 0.0);
    }
}
