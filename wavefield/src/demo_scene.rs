//! Scene adapter shared by the windowed demos

use common::{PointInstance, Scene, Segment};
use glam::{DVec3, Vec3};
use wavefield::color::Color;
use wavefield::motion::BounceState;
use wavefield::scenario::Scenario;

/// Runs a [`Scenario`] one tick per frame and keeps the instances the
/// renderer uploads
pub struct WaveScene {
    scenario: Scenario,
    points: Vec<DVec3>,
    motion: Option<BounceState>,
    tick: u64,
    instances: Vec<PointInstance>,
}

impl WaveScene {
    pub fn new(scenario: Scenario) -> wavefield::Result<Self> {
        let motion = match (scenario.motion, scenario.layout) {
            (Some(velocities), wavefield::grid::Layout::Random(cloud)) => {
                Some(BounceState::spawn(&cloud, &velocities)?)
            }
            (Some(_), _) => {
                log::warn!("{}: motion needs a random layout, points stay put", scenario.name);
                None
            }
            (None, _) => None,
        };

        let points = match &motion {
            Some(state) => state.positions(),
            None => scenario.points()?,
        };

        log::info!(
            "{}: {} points, {} field",
            scenario.name,
            points.len(),
            scenario.pipeline.field.name()
        );

        let mut scene = Self {
            scenario,
            points,
            motion,
            tick: 0,
            instances: Vec::new(),
        };
        scene.refresh()?;
        Ok(scene)
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    fn refresh(&mut self) -> wavefield::Result<()> {
        let samples = self.scenario.frame(&self.points, self.tick)?;
        let size = self.scenario.point_size;

        self.instances = self
            .scenario
            .scene_positions(&samples)
            .into_iter()
            .zip(&samples)
            .map(|(position, s)| PointInstance::new(position, size, s.color.to_rgba(1.0)))
            .collect();
        Ok(())
    }
}

impl Scene for WaveScene {
    fn update(&mut self, _dt: f32) {
        self.tick += 1;
        if let Some(state) = self.motion.take() {
            let state = state.advance();
            self.points = state.positions();
            self.motion = Some(state);
        }

        if let Err(e) = self.refresh() {
            log::error!("{}: tick {} failed: {}", self.scenario.name, self.tick, e);
        }
    }

    fn points(&self) -> &[PointInstance] {
        &self.instances
    }

    fn segments(&self) -> Vec<Segment> {
        let l = self.scenario.axis_lengths.as_vec3();
        let color = Color::DARK_BLUE.to_rgba(1.0);
        // Sample z is drawn along scene y
        [Vec3::new(l.x, 0.0, 0.0), Vec3::new(0.0, l.z, 0.0), Vec3::new(0.0, 0.0, l.y)]
            .into_iter()
            .map(|to| Segment {
                from: Vec3::ZERO,
                to,
                color,
            })
            .collect()
    }

    fn focus(&self) -> (Vec3, f32) {
        let extent = self.scenario.axis_lengths.max_element() as f32;
        (self.scenario.scene_center(), extent * 2.5)
    }
}
