//! Perturbed Boundary
//!
//! A plate of random points lifted and colored by the real part of a
//! perturbed two-dimensional well.
//!
//! Controls:
//! - Arrow keys: Rotate view
//! - Scroll: Zoom
//! - Space: Pause

mod demo_scene;

use common::{run_scene, ViewerConfig};
use demo_scene::WaveScene;
use wavefield::scenario::Scenario;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let scenario = Scenario::perturbed_boundary();
    let scene = WaveScene::new(scenario)?;
    let config = ViewerConfig::new(
        format!("{} - Re ψ as height", scenario.name),
        scene.point_count(),
    );

    run_scene(config, scene)?;
    Ok(())
}
