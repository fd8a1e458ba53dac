//! Infinite Square Well
//!
//! An electron in a 10 nm box in the (3,3,3) state, sampled on a lattice and
//! colored red (node) to blue (antinode) by |ψ|.
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

    let scenario = Scenario::square_well_3d();
    let scene = WaveScene::new(scenario)?;
    let config = ViewerConfig::new(
        format!("{} - |ψ| on a lattice", scenario.name),
        scene.point_count(),
    );

    run_scene(config, scene)?;
    Ok(())
}
