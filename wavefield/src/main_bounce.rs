//! Bouncing Points
//!
//! Seeded points drift through a box and reflect off its walls; each one is
//! colored by the travelling wave at its current position, z-scored across
//! the cloud.
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

    let scenario = Scenario::bounce();
    let scene = WaveScene::new(scenario)?;
    let config = ViewerConfig::new(scenario.name, scene.point_count());

    run_scene(config, scene)?;
    Ok(())
}
