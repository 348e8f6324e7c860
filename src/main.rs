use anyhow::{bail, Result};
use clap::Parser;
use glam::Vec3;
use log::info;

use sphere_fx::cli::Cli;
use sphere_fx::core::{Clock, Throttled};
use sphere_fx::scenes::{create_grid_scene, create_ring_scene, SceneConfig};
use sphere_fx::viewer::{FlightPath, Viewer};
use sphere_fx::{ProximityEffectController, SphereRegistry};

fn build_scene(cli: &Cli) -> Result<(SphereRegistry, Vec3)> {
    if let Some(path) = &cli.config {
        let config = SceneConfig::load(path)?;
        return Ok((config.build(), config.viewer_start()));
    }

    let registry = match cli.scene.as_str() {
        "ring" => create_ring_scene(cli.spheres, 10.0, 1.0),
        "grid" => create_grid_scene(4, 6.0, 1.0),
        other => bail!("unknown scene '{other}', expected 'ring' or 'grid'"),
    };
    Ok((registry, Vec3::new(0.0, 2.0, 16.0)))
}

/// Loop that dives through the ring and pulls back out, so the demo crosses
/// the fade and hide thresholds.
fn demo_flight(start: Vec3) -> FlightPath {
    FlightPath::new(
        vec![
            start,
            Vec3::new(0.0, 2.0, 4.0),
            Vec3::new(10.0, 1.0, 0.0),
            Vec3::new(0.0, 2.0, -12.0),
            Vec3::new(-10.0, 1.0, 0.0),
        ],
        4.0,
    )
}

fn log_frame_stats(frame: u64, registry: &SphereRegistry, viewer: &Viewer, tracked: usize) {
    let mut visible = 0usize;
    let mut min_alpha = f32::INFINITY;
    for (_, sphere) in registry.iter() {
        if sphere.mesh_visible {
            visible += 1;
        }
        min_alpha = min_alpha.min(sphere.material_color.w);
    }

    info!(
        "frame {:>6}  viewer ({:+.1} {:+.1} {:+.1})  visible {}/{}  min alpha {:+.3}  cubes tracked {}",
        frame,
        viewer.position.x,
        viewer.position.y,
        viewer.position.z,
        visible,
        registry.len(),
        min_alpha,
        tracked,
    );
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let (mut registry, viewer_start) = build_scene(&cli)?;
    info!(
        "sphere-fx demo started at [{}]: {} spheres, {} frames",
        chrono::Local::now().format("%H:%M:%S"),
        registry.len(),
        cli.frames,
    );

    let mut controller = ProximityEffectController::new();
    let mut viewer = Viewer::new(viewer_start);
    let mut flight = demo_flight(viewer_start);
    let mut clock = Clock::new();
    let mut stats_gate = Throttled::new(cli.stats_interval);

    let fixed_step = (cli.fps > 0.0).then(|| 1.0 / cli.fps);

    for frame in 0..cli.frames {
        let delta = match fixed_step {
            Some(step) => {
                clock.tick();
                step
            }
            None => clock.tick(),
        };

        viewer.position = flight.advance(delta);
        controller.update(&mut registry, viewer.position, delta);

        if stats_gate.try_tick(delta) {
            log_frame_stats(frame, &registry, &viewer, controller.tracked_count());
        }
    }

    info!(
        "done at [{}]: {} frames, {} cubes tracked",
        chrono::Local::now().format("%H:%M:%S"),
        clock.frame(),
        controller.tracked_count(),
    );
    Ok(())
}
