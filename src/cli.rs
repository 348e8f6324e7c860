// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "sphere-fx")]
#[command(about = "Headless proximity-fade sphere demo", long_about = None)]
pub struct Cli {
    /// Built-in scene to run: "ring" or "grid"
    #[arg(long, default_value = "ring")]
    pub scene: String,

    /// JSON scene description; overrides --scene
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Number of frames to simulate
    #[arg(long, default_value_t = 600)]
    pub frames: u64,

    /// Fixed simulation rate in frames per second; 0 uses the wall clock
    #[arg(long, default_value_t = 60.0)]
    pub fps: f32,

    /// Number of spheres for the built-in ring scene
    #[arg(long, default_value_t = 8)]
    pub spheres: usize,

    /// Seconds between frame-stats log lines
    #[arg(long, default_value_t = 1.0)]
    pub stats_interval: f32,
}
