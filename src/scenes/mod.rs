mod common;
mod config;
mod grid;
mod ring;

pub use config::{SceneConfig, SphereSpec};
pub use grid::create_grid_scene;
pub use ring::create_ring_scene;
