pub mod cli;
pub mod controller;
pub mod core;
pub mod math;
pub mod registry;
pub mod scenes;
pub mod traits;
pub mod viewer;

pub use controller::ProximityEffectController;
pub use registry::{SphereEntity, SphereHandle, SphereRegistry};
pub use scenes::{create_grid_scene, create_ring_scene, SceneConfig};
pub use traits::SphereProvider;
