use glam::Vec3;

use super::common::{hue_color, make_sphere};
use crate::registry::SphereRegistry;

/// Flat `side` x `side` grid of spheres centered on the origin.
pub fn create_grid_scene(side: usize, spacing: f32, sphere_radius: f32) -> SphereRegistry {
    let mut registry = SphereRegistry::new();
    let half = (side as f32 - 1.0) * spacing * 0.5;

    for x in 0..side {
        for z in 0..side {
            let center = Vec3::new(
                x as f32 * spacing - half,
                sphere_radius,
                z as f32 * spacing - half,
            );
            let hue = (x * side + z) as f32 / (side * side) as f32;
            registry.insert(make_sphere(center, sphere_radius, hue_color(hue)));
        }
    }

    registry
}
