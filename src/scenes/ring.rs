use glam::Vec3;

use super::common::{hue_color, make_sphere};
use crate::registry::SphereRegistry;

/// Spheres evenly spaced on a horizontal ring around the origin, colored
/// around the hue wheel.
pub fn create_ring_scene(count: usize, ring_radius: f32, sphere_radius: f32) -> SphereRegistry {
    let mut registry = SphereRegistry::new();

    for i in 0..count {
        let angle = i as f32 / count as f32 * std::f32::consts::TAU;
        let center = Vec3::new(
            angle.cos() * ring_radius,
            sphere_radius,
            angle.sin() * ring_radius,
        );
        let color = hue_color(i as f32 / count as f32);
        registry.insert(make_sphere(center, sphere_radius, color));
    }

    registry
}
