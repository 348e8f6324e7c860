use glam::{Vec3, Vec4};

use crate::math::Transform;
use crate::registry::SphereEntity;

/// Fraction of the sphere radius at which the inner cube starts its orbit.
const CUBE_ORBIT_FRACTION: f32 = 0.35;

/// Fully saturated hue-wheel color with opaque alpha. `hue` in [0, 1).
pub fn hue_color(hue: f32) -> Vec4 {
    let h = (hue * 6.0) % 6.0;
    let x = 1.0 - ((h % 2.0) - 1.0).abs();

    let (r, g, b) = match h as i32 {
        0 => (1.0, x, 0.0),
        1 => (x, 1.0, 0.0),
        2 => (0.0, 1.0, x),
        3 => (0.0, x, 1.0),
        4 => (x, 0.0, 1.0),
        _ => (1.0, 0.0, x),
    };

    Vec4::new(r, g, b, 1.0)
}

/// Build one sphere entity with its inner cube offset from the center so
/// the orbit is visible.
pub fn make_sphere(center: Vec3, radius: f32, color: Vec4) -> SphereEntity {
    let cube_offset = Vec3::new(radius * CUBE_ORBIT_FRACTION, 0.0, 0.0);
    SphereEntity::new(
        center,
        radius,
        color,
        Transform::from_position(center + cube_offset),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hue_color_red_at_zero() {
        let c = hue_color(0.0);
        assert!((c.x - 1.0).abs() < 1e-6);
        assert!(c.y.abs() < 1e-6);
        assert!(c.z.abs() < 1e-6);
        assert_eq!(c.w, 1.0);
    }

    #[test]
    fn hue_color_stays_in_range() {
        for i in 0..12 {
            let c = hue_color(i as f32 / 12.0);
            for channel in [c.x, c.y, c.z] {
                assert!((0.0..=1.0).contains(&channel));
            }
        }
    }

    #[test]
    fn make_sphere_offsets_inner_cube() {
        let s = make_sphere(Vec3::new(5.0, 0.0, 0.0), 2.0, Vec4::ONE);
        let orbit = s.inner_cube.position.distance(s.position);
        assert!((orbit - 0.7).abs() < 1e-6);
    }
}
