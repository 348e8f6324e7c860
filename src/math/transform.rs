use glam::{Quat, Vec3};

/// World transform for a scene object - position plus orientation.
/// Scale is not modelled; the effect only moves and spins objects.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
}

impl Transform {
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            rotation: Quat::IDENTITY,
        }
    }

    /// Orbit this transform around `point` about `axis` by `angle_degrees`.
    /// The axis need not be normalized. The orientation picks up the same
    /// rotation, so the object keeps its facing relative to the orbit.
    pub fn rotate_around(&mut self, point: Vec3, axis: Vec3, angle_degrees: f32) {
        let rotation = Quat::from_axis_angle(axis.normalize(), angle_degrees.to_radians());
        self.position = point + rotation * (self.position - point);
        self.rotation = rotation * self.rotation;
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::from_position(Vec3::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    #[test]
    fn rotate_around_quarter_turn_about_y() {
        let mut t = Transform::from_position(Vec3::new(1.0, 0.0, 0.0));
        t.rotate_around(Vec3::ZERO, Vec3::Y, 90.0);

        // glam quaternions rotate counter-clockwise about +Y: x -> -z
        assert!((t.position - Vec3::new(0.0, 0.0, -1.0)).length() < EPS);
    }

    #[test]
    fn rotate_around_preserves_orbit_radius() {
        let center = Vec3::new(2.0, 1.0, -3.0);
        let mut t = Transform::from_position(center + Vec3::new(0.5, 0.2, 0.0));
        let radius = t.position.distance(center);

        for _ in 0..10 {
            t.rotate_around(center, Vec3::new(1.0, 1.0, 0.0), 17.0);
        }

        assert!((t.position.distance(center) - radius).abs() < EPS);
    }

    #[test]
    fn rotate_around_ignores_axis_magnitude() {
        let mut a = Transform::from_position(Vec3::new(1.0, 0.0, 0.0));
        let mut b = a;

        a.rotate_around(Vec3::ZERO, Vec3::new(1.0, 1.0, 0.0), 45.0);
        b.rotate_around(Vec3::ZERO, Vec3::new(2.0, 2.0, 0.0), 45.0);

        assert!((a.position - b.position).length() < EPS);
    }

    #[test]
    fn rotate_around_composes_orientation() {
        let mut t = Transform::from_position(Vec3::ZERO);
        t.rotate_around(Vec3::ZERO, Vec3::Y, 90.0);
        t.rotate_around(Vec3::ZERO, Vec3::Y, 90.0);

        let expected = Quat::from_axis_angle(Vec3::Y, std::f32::consts::PI);
        assert!(t.rotation.angle_between(expected) < EPS);
    }

    #[test]
    fn zero_angle_is_identity() {
        let mut t = Transform::from_position(Vec3::new(4.0, 5.0, 6.0));
        let before = t;
        t.rotate_around(Vec3::ZERO, Vec3::new(1.0, 1.0, 0.0), 0.0);

        assert!((t.position - before.position).length() < EPS);
        assert!(t.rotation.angle_between(before.rotation) < EPS);
    }
}
