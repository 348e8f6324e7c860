use glam::Vec3;

/// The single viewpoint the effect reads each frame. Position only; the
/// fade does not care where the viewer looks.
#[derive(Copy, Clone, Debug)]
pub struct Viewer {
    pub position: Vec3,
}

impl Viewer {
    pub fn new(position: Vec3) -> Self {
        Self { position }
    }
}

/// Piecewise-linear waypoint path for the headless demo viewer. Advances at
/// constant speed and loops back to the first waypoint.
#[derive(Clone, Debug)]
pub struct FlightPath {
    waypoints: Vec<Vec3>,
    speed: f32,
    leg: usize,
    traveled: f32,
}

impl FlightPath {
    /// `waypoints` must hold at least two points; `speed` is units/second.
    pub fn new(waypoints: Vec<Vec3>, speed: f32) -> Self {
        debug_assert!(waypoints.len() >= 2, "flight path needs at least two waypoints");
        Self {
            waypoints,
            speed,
            leg: 0,
            traveled: 0.0,
        }
    }

    fn leg_endpoints(&self) -> (Vec3, Vec3) {
        let from = self.waypoints[self.leg];
        let to = self.waypoints[(self.leg + 1) % self.waypoints.len()];
        (from, to)
    }

    /// Move along the path by `delta_time` seconds and return the new
    /// position.
    pub fn advance(&mut self, delta_time: f32) -> Vec3 {
        self.traveled += self.speed * delta_time;

        loop {
            let (from, to) = self.leg_endpoints();
            let leg_length = from.distance(to);
            if self.traveled < leg_length || leg_length == 0.0 {
                let t = if leg_length == 0.0 {
                    0.0
                } else {
                    self.traveled / leg_length
                };
                return from.lerp(to, t);
            }
            self.traveled -= leg_length;
            self.leg = (self.leg + 1) % self.waypoints.len();
        }
    }

    pub fn position(&self) -> Vec3 {
        let (from, to) = self.leg_endpoints();
        let leg_length = from.distance(to);
        if leg_length == 0.0 {
            from
        } else {
            from.lerp(to, self.traveled / leg_length)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advances_along_first_leg() {
        let mut path = FlightPath::new(
            vec![Vec3::ZERO, Vec3::new(10.0, 0.0, 0.0)],
            2.0,
        );
        let p = path.advance(1.0);
        assert!((p - Vec3::new(2.0, 0.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn crosses_waypoint_boundaries() {
        let mut path = FlightPath::new(
            vec![
                Vec3::ZERO,
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(1.0, 1.0, 0.0),
            ],
            1.0,
        );
        // 1.5 units: through the first leg and half of the second.
        let p = path.advance(1.5);
        assert!((p - Vec3::new(1.0, 0.5, 0.0)).length() < 1e-5);
    }

    #[test]
    fn loops_back_to_start() {
        let mut path = FlightPath::new(
            vec![Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0)],
            1.0,
        );
        // Path length is 2 (out and back); 2.25 units ends up 0.25 out.
        let p = path.advance(2.25);
        assert!((p - Vec3::new(0.25, 0.0, 0.0)).length() < 1e-5);
    }
}
