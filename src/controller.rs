use glam::Vec3;

use crate::registry::SphereHandle;
use crate::traits::SphereProvider;

/// Degrees-per-second multiplier applied to the inner-cube speed factor.
pub const INNER_CUBE_BASE_SPEED: f32 = 30.0;

/// Inner cubes closer than this are treated as the same cube during
/// registration.
const POSITION_EPSILON: f32 = 1e-5;

/// Orbit axis for every inner cube. Not normalized here; `rotate_around`
/// normalizes it.
const INNER_CUBE_AXIS: Vec3 = Vec3::new(1.0, 1.0, 0.0);

/// Per-frame effect controller for a set of fading spheres.
///
/// Each frame [`update`](Self::update) refreshes the sphere set from the
/// provider, derives a visibility flag and a material alpha from the viewer
/// distance, and spins every registered inner cube around its parent
/// sphere's center at a distance-dependent speed.
///
/// The fade arithmetic is intentionally literal: the hide threshold compares
/// the surface-adjusted distance against the raw bounding radius, the alpha
/// ramp `distance^3` is clamped only from above, and the cube speed factor
/// `(5 - distance)^2` grows again for far-away cubes. None of these get
/// defensive correction.
#[derive(Debug, Default)]
pub struct ProximityEffectController {
    /// Registered inner cubes, keyed by parent sphere handle. Insertion
    /// order, never shrinks; a stale handle is skipped during animation.
    tracked: Vec<SphereHandle>,
    /// Sphere handles seen this frame, in provider order.
    sphere_cache: Vec<SphereHandle>,
}

impl ProximityEffectController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of inner cubes registered so far.
    pub fn tracked_count(&self) -> usize {
        self.tracked.len()
    }

    /// Handles seen by the most recent refresh, in provider order.
    pub fn cached_spheres(&self) -> &[SphereHandle] {
        &self.sphere_cache
    }

    /// Per-frame driver: refresh the sphere set, then animate the cubes.
    /// Skips the animation step entirely on an empty frame.
    pub fn update<P: SphereProvider>(&mut self, provider: &mut P, viewer: Vec3, delta_time: f32) {
        if self.refresh_spheres(provider, viewer) {
            self.advance_inner_cubes(provider, viewer, delta_time);
        }
    }

    /// Refresh the cached sphere set and apply the distance-based fade to
    /// every sphere. Returns `false` when the provider has no spheres, which
    /// callers must treat as "nothing to animate this frame".
    pub fn refresh_spheres<P: SphereProvider>(&mut self, provider: &mut P, viewer: Vec3) -> bool {
        self.sphere_cache = provider.handles();
        if self.sphere_cache.is_empty() {
            return false;
        }

        let cache = std::mem::take(&mut self.sphere_cache);
        for &handle in &cache {
            let Some(sphere) = provider.get_mut(handle) else {
                continue;
            };

            // Uniform-mesh assumption: one axis of the bounds is the radius.
            let radius = sphere.bounding_radius();
            // Distance from the surface rather than the center, so the fade
            // starts before the viewer reaches the mesh.
            let distance = sphere.position.distance(viewer) - radius;

            // Hide the mesh once the viewer is at the edge of the sphere.
            // The threshold is the raw radius, not zero.
            sphere.mesh_visible = distance > radius;

            // Exponential fade ramp, clamped above only. A viewer past the
            // surface-adjusted threshold drives the alpha negative and that
            // value is written through.
            let mut alpha = distance * distance * distance;
            if alpha > 1.0 {
                alpha = 1.0;
            }
            sphere.material_color.w = alpha;

            let cube_position = sphere.inner_cube.position;
            self.register_cube(provider, handle, cube_position);
        }
        self.sphere_cache = cache;
        true
    }

    /// Register a sphere's inner cube in the tracked list. Linear scan over
    /// the existing entries by cube position: a cube is appended only when
    /// the scan finishes without a match, so a previously unseen cube is
    /// appended exactly once and discovery is a no-op in steady state.
    fn register_cube<P: SphereProvider>(
        &mut self,
        provider: &P,
        handle: SphereHandle,
        cube_position: Vec3,
    ) {
        if self.tracked.is_empty() {
            self.tracked.push(handle);
            return;
        }

        let already_tracked = self.tracked.iter().any(|&entry| {
            provider
                .get(entry)
                .map(|sphere| {
                    sphere
                        .inner_cube
                        .position
                        .abs_diff_eq(cube_position, POSITION_EPSILON)
                })
                .unwrap_or(false)
        });
        if !already_tracked {
            self.tracked.push(handle);
        }
    }

    /// Spin every registered inner cube around its parent sphere's center.
    /// Only valid on frames where [`refresh_spheres`](Self::refresh_spheres)
    /// returned `true`; [`update`](Self::update) enforces that.
    pub fn advance_inner_cubes<P: SphereProvider>(
        &mut self,
        provider: &mut P,
        viewer: Vec3,
        delta_time: f32,
    ) {
        for &handle in &self.tracked {
            // A removed sphere leaves its entry behind; the stale handle
            // resolves to nothing and the entry is skipped.
            let Some(sphere) = provider.get_mut(handle) else {
                continue;
            };

            let sphere_center = sphere.position;
            let cube_distance = viewer.distance(sphere.inner_cube.position);
            // Unclamped: cubes far past 5 units spin fast again. Literal
            // rule, kept as-is.
            let speed_factor = (5.0 - cube_distance) * (5.0 - cube_distance);
            let angular_speed = INNER_CUBE_BASE_SPEED * speed_factor;

            sphere.inner_cube.rotate_around(
                sphere_center,
                INNER_CUBE_AXIS,
                angular_speed * delta_time,
            );
        }
    }
}
