use crate::registry::{SphereEntity, SphereHandle};

/// Source of sphere entities for the proximity controller. Decouples the
/// controller from any particular scene-graph implementation; the in-crate
/// [`SphereRegistry`](crate::registry::SphereRegistry) is the reference
/// implementation.
pub trait SphereProvider {
    /// Handles of all currently live spheres, in stable iteration order.
    fn handles(&self) -> Vec<SphereHandle>;

    /// Resolve a handle. `None` for a sphere that has since been removed.
    fn get(&self, handle: SphereHandle) -> Option<&SphereEntity>;

    /// Mutable resolve, used to write the derived visual state.
    fn get_mut(&mut self, handle: SphereHandle) -> Option<&mut SphereEntity>;
}
