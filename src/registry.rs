use glam::{Vec3, Vec4};

use crate::math::{Aabb, Transform};
use crate::traits::SphereProvider;

/// Stable identifier for a sphere in a [`SphereRegistry`]. Slot indices are
/// reused after removal, so a handle also carries the slot generation; a
/// handle to a removed sphere resolves to `None` instead of aliasing whatever
/// was inserted into the slot afterwards.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SphereHandle {
    index: u32,
    generation: u32,
}

/// One fading sphere plus the decorative cube nested at its center.
/// Owned by the registry; the proximity controller only reads positions and
/// writes the derived visual state.
#[derive(Clone, Debug)]
pub struct SphereEntity {
    pub position: Vec3,
    /// Mesh bounds; assumed spherical, so `half_extents().x` is the
    /// authoritative bounding radius.
    pub bounds: Aabb,
    pub mesh_visible: bool,
    pub material_color: Vec4,
    /// The sphere's sole child transform.
    pub inner_cube: Transform,
}

impl SphereEntity {
    pub fn new(position: Vec3, radius: f32, color: Vec4, inner_cube: Transform) -> Self {
        Self {
            position,
            bounds: Aabb::from_center_half_extents(position, Vec3::splat(radius)),
            mesh_visible: true,
            material_color: color,
            inner_cube,
        }
    }

    pub fn bounding_radius(&self) -> f32 {
        self.bounds.half_extents().x
    }
}

#[derive(Debug)]
struct Slot {
    generation: u32,
    entity: Option<SphereEntity>,
}

/// Explicit sphere collection handed to the controller each frame, replacing
/// any scene-graph tag query. Insertion order is the iteration order for
/// live slots.
#[derive(Debug, Default)]
pub struct SphereRegistry {
    slots: Vec<Slot>,
    free: Vec<u32>,
    len: usize,
}

impl SphereRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, entity: SphereEntity) -> SphereHandle {
        self.len += 1;
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.entity = Some(entity);
            SphereHandle {
                index,
                generation: slot.generation,
            }
        } else {
            let index = self.slots.len() as u32;
            self.slots.push(Slot {
                generation: 0,
                entity: Some(entity),
            });
            SphereHandle {
                index,
                generation: 0,
            }
        }
    }

    /// Remove a sphere, invalidating every outstanding handle to it.
    pub fn remove(&mut self, handle: SphereHandle) -> Option<SphereEntity> {
        let slot = self.slots.get_mut(handle.index as usize)?;
        if slot.generation != handle.generation {
            return None;
        }
        let entity = slot.entity.take()?;
        slot.generation += 1;
        self.free.push(handle.index);
        self.len -= 1;
        Some(entity)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = (SphereHandle, &SphereEntity)> {
        self.slots.iter().enumerate().filter_map(|(i, slot)| {
            let entity = slot.entity.as_ref()?;
            let handle = SphereHandle {
                index: i as u32,
                generation: slot.generation,
            };
            Some((handle, entity))
        })
    }
}

impl SphereProvider for SphereRegistry {
    fn handles(&self) -> Vec<SphereHandle> {
        self.iter().map(|(handle, _)| handle).collect()
    }

    fn get(&self, handle: SphereHandle) -> Option<&SphereEntity> {
        let slot = self.slots.get(handle.index as usize)?;
        if slot.generation != handle.generation {
            return None;
        }
        slot.entity.as_ref()
    }

    fn get_mut(&mut self, handle: SphereHandle) -> Option<&mut SphereEntity> {
        let slot = self.slots.get_mut(handle.index as usize)?;
        if slot.generation != handle.generation {
            return None;
        }
        slot.entity.as_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sphere_at(x: f32) -> SphereEntity {
        let position = Vec3::new(x, 0.0, 0.0);
        SphereEntity::new(
            position,
            1.0,
            Vec4::new(1.0, 1.0, 1.0, 1.0),
            Transform::from_position(position),
        )
    }

    #[test]
    fn insert_then_get() {
        let mut registry = SphereRegistry::new();
        let handle = registry.insert(sphere_at(2.0));

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get(handle).unwrap().position.x, 2.0);
    }

    #[test]
    fn removed_handle_is_stale() {
        let mut registry = SphereRegistry::new();
        let handle = registry.insert(sphere_at(1.0));

        assert!(registry.remove(handle).is_some());
        assert!(registry.get(handle).is_none());
        assert!(registry.remove(handle).is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn slot_reuse_does_not_revive_old_handle() {
        let mut registry = SphereRegistry::new();
        let old = registry.insert(sphere_at(1.0));
        registry.remove(old);

        let new = registry.insert(sphere_at(9.0));

        assert!(registry.get(old).is_none());
        assert_eq!(registry.get(new).unwrap().position.x, 9.0);
        assert_ne!(old, new);
    }

    #[test]
    fn handles_follow_slot_order() {
        let mut registry = SphereRegistry::new();
        let a = registry.insert(sphere_at(1.0));
        let b = registry.insert(sphere_at(2.0));
        let c = registry.insert(sphere_at(3.0));

        assert_eq!(registry.handles(), vec![a, b, c]);
    }

    #[test]
    fn bounding_radius_from_mesh_bounds() {
        let sphere = SphereEntity::new(
            Vec3::ZERO,
            2.5,
            Vec4::ONE,
            Transform::from_position(Vec3::ZERO),
        );
        assert_eq!(sphere.bounding_radius(), 2.5);
    }
}
