use std::path::Path;

use anyhow::{Context, Result};
use glam::{Vec3, Vec4};
use serde::{Deserialize, Serialize};

use crate::math::Transform;
use crate::registry::{SphereEntity, SphereRegistry};

/// One sphere in a JSON scene description.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SphereSpec {
    pub center: [f32; 3],
    pub radius: f32,
    #[serde(default = "default_color")]
    pub color: [f32; 4],
    /// Inner-cube offset from the sphere center.
    #[serde(default = "default_cube_offset")]
    pub cube_offset: [f32; 3],
}

fn default_color() -> [f32; 4] {
    [1.0, 1.0, 1.0, 1.0]
}

fn default_cube_offset() -> [f32; 3] {
    [0.35, 0.0, 0.0]
}

/// JSON scene description: a viewer start position plus a list of spheres.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SceneConfig {
    #[serde(default)]
    pub viewer: [f32; 3],
    pub spheres: Vec<SphereSpec>,
}

impl SceneConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read scene config {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("failed to parse scene config {}", path.display()))
    }

    pub fn viewer_start(&self) -> Vec3 {
        Vec3::from_array(self.viewer)
    }

    /// Materialize the description into a registry.
    pub fn build(&self) -> SphereRegistry {
        let mut registry = SphereRegistry::new();
        for spec in &self.spheres {
            let center = Vec3::from_array(spec.center);
            registry.insert(SphereEntity::new(
                center,
                spec.radius,
                Vec4::from_array(spec.color),
                Transform::from_position(center + Vec3::from_array(spec.cube_offset)),
            ));
        }
        registry
    }
}
