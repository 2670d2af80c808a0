//! UV-space triangle geometry describing the shells of a texture.
use crate::error::{BleedError, Result};
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Triangles in UV space, indexed into a shared coordinate list.
///
/// UVs are nominally in `[0, 1]` with `v = 0` at the bottom edge of the
/// texture.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UvMesh {
    pub uvs: Vec<Vector2<f32>>,
    pub triangles: Vec<[u32; 3]>,
}

impl UvMesh {
    pub fn new(uvs: Vec<Vector2<f32>>, triangles: Vec<[u32; 3]>) -> Result<Self> {
        let mesh = Self { uvs, triangles };
        mesh.validate()?;
        Ok(mesh)
    }

    /// Check that every triangle references an existing uv.
    pub fn validate(&self) -> Result<()> {
        for (t, tri) in self.triangles.iter().enumerate() {
            if let Some(&v) = tri.iter().find(|&&v| v as usize >= self.uvs.len()) {
                return Err(BleedError::InvalidTriangle {
                    triangle: t,
                    vertex: v,
                });
            }
        }
        Ok(())
    }

    /// Corner uvs of triangle `t`.
    #[inline]
    pub fn triangle_uvs(&self, t: usize) -> [Vector2<f32>; 3] {
        self.triangles[t].map(|v| self.uvs[v as usize])
    }

    pub fn num_triangles(&self) -> usize {
        self.triangles.len()
    }
}

/// Load a `UvMesh` from a JSON file of the form
/// `{"uvs": [[u, v], ...], "triangles": [[a, b, c], ...]}`.
pub fn load_uv_mesh(path: &Path) -> std::result::Result<UvMesh, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read uv mesh {}: {e}", path.display()))?;
    let mesh: UvMesh = serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse uv mesh {}: {e}", path.display()))?;
    mesh.validate()
        .map_err(|e| format!("Invalid uv mesh {}: {e}", path.display()))?;
    Ok(mesh)
}
