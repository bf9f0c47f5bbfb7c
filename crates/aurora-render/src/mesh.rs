//! UV-sphere mesh generation for the orb shells and the planet.

use glam::Vec3;

use crate::buffer::{VertexPosition, VertexPositionNormalUv};

/// A generated sphere mesh with positions, normals, UVs, and triangle indices.
pub struct SphereMesh {
    /// Vertex positions.
    pub positions: Vec<Vec3>,
    /// Normal vectors (same as normalized positions for a sphere).
    pub normals: Vec<Vec3>,
    /// Equirectangular UV coordinates per vertex.
    pub uvs: Vec<[f32; 2]>,
    /// Triangle indices.
    pub indices: Vec<u32>,
}

/// Generate a latitude/longitude sphere of the given radius.
///
/// `segments` is the horizontal division count, `rings` the vertical one.
/// Vertex layout is `(rings + 1)` rows of `(segments + 1)` columns with a
/// duplicated seam column so UVs wrap cleanly.
pub fn uv_sphere(radius: f32, segments: u32, rings: u32) -> SphereMesh {
    let segments = segments.max(3);
    let rings = rings.max(2);

    let vertex_count = ((rings + 1) * (segments + 1)) as usize;
    let mut positions = Vec::with_capacity(vertex_count);
    let mut normals = Vec::with_capacity(vertex_count);
    let mut uvs = Vec::with_capacity(vertex_count);

    for ring in 0..=rings {
        let v = ring as f32 / rings as f32;
        let polar = v * std::f32::consts::PI;
        let (sin_p, cos_p) = polar.sin_cos();

        for segment in 0..=segments {
            let u = segment as f32 / segments as f32;
            let azimuth = u * std::f32::consts::TAU;
            let (sin_a, cos_a) = azimuth.sin_cos();

            let normal = Vec3::new(sin_p * cos_a, cos_p, sin_p * sin_a);
            positions.push(normal * radius);
            normals.push(normal);
            uvs.push([u, v]);
        }
    }

    let mut indices = Vec::with_capacity((rings * segments * 6) as usize);
    let row_stride = segments + 1;
    for ring in 0..rings {
        for segment in 0..segments {
            let a = ring * row_stride + segment;
            let b = a + row_stride;
            // Two triangles per quad; degenerate at the poles is harmless.
            indices.extend_from_slice(&[a, b, a + 1, b, b + 1, a + 1]);
        }
    }

    SphereMesh {
        positions,
        normals,
        uvs,
        indices,
    }
}

impl SphereMesh {
    /// Flatten into position-only vertices for shell rendering.
    pub fn position_vertices(&self) -> Vec<VertexPosition> {
        self.positions
            .iter()
            .map(|p| VertexPosition {
                position: p.to_array(),
            })
            .collect()
    }

    /// Flatten into full vertices for lit textured rendering.
    pub fn textured_vertices(&self) -> Vec<VertexPositionNormalUv> {
        self.positions
            .iter()
            .zip(&self.normals)
            .zip(&self.uvs)
            .map(|((p, n), uv)| VertexPositionNormalUv {
                position: p.to_array(),
                normal: n.to_array(),
                uv: *uv,
            })
            .collect()
    }

    /// Build a line-list index buffer covering every unique triangle edge,
    /// for wireframe rendering without `POLYGON_MODE_LINE`.
    pub fn wireframe_indices(&self) -> Vec<u32> {
        use std::collections::HashSet;

        let mut edges: HashSet<(u32, u32)> = HashSet::new();
        for tri in self.indices.chunks_exact(3) {
            for (a, b) in [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])] {
                let key = if a < b { (a, b) } else { (b, a) };
                edges.insert(key);
            }
        }

        let mut lines = Vec::with_capacity(edges.len() * 2);
        for (a, b) in edges {
            lines.push(a);
            lines.push(b);
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_and_index_counts() {
        let mesh = uv_sphere(1.0, 32, 16);
        assert_eq!(mesh.positions.len(), (17 * 33) as usize);
        assert_eq!(mesh.indices.len(), (16 * 32 * 6) as usize);
        assert_eq!(mesh.positions.len(), mesh.normals.len());
        assert_eq!(mesh.positions.len(), mesh.uvs.len());
    }

    #[test]
    fn test_all_vertices_on_sphere() {
        let mesh = uv_sphere(3.0, 24, 12);
        for (i, p) in mesh.positions.iter().enumerate() {
            let r = p.length();
            assert!((r - 3.0).abs() < 1e-4, "vertex {i} at radius {r}");
        }
    }

    #[test]
    fn test_normals_are_unit_and_radial() {
        let mesh = uv_sphere(2.8, 16, 8);
        for (p, n) in mesh.positions.iter().zip(&mesh.normals) {
            assert!((n.length() - 1.0).abs() < 1e-5);
            assert!((p.normalize().dot(*n) - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_uvs_cover_unit_square() {
        let mesh = uv_sphere(1.0, 8, 4);
        for uv in &mesh.uvs {
            assert!((0.0..=1.0).contains(&uv[0]));
            assert!((0.0..=1.0).contains(&uv[1]));
        }
        assert!(mesh.uvs.iter().any(|uv| uv[0] == 0.0));
        assert!(mesh.uvs.iter().any(|uv| uv[0] == 1.0));
    }

    #[test]
    fn test_indices_in_range() {
        let mesh = uv_sphere(1.0, 12, 6);
        let max = mesh.positions.len() as u32;
        assert!(mesh.indices.iter().all(|&i| i < max));
    }

    #[test]
    fn test_wireframe_edges_are_unique_pairs() {
        let mesh = uv_sphere(1.0, 8, 4);
        let lines = mesh.wireframe_indices();
        assert_eq!(lines.len() % 2, 0);
        let max = mesh.positions.len() as u32;
        assert!(lines.iter().all(|&i| i < max));
        // Strictly fewer line indices than naively emitting all 3 edges per
        // triangle twice: shared edges must have been deduplicated.
        assert!(lines.len() < mesh.indices.len() * 2);
    }
}
