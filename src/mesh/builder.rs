use std::collections::HashMap;

use crate::domain::Triangle;

/// Axis-aligned bounding box of the mesh vertices
#[derive(Debug, Clone, PartialEq)]
pub struct Aabb {
    pub min: [f32; 3],
    pub max: [f32; 3],
}

/// Indexed triangle mesh assembled from raw triangulation output.
///
/// Coordinate-equal vertices are shared: each unique point appears once
/// in `vertices` (at z = 0) and triangles reference it through
/// `indices`, three per triangle. Normals are per vertex, averaged from
/// the adjacent face normals; clockwise 2D input faces -Z.
#[derive(Debug, Default)]
pub struct IndexedMesh {
    pub vertices: Vec<[f32; 3]>,
    pub indices: Vec<u32>,
    pub normals: Vec<[f32; 3]>,
    /// `None` for an empty mesh
    pub bounds: Option<Aabb>,
}

impl IndexedMesh {
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Build an indexed mesh from a triangle list.
///
/// Vertices are deduplicated by exact coordinate equality, first
/// occurrence assigning the index, so the result is deterministic for a
/// given triangle sequence.
pub fn build_indexed_mesh(triangles: &[Triangle]) -> IndexedMesh {
    let mut vertices: Vec<[f32; 3]> = Vec::new();
    let mut indices: Vec<u32> = Vec::with_capacity(triangles.len() * 3);
    // f32 is not Eq/Hash; key on the exact bit patterns
    let mut index_of: HashMap<(u32, u32), u32> = HashMap::new();

    for tri in triangles {
        for vertex in tri.vertices {
            let key = (vertex.x.to_bits(), vertex.y.to_bits());
            let index = *index_of.entry(key).or_insert_with(|| {
                vertices.push([vertex.x, vertex.y, 0.0]);
                (vertices.len() - 1) as u32
            });
            indices.push(index);
        }
    }

    let normals = vertex_normals(&vertices, &indices);
    let bounds = bounds_of(&vertices);

    IndexedMesh {
        vertices,
        indices,
        normals,
        bounds,
    }
}

/// Unnormalized face normal (cross product of the edge vectors)
fn face_cross(v0: [f32; 3], v1: [f32; 3], v2: [f32; 3]) -> [f32; 3] {
    let u = [v1[0] - v0[0], v1[1] - v0[1], v1[2] - v0[2]];
    let v = [v2[0] - v0[0], v2[1] - v0[1], v2[2] - v0[2]];

    [
        u[1] * v[2] - u[2] * v[1],
        u[2] * v[0] - u[0] * v[2],
        u[0] * v[1] - u[1] * v[0],
    ]
}

/// Unit face normal, falling back to -Z (the facing of clockwise input)
/// for degenerate triangles
pub(crate) fn face_normal(v0: [f32; 3], v1: [f32; 3], v2: [f32; 3]) -> [f32; 3] {
    normalize_or_down(face_cross(v0, v1, v2))
}

fn normalize_or_down(n: [f32; 3]) -> [f32; 3] {
    let len = (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt();
    if len > 1e-10 {
        [n[0] / len, n[1] / len, n[2] / len]
    } else {
        [0.0, 0.0, -1.0]
    }
}

/// Per-vertex normals: sum the (area-weighted) face normals around each
/// vertex, then normalize
fn vertex_normals(vertices: &[[f32; 3]], indices: &[u32]) -> Vec<[f32; 3]> {
    let mut sums = vec![[0.0f32; 3]; vertices.len()];

    for tri in indices.chunks(3) {
        let cross = face_cross(
            vertices[tri[0] as usize],
            vertices[tri[1] as usize],
            vertices[tri[2] as usize],
        );
        for &i in tri {
            let sum = &mut sums[i as usize];
            sum[0] += cross[0];
            sum[1] += cross[1];
            sum[2] += cross[2];
        }
    }

    sums.into_iter().map(normalize_or_down).collect()
}

fn bounds_of(vertices: &[[f32; 3]]) -> Option<Aabb> {
    let first = vertices.first()?;
    let mut bounds = Aabb {
        min: *first,
        max: *first,
    };

    for v in vertices {
        for axis in 0..3 {
            bounds.min[axis] = bounds.min[axis].min(v[axis]);
            bounds.max[axis] = bounds.max[axis].max(v[axis]);
        }
    }

    Some(bounds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Outline, Point};
    use crate::triangulate::triangulate_outline;

    fn p(x: f32, y: f32) -> Point {
        Point::new(x, y)
    }

    fn square_triangles() -> Vec<Triangle> {
        let square = Outline::new(vec![p(0.0, 0.0), p(0.0, 1.0), p(1.0, 1.0), p(1.0, 0.0)]);
        triangulate_outline(&square).unwrap()
    }

    #[test]
    fn test_square_dedups_shared_vertices() {
        let mesh = build_indexed_mesh(&square_triangles());

        // Two triangles share the diagonal: 4 unique vertices, 6 indices
        assert_eq!(mesh.vertices.len(), 4);
        assert_eq!(mesh.indices.len(), 6);
        assert_eq!(mesh.triangle_count(), 2);
        assert_eq!(mesh.normals.len(), mesh.vertices.len());
    }

    #[test]
    fn test_indices_reference_original_coordinates() {
        let triangles = square_triangles();
        let mesh = build_indexed_mesh(&triangles);

        for (tri, chunk) in triangles.iter().zip(mesh.indices.chunks(3)) {
            for (point, &index) in tri.vertices.iter().zip(chunk) {
                let v = mesh.vertices[index as usize];
                assert_eq!(v, [point.x, point.y, 0.0]);
            }
        }
    }

    #[test]
    fn test_clockwise_input_faces_down() {
        let mesh = build_indexed_mesh(&square_triangles());
        for n in &mesh.normals {
            assert!(n[0].abs() < 1e-6);
            assert!(n[1].abs() < 1e-6);
            assert!((n[2] + 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_bounds() {
        let mesh = build_indexed_mesh(&square_triangles());
        let bounds = mesh.bounds.unwrap();
        assert_eq!(bounds.min, [0.0, 0.0, 0.0]);
        assert_eq!(bounds.max, [1.0, 1.0, 0.0]);
    }

    #[test]
    fn test_empty_input() {
        let mesh = build_indexed_mesh(&[]);
        assert!(mesh.is_empty());
        assert!(mesh.vertices.is_empty());
        assert!(mesh.bounds.is_none());
    }

    #[test]
    fn test_hole_scenario_vertex_count() {
        let outline = Outline::with_hole(
            vec![p(0.0, 0.0), p(0.0, 4.0), p(4.0, 4.0), p(4.0, 0.0)],
            vec![p(1.0, 1.0), p(2.0, 1.0), p(2.0, 2.0), p(1.0, 2.0)],
        );
        let triangles = triangulate_outline(&outline).unwrap();
        let mesh = build_indexed_mesh(&triangles);

        // The bridged ring repeats two seam vertices; dedup collapses
        // them back to the 8 distinct input points
        assert_eq!(mesh.vertices.len(), 8);
        assert_eq!(mesh.indices.len(), 24);
    }
}
