use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::IndexedMesh;
use super::builder::face_normal;

/// Write an indexed mesh to a binary STL file
///
/// Binary STL format:
/// - 80 byte header
/// - 4 byte u32 triangle count (little endian)
/// - For each triangle:
///   - 3 x f32 normal (12 bytes)
///   - 3 x 3 x f32 vertices (36 bytes)
///   - 2 byte attribute (usually 0)
///
/// STL has no index buffer, so each index triple is expanded back to
/// raw vertices with a per-face normal.
pub fn write_stl(path: &Path, mesh: &IndexedMesh) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create STL file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    let header: [u8; 80] =
        *b"poly2mesh - ear-clipped outline mesh                                            ";
    writer.write_all(&header)?;

    // Triangle count (u32, little endian)
    let count = mesh.triangle_count() as u32;
    writer.write_all(&count.to_le_bytes())?;

    for tri in mesh.indices.chunks(3) {
        let v0 = mesh.vertices[tri[0] as usize];
        let v1 = mesh.vertices[tri[1] as usize];
        let v2 = mesh.vertices[tri[2] as usize];

        // Normal (3 x f32)
        for &n in &face_normal(v0, v1, v2) {
            writer.write_all(&n.to_le_bytes())?;
        }

        // Vertices (3 vertices x 3 coords x f32)
        for vertex in [v0, v1, v2] {
            for &coord in &vertex {
                writer.write_all(&coord.to_le_bytes())?;
            }
        }

        // Attribute byte count (2 bytes, usually 0)
        writer.write_all(&[0u8, 0u8])?;
    }

    writer.flush()?;

    Ok(())
}

/// Get the file size of an STL with the given number of triangles
pub fn estimate_stl_size(triangle_count: usize) -> usize {
    // 80 (header) + 4 (count) + triangles * (12 normal + 36 vertices + 2 attribute)
    80 + 4 + triangle_count * 50
}
