use super::TriangulateError;
use super::ear::find_ear;
use crate::domain::{Point, Triangle};

/// Triangulate a single simple polygon by iterative ear clipping.
///
/// The ring is expected clockwise. Fewer than 3 points yield an empty
/// list; exactly 3 pass through as one triangle. Otherwise ears are
/// clipped from a working copy until 3 vertices remain, emitting each
/// ear as (previous, ear, next). A simple n-gon produces exactly n - 2
/// triangles.
///
/// Self-intersecting or wrongly wound input can leave the ring without
/// any ear, which surfaces as [`TriangulateError::NoEarFound`].
pub fn triangulate_simple(points: &[Point]) -> Result<Vec<Triangle>, TriangulateError> {
    if points.len() < 3 {
        return Ok(Vec::new());
    }

    let mut remaining = points.to_vec();
    let mut triangles = Vec::with_capacity(remaining.len() - 2);

    while remaining.len() > 3 {
        let n = remaining.len();
        let ear = find_ear(&remaining).ok_or(TriangulateError::NoEarFound { remaining: n })?;
        triangles.push(Triangle::new(
            remaining[(ear + n - 1) % n],
            remaining[ear],
            remaining[(ear + 1) % n],
        ));
        remaining.remove(ear);
    }

    triangles.push(Triangle::new(remaining[0], remaining[1], remaining[2]));
    Ok(triangles)
}
