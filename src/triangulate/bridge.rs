use super::TriangulateError;
use super::clip::triangulate_simple;
use super::predicates::is_clockwise;
use crate::domain::{Outline, Point, Triangle};

/// Index of the hole vertex with the largest x coordinate.
///
/// Strict comparison during the scan, so the first maximal vertex wins
/// on ties. The tie-break order is arbitrary, not semantic.
fn rightmost_index(hole: &[Point]) -> usize {
    let mut index = 0;
    let mut max_x = hole[0].x;
    for (i, p) in hole.iter().enumerate() {
        if p.x > max_x {
            max_x = p.x;
            index = i;
        }
    }
    index
}

/// Index of the outer vertex nearest to `target` by squared distance.
/// First minimal vertex wins on ties.
fn nearest_index(target: Point, outer: &[Point]) -> usize {
    let mut index = 0;
    let mut best = f32::MAX;
    for (i, p) in outer.iter().enumerate() {
        let dist = (p.x - target.x) * (p.x - target.x) + (p.y - target.y) * (p.y - target.y);
        if dist < best {
            best = dist;
            index = i;
        }
    }
    index
}

/// Splice the hole ring into the outer ring through a degenerate
/// "there and back" bridge, producing one self-touching polygon the
/// clipping loop can consume directly.
///
/// The bridge starts at the outer vertex nearest the hole's rightmost
/// vertex, walks the full hole ring from that rightmost vertex, then
/// revisits the rightmost vertex and the seam vertex to close the cut.
/// The result has outer + hole + 2 vertices.
pub fn bridge_hole(outer: &[Point], hole: &[Point]) -> Vec<Point> {
    let rightmost = rightmost_index(hole);
    let seam = nearest_index(hole[rightmost], outer);

    let mut merged = Vec::with_capacity(outer.len() + hole.len() + 2);
    merged.extend_from_slice(&outer[..=seam]);
    for i in 0..hole.len() {
        merged.push(hole[(rightmost + i) % hole.len()]);
    }
    merged.push(hole[rightmost]);
    merged.push(outer[seam]);
    merged.extend_from_slice(&outer[seam + 1..]);
    merged
}

/// Triangulate an outer boundary with exactly one interior hole.
///
/// Rings are taken in caller order: the outer clockwise, the hole
/// counter-clockwise. Whether the hole actually lies inside the outer
/// boundary is not checked. Bridging can emit zero-area triangles along
/// the seam; they are left in the output (see `mesh::validation` for
/// filtering).
pub fn triangulate_with_hole(
    outer: &[Point],
    hole: &[Point],
) -> Result<Vec<Triangle>, TriangulateError> {
    triangulate_simple(&bridge_hole(outer, hole))
}

/// Triangulate an [`Outline`], enforcing ring winding first.
///
/// The outer ring is normalized to clockwise and the hole to
/// counter-clockwise, reversing rings supplied the other way around.
/// A hole with fewer than 3 vertices is treated as absent.
pub fn triangulate_outline(outline: &Outline) -> Result<Vec<Triangle>, TriangulateError> {
    let mut outer = outline.outer.clone();
    if !is_clockwise(&outer) {
        outer.reverse();
    }

    match &outline.hole {
        Some(hole) if hole.len() >= 3 => {
            let mut hole = hole.clone();
            if is_clockwise(&hole) {
                hole.reverse();
            }
            triangulate_with_hole(&outer, &hole)
        }
        _ => triangulate_simple(&outer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f32, y: f32) -> Point {
        Point::new(x, y)
    }

    /// 4x4 clockwise outer square
    fn outer_square() -> Vec<Point> {
        vec![p(0.0, 0.0), p(0.0, 4.0), p(4.0, 4.0), p(4.0, 0.0)]
    }

    /// Counter-clockwise unit hole at (1, 1)..(2, 2)
    fn hole_square() -> Vec<Point> {
        vec![p(1.0, 1.0), p(2.0, 1.0), p(2.0, 2.0), p(1.0, 2.0)]
    }

    fn total_area(triangles: &[Triangle]) -> f32 {
        triangles.iter().map(Triangle::area).sum()
    }

    #[test]
    fn test_bridge_structure() {
        let merged = bridge_hole(&outer_square(), &hole_square());
        assert_eq!(merged.len(), 10);

        // Splice happens right after the nearest outer vertex (0, 0),
        // starting from the hole's rightmost vertex (2, 1)
        assert_eq!(merged[0], p(0.0, 0.0));
        assert_eq!(merged[1], p(2.0, 1.0));
        // The hole ring keeps its cyclic order
        assert_eq!(merged[2], p(2.0, 2.0));
        assert_eq!(merged[3], p(1.0, 2.0));
        assert_eq!(merged[4], p(1.0, 1.0));
        // Return leg of the bridge: rightmost hole vertex, then the seam
        assert_eq!(merged[5], p(2.0, 1.0));
        assert_eq!(merged[6], p(0.0, 0.0));
        // Remainder of the outer ring
        assert_eq!(&merged[7..], &outer_square()[1..]);
    }

    #[test]
    fn test_rightmost_tie_break_keeps_first() {
        // Both right-edge vertices share x = 2; the scan keeps (2, 1)
        assert_eq!(rightmost_index(&hole_square()), 1);
    }

    #[test]
    fn test_nearest_tie_break_keeps_first() {
        // (2, 2) is equidistant from all four corners of the square
        assert_eq!(nearest_index(p(2.0, 2.0), &outer_square()), 0);
    }

    #[test]
    fn test_square_with_hole() {
        let triangles = triangulate_with_hole(&outer_square(), &hole_square()).unwrap();
        // Bridged ring has 10 vertices, so 10 - 2 triangles
        assert_eq!(triangles.len(), 8);
        // Outer area minus hole area
        assert!((total_area(&triangles) - 15.0).abs() < 1e-4);
    }

    #[test]
    fn test_outline_without_hole() {
        let triangles = triangulate_outline(&Outline::new(outer_square())).unwrap();
        assert_eq!(triangles.len(), 2);
        assert!((total_area(&triangles) - 16.0).abs() < 1e-4);
    }

    #[test]
    fn test_outline_normalizes_outer_winding() {
        let mut reversed = outer_square();
        reversed.reverse();
        let triangles = triangulate_outline(&Outline::new(reversed)).unwrap();
        assert_eq!(triangles.len(), 2);
        assert!((total_area(&triangles) - 16.0).abs() < 1e-4);
    }

    #[test]
    fn test_outline_normalizes_hole_winding() {
        // A clockwise-listed hole is reversed before bridging and ends
        // up identical to the correctly wound ring
        let mut cw_hole = hole_square();
        cw_hole.reverse();

        let expected = triangulate_outline(&Outline::with_hole(outer_square(), hole_square()));
        let actual = triangulate_outline(&Outline::with_hole(outer_square(), cw_hole));
        assert_eq!(actual, expected);
        assert_eq!(actual.unwrap().len(), 8);
    }

    #[test]
    fn test_outline_ignores_tiny_hole() {
        let outline = Outline::with_hole(outer_square(), vec![p(1.0, 1.0), p(2.0, 2.0)]);
        let triangles = triangulate_outline(&outline).unwrap();
        assert_eq!(triangles.len(), 2);
    }

    #[test]
    fn test_outline_under_three_points_is_empty() {
        let outline = Outline::new(vec![p(0.0, 0.0), p(4.0, 0.0)]);
        assert!(triangulate_outline(&outline).unwrap().is_empty());
    }
}
