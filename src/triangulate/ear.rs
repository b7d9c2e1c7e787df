use super::predicates::{is_convex_corner, point_in_triangle};
use crate::domain::Point;

/// Whether the corner `b` (with ring neighbors `a` and `c`) is a
/// clippable ear: convex, and no other ring vertex lies inside or on
/// the triangle (a, b, c).
///
/// Vertices coordinate-equal to a, b, or c are excluded from the
/// containment scan, so a ring that revisits a point (as bridged
/// outlines do at the seam) does not block itself.
pub fn is_ear(a: Point, b: Point, c: Point, points: &[Point]) -> bool {
    if !is_convex_corner(a, b, c) {
        return false;
    }
    for &p in points {
        if p == a || p == b || p == c {
            continue;
        }
        if point_in_triangle(a, b, c, p) {
            return false;
        }
    }
    true
}

/// Index of the first ear in the ring, scanning in input order.
///
/// `None` means no corner qualifies. A simple clockwise polygon always
/// has an ear, so this signals malformed input.
pub fn find_ear(points: &[Point]) -> Option<usize> {
    let n = points.len();
    (0..n).find(|&i| is_ear(points[(i + n - 1) % n], points[i], points[(i + 1) % n], points))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f32, y: f32) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn test_first_ear_of_square() {
        let square = [p(0.0, 0.0), p(0.0, 1.0), p(1.0, 1.0), p(1.0, 0.0)];
        assert_eq!(find_ear(&square), Some(0));
    }

    #[test]
    fn test_no_ear_in_counter_clockwise_ring() {
        // Reversed winding makes every corner read as reflex
        let square = [p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0)];
        assert_eq!(find_ear(&square), None);
    }

    #[test]
    fn test_reflex_corner_is_not_an_ear() {
        // Clockwise arrowhead; the dent at (0.5, 0.5) is reflex
        let arrow = [p(0.0, 0.0), p(0.5, 1.0), p(1.0, 0.0), p(0.5, 0.5)];
        assert!(!is_ear(arrow[2], arrow[3], arrow[0], &arrow));
        // The corner at the origin is convex and unobstructed
        assert!(is_ear(arrow[3], arrow[0], arrow[1], &arrow));
    }

    #[test]
    fn test_contained_vertex_blocks_ear() {
        // The apex is convex, but the dent vertex sits inside its triangle
        let arrow = [p(0.0, 0.0), p(0.5, 1.0), p(1.0, 0.0), p(0.5, 0.5)];
        assert!(!is_ear(arrow[0], arrow[1], arrow[2], &arrow));
    }

    #[test]
    fn test_duplicate_seam_vertices_are_skipped() {
        // Ring revisiting (0, 0) must not block its own ears
        let ring = [
            p(0.0, 0.0),
            p(0.0, 1.0),
            p(1.0, 1.0),
            p(0.0, 0.0),
            p(1.0, -1.0),
        ];
        assert!(find_ear(&ring).is_some());
    }
}
