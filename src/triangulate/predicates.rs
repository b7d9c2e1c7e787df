use crate::domain::Point;

/// Cross product of the edges (b - a) and (c - a)
pub(crate) fn edge_cross(a: Point, b: Point, c: Point) -> f32 {
    (b.x - a.x) * (c.y - a.y) - (c.x - a.x) * (b.y - a.y)
}

/// True when the corner at `b` turns in the clockwise winding sense.
///
/// The sign convention assumes a clockwise-wound ring; reversing the
/// point order flips the verdict. Collinear corners are not convex.
pub fn is_convex_corner(a: Point, b: Point, c: Point) -> bool {
    edge_cross(a, b, c) < 0.0
}

/// Boundary-inclusive point-in-triangle test.
///
/// Checks which side of each edge `p` falls on; `p` is inside when all
/// three cross products share a sign. The non-strict comparisons make
/// points on an edge or at a vertex count as inside, and the test works
/// for either triangle winding.
pub fn point_in_triangle(a: Point, b: Point, c: Point, p: Point) -> bool {
    let c1 = edge_cross(a, b, p);
    let c2 = edge_cross(b, c, p);
    let c3 = edge_cross(c, a, p);
    (c1 <= 0.0 && c2 <= 0.0 && c3 <= 0.0) || (c1 >= 0.0 && c2 >= 0.0 && c3 >= 0.0)
}

/// Signed ring area (shoelace sum). Negative for clockwise rings under
/// the same sign convention as `is_convex_corner`.
pub fn signed_area(ring: &[Point]) -> f32 {
    let mut sum = 0.0;
    for i in 0..ring.len() {
        let p = ring[i];
        let q = ring[(i + 1) % ring.len()];
        sum += p.x * q.y - q.x * p.y;
    }
    sum / 2.0
}

pub fn is_clockwise(ring: &[Point]) -> bool {
    signed_area(ring) < 0.0
}
