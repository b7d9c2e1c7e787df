/// A point in the 2D outline coordinate space.
///
/// Equality is exact coordinate equality. Duplicate or near-duplicate
/// points get no special handling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A triangle of raw outline points, as emitted by the triangulator.
///
/// Vertices keep their input coordinates; no new points are synthesized
/// and no index buffer is involved at this level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    /// Three vertices in emission order (previous, ear, next)
    pub vertices: [Point; 3],
}

impl Triangle {
    pub fn new(a: Point, b: Point, c: Point) -> Self {
        Self { vertices: [a, b, c] }
    }

    /// Unsigned area from the 2D cross product of the edge vectors
    pub fn area(&self) -> f32 {
        let [a, b, c] = self.vertices;
        ((b.x - a.x) * (c.y - a.y) - (c.x - a.x) * (b.y - a.y)).abs() / 2.0
    }
}
