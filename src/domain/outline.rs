use serde::Deserialize;

use super::Point;

/// A polygon outline: an outer boundary and at most one interior hole.
///
/// Rings are implicitly closed (the last point connects back to the
/// first). The outer boundary is expected clockwise and the hole
/// counter-clockwise; `triangulate_outline` corrects rings supplied in
/// the opposite order.
#[derive(Debug, Clone)]
pub struct Outline {
    pub outer: Vec<Point>,
    pub hole: Option<Vec<Point>>,
}

impl Outline {
    pub fn new(outer: Vec<Point>) -> Self {
        Self { outer, hole: None }
    }

    pub fn with_hole(outer: Vec<Point>, hole: Vec<Point>) -> Self {
        Self {
            outer,
            hole: Some(hole),
        }
    }

    /// An outline needs at least 3 outer points to triangulate
    pub fn is_valid(&self) -> bool {
        self.outer.len() >= 3
    }

    /// All points of the outline, outer ring first
    pub fn points(&self) -> impl Iterator<Item = &Point> {
        self.outer.iter().chain(self.hole.iter().flatten())
    }
}

/// On-disk form of an outline (TOML or JSON)
///
/// ```toml
/// outer = [[0.0, 0.0], [0.0, 4.0], [4.0, 4.0], [4.0, 0.0]]
/// hole = [[1.0, 1.0], [2.0, 1.0], [2.0, 2.0], [1.0, 2.0]]
/// ```
#[derive(Debug, Deserialize)]
pub struct OutlineFile {
    pub outer: Vec<[f32; 2]>,
    #[serde(default)]
    pub hole: Option<Vec<[f32; 2]>>,
}

impl From<OutlineFile> for Outline {
    fn from(file: OutlineFile) -> Self {
        let to_points = |ring: Vec<[f32; 2]>| -> Vec<Point> {
            ring.into_iter().map(|[x, y]| Point::new(x, y)).collect()
        };
        Self {
            outer: to_points(file.outer),
            hole: file.hole.map(to_points),
        }
    }
}

/// Bounding box of a set of outline points
#[derive(Debug, Clone)]
pub struct Bounds {
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,
}

impl Bounds {
    /// Create bounds from a set of points
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Point>) -> Option<Self> {
        let mut points = points.into_iter();
        let first = points.next()?;

        let mut bounds = Self {
            min_x: first.x,
            max_x: first.x,
            min_y: first.y,
            max_y: first.y,
        };

        for p in points {
            bounds.min_x = bounds.min_x.min(p.x);
            bounds.max_x = bounds.max_x.max(p.x);
            bounds.min_y = bounds.min_y.min(p.y);
            bounds.max_y = bounds.max_y.max(p.y);
        }

        Some(bounds)
    }

    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }
}
