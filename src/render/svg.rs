//! SVG previews of an outline or its triangulation.
//!
//! Two mutually exclusive views, matching the two debug drawings the
//! pipeline supports: the input outline as closed green rings, or the
//! triangulation as red triangle edges. No geometric computation
//! happens here beyond bounding the drawing.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::domain::{Bounds, Outline, Point, Triangle};

const OUTLINE_COLOR: &str = "green";
const TRIANGLE_COLOR: &str = "red";

/// Maps input coordinates into SVG space: shifted by the margin and
/// flipped so +y points up like the input coordinate system
struct Viewport {
    min_x: f32,
    max_y: f32,
    margin: f32,
    width: f32,
    height: f32,
    stroke: f32,
}

impl Viewport {
    fn new(bounds: Option<Bounds>) -> Self {
        let bounds = bounds.unwrap_or(Bounds {
            min_x: 0.0,
            max_x: 1.0,
            min_y: 0.0,
            max_y: 1.0,
        });
        let max_dim = bounds.width().max(bounds.height()).max(1e-6);
        let margin = max_dim * 0.05;
        Self {
            min_x: bounds.min_x,
            max_y: bounds.max_y,
            margin,
            width: bounds.width() + 2.0 * margin,
            height: bounds.height() + 2.0 * margin,
            stroke: max_dim / 200.0,
        }
    }

    fn map(&self, p: Point) -> (f32, f32) {
        (p.x - self.min_x + self.margin, self.max_y - p.y + self.margin)
    }

    fn polygon_element(&self, ring: &[Point], color: &str) -> String {
        let points: Vec<String> = ring
            .iter()
            .map(|&p| {
                let (x, y) = self.map(p);
                format!("{},{}", x, y)
            })
            .collect();
        format!(
            "  <polygon points=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\" />",
            points.join(" "),
            color,
            self.stroke
        )
    }
}

/// Render the input outline: one closed ring for the outer boundary
/// and one for the hole, if present
pub fn render_outline(path: &Path, outline: &Outline) -> Result<()> {
    let viewport = Viewport::new(Bounds::from_points(outline.points()));

    let mut elements = vec![viewport.polygon_element(&outline.outer, OUTLINE_COLOR)];
    if let Some(hole) = &outline.hole {
        elements.push(viewport.polygon_element(hole, OUTLINE_COLOR));
    }

    write_svg(path, &viewport, &elements)
}

/// Render the triangulation: the three edges of every triangle
pub fn render_triangles(path: &Path, triangles: &[Triangle]) -> Result<()> {
    let all_points: Vec<Point> = triangles.iter().flat_map(|t| t.vertices).collect();
    let viewport = Viewport::new(Bounds::from_points(&all_points));

    let elements: Vec<String> = triangles
        .iter()
        .map(|tri| viewport.polygon_element(&tri.vertices, TRIANGLE_COLOR))
        .collect();

    write_svg(path, &viewport, &elements)
}

fn write_svg(path: &Path, viewport: &Viewport, elements: &[String]) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create SVG file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    writeln!(
        writer,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {} {}\">",
        viewport.width, viewport.height
    )?;
    for element in elements {
        writeln!(writer, "{}", element)?;
    }
    writeln!(writer, "</svg>")?;

    writer.flush()?;

    Ok(())
}
