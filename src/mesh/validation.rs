//! Validation and filtering of raw triangulation output.
//!
//! Hole bridging can emit zero-area seam triangles, and garbage input
//! can produce non-finite coordinates. Consumers that cannot tolerate
//! either filter here before building a mesh.

use crate::domain::Triangle;

/// Result of validating a triangle list
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Total number of triangles validated
    pub total: usize,
    /// Number of degenerate triangles (zero or near-zero area)
    pub degenerate: usize,
    /// Number of triangles with invalid coordinates (NaN/Inf)
    pub invalid_coords: usize,
    /// Warning messages for issues found
    pub warnings: Vec<String>,
}

impl ValidationResult {
    /// Check if the list passed validation without critical issues
    pub fn is_valid(&self) -> bool {
        self.invalid_coords == 0
    }

    /// Check if the list has any issues at all
    pub fn has_issues(&self) -> bool {
        self.degenerate > 0 || self.invalid_coords > 0
    }

    /// Get a summary string
    pub fn summary(&self) -> String {
        if !self.has_issues() {
            format!("Triangulation valid: {} triangles, no issues", self.total)
        } else {
            format!(
                "Triangulation issues: {} total, {} degenerate, {} invalid coords",
                self.total, self.degenerate, self.invalid_coords
            )
        }
    }
}

/// Minimum area threshold for non-degenerate triangles
const MIN_TRIANGLE_AREA: f32 = 1e-10;

/// Validate a triangle list and return a detailed report
pub fn validate_triangles(triangles: &[Triangle]) -> ValidationResult {
    let mut result = ValidationResult {
        total: triangles.len(),
        ..Default::default()
    };

    for (i, tri) in triangles.iter().enumerate() {
        if has_invalid_coords(tri) {
            result.invalid_coords += 1;
            result
                .warnings
                .push(format!("Triangle {} has NaN/Inf coordinates", i));
            continue;
        }

        if is_degenerate(tri) {
            result.degenerate += 1;
        }
    }

    if result.degenerate > 0 {
        result.warnings.push(format!(
            "{} degenerate triangles detected (will be removed)",
            result.degenerate
        ));
    }

    result
}

/// Check if a triangle has any invalid (NaN/Inf) coordinates
fn has_invalid_coords(tri: &Triangle) -> bool {
    tri.vertices
        .iter()
        .any(|v| !v.x.is_finite() || !v.y.is_finite())
}

/// Check if a triangle is degenerate (zero or near-zero area)
fn is_degenerate(tri: &Triangle) -> bool {
    tri.area() < MIN_TRIANGLE_AREA
}

/// Remove degenerate and invalid triangles from a list
///
/// Returns a new vector containing only valid triangles
pub fn remove_degenerate(triangles: Vec<Triangle>) -> Vec<Triangle> {
    triangles
        .into_iter()
        .filter(|tri| !has_invalid_coords(tri) && !is_degenerate(tri))
        .collect()
}

/// Validate and clean a triangle list in one pass
///
/// Returns the cleaned list and the validation report
pub fn validate_and_clean(triangles: Vec<Triangle>) -> (Vec<Triangle>, ValidationResult) {
    let report = validate_triangles(&triangles);
    let cleaned = remove_degenerate(triangles);
    (cleaned, report)
}
