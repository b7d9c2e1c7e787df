//! Ear-clipping triangulation of simple polygon outlines.
//!
//! The pipeline is bridge (when a hole is present) -> clipping loop ->
//! ear detection -> geometry predicates. Input simplicity is not
//! validated; a non-simple ring surfaces as [`TriangulateError::NoEarFound`].

pub mod bridge;
pub mod clip;
pub mod ear;
pub mod predicates;

pub use bridge::{bridge_hole, triangulate_outline, triangulate_with_hole};
pub use clip::triangulate_simple;
pub use ear::{find_ear, is_ear};
pub use predicates::{is_clockwise, is_convex_corner, point_in_triangle, signed_area};

use thiserror::Error;

/// Errors that can occur during triangulation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TriangulateError {
    /// No corner of the working ring qualifies as an ear. A simple
    /// clockwise polygon always has one, so this signals
    /// self-intersecting or wrongly wound input.
    #[error("invalid polygon: no ear found among {remaining} remaining vertices")]
    NoEarFound { remaining: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TriangulateError::NoEarFound { remaining: 7 };
        assert_eq!(
            err.to_string(),
            "invalid polygon: no ear found among 7 remaining vertices"
        );
    }
}
