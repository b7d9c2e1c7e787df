pub mod svg;

pub use svg::{render_outline, render_triangles};
