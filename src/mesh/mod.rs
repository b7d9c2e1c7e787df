pub mod builder;
pub mod stl;
pub mod validation;

pub use builder::{Aabb, IndexedMesh, build_indexed_mesh};
pub use stl::{estimate_stl_size, write_stl};
pub use validation::{ValidationResult, remove_degenerate, validate_and_clean, validate_triangles};
