//! poly2mesh - Triangulate 2D polygon outlines into triangle meshes via ear clipping

pub mod config;
pub mod domain;
pub mod mesh;
pub mod render;
pub mod triangulate;
