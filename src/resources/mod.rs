//! Renderer-independent resource definitions:
//! - Mesh: geometry plus material
//! - Material: unlit, optionally textured material
//! - Primitives: triangle geometry

pub mod material;
pub mod mesh;
pub mod primitives;

pub use material::{Material, Side, TextureSource};
pub use mesh::Mesh;
pub use primitives::{TriangleGeometry, create_triangle, triangle_height};
