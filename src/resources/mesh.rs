use crate::resources::material::Material;
use crate::resources::primitives::TriangleGeometry;

/// Geometry plus the material it is drawn with.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    pub geometry: TriangleGeometry,
    pub material: Material,
}

impl Mesh {
    #[must_use]
    pub fn new(geometry: TriangleGeometry, material: Material) -> Self {
        Self { geometry, material }
    }

    /// Whether the mesh would leave any mark on the frame.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        !self.material.transparent || self.material.opacity > 0.0
    }
}
