use crate::resources::mesh::Mesh;
use crate::scene::transform::Transform;

/// A scene node: a transform plus an optional mesh.
///
/// Nodes are flat; the scene has no parent/child hierarchy, so a node's
/// local matrix is also its world matrix.
#[derive(Debug, Clone)]
pub struct Node {
    pub name: String,
    pub transform: Transform,
    pub mesh: Option<Mesh>,
    /// Visibility flag, independent of material opacity.
    pub visible: bool,
}

impl Node {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            transform: Transform::new(),
            mesh: None,
            visible: true,
        }
    }

    #[must_use]
    pub fn with_mesh(name: impl Into<String>, mesh: Mesh) -> Self {
        Self {
            mesh: Some(mesh),
            ..Self::new(name)
        }
    }

    /// Material opacity, if the node carries a mesh.
    #[must_use]
    pub fn opacity(&self) -> Option<f32> {
        self.mesh.as_ref().map(|m| m.material.opacity)
    }

    pub fn set_opacity(&mut self, opacity: f32) {
        if let Some(mesh) = &mut self.mesh {
            mesh.material.opacity = opacity;
        }
    }
}
