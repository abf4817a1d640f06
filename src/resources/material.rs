/// Which faces of a mesh are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Side {
    #[default]
    Front,
    Double,
}

/// An image resource mapped onto a mesh. Decoding and upload are the
/// renderer's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureSource {
    pub uri: String,
}

impl TextureSource {
    #[must_use]
    pub fn new(uri: impl Into<String>) -> Self {
        Self { uri: uri.into() }
    }
}

/// Unlit material.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    pub map: Option<TextureSource>,
    pub side: Side,
    pub transparent: bool,
    pub opacity: f32,
    pub wireframe: bool,
}

impl Material {
    /// Double-sided, transparent material showing `uri`.
    #[must_use]
    pub fn textured(uri: impl Into<String>) -> Self {
        Self {
            map: Some(TextureSource::new(uri)),
            side: Side::Double,
            transparent: true,
            opacity: 1.0,
            wireframe: false,
        }
    }
}

impl Default for Material {
    fn default() -> Self {
        Self {
            map: None,
            side: Side::Front,
            transparent: false,
            opacity: 1.0,
            wireframe: false,
        }
    }
}
