use glam::{Mat4, Vec3, Vec4};

use crate::errors::Result;
use crate::render::Renderer;
use crate::scene::{Camera, NodeKey, Scene};

/// One mesh queued for drawing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawItem {
    pub node: NodeKey,
    pub model_matrix: Mat4,
    pub opacity: f32,
    /// Squared distance from the camera, used for back-to-front sorting.
    pub distance_sq: f32,
}

/// What the last frame would have drawn.
#[derive(Debug, Clone, Default)]
pub struct FrameStats {
    pub frames: u64,
    pub clear_color: Vec4,
    pub view_projection: Mat4,
    /// Back to front.
    pub draw_list: Vec<DrawItem>,
}

/// A renderer that prepares draw lists but never submits them.
#[derive(Debug, Default)]
pub struct HeadlessRenderer {
    size: (u32, u32),
    stats: FrameStats,
}

impl HeadlessRenderer {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            size: (width, height),
            stats: FrameStats::default(),
        }
    }

    #[must_use]
    pub fn size(&self) -> (u32, u32) {
        self.size
    }

    #[must_use]
    pub fn stats(&self) -> &FrameStats {
        &self.stats
    }
}

impl Renderer for HeadlessRenderer {
    fn resize(&mut self, width: u32, height: u32) {
        self.size = (width, height);
    }

    fn render(&mut self, scene: &Scene, camera: &Camera) -> Result<()> {
        let camera_position = camera.transform.position;

        let mut draw_list: Vec<DrawItem> = scene
            .iter_nodes()
            .filter(|(_, node)| node.visible)
            .filter_map(|(key, node)| {
                let mesh = node.mesh.as_ref()?;
                if !mesh.is_visible() || node.transform.scale == Vec3::ZERO {
                    return None;
                }
                let model_matrix = node.transform.local_matrix_as_mat4();
                let position = model_matrix.w_axis.truncate();
                Some(DrawItem {
                    node: key,
                    model_matrix,
                    opacity: mesh.material.opacity,
                    distance_sq: position.distance_squared(camera_position),
                })
            })
            .collect();

        // Transparent meshes: farthest first.
        draw_list.sort_by(|a, b| b.distance_sq.total_cmp(&a.distance_sq));

        self.stats.frames += 1;
        self.stats.clear_color = scene.background;
        self.stats.view_projection = camera.view_projection_matrix();
        self.stats.draw_list = draw_list;

        log::trace!(
            "Frame {}: {} draw items ({}x{})",
            self.stats.frames,
            self.stats.draw_list.len(),
            self.size.0,
            self.size.1
        );
        Ok(())
    }
}
