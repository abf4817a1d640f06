use glam::Vec4;
use slotmap::SlotMap;

use crate::scene::camera::Camera;
use crate::scene::node::Node;
use crate::scene::{CameraKey, NodeKey};

/// Scene container.
///
/// Pure data: renderable nodes, cameras and the clear color. Renderers only
/// read it.
pub struct Scene {
    pub nodes: SlotMap<NodeKey, Node>,
    /// Draw order.
    pub node_order: Vec<NodeKey>,
    pub cameras: SlotMap<CameraKey, Camera>,
    pub active_camera: Option<CameraKey>,
    pub background: Vec4,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            node_order: Vec::new(),
            cameras: SlotMap::with_key(),
            active_camera: None,
            background: Vec4::new(0.0, 0.0, 0.0, 1.0),
        }
    }

    pub fn add_node(&mut self, node: Node) -> NodeKey {
        let key = self.nodes.insert(node);
        self.node_order.push(key);
        key
    }

    pub fn remove_node(&mut self, key: NodeKey) -> Option<Node> {
        let node = self.nodes.remove(key)?;
        self.node_order.retain(|&k| k != key);
        Some(node)
    }

    #[inline]
    #[must_use]
    pub fn get_node(&self, key: NodeKey) -> Option<&Node> {
        self.nodes.get(key)
    }

    #[inline]
    pub fn get_node_mut(&mut self, key: NodeKey) -> Option<&mut Node> {
        self.nodes.get_mut(key)
    }

    /// Nodes in draw order.
    pub fn iter_nodes(&self) -> impl Iterator<Item = (NodeKey, &Node)> + '_ {
        self.node_order
            .iter()
            .filter_map(|&k| self.nodes.get(k).map(|n| (k, n)))
    }

    /// Adds a camera; the first camera added becomes the active one.
    pub fn add_camera(&mut self, camera: Camera) -> CameraKey {
        let key = self.cameras.insert(camera);
        if self.active_camera.is_none() {
            self.active_camera = Some(key);
        }
        key
    }

    #[inline]
    #[must_use]
    pub fn camera(&self, key: CameraKey) -> Option<&Camera> {
        self.cameras.get(key)
    }

    #[inline]
    pub fn camera_mut(&mut self, key: CameraKey) -> Option<&mut Camera> {
        self.cameras.get_mut(key)
    }

    #[must_use]
    pub fn active_camera(&self) -> Option<&Camera> {
        self.active_camera.and_then(|k| self.cameras.get(k))
    }

    /// Sets the clear color from `0xRRGGBB`.
    pub fn set_background_hex(&mut self, hex: u32) {
        let channel = |shift: u32| ((hex >> shift) & 0xFF) as f32 / 255.0;
        self.background = Vec4::new(channel(16), channel(8), channel(0), 1.0);
    }

    /// Refreshes node matrices and camera view matrices.
    pub fn update_matrices(&mut self) {
        for node in self.nodes.values_mut() {
            node.transform.update_local_matrix();
        }
        for camera in self.cameras.values_mut() {
            camera.update_view_matrix();
        }
    }
}
