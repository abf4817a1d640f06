//! Animated entity state.
//!
//! Each animated entity owns an explicit state record: its property container
//! plus whatever extra state its update rules need. Update functions write the
//! container's values through to the scene model.

use std::f32::consts::PI;

use glam::Vec3;

use crate::animation::channel::{
    CameraChannel, CameraProperties, PropertyContainer, TriangleChannel, TriangleProperties,
};
use crate::animation::values::PropertyValue;
use crate::scene::camera::Camera;
use crate::scene::node::Node;
use crate::scene::{CameraKey, NodeKey};

#[inline]
fn degrees_to_radians(v: Vec3) -> Vec3 {
    v * (PI / 180.0)
}

/// Rotation bookkeeping for aim/orientation composition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrientationState {
    /// Rotation produced by the most recent look-at.
    pub base_rotation: Vec3,
    /// Set by a target update, consumed by the next orientation update.
    pub reorient_pending: bool,
}

/// The animated camera: position, aim target and orientation offset.
///
/// A target update aims the camera and caches the resulting rotation as the
/// base. The next orientation update adds its offset to the freshly aimed
/// rotation; later ones set `base + offset`, so offsets never accumulate.
#[derive(Debug, Clone)]
pub struct CameraRig {
    pub camera: CameraKey,
    pub properties: CameraProperties,
    orientation: OrientationState,
}

impl CameraRig {
    /// `initial_rotation` is the camera's rotation before any aim.
    #[must_use]
    pub fn new(camera: CameraKey, initial_rotation: Vec3) -> Self {
        Self {
            camera,
            properties: CameraProperties::default(),
            orientation: OrientationState {
                base_rotation: initial_rotation,
                reorient_pending: false,
            },
        }
    }

    #[must_use]
    pub fn orientation_state(&self) -> OrientationState {
        self.orientation
    }

    /// Stores `value` and writes the channel through to `camera`.
    pub fn apply(&mut self, camera: &mut Camera, channel: CameraChannel, value: PropertyValue) {
        self.properties.set(channel, value);
        self.update(camera, channel);
    }

    /// Writes the channel's current value through to `camera`.
    pub fn update(&mut self, camera: &mut Camera, channel: CameraChannel) {
        match channel {
            CameraChannel::Position => self.update_position(camera),
            CameraChannel::Target => self.update_target(camera),
            CameraChannel::Orientation => self.update_orientation(camera),
        }
    }

    fn update_position(&self, camera: &mut Camera) {
        camera.transform.position = self.properties.position;
    }

    fn update_target(&mut self, camera: &mut Camera) {
        self.orientation.base_rotation = camera.look_at(self.properties.target);
        self.orientation.reorient_pending = true;
    }

    fn update_orientation(&mut self, camera: &mut Camera) {
        let offset = degrees_to_radians(self.properties.orientation);
        if self.orientation.reorient_pending {
            camera.transform.rotation += offset;
            self.orientation.reorient_pending = false;
        } else {
            camera.transform.rotation = self.orientation.base_rotation + offset;
        }
    }
}

/// An animated triangle: four independent property groups.
#[derive(Debug, Clone)]
pub struct AnimatedTriangle {
    pub node: NodeKey,
    pub properties: TriangleProperties,
}

impl AnimatedTriangle {
    #[must_use]
    pub fn new(node: NodeKey) -> Self {
        Self {
            node,
            properties: TriangleProperties::default(),
        }
    }

    pub fn apply(&mut self, node: &mut Node, channel: TriangleChannel, value: PropertyValue) {
        self.properties.set(channel, value);
        self.update(node, channel);
    }

    pub fn update(&self, node: &mut Node, channel: TriangleChannel) {
        let p = &self.properties;
        match channel {
            TriangleChannel::Position => node.transform.position = p.position,
            TriangleChannel::Rotation => node.transform.rotation = degrees_to_radians(p.rotation),
            TriangleChannel::Scale => node.transform.scale = p.scale,
            TriangleChannel::Opacity => node.set_opacity(p.opacity),
        }
    }
}
