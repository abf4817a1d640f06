//! Animated channels.
//!
//! A channel is one animated property of one entity. Each entity type has a
//! fixed enumeration of channels and a typed container holding their current
//! values.

use std::fmt;

use glam::Vec3;

use crate::animation::values::PropertyValue;

/// Camera property groups, in per-tick update order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CameraChannel {
    Position,
    /// Look-at point.
    Target,
    /// Offset in degrees on top of the aimed rotation.
    Orientation,
}

/// Triangle property groups, in per-tick update order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TriangleChannel {
    Position,
    /// Rotation in degrees.
    Rotation,
    Scale,
    Opacity,
}

/// Identifies an animated property across the whole animation.
///
/// The ordering is the order in which updates are applied within one tick:
/// all camera channels first (position, target, orientation), then each
/// triangle in index order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ChannelId {
    Camera(CameraChannel),
    Triangle(usize, TriangleChannel),
}

impl fmt::Display for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Camera(c) => write!(f, "camera.{c:?}"),
            Self::Triangle(i, c) => write!(f, "triangle[{i}].{c:?}"),
        }
    }
}

/// Typed storage for an entity's animated properties.
pub trait PropertyContainer {
    type Channel: Copy + fmt::Debug + 'static;

    /// Every channel of this entity type, in update order.
    const CHANNELS: &'static [Self::Channel];

    fn get(&self, channel: Self::Channel) -> PropertyValue;

    fn set(&mut self, channel: Self::Channel, value: PropertyValue);
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CameraProperties {
    pub position: Vec3,
    pub target: Vec3,
    /// Degrees.
    pub orientation: Vec3,
}

impl PropertyContainer for CameraProperties {
    type Channel = CameraChannel;

    const CHANNELS: &'static [CameraChannel] = &[
        CameraChannel::Position,
        CameraChannel::Target,
        CameraChannel::Orientation,
    ];

    fn get(&self, channel: CameraChannel) -> PropertyValue {
        match channel {
            CameraChannel::Position => self.position.into(),
            CameraChannel::Target => self.target.into(),
            CameraChannel::Orientation => self.orientation.into(),
        }
    }

    fn set(&mut self, channel: CameraChannel, value: PropertyValue) {
        let Some(v) = value.as_vec3() else {
            log::warn!("Ignoring scalar value for camera {channel:?}");
            return;
        };
        match channel {
            CameraChannel::Position => self.position = v,
            CameraChannel::Target => self.target = v,
            CameraChannel::Orientation => self.orientation = v,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangleProperties {
    pub position: Vec3,
    /// Degrees.
    pub rotation: Vec3,
    pub scale: Vec3,
    pub opacity: f32,
}

impl Default for TriangleProperties {
    /// Triangles start collapsed (zero scale) and fully opaque until their
    /// first keyframe says otherwise.
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ZERO,
            opacity: 1.0,
        }
    }
}

impl PropertyContainer for TriangleProperties {
    type Channel = TriangleChannel;

    const CHANNELS: &'static [TriangleChannel] = &[
        TriangleChannel::Position,
        TriangleChannel::Rotation,
        TriangleChannel::Scale,
        TriangleChannel::Opacity,
    ];

    fn get(&self, channel: TriangleChannel) -> PropertyValue {
        match channel {
            TriangleChannel::Position => self.position.into(),
            TriangleChannel::Rotation => self.rotation.into(),
            TriangleChannel::Scale => self.scale.into(),
            TriangleChannel::Opacity => self.opacity.into(),
        }
    }

    fn set(&mut self, channel: TriangleChannel, value: PropertyValue) {
        match (channel, value) {
            (TriangleChannel::Position, PropertyValue::Vector3(v)) => self.position = v,
            (TriangleChannel::Rotation, PropertyValue::Vector3(v)) => self.rotation = v,
            (TriangleChannel::Scale, PropertyValue::Vector3(v)) => self.scale = v,
            (TriangleChannel::Opacity, PropertyValue::Scalar(v)) => self.opacity = v,
            (channel, value) => log::warn!("Ignoring {value:?} for triangle {channel:?}"),
        }
    }
}
