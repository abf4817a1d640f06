//! Keyframe entries as authored in animation data files.
//!
//! Each entry carries a frame index plus any subset of the animated
//! properties of one entity. Vector properties may omit individual
//! components; an omitted component keeps the property's previous value.

use glam::Vec3;
use serde::{Deserialize, Deserializer};

use crate::animation::channel::{CameraChannel, TriangleChannel};
use crate::animation::values::PropertyValue;

/// Reads a frame index written either as an integer or as an integral
/// number such as `30.0`.
fn deserialize_frame<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= f64::from(u32::MAX) {
        Ok(value as u32)
    } else {
        Err(serde::de::Error::custom(format!(
            "frame must be a non-negative whole number, got {value}"
        )))
    }
}

/// A `{x, y, z}` record where any component may be missing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct PartialVec3 {
    #[serde(default)]
    pub x: Option<f32>,
    #[serde(default)]
    pub y: Option<f32>,
    #[serde(default)]
    pub z: Option<f32>,
}

impl PartialVec3 {
    #[must_use]
    pub fn full(v: Vec3) -> Self {
        Self {
            x: Some(v.x),
            y: Some(v.y),
            z: Some(v.z),
        }
    }

    /// Fills missing components from `base`.
    #[must_use]
    pub fn resolve(self, base: Vec3) -> Vec3 {
        Vec3::new(
            self.x.unwrap_or(base.x),
            self.y.unwrap_or(base.y),
            self.z.unwrap_or(base.z),
        )
    }
}

impl From<Vec3> for PartialVec3 {
    fn from(v: Vec3) -> Self {
        Self::full(v)
    }
}

/// A `{val}` record, used for opacity.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ScalarKey {
    pub val: f32,
}

/// The authored value of one property at one keyframe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KeyValue {
    Vector3(PartialVec3),
    Scalar(f32),
}

impl KeyValue {
    /// Produces the full property value, taking missing parts from `previous`.
    #[must_use]
    pub fn resolve(self, previous: PropertyValue) -> PropertyValue {
        match (self, previous) {
            (Self::Vector3(partial), PropertyValue::Vector3(base)) => {
                PropertyValue::Vector3(partial.resolve(base))
            }
            (Self::Vector3(partial), PropertyValue::Scalar(_)) => {
                PropertyValue::Vector3(partial.resolve(Vec3::ZERO))
            }
            (Self::Scalar(v), _) => PropertyValue::Scalar(v),
        }
    }
}

/// One keyframe of an entity's animation.
///
/// Implementors expose their properties through a fixed channel enumeration.
pub trait KeyframeEntry {
    type Channel: Copy;

    fn frame(&self) -> u32;

    /// The authored value for `channel`, if this entry specifies one.
    fn key(&self, channel: Self::Channel) -> Option<KeyValue>;
}

/// A camera keyframe: `{frame, position?, target?, orientation?}`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CameraKeyframe {
    #[serde(deserialize_with = "deserialize_frame")]
    pub frame: u32,
    #[serde(default)]
    pub position: Option<PartialVec3>,
    #[serde(default)]
    pub target: Option<PartialVec3>,
    /// Orientation offset in degrees, applied on top of the aimed rotation.
    #[serde(default)]
    pub orientation: Option<PartialVec3>,
}

impl CameraKeyframe {
    #[must_use]
    pub fn at(frame: u32) -> Self {
        Self {
            frame,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_position(mut self, v: impl Into<PartialVec3>) -> Self {
        self.position = Some(v.into());
        self
    }

    #[must_use]
    pub fn with_target(mut self, v: impl Into<PartialVec3>) -> Self {
        self.target = Some(v.into());
        self
    }

    #[must_use]
    pub fn with_orientation(mut self, v: impl Into<PartialVec3>) -> Self {
        self.orientation = Some(v.into());
        self
    }
}

impl KeyframeEntry for CameraKeyframe {
    type Channel = CameraChannel;

    fn frame(&self) -> u32 {
        self.frame
    }

    fn key(&self, channel: CameraChannel) -> Option<KeyValue> {
        let v = match channel {
            CameraChannel::Position => self.position,
            CameraChannel::Target => self.target,
            CameraChannel::Orientation => self.orientation,
        };
        v.map(KeyValue::Vector3)
    }
}

/// A triangle keyframe: `{frame, position?, rotation?, scale?, opacity?}`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TriangleKeyframe {
    #[serde(deserialize_with = "deserialize_frame")]
    pub frame: u32,
    #[serde(default)]
    pub position: Option<PartialVec3>,
    /// Rotation in degrees.
    #[serde(default)]
    pub rotation: Option<PartialVec3>,
    #[serde(default)]
    pub scale: Option<PartialVec3>,
    #[serde(default)]
    pub opacity: Option<ScalarKey>,
}

impl TriangleKeyframe {
    #[must_use]
    pub fn at(frame: u32) -> Self {
        Self {
            frame,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_position(mut self, v: impl Into<PartialVec3>) -> Self {
        self.position = Some(v.into());
        self
    }

    #[must_use]
    pub fn with_rotation(mut self, v: impl Into<PartialVec3>) -> Self {
        self.rotation = Some(v.into());
        self
    }

    #[must_use]
    pub fn with_scale(mut self, v: impl Into<PartialVec3>) -> Self {
        self.scale = Some(v.into());
        self
    }

    #[must_use]
    pub fn with_opacity(mut self, val: f32) -> Self {
        self.opacity = Some(ScalarKey { val });
        self
    }
}

impl KeyframeEntry for TriangleKeyframe {
    type Channel = TriangleChannel;

    fn frame(&self) -> u32 {
        self.frame
    }

    fn key(&self, channel: TriangleChannel) -> Option<KeyValue> {
        match channel {
            TriangleChannel::Position => self.position.map(KeyValue::Vector3),
            TriangleChannel::Rotation => self.rotation.map(KeyValue::Vector3),
            TriangleChannel::Scale => self.scale.map(KeyValue::Vector3),
            TriangleChannel::Opacity => self.opacity.map(|o| KeyValue::Scalar(o.val)),
        }
    }
}
