use glam::Vec3;

/// Values that can be blended between two keyframes.
pub trait Interpolatable: Copy + Sized {
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self;
}

impl Interpolatable for f32 {
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self {
        start + (end - start) * t
    }
}

impl Interpolatable for Vec3 {
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self {
        start.lerp(end, t)
    }
}

/// The current value of one animated property.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PropertyValue {
    Vector3(Vec3),
    Scalar(f32),
}

impl PropertyValue {
    /// Blends towards `end`. Mismatched kinds snap to `end`.
    #[must_use]
    pub fn lerp(self, end: Self, t: f32) -> Self {
        match (self, end) {
            (Self::Vector3(a), Self::Vector3(b)) => Self::Vector3(Vec3::interpolate_linear(a, b, t)),
            (Self::Scalar(a), Self::Scalar(b)) => Self::Scalar(f32::interpolate_linear(a, b, t)),
            (_, end) => end,
        }
    }

    #[must_use]
    pub fn as_vec3(self) -> Option<Vec3> {
        match self {
            Self::Vector3(v) => Some(v),
            Self::Scalar(_) => None,
        }
    }

    #[must_use]
    pub fn as_scalar(self) -> Option<f32> {
        match self {
            Self::Scalar(v) => Some(v),
            Self::Vector3(_) => None,
        }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        match self {
            Self::Vector3(v) => v.is_finite(),
            Self::Scalar(v) => v.is_finite(),
        }
    }
}

impl From<Vec3> for PropertyValue {
    fn from(v: Vec3) -> Self {
        Self::Vector3(v)
    }
}

impl From<f32> for PropertyValue {
    fn from(v: f32) -> Self {
        Self::Scalar(v)
    }
}
