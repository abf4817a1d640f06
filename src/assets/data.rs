//! Animation data file format.
//!
//! Frame indices are non-negative whole numbers; `30` and `30.0` are both
//! accepted.
//!
//! ```json
//! {
//!   "duration": 120,
//!   "camera": { "frameData": [ { "frame": 0, "position": {"x":0,"y":0,"z":500} } ] },
//!   "triangles": [ { "width": 100, "frameData": [ { "frame": 0, "opacity": {"val": 1} } ] } ]
//! }
//! ```

use serde::Deserialize;

use crate::animation::keyframe::{CameraKeyframe, TriangleKeyframe};
use crate::errors::{Result, TesseraError};
use crate::settings::FrameRate;

/// One animation: camera keyframes plus a list of triangles.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AnimationData {
    /// Authored length in frames.
    pub duration: f64,
    pub camera: CameraTrack,
    pub triangles: Vec<TriangleTrack>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CameraTrack {
    pub frame_data: Vec<CameraKeyframe>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriangleTrack {
    pub width: f32,
    pub frame_data: Vec<TriangleKeyframe>,
}

impl AnimationData {
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let data: Self = serde_json::from_slice(bytes)?;
        data.validate()?;
        Ok(data)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Self::from_slice(json.as_bytes())
    }

    /// Authored length in milliseconds.
    #[must_use]
    pub fn duration_ms(&self, frame_rate: FrameRate) -> f64 {
        self.duration * frame_rate.ms_per_frame()
    }

    fn validate(&self) -> Result<()> {
        for (index, triangle) in self.triangles.iter().enumerate() {
            if !(triangle.width.is_finite() && triangle.width > 0.0) {
                return Err(TesseraError::InvalidTriangle {
                    index,
                    width: triangle.width,
                });
            }
        }
        Ok(())
    }
}
