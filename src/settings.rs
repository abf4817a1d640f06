//! Player Settings
//!
//! Configuration for loading and playing an animation.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use tessera::settings::{PlayerSettings, ViewSettings};
//!
//! // Defaults: 30 fps authoring rate, `library/data/anim3.json`
//! let settings = PlayerSettings::default();
//!
//! // Override selected fields
//! let settings = PlayerSettings {
//!     animation: "anim1".into(),
//!     view: ViewSettings { width: 1280, height: 720, ..Default::default() },
//!     ..Default::default()
//! };
//! ```

use std::path::PathBuf;

use serde::Deserialize;

use crate::errors::Result;

// ---------------------------------------------------------------------------
// FrameRate
// ---------------------------------------------------------------------------

/// Authoring frame rate of the keyframe data.
///
/// Only used to convert frame indices into milliseconds when the timeline is
/// built. Playback itself is time based and independent of the display rate.
///
/// Deserialised values go through [`FrameRate::new`], so an invalid rate in a
/// settings file falls back to the default.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(from = "f64")]
pub struct FrameRate(f64);

impl FrameRate {
    pub const DEFAULT_FPS: f64 = 30.0;

    /// Creates a frame rate. Non-positive or non-finite values fall back to
    /// [`DEFAULT_FPS`](Self::DEFAULT_FPS).
    #[must_use]
    pub fn new(fps: f64) -> Self {
        if fps.is_finite() && fps > 0.0 {
            Self(fps)
        } else {
            log::warn!("Ignoring invalid frame rate {fps}, using {}", Self::DEFAULT_FPS);
            Self(Self::DEFAULT_FPS)
        }
    }

    #[inline]
    #[must_use]
    pub fn fps(self) -> f64 {
        self.0
    }

    /// Length of one authoring frame in milliseconds.
    #[inline]
    #[must_use]
    pub fn ms_per_frame(self) -> f64 {
        1000.0 / self.0
    }

    /// Converts a frame count into milliseconds.
    #[inline]
    #[must_use]
    pub fn frames_to_ms(self, frames: u32) -> f64 {
        f64::from(frames) * 1000.0 / self.0
    }
}

impl From<f64> for FrameRate {
    fn from(fps: f64) -> Self {
        Self::new(fps)
    }
}

impl Default for FrameRate {
    #[inline]
    fn default() -> Self {
        Self(Self::DEFAULT_FPS)
    }
}

// ---------------------------------------------------------------------------
// ViewSettings
// ---------------------------------------------------------------------------

/// Camera projection and viewport configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ViewSettings {
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    /// Viewport width in pixels.
    pub width: u32,
    /// Viewport height in pixels.
    pub height: u32,
    /// Clear color as `0xRRGGBB`.
    pub clear_color: u32,
}

impl ViewSettings {
    /// Aspect ratio of the viewport, `1.0` for a degenerate viewport.
    #[must_use]
    pub fn aspect(&self) -> f32 {
        if self.width == 0 || self.height == 0 {
            return 1.0;
        }
        self.width as f32 / self.height as f32
    }
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            fov_degrees: 39.6,
            near: 0.1,
            far: 10000.0,
            width: 960,
            height: 540,
            clear_color: 0x00_00_00,
        }
    }
}

// ---------------------------------------------------------------------------
// PlayerSettings
// ---------------------------------------------------------------------------

/// Top-level configuration for [`AnimationApp`](crate::app::AnimationApp).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlayerSettings {
    /// Authoring rate of the keyframe data.
    pub frame_rate: FrameRate,
    /// Tick interval used when no display-synchronised callback is available.
    pub fallback_interval_ms: f64,
    /// Directory holding `<animation>.json` files.
    pub data_root: PathBuf,
    /// Name of the animation to play.
    pub animation: String,
    /// Image mapped onto every triangle.
    pub image: String,
    pub view: ViewSettings,
}

impl PlayerSettings {
    /// Parses settings from JSON. Missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            frame_rate: FrameRate::default(),
            fallback_interval_ms: 1000.0 / 60.0,
            data_root: PathBuf::from("library/data"),
            animation: "anim3".to_string(),
            image: "library/img/instagram1.jpg".to_string(),
            view: ViewSettings::default(),
        }
    }
}
