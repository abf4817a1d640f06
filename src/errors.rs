//! Error Types
//!
//! This module defines the error types used throughout the crate.
//!
//! # Overview
//!
//! The main error type [`TesseraError`] covers all failure modes including:
//! - Animation data loading and decoding errors
//! - Keyframe validation failures detected while building a timeline
//! - Scene setup and rendering errors
//!
//! # Usage
//!
//! All public APIs return [`Result<T>`] which is an alias for `std::result::Result<T, TesseraError>`.
//!
//! ```rust,ignore
//! use tessera::errors::{TesseraError, Result};
//!
//! fn load_animation() -> Result<()> {
//!     // Operations that may fail return Result
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// The main error type for Tessera.
///
/// Malformed animation data is rejected at load or build time so that a
/// timeline never animates incorrectly.
#[derive(Error, Debug)]
pub enum TesseraError {
    // ========================================================================
    // Asset Loading Errors
    // ========================================================================
    /// The requested animation does not exist in the data root.
    #[error("Animation not found: {0}")]
    AnimationNotFound(String),

    /// File I/O error.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    // ========================================================================
    // Keyframe Validation Errors
    // ========================================================================
    /// A property received a keyframe earlier than its previous one.
    #[error("Non-monotonic keyframes on {channel}: frame {frame} follows frame {previous}")]
    NonMonotonicFrame {
        /// The animated channel the keyframe belongs to
        channel: String,
        /// Frame index of the previous keyframe for this channel
        previous: u32,
        /// The offending frame index
        frame: u32,
    },

    /// A keyframe value cannot be animated.
    #[error("Invalid keyframe on {channel} at frame {frame}: {reason}")]
    InvalidKeyframe {
        /// The animated channel the keyframe belongs to
        channel: String,
        /// Frame index of the keyframe
        frame: u32,
        /// What is wrong with the value
        reason: &'static str,
    },

    // ========================================================================
    // Scene & Rendering Errors
    // ========================================================================
    /// Triangle width must be finite and positive.
    #[error("Invalid triangle width {width} (triangle {index})")]
    InvalidTriangle {
        /// Index of the triangle in the animation data
        index: usize,
        /// The rejected width
        width: f32,
    },

    /// A scene node referenced by an animated entity is missing.
    #[error("Scene node missing: {0}")]
    NodeMissing(String),

    /// The render collaborator failed to draw a frame.
    ///
    /// Returned by [`Renderer`](crate::render::Renderer) implementations
    /// backed by a GPU or browser context; [`AnimationApp`](crate::app::AnimationApp)
    /// passes it through unchanged.
    #[error("Render error: {0}")]
    RenderError(String),

    // ========================================================================
    // Platform-Specific Errors
    // ========================================================================
    /// WASM-specific error.
    #[cfg(target_arch = "wasm32")]
    #[error("WASM error: {0}")]
    WasmError(String),
}

/// Alias for `Result<T, TesseraError>`.
pub type Result<T> = std::result::Result<T, TesseraError>;
