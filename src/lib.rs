#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

//! Keyframe-driven animation of a camera and a set of textured triangles.
//!
//! Frame-indexed keyframes are compiled into chains of time-based
//! interpolation segments ([`animation::TimelineBuilder`]), played back
//! against a millisecond clock ([`animation::TimelinePlayer`]) and written
//! into a small scene model ([`scene::AnimatedScene`]) that any
//! [`render::Renderer`] can draw.

pub mod animation;
pub mod app;
pub mod assets;
pub mod errors;
pub mod render;
pub mod resources;
pub mod scene;
pub mod settings;
pub mod utils;

pub use animation::{
    ChannelId, PlaybackState, PropertySink, PropertyValue, Timeline, TimelineBuilder,
    TimelinePlayer,
};
pub use app::{AnimationApp, FrameSource};
pub use assets::{AnimationData, AnimationLibrary, AssetReader, FileAssetReader, MemoryAssetReader};
pub use errors::{Result, TesseraError};
pub use render::{HeadlessRenderer, Renderer};
pub use resources::{Material, Mesh, TriangleGeometry, create_triangle};
pub use scene::{AnimatedScene, Camera, CameraRig, Node, Scene};
pub use settings::{FrameRate, PlayerSettings, ViewSettings};

pub mod prelude {
    pub use crate::animation::{
        CameraKeyframe, ChannelId, PartialVec3, PlaybackState, PropertySink, PropertyValue,
        Timeline, TimelineBuilder, TimelinePlayer, TriangleKeyframe,
    };
    pub use crate::app::{AnimationApp, FrameSource};
    pub use crate::assets::{AnimationData, AnimationLibrary, AssetReader};
    pub use crate::errors::{Result, TesseraError};
    pub use crate::render::{HeadlessRenderer, Renderer};
    pub use crate::scene::{AnimatedScene, Camera, Scene};
    pub use crate::settings::{FrameRate, PlayerSettings};
    pub use glam::{Vec3, Vec4};
}
