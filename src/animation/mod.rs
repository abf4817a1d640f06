//! Keyframe animation: timeline construction and playback.
//!
//! - [`TimelineBuilder`] converts per-entity keyframes into chained segments.
//! - [`TimelinePlayer`] advances the chains every frame and feeds values to a
//!   [`PropertySink`].

pub mod channel;
pub mod keyframe;
pub mod player;
pub mod segment;
pub mod timeline;
pub mod values;

pub use channel::{
    CameraChannel, CameraProperties, ChannelId, PropertyContainer, TriangleChannel,
    TriangleProperties,
};
pub use keyframe::{CameraKeyframe, KeyValue, KeyframeEntry, PartialVec3, TriangleKeyframe};
pub use player::{PlaybackState, PropertySink, TimelinePlayer};
pub use segment::{Segment, SegmentKey, SegmentState};
pub use timeline::{Timeline, TimelineBuilder};
pub use values::{Interpolatable, PropertyValue};
