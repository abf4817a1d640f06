use slotmap::new_key_type;

use crate::animation::channel::ChannelId;
use crate::animation::values::PropertyValue;

new_key_type! {
    pub struct SegmentKey;
}

/// Lifecycle of a segment: `Pending → Running → Complete`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentState {
    /// Waiting for its start time (or for its predecessor to complete).
    Pending,
    Running,
    Complete,
}

/// A timed transition of one channel between two consecutive keyframes.
///
/// Times are in milliseconds on the global timeline clock, which starts at
/// zero when playback starts.
#[derive(Debug, Clone)]
pub struct Segment {
    pub channel: ChannelId,
    pub from: PropertyValue,
    pub to: PropertyValue,
    pub from_frame: u32,
    pub to_frame: u32,
    pub start_ms: f64,
    pub duration_ms: f64,

    pub(crate) next: Option<SegmentKey>,
    pub(crate) state: SegmentState,
}

impl Segment {
    #[must_use]
    pub(crate) fn new(
        channel: ChannelId,
        from: PropertyValue,
        to: PropertyValue,
        frames: (u32, u32),
        start_ms: f64,
        duration_ms: f64,
    ) -> Self {
        Self {
            channel,
            from,
            to,
            from_frame: frames.0,
            to_frame: frames.1,
            start_ms,
            duration_ms,
            next: None,
            state: SegmentState::Pending,
        }
    }

    /// Completion time; the successor (if any) starts exactly here.
    #[inline]
    #[must_use]
    pub fn end_ms(&self) -> f64 {
        self.start_ms + self.duration_ms
    }

    /// The segment chained after this one.
    #[inline]
    #[must_use]
    pub fn next(&self) -> Option<SegmentKey> {
        self.next
    }

    #[inline]
    #[must_use]
    pub fn state(&self) -> SegmentState {
        self.state
    }

    /// Normalised progress at `time_ms`, clamped to `[0, 1]`.
    #[must_use]
    pub fn progress(&self, time_ms: f64) -> f32 {
        if self.duration_ms <= 0.0 {
            return if time_ms >= self.start_ms { 1.0 } else { 0.0 };
        }
        ((time_ms - self.start_ms) / self.duration_ms).clamp(0.0, 1.0) as f32
    }

    /// Value at `time_ms`. At or after completion this is exactly `to`.
    #[must_use]
    pub fn sample(&self, time_ms: f64) -> PropertyValue {
        if time_ms >= self.end_ms() {
            return self.to;
        }
        self.from.lerp(self.to, self.progress(time_ms))
    }
}
