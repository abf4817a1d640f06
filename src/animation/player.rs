use std::collections::BTreeMap;

use slotmap::SlotMap;

use crate::animation::channel::ChannelId;
use crate::animation::segment::{Segment, SegmentKey, SegmentState};
use crate::animation::timeline::Timeline;
use crate::animation::values::PropertyValue;

/// Receives interpolated property values during [`TimelinePlayer::tick`].
pub trait PropertySink {
    fn apply(&mut self, channel: ChannelId, value: PropertyValue);
}

impl<F> PropertySink for F
where
    F: FnMut(ChannelId, PropertyValue),
{
    fn apply(&mut self, channel: ChannelId, value: PropertyValue) {
        self(channel, value);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    /// Built but not started.
    Idle,
    Playing,
    /// Every chain has completed. Values stay at their final keyframe.
    Finished,
}

/// Drives a [`Timeline`] from the host's frame callback.
///
/// Active segments are kept in one map keyed by channel, so each channel has
/// at most one active segment and updates within a tick are applied in
/// channel order (camera target before camera orientation).
pub struct TimelinePlayer {
    timeline: Timeline,
    clock_ms: f64,
    state: PlaybackState,
    active: BTreeMap<ChannelId, SegmentKey>,
}

impl TimelinePlayer {
    #[must_use]
    pub fn new(timeline: Timeline) -> Self {
        Self {
            timeline,
            clock_ms: 0.0,
            state: PlaybackState::Idle,
            active: BTreeMap::new(),
        }
    }

    /// Starts every chain head. The clock starts at zero; heads wait until
    /// their own start time.
    pub fn start(&mut self) {
        if self.state != PlaybackState::Idle {
            log::warn!("Timeline already started, ignoring start()");
            return;
        }

        for &head in &self.timeline.heads {
            let channel = self.timeline.segments[head].channel;
            if let Some(replaced) = self.active.insert(channel, head) {
                log::warn!("Channel {channel} has more than one chain; dropping {replaced:?}");
            }
        }

        self.state = if self.active.is_empty() {
            PlaybackState::Finished
        } else {
            PlaybackState::Playing
        };

        log::info!(
            "Playback started: {} channels, {:.1} ms",
            self.active.len(),
            self.timeline.end_ms()
        );
    }

    /// Advances the clock by `dt_ms` and pushes the value of every active
    /// segment into `sink`.
    ///
    /// A segment that completes emits its exact target value, then its
    /// successor continues from the predecessor's completion time. Several
    /// segments of one chain may complete within a single tick.
    pub fn tick<S>(&mut self, dt_ms: f64, sink: &mut S)
    where
        S: PropertySink + ?Sized,
    {
        if self.state != PlaybackState::Playing {
            return;
        }

        if dt_ms.is_finite() && dt_ms > 0.0 {
            self.clock_ms += dt_ms;
        }

        let clock = self.clock_ms;
        let segments = &mut self.timeline.segments;
        self.active
            .retain(|_, key| advance(segments, key, clock, sink));

        if self.active.is_empty() {
            self.state = PlaybackState::Finished;
            log::info!("Playback finished at {clock:.1} ms");
        }
    }

    #[inline]
    #[must_use]
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    #[inline]
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.state == PlaybackState::Finished
    }

    /// Milliseconds since [`start`](Self::start).
    #[inline]
    #[must_use]
    pub fn clock_ms(&self) -> f64 {
        self.clock_ms
    }

    #[must_use]
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    #[must_use]
    pub fn segment_state(&self, key: SegmentKey) -> Option<SegmentState> {
        self.timeline.segments.get(key).map(Segment::state)
    }

    /// Channels with a pending or running segment, in update order.
    pub fn active_channels(&self) -> impl Iterator<Item = ChannelId> + '_ {
        self.active.keys().copied()
    }

    /// The segment currently driving `channel`.
    #[must_use]
    pub fn active_segment(&self, channel: ChannelId) -> Option<SegmentKey> {
        self.active.get(&channel).copied()
    }
}

/// Steps one chain to `clock`. Returns `false` once the chain is exhausted.
fn advance<S>(
    segments: &mut SlotMap<SegmentKey, Segment>,
    key: &mut SegmentKey,
    clock: f64,
    sink: &mut S,
) -> bool
where
    S: PropertySink + ?Sized,
{
    loop {
        let segment = &mut segments[*key];

        if segment.state == SegmentState::Pending {
            if clock < segment.start_ms {
                return true;
            }
            segment.state = SegmentState::Running;
        }

        if clock < segment.end_ms() {
            sink.apply(segment.channel, segment.sample(clock));
            return true;
        }

        segment.state = SegmentState::Complete;
        sink.apply(segment.channel, segment.to);

        let Some(next) = segment.next else {
            return false;
        };
        segments[next].state = SegmentState::Running;
        *key = next;
    }
}
