//! Timeline construction.
//!
//! [`TimelineBuilder`] turns sparse per-property keyframes into chains of
//! [`Segment`]s. For every property the first keyframe only seeds the value;
//! each following keyframe adds one segment chained after the previous one.
//! The first segment of a chain carries an explicit start time so that all
//! chains share one clock starting at zero.

use slotmap::SlotMap;

use crate::animation::channel::{ChannelId, PropertyContainer};
use crate::animation::keyframe::{KeyValue, KeyframeEntry};
use crate::animation::segment::{Segment, SegmentKey};
use crate::animation::values::PropertyValue;
use crate::errors::{Result, TesseraError};
use crate::settings::FrameRate;

/// Per-channel bookkeeping while walking keyframes.
#[derive(Debug, Clone, Copy)]
struct ChannelHistory {
    previous_frame: Option<u32>,
    previous_segment: Option<SegmentKey>,
    /// Value declared by the most recent keyframe.
    declared: PropertyValue,
}

/// Accumulates the tracks of all animated entities into one [`Timeline`].
pub struct TimelineBuilder {
    frame_rate: FrameRate,
    segments: SlotMap<SegmentKey, Segment>,
    heads: Vec<SegmentKey>,
}

impl TimelineBuilder {
    #[must_use]
    pub fn new(frame_rate: FrameRate) -> Self {
        Self {
            frame_rate,
            segments: SlotMap::with_key(),
            heads: Vec::new(),
        }
    }

    /// Adds one entity's keyframes.
    ///
    /// Seed values are written into `properties`; `bind` maps each of the
    /// entity's channels to the global channel that receives its updates.
    /// Returns the first segments created for this entity.
    ///
    /// Nothing is added if the keyframes are rejected.
    pub fn add_track<P, E, F>(
        &mut self,
        properties: &mut P,
        entries: &[E],
        bind: F,
    ) -> Result<Vec<SegmentKey>>
    where
        P: PropertyContainer,
        E: KeyframeEntry<Channel = P::Channel>,
        F: Fn(P::Channel) -> ChannelId,
    {
        validate(entries, P::CHANNELS, &bind)?;

        let mut history: Vec<ChannelHistory> = P::CHANNELS
            .iter()
            .map(|&channel| ChannelHistory {
                previous_frame: None,
                previous_segment: None,
                declared: properties.get(channel),
            })
            .collect();
        let mut heads = Vec::new();

        for entry in entries {
            let frame = entry.frame();

            for (record, &channel) in history.iter_mut().zip(P::CHANNELS) {
                let Some(key) = entry.key(channel) else {
                    continue;
                };
                let value = key.resolve(record.declared);

                if let Some(previous_frame) = record.previous_frame {
                    let duration_ms = self.frame_rate.frames_to_ms(frame - previous_frame);
                    let start_ms = match record.previous_segment {
                        Some(prev) => self.segments[prev].end_ms(),
                        None => self.frame_rate.frames_to_ms(previous_frame),
                    };

                    let segment = self.segments.insert(Segment::new(
                        bind(channel),
                        record.declared,
                        value,
                        (previous_frame, frame),
                        start_ms,
                        duration_ms,
                    ));

                    match record.previous_segment {
                        Some(prev) => self.segments[prev].next = Some(segment),
                        None => heads.push(segment),
                    }
                    record.previous_segment = Some(segment);
                } else {
                    properties.set(channel, value);
                }

                record.previous_frame = Some(frame);
                record.declared = value;
            }
        }

        self.heads.extend_from_slice(&heads);
        Ok(heads)
    }

    #[must_use]
    pub fn build(self) -> Timeline {
        let end_ms = self
            .segments
            .values()
            .map(Segment::end_ms)
            .fold(0.0_f64, f64::max);

        log::debug!(
            "Built timeline: {} chains, {} segments, {:.1} ms",
            self.heads.len(),
            self.segments.len(),
            end_ms
        );

        Timeline {
            segments: self.segments,
            heads: self.heads,
            end_ms,
        }
    }
}

/// Rejects keyframes that would animate incorrectly.
fn validate<E, C, F>(entries: &[E], channels: &[C], bind: &F) -> Result<()>
where
    E: KeyframeEntry<Channel = C>,
    C: Copy,
    F: Fn(C) -> ChannelId,
{
    for &channel in channels {
        let mut previous: Option<u32> = None;
        for entry in entries {
            let Some(key) = entry.key(channel) else {
                continue;
            };
            let frame = entry.frame();

            if let Some(previous) = previous
                && frame < previous
            {
                return Err(TesseraError::NonMonotonicFrame {
                    channel: bind(channel).to_string(),
                    previous,
                    frame,
                });
            }

            let finite = match key {
                KeyValue::Vector3(v) => {
                    [v.x, v.y, v.z].iter().flatten().all(|c| c.is_finite())
                }
                KeyValue::Scalar(v) => v.is_finite(),
            };
            if !finite {
                return Err(TesseraError::InvalidKeyframe {
                    channel: bind(channel).to_string(),
                    frame,
                    reason: "value is not finite",
                });
            }

            previous = Some(frame);
        }
    }
    Ok(())
}

/// Every segment of an animation, plus the chain heads that must be started.
#[derive(Debug, Clone)]
pub struct Timeline {
    pub(crate) segments: SlotMap<SegmentKey, Segment>,
    pub(crate) heads: Vec<SegmentKey>,
    end_ms: f64,
}

impl Timeline {
    /// The first segment of every chain, one per animated channel.
    #[must_use]
    pub fn heads(&self) -> &[SegmentKey] {
        &self.heads
    }

    #[must_use]
    pub fn segment(&self, key: SegmentKey) -> Option<&Segment> {
        self.segments.get(key)
    }

    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Completion time of the last segment.
    #[must_use]
    pub fn end_ms(&self) -> f64 {
        self.end_ms
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Segments of `channel` in playback order.
    pub fn chain(&self, channel: ChannelId) -> impl Iterator<Item = &Segment> + '_ {
        let head = self
            .heads
            .iter()
            .copied()
            .find(|&k| self.segments[k].channel == channel);
        std::iter::successors(head.map(|k| &self.segments[k]), |s| {
            s.next.map(|k| &self.segments[k])
        })
    }
}
